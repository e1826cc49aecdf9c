//! Extraction handle owning the single background task.

use std::panic;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Arc;
use std::sync::Condvar;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use crate::Bundle;
use crate::Completion;
use crate::ExtractionError;
use crate::LocaleId;
use crate::PackageInfoSource;
use crate::Result;
use crate::SelectionConfig;
use crate::extraction::ExtractionTask;
use crate::extraction::purge;
use crate::types::OutputDir;

const WORKER_THREAD_NAME: &str = "pak-extractor";

#[derive(Debug)]
enum Phase {
    Idle,
    Running,
    Finished(Completion),
}

#[derive(Debug)]
struct State {
    config: SelectionConfig,
    phase: Phase,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    finished: Condvar,
    cancel: Arc<AtomicBool>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn finish(&self, completion: Completion) {
        let mut state = self.lock();
        state.phase = Phase::Finished(completion);
        self.finished.notify_all();
    }
}

/// Owns at most one extraction task for an output directory.
///
/// Construct one per process at the composition root and hand out
/// references. [`start_extraction`](Self::start_extraction) is idempotent;
/// [`wait_for_completion`](Self::wait_for_completion) blocks until the task is
/// terminal and guarantees the directory is either fully populated or purged.
///
/// # Examples
///
/// ```no_run
/// use pakcache_core::DirBundle;
/// use pakcache_core::PackageInfo;
/// use pakcache_core::ResourceExtractor;
/// use pakcache_core::SelectionConfig;
/// use std::sync::Arc;
///
/// # fn main() -> pakcache_core::Result<()> {
/// let extractor = ResourceExtractor::new(
///     "/var/lib/app",
///     Arc::new(DirBundle::new("/opt/app/assets")),
///     Arc::new(PackageInfo::new("1200", 1_700_000_000_000)),
///     "fr-CA",
/// )
/// .with_selection_config(SelectionConfig::default().with_mandatory(["resources.pak"]))?;
///
/// extractor.start_extraction();
/// // ... other startup work ...
/// if extractor.wait_for_completion().is_success() {
///     println!("resources ready in {}", extractor.output_dir().display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ResourceExtractor {
    output_dir: OutputDir,
    locale: LocaleId,
    bundle: Arc<dyn Bundle>,
    package: Arc<dyn PackageInfoSource>,
    shared: Arc<Shared>,
}

impl ResourceExtractor {
    /// Creates an idle extractor writing to `<app_data_root>/paks`.
    pub fn new(
        app_data_root: impl AsRef<Path>,
        bundle: Arc<dyn Bundle>,
        package: Arc<dyn PackageInfoSource>,
        locale: impl Into<LocaleId>,
    ) -> Self {
        Self {
            output_dir: OutputDir::resolve(app_data_root),
            locale: locale.into(),
            bundle,
            package,
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    config: SelectionConfig::default(),
                    phase: Phase::Idle,
                }),
                finished: Condvar::new(),
                cancel: Arc::new(AtomicBool::new(false)),
            }),
        }
    }

    /// Sets the selection configuration while constructing the extractor.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::ConfigLocked`] once a task has been started.
    pub fn with_selection_config(self, config: SelectionConfig) -> Result<Self> {
        self.set_selection_config(config)?;
        Ok(self)
    }

    /// Replaces the selection configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::ConfigLocked`] once a task has been started.
    pub fn set_selection_config(&self, config: SelectionConfig) -> Result<()> {
        let mut state = self.shared.lock();
        if !matches!(state.phase, Phase::Idle) {
            return Err(ExtractionError::ConfigLocked);
        }
        state.config = config;
        Ok(())
    }

    /// Returns a copy of the current selection configuration.
    pub fn selection_config(&self) -> SelectionConfig {
        self.shared.lock().config.clone()
    }

    /// The cache directory this extractor populates.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }

    /// Launches the extraction task on a background worker.
    ///
    /// Does nothing if a task was already started, whether it is still
    /// running or finished. A finished task is never retried.
    pub fn start_extraction(&self) {
        let mut state = self.shared.lock();
        if !matches!(state.phase, Phase::Idle) {
            return;
        }
        state.phase = Phase::Running;

        let task = ExtractionTask::new(
            self.output_dir.clone(),
            state.config.clone(),
            self.locale.clone(),
            Arc::clone(&self.bundle),
            Arc::clone(&self.package),
        )
        .with_cancel_flag(Arc::clone(&self.shared.cancel));
        let shared = Arc::clone(&self.shared);

        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let completion = match panic::catch_unwind(AssertUnwindSafe(|| task.run())) {
                    Ok(Ok(report)) => Completion::Succeeded(report),
                    Ok(Err(ExtractionError::Cancelled)) => Completion::Cancelled,
                    Ok(Err(e)) => Completion::Failed {
                        reason: e.to_string(),
                    },
                    Err(_) => {
                        log::error!("Resource extraction worker panicked");
                        Completion::Aborted
                    }
                };
                shared.finish(completion);
            });

        if let Err(e) = spawned {
            log::error!("Unable to spawn resource extraction worker: {e}");
            state.phase = Phase::Finished(Completion::Aborted);
            self.shared.finished.notify_all();
        }
    }

    /// Requests cancellation; the task stops before its next copy.
    ///
    /// Cancelling before [`start_extraction`](Self::start_extraction) makes
    /// the eventual task end as [`Completion::Cancelled`] without copying.
    pub fn cancel(&self) {
        self.shared.cancel.store(true, Ordering::Release);
    }

    /// Returns `true` once a task has been started.
    pub fn is_started(&self) -> bool {
        !matches!(self.shared.lock().phase, Phase::Idle)
    }

    /// Returns the terminal state without blocking, if reached.
    pub fn completion(&self) -> Option<Completion> {
        match &self.shared.lock().phase {
            Phase::Finished(completion) => Some(completion.clone()),
            _ => None,
        }
    }

    /// Blocks until the task reaches a terminal state.
    ///
    /// Waiting before the task is started keeps blocking until some caller
    /// starts it and it finishes. On any outcome other than success an
    /// existing output directory is purged before returning.
    pub fn wait_for_completion(&self) -> Completion {
        let state = self.shared.lock();
        let state = self
            .shared
            .finished
            .wait_while(state, |state| !matches!(state.phase, Phase::Finished(_)))
            .unwrap_or_else(PoisonError::into_inner);
        let completion = match &state.phase {
            Phase::Finished(completion) => completion.clone(),
            _ => Completion::Aborted,
        };
        drop(state);

        self.settle(completion)
    }

    /// Like [`wait_for_completion`](Self::wait_for_completion) but gives up
    /// after `timeout`, returning `None` without purging.
    pub fn wait_for_completion_timeout(&self, timeout: Duration) -> Option<Completion> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.lock();
        loop {
            if let Phase::Finished(completion) = &state.phase {
                let completion = completion.clone();
                drop(state);
                return Some(self.settle(completion));
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }
            state = self
                .shared
                .finished
                .wait_timeout(state, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    fn settle(&self, completion: Completion) -> Completion {
        if completion.is_success() {
            return completion;
        }
        if self.output_dir.as_path().is_dir() {
            log::debug!(
                "Extraction ended as {completion:?}; purging {}",
                self.output_dir().display()
            );
            purge(self.output_dir.as_path());
        } else {
            // Directory was never created; nothing to purge.
            log::debug!("Extraction ended as {completion:?}; no cache directory to purge");
        }
        completion
    }
}
