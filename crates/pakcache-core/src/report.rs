//! Extraction reporting.

use std::time::Duration;

/// Report of a completed extraction task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Number of files copied into the cache.
    pub files_extracted: usize,

    /// Number of selected files already present and left untouched.
    pub files_skipped: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Whether the validator rejected the previous cache and it was purged.
    pub purged: bool,

    /// Marker written at the end of this run, if a re-stamp was needed.
    pub stamp_written: Option<String>,

    /// Duration of the extraction task.
    pub duration: Duration,

    /// Non-fatal problems encountered during extraction.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns `true` if this run performed no copies.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.files_extracted == 0
    }
}

/// Terminal state of an extraction task, as observed by waiters.
///
/// Anything but [`Completion::Succeeded`] means the cache directory has been
/// purged and is empty or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// All selected resources are present and the cache is stamped.
    Succeeded(ExtractionReport),

    /// The task hit an error and purged the cache.
    Failed {
        /// Description of the failure.
        reason: String,
    },

    /// The task was cancelled before finishing.
    Cancelled,

    /// The worker panicked or could not be started.
    Aborted,
}

impl Completion {
    /// Returns `true` for a successful extraction.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns the report of a successful extraction.
    #[must_use]
    pub const fn report(&self) -> Option<&ExtractionReport> {
        match self {
            Self::Succeeded(report) => Some(report),
            _ => None,
        }
    }
}
