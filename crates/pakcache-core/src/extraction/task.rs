//! The extraction task.
//!
//! One run walks `EnsureDirectory → Validate → Scan&Copy → Stamp`. A copy
//! failure anywhere aborts the scan and purges the output directory.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::Bundle;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::LocaleId;
use crate::PackageInfoSource;
use crate::Result;
use crate::Selection;
use crate::SelectionConfig;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::extraction::purge;
use crate::stamp;
use crate::types::OutputDir;

/// A single extraction run over one bundle into one output directory.
pub struct ExtractionTask {
    output_dir: OutputDir,
    config: SelectionConfig,
    locale: LocaleId,
    bundle: Arc<dyn Bundle>,
    package: Arc<dyn PackageInfoSource>,
    cancel: Arc<AtomicBool>,
}

impl ExtractionTask {
    /// Creates a task; nothing touches the disk until [`run`](Self::run).
    #[must_use]
    pub fn new(
        output_dir: OutputDir,
        config: SelectionConfig,
        locale: LocaleId,
        bundle: Arc<dyn Bundle>,
        package: Arc<dyn PackageInfoSource>,
    ) -> Self {
        Self {
            output_dir,
            config,
            locale,
            bundle,
            package,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shares a cancellation flag, checked before every copy.
    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Runs the extraction to completion.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::OutputDirectory`] if the directory cannot be
    /// created (nothing is purged), or the copy failure that aborted the scan
    /// (the directory has been purged).
    pub fn run(&self) -> Result<ExtractionReport> {
        let start = Instant::now();
        let dir = self.output_dir.as_path();

        if !dir.is_dir() {
            if let Err(source) = fs::create_dir_all(dir) {
                log::error!(
                    "Unable to create pak resources directory {}: {source}",
                    dir.display()
                );
                return Err(ExtractionError::OutputDirectory {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        }

        let mut report = ExtractionReport::new();
        let stamp = stamp::check(self.package.as_ref(), dir);
        if stamp.is_some() {
            purge(dir);
            report.purged = true;
        }

        if let Err(e) = self.extract_all(&mut report) {
            log::warn!("Failed to extract pak resources, purging cache: {e}");
            purge(dir);
            return Err(e);
        }

        if let Some(stamp) = stamp {
            match File::create(self.output_dir.join(stamp.as_str())) {
                Ok(_) => report.stamp_written = Some(stamp.to_string()),
                Err(e) => {
                    // Next start re-validates; extracted files are skipped.
                    log::warn!("Failed to write resource pak timestamp {stamp}: {e}");
                    report.add_warning(format!("failed to write version marker {stamp}: {e}"));
                }
            }
        }

        report.duration = start.elapsed();
        log::info!(
            "Resource extraction finished: {} extracted, {} already present",
            report.files_extracted,
            report.files_skipped
        );
        Ok(report)
    }

    fn extract_all(&self, report: &mut ExtractionReport) -> Result<()> {
        self.check_cancelled()?;
        let selection = Selection::build(&self.config, &self.locale)?;

        let entries = match self.bundle.list() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Unable to list bundle entries, treating as empty: {e}");
                Vec::new()
            }
        };

        let mut buffer = CopyBuffer::new();

        for name in selection.select(&entries) {
            self.check_cancelled()?;
            let dest = self.output_dir.join(&name);
            self.extract_file(&name, &dest, report, &mut buffer, |sink, buffer| {
                self.bundle.copy_entry(&name, sink, buffer)
            })?;
        }

        for path in selection.downloaded() {
            self.check_cancelled()?;
            let file_name = path
                .file_name()
                .ok_or_else(|| ExtractionError::InvalidDownloadedPath { path: path.clone() })?;
            let dest = self.output_dir.join(file_name);
            let label = path.display().to_string();
            self.extract_file(&label, &dest, report, &mut buffer, |sink, buffer| {
                let mut input = File::open(path)?;
                copy_with_buffer(&mut input, sink, buffer)
            })?;
        }

        Ok(())
    }

    fn extract_file<F>(
        &self,
        label: &str,
        dest: &Path,
        report: &mut ExtractionReport,
        buffer: &mut CopyBuffer,
        copy: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut dyn Write, &mut CopyBuffer) -> Result<u64>,
    {
        if dest.exists() {
            log::debug!("Resource {label} already extracted");
            report.files_skipped += 1;
            return Ok(());
        }

        log::info!("Extracting resource {label}");
        let mut output = File::create(dest)?;
        let sink: &mut dyn Write = &mut output;
        let written = copy(sink, buffer)?;
        output.flush()?;
        drop(output);

        if fs::metadata(dest)?.len() == 0 {
            return Err(ExtractionError::EmptyOutput {
                path: dest.to_path_buf(),
            });
        }

        report.files_extracted += 1;
        report.bytes_written += written;
        Ok(())
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.load(Ordering::Acquire) {
            return Err(ExtractionError::Cancelled);
        }
        Ok(())
    }
}
