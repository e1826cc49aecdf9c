//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use super::formatter::SelectionSummary;
use anyhow::Result;
use console::Term;
use console::style;
use pakcache_core::CacheStatus;
use pakcache_core::ExtractionReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn headline(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(&self, output_dir: &Path, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if report.is_noop() {
            self.headline(&format!("Cache up to date: {}", output_dir.display()));
        } else {
            self.headline(&format!("Extraction complete: {}", output_dir.display()));
        }

        let _ = self
            .term
            .write_line(&format!("  Files extracted: {}", report.files_extracted));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));
        if report.purged {
            let _ = self.term.write_line("  Stale cache purged");
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Files skipped: {}", report.files_skipped));
            if let Some(stamp) = &report.stamp_written {
                let _ = self.term.write_line(&format!("  Stamp: {stamp}"));
            }
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        for warning in &report.warnings {
            self.format_warning(warning);
        }

        Ok(())
    }

    fn format_selection(&self, selection: &SelectionSummary<'_>) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for name in selection.selected {
            let _ = self.term.write_line(name);
        }

        if self.verbose {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&format!("Locale: {}", selection.locale));
            let _ = self.term.write_line(&format!(
                "Pattern: {}",
                selection.pattern.unwrap_or("(matches nothing)")
            ));
            let _ = self.term.write_line(&format!(
                "Selected {} of {} bundle entries",
                selection.selected.len(),
                selection.bundle_entries
            ));
        }

        Ok(())
    }

    fn format_status(&self, status: &CacheStatus, current: Option<bool>) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self
            .term
            .write_line(&format!("Cache: {}", status.output_dir.display()));
        if !status.exists {
            let _ = self.term.write_line("  (not created)");
            return Ok(());
        }

        let stamp = match status.markers.as_slice() {
            [] => "none".to_string(),
            [marker] => marker.clone(),
            many => format!("ambiguous ({} markers)", many.len()),
        };
        let _ = self.term.write_line(&format!("  Stamp: {stamp}"));
        let _ = self.term.write_line(&format!(
            "  Resources: {} ({})",
            status.resources.len(),
            Self::format_size(status.total_bytes)
        ));

        if let Some(current) = current {
            let verdict = match (current, self.use_colors) {
                (true, true) => style("current").green().to_string(),
                (false, true) => style("stale").yellow().to_string(),
                (true, false) => "current".to_string(),
                (false, false) => "stale".to_string(),
            };
            let _ = self.term.write_line(&format!("  State: {verdict}"));
        }

        if self.verbose {
            for name in &status.resources {
                let _ = self.term.write_line(&format!("    {name}"));
            }
        }

        Ok(())
    }

    fn format_purge_result(&self, output_dir: &Path, removed: usize) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!(
            "Purged {removed} entries from {}",
            output_dir.display()
        ));
        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
