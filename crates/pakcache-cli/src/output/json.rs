//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::SelectionSummary;
use anyhow::Result;
use pakcache_core::CacheStatus;
use pakcache_core::ExtractionReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ExtractionOutput<'a> {
    output_dir: String,
    files_extracted: usize,
    files_skipped: usize,
    bytes_written: u64,
    purged: bool,
    stamp: Option<&'a str>,
    duration_ms: u128,
    warnings: &'a [String],
}

#[derive(Serialize)]
struct StatusOutput<'a> {
    output_dir: String,
    exists: bool,
    markers: &'a [String],
    resources: &'a [String],
    total_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    current: Option<bool>,
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_result(&self, output_dir: &Path, report: &ExtractionReport) -> Result<()> {
        let data = ExtractionOutput {
            output_dir: output_dir.display().to_string(),
            files_extracted: report.files_extracted,
            files_skipped: report.files_skipped,
            bytes_written: report.bytes_written,
            purged: report.purged,
            stamp: report.stamp_written.as_deref(),
            duration_ms: report.duration.as_millis(),
            warnings: &report.warnings,
        };

        Self::output(&JsonOutput::success("extract", data))
    }

    fn format_selection(&self, selection: &SelectionSummary<'_>) -> Result<()> {
        Self::output(&JsonOutput::success("select", selection))
    }

    fn format_status(&self, status: &CacheStatus, current: Option<bool>) -> Result<()> {
        let data = StatusOutput {
            output_dir: status.output_dir.display().to_string(),
            exists: status.exists,
            markers: &status.markers,
            resources: &status.resources,
            total_bytes: status.total_bytes,
            current,
        };

        Self::output(&JsonOutput::success("status", data))
    }

    fn format_purge_result(&self, output_dir: &Path, removed: usize) -> Result<()> {
        #[derive(Serialize)]
        struct PurgeOutput {
            output_dir: String,
            removed: usize,
        }

        let data = PurgeOutput {
            output_dir: output_dir.display().to_string(),
            removed,
        };

        Self::output(&JsonOutput::success("purge", data))
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
