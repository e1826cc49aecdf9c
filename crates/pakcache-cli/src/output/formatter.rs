//! Output formatter trait for CLI results.

use anyhow::Result;
use pakcache_core::CacheStatus;
use pakcache_core::ExtractionReport;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format extraction result
    fn format_extraction_result(&self, output_dir: &Path, report: &ExtractionReport) -> Result<()>;

    /// Format the entries a dry run would extract
    fn format_selection(&self, selection: &SelectionSummary<'_>) -> Result<()>;

    /// Format cache status
    fn format_status(&self, status: &CacheStatus, current: Option<bool>) -> Result<()>;

    /// Format purge result
    fn format_purge_result(&self, output_dir: &Path, removed: usize) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Outcome of a `select` dry run.
#[derive(Debug, Serialize)]
pub struct SelectionSummary<'a> {
    pub locale: &'a str,
    pub pattern: Option<&'a str>,
    pub selected: &'a [String],
    pub bundle_entries: usize,
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
