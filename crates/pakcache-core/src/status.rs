//! Read-only inspection of a cache directory.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::PackageInfoSource;
use crate::Result;
use crate::stamp;
use crate::stamp::VersionStamp;

/// Snapshot of what a cache directory currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStatus {
    /// The inspected directory.
    pub output_dir: PathBuf,

    /// Whether the directory exists.
    pub exists: bool,

    /// Version marker names, sorted.
    pub markers: Vec<String>,

    /// Resource file names (everything but markers), sorted.
    pub resources: Vec<String>,

    /// Combined size of the resource files in bytes.
    pub total_bytes: u64,
}

impl CacheStatus {
    /// Inspects `output_dir` without modifying it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn inspect(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref();
        let mut status = Self {
            output_dir: output_dir.to_path_buf(),
            ..Self::default()
        };

        if !output_dir.is_dir() {
            return Ok(status);
        }
        status.exists = true;

        for entry in fs::read_dir(output_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if VersionStamp::is_marker_name(&name) {
                status.markers.push(name);
            } else {
                status.total_bytes += entry.metadata()?.len();
                status.resources.push(name);
            }
        }
        status.markers.sort();
        status.resources.sort();
        Ok(status)
    }

    /// Returns `true` if exactly one marker is present.
    #[must_use]
    pub fn is_stamped(&self) -> bool {
        self.markers.len() == 1
    }

    /// Returns `true` if the validator would accept this cache as is.
    pub fn is_current(&self, package: &dyn PackageInfoSource) -> bool {
        self.exists && stamp::check(package, &self.output_dir).is_none()
    }
}
