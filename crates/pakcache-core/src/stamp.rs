//! Version stamp validation.
//!
//! The cache directory carries an empty marker file named after the package
//! build that populated it. Exactly one marker equal to the expected stamp
//! means the cache is current; anything else means its provenance is unknown
//! and the directory must be purged.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::PackageInfo;
use crate::PackageInfoSource;

/// Prefix shared by every marker file name.
pub const STAMP_PREFIX: &str = "pak_timestamp-";

/// Marker name identifying the build that produced the cache contents.
///
/// # Examples
///
/// ```
/// use pakcache_core::PackageInfo;
/// use pakcache_core::VersionStamp;
///
/// let stamp = VersionStamp::for_package(&PackageInfo::new("1200", 1_700_000_000_000));
/// assert_eq!(stamp.as_str(), "pak_timestamp-1200-1700000000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionStamp(String);

impl VersionStamp {
    /// Expected stamp for an installed package.
    #[must_use]
    pub fn for_package(info: &PackageInfo) -> Self {
        Self(format!(
            "{STAMP_PREFIX}{}-{}",
            info.version_code, info.last_update_time
        ))
    }

    /// Stamp written when package metadata is unavailable.
    ///
    /// It never equals a real package stamp, so the next run purges again.
    #[must_use]
    pub fn sentinel() -> Self {
        Self(STAMP_PREFIX.to_string())
    }

    /// Returns `true` if `name` is a marker file name.
    #[must_use]
    pub fn is_marker_name(name: &str) -> bool {
        name.starts_with(STAMP_PREFIX)
    }

    /// Marker file name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lists marker file names present in `output_dir`.
///
/// An unreadable directory yields no markers.
pub fn find_markers(output_dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(output_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!(
                "Unable to list {} for version markers: {e}",
                output_dir.display()
            );
            return Vec::new();
        }
    };

    let mut markers: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| VersionStamp::is_marker_name(name))
        .collect();
    markers.sort();
    markers
}

/// Decides whether the cache in `output_dir` is still valid.
///
/// Returns `None` when exactly one marker exists and it equals the expected
/// stamp. Otherwise returns the stamp to write once the purged cache has been
/// repopulated: the package's stamp, or [`VersionStamp::sentinel`] if the
/// package lookup failed.
pub fn check(package: &dyn PackageInfoSource, output_dir: &Path) -> Option<VersionStamp> {
    let info = match package.package_info() {
        Ok(info) => info,
        Err(e) => {
            log::warn!("Package lookup failed, invalidating resource cache: {e}");
            return Some(VersionStamp::sentinel());
        }
    };

    let expected = VersionStamp::for_package(&info);
    let markers = find_markers(output_dir);

    match markers.as_slice() {
        [only] if only == expected.as_str() => {
            log::debug!("Resource cache is current ({expected})");
            None
        }
        [only] => {
            log::debug!("Resource cache stamp {only} is stale, expected {expected}");
            Some(expected)
        }
        _ => {
            log::debug!(
                "Found {} version markers in {}, expected exactly one",
                markers.len(),
                output_dir.display()
            );
            Some(expected)
        }
    }
}
