//! Host package metadata used to version the cache.

use std::path::Path;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use crate::ExtractionError;
use crate::Result;

/// Identity of the installed application build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageInfo {
    /// Installed version code.
    pub version_code: String,

    /// Last install or update time, in milliseconds since the Unix epoch.
    pub last_update_time: u64,
}

impl PackageInfo {
    /// Creates package info from its two components.
    #[must_use]
    pub fn new(version_code: impl Into<String>, last_update_time: u64) -> Self {
        Self {
            version_code: version_code.into(),
            last_update_time,
        }
    }
}

/// Source of [`PackageInfo`] for the running application.
///
/// Lookup may fail; the validator then treats the cache as invalid.
pub trait PackageInfoSource: Send + Sync {
    /// Looks up the installed package.
    fn package_info(&self) -> Result<PackageInfo>;
}

impl PackageInfoSource for PackageInfo {
    fn package_info(&self) -> Result<PackageInfo> {
        Ok(self.clone())
    }
}

/// Package info whose update time is the modification time of a file.
///
/// Reinstalling or upgrading the package file changes its mtime, which in
/// turn changes the expected version stamp.
///
/// # Examples
///
/// ```no_run
/// use pakcache_core::FilePackageInfo;
/// use pakcache_core::PackageInfoSource;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = FilePackageInfo::new("/opt/app/base.apk", "1200");
/// let info = source.package_info()?;
/// println!("version {} updated at {}", info.version_code, info.last_update_time);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FilePackageInfo {
    path: PathBuf,
    version_code: String,
}

impl FilePackageInfo {
    /// Creates a source reading the update time from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, version_code: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version_code: version_code.into(),
        }
    }

    /// The package file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PackageInfoSource for FilePackageInfo {
    fn package_info(&self) -> Result<PackageInfo> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| {
            ExtractionError::PackageLookup(format!("{}: {e}", self.path.display()))
        })?;
        let modified = metadata.modified().map_err(|e| {
            ExtractionError::PackageLookup(format!("{}: {e}", self.path.display()))
        })?;
        let millis = modified
            .duration_since(UNIX_EPOCH)
            .map_err(|e| {
                ExtractionError::PackageLookup(format!("{}: {e}", self.path.display()))
            })?
            .as_millis();

        Ok(PackageInfo {
            version_code: self.version_code.clone(),
            last_update_time: u64::try_from(millis).unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_static_package_info() {
        let info = PackageInfo::new("42", 1_700_000_000_000);
        assert_eq!(info.package_info().unwrap(), info);
    }

    #[test]
    fn test_file_package_info_reads_mtime() {
        let temp = TempDir::new().unwrap();
        let apk = temp.path().join("base.apk");
        fs::write(&apk, b"PK").unwrap();

        let info = FilePackageInfo::new(&apk, "7").package_info().unwrap();
        assert_eq!(info.version_code, "7");
        assert!(info.last_update_time > 0);
    }

    #[test]
    fn test_file_package_info_missing_file() {
        let temp = TempDir::new().unwrap();
        let source = FilePackageInfo::new(temp.path().join("missing.apk"), "7");

        let result = source.package_info();
        assert!(matches!(result, Err(ExtractionError::PackageLookup(_))));
    }
}
