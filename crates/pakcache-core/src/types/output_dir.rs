//! Cache output directory type.

use std::path::Path;
use std::path::PathBuf;

/// Name of the cache directory created under the application data root.
pub const PAKS_DIR_NAME: &str = "paks";

/// The writable directory resources are extracted into.
///
/// Resolution is a pure path computation: nothing is created or checked on
/// disk until an extraction task runs.
///
/// # Examples
///
/// ```
/// use pakcache_core::types::OutputDir;
/// use std::path::Path;
///
/// let dir = OutputDir::resolve("/data/app");
/// assert_eq!(dir.as_path(), Path::new("/data/app/paks"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputDir(PathBuf);

impl OutputDir {
    /// Derives the cache directory `<app_data_root>/paks`.
    #[must_use]
    pub fn resolve(app_data_root: impl AsRef<Path>) -> Self {
        Self(app_data_root.as_ref().join(PAKS_DIR_NAME))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a file name to this directory.
    #[inline]
    #[must_use]
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.0.join(name)
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for OutputDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_appends_paks() {
        let dir = OutputDir::resolve("/data/data/org.example.app");
        assert_eq!(
            dir.as_path(),
            Path::new("/data/data/org.example.app/paks")
        );
    }

    #[test]
    fn test_resolve_relative_root() {
        let dir = OutputDir::resolve("app_data");
        assert_eq!(dir.into_path_buf(), PathBuf::from("app_data").join("paks"));
    }

    #[test]
    fn test_resolve_does_not_touch_disk() {
        let dir = OutputDir::resolve("/nonexistent/root/that/does/not/exist");
        assert!(!dir.as_path().exists());
        assert!(dir.as_path().ends_with(PAKS_DIR_NAME));
    }

    #[test]
    fn test_join() {
        let dir = OutputDir::resolve("/root");
        assert_eq!(dir.join("en.pak"), PathBuf::from("/root/paks/en.pak"));
    }
}
