//! Read-only resource bundles.
//!
//! A bundle is the packaged set of resource entries shipped with the
//! application. Entries are opaque blobs; the engine only lists them and
//! streams their bytes.

pub mod apk;
pub mod dir;

use std::io::Write;
use std::path::Path;

pub use apk::ApkBundle;
pub use dir::DirBundle;

use crate::Result;
use crate::copy::CopyBuffer;

/// Source of bundled resource entries.
pub trait Bundle: Send + Sync {
    /// Lists the top-level entry names.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle cannot be enumerated.
    fn list(&self) -> std::io::Result<Vec<String>>;

    /// Streams the entry `name` into `sink`, returning the bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::MissingEntry`] if there is no such entry,
    /// or an I/O error if reading or writing fails.
    ///
    /// [`ExtractionError::MissingEntry`]: crate::ExtractionError::MissingEntry
    fn copy_entry(&self, name: &str, sink: &mut dyn Write, buffer: &mut CopyBuffer)
    -> Result<u64>;
}

/// Opens `path` as a bundle: a directory becomes a [`DirBundle`], a file is
/// read as an application package ([`ApkBundle`]).
///
/// # Errors
///
/// Returns an error if the path does not exist or the package cannot be
/// opened.
pub fn open(path: impl AsRef<Path>) -> Result<Box<dyn Bundle>> {
    let path = path.as_ref();
    if path.is_dir() {
        Ok(Box::new(DirBundle::new(path)))
    } else {
        Ok(Box::new(ApkBundle::open(path)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ExtractionError;
    use crate::test_utils::create_test_apk;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("en.pak"), b"en").unwrap();

        let bundle = open(temp.path()).unwrap();
        assert_eq!(bundle.list().unwrap(), vec!["en.pak"]);
    }

    #[test]
    fn test_open_package_file() {
        let temp = TempDir::new().unwrap();
        let apk = temp.path().join("base.apk");
        fs::write(&apk, create_test_apk(&[("en.pak", "en")])).unwrap();

        let bundle = open(&apk).unwrap();
        assert_eq!(bundle.list().unwrap(), vec!["en.pak"]);
    }

    #[test]
    fn test_open_missing_path() {
        let temp = TempDir::new().unwrap();
        let result = open(temp.path().join("missing.apk"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }
}
