//! Bundle backed by an application package (zip container).
//!
//! Resource entries live under the package's `assets/` directory. Only its
//! direct children are listed, mirroring a flat assets listing.

use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;

use zip::ZipArchive;
use zip::result::ZipError;

use super::Bundle;
use crate::ExtractionError;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;

/// Directory inside the package that holds resource entries.
pub const ASSETS_PREFIX: &str = "assets/";

/// A zip-format package whose `assets/` entries form the bundle.
pub struct ApkBundle<R = File> {
    archive: Mutex<ZipArchive<R>>,
}

impl ApkBundle<File> {
    /// Opens the package at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a valid zip
    /// container.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> ApkBundle<R> {
    /// Reads a package from any seekable reader.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidBundle`] if the reader does not hold
    /// a zip container.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)
            .map_err(|e| ExtractionError::InvalidBundle(format!("failed to open package: {e}")))?;
        Ok(Self {
            archive: Mutex::new(archive),
        })
    }
}

impl<R: Read + Seek + Send> Bundle for ApkBundle<R> {
    fn list(&self) -> std::io::Result<Vec<String>> {
        let archive = self.archive.lock().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = archive
            .file_names()
            .filter_map(|name| name.strip_prefix(ASSETS_PREFIX))
            .filter(|name| !name.is_empty() && !name.contains('/'))
            .map(str::to_string)
            .collect();
        names.sort();
        Ok(names)
    }

    fn copy_entry(
        &self,
        name: &str,
        sink: &mut dyn Write,
        buffer: &mut CopyBuffer,
    ) -> Result<u64> {
        let mut archive = self.archive.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entry = archive
            .by_name(&format!("{ASSETS_PREFIX}{name}"))
            .map_err(|e| match e {
                ZipError::FileNotFound => ExtractionError::MissingEntry {
                    name: name.to_string(),
                },
                ZipError::Io(io) => ExtractionError::Io(io),
                other => ExtractionError::InvalidBundle(format!("failed to read {name}: {other}")),
            })?;
        copy_with_buffer(&mut entry, sink, buffer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::ApkTestBuilder;
    use crate::test_utils::create_test_apk;
    use std::io::Cursor;

    #[test]
    fn test_list_assets_only() {
        let data = ApkTestBuilder::new()
            .asset("resources.pak", b"res")
            .asset("en-US.pak", b"en")
            .file("classes.dex", b"dex")
            .file("assets/fonts/a.ttf", b"ttf")
            .build();

        let bundle = ApkBundle::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(bundle.list().unwrap(), vec!["en-US.pak", "resources.pak"]);
    }

    #[test]
    fn test_copy_entry() {
        let data = create_test_apk(&[("fr.pak", "bonjour")]);
        let bundle = ApkBundle::from_reader(Cursor::new(data)).unwrap();

        let mut out = Vec::new();
        let copied = bundle
            .copy_entry("fr.pak", &mut out, &mut CopyBuffer::new())
            .unwrap();
        assert_eq!(copied, 7);
        assert_eq!(out, b"bonjour");
    }

    #[test]
    fn test_copy_missing_entry() {
        let data = create_test_apk(&[("fr.pak", "bonjour")]);
        let bundle = ApkBundle::from_reader(Cursor::new(data)).unwrap();

        let result = bundle.copy_entry("de.pak", &mut Vec::new(), &mut CopyBuffer::new());
        assert!(matches!(result, Err(ExtractionError::MissingEntry { .. })));
    }

    #[test]
    fn test_invalid_container() {
        let result = ApkBundle::from_reader(Cursor::new(b"not a zip".to_vec()));
        assert!(matches!(result, Err(ExtractionError::InvalidBundle(_))));
    }
}
