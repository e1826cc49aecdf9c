//! Test utilities for building bundles and cache directories.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

use crate::bundle::apk::ASSETS_PREFIX;

/// Creates an in-memory package whose `assets/` holds the given entries.
pub fn create_test_apk(assets: &[(&str, &str)]) -> Vec<u8> {
    assets
        .iter()
        .fold(ApkTestBuilder::new(), |builder, (name, data)| {
            builder.asset(name, data.as_bytes())
        })
        .build()
}

/// Writes each `(name, content)` pair as a file under `dir`.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// Sorted file names directly under `dir`.
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

/// Builder for zip-format test packages.
pub struct ApkTestBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl ApkTestBuilder {
    /// Creates an empty package.
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds an entry under `assets/`.
    #[must_use]
    pub fn asset(self, name: &str, data: &[u8]) -> Self {
        self.file(&format!("{ASSETS_PREFIX}{name}"), data)
    }

    /// Adds an entry at an arbitrary path in the package.
    #[must_use]
    pub fn file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644);
        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Finishes the package and returns its bytes.
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ApkTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
