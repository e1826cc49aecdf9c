//! Bundle backed by an unpacked assets directory.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use super::Bundle;
use crate::ExtractionError;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;

/// A directory whose regular files are the bundle entries.
#[derive(Debug, Clone)]
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    /// Creates a bundle rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The assets directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Bundle for DirBundle {
    fn list(&self) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            // Follows symlinks so linked paks count as entries.
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    log::warn!("Skipping unreadable bundle entry {:?}: {e}", entry.file_name());
                    continue;
                }
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => log::warn!("Skipping non UTF-8 bundle entry {name:?}"),
            }
        }
        names.sort();
        Ok(names)
    }

    fn copy_entry(
        &self,
        name: &str,
        sink: &mut dyn Write,
        buffer: &mut CopyBuffer,
    ) -> Result<u64> {
        let path = self.root.join(name);
        let mut input = File::open(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExtractionError::MissingEntry {
                    name: name.to_string(),
                }
            } else {
                ExtractionError::Io(e)
            }
        })?;
        copy_with_buffer(&mut input, sink, buffer)
    }
}
