//! Cache purge.
//!
//! Failure handling never rolls back individual files; it wipes the whole
//! output directory so the cache is either complete or empty.

use std::fs;
use std::path::Path;

/// Deletes everything inside `output_dir`, returning the number of entries
/// removed.
///
/// Best-effort: failures are logged per entry and do not stop the purge. A
/// missing directory is not an error.
pub fn purge(output_dir: &Path) -> usize {
    let entries = match fs::read_dir(output_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
        Err(e) => {
            log::warn!("Unable to list {} for purge: {e}", output_dir.display());
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Unable to read entry in {}: {e}", output_dir.display());
                continue;
            }
        };
        let path = entry.path();
        let result = match entry.file_type() {
            Ok(kind) if kind.is_dir() => fs::remove_dir_all(&path),
            _ => fs::remove_file(&path),
        };
        match result {
            Ok(()) => removed += 1,
            Err(e) => log::warn!(
                "Unable to remove existing resource {}: {e}",
                entry.file_name().to_string_lossy()
            ),
        }
    }

    log::debug!("Purged {removed} entries from {}", output_dir.display());
    removed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::list_names;
    use crate::test_utils::write_files;
    use tempfile::TempDir;

    #[test]
    fn test_purge_removes_files_and_markers() {
        let temp = TempDir::new().unwrap();
        write_files(
            temp.path(),
            &[("en.pak", "en"), ("resources.pak", "res"), ("pak_timestamp-1-2", "")],
        );

        assert_eq!(purge(temp.path()), 3);
        assert!(list_names(temp.path()).is_empty());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_purge_removes_subdirectories() {
        let temp = TempDir::new().unwrap();
        write_files(&temp.path().join("leftover"), &[("x.pak", "x")]);

        assert_eq!(purge(temp.path()), 1);
        assert!(list_names(temp.path()).is_empty());
    }

    #[test]
    fn test_purge_missing_directory() {
        let temp = TempDir::new().unwrap();
        assert_eq!(purge(&temp.path().join("paks")), 0);
    }
}
