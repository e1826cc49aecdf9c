//! Error conversion utilities for CLI.
//!
//! Converts pakcache-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use pakcache_core::Completion;
use pakcache_core::ExtractionError;
use std::path::Path;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, bundle: &Path) -> anyhow::Error {
    match err {
        ExtractionError::InvalidBundle(reason) => {
            anyhow!(
                "Invalid bundle '{}': {}\n\
                 HINT: Pass a resource directory or a zip-based application package.",
                bundle.display(),
                reason
            )
        }
        ExtractionError::MissingEntry { name } => {
            anyhow!(
                "Bundle '{}' has no entry named '{}'",
                bundle.display(),
                name
            )
        }
        ExtractionError::OutputDirectory { path, source } => {
            anyhow!(
                "Cannot create cache directory '{}': {}\n\
                 HINT: Check that --data-root points to a writable location.",
                path.display(),
                source
            )
        }
        ExtractionError::InvalidDownloadedPath { path } => {
            anyhow!(
                "Downloaded resource '{}' has no file name\n\
                 HINT: --downloaded expects a path to a file.",
                path.display()
            )
        }
        ExtractionError::PackageLookup(reason) => {
            anyhow!(
                "Cannot read package metadata for '{}': {}",
                bundle.display(),
                reason
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                bundle.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error processing bundle '{}'", bundle.display())),
    }
}

/// Adds context to a generic error about bundle operations
pub fn add_bundle_context<T>(
    result: Result<T, ExtractionError>,
    bundle: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, bundle))
}

/// Turns a non-successful completion into an error.
pub fn completion_error(completion: &Completion, output_dir: &Path) -> Option<anyhow::Error> {
    match completion {
        Completion::Succeeded(_) => None,
        Completion::Failed { reason } => Some(anyhow!(
            "Extraction into '{}' failed: {}\n\
             HINT: The cache was purged; the next run starts from scratch.",
            output_dir.display(),
            reason
        )),
        Completion::Cancelled => Some(anyhow!(
            "Extraction into '{}' was cancelled",
            output_dir.display()
        )),
        Completion::Aborted => Some(anyhow!(
            "Extraction worker for '{}' stopped unexpectedly\n\
             HINT: Run with --verbose for worker diagnostics.",
            output_dir.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakcache_core::ExtractionReport;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_invalid_bundle_error() {
        let err = ExtractionError::InvalidBundle("invalid Zip archive".into());
        let converted = convert_extraction_error(err, Path::new("broken.apk"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Invalid bundle"));
        assert!(msg.contains("broken.apk"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_output_directory_error() {
        let err = ExtractionError::OutputDirectory {
            path: PathBuf::from("/readonly/paks"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let converted = convert_extraction_error(err, Path::new("base.apk"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("/readonly/paks"));
        assert!(msg.contains("--data-root"));
    }

    #[test]
    fn test_convert_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ExtractionError::Io(io_err);
        let converted = convert_extraction_error(err, Path::new("base.apk"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("I/O error"));
    }

    #[test]
    fn test_fallback_keeps_source_message() {
        let converted = convert_extraction_error(ExtractionError::Cancelled, Path::new("res"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Error processing bundle 'res'"));
        assert!(msg.contains("extraction cancelled"));
    }

    #[test]
    fn test_completion_error() {
        let dir = Path::new("/data/paks");
        assert!(completion_error(&Completion::Succeeded(ExtractionReport::new()), dir).is_none());

        let failed = Completion::Failed {
            reason: "fr.pak extracted with 0 length".into(),
        };
        let msg = format!("{:?}", completion_error(&failed, dir).unwrap_or_else(|| anyhow!("")));
        assert!(msg.contains("0 length"));
        assert!(msg.contains("purged"));

        assert!(completion_error(&Completion::Aborted, dir).is_some());
        assert!(completion_error(&Completion::Cancelled, dir).is_some());
    }
}
