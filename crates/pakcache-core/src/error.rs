//! Error types for resource extraction operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while populating the resource cache.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cache output directory could not be created.
    #[error("unable to create output directory {path}: {source}")]
    OutputDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A copied resource ended up with zero length.
    #[error("{path} extracted with 0 length")]
    EmptyOutput {
        /// Destination file that was left empty.
        path: PathBuf,
    },

    /// The bundle has no entry with the requested name.
    #[error("bundle entry not found: {name}")]
    MissingEntry {
        /// Requested entry name.
        name: String,
    },

    /// The bundle container is unreadable or malformed.
    #[error("invalid bundle: {0}")]
    InvalidBundle(String),

    /// A downloaded resource path has no file name to copy it under.
    #[error("downloaded resource has no file name: {path}")]
    InvalidDownloadedPath {
        /// The offending path.
        path: PathBuf,
    },

    /// Host package metadata could not be read.
    #[error("package lookup failed: {0}")]
    PackageLookup(String),

    /// The selection pattern failed to compile.
    #[error("invalid selection pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The selection configuration was changed after extraction started.
    #[error("selection configuration is locked once extraction has started")]
    ConfigLocked,

    /// The extraction was cancelled before it finished.
    #[error("extraction cancelled")]
    Cancelled,
}

impl ExtractionError {
    /// Returns `true` if purging the cache and running again may succeed.
    ///
    /// Copy failures and empty outputs leave nothing behind after a purge, so
    /// the next process start gets a clean attempt. Configuration mistakes and
    /// a directory that cannot be created will fail the same way again.
    ///
    /// # Examples
    ///
    /// ```
    /// use pakcache_core::ExtractionError;
    /// use std::path::PathBuf;
    ///
    /// let err = ExtractionError::EmptyOutput {
    ///     path: PathBuf::from("paks/en.pak"),
    /// };
    /// assert!(err.is_recoverable());
    ///
    /// assert!(!ExtractionError::ConfigLocked.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::EmptyOutput { .. }
                | Self::MissingEntry { .. }
                | Self::InvalidBundle(_)
                | Self::Cancelled
        )
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use pakcache_core::ExtractionError;
    ///
    /// let err = ExtractionError::InvalidBundle("truncated central directory".to_string());
    /// assert_eq!(err.context(), Some("truncated central directory"));
    ///
    /// assert_eq!(ExtractionError::Cancelled.context(), None);
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidBundle(msg) | Self::PackageLookup(msg) => Some(msg),
            Self::MissingEntry { name } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ExtractionError::Cancelled.to_string(),
            "extraction cancelled"
        );
        assert_eq!(
            ExtractionError::ConfigLocked.to_string(),
            "selection configuration is locked once extraction has started"
        );
    }

    #[test]
    fn test_empty_output_error() {
        let err = ExtractionError::EmptyOutput {
            path: PathBuf::from("paks/resources.pak"),
        };
        assert!(err.to_string().contains("0 length"));
        assert!(err.to_string().contains("paks/resources.pak"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExtractionError = io_err.into();
        assert!(matches!(err, ExtractionError::Io(_)));
    }

    #[test]
    fn test_output_directory_source_chain() {
        use std::error::Error;

        let err = ExtractionError::OutputDirectory {
            path: PathBuf::from("/data/paks"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/data/paks"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_recoverable() {
        assert!(ExtractionError::Cancelled.is_recoverable());
        assert!(
            ExtractionError::MissingEntry {
                name: "en.pak".into()
            }
            .is_recoverable()
        );

        assert!(!ExtractionError::ConfigLocked.is_recoverable());
        assert!(
            !ExtractionError::OutputDirectory {
                path: PathBuf::from("/data/paks"),
                source: std::io::Error::other("read-only"),
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_context() {
        let err = ExtractionError::PackageLookup("package not installed".into());
        assert_eq!(err.context(), Some("package not installed"));

        let err = ExtractionError::MissingEntry {
            name: "fr.pak".into(),
        };
        assert_eq!(err.context(), Some("fr.pak"));

        assert_eq!(ExtractionError::ConfigLocked.context(), None);
    }
}
