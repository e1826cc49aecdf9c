//! Selection configuration for resource extraction.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Which resources an extraction copies into the cache.
///
/// The configuration is handed to a [`ResourceExtractor`] before extraction
/// starts and is frozen from then on; see
/// [`ResourceExtractor::set_selection_config`].
///
/// # Examples
///
/// ```
/// use pakcache_core::SelectionConfig;
///
/// let config = SelectionConfig::default()
///     .with_mandatory(["resources.pak", "chrome_100_percent.pak"])
///     .with_downloaded(["/sdcard/Download/icudtl.dat"]);
///
/// assert!(config.extract_implicit_locale);
/// assert_eq!(config.mandatory_names.len(), 2);
/// ```
///
/// [`ResourceExtractor`]: crate::ResourceExtractor
/// [`ResourceExtractor::set_selection_config`]: crate::ResourceExtractor::set_selection_config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Bundle entries that are always extracted, matched literally.
    pub mandatory_names: BTreeSet<String>,

    /// Also extract `<language>[-<region>].pak` for the current locale.
    pub extract_implicit_locale: bool,

    /// Files outside the bundle copied verbatim, keyed by base file name.
    pub downloaded_paths: Vec<PathBuf>,
}

impl Default for SelectionConfig {
    /// Creates a configuration that selects only the implicit locale pak.
    fn default() -> Self {
        Self {
            mandatory_names: BTreeSet::new(),
            extract_implicit_locale: true,
            downloaded_paths: Vec::new(),
        }
    }
}

impl SelectionConfig {
    /// Adds mandatory bundle entry names.
    #[must_use]
    pub fn with_mandatory<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mandatory_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Appends downloaded file paths, preserving order.
    #[must_use]
    pub fn with_downloaded<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.downloaded_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Enables or disables the implicit locale pak.
    #[must_use]
    pub fn with_implicit_locale(mut self, extract: bool) -> Self {
        self.extract_implicit_locale = extract;
        self
    }

    /// Returns `true` if nothing at all would be extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mandatory_names.is_empty()
            && !self.extract_implicit_locale
            && self.downloaded_paths.is_empty()
    }
}
