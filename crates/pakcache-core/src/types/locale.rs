//! Locale identifier consumed by the selection engine.

use std::fmt;

/// An already-resolved locale tag such as `fr`, `fr-CA` or `pt_BR`.
///
/// The engine only cares about the language subtag: implicit locale
/// resources are matched by `<language>` optionally followed by any region.
///
/// # Examples
///
/// ```
/// use pakcache_core::LocaleId;
///
/// let locale = LocaleId::new("fr-CA");
/// assert_eq!(locale.language(), "fr");
///
/// let posix = LocaleId::new("pt_BR.UTF-8");
/// assert_eq!(posix.language(), "pt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId(String);

impl LocaleId {
    /// Wraps a locale tag without validating it.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercase language subtag.
    ///
    /// This is everything before the first `-`, `_`, `.` or `@`. An empty
    /// string means the tag carries no language.
    #[must_use]
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LocaleId {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}
