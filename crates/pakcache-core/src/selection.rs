//! File selection engine.
//!
//! Bundle listings can be large, so every name in the configuration is
//! folded into one anchored alternation and each entry is tested once.

use std::path::PathBuf;

use regex::Regex;

use crate::LocaleId;
use crate::Result;
use crate::SelectionConfig;

/// Suffix of locale resource files in the bundle.
pub const RESOURCE_SUFFIX: &str = ".pak";

/// Compiled predicate choosing which bundle entries to extract.
///
/// # Examples
///
/// ```
/// use pakcache_core::LocaleId;
/// use pakcache_core::Selection;
/// use pakcache_core::SelectionConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SelectionConfig::default().with_mandatory(["resources.pak"]);
/// let selection = Selection::build(&config, &LocaleId::new("fr"))?;
///
/// assert!(selection.matches("resources.pak"));
/// assert!(selection.matches("fr-CA.pak"));
/// assert!(!selection.matches("de.pak"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Selection {
    matcher: Option<Regex>,
    downloaded: Vec<PathBuf>,
}

impl Selection {
    /// Builds the selection for `locale` from `config`.
    ///
    /// With no mandatory names and the implicit locale disabled the
    /// selection matches no bundle entry; downloaded paths are still kept.
    pub fn build(config: &SelectionConfig, locale: &LocaleId) -> Result<Self> {
        let mut branches: Vec<String> = config
            .mandatory_names
            .iter()
            .map(|name| regex::escape(name))
            .collect();

        if config.extract_implicit_locale {
            let language = locale.language();
            if language.is_empty() {
                log::warn!("Locale '{locale}' has no language; skipping implicit locale pak");
            } else {
                branches.push(format!(
                    r"{}(?:-[A-Za-z0-9_]+)?{}",
                    regex::escape(&language),
                    regex::escape(RESOURCE_SUFFIX)
                ));
            }
        }

        let matcher = if branches.is_empty() {
            None
        } else {
            Some(Regex::new(&format!("^(?:{})$", branches.join("|")))?)
        };

        Ok(Self {
            matcher,
            downloaded: config.downloaded_paths.clone(),
        })
    }

    /// Returns `true` if the full entry name matches.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// Filters a bundle listing down to the selected entries.
    pub fn select<I, S>(&self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry.as_ref()))
            .map(|entry| entry.as_ref().to_string())
            .collect()
    }

    /// Downloaded files, which are always extracted.
    #[must_use]
    pub fn downloaded(&self) -> &[PathBuf] {
        &self.downloaded
    }

    /// The compiled pattern, or `None` when nothing can match.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.matcher.as_ref().map(Regex::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bundle() -> Vec<&'static str> {
        vec!["a.pak", "b.pak", "fr.pak", "fr-CA.pak", "de.pak"]
    }

    #[test]
    fn test_mandatory_and_locale_selection() {
        let config = SelectionConfig::default().with_mandatory(["a.pak", "b.pak"]);
        let selection = Selection::build(&config, &LocaleId::new("fr")).unwrap();

        let mut selected = selection.select(bundle());
        selected.sort();
        assert_eq!(selected, vec!["a.pak", "b.pak", "fr-CA.pak", "fr.pak"]);
    }

    #[test]
    fn test_implicit_locale_disabled() {
        let config = SelectionConfig::default()
            .with_mandatory(["a.pak"])
            .with_implicit_locale(false);
        let selection = Selection::build(&config, &LocaleId::new("fr")).unwrap();

        assert_eq!(selection.select(bundle()), vec!["a.pak"]);
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        let config = SelectionConfig::default()
            .with_implicit_locale(false)
            .with_downloaded(["/staging/extra.pak"]);
        let selection = Selection::build(&config, &LocaleId::new("fr")).unwrap();

        assert!(selection.pattern().is_none());
        assert!(selection.select(bundle()).is_empty());
        assert!(!selection.matches(""));
        assert_eq!(selection.downloaded(), &[PathBuf::from("/staging/extra.pak")]);
    }

    #[test]
    fn test_match_is_anchored() {
        let config = SelectionConfig::default().with_mandatory(["a.pak"]);
        let selection = Selection::build(&config, &LocaleId::new("fr")).unwrap();

        assert!(!selection.matches("xa.pak"));
        assert!(!selection.matches("a.pak.bak"));
        assert!(!selection.matches("xfr.pak"));
        assert!(!selection.matches("fr.pakx"));
    }

    #[test]
    fn test_mandatory_names_are_literal() {
        let config = SelectionConfig::default()
            .with_mandatory(["a.pak", "c++(1).pak"])
            .with_implicit_locale(false);
        let selection = Selection::build(&config, &LocaleId::new("fr")).unwrap();

        assert!(selection.matches("c++(1).pak"));
        // `.` must not act as a wildcard.
        assert!(!selection.matches("aXpak"));
    }

    #[test]
    fn test_locale_region_forms() {
        let config = SelectionConfig::default();
        let selection = Selection::build(&config, &LocaleId::new("pt-BR")).unwrap();

        assert!(selection.matches("pt.pak"));
        assert!(selection.matches("pt-BR.pak"));
        assert!(selection.matches("pt-PT.pak"));
        assert!(!selection.matches("pt-.pak"));
        assert!(!selection.matches("pt-BR-x.pak"));
        assert!(!selection.matches("pt.dat"));
    }

    #[test]
    fn test_locale_region_is_ascii_only() {
        let config = SelectionConfig::default();
        let selection = Selection::build(&config, &LocaleId::new("fr")).unwrap();

        assert!(selection.matches("fr-CA.pak"));
        assert!(selection.matches("fr-419.pak"));
        assert!(!selection.matches("fr-ÇA.pak"));
        assert!(!selection.matches("fr-日本.pak"));
    }

    #[test]
    fn test_empty_language_skips_locale_branch() {
        let config = SelectionConfig::default();
        let selection = Selection::build(&config, &LocaleId::new("")).unwrap();

        assert!(selection.pattern().is_none());
        assert!(!selection.matches(".pak"));
        assert!(!selection.matches("-CA.pak"));
    }

    proptest! {
        /// Every mandatory name selects exactly itself, whatever characters it holds.
        #[test]
        fn prop_mandatory_name_matches_literally(name in "[a-zA-Z0-9_.+*?()\\[\\]{}|^$-]{1,24}") {
            let config = SelectionConfig::default()
                .with_mandatory([name.clone()])
                .with_implicit_locale(false);
            let selection = Selection::build(&config, &LocaleId::new("en")).unwrap();

            prop_assert!(selection.matches(&name));
            let prefixed = format!("x{name}");
            let suffixed = format!("{name}x");
            prop_assert!(!selection.matches(&prefixed));
            prop_assert!(!selection.matches(&suffixed));
        }

        /// Locale paks for other languages are never selected.
        #[test]
        fn prop_other_language_rejected(region in "[A-Za-z0-9]{1,4}") {
            let config = SelectionConfig::default();
            let selection = Selection::build(&config, &LocaleId::new("fr")).unwrap();

            let own = format!("fr-{region}.pak");
            let other = format!("de-{region}.pak");
            prop_assert!(selection.matches(&own));
            prop_assert!(!selection.matches(&other));
        }
    }
}
