//! Subcommand implementations.

pub mod extract;
pub mod purge;
pub mod select;
pub mod status;

use crate::cli::SelectionArgs;
use pakcache_core::SelectionConfig;

/// Builds the core selection configuration from command-line flags.
pub fn selection_config(args: &SelectionArgs) -> SelectionConfig {
    SelectionConfig::default()
        .with_mandatory(args.mandatory.iter().cloned())
        .with_implicit_locale(!args.no_implicit_locale)
}
