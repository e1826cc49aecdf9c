//! Select command implementation.

use crate::cli::SelectArgs;
use crate::commands::selection_config;
use crate::error::add_bundle_context;
use crate::output::OutputFormatter;
use crate::output::SelectionSummary;
use anyhow::Context;
use anyhow::Result;
use pakcache_core::LocaleId;
use pakcache_core::Selection;
use pakcache_core::bundle;

pub fn execute(args: &SelectArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let bundle = add_bundle_context(bundle::open(&args.bundle), &args.bundle)?;
    let locale = LocaleId::new(args.selection.resolved_locale());
    let selection = add_bundle_context(
        Selection::build(&selection_config(&args.selection), &locale),
        &args.bundle,
    )?;

    let entries = bundle
        .list()
        .with_context(|| format!("failed to list bundle '{}'", args.bundle.display()))?;
    let selected = selection.select(&entries);

    formatter.format_selection(&SelectionSummary {
        locale: locale.as_str(),
        pattern: selection.pattern(),
        selected: &selected,
        bundle_entries: entries.len(),
    })
}
