//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::selection_config;
use crate::error::add_bundle_context;
use crate::error::completion_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use pakcache_core::Completion;
use pakcache_core::FilePackageInfo;
use pakcache_core::ResourceExtractor;
use pakcache_core::bundle;
use std::sync::Arc;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let bundle = add_bundle_context(bundle::open(&args.bundle), &args.bundle)?;
    let package = FilePackageInfo::new(&args.bundle, args.version_code.as_str());
    let locale = args.selection.resolved_locale();
    let config = selection_config(&args.selection).with_downloaded(args.downloaded.iter().cloned());

    log::debug!(
        "extracting from {} with locale {locale}",
        args.bundle.display()
    );

    let extractor =
        ResourceExtractor::new(&args.data_root, Arc::from(bundle), Arc::new(package), locale)
            .with_selection_config(config)?;
    extractor.start_extraction();
    let completion = extractor.wait_for_completion();

    if let Some(err) = completion_error(&completion, extractor.output_dir()) {
        return Err(err);
    }
    if let Completion::Succeeded(report) = &completion {
        formatter.format_extraction_result(extractor.output_dir(), report)?;
    }

    Ok(())
}
