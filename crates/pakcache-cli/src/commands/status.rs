//! Status command implementation.

use crate::cli::StatusArgs;
use crate::error::add_bundle_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use pakcache_core::CacheStatus;
use pakcache_core::FilePackageInfo;
use pakcache_core::OutputDir;

pub fn execute(args: &StatusArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = OutputDir::resolve(&args.data_root);
    let status = add_bundle_context(CacheStatus::inspect(&output_dir), output_dir.as_path())?;

    let current = args.bundle.as_ref().map(|bundle| {
        status.is_current(&FilePackageInfo::new(bundle, args.version_code.as_str()))
    });

    formatter.format_status(&status, current)
}
