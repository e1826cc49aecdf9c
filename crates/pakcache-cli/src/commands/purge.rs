//! Purge command implementation.

use crate::cli::PurgeArgs;
use crate::output::OutputFormatter;
use anyhow::Result;
use pakcache_core::OutputDir;
use pakcache_core::purge;

pub fn execute(args: &PurgeArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = OutputDir::resolve(&args.data_root);
    let removed = purge(output_dir.as_path());
    formatter.format_purge_result(output_dir.as_path(), removed)
}
