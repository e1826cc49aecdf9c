//! pakcache CLI - Command-line utility for extracting and inspecting
//! resource pak caches.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_logging(cli.verbose, cli.quiet);
    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Extract(args) => commands::extract::execute(args, &*formatter),
        cli::Commands::Select(args) => commands::select::execute(args, &*formatter),
        cli::Commands::Status(args) => commands::status::execute(args, &*formatter),
        cli::Commands::Purge(args) => commands::purge::execute(args, &*formatter),
    }
}

/// Routes core diagnostics to stderr; `RUST_LOG` overrides the flag-derived level.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
