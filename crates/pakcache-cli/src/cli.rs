//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::env;
use std::path::PathBuf;

/// Locale used when neither the command line nor the environment names one.
pub const FALLBACK_LOCALE: &str = "en";

#[derive(Parser)]
#[command(name = "pakcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract selected resources into the cache
    Extract(ExtractArgs),
    /// List the bundle entries that would be extracted
    Select(SelectArgs),
    /// Show what the cache currently holds
    Status(StatusArgs),
    /// Remove everything from the cache
    Purge(PurgeArgs),
}

/// Selection flags shared by `extract` and `select`.
#[derive(clap::Args)]
pub struct SelectionArgs {
    /// Resource name that is always extracted (can be repeated)
    #[arg(long = "mandatory", short = 'm', value_name = "NAME")]
    pub mandatory: Vec<String>,

    /// Locale tag, e.g. fr-CA (default: from LC_ALL, LC_MESSAGES or LANG)
    #[arg(long, value_name = "TAG")]
    pub locale: Option<String>,

    /// Do not extract resources for the current locale
    #[arg(long)]
    pub no_implicit_locale: bool,
}

impl SelectionArgs {
    /// Returns the explicit locale or the one named by the environment.
    pub fn resolved_locale(&self) -> String {
        self.locale.clone().unwrap_or_else(locale_from_env)
    }
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Application bundle: a directory of resources or a package file
    #[arg(long, short = 'b', value_name = "PATH")]
    pub bundle: PathBuf,

    /// Application data root; resources land in <DIR>/paks
    #[arg(long, short = 'd', value_name = "DIR")]
    pub data_root: PathBuf,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Externally staged file to copy into the cache (can be repeated)
    #[arg(long = "downloaded", value_name = "PATH")]
    pub downloaded: Vec<PathBuf>,

    /// Application version code recorded in the cache stamp
    #[arg(long, default_value = "0", value_name = "CODE")]
    pub version_code: String,
}

#[derive(clap::Args)]
pub struct SelectArgs {
    /// Application bundle: a directory of resources or a package file
    #[arg(long, short = 'b', value_name = "PATH")]
    pub bundle: PathBuf,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(clap::Args)]
pub struct StatusArgs {
    /// Application data root
    #[arg(long, short = 'd', value_name = "DIR")]
    pub data_root: PathBuf,

    /// Bundle to compare the cache stamp against
    #[arg(long, short = 'b', value_name = "PATH")]
    pub bundle: Option<PathBuf>,

    /// Application version code to compare against
    #[arg(long, default_value = "0", value_name = "CODE")]
    pub version_code: String,
}

#[derive(clap::Args)]
pub struct PurgeArgs {
    /// Application data root
    #[arg(long, short = 'd', value_name = "DIR")]
    pub data_root: PathBuf,
}

/// Reads the locale from `LC_ALL`, `LC_MESSAGES` and `LANG`, in that order.
pub fn locale_from_env() -> String {
    locale_from_vars(|key| env::var(key).ok())
}

fn locale_from_vars(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(&lookup)
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}
