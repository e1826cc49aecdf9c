//! Versioned extraction of bundled resource paks into a writable cache.
//!
//! `pakcache-core` copies selected entries of a read-only application bundle,
//! plus any externally staged files, into `<data root>/paks` on a background
//! worker. The cache is stamped with the application build that produced it
//! and is purged and repopulated whenever that build changes. A failed run
//! never leaves a half-populated cache behind.
//!
//! # Examples
//!
//! ```no_run
//! use pakcache_core::ApkBundle;
//! use pakcache_core::FilePackageInfo;
//! use pakcache_core::ResourceExtractor;
//! use pakcache_core::SelectionConfig;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ResourceExtractor::new(
//!     "/var/lib/app",
//!     Arc::new(ApkBundle::open("/opt/app/base.apk")?),
//!     Arc::new(FilePackageInfo::new("/opt/app/base.apk", "1200")),
//!     "de-DE",
//! )
//! .with_selection_config(SelectionConfig::default().with_mandatory(["resources.pak"]))?;
//!
//! extractor.start_extraction();
//! let completion = extractor.wait_for_completion();
//! println!("success: {}", completion.is_success());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bundle;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod extractor;
pub mod package;
pub mod report;
pub mod selection;
pub mod stamp;
pub mod status;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export main API types
pub use bundle::ApkBundle;
pub use bundle::Bundle;
pub use bundle::DirBundle;
pub use config::SelectionConfig;
pub use error::ExtractionError;
pub use error::Result;
pub use extraction::purge;
pub use extractor::ResourceExtractor;
pub use package::FilePackageInfo;
pub use package::PackageInfo;
pub use package::PackageInfoSource;
pub use report::Completion;
pub use report::ExtractionReport;
pub use selection::Selection;
pub use stamp::VersionStamp;
pub use status::CacheStatus;

// Re-export types module for easier access
pub use types::LocaleId;
pub use types::OutputDir;
