//! Small value types shared across the extraction engine.
//!
//! - [`OutputDir`]: the cache directory derived from an application data root
//! - [`LocaleId`]: an already-resolved locale tag used for implicit selection

pub mod locale;
pub mod output_dir;

pub use locale::LocaleId;
pub use output_dir::OutputDir;
