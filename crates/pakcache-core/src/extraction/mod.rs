//! The background extraction job and its recovery step.

pub mod purge;
pub mod task;

pub use purge::purge;
pub use task::ExtractionTask;
