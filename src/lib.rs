#![forbid(unsafe_code)]
//! exiorank: umbrella crate for the reporting-pipeline workspace.
//!
//! Re-exports the pieces a caller typically needs; the member crates
//! remain usable directly.

pub use exiorank_core::prelude::*;
pub use exiorank_pipeline::{run, RunConfig, RunSummary};
