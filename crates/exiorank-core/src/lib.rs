#![forbid(unsafe_code)]
//! exiorank-core: shared kernel for the exiorank reporting pipeline.
//!
//! This crate contains only *pure* types and small helpers. There is
//! **no I/O** and **no rendering** here, by design.
//!
//! Crates that use this:
//! - exiorank-io: builds `Dataset` from engine-export tables; writes report artifacts.
//! - exiorank-analysis: the filter/resolve/rank stages over these types.
//! - exiorank-pipeline: orchestrates everything and emits a `RunSummary`.

pub mod dataset;
pub mod error;
pub mod hash;
pub mod industry;
pub mod prelude;
pub mod series;
pub mod types;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
