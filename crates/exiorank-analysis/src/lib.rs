#![forbid(unsafe_code)]
//! exiorank-analysis: the authored stages of the reporting pipeline.
//!
//! - `inspect`: structural diagnostics over a loaded dataset.
//! - `filter`: pollutant-row selection and per-column aggregation.
//! - `resolve`: curated industry names → sector positions.
//! - `rank`: top-N ordering with a single authoritative tagging step.
//!
//! Stages are pure functions over `exiorank-core` types. Recoverable
//! conditions (no pollutant match, unresolved names) come back as data in
//! the stage outputs, never as errors; only degenerate inputs fail.

pub mod filter;
pub mod inspect;
pub mod rank;
pub mod resolve;
