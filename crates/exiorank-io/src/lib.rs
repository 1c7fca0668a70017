#![forbid(unsafe_code)]
//! exiorank-io: engine-export tables in, report artifacts out.
//!
//! - `readers`: the CSV directory export of the external MRIO engine →
//!   a validated `Dataset` handle.
//! - `writers`: SVG bar chart and CSV table from ranked entries.
//!
//! The engine's native archive format is its own business; only the
//! exported tables are parsed here.

pub mod readers;
pub mod writers;

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset export not found: {0}")]
    NotFound(PathBuf),

    #[error("dataset format error in {file}: {reason}")]
    Format { file: String, reason: String },

    #[error(transparent)]
    Core(#[from] exiorank_core::error::Error),

    #[error("nothing to render: ranked report is empty")]
    EmptyReport,
}
