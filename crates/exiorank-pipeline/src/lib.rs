#![forbid(unsafe_code)]
//! exiorank-pipeline: load → inspect → filter → resolve → rank → render.
//!
//! One synchronous batch run per invocation; every stage output is an
//! immutable snapshot consumed only by the next stage. Recoverable
//! conditions ride along in the `RunSummary`; only conditions that make
//! continuation meaningless abort the run.

pub mod config;
pub mod run;
pub mod summary;

pub use config::RunConfig;
pub use run::run;
pub use summary::RunSummary;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal pipeline conditions, each naming its stage and offender.
#[derive(Debug, Error)]
pub enum Error {
    #[error("load stage: {0}")]
    Load(exiorank_io::Error),

    #[error("inspect stage: {0}")]
    Inspect(exiorank_core::error::Error),

    #[error("filter stage: {0}")]
    Filter(exiorank_core::error::Error),

    #[error("rank stage: {0}")]
    Rank(exiorank_core::error::Error),

    #[error("unknown extension account '{account}'; dataset has {available:?}")]
    UnknownAccount {
        account: String,
        available: Vec<String>,
    },

    #[error("render stage: {0}")]
    Render(exiorank_io::Error),

    #[error("summary stage: {0}")]
    Summary(exiorank_core::error::Error),
}
