//! Convenience re-exports for downstream crates.

pub use crate::dataset::{Dataset, ExtensionAccount};
pub use crate::error::{Error, Result};
pub use crate::hash::{hash_serde, Hash256};
pub use crate::industry::IndustryDefinition;
pub use crate::series::EmissionsSeries;
pub use crate::types::{ColumnKey, RankedEntry, StructureReport, STRUCTURE_SAMPLE_LEN};
