//! Curated industry family definitions.

use serde::Serialize;

/// An ordered set of canonical sector names for one industry family.
///
/// `core` is the family proper; `full` additionally carries the downstream
/// waste-handling sectors. The constructor builds `full` from `core` plus
/// the downstream names, so `core ⊆ full` holds structurally.
/// Deliberately not `Deserialize`: overrides come in as core + downstream
/// lists and go through `new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryDefinition {
    core: Vec<String>,
    full: Vec<String>,
}

impl IndustryDefinition {
    pub fn new(core: Vec<String>, downstream: Vec<String>) -> Self {
        let mut full = core.clone();
        full.extend(downstream);
        Self { core, full }
    }

    /// The textiles/apparel/leather family, with its two waste-treatment
    /// sectors downstream. Labels are the canonical EXIOBASE product names.
    pub fn textiles() -> Self {
        Self::new(
            vec![
                "Textiles (17)".to_string(),
                "Wearing apparel; furs (18)".to_string(),
                "Leather and leather products (19)".to_string(),
            ],
            vec![
                "Textiles waste for treatment: incineration".to_string(),
                "Textiles waste for treatment: landfill".to_string(),
            ],
        )
    }

    pub fn core(&self) -> &[String] {
        &self.core
    }

    pub fn full(&self) -> &[String] {
        &self.full
    }

    /// True iff `label` contains any core name as a substring. This is the
    /// default target-industry predicate applied once at ranking time.
    pub fn matches_core(&self, label: &str) -> bool {
        self.core.iter().any(|name| label.contains(name.as_str()))
    }
}
