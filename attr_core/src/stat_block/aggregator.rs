//! ModifierAccumulator - Collects modifier contributions for one attribute

use serde::{Deserialize, Serialize};

/// A single labelled contribution to an attribute modifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Which part of a source produced this (e.g. "ego", "rings")
    pub label: String,
    pub amount: i32,
}

/// Accumulates modifier contributions from various sources
///
/// Zero contributions are not recorded, so the list doubles as a
/// human-readable breakdown of where a modifier comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierAccumulator {
    total: i32,
    contributions: Vec<Contribution>,
}

impl ModifierAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a labelled amount
    pub fn add(&mut self, label: &str, amount: i32) {
        if amount == 0 {
            return;
        }
        self.total += amount;
        self.contributions.push(Contribution {
            label: label.to_string(),
            amount,
        });
    }

    /// Sum of all contributions
    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}
