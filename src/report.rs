//! Result reporting
//!
//! Translates a genome back into catalog terms: which items are packed and
//! what they add up to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::error::{EvoResult, EvolutionError};
use crate::genome::Genome;

/// The items a genome packs, with their totals
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedSelection {
    /// Selected item names, in catalog order
    pub names: Vec<String>,
    /// Sum of selected item values
    pub total_value: u64,
    /// Sum of selected item weights
    pub total_weight: u64,
}

impl fmt::Display for PackedSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] value {} weight {}",
            self.names.join(", "),
            self.total_value,
            self.total_weight
        )
    }
}

/// Resolve a genome against a catalog
///
/// Walks genome and catalog in parallel; every set bit contributes its item's
/// name, value, and weight. Fails with [`EvolutionError::LengthMismatch`]
/// when the lengths differ.
pub fn genome_to_items(genome: &Genome, items: &[Item]) -> EvoResult<PackedSelection> {
    if genome.len() != items.len() {
        return Err(EvolutionError::LengthMismatch {
            expected: items.len(),
            actual: genome.len(),
        });
    }

    let mut names = Vec::new();
    let mut total_value = 0u64;
    let mut total_weight = 0u64;
    for (i, item) in items.iter().enumerate() {
        if genome.bit(i) {
            names.push(item.name.clone());
            total_value += item.value;
            total_weight += item.weight;
        }
    }

    Ok(PackedSelection {
        names,
        total_value,
        total_weight,
    })
}
