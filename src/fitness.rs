//! Fitness evaluation
//!
//! Scores a genome against an item catalog under a hard weight limit.

use crate::catalog::Item;
use crate::error::{EvoResult, EvolutionError};
use crate::genome::Genome;

/// Fitness function trait
///
/// Evaluation is deterministic: the same genome always yields the same score.
pub trait Fitness {
    /// Score a genome
    ///
    /// Fails with [`EvolutionError::LengthMismatch`] when the genome length
    /// does not match the problem size.
    fn evaluate(&self, genome: &Genome) -> EvoResult<u64>;
}

/// Hard-constraint knapsack fitness
///
/// The score of a genome is the total value of the packed items when their
/// total weight stays within the limit. The moment accumulated weight exceeds
/// the limit the whole genome scores 0 — overweight genomes are zeroed, not
/// penalized proportionally.
#[derive(Clone, Debug)]
pub struct KnapsackFitness {
    items: Vec<Item>,
    weight_limit: u64,
}

impl KnapsackFitness {
    /// Create a fitness evaluator over the given catalog and weight limit
    pub fn new(items: Vec<Item>, weight_limit: u64) -> Self {
        Self {
            items,
            weight_limit,
        }
    }

    /// The catalog this evaluator scores against
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The hard weight limit
    pub fn weight_limit(&self) -> u64 {
        self.weight_limit
    }
}

impl Fitness for KnapsackFitness {
    fn evaluate(&self, genome: &Genome) -> EvoResult<u64> {
        if genome.len() != self.items.len() {
            return Err(EvolutionError::LengthMismatch {
                expected: self.items.len(),
                actual: genome.len(),
            });
        }

        let mut weight = 0u64;
        let mut value = 0u64;
        for (i, item) in self.items.iter().enumerate() {
            if genome.bit(i) {
                weight += item.weight;
                value += item.value;

                if weight > self.weight_limit {
                    return Ok(0);
                }
            }
        }
        Ok(value)
    }
}
