//! Genetic operators
//!
//! Selection, crossover, and mutation operators composed by the evolution
//! driver. Each operator draws randomness from a caller-supplied [`rand::Rng`]
//! so runs can be reproduced with a seeded generator.

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod traits;

pub use crossover::SinglePointCrossover;
pub use mutation::PointMutation;
pub use selection::{FilteredRouletteSelection, RouletteSelection};
pub use traits::{CrossoverOperator, MutationOperator, SelectionOperator};
