//! # knapsack-evo
//!
//! A generational genetic algorithm for the 0/1 knapsack problem.
//!
//! Items with value and weight are packed into a knapsack under a hard weight
//! limit; candidate packings are encoded as fixed-length bit vector genomes
//! and evolved through fitness-proportionate selection, single-point
//! crossover, and point mutation, with the top two genomes of each generation
//! carried forward unchanged.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces a run exactly.
//!
//! ## Quick start
//!
//! ```rust
//! use knapsack_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let items = extended_travel_items();
//! let genome_length = items.len();
//!
//! let evolution = EvolutionBuilder::new()
//!     .generation_limit(100)
//!     .fitness_limit(740)
//!     .populator(RandomPopulator::new(10, genome_length))
//!     .selection(RouletteSelection::new())
//!     .crossover(SinglePointCrossover::new())
//!     .mutation(PointMutation::default())
//!     .fitness(KnapsackFitness::new(items.clone(), 3000))
//!     .build()?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let outcome = evolution.run(&mut rng)?;
//! let best = genome_to_items(outcome.best(), &items)?;
//! println!("{best}");
//! # Ok::<(), knapsack_evo::EvolutionError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod report;

pub use error::{EvoResult, EvolutionError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{extended_travel_items, travel_items, Item};
    pub use crate::error::{EvoResult, EvolutionError};
    pub use crate::evolution::{
        Evolution, EvolutionBuilder, EvolutionConfig, EvolutionOutcome, GenerationStats,
    };
    pub use crate::fitness::{Fitness, KnapsackFitness};
    pub use crate::genome::Genome;
    pub use crate::operators::{
        CrossoverOperator, FilteredRouletteSelection, MutationOperator, PointMutation,
        RouletteSelection, SelectionOperator, SinglePointCrossover,
    };
    pub use crate::population::{Populator, RandomPopulator};
    pub use crate::report::{genome_to_items, PackedSelection};
}
