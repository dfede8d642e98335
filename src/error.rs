//! Error types for knapsack-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Top-level error type for evolution operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvolutionError {
    /// Genome length does not match its counterpart (catalog or other parent)
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Every genome in the population scored zero fitness
    #[error("All genomes have zero fitness; selection pool is empty")]
    AllZeroFitness,

    /// The population is too small to apply elitism and pair selection
    #[error("Population of {len} is too small; at least 2 genomes are required")]
    PopulationTooSmall { len: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
