//! Bit vector genome
//!
//! This module provides the fixed-length binary genome encoding
//! inclusion/exclusion of each catalog item.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed-length bit vector genome
///
/// Bit `i` decides whether item `i` of the catalog is packed. The length is
/// fixed at construction; every operation that pairs a genome with a catalog
/// or another genome checks the lengths match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Create a genome from the given bits
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create an all-zeros genome of the given length
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// Create an all-ones genome of the given length
    pub fn ones(length: usize) -> Self {
        Self {
            bits: vec![true; length],
        }
    }

    /// Create a genome of independent uniform random bits
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..length).map(|_| rng.gen_bool(0.5)).collect(),
        }
    }

    /// Create a genome from 0/1 integers
    ///
    /// Any nonzero value is treated as a set bit.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            bits: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Number of bits in this genome
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the genome has no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the bit at the given index
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Flip the bit at the given index
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// The underlying bits
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Splice two genomes at the given cut point
    ///
    /// Returns `self[..point]` followed by `other[point..]`. Callers are
    /// responsible for checking the lengths match and `point` is in range.
    pub(crate) fn splice(&self, other: &Genome, point: usize) -> Genome {
        let mut bits = self.bits[..point].to_vec();
        bits.extend_from_slice(&other.bits[point..]);
        Genome { bits }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_genome_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for length in [0, 1, 7, 12, 64] {
            let genome = Genome::random(length, &mut rng);
            assert_eq!(genome.len(), length);
        }
    }

    #[test]
    fn test_zeros_and_ones() {
        assert_eq!(Genome::zeros(5).count_ones(), 0);
        assert_eq!(Genome::ones(5).count_ones(), 5);
    }

    #[test]
    fn test_flip_toggles_single_bit() {
        let mut genome = Genome::zeros(4);
        genome.flip(2);
        assert_eq!(genome, Genome::from_bits(&[0, 0, 1, 0]));
        genome.flip(2);
        assert_eq!(genome, Genome::zeros(4));
    }

    #[test]
    fn test_splice_prefix_and_suffix() {
        let a = Genome::from_bits(&[1, 1, 1, 1]);
        let b = Genome::from_bits(&[0, 0, 0, 0]);
        assert_eq!(a.splice(&b, 2), Genome::from_bits(&[1, 1, 0, 0]));
        assert_eq!(b.splice(&a, 3), Genome::from_bits(&[0, 0, 0, 1]));
    }

    #[test]
    fn test_display_renders_bit_string() {
        let genome = Genome::from_bits(&[1, 0, 1, 1, 0]);
        assert_eq!(genome.to_string(), "10110");
    }

    #[test]
    fn test_random_genomes_eventually_differ() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Genome::random(64, &mut rng);
        let b = Genome::random(64, &mut rng);
        assert_ne!(a, b);
    }
}
