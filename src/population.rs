//! Population construction
//!
//! The populator seam keeps the evolution driver generic over catalog size
//! and population size: the driver only ever asks for an initial population.

use rand::Rng;

use crate::genome::Genome;

/// Population construction trait
pub trait Populator {
    /// Build an initial population
    fn populate<R: Rng>(&self, rng: &mut R) -> Vec<Genome>;
}

/// Uniform random populator
///
/// Produces `size` independently generated genomes of `genome_length` bits.
#[derive(Clone, Copy, Debug)]
pub struct RandomPopulator {
    /// Number of genomes to generate
    pub size: usize,
    /// Length of each genome
    pub genome_length: usize,
}

impl RandomPopulator {
    /// Create a new random populator
    pub fn new(size: usize, genome_length: usize) -> Self {
        Self {
            size,
            genome_length,
        }
    }
}

impl Populator for RandomPopulator {
    fn populate<R: Rng>(&self, rng: &mut R) -> Vec<Genome> {
        (0..self.size)
            .map(|_| Genome::random(self.genome_length, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_populator_respects_size_and_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let population = RandomPopulator::new(10, 12).populate(&mut rng);
        assert_eq!(population.len(), 10);
        assert!(population.iter().all(|g| g.len() == 12));
    }

    #[test]
    fn test_populator_is_deterministic_under_a_fixed_seed() {
        let a = RandomPopulator::new(6, 8).populate(&mut StdRng::seed_from_u64(1));
        let b = RandomPopulator::new(6, 8).populate(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
