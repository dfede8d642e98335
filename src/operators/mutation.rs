//! Mutation operators
//!
//! Random bit flips applied to offspring genomes.

use rand::Rng;

use crate::genome::Genome;
use crate::operators::traits::MutationOperator;

/// Point mutation
///
/// Repeats `num` rounds: pick a uniformly random locus, then flip it with
/// probability `probability`, otherwise leave it alone. The default
/// `probability` of 0.5 means each selected locus flips only half the time;
/// that is the intended behavior of this operator, not a conventional
/// per-locus rate.
#[derive(Clone, Copy, Debug)]
pub struct PointMutation {
    /// Number of mutation rounds per genome
    pub num: usize,
    /// Chance that a selected locus actually flips
    pub probability: f64,
}

impl PointMutation {
    /// Create a point mutation with the given rounds and flip probability
    pub fn new(num: usize, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self { num, probability }
    }
}

impl Default for PointMutation {
    fn default() -> Self {
        Self::new(1, 0.5)
    }
}

impl MutationOperator for PointMutation {
    fn mutate<R: Rng>(&self, genome: &mut Genome, rng: &mut R) {
        if genome.is_empty() {
            return;
        }
        for _ in 0..self.num {
            let index = rng.gen_range(0..genome.len());
            if rng.gen::<f64>() < self.probability {
                genome.flip(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mutation_preserves_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genome = Genome::random(12, &mut rng);
        PointMutation::default().mutate(&mut genome, &mut rng);
        assert_eq!(genome.len(), 12);
    }

    #[test]
    fn test_zero_probability_never_flips() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = Genome::random(12, &mut rng);
        let mut genome = original.clone();
        PointMutation::new(100, 0.0).mutate(&mut genome, &mut rng);
        assert_eq!(genome, original);
    }

    #[test]
    fn test_flip_count_bounded_by_num() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let original = Genome::random(16, &mut rng);
            let mut genome = original.clone();
            PointMutation::new(3, 1.0).mutate(&mut genome, &mut rng);

            let differing = original
                .bits()
                .iter()
                .zip(genome.bits())
                .filter(|(a, b)| a != b)
                .count();
            assert!(differing <= 3);
        }
    }

    #[test]
    fn test_certain_single_flip_changes_exactly_one_bit() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = Genome::zeros(8);
        let mut genome = original.clone();
        PointMutation::new(1, 1.0).mutate(&mut genome, &mut rng);
        assert_eq!(genome.count_ones(), 1);
    }

    #[test]
    fn test_empty_genome_is_untouched() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genome = Genome::zeros(0);
        PointMutation::default().mutate(&mut genome, &mut rng);
        assert!(genome.is_empty());
    }

    #[test]
    fn test_zero_rounds_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = Genome::random(8, &mut rng);
        let mut genome = original.clone();
        PointMutation::new(0, 1.0).mutate(&mut genome, &mut rng);
        assert_eq!(genome, original);
    }
}
