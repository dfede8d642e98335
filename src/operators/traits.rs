//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.

use rand::Rng;

use crate::error::EvoResult;
use crate::genome::Genome;

/// Selection operator trait
///
/// Picks two parents from a scored population, with replacement, so the
/// returned genomes may be identical.
pub trait SelectionOperator {
    /// Select a parent pair from `(genome, fitness)` pairs
    fn select_pair<R: Rng>(
        &self,
        scored: &[(Genome, u64)],
        rng: &mut R,
    ) -> EvoResult<(Genome, Genome)>;
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create two offspring.
pub trait CrossoverOperator {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R)
        -> EvoResult<(Genome, Genome)>;
}

/// Mutation operator trait
///
/// Applies random changes to a genome in place.
pub trait MutationOperator {
    /// Mutate a genome in place
    fn mutate<R: Rng>(&self, genome: &mut Genome, rng: &mut R);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Minimal operators exercising the trait seams the driver relies on.
    struct FirstTwoSelection;

    impl SelectionOperator for FirstTwoSelection {
        fn select_pair<R: Rng>(
            &self,
            scored: &[(Genome, u64)],
            _rng: &mut R,
        ) -> EvoResult<(Genome, Genome)> {
            Ok((scored[0].0.clone(), scored[1].0.clone()))
        }
    }

    struct SwapCrossover;

    impl CrossoverOperator for SwapCrossover {
        fn crossover<R: Rng>(
            &self,
            a: &Genome,
            b: &Genome,
            _rng: &mut R,
        ) -> EvoResult<(Genome, Genome)> {
            Ok((b.clone(), a.clone()))
        }
    }

    struct NoMutation;

    impl MutationOperator for NoMutation {
        fn mutate<R: Rng>(&self, _genome: &mut Genome, _rng: &mut R) {}
    }

    #[test]
    fn test_stub_operators_compose() {
        let mut rng = StdRng::seed_from_u64(0);
        let scored = vec![
            (Genome::from_bits(&[1, 0]), 3),
            (Genome::from_bits(&[0, 1]), 1),
        ];

        let (p1, p2) = FirstTwoSelection.select_pair(&scored, &mut rng).unwrap();
        let (c1, c2) = SwapCrossover.crossover(&p1, &p2, &mut rng).unwrap();
        assert_eq!(c1, scored[1].0);
        assert_eq!(c2, scored[0].0);

        let mut child = c1;
        NoMutation.mutate(&mut child, &mut rng);
        assert_eq!(child, scored[1].0);
    }
}
