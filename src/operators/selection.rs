//! Selection operators
//!
//! Fitness-proportionate (roulette wheel) parent selection in two flavors:
//! one that samples over the whole population, and one that discards
//! zero-fitness genomes before sampling.

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};

use crate::error::{EvoResult, EvolutionError};
use crate::genome::Genome;
use crate::operators::traits::SelectionOperator;

/// Roulette wheel selection over the full population
///
/// Draws two genomes with replacement, selection probability proportional to
/// fitness. When every fitness in the population is zero the weighted draw is
/// undefined, so the operator falls back to uniform sampling.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Create a new roulette selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for RouletteSelection {
    fn select_pair<R: Rng>(
        &self,
        scored: &[(Genome, u64)],
        rng: &mut R,
    ) -> EvoResult<(Genome, Genome)> {
        if scored.is_empty() {
            return Err(EvolutionError::PopulationTooSmall { len: 0 });
        }

        let weights: Vec<u64> = scored.iter().map(|(_, fitness)| *fitness).collect();
        match WeightedIndex::new(&weights) {
            Ok(dist) => {
                let first = dist.sample(rng);
                let second = dist.sample(rng);
                Ok((scored[first].0.clone(), scored[second].0.clone()))
            }
            // All weights zero: fall back to uniform sampling.
            Err(_) => {
                let first = rng.gen_range(0..scored.len());
                let second = rng.gen_range(0..scored.len());
                Ok((scored[first].0.clone(), scored[second].0.clone()))
            }
        }
    }
}

/// Roulette wheel selection over feasible genomes only
///
/// Removes every zero-fitness genome from consideration before the weighted
/// draw. When nothing survives the filter, selection fails with
/// [`EvolutionError::AllZeroFitness`]; the driver treats that as fatal.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilteredRouletteSelection;

impl FilteredRouletteSelection {
    /// Create a new filtered roulette selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for FilteredRouletteSelection {
    fn select_pair<R: Rng>(
        &self,
        scored: &[(Genome, u64)],
        rng: &mut R,
    ) -> EvoResult<(Genome, Genome)> {
        let survivors: Vec<&(Genome, u64)> =
            scored.iter().filter(|(_, fitness)| *fitness > 0).collect();

        if survivors.is_empty() {
            return Err(EvolutionError::AllZeroFitness);
        }

        let weights: Vec<u64> = survivors.iter().map(|(_, fitness)| *fitness).collect();
        debug!("filtered selection weights: {:?}", weights);

        // All weights are positive here, so the distribution is well-formed.
        let dist = WeightedIndex::new(&weights)
            .map_err(|e| EvolutionError::Configuration(e.to_string()))?;
        let first = dist.sample(rng);
        let second = dist.sample(rng);
        Ok((survivors[first].0.clone(), survivors[second].0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scored_population(fitnesses: &[u64]) -> Vec<(Genome, u64)> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &fitness)| {
                let mut genome = Genome::zeros(fitnesses.len());
                genome.flip(i);
                (genome, fitness)
            })
            .collect()
    }

    #[test]
    fn test_roulette_never_picks_zero_weight_genomes() {
        let mut rng = StdRng::seed_from_u64(42);
        let scored = scored_population(&[0, 5, 0, 7]);
        for _ in 0..50 {
            let (a, b) = RouletteSelection::new().select_pair(&scored, &mut rng).unwrap();
            assert!(a == scored[1].0 || a == scored[3].0);
            assert!(b == scored[1].0 || b == scored[3].0);
        }
    }

    #[test]
    fn test_roulette_all_zero_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let scored = scored_population(&[0, 0, 0]);
        // Must not error and must return members of the population.
        let (a, b) = RouletteSelection::new().select_pair(&scored, &mut rng).unwrap();
        assert!(scored.iter().any(|(g, _)| *g == a));
        assert!(scored.iter().any(|(g, _)| *g == b));
    }

    #[test]
    fn test_roulette_empty_population_is_error() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            RouletteSelection::new().select_pair(&[], &mut rng),
            Err(EvolutionError::PopulationTooSmall { len: 0 })
        );
    }

    #[test]
    fn test_filtered_all_zero_is_fatal() {
        let mut rng = StdRng::seed_from_u64(42);
        let scored = scored_population(&[0, 0, 0]);
        assert_eq!(
            FilteredRouletteSelection::new().select_pair(&scored, &mut rng),
            Err(EvolutionError::AllZeroFitness)
        );
    }

    #[test]
    fn test_filtered_singleton_survivor_fills_both_slots() {
        let mut rng = StdRng::seed_from_u64(42);
        let scored = scored_population(&[0, 9, 0]);
        for _ in 0..20 {
            let (a, b) = FilteredRouletteSelection::new()
                .select_pair(&scored, &mut rng)
                .unwrap();
            assert_eq!(a, scored[1].0);
            assert_eq!(b, scored[1].0);
        }
    }

    #[test]
    fn test_filtered_high_fitness_dominates() {
        let mut rng = StdRng::seed_from_u64(7);
        let scored = scored_population(&[1, 1000, 0]);
        let mut picked_heavy = 0;
        for _ in 0..100 {
            let (a, _) = FilteredRouletteSelection::new()
                .select_pair(&scored, &mut rng)
                .unwrap();
            if a == scored[1].0 {
                picked_heavy += 1;
            }
        }
        assert!(picked_heavy > 90);
    }
}
