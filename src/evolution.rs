//! Evolution driver
//!
//! This module implements the generational loop: evaluate, retain the top two
//! genomes, refill the next generation through selection, crossover, and
//! mutation, and repeat until the generation budget or the optional fitness
//! target is reached.

use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::fitness::Fitness;
use crate::genome::Genome;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::Populator;

/// Configuration for the evolution driver
#[derive(Clone, Copy, Debug)]
pub struct EvolutionConfig {
    /// Maximum number of generations to produce
    pub generation_limit: usize,
    /// Early-stop threshold on the best fitness; `None` disables the check
    /// and the full generation budget always runs
    pub fitness_limit: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generation_limit: 100,
            fitness_limit: None,
        }
    }
}

/// Fitness summary for one evaluated generation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (0 is the initial population)
    pub generation: usize,
    /// Best fitness in this generation
    pub best: u64,
    /// Worst fitness in this generation
    pub worst: u64,
    /// Mean fitness in this generation
    pub mean: f64,
}

impl GenerationStats {
    fn from_scored(scored: &[(Genome, u64)], generation: usize) -> Self {
        // `scored` is sorted descending by fitness.
        let best = scored.first().map_or(0, |(_, f)| *f);
        let worst = scored.last().map_or(0, |(_, f)| *f);
        let total: u64 = scored.iter().map(|(_, f)| *f).sum();
        let mean = total as f64 / scored.len().max(1) as f64;
        Self {
            generation,
            best,
            worst,
            mean,
        }
    }
}

/// Result of an evolution run
#[derive(Clone, Debug)]
pub struct EvolutionOutcome {
    /// Final population with fitness scores, sorted descending by fitness
    pub population: Vec<(Genome, u64)>,
    /// Number of generations produced before termination
    pub generations: usize,
    /// Wall-clock time of the run
    pub runtime: Duration,
    /// Per-generation fitness summaries, including the initial population
    pub stats: Vec<GenerationStats>,
}

impl EvolutionOutcome {
    /// The best genome of the final population
    pub fn best(&self) -> &Genome {
        &self.population[0].0
    }

    /// The best fitness of the final population
    pub fn best_fitness(&self) -> u64 {
        self.population[0].1
    }
}

/// Builder for [`Evolution`]
///
/// Every component is chosen explicitly; `build` fails with a
/// [`EvolutionError::Configuration`] error when one is missing.
pub struct EvolutionBuilder<P, S, C, M, F> {
    config: EvolutionConfig,
    populator: Option<P>,
    selection: Option<S>,
    crossover: Option<C>,
    mutation: Option<M>,
    fitness: Option<F>,
}

impl EvolutionBuilder<(), (), (), (), ()> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: EvolutionConfig::default(),
            populator: None,
            selection: None,
            crossover: None,
            mutation: None,
            fitness: None,
        }
    }
}

impl Default for EvolutionBuilder<(), (), (), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S, C, M, F> EvolutionBuilder<P, S, C, M, F> {
    /// Set the generation budget
    pub fn generation_limit(mut self, limit: usize) -> Self {
        self.config.generation_limit = limit;
        self
    }

    /// Enable the early-stop check at the given best-fitness threshold
    pub fn fitness_limit(mut self, limit: u64) -> Self {
        self.config.fitness_limit = Some(limit);
        self
    }

    /// Disable the early-stop check; the full generation budget always runs
    pub fn no_fitness_limit(mut self) -> Self {
        self.config.fitness_limit = None;
        self
    }

    /// Set the populator
    pub fn populator<NewP>(self, populator: NewP) -> EvolutionBuilder<NewP, S, C, M, F>
    where
        NewP: Populator,
    {
        EvolutionBuilder {
            config: self.config,
            populator: Some(populator),
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: self.fitness,
        }
    }

    /// Set the selection operator
    pub fn selection<NewS>(self, selection: NewS) -> EvolutionBuilder<P, NewS, C, M, F>
    where
        NewS: SelectionOperator,
    {
        EvolutionBuilder {
            config: self.config,
            populator: self.populator,
            selection: Some(selection),
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: self.fitness,
        }
    }

    /// Set the crossover operator
    pub fn crossover<NewC>(self, crossover: NewC) -> EvolutionBuilder<P, S, NewC, M, F>
    where
        NewC: CrossoverOperator,
    {
        EvolutionBuilder {
            config: self.config,
            populator: self.populator,
            selection: self.selection,
            crossover: Some(crossover),
            mutation: self.mutation,
            fitness: self.fitness,
        }
    }

    /// Set the mutation operator
    pub fn mutation<NewM>(self, mutation: NewM) -> EvolutionBuilder<P, S, C, NewM, F>
    where
        NewM: MutationOperator,
    {
        EvolutionBuilder {
            config: self.config,
            populator: self.populator,
            selection: self.selection,
            crossover: self.crossover,
            mutation: Some(mutation),
            fitness: self.fitness,
        }
    }

    /// Set the fitness function
    pub fn fitness<NewF>(self, fitness: NewF) -> EvolutionBuilder<P, S, C, M, NewF>
    where
        NewF: Fitness,
    {
        EvolutionBuilder {
            config: self.config,
            populator: self.populator,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: Some(fitness),
        }
    }
}

impl<P, S, C, M, F> EvolutionBuilder<P, S, C, M, F>
where
    P: Populator,
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
    F: Fitness,
{
    /// Build the driver
    pub fn build(self) -> EvoResult<Evolution<P, S, C, M, F>> {
        let populator = self
            .populator
            .ok_or_else(|| EvolutionError::Configuration("Populator must be specified".into()))?;
        let selection = self.selection.ok_or_else(|| {
            EvolutionError::Configuration("Selection operator must be specified".into())
        })?;
        let crossover = self.crossover.ok_or_else(|| {
            EvolutionError::Configuration("Crossover operator must be specified".into())
        })?;
        let mutation = self.mutation.ok_or_else(|| {
            EvolutionError::Configuration("Mutation operator must be specified".into())
        })?;
        let fitness = self.fitness.ok_or_else(|| {
            EvolutionError::Configuration("Fitness function must be specified".into())
        })?;

        Ok(Evolution {
            config: self.config,
            populator,
            selection,
            crossover,
            mutation,
            fitness,
        })
    }
}

/// Generational genetic algorithm driver
///
/// Generic over the populator, the three operators, and the fitness
/// function, all supplied through [`EvolutionBuilder`].
pub struct Evolution<P, S, C, M, F> {
    config: EvolutionConfig,
    populator: P,
    selection: S,
    crossover: C,
    mutation: M,
    fitness: F,
}

impl<P, S, C, M, F> Evolution<P, S, C, M, F>
where
    P: Populator,
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
    F: Fitness,
{
    /// Create a builder
    pub fn builder() -> EvolutionBuilder<(), (), (), (), ()> {
        EvolutionBuilder::new()
    }

    /// Run the evolutionary loop
    ///
    /// Returns the final population sorted descending by fitness together
    /// with the number of generations produced. With a `generation_limit` of
    /// 0 the initial population is returned evaluated and sorted, otherwise
    /// untouched.
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionOutcome> {
        let start = Instant::now();

        let initial = self.populator.populate(rng);
        if initial.len() < 2 {
            return Err(EvolutionError::PopulationTooSmall { len: initial.len() });
        }
        let target_size = initial.len();

        let mut scored = self.evaluate(initial)?;
        let mut stats = vec![GenerationStats::from_scored(&scored, 0)];
        let mut generations = 0;

        for generation in 0..self.config.generation_limit {
            if let Some(limit) = self.config.fitness_limit {
                if scored[0].1 >= limit {
                    debug!(
                        "fitness limit {} reached at generation {}",
                        limit, generation
                    );
                    break;
                }
            }

            // Elitism: the top two genomes move on as defensive copies, so
            // later mutation of offspring can never touch them.
            let mut next: Vec<Genome> = Vec::with_capacity(target_size);
            next.push(scored[0].0.clone());
            next.push(scored[1].0.clone());

            // One pair of offspring per iteration. The pair count of
            // size/2 - 1 reproduces the observed refill arithmetic; for odd
            // population sizes it leaves the next generation one genome
            // short, which is reported below instead of being resized.
            for _ in 0..(target_size / 2).saturating_sub(1) {
                let (parent_a, parent_b) = self.selection.select_pair(&scored, rng)?;
                let (mut child_a, mut child_b) =
                    self.crossover.crossover(&parent_a, &parent_b, rng)?;
                self.mutation.mutate(&mut child_a, rng);
                self.mutation.mutate(&mut child_b, rng);
                next.push(child_a);
                next.push(child_b);
            }

            if next.len() != target_size {
                warn!(
                    "generation {} under-filled: {} of {} genomes",
                    generation + 1,
                    next.len(),
                    target_size
                );
            }

            scored = self.evaluate(next)?;
            generations = generation + 1;

            let generation_stats = GenerationStats::from_scored(&scored, generations);
            debug!(
                "generation {}: best {} worst {} mean {:.1}",
                generations, generation_stats.best, generation_stats.worst, generation_stats.mean
            );
            stats.push(generation_stats);
        }

        Ok(EvolutionOutcome {
            population: scored,
            generations,
            runtime: start.elapsed(),
            stats,
        })
    }

    /// Score a population and sort it descending by fitness
    fn evaluate(&self, population: Vec<Genome>) -> EvoResult<Vec<(Genome, u64)>> {
        let mut scored = population
            .into_iter()
            .map(|genome| {
                let fitness = self.fitness.evaluate(&genome)?;
                Ok((genome, fitness))
            })
            .collect::<EvoResult<Vec<_>>>()?;
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(scored)
    }
}
