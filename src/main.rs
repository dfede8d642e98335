//! Demo binary: evolve a packing for the twelve-item sample catalog and
//! print the best solution found.

use knapsack_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const WEIGHT_LIMIT: u64 = 3000;
const FITNESS_LIMIT: u64 = 740;
const POPULATION_SIZE: usize = 10;
const GENERATION_LIMIT: usize = 100;

fn run() -> EvoResult<()> {
    let items = extended_travel_items();
    let genome_length = items.len();

    let evolution = EvolutionBuilder::new()
        .generation_limit(GENERATION_LIMIT)
        .fitness_limit(FITNESS_LIMIT)
        .populator(RandomPopulator::new(POPULATION_SIZE, genome_length))
        .selection(RouletteSelection::new())
        .crossover(SinglePointCrossover::new())
        .mutation(PointMutation::default())
        .fitness(KnapsackFitness::new(items.clone(), WEIGHT_LIMIT))
        .build()?;

    let mut rng = StdRng::from_entropy();
    let outcome = evolution.run(&mut rng)?;
    let best = genome_to_items(outcome.best(), &items)?;

    println!("generations: {}", outcome.generations);
    println!("time: {:?}", outcome.runtime);
    println!("best solution: {}", best.names.join(", "));
    println!("value: {}", best.total_value);
    println!("weight: {} (limit {})", best.total_weight, WEIGHT_LIMIT);
    Ok(())
}

fn main() {
    env_logger::init();
    println!("knapsack-evo: evolving a packing list");

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
