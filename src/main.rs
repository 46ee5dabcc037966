use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rectfit::config::ConfigManager;
use rectfit::{Mutator, PackingEvaluator, PermutationInitializer};

/// Demo driver: draws a random population, applies the configured
/// mutation strategies for a number of rounds and keeps each
/// candidate's best-scoring genome. Selection and crossover belong to
/// the external engine and are deliberately absent here.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Some(path) = std::env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("loading config from {}", path))?;
    }
    let config = manager.get();

    let catalog = config.problem.build_catalog()?;
    let layout = config.encoding.build_layout(catalog.len())?;
    let region = config.problem.region();
    let evaluator = PackingEvaluator::new(catalog, region, config.problem.fitness_exponent);
    let initializer = PermutationInitializer::new(layout);
    let mutators = config.mutation.build_mutators(&layout);

    let mut rng = match config.run.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut population = Vec::with_capacity(config.run.population_size);
    for _ in 0..config.run.population_size {
        population.push(initializer.random_candidate(&mut rng)?);
    }
    let mut fitnesses = evaluator.evaluate_population(&population, 0)?;

    for round in 1..=config.run.rounds {
        for (candidate, best) in population.iter_mut().zip(fitnesses.iter_mut()) {
            let mut mutated = candidate.clone();
            for mutator in &mutators {
                mutator.mutate(&mut mutated, round, &mut rng);
            }
            let fitness = evaluator.evaluate(&mutated, round)?;
            if fitness >= *best {
                *candidate = mutated;
                *best = fitness;
            }
        }

        let round_best = fitnesses.iter().cloned().fold(0.0f64, f64::max);
        log::info!("round {}: best fitness {}", round, round_best);
    }

    let best = fitnesses.iter().cloned().fold(0.0f64, f64::max);
    println!(
        "Best packed area after {} rounds: {} (region {}x{})",
        config.run.rounds, best, region.width, region.height
    );

    Ok(())
}
