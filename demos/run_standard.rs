//! Schedules the reference SLA catalog and writes the result to
//! `schedule_output.txt`.
//!
//! ```text
//! cargo run --release --example run_standard [seed]
//! ```

use std::env;

use class_scheduler::{
    catalog::{standard, FitnessRules},
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel, Termination},
    report::ScheduleReport,
    rng::RandomNumberGenerator,
    GeneticError, Result,
};
use tracing::{info, Level};

const OUTPUT_PATH: &str = "schedule_output.txt";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut rng = match env::args().nth(1) {
        Some(arg) => {
            let seed = arg.parse::<u64>().map_err(|e| {
                GeneticError::Configuration(format!("Invalid seed {:?}: {}", arg, e))
            })?;
            info!(seed, "using fixed seed");
            RandomNumberGenerator::from_seed(seed)
        }
        None => RandomNumberGenerator::new(),
    };

    let catalog = standard::catalog()?;
    let rules = FitnessRules::default();
    let options = EvolutionOptions::builder()
        .population_size(500)
        .initial_mutation_rate(0.01)
        .log_level(LogLevel::Minimal)
        .build();

    let launcher = EvolutionLauncher::with_defaults(&catalog, &rules);
    let result = launcher.evolve(&options, &mut rng)?;

    match result.termination {
        Termination::Converged { generation } => info!(generation, "search converged"),
        Termination::GenerationLimit { generation } => {
            info!(generation, "search stopped at the generation limit")
        }
    }

    let report = ScheduleReport::new(&result.best, &catalog);
    println!("{}", report);
    if result.best_ever.fitness_score() > result.best.fitness_score() {
        info!(
            best_ever = result.best_ever.fitness_score(),
            "an earlier generation held a better schedule"
        );
    }

    report.write_to_file(OUTPUT_PATH)?;
    info!(path = OUTPUT_PATH, "schedule written");

    Ok(())
}
