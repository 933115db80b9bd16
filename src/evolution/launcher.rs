use tracing::{debug, info};

use super::{
    adaptive::AdaptiveMutationRate,
    challenge::Challenge,
    convergence::ConvergenceMonitor,
    options::{EvolutionOptions, LogLevel, MINIMAL_LOG_INTERVAL},
};
use crate::{
    catalog::{Catalog, FitnessRules},
    error::Result,
    fitness::FitnessEvaluator,
    population::Population,
    rng::RandomNumberGenerator,
    schedule::{Candidate, Schedule},
    selection::{SelectionStrategy, TruncationSelection},
    strategy::{BreedStrategy, SinglePointStrategy},
};

/// Number of parents the launcher asks the selection strategy for.
const NUM_PARENTS: usize = 2;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Mean fitness improved by less than the convergence threshold over the window.
    Converged { generation: usize },
    /// The generation limit was reached before convergence.
    GenerationLimit { generation: usize },
}

impl Termination {
    /// Index of the last generation that ran.
    pub fn generation(&self) -> usize {
        match *self {
            Termination::Converged { generation } | Termination::GenerationLimit { generation } => {
                generation
            }
        }
    }
}

/// Summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    /// Mutation rate after this generation's adjustment.
    pub mutation_rate: f64,
}

/// The outcome of a run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The highest-scoring schedule of the final population.
    pub best: Schedule,
    /// The highest-scoring schedule seen in any population, the initial one included.
    pub best_ever: Schedule,
    pub termination: Termination,
    /// One entry per generation, oldest first.
    pub history: Vec<GenerationStats>,
    pub final_mutation_rate: f64,
}

impl EvolutionResult {
    pub fn generations(&self) -> usize {
        self.history.len()
    }

    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.history.iter().map(|stats| stats.mean_fitness).collect()
    }
}

/// Runs the generation loop with a breeding strategy, a selection strategy
/// and a challenge over one catalog.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<'c, Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy,
    Chall: Challenge<Candidate>,
{
    catalog: &'c Catalog,
    strategy: Strategy,
    selection: Selection,
    challenge: Chall,
}

impl<'c> EvolutionLauncher<'c, SinglePointStrategy, TruncationSelection, FitnessEvaluator<'c>> {
    /// Top-two truncation selection, single-point crossover with per-item
    /// mutation, and the weighted fitness function under `rules`.
    pub fn with_defaults(catalog: &'c Catalog, rules: &FitnessRules) -> Self {
        Self::new(
            catalog,
            SinglePointStrategy::new(),
            TruncationSelection::default(),
            FitnessEvaluator::new(catalog, rules),
        )
    }
}

impl<'c, Strategy, Selection, Chall> EvolutionLauncher<'c, Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy,
    Chall: Challenge<Candidate> + Sync,
{
    /// Creates a new `EvolutionLauncher`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The domain data every candidate is drawn from.
    /// * `strategy` - The breeding strategy used for generating children.
    /// * `selection` - The strategy choosing parents from each generation.
    /// * `challenge` - The challenge used to evaluate the fitness of candidates.
    pub fn new(catalog: &'c Catalog, strategy: Strategy, selection: Selection, challenge: Chall) -> Self {
        Self {
            catalog,
            strategy,
            selection,
            challenge,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves a random initial population until convergence or the generation limit.
    ///
    /// Each generation replaces the whole population with children bred from
    /// the parents selected out of the previous one; nothing survives
    /// unchanged. After scoring, the mean fitness feeds the convergence
    /// check and a new best fitness halves the mutation rate.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail [`EvolutionOptions::validate`]
    /// - Selection or breeding fails
    /// - The challenge produces a non-finite score
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        let mut population = Population::initialize(self.catalog, &self.challenge, options, rng)?;
        let mut best_ever = population.best().clone();
        let mut mutation = AdaptiveMutationRate::new(options.get_initial_mutation_rate());
        let mut convergence = ConvergenceMonitor::new(
            options.get_convergence_window(),
            options.get_convergence_threshold(),
        );
        let mut history = Vec::new();
        let mut generation = 0;

        let termination = loop {
            let children = {
                let parents = self.selection.select(&population, NUM_PARENTS)?;
                self.strategy
                    .breed(&parents, self.catalog, mutation.rate(), options, rng)?
            };
            population =
                Population::from_candidates(children, &self.challenge, options.get_parallel_threshold())?;

            let best_fitness = population.best_fitness();
            let mean_fitness = population.mean_fitness();
            convergence.record(mean_fitness);

            if mutation.observe(best_fitness) {
                debug!(
                    generation,
                    mutation_rate = mutation.rate(),
                    "reducing mutation rate"
                );
            }

            if best_fitness > best_ever.fitness_score() {
                best_ever = population.best().clone();
            }

            history.push(GenerationStats {
                generation,
                best_fitness,
                mean_fitness,
                mutation_rate: mutation.rate(),
            });

            if convergence.has_converged() {
                info!(generation, best_fitness, mean_fitness, "converged");
                break Termination::Converged { generation };
            }

            let report = match options.get_log_level() {
                LogLevel::Verbose => true,
                LogLevel::Minimal => generation % MINIMAL_LOG_INTERVAL == 0,
                LogLevel::None => false,
            };
            if report {
                info!(
                    generation,
                    best_fitness,
                    mean_fitness,
                    mutation_rate = mutation.rate(),
                    "generation complete"
                );
            }

            if generation + 1 >= options.get_max_generations() {
                info!(
                    generation,
                    best_fitness,
                    mean_fitness,
                    "generation limit reached before convergence"
                );
                break Termination::GenerationLimit { generation };
            }

            generation += 1;
        };

        Ok(EvolutionResult {
            best: population.best().clone(),
            best_ever,
            termination,
            history,
            final_mutation_rate: mutation.rate(),
        })
    }
}
