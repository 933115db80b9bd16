use std::fmt::Debug;

use crate::error::Result;
use crate::population::Population;
use crate::schedule::Schedule;

/// Trait for parent selection strategies.
///
/// Selection strategies choose the schedules that breed the next generation
/// from the scored members of the current one.
///
/// # Examples
///
/// ```
/// use class_scheduler::catalog::{standard, FitnessRules};
/// use class_scheduler::evolution::EvolutionOptions;
/// use class_scheduler::fitness::FitnessEvaluator;
/// use class_scheduler::population::Population;
/// use class_scheduler::rng::RandomNumberGenerator;
/// use class_scheduler::selection::{SelectionStrategy, TruncationSelection};
///
/// let catalog = standard::catalog().unwrap();
/// let evaluator = FitnessEvaluator::new(&catalog, &FitnessRules::default());
/// let options = EvolutionOptions::builder().population_size(10).build();
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let population = Population::initialize(&catalog, &evaluator, &options, &mut rng).unwrap();
///
/// let parents = TruncationSelection::default().select(&population, 2).unwrap();
/// assert_eq!(parents.len(), 2);
/// assert!(parents[0].fitness_score() >= parents[1].fitness_score());
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` schedules from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if the population cannot supply the requested number
    /// of parents.
    fn select<'p>(
        &self,
        population: &'p Population,
        num_to_select: usize,
    ) -> Result<Vec<&'p Schedule>>;
}
