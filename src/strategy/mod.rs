//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! the next generation's candidates from the selected parents.
pub mod operators;
pub mod single_point;

use std::fmt::Debug;

use crate::{
    catalog::Catalog, error::Result, evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator, schedule::Candidate, schedule::Schedule,
};

/// # BreedStrategy
///
/// Produces the unscored children of one generation.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `evol_options.get_population_size()` children from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The selected parents, best first.
    /// - `catalog`: The catalog mutations draw replacement values from.
    /// - `mutation_rate`: The per-item mutation probability for this generation.
    /// - `evol_options`: Population size and parallelism settings.
    /// - `rng`: The run's random number generator.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The parents slice is empty or too short for the strategy
    /// - The parents cannot be recombined
    fn breed(
        &self,
        parents: &[&Schedule],
        catalog: &Catalog,
        mutation_rate: f64,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Candidate>>;
}

pub use operators::{crossover, crossover_at, mutate, Gene};
pub use single_point::SinglePointStrategy;
