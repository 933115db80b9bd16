//! # SinglePointStrategy
//!
//! The `SinglePointStrategy` struct breeds every child of a generation from the same
//! two parents: a single-point crossover of the first and second parent, followed by
//! per-item mutation at the generation's mutation rate.
use std::fmt::Debug;

use rayon::prelude::*;

use super::{operators, BreedStrategy};
use crate::{
    catalog::Catalog,
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator,
    schedule::{Candidate, Schedule},
};

/// # SinglePointStrategy
///
/// Children differ from one another only through the random cut point and the
/// random mutations. Each child gets its own generator, seeded from the run's
/// generator in child order, so the output for a given seed is the same
/// whether the children are built sequentially or on the rayon pool.
#[derive(Debug, Clone, Default)]
pub struct SinglePointStrategy {
    // No fields needed
}

impl SinglePointStrategy {
    /// Creates a new `SinglePointStrategy` instance.
    pub fn new() -> Self {
        Self {}
    }

    fn breed_child(
        first: &Schedule,
        second: &Schedule,
        catalog: &Catalog,
        mutation_rate: f64,
        seed: u64,
    ) -> Result<Candidate> {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let child = operators::crossover(first.candidate(), second.candidate(), &mut rng)?;
        Ok(operators::mutate(&child, catalog, mutation_rate, &mut rng))
    }
}

impl BreedStrategy for SinglePointStrategy {
    /// Breeds `evol_options.get_population_size()` children from the first two parents.
    ///
    /// ## Errors
    ///
    /// Returns `EmptyPopulation` when `parents` is empty, `Breeding` when only
    /// one parent is given or the parents cannot be recombined.
    ///
    /// ## Performance
    ///
    /// Children are built on the rayon pool when the population size reaches
    /// the parallel threshold.
    fn breed(
        &self,
        parents: &[&Schedule],
        catalog: &Catalog,
        mutation_rate: f64,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Candidate>> {
        let (first, second) = match parents {
            [] => return Err(GeneticError::EmptyPopulation),
            [_] => {
                return Err(GeneticError::Breeding(
                    "Single-point breeding needs two parents".to_string(),
                ))
            }
            [first, second, ..] => (*first, *second),
        };

        let num_children = evol_options.get_population_size();
        let seeds: Vec<u64> = (0..num_children).map(|_| rng.next_seed()).collect();

        if num_children >= evol_options.get_parallel_threshold() {
            seeds
                .into_par_iter()
                .map(|seed| Self::breed_child(first, second, catalog, mutation_rate, seed))
                .collect()
        } else {
            seeds
                .into_iter()
                .map(|seed| Self::breed_child(first, second, catalog, mutation_rate, seed))
                .collect()
        }
    }
}
