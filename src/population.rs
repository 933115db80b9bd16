//! # Population
//!
//! A [`Population`] is one generation of scored schedules. It is built
//! wholesale (randomly at the start, from bred candidates afterwards) and is
//! never edited in place, so ranking and statistics always describe a single,
//! frozen generation.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::{
    catalog::Catalog,
    error::{GeneticError, Result},
    evolution::{options::EvolutionOptions, Challenge},
    rng::RandomNumberGenerator,
    schedule::{Candidate, Schedule},
};

#[derive(Debug, Clone)]
pub struct Population {
    schedules: Vec<Schedule>,
}

impl Population {
    /// Creates `options.get_population_size()` random candidates and scores them.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for a population size of zero, or
    /// `FitnessCalculation` if the challenge produces a non-finite score.
    pub fn initialize<C>(
        catalog: &Catalog,
        challenge: &C,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self>
    where
        C: Challenge<Candidate> + Sync,
    {
        let candidates = (0..options.get_population_size())
            .map(|_| Candidate::random(catalog, rng))
            .collect();

        Self::from_candidates(candidates, challenge, options.get_parallel_threshold())
    }

    /// Scores `candidates` and collects them into a population, preserving order.
    ///
    /// Scoring runs on the rayon pool when there are at least
    /// `parallel_threshold` candidates.
    pub fn from_candidates<C>(
        candidates: Vec<Candidate>,
        challenge: &C,
        parallel_threshold: usize,
    ) -> Result<Self>
    where
        C: Challenge<Candidate> + Sync,
    {
        let schedules = if candidates.len() >= parallel_threshold {
            candidates
                .into_par_iter()
                .map(|candidate| Schedule::evaluate(candidate, challenge))
                .collect::<Result<Vec<_>>>()?
        } else {
            candidates
                .into_iter()
                .map(|candidate| Schedule::evaluate(candidate, challenge))
                .collect::<Result<Vec<_>>>()?
        };

        Self::from_schedules(schedules)
    }

    pub fn from_schedules(schedules: Vec<Schedule>) -> Result<Self> {
        if schedules.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        Ok(Self { schedules })
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn into_schedules(self) -> Vec<Schedule> {
        self.schedules
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Schedules ordered by descending fitness. The sort is stable, so equal
    /// scores keep their population order.
    pub fn ranked(&self) -> Vec<&Schedule> {
        let mut ranked: Vec<&Schedule> = self.schedules.iter().collect();
        ranked.sort_by(|a, b| descending(a.fitness_score(), b.fitness_score()));
        ranked
    }

    /// The highest-scoring schedule; the earliest one wins ties.
    pub fn best(&self) -> &Schedule {
        let mut best = &self.schedules[0];
        for schedule in &self.schedules[1..] {
            if schedule.fitness_score() > best.fitness_score() {
                best = schedule;
            }
        }
        best
    }

    pub fn best_fitness(&self) -> f64 {
        self.best().fitness_score()
    }

    /// Arithmetic mean of the fitness scores.
    pub fn mean_fitness(&self) -> f64 {
        let total: f64 = self.schedules.iter().map(Schedule::fitness_score).sum();
        total / self.schedules.len() as f64
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{standard, FitnessRules};
    use crate::fitness::FitnessEvaluator;

    /// Scores a candidate by the index of its first item's room.
    struct RoomIndex;

    impl Challenge<Candidate> for RoomIndex {
        fn score(&self, candidate: &Candidate) -> f64 {
            candidate.items()[0].room.0 as f64
        }
    }

    #[test]
    fn test_initialize_scores_every_candidate() {
        let catalog = standard::catalog().unwrap();
        let evaluator = FitnessEvaluator::new(&catalog, &FitnessRules::default());
        let options = EvolutionOptions::builder().population_size(20).build();
        let mut rng = RandomNumberGenerator::from_seed(10);

        let population = Population::initialize(&catalog, &evaluator, &options, &mut rng).unwrap();

        assert_eq!(population.len(), 20);
        for schedule in population.schedules() {
            assert_eq!(schedule.fitness_score(), evaluator.evaluate(schedule.candidate()));
        }
    }

    #[test]
    fn test_parallel_and_sequential_scoring_agree() {
        let catalog = standard::catalog().unwrap();
        let evaluator = FitnessEvaluator::new(&catalog, &FitnessRules::default());
        let mut rng = RandomNumberGenerator::from_seed(12);
        let candidates: Vec<Candidate> =
            (0..64).map(|_| Candidate::random(&catalog, &mut rng)).collect();

        let sequential =
            Population::from_candidates(candidates.clone(), &evaluator, usize::MAX).unwrap();
        let parallel = Population::from_candidates(candidates, &evaluator, 1).unwrap();

        assert_eq!(sequential.schedules(), parallel.schedules());
    }

    #[test]
    fn test_ranked_is_stable_and_descending() {
        let catalog = standard::catalog().unwrap();
        let mut rng = RandomNumberGenerator::from_seed(13);
        let candidates: Vec<Candidate> =
            (0..40).map(|_| Candidate::random(&catalog, &mut rng)).collect();
        let population = Population::from_candidates(candidates, &RoomIndex, usize::MAX).unwrap();

        let ranked = population.ranked();
        for pair in ranked.windows(2) {
            assert!(pair[0].fitness_score() >= pair[1].fitness_score());
        }

        // Equal scores keep population order.
        let position = |s: &Schedule| {
            population
                .schedules()
                .iter()
                .position(|p| std::ptr::eq(p, s))
                .unwrap()
        };
        for pair in ranked.windows(2) {
            if pair[0].fitness_score() == pair[1].fitness_score() {
                assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    #[test]
    fn test_statistics() {
        let catalog = standard::catalog().unwrap();
        let mut rng = RandomNumberGenerator::from_seed(14);
        let candidates: Vec<Candidate> =
            (0..30).map(|_| Candidate::random(&catalog, &mut rng)).collect();
        let population = Population::from_candidates(candidates, &RoomIndex, usize::MAX).unwrap();

        let scores: Vec<f64> = population.schedules().iter().map(|s| s.fitness_score()).collect();
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;

        assert_eq!(population.best_fitness(), max);
        assert!((population.mean_fitness() - mean).abs() < 1e-12);
        assert!(std::ptr::eq(population.best(), population.ranked()[0]));
    }

    #[test]
    fn test_empty_population_rejected() {
        let result = Population::from_schedules(Vec::new());
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
