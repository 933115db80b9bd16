use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::schedule::Schedule;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that deterministically takes the top-ranked schedules.
///
/// Schedules are ranked by descending fitness with a stable sort, and the
/// first `num_to_select` rank positions are returned. Two positions holding
/// equal scores are still two distinct parents. No randomness is involved.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncationSelection;

impl TruncationSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for TruncationSelection {
    fn select<'p>(
        &self,
        population: &'p Population,
        num_to_select: usize,
    ) -> Result<Vec<&'p Schedule>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if population.len() < num_to_select {
            return Err(GeneticError::Configuration(format!(
                "Cannot select {} parents from a population of {}",
                num_to_select,
                population.len()
            )));
        }

        let mut ranked = population.ranked();
        ranked.truncate(num_to_select);
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard;
    use crate::evolution::Challenge;
    use crate::rng::RandomNumberGenerator;
    use crate::schedule::Candidate;

    /// Scores candidates from a fixed list, in the order they are evaluated.
    struct Scripted(Vec<f64>, std::sync::atomic::AtomicUsize);

    impl Scripted {
        fn new(scores: Vec<f64>) -> Self {
            Self(scores, std::sync::atomic::AtomicUsize::new(0))
        }
    }

    impl Challenge<Candidate> for Scripted {
        fn score(&self, _candidate: &Candidate) -> f64 {
            let next = self.1.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            self.0[next]
        }
    }

    fn population(scores: Vec<f64>) -> Population {
        let catalog = standard::catalog().unwrap();
        let mut rng = RandomNumberGenerator::from_seed(21);
        let candidates = (0..scores.len())
            .map(|_| Candidate::random(&catalog, &mut rng))
            .collect();
        Population::from_candidates(candidates, &Scripted::new(scores), usize::MAX).unwrap()
    }

    #[test]
    fn test_selects_top_two() {
        let population = population(vec![0.5, 0.8, 0.3, 0.9, 0.1]);

        let selected = TruncationSelection::default().select(&population, 2).unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].fitness_score(), 0.9);
        assert_eq!(selected[1].fitness_score(), 0.8);
    }

    #[test]
    fn test_tied_scores_fill_both_slots() {
        let population = population(vec![0.2, 1.0, 1.0, 0.4]);

        let selected = TruncationSelection::default().select(&population, 2).unwrap();

        assert_eq!(selected[0].fitness_score(), 1.0);
        assert_eq!(selected[1].fitness_score(), 1.0);
        assert!(std::ptr::eq(selected[0], &population.schedules()[1]));
        assert!(std::ptr::eq(selected[1], &population.schedules()[2]));
    }

    #[test]
    fn test_too_small_population() {
        let population = population(vec![0.5]);

        let result = TruncationSelection::new().select(&population, 2);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_exact_size_population() {
        let population = population(vec![0.1, 0.7]);

        let selected = TruncationSelection::new().select(&population, 2).unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].fitness_score(), 0.7);
        assert_eq!(selected[1].fitness_score(), 0.1);
    }
}
