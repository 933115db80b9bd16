use crate::{
    catalog::Catalog,
    error::{GeneticError, Result},
    schedule::Candidate,
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

/// Assembles an [`EvolutionLauncher`] piece by piece.
///
/// ```
/// use class_scheduler::catalog::{standard, FitnessRules};
/// use class_scheduler::evolution::EvolutionLauncherBuilder;
/// use class_scheduler::fitness::FitnessEvaluator;
/// use class_scheduler::selection::TruncationSelection;
/// use class_scheduler::strategy::SinglePointStrategy;
///
/// let catalog = standard::catalog().unwrap();
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_catalog(&catalog)
///     .with_breed_strategy(SinglePointStrategy::new())
///     .with_selection_strategy(TruncationSelection::default())
///     .with_challenge(FitnessEvaluator::new(&catalog, &FitnessRules::default()))
///     .build()
///     .unwrap();
/// assert_eq!(launcher.catalog().activities().len(), 11);
/// ```
pub struct EvolutionLauncherBuilder<'c, B, S, F>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    F: Challenge<Candidate>,
{
    catalog: Option<&'c Catalog>,
    breed_strategy: Option<B>,
    selection_strategy: Option<S>,
    challenge: Option<F>,
}

impl<'c, B, S, F> EvolutionLauncherBuilder<'c, B, S, F>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    F: Challenge<Candidate> + Sync,
{
    pub fn new() -> Self {
        Self {
            catalog: None,
            breed_strategy: None,
            selection_strategy: None,
            challenge: None,
        }
    }

    pub fn with_catalog(mut self, catalog: &'c Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: F) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<'c, B, S, F>> {
        let catalog = self
            .catalog
            .ok_or_else(|| GeneticError::Configuration("Catalog not specified".to_string()))?;

        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            catalog,
            breed_strategy,
            selection_strategy,
            challenge,
        ))
    }
}

impl<'c, B, S, F> Default for EvolutionLauncherBuilder<'c, B, S, F>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    F: Challenge<Candidate> + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
