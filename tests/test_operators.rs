use class_scheduler::{
    catalog::{standard, FitnessRules},
    evolution::{Challenge, EvolutionOptions},
    fitness::FitnessEvaluator,
    population::Population,
    rng::RandomNumberGenerator,
    schedule::Candidate,
    selection::{SelectionStrategy, TruncationSelection},
    strategy::{crossover, crossover_at, mutate},
    GeneticError,
};

struct Flat;

impl Challenge<Candidate> for Flat {
    fn score(&self, _candidate: &Candidate) -> f64 {
        1.0
    }
}

fn differing_fields(a: &Candidate, b: &Candidate) -> Vec<usize> {
    a.items()
        .iter()
        .zip(b.items())
        .map(|(x, y)| {
            usize::from(x.room != y.room)
                + usize::from(x.time != y.time)
                + usize::from(x.facilitator != y.facilitator)
        })
        .collect()
}

#[test]
fn test_crossover_preserves_length_at_every_cut() {
    let catalog = standard::catalog().unwrap();
    let mut rng = RandomNumberGenerator::from_seed(100);
    let first = Candidate::random(&catalog, &mut rng);
    let second = Candidate::random(&catalog, &mut rng);

    for cut in 0..=first.len() {
        let child = crossover_at(&first, &second, cut).unwrap();
        assert_eq!(child.len(), catalog.activities().len());
        for (position, item) in child.items().iter().enumerate() {
            let expected = if position < cut { &first } else { &second };
            assert_eq!(item, &expected.items()[position]);
        }
    }
}

#[test]
fn test_random_crossover_keeps_canonical_order() {
    let catalog = standard::catalog().unwrap();
    let mut rng = RandomNumberGenerator::from_seed(101);
    let first = Candidate::random(&catalog, &mut rng);
    let second = Candidate::random(&catalog, &mut rng);

    for _ in 0..50 {
        let child = crossover(&first, &second, &mut rng).unwrap();
        // Re-validating against the catalog checks order and ranges.
        assert!(Candidate::from_items(&catalog, child.into_items()).is_ok());
    }
}

#[test]
fn test_zero_rate_mutation_is_identity() {
    let catalog = standard::catalog().unwrap();
    let mut rng = RandomNumberGenerator::from_seed(102);

    for _ in 0..20 {
        let candidate = Candidate::random(&catalog, &mut rng);
        assert_eq!(mutate(&candidate, &catalog, 0.0, &mut rng), candidate);
    }
}

#[test]
fn test_full_rate_mutation_changes_at_most_one_field_per_item() {
    let catalog = standard::catalog().unwrap();
    let mut rng = RandomNumberGenerator::from_seed(103);
    let mut changed_items = 0;

    for _ in 0..20 {
        let candidate = Candidate::random(&catalog, &mut rng);
        let mutated = mutate(&candidate, &catalog, 1.0, &mut rng);

        for (before, after) in candidate.items().iter().zip(mutated.items()) {
            assert_eq!(before.activity, after.activity);
        }
        for changed in differing_fields(&candidate, &mutated) {
            assert!(changed <= 1);
            changed_items += changed;
        }
        assert!(Candidate::from_items(&catalog, mutated.into_items()).is_ok());
    }

    // A redraw can land on the old value, but not for all 220 items.
    assert!(changed_items > 0);
}

#[test]
fn test_truncation_picks_the_top_two() {
    let catalog = standard::catalog().unwrap();
    let evaluator = FitnessEvaluator::new(&catalog, &FitnessRules::default());
    let options = EvolutionOptions::builder().population_size(40).build();
    let mut rng = RandomNumberGenerator::from_seed(104);
    let population = Population::initialize(&catalog, &evaluator, &options, &mut rng).unwrap();

    let mut scores: Vec<f64> = population
        .schedules()
        .iter()
        .map(|schedule| schedule.fitness_score())
        .collect();
    scores.sort_by(|a, b| b.total_cmp(a));

    let parents = TruncationSelection::default().select(&population, 2).unwrap();

    assert_eq!(parents.len(), 2);
    assert_eq!(parents[0].fitness_score(), scores[0]);
    assert_eq!(parents[1].fitness_score(), scores[1]);
}

#[test]
fn test_truncation_ties_keep_population_order() {
    let catalog = standard::catalog().unwrap();
    let options = EvolutionOptions::builder().population_size(5).build();
    let mut rng = RandomNumberGenerator::from_seed(105);
    let population = Population::initialize(&catalog, &Flat, &options, &mut rng).unwrap();

    let parents = TruncationSelection::default().select(&population, 2).unwrap();

    assert!(std::ptr::eq(parents[0], &population.schedules()[0]));
    assert!(std::ptr::eq(parents[1], &population.schedules()[1]));
}

#[test]
fn test_truncation_needs_enough_schedules() {
    let catalog = standard::catalog().unwrap();
    let options = EvolutionOptions::builder().population_size(1).build();
    let mut rng = RandomNumberGenerator::from_seed(106);
    let population = Population::initialize(&catalog, &Flat, &options, &mut rng).unwrap();

    let result = TruncationSelection::default().select(&population, 2);
    assert!(matches!(result, Err(GeneticError::Configuration(_))));
}
