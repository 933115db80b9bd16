//! # Genetic Operators
//!
//! Pure functions that derive new candidates from existing ones. Neither
//! operator touches its inputs; both return fresh [`Candidate`]s in canonical
//! activity order.

use crate::{
    catalog::{Catalog, FacilitatorId, RoomId, TimeSlot},
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    schedule::{Candidate, ScheduleItem},
};

/// The field of a schedule item that a mutation replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gene {
    Room,
    Time,
    Facilitator,
}

impl Gene {
    pub const ALL: [Gene; 3] = [Gene::Room, Gene::Time, Gene::Facilitator];

    fn random(rng: &mut RandomNumberGenerator) -> Self {
        Self::ALL[rng.index(Self::ALL.len())]
    }
}

/// Single-point crossover at a uniformly random cut point in `0..=len`.
///
/// The child takes `first`'s items before the cut and `second`'s from the
/// cut onwards.
///
/// # Errors
///
/// Returns `Breeding` if the parents have different lengths.
pub fn crossover(
    first: &Candidate,
    second: &Candidate,
    rng: &mut RandomNumberGenerator,
) -> Result<Candidate> {
    let cut = rng.cut_point(first.len());
    crossover_at(first, second, cut)
}

/// Single-point crossover at an explicit cut point.
///
/// # Errors
///
/// Returns `Breeding` if the parents have different lengths or `cut`
/// exceeds their length.
pub fn crossover_at(first: &Candidate, second: &Candidate, cut: usize) -> Result<Candidate> {
    if first.len() != second.len() {
        return Err(GeneticError::Breeding(format!(
            "Parents differ in length: {} vs {}",
            first.len(),
            second.len()
        )));
    }
    if cut > first.len() {
        return Err(GeneticError::Breeding(format!(
            "Cut point {} is beyond the parent length {}",
            cut,
            first.len()
        )));
    }

    let items = first.items()[..cut]
        .iter()
        .chain(second.items()[cut..].iter())
        .copied()
        .collect();

    Ok(Candidate::from_canonical(items))
}

/// Per-item mutation.
///
/// Each item independently, with probability `rate`, has exactly one of its
/// room, time or facilitator (chosen uniformly) replaced by a uniform draw
/// from the catalog. The draw may coincide with the old value. The activity
/// is never changed.
pub fn mutate(
    candidate: &Candidate,
    catalog: &Catalog,
    rate: f64,
    rng: &mut RandomNumberGenerator,
) -> Candidate {
    let items = candidate
        .items()
        .iter()
        .map(|&item| mutate_item(item, catalog, rate, rng))
        .collect();

    Candidate::from_canonical(items)
}

fn mutate_item(
    item: ScheduleItem,
    catalog: &Catalog,
    rate: f64,
    rng: &mut RandomNumberGenerator,
) -> ScheduleItem {
    if !rng.chance(rate) {
        return item;
    }

    match Gene::random(rng) {
        Gene::Room => item.with_room(RoomId(rng.index(catalog.rooms().len()))),
        Gene::Time => item.with_time(TimeSlot(rng.index(catalog.times().len()))),
        Gene::Facilitator => {
            item.with_facilitator(FacilitatorId(rng.index(catalog.facilitators().len())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard;

    #[test]
    fn test_crossover_at_splices_parents() {
        let catalog = standard::catalog().unwrap();
        let mut rng = RandomNumberGenerator::from_seed(31);
        let first = Candidate::random(&catalog, &mut rng);
        let second = Candidate::random(&catalog, &mut rng);

        let child = crossover_at(&first, &second, 4).unwrap();

        assert_eq!(&child.items()[..4], &first.items()[..4]);
        assert_eq!(&child.items()[4..], &second.items()[4..]);
    }

    #[test]
    fn test_crossover_extremes_copy_one_parent() {
        let catalog = standard::catalog().unwrap();
        let mut rng = RandomNumberGenerator::from_seed(32);
        let first = Candidate::random(&catalog, &mut rng);
        let second = Candidate::random(&catalog, &mut rng);

        assert_eq!(crossover_at(&first, &second, 0).unwrap(), second);
        assert_eq!(crossover_at(&first, &second, first.len()).unwrap(), first);
    }

    #[test]
    fn test_crossover_rejects_bad_cut() {
        let catalog = standard::catalog().unwrap();
        let mut rng = RandomNumberGenerator::from_seed(33);
        let first = Candidate::random(&catalog, &mut rng);
        let second = Candidate::random(&catalog, &mut rng);

        let result = crossover_at(&first, &second, first.len() + 1);
        assert!(matches!(result, Err(GeneticError::Breeding(_))));
    }

    #[test]
    fn test_mutation_does_not_touch_input() {
        let catalog = standard::catalog().unwrap();
        let mut rng = RandomNumberGenerator::from_seed(34);
        let original = Candidate::random(&catalog, &mut rng);
        let snapshot = original.clone();

        let _ = mutate(&original, &catalog, 1.0, &mut rng);

        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_every_gene_gets_chosen() {
        let mut rng = RandomNumberGenerator::from_seed(35);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let gene = Gene::random(&mut rng);
            seen[Gene::ALL.iter().position(|&g| g == gene).unwrap()] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}
