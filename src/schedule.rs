//! # Schedules
//!
//! A schedule assigns every activity of the catalog to a room, a time slot and
//! a facilitator. Two types model its life cycle:
//!
//! - [`Candidate`]: the bare item list, as produced by random initialization,
//!   crossover or mutation.
//! - [`Schedule`]: a candidate together with its fitness score. The only way
//!   to obtain one is [`Schedule::evaluate`], so anything that ranks or
//!   averages schedules works on scored values by construction.
//!
//! Item `i` of a candidate always belongs to `ActivityId(i)`. Every producer
//! keeps that canonical order, which is what makes single-point crossover
//! between two candidates positionally meaningful.

use crate::{
    catalog::{ActivityId, Catalog, FacilitatorId, RoomId, TimeSlot},
    error::{GeneticError, Result},
    evolution::Challenge,
    rng::RandomNumberGenerator,
};

/// One activity placed in a room, at a time, with a facilitator.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleItem {
    pub activity: ActivityId,
    pub room: RoomId,
    pub time: TimeSlot,
    pub facilitator: FacilitatorId,
}

impl ScheduleItem {
    pub fn new(
        activity: ActivityId,
        room: RoomId,
        time: TimeSlot,
        facilitator: FacilitatorId,
    ) -> Self {
        Self {
            activity,
            room,
            time,
            facilitator,
        }
    }

    pub fn with_room(self, room: RoomId) -> Self {
        Self { room, ..self }
    }

    pub fn with_time(self, time: TimeSlot) -> Self {
        Self { time, ..self }
    }

    pub fn with_facilitator(self, facilitator: FacilitatorId) -> Self {
        Self {
            facilitator,
            ..self
        }
    }
}

/// An unscored schedule: exactly one item per catalog activity, in catalog order.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    items: Vec<ScheduleItem>,
}

impl Candidate {
    /// Draws a room, a time and a facilitator uniformly (with replacement)
    /// for every activity. No feasibility filtering is applied.
    pub fn random(catalog: &Catalog, rng: &mut RandomNumberGenerator) -> Self {
        let items = catalog
            .activity_ids()
            .map(|activity| {
                let facilitator = FacilitatorId(rng.index(catalog.facilitators().len()));
                let room = RoomId(rng.index(catalog.rooms().len()));
                let time = TimeSlot(rng.index(catalog.times().len()));
                ScheduleItem::new(activity, room, time, facilitator)
            })
            .collect();

        Self { items }
    }

    /// Builds a candidate from explicit items.
    ///
    /// # Errors
    ///
    /// Returns `UnknownReference` if the items are not exactly one per
    /// activity in catalog order, or if any room, time or facilitator id is
    /// out of range.
    pub fn from_items(catalog: &Catalog, items: Vec<ScheduleItem>) -> Result<Self> {
        if items.len() != catalog.activities().len() {
            return Err(GeneticError::UnknownReference(format!(
                "Expected {} schedule items, one per activity, got {}",
                catalog.activities().len(),
                items.len()
            )));
        }

        for (position, item) in items.iter().enumerate() {
            if item.activity != ActivityId(position) {
                return Err(GeneticError::UnknownReference(format!(
                    "Item {} refers to activity {:?}; items must follow catalog order",
                    position, item.activity
                )));
            }
            if !catalog.contains(item.room, item.time, item.facilitator) {
                return Err(GeneticError::UnknownReference(format!(
                    "Item for activity {} refers to a room, time or facilitator outside the catalog",
                    catalog.activity(item.activity).name
                )));
            }
        }

        Ok(Self { items })
    }

    /// Wraps items that are already known to be in canonical order.
    pub(crate) fn from_canonical(items: Vec<ScheduleItem>) -> Self {
        debug_assert!(items
            .iter()
            .enumerate()
            .all(|(position, item)| item.activity == ActivityId(position)));
        Self { items }
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    /// The item scheduled for `activity`.
    pub fn item(&self, activity: ActivityId) -> Option<&ScheduleItem> {
        self.items.get(activity.0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<ScheduleItem> {
        self.items
    }
}

/// A candidate with its fitness score.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    candidate: Candidate,
    fitness_score: f64,
}

impl Schedule {
    /// Scores `candidate` with `challenge`.
    ///
    /// # Errors
    ///
    /// Returns `FitnessCalculation` if the challenge yields NaN or an infinity.
    pub fn evaluate<C>(candidate: Candidate, challenge: &C) -> Result<Self>
    where
        C: Challenge<Candidate> + ?Sized,
    {
        let fitness_score = challenge.score(&candidate);
        if !fitness_score.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                fitness_score
            )));
        }

        Ok(Self {
            candidate,
            fitness_score,
        })
    }

    pub fn fitness_score(&self) -> f64 {
        self.fitness_score
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn items(&self) -> &[ScheduleItem] {
        self.candidate.items()
    }

    pub fn into_candidate(self) -> Candidate {
        self.candidate
    }
}
