//! # Fitness Evaluation
//!
//! [`FitnessEvaluator`] scores a [`Candidate`] against a [`Catalog`] under a
//! weighted soft-constraint model. Higher is better and the score is
//! unbounded in both directions. Every weight below is part of the contract:
//! changing one changes which schedules the search prefers.
//!
//! Per item, in this order:
//!
//! | Term | Adjustment |
//! |---|---|
//! | room already used at that time | −0.5 |
//! | room smaller than enrollment / > 6× / > 3× / otherwise | −0.5 / −0.4 / −0.2 / +0.3 |
//! | facilitator preferred / other / neither | +0.5 / +0.2 / −0.1 |
//! | facilitator has one / several activities at that time | +0.2 / −0.2 |
//! | facilitator total > 4 / < 3 (unless exempt) | −0.5 / −0.4 |
//!
//! Per schedule, for each section group with exactly two members: same time
//! −0.5, more than four slots apart +0.5. When both groups have exactly two
//! members, for every pair of times across the two groups: same slot −0.25,
//! adjacent +0.5 (and −0.4 more when only one of the two sections sits in a
//! far building), two apart +0.25.

use tracing::warn;

use crate::{
    catalog::{ActivityId, Catalog, FacilitatorId, FitnessRules, RoomId, TimeSlot},
    evolution::Challenge,
    schedule::Candidate,
};

const ROOM_COLLISION: f64 = 0.5;

const ROOM_TOO_SMALL: f64 = 0.5;
const ROOM_OVER_SIX_TIMES: f64 = 0.4;
const ROOM_OVER_THREE_TIMES: f64 = 0.2;
const ROOM_WELL_SIZED: f64 = 0.3;

const PREFERRED_FACILITATOR: f64 = 0.5;
const OTHER_FACILITATOR: f64 = 0.2;
const UNLISTED_FACILITATOR: f64 = 0.1;

const SINGLE_ACTIVITY_IN_SLOT: f64 = 0.2;
const DOUBLE_BOOKED: f64 = 0.2;

const OVERLOADED: f64 = 0.5;
const UNDERLOADED: f64 = 0.4;
const MAX_LOAD: usize = 4;
const MIN_LOAD: usize = 3;

const SECTIONS_SAME_TIME: f64 = 0.5;
const SECTIONS_SPREAD: f64 = 0.5;
const SECTIONS_SPREAD_DISTANCE: usize = 4;

const CROSS_SAME_TIME: f64 = 0.25;
const CROSS_CONSECUTIVE: f64 = 0.5;
const CROSS_CONSECUTIVE_BUILDING_SPLIT: f64 = 0.4;
const CROSS_ONE_SLOT_GAP: f64 = 0.25;

/// How well a facilitator fits an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suitability {
    Preferred,
    Other,
    Unlisted,
}

/// The fitness function of the scheduler, bound to one catalog.
///
/// Name-based lookups (facilitator preferences, section groups, the load
/// exemption, building keywords) are resolved once at construction so that
/// scoring works purely on ids.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'c> {
    catalog: &'c Catalog,
    /// Indexed by `activity * facilitators + facilitator`.
    suitability: Vec<Suitability>,
    first_group: Vec<ActivityId>,
    second_group: Vec<ActivityId>,
    load_exempt: Option<FacilitatorId>,
    /// Indexed by room id.
    far_building: Vec<bool>,
    /// Both groups resolved to exactly two activities.
    cross_group: bool,
}

impl<'c> FitnessEvaluator<'c> {
    /// Binds the evaluator to `catalog` and resolves `rules` against it.
    ///
    /// Section-group names missing from the catalog are dropped with a
    /// warning. A group left with fewer than two activities contributes
    /// nothing to the score, and neither do the cross-group checks.
    pub fn new(catalog: &'c Catalog, rules: &FitnessRules) -> Self {
        let facilitators = catalog.facilitators();
        let suitability = catalog
            .activities()
            .iter()
            .flat_map(|activity| {
                facilitators.iter().map(move |name| {
                    if activity.preferred_facilitators.contains(name) {
                        Suitability::Preferred
                    } else if activity.other_facilitators.contains(name) {
                        Suitability::Other
                    } else {
                        Suitability::Unlisted
                    }
                })
            })
            .collect();

        let load_exempt = rules.load_exempt_facilitator.as_deref().and_then(|name| {
            let id = catalog.facilitator_id(name);
            if id.is_none() {
                warn!(facilitator = %name, "load-exempt facilitator is not in the catalog");
            }
            id
        });

        let far_building = catalog
            .rooms()
            .iter()
            .map(|room| rules.is_far_building(&room.name))
            .collect();

        let first_group = resolve_group(catalog, &rules.first_section_group, "first");
        let second_group = resolve_group(catalog, &rules.second_section_group, "second");
        let cross_group = first_group.len() == 2 && second_group.len() == 2;

        Self {
            catalog,
            suitability,
            first_group,
            second_group,
            load_exempt,
            far_building,
            cross_group,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Computes the fitness score of `candidate`.
    ///
    /// A candidate built against a different catalog (wrong length, or ids
    /// beyond this catalog's bounds) scores `NaN`, which
    /// [`Schedule::evaluate`](crate::schedule::Schedule::evaluate) turns into
    /// a `FitnessCalculation` error.
    pub fn evaluate(&self, candidate: &Candidate) -> f64 {
        if !self.fits(candidate) {
            warn!(
                items = candidate.len(),
                activities = self.catalog.activities().len(),
                "candidate does not belong to the evaluator's catalog"
            );
            return f64::NAN;
        }

        let num_facilitators = self.catalog.facilitators().len();
        let num_times = self.catalog.times().len();
        let num_rooms = self.catalog.rooms().len();

        let mut facilitator_counts = vec![0usize; num_facilitators];
        let mut facilitator_time_counts = vec![0usize; num_facilitators * num_times];
        let mut first_sections: Vec<(TimeSlot, RoomId)> = Vec::new();
        let mut second_sections: Vec<(TimeSlot, RoomId)> = Vec::new();

        for item in candidate.items() {
            facilitator_counts[item.facilitator.0] += 1;
            facilitator_time_counts[item.facilitator.0 * num_times + item.time.0] += 1;

            if self.first_group.contains(&item.activity) {
                first_sections.push((item.time, item.room));
            } else if self.second_group.contains(&item.activity) {
                second_sections.push((item.time, item.room));
            }
        }

        let mut score = 0.0;
        let mut occupied = vec![false; num_times * num_rooms];

        for item in candidate.items() {
            let slot = &mut occupied[item.time.0 * num_rooms + item.room.0];
            if *slot {
                score -= ROOM_COLLISION;
            }
            *slot = true;

            let activity = self.catalog.activity(item.activity);
            let capacity = self.catalog.room(item.room).capacity;
            let enrollment = activity.enrollment;
            if capacity < enrollment {
                score -= ROOM_TOO_SMALL;
            } else if u64::from(capacity) > 6 * u64::from(enrollment) {
                score -= ROOM_OVER_SIX_TIMES;
            } else if u64::from(capacity) > 3 * u64::from(enrollment) {
                score -= ROOM_OVER_THREE_TIMES;
            } else {
                score += ROOM_WELL_SIZED;
            }

            match self.suitability[item.activity.0 * num_facilitators + item.facilitator.0] {
                Suitability::Preferred => score += PREFERRED_FACILITATOR,
                Suitability::Other => score += OTHER_FACILITATOR,
                Suitability::Unlisted => score -= UNLISTED_FACILITATOR,
            }

            match facilitator_time_counts[item.facilitator.0 * num_times + item.time.0] {
                1 => score += SINGLE_ACTIVITY_IN_SLOT,
                n if n > 1 => score -= DOUBLE_BOOKED,
                _ => {}
            }

            let load = facilitator_counts[item.facilitator.0];
            if load > MAX_LOAD {
                score -= OVERLOADED;
            } else if load < MIN_LOAD && self.load_exempt != Some(item.facilitator) {
                score -= UNDERLOADED;
            }
        }

        if let Some(spacing) = section_spacing(&first_sections) {
            score += spacing;
        }
        if let Some(spacing) = section_spacing(&second_sections) {
            score += spacing;
        }
        if self.cross_group {
            self.apply_cross_group(&mut score, &first_sections, &second_sections);
        }

        score
    }

    /// Whether every item of `candidate` can be looked up in this catalog.
    fn fits(&self, candidate: &Candidate) -> bool {
        candidate.len() == self.catalog.activities().len()
            && candidate
                .items()
                .iter()
                .all(|item| self.catalog.contains(item.room, item.time, item.facilitator))
    }

    fn apply_cross_group(
        &self,
        score: &mut f64,
        first_sections: &[(TimeSlot, RoomId)],
        second_sections: &[(TimeSlot, RoomId)],
    ) {
        for &(first_time, _) in first_sections {
            for &(second_time, _) in second_sections {
                match first_time.distance(second_time) {
                    0 => *score -= CROSS_SAME_TIME,
                    1 => {
                        *score += CROSS_CONSECUTIVE;
                        if self.building_of(first_sections, first_time)
                            != self.building_of(second_sections, second_time)
                        {
                            *score -= CROSS_CONSECUTIVE_BUILDING_SPLIT;
                        }
                    }
                    2 => *score += CROSS_ONE_SLOT_GAP,
                    _ => {}
                }
            }
        }
    }

    /// Whether the first section of the group held at `time` is in a far building.
    fn building_of(&self, sections: &[(TimeSlot, RoomId)], time: TimeSlot) -> bool {
        sections
            .iter()
            .find(|(section_time, _)| *section_time == time)
            .is_some_and(|(_, room)| self.far_building[room.0])
    }
}

impl Challenge<Candidate> for FitnessEvaluator<'_> {
    fn score(&self, candidate: &Candidate) -> f64 {
        self.evaluate(candidate)
    }
}

/// Adjustment for a two-section group, `None` when the group earns nothing.
fn section_spacing(sections: &[(TimeSlot, RoomId)]) -> Option<f64> {
    match sections {
        [(a, _), (b, _)] if a == b => Some(-SECTIONS_SAME_TIME),
        [(a, _), (b, _)] if a.distance(*b) > SECTIONS_SPREAD_DISTANCE => Some(SECTIONS_SPREAD),
        _ => None,
    }
}

fn resolve_group(catalog: &Catalog, names: &[String], label: &str) -> Vec<ActivityId> {
    let mut group = Vec::with_capacity(names.len());
    for name in names {
        match catalog.activity_id(name) {
            Some(id) if !group.contains(&id) => group.push(id),
            Some(_) => {}
            None => warn!(group = label, activity = %name, "section activity is not in the catalog"),
        }
    }
    if group.len() != 2 {
        warn!(
            group = label,
            members = group.len(),
            "section group does not have exactly two activities; its pairing checks are skipped"
        );
    }
    group
}
