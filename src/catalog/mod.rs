//! # Catalog
//!
//! Read-only domain data for a scheduling run: the activities to place, the
//! rooms, the ordered list of time slots, and the facilitators. Everything
//! else in the crate refers to catalog entries through the typed indices
//! defined here ([`ActivityId`], [`RoomId`], [`TimeSlot`], [`FacilitatorId`]).
//!
//! The order of time slots is significant: the fitness function measures the
//! distance between two slots as the difference of their positions.
//!
//! ## Example
//!
//! ```rust
//! use class_scheduler::catalog::{Activity, Catalog, Room};
//!
//! let catalog = Catalog::new(
//!     vec![Activity::new("CS101", 40, ["Ada"], ["Grace"])],
//!     vec![Room::new("Hall 1", 60)],
//!     vec!["9 AM".to_string(), "10 AM".to_string()],
//!     vec!["Ada".to_string(), "Grace".to_string()],
//! )
//! .unwrap();
//!
//! assert_eq!(catalog.activities().len(), 1);
//! assert_eq!(catalog.time_label(catalog.time_slot("10 AM").unwrap()), "10 AM");
//! ```

#[cfg(feature = "serde")]
pub mod config;
pub mod rules;
pub mod standard;

use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use crate::error::{GeneticError, Result};

pub use rules::FitnessRules;

/// Position of an activity in [`Catalog::activities`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(pub usize);

/// Position of a room in [`Catalog::rooms`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// Position of a label in the canonical, ordered time-slot list.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot(pub usize);

impl TimeSlot {
    /// Number of slots between `self` and `other` in the canonical ordering.
    pub fn distance(self, other: TimeSlot) -> usize {
        self.0.abs_diff(other.0)
    }
}

/// Position of a facilitator in [`Catalog::facilitators`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacilitatorId(pub usize);

/// An activity (class section) that needs a room, a time and a facilitator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub enrollment: u32,
    pub preferred_facilitators: BTreeSet<String>,
    pub other_facilitators: BTreeSet<String>,
}

impl Activity {
    pub fn new<N, P, O>(name: N, enrollment: u32, preferred: P, other: O) -> Self
    where
        N: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            name: name.into(),
            enrollment,
            preferred_facilitators: preferred.into_iter().map(Into::into).collect(),
            other_facilitators: other.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub capacity: u32,
}

impl Room {
    pub fn new<N: Into<String>>(name: N, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// The validated, immutable domain data of a run.
#[derive(Debug, Clone)]
pub struct Catalog {
    activities: Vec<Activity>,
    rooms: Vec<Room>,
    times: Vec<String>,
    facilitators: Vec<String>,
    activity_index: HashMap<String, ActivityId>,
    room_index: HashMap<String, RoomId>,
    time_index: HashMap<String, TimeSlot>,
    facilitator_index: HashMap<String, FacilitatorId>,
}

impl Catalog {
    /// Builds a catalog, failing fast on empty lists, duplicate names and
    /// non-positive enrollments or capacities.
    ///
    /// Facilitators named by an activity but missing from `facilitators` are
    /// accepted with a warning: such names can never be assigned, so they
    /// simply never earn the preference bonus.
    pub fn new(
        activities: Vec<Activity>,
        rooms: Vec<Room>,
        times: Vec<String>,
        facilitators: Vec<String>,
    ) -> Result<Self> {
        if activities.is_empty() {
            return Err(GeneticError::EmptyCatalog("activities".to_string()));
        }
        if rooms.is_empty() {
            return Err(GeneticError::EmptyCatalog("rooms".to_string()));
        }
        if times.is_empty() {
            return Err(GeneticError::EmptyCatalog("time slots".to_string()));
        }
        if facilitators.is_empty() {
            return Err(GeneticError::EmptyCatalog("facilitators".to_string()));
        }

        if let Some(activity) = activities.iter().find(|a| a.enrollment == 0) {
            return Err(GeneticError::Configuration(format!(
                "Activity {} must have a positive enrollment",
                activity.name
            )));
        }
        if let Some(room) = rooms.iter().find(|r| r.capacity == 0) {
            return Err(GeneticError::Configuration(format!(
                "Room {} must have a positive capacity",
                room.name
            )));
        }

        let activity_index = index_names(activities.iter().map(|a| a.name.as_str()), "activity", ActivityId)?;
        let room_index = index_names(rooms.iter().map(|r| r.name.as_str()), "room", RoomId)?;
        let time_index = index_names(times.iter().map(String::as_str), "time slot", TimeSlot)?;
        let facilitator_index =
            index_names(facilitators.iter().map(String::as_str), "facilitator", FacilitatorId)?;

        for activity in &activities {
            for name in activity
                .preferred_facilitators
                .iter()
                .chain(activity.other_facilitators.iter())
            {
                if !facilitator_index.contains_key(name) {
                    warn!(
                        activity = %activity.name,
                        facilitator = %name,
                        "activity names a facilitator that is not in the catalog"
                    );
                }
            }
        }

        Ok(Self {
            activities,
            rooms,
            times,
            facilitators,
            activity_index,
            room_index,
            time_index,
            facilitator_index,
        })
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn facilitators(&self) -> &[String] {
        &self.facilitators
    }

    /// Activity ids in canonical catalog order.
    pub fn activity_ids(&self) -> impl ExactSizeIterator<Item = ActivityId> {
        (0..self.activities.len()).map(ActivityId)
    }

    pub fn activity(&self, id: ActivityId) -> &Activity {
        &self.activities[id.0]
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn time_label(&self, slot: TimeSlot) -> &str {
        &self.times[slot.0]
    }

    pub fn facilitator_name(&self, id: FacilitatorId) -> &str {
        &self.facilitators[id.0]
    }

    pub fn activity_id(&self, name: &str) -> Option<ActivityId> {
        self.activity_index.get(name).copied()
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.room_index.get(name).copied()
    }

    pub fn time_slot(&self, label: &str) -> Option<TimeSlot> {
        self.time_index.get(label).copied()
    }

    pub fn facilitator_id(&self, name: &str) -> Option<FacilitatorId> {
        self.facilitator_index.get(name).copied()
    }

    /// Whether every id is within the bounds of its catalog.
    pub fn contains(
        &self,
        room: RoomId,
        time: TimeSlot,
        facilitator: FacilitatorId,
    ) -> bool {
        room.0 < self.rooms.len()
            && time.0 < self.times.len()
            && facilitator.0 < self.facilitators.len()
    }
}

fn index_names<'a, I, Id, F>(names: I, kind: &str, make_id: F) -> Result<HashMap<String, Id>>
where
    I: Iterator<Item = &'a str>,
    F: Fn(usize) -> Id,
{
    let mut index = HashMap::new();
    for (position, name) in names.enumerate() {
        if index.insert(name.to_string(), make_id(position)).is_some() {
            return Err(GeneticError::Configuration(format!(
                "Duplicate {} name: {}",
                kind, name
            )));
        }
    }
    Ok(index)
}
