//! JSON loading for catalogs and fitness rules.
//!
//! ```json
//! {
//!   "activities": [
//!     { "name": "SLA100A", "enrollment": 50,
//!       "preferred_facilitators": ["Glen"], "other_facilitators": ["Numen"] }
//!   ],
//!   "rooms": [ { "name": "Roman 201", "capacity": 50 } ],
//!   "times": ["10 AM", "11 AM"],
//!   "facilitators": ["Glen", "Numen"],
//!   "rules": { "load_exempt_facilitator": null }
//! }
//! ```
//!
//! `rules` may be omitted entirely, and each of its fields falls back to
//! [`FitnessRules::default`] when absent.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Activity, Catalog, FitnessRules, Room};
use crate::error::Result;

/// Serialized form of a [`Catalog`] plus its [`FitnessRules`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub activities: Vec<Activity>,
    pub rooms: Vec<Room>,
    pub times: Vec<String>,
    pub facilitators: Vec<String>,
    #[serde(default)]
    pub rules: FitnessRules,
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validates the catalog and returns it together with the rules.
    pub fn into_parts(self) -> Result<(Catalog, FitnessRules)> {
        let catalog = Catalog::new(self.activities, self.rooms, self.times, self.facilitators)?;
        Ok((catalog, self.rules))
    }

    pub fn from_catalog(catalog: &Catalog, rules: &FitnessRules) -> Self {
        Self {
            activities: catalog.activities().to_vec(),
            rooms: catalog.rooms().to_vec(),
            times: catalog.times().to_vec(),
            facilitators: catalog.facilitators().to_vec(),
            rules: rules.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Catalog {
    /// Parses and validates a catalog, ignoring any `rules` section.
    pub fn from_json_str(json: &str) -> Result<Self> {
        CatalogConfig::from_json_str(json)?
            .into_parts()
            .map(|(catalog, _)| catalog)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        CatalogConfig::from_json_file(path)?
            .into_parts()
            .map(|(catalog, _)| catalog)
    }
}
