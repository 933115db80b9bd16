//! # Schedule Report
//!
//! Plain-text rendering of a scored schedule, grouped by time slot:
//!
//! ```text
//! Final Schedule (Fitness Score: 7.35):
//!
//! 10 AM
//! --------------------------------------------------------------------------------
//! Activity: SLA191A  | Room: Roman 201    | Facilitator: Glen
//! Activity: SLA304   | Room: Slater 003   | Facilitator: Banks
//! ```
//!
//! Slots appear in catalog order, activities by name within a slot, and empty
//! slots are omitted. Catalog order is chronological for the standard data
//! set, so "10 AM" precedes "1 PM" even though it sorts after it as text.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::{
    catalog::Catalog,
    error::{Result, ResultExt},
    schedule::{Schedule, ScheduleItem},
};

const RULE_WIDTH: usize = 80;

pub struct ScheduleReport<'a> {
    schedule: &'a Schedule,
    catalog: &'a Catalog,
}

impl<'a> ScheduleReport<'a> {
    pub fn new(schedule: &'a Schedule, catalog: &'a Catalog) -> Self {
        Self { schedule, catalog }
    }

    /// Items ordered by time slot, then by activity name.
    pub fn sorted_items(&self) -> Vec<&'a ScheduleItem> {
        let catalog = self.catalog;
        let mut items: Vec<&ScheduleItem> = self.schedule.items().iter().collect();
        items.sort_by(|a, b| {
            a.time
                .cmp(&b.time)
                .then_with(|| catalog.activity(a.activity).name.cmp(&catalog.activity(b.activity).name))
        });
        items
    }

    /// Writes the rendered report to `path`, replacing any existing file.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())
            .context(format!("Failed to write report to {}", path.display()))
    }
}

impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Final Schedule (Fitness Score: {:.2}):",
            self.schedule.fitness_score()
        )?;

        let mut current_time = None;
        for item in self.sorted_items() {
            if current_time != Some(item.time) {
                current_time = Some(item.time);
                writeln!(f)?;
                writeln!(f, "{}", self.catalog.time_label(item.time))?;
                writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            }
            writeln!(
                f,
                "Activity: {:<8} | Room: {:<12} | Facilitator: {}",
                self.catalog.activity(item.activity).name,
                self.catalog.room(item.room).name,
                self.catalog.facilitator_name(item.facilitator)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;
    use crate::catalog::{standard, ActivityId, FacilitatorId, FitnessRules, RoomId, TimeSlot};
    use crate::fitness::FitnessEvaluator;
    use crate::schedule::Candidate;

    fn fixed_schedule(catalog: &Catalog) -> Schedule {
        // Alternate between 3 PM and 10 AM so sorting has something to do.
        let items = catalog
            .activity_ids()
            .map(|id| {
                let time = if id.0 % 2 == 0 { TimeSlot(5) } else { TimeSlot(0) };
                ScheduleItem::new(id, RoomId(id.0 % 9), time, FacilitatorId(id.0 % 10))
            })
            .collect();
        let candidate = Candidate::from_items(catalog, items).unwrap();
        Schedule::evaluate(candidate, &FitnessEvaluator::new(catalog, &FitnessRules::default()))
            .unwrap()
    }

    #[test]
    fn test_groups_by_time_in_catalog_order() {
        let catalog = standard::catalog().unwrap();
        let schedule = fixed_schedule(&catalog);
        let text = ScheduleReport::new(&schedule, &catalog).to_string();

        let ten = text.find("\n10 AM\n").unwrap();
        let three = text.find("\n3 PM\n").unwrap();
        assert!(ten < three);
        assert!(!text.contains("\n11 AM\n"));
        assert!(text.starts_with(&format!(
            "Final Schedule (Fitness Score: {:.2}):",
            schedule.fitness_score()
        )));
        assert_eq!(text.matches("Activity: ").count(), 11);
    }

    #[test]
    fn test_line_format() {
        let catalog = standard::catalog().unwrap();
        let schedule = fixed_schedule(&catalog);
        let text = ScheduleReport::new(&schedule, &catalog).to_string();

        assert!(text.contains("Activity: SLA100A  | Room: Slater 003   | Facilitator: Lock"));
    }

    #[test]
    fn test_sorted_by_activity_within_slot() {
        let catalog = standard::catalog().unwrap();
        let schedule = fixed_schedule(&catalog);
        let report = ScheduleReport::new(&schedule, &catalog);

        let names: Vec<&str> = report
            .sorted_items()
            .iter()
            .map(|item| catalog.activity(item.activity).name.as_str())
            .collect();

        assert_eq!(names[0], "SLA100B");
        assert_eq!(catalog.activity(ActivityId(1)).name, "SLA100B");
        assert_eq!(names[names.len() - 1], "SLA451");
    }

    #[test]
    fn test_write_to_file() {
        let catalog = standard::catalog().unwrap();
        let schedule = fixed_schedule(&catalog);
        let report = ScheduleReport::new(&schedule, &catalog);
        let path = std::env::temp_dir().join(format!(
            "class-scheduler-report-{}.txt",
            std::process::id()
        ));

        report.write_to_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, report.to_string());
    }

    #[test]
    fn test_write_failure_names_the_path() {
        let catalog = standard::catalog().unwrap();
        let schedule = fixed_schedule(&catalog);
        let report = ScheduleReport::new(&schedule, &catalog);
        let path = std::env::temp_dir()
            .join("class-scheduler-no-such-dir")
            .join("report.txt");

        match report.write_to_file(&path) {
            Err(GeneticError::Other(msg)) => {
                assert!(msg.starts_with("Failed to write report to "));
                assert!(msg.contains("class-scheduler-no-such-dir"));
            }
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[test]
    fn test_slots_follow_catalog_order_not_label_order() {
        let catalog = standard::catalog().unwrap();
        let items = catalog
            .activity_ids()
            .map(|id| {
                let time = if id.0 == 0 { TimeSlot(3) } else { TimeSlot(0) };
                ScheduleItem::new(id, RoomId(id.0 % 9), time, FacilitatorId(id.0 % 10))
            })
            .collect();
        let candidate = Candidate::from_items(&catalog, items).unwrap();
        let schedule =
            Schedule::evaluate(candidate, &FitnessEvaluator::new(&catalog, &FitnessRules::default()))
                .unwrap();
        let text = ScheduleReport::new(&schedule, &catalog).to_string();

        assert!(text.find("\n10 AM\n").unwrap() < text.find("\n1 PM\n").unwrap());
    }
}
