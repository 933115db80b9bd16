pub mod catalog;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod population;
pub mod report;
pub mod rng;
pub mod schedule;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, FitnessRules};
pub use error::{GeneticError, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel, Termination};
pub use fitness::FitnessEvaluator;
pub use report::ScheduleReport;
pub use rng::RandomNumberGenerator;
pub use schedule::{Candidate, Schedule, ScheduleItem};
