pub mod adaptive;
pub mod builder;
pub mod challenge;
pub mod convergence;
pub mod launcher;
pub mod options;

pub use adaptive::AdaptiveMutationRate;
pub use builder::EvolutionLauncherBuilder;
pub use challenge::Challenge;
pub use convergence::{relative_improvement, ConvergenceMonitor};
pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationStats, Termination};
pub use options::{EvolutionOptions, LogLevel};
