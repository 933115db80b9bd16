//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the run parameters of the scheduler's
//! evolutionary search: population size, the initial mutation rate, the
//! convergence window and threshold, a generation limit, the parallelism
//! threshold, and how chatty the per-generation logging is.
//!
//! ## Example
//!
//! ```rust
//! use class_scheduler::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, 0.05);
//! assert_eq!(custom_options.get_population_size(), 200);
//!
//! // Or use the builder for the less common knobs
//! let options = EvolutionOptions::builder()
//!     .population_size(500)
//!     .initial_mutation_rate(0.01)
//!     .max_generations(2_000)
//!     .log_level(LogLevel::None)
//!     .build();
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## `LogLevel`
//!
//! - `Verbose`: a summary line for every generation.
//! - `Minimal`: a summary line every tenth generation.
//! - `None`: no per-generation summaries.
//!
//! Convergence, the generation limit and mutation-rate changes are logged at
//! every level; the subscriber's own filter decides what is shown.

use crate::error::{GeneticError, Result};

const DEFAULT_POPULATION_SIZE: usize = 500;
const DEFAULT_INITIAL_MUTATION_RATE: f64 = 0.01;
const DEFAULT_CONVERGENCE_WINDOW: usize = 100;
const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.01;
const DEFAULT_MAX_GENERATIONS: usize = 10_000;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Generations between two summary lines at `LogLevel::Minimal`.
pub const MINIMAL_LOG_INTERVAL: usize = 10;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    initial_mutation_rate: f64,
    /// Generations between the two mean-fitness samples compared for convergence
    convergence_window: usize,
    /// Relative improvement below which the run has converged
    convergence_threshold: f64,
    /// Hard bound on the number of generations
    max_generations: usize,
    /// Minimum number of items to process in parallel
    parallel_threshold: usize,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(population_size: usize, initial_mutation_rate: f64) -> Self {
        Self {
            population_size,
            initial_mutation_rate,
            ..Self::default()
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_initial_mutation_rate(&self) -> f64 {
        self.initial_mutation_rate
    }

    pub fn get_convergence_window(&self) -> usize {
        self.convergence_window
    }

    pub fn get_convergence_threshold(&self) -> f64 {
        self.convergence_threshold
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    /// Returns the minimum number of items to process in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the initial mutation rate.
    pub fn set_initial_mutation_rate(&mut self, rate: f64) {
        self.initial_mutation_rate = rate;
    }

    /// Sets the generation limit.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks the options before a run.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the population has fewer than two members
    /// (selection needs two ranked parents), the mutation rate is outside
    /// `[0, 1]`, the convergence window or generation limit is zero, or the
    /// convergence threshold is not finite.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if !(0.0..=1.0).contains(&self.initial_mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Initial mutation rate must be within [0, 1], got {}",
                self.initial_mutation_rate
            )));
        }

        if self.convergence_window == 0 {
            return Err(GeneticError::Configuration(
                "Convergence window cannot be zero".to_string(),
            ));
        }

        if !self.convergence_threshold.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Convergence threshold must be finite, got {}",
                self.convergence_threshold
            )));
        }

        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "Maximum number of generations cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            initial_mutation_rate: DEFAULT_INITIAL_MUTATION_RATE,
            convergence_window: DEFAULT_CONVERGENCE_WINDOW,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            max_generations: DEFAULT_MAX_GENERATIONS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            log_level: LogLevel::Minimal,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields take the defaults of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    initial_mutation_rate: Option<f64>,
    convergence_window: Option<usize>,
    convergence_threshold: Option<f64>,
    max_generations: Option<usize>,
    parallel_threshold: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn initial_mutation_rate(mut self, value: f64) -> Self {
        self.initial_mutation_rate = Some(value);
        self
    }

    pub fn convergence_window(mut self, value: usize) -> Self {
        self.convergence_window = Some(value);
        self
    }

    pub fn convergence_threshold(mut self, value: f64) -> Self {
        self.convergence_threshold = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            initial_mutation_rate: self
                .initial_mutation_rate
                .unwrap_or(default.initial_mutation_rate),
            convergence_window: self.convergence_window.unwrap_or(default.convergence_window),
            convergence_threshold: self
                .convergence_threshold
                .unwrap_or(default.convergence_threshold),
            max_generations: self.max_generations.unwrap_or(default.max_generations),
            parallel_threshold: self.parallel_threshold.unwrap_or(default.parallel_threshold),
            log_level: self.log_level.unwrap_or(default.log_level),
        }
    }
}
