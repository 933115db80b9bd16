//! # Error Types
//!
//! This module defines the error type shared by every part of the scheduler.
//! The evolutionary search itself cannot fail once it is running; errors come
//! from bad configuration, malformed catalogs, inconsistent candidates, or
//! the I/O around loading catalogs and writing reports.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use class_scheduler::error::{GeneticError, Result};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size < 2 {
//!         return Err(GeneticError::Configuration(format!(
//!             "Population size must be at least 2, got {}",
//!             size
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_population(1).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the scheduler.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// One of the activity, room, time-slot or facilitator catalogs is empty.
    #[error("Empty catalog: no {0} defined")]
    EmptyCatalog(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A schedule item or rule refers to something the catalog does not contain.
    #[error("Unknown reference: {0}")]
    UnknownReference(String),

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog or options document could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for GeneticError {
    fn from(error: serde_json::Error) -> Self {
        GeneticError::Serialization(error.to_string())
    }
}

/// A specialized Result type for scheduler operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use class_scheduler::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> class_scheduler::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
///
/// assert!(read_file("/definitely/not/here.json").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}
