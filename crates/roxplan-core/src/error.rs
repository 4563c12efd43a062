//! Error handling for RoxPlan
//!
//! Provides the error types shared by every layer of the editor:
//! - Validation errors (rejected field-level updates at the API boundary)
//! - Store errors (plan persistence)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Raised when a typed update or a new entity carries a value the document
/// model cannot hold. A rejected update leaves the document untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric field received NaN or an infinity
    #[error("Field '{field}' must be a finite number, got {value}")]
    NonFinite {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A numeric field is outside its allowed range
    #[error("Field '{field}' out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A numeric field must be strictly positive
    #[error("Field '{field}' must be greater than zero, got {value}")]
    NonPositive {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A color field is not a hex color
    #[error("Field '{field}' is not a hex color: {value:?}")]
    InvalidColor {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A polyline has too few points to be measurable
    #[error("Route needs at least {min} points, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
        /// Minimum number of points.
        min: usize,
    },
}

/// Store error type
///
/// Represents failures of the persistence gateway.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No plan with the given id
    #[error("Plan not found: {0}")]
    NotFound(String),

    /// The backing file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data is not valid JSON for a plan list
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing data parsed but violates an invariant
    #[error("Corrupted plan store: {0}")]
    Corrupted(String),
}

/// Main error type for RoxPlan
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a not-found error from the store
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotFound(_)))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
