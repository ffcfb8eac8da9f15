//! # Error Types
//!
//! Structured error types for beam_core. Every failure in the engine is an
//! input problem caught at the boundary, so each variant names the offending
//! field or load and carries enough context to fix it.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Beam length or flexural rigidity is not a positive finite number
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A load record is malformed (UDL with start >= end, UVL with peak == zero position, ...)
    #[error("Invalid {kind} load at index {index}: {reason}")]
    InvalidLoadSpec {
        index: usize,
        kind: String,
        reason: String,
    },

    /// A load or evaluation position lies outside [0, L]
    #[error("Position '{field}' = {position} m is outside the span [0, {length}] m")]
    OutOfRangePosition {
        field: String,
        position: f64,
        length: f64,
    },

    /// A setting, section dimension or material constant is invalid
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidLoadSpec error
    pub fn invalid_load(index: usize, kind: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidLoadSpec {
            index,
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRangePosition error
    pub fn out_of_range(field: impl Into<String>, position: f64, length: f64) -> Self {
        CalcError::OutOfRangePosition {
            field: field.into(),
            position,
            length,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidLoadSpec { .. } => "INVALID_LOAD_SPEC",
            CalcError::OutOfRangePosition { .. } => "OUT_OF_RANGE_POSITION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
