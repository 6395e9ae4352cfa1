//! # Error Types
//!
//! Structured error types for spline_core. Every failing lookup or
//! validation returns one of these instead of a partial result, so a caller
//! (CLI, batch driver, UI) can report exactly which input needs correcting.
//!
//! ## Example
//!
//! ```rust
//! use spline_core::errors::{CalcError, CalcResult};
//!
//! fn validate_torque(torque_nm: f64) -> CalcResult<()> {
//!     if !torque_nm.is_finite() || torque_nm < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "torque_nm",
//!             torque_nm.to_string(),
//!             "Torque must be a finite, non-negative number",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for spline_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Hardness scale is neither Brinell nor Rockwell C
    #[error("Unrecognized hardness type: '{value}' (expected Brinell or Rockwell C)")]
    UnrecognizedHardnessType { value: String },

    /// Tooth end profile is neither straight nor crowned
    #[error("Unrecognized tooth end profile: '{value}' (expected Straight or Crowned)")]
    UnrecognizedToothEndProfile { value: String },

    /// A value falls outside every bracket of a published lookup table
    #[error("Input out of range for '{field}': {value} - {reason}")]
    InputOutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    /// An input value is invalid (non-finite, negative, zero divisor, etc.)
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

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an UnrecognizedHardnessType error
    pub fn unrecognized_hardness_type(value: impl Into<String>) -> Self {
        CalcError::UnrecognizedHardnessType {
            value: value.into(),
        }
    }

    /// Create an UnrecognizedToothEndProfile error
    pub fn unrecognized_tooth_end(value: impl Into<String>) -> Self {
        CalcError::UnrecognizedToothEndProfile {
            value: value.into(),
        }
    }

    /// Create an InputOutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InputOutOfRange {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the calculation inputs rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::UnrecognizedHardnessType { .. }
                | CalcError::UnrecognizedToothEndProfile { .. }
                | CalcError::InputOutOfRange { .. }
                | CalcError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnrecognizedHardnessType { .. } => "UNRECOGNIZED_HARDNESS_TYPE",
            CalcError::UnrecognizedToothEndProfile { .. } => "UNRECOGNIZED_TOOTH_END_PROFILE",
            CalcError::InputOutOfRange { .. } => "INPUT_OUT_OF_RANGE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
