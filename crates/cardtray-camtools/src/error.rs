//! Error types for the slot and divider geometry.
//!
//! Every error is raised before any drawing command reaches a
//! [`PathTracer`](crate::path_tracer::PathTracer), so a failed call never leaves
//! partial geometry behind.

use thiserror::Error;

/// Errors that can occur while laying out, normalizing or tracing slotted edges
/// and divider panels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlotLayoutError {
    /// The caller supplied an unusable parameter set.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ParameterError),

    /// Radius or angle corrections eat more than the requested section length.
    #[error(
        "Infeasible geometry: straight segment {index} would trace {tracing_length:.4} mm"
    )]
    InfeasibleGeometry {
        /// Position of the offending straight segment in the segment sequence.
        index: usize,
        /// The negative length it would trace.
        tracing_length: f64,
    },
}

/// Errors related to geometry parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A required parameter is missing.
    #[error("Missing required parameter: {0}")]
    Missing(String),

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Normalization needs at least one straight segment with a requested length.
    #[error("Cannot rescale edge: no straight segment with a non-zero requested length")]
    NoScalableSegments,
}

impl ParameterError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for layout and tracing operations.
pub type SlotLayoutResult<T> = Result<T, SlotLayoutError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Reject NaN and infinities, and values below zero unless `allow_negative`.
pub(crate) fn check_finite(name: &str, value: f64, allow_negative: bool) -> ParameterResult<()> {
    if !value.is_finite() {
        return Err(ParameterError::invalid(name, format!("must be finite, got {}", value)));
    }
    if !allow_negative && value < 0.0 {
        return Err(ParameterError::invalid(
            name,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

/// Reject values that are not strictly positive.
pub(crate) fn check_positive(name: &str, value: f64) -> ParameterResult<()> {
    check_finite(name, value, false)?;
    if value <= 0.0 {
        return Err(ParameterError::invalid(name, "must be greater than zero"));
    }
    Ok(())
}
