//! # Error Types
//!
//! Error types for shape-descriptor construction. All errors are explicit
//! and carry the offending parameter.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when validation fails
//! - A descriptor either exists with valid parameters or not at all
//! - Errors include context for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while constructing a shape descriptor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A parameter that must be strictly positive was zero or negative.
    #[error("{name} must be strictly positive, got {value}")]
    NonPositiveParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A radius was negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeRadius {
        /// Name of the offending radius
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A parameter was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// An axis or normal vector was too short to normalize.
    #[error("{name} must be a non-zero vector")]
    DegenerateVector {
        /// Name of the offending vector
        name: &'static str,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for shape-descriptor construction.
pub type ShapeResult<T> = Result<T, ShapeError>;

// =============================================================================
// VALIDATION HELPERS
// =============================================================================

/// Rejects NaN and infinite values.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> ShapeResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ShapeError::NonFiniteParameter { name, value })
    }
}

/// Rejects values that are not strictly positive (NaN included).
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> ShapeResult<f64> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NonPositiveParameter { name, value })
    }
}

/// Rejects negative radii (NaN included).
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> ShapeResult<f64> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NegativeRadius { name, value })
    }
}

// =============================================================================
// TESTS
// =============================================================================
