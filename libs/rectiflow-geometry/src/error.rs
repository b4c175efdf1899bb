//! # Geometry Errors
//!
//! Error types for boundary-layout derivation.

use rectiflow_shapes::ShapeError;
use thiserror::Error;

/// Errors that can occur while deriving the boundary layout.
///
/// Any invalid input fails the whole derivation atomically; no partial
/// descriptor sequence is ever produced.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometryError {
    /// The cone's narrow opening does not fit the channel cross-section.
    ///
    /// The wide-end radius is `(diameter - inner_radius) / sin(angle)`; with
    /// `inner_radius >= diameter` it would be non-positive.
    #[error(
        "cone inner radius {inner_radius} must be smaller than the channel diameter {diameter}"
    )]
    ConeWiderThanChannel {
        /// Narrow-opening radius of the cone
        inner_radius: f64,
        /// Channel diameter
        diameter: f64,
    },

    /// The cone opening angle left the open interval `(0, PI/2)`.
    ///
    /// At 0 the wide-end radius diverges; at or beyond `PI/2` the funnel
    /// no longer narrows toward the channel axis.
    #[error("cone opening angle {angle} rad must lie strictly between 0 and PI/2")]
    AngleOutOfRange {
        /// The rejected angle, in radians
        angle: f64,
    },

    /// A scalar dimension that must be strictly positive was not.
    #[error("{name} must be strictly positive and finite, got {value}")]
    InvalidDimension {
        /// Name of the offending dimension
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A descriptor rejected its derived parameters.
    #[error("shape construction failed: {0}")]
    Shape(#[from] ShapeError),
}

/// Result type alias for boundary-layout derivation.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Rejects scalar dimensions that are not strictly positive and finite.
pub(crate) fn ensure_dimension(name: &'static str, value: f64) -> GeometryResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}

// =============================================================================
// TESTS
// =============================================================================
