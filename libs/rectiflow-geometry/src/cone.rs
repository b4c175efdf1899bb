//! # Cone Specification
//!
//! Input parameters of the hollow-cone insert and the derivation of its
//! placement quantities.

use std::f64::consts::FRAC_PI_2;

use crate::error::{ensure_dimension, GeometryError, GeometryResult};

/// Input parameters of the hollow-cone insert.
///
/// The wide-end radius is not an input; it is derived from the channel
/// diameter so the funnel mouth meets the channel wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeSpec {
    inner_radius: f64,
    angle: f64,
    thickness: f64,
    length: f64,
}

impl ConeSpec {
    /// Creates a cone specification.
    ///
    /// # Arguments
    /// * `inner_radius` - Radius of the narrow opening. Non-negative; zero
    ///   closes the funnel to a tip.
    /// * `angle` - Opening half-angle in radians, strictly inside
    ///   `(0, PI/2)`.
    /// * `thickness` - Wall thickness of the shell. Strictly positive.
    /// * `length` - Axial extent of the shell. Strictly positive.
    ///
    /// # Errors
    /// [`GeometryError::AngleOutOfRange`] for an angle at or outside the
    /// open interval; [`GeometryError::InvalidDimension`] for the scalars.
    pub fn new(inner_radius: f64, angle: f64, thickness: f64, length: f64) -> GeometryResult<Self> {
        if !inner_radius.is_finite() || inner_radius < 0.0 {
            return Err(GeometryError::InvalidDimension {
                name: "inner_radius",
                value: inner_radius,
            });
        }
        if !angle.is_finite() || angle <= 0.0 || angle >= FRAC_PI_2 {
            return Err(GeometryError::AngleOutOfRange { angle });
        }
        Ok(Self {
            inner_radius,
            angle,
            thickness: ensure_dimension("thickness", thickness)?,
            length: ensure_dimension("length", length)?,
        })
    }

    /// Radius of the narrow opening.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Opening half-angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Wall thickness of the shell.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Axial extent of the shell.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Radius of the wide opening for a given channel diameter.
    ///
    /// `(diameter - inner_radius) / sin(angle)`: the funnel mouth flares
    /// until it meets the channel wall. The channel must be wider than the
    /// narrow opening, otherwise the result would be non-positive.
    ///
    /// # Errors
    /// [`GeometryError::ConeWiderThanChannel`] if
    /// `diameter <= inner_radius`.
    pub fn outer_radius(&self, diameter: f64) -> GeometryResult<f64> {
        if diameter <= self.inner_radius {
            return Err(GeometryError::ConeWiderThanChannel {
                inner_radius: self.inner_radius,
                diameter,
            });
        }
        Ok((diameter - self.inner_radius) / self.angle.sin())
    }

    /// Axial shift of the cone center for a given wide-end radius.
    ///
    /// `0.25 · outer_radius · cos(angle)` — a quarter of the wide end's
    /// axial projection. Monotone in `outer_radius` at fixed angle.
    pub fn axial_shift(&self, outer_radius: f64) -> f64 {
        0.25 * outer_radius * self.angle.cos()
    }
}

impl Default for ConeSpec {
    /// The reference cone configuration.
    fn default() -> Self {
        Self {
            inner_radius: config::constants::DEFAULT_CONE_INNER_RADIUS,
            angle: config::constants::DEFAULT_CONE_OPENING_ANGLE,
            thickness: config::constants::DEFAULT_CONE_THICKNESS,
            length: config::constants::DEFAULT_CONE_LENGTH,
        }
    }
}
