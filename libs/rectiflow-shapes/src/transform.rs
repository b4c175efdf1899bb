//! # Cylindrical Transform
//!
//! The local coordinate frame of an axially symmetric shape: a unit axis and
//! a center point.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{ShapeError, ShapeResult};

/// Minimum squared length for a direction vector to be normalizable.
const MIN_AXIS_LENGTH_SQUARED: f64 = 1e-24;

/// Local frame of an axially symmetric boundary shape.
///
/// The axis is normalized at construction; a zero or non-finite axis is
/// rejected so every stored frame is usable as-is by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylindricalTransform {
    axis: DVec3,
    center: DVec3,
}

impl CylindricalTransform {
    /// Creates a frame from an axis direction and a center point.
    ///
    /// # Arguments
    /// * `axis` - Direction of the symmetry axis. Normalized internally.
    /// * `center` - Center of the shape in box coordinates.
    ///
    /// # Errors
    /// * [`ShapeError::DegenerateVector`] if `axis` is (near) zero.
    /// * [`ShapeError::NonFiniteParameter`] if any component is NaN/infinite.
    pub fn new(axis: DVec3, center: DVec3) -> ShapeResult<Self> {
        validate_vector("axis", axis)?;
        validate_vector("center", center)?;
        if axis.length_squared() < MIN_AXIS_LENGTH_SQUARED {
            return Err(ShapeError::DegenerateVector { name: "axis" });
        }
        Ok(Self {
            axis: axis.normalize(),
            center,
        })
    }

    /// Unit symmetry axis.
    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    /// Center point in box coordinates.
    pub fn center(&self) -> DVec3 {
        self.center
    }
}

/// Rejects vectors with NaN or infinite components.
pub(crate) fn validate_vector(name: &'static str, v: DVec3) -> ShapeResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonFiniteParameter {
            name,
            value: f64::NAN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_is_normalized() {
        let t = CylindricalTransform::new(DVec3::new(0.0, 0.0, 3.0), DVec3::ZERO)
            .expect("valid frame");
        assert_relative_eq!(t.axis().length(), 1.0);
        assert_eq!(t.axis(), DVec3::Z);
    }

    #[test]
    fn test_unit_axis_is_kept_exact() {
        // Already-unit axes must pass through bitwise unchanged so repeated
        // builds stay bitwise identical
        let t = CylindricalTransform::new(-DVec3::X, DVec3::ZERO).expect("valid frame");
        assert_eq!(t.axis(), -DVec3::X);
    }

    #[test]
    fn test_zero_axis_rejected() {
        let err = CylindricalTransform::new(DVec3::ZERO, DVec3::ZERO).unwrap_err();
        assert_eq!(err, ShapeError::DegenerateVector { name: "axis" });
    }

    #[test]
    fn test_non_finite_center_rejected() {
        let center = DVec3::new(f64::NAN, 0.0, 0.0);
        assert!(CylindricalTransform::new(DVec3::X, center).is_err());
    }
}
