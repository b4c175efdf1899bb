//! # Wall Boundary
//!
//! An infinite plane given by its outward normal and signed distance from
//! the box origin.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ShapeError, ShapeResult};
use crate::transform::validate_vector;

/// Minimum squared length for a normal vector to be normalizable.
const MIN_NORMAL_LENGTH_SQUARED: f64 = 1e-24;

/// An infinite planar wall.
///
/// The solid half-space is the one the normal points away from; fluid is
/// kept on the normal side. The distance is signed along the normal, so a
/// cap at the far end of a channel of length `l` padded by `p` is written
/// `Wall::new(-(l + p), -DVec3::X)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    dist: f64,
    normal: DVec3,
}

impl Wall {
    /// Creates a wall from a signed distance and an outward normal.
    ///
    /// # Arguments
    /// * `dist` - Signed distance of the plane from the origin, measured
    ///   along the normal. Finite, any sign.
    /// * `normal` - Outward normal. Normalized internally.
    ///
    /// # Errors
    /// * [`ShapeError::DegenerateVector`] if `normal` is (near) zero.
    /// * [`ShapeError::NonFiniteParameter`] if `dist` is NaN/infinite.
    pub fn new(dist: f64, normal: DVec3) -> ShapeResult<Self> {
        let dist = ensure_finite("dist", dist)?;
        validate_vector("normal", normal)?;
        if normal.length_squared() < MIN_NORMAL_LENGTH_SQUARED {
            return Err(ShapeError::DegenerateVector { name: "normal" });
        }
        Ok(Self {
            dist,
            normal: normal.normalize(),
        })
    }

    /// Signed distance of the plane from the origin.
    pub fn dist(&self) -> f64 {
        self.dist
    }

    /// Unit outward normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_wall() {
        let wall = Wall::new(2.0, DVec3::X).expect("wall succeeds");
        assert_eq!(wall.dist(), 2.0);
        assert_eq!(wall.normal(), DVec3::X);
    }

    #[test]
    fn test_negative_distance_is_legal() {
        // Far cap of a length-100 channel with padding 2
        let wall = Wall::new(-102.0, -DVec3::X).expect("wall succeeds");
        assert_eq!(wall.dist(), -102.0);
        assert_eq!(wall.normal(), -DVec3::X);
    }

    #[test]
    fn test_normal_is_normalized() {
        let wall = Wall::new(0.0, DVec3::new(0.0, 2.0, 0.0)).expect("wall succeeds");
        assert_eq!(wall.normal(), DVec3::Y);
    }

    #[test]
    fn test_zero_normal_rejected() {
        let err = Wall::new(1.0, DVec3::ZERO).unwrap_err();
        assert_eq!(err, ShapeError::DegenerateVector { name: "normal" });
    }

    #[test]
    fn test_non_finite_dist_rejected() {
        assert!(Wall::new(f64::NAN, DVec3::X).is_err());
        assert!(Wall::new(f64::INFINITY, DVec3::X).is_err());
    }
}
