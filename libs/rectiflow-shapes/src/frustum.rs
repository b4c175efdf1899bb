//! # Hollow Conical Frustum Boundary
//!
//! A cone-shell segment of finite wall thickness, the funnel insert of the
//! rectifying channel.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{ensure_non_negative, ensure_positive, ShapeResult};
use crate::transform::CylindricalTransform;

/// A hollow conical frustum.
///
/// The shell runs from radius `r1` to radius `r2` over `length` along the
/// frame's axis, with walls of the given thickness. `r1` sits on the
/// negative-axis side of the center, `r2` on the positive-axis side, so the
/// frame's axis orientation decides which way the funnel opens. Radii may
/// differ in either order; `r2 = 0` degenerates to a closed funnel tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HollowConicalFrustum {
    frame: CylindricalTransform,
    r1: f64,
    r2: f64,
    thickness: f64,
    length: f64,
    direction: Direction,
}

impl HollowConicalFrustum {
    /// Creates a hollow conical frustum.
    ///
    /// # Arguments
    /// * `frame` - Local frame (unit axis + center) of the frustum.
    /// * `r1` - Radius of the wide opening. Strictly positive.
    /// * `r2` - Radius of the narrow opening. Non-negative.
    /// * `thickness` - Wall thickness of the shell. Strictly positive.
    /// * `length` - Axial extent of the shell. Strictly positive.
    /// * `direction` - Which side of the shell is solid.
    ///
    /// # Errors
    /// Any parameter outside its domain fails construction; no descriptor is
    /// produced.
    pub fn new(
        frame: CylindricalTransform,
        r1: f64,
        r2: f64,
        thickness: f64,
        length: f64,
        direction: Direction,
    ) -> ShapeResult<Self> {
        let r1 = ensure_positive("r1", r1)?;
        let r2 = ensure_non_negative("r2", r2)?;
        let thickness = ensure_positive("thickness", thickness)?;
        let length = ensure_positive("length", length)?;
        Ok(Self {
            frame,
            r1,
            r2,
            thickness,
            length,
            direction,
        })
    }

    /// Local frame (unit axis + center).
    pub fn frame(&self) -> CylindricalTransform {
        self.frame
    }

    /// Radius of the wide opening.
    pub fn r1(&self) -> f64 {
        self.r1
    }

    /// Radius of the narrow opening.
    pub fn r2(&self) -> f64 {
        self.r2
    }

    /// Wall thickness of the shell.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Axial extent of the shell.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Which side of the shell is solid.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
