//! # Cylinder Boundary
//!
//! A capped cylindrical shell, the outer wall of the rectifying channel.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{ensure_positive, ShapeResult};
use crate::transform::CylindricalTransform;

/// A capped cylinder boundary.
///
/// With [`Direction::Negative`] the solid region lies outside the shell, so
/// the fluid is confined to the bore. The caps are part of the shape; end
/// walls are usually registered anyway to guard the periodic box edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    frame: CylindricalTransform,
    radius: f64,
    length: f64,
    direction: Direction,
}

impl Cylinder {
    /// Creates a capped cylinder.
    ///
    /// # Arguments
    /// * `center` - Center of the cylinder in box coordinates.
    /// * `axis` - Direction of the symmetry axis. Normalized internally.
    /// * `radius` - Radius of the shell. Strictly positive.
    /// * `length` - Extent along the axis. Strictly positive.
    /// * `direction` - Which side of the shell is solid.
    ///
    /// # Errors
    /// Any non-positive or non-finite scalar, or a degenerate axis, fails
    /// construction; no descriptor is produced.
    pub fn new(
        center: DVec3,
        axis: DVec3,
        radius: f64,
        length: f64,
        direction: Direction,
    ) -> ShapeResult<Self> {
        let frame = CylindricalTransform::new(axis, center)?;
        let radius = ensure_positive("radius", radius)?;
        let length = ensure_positive("length", length)?;
        Ok(Self {
            frame,
            radius,
            length,
            direction,
        })
    }

    /// Center point in box coordinates.
    pub fn center(&self) -> DVec3 {
        self.frame.center()
    }

    /// Unit symmetry axis.
    pub fn axis(&self) -> DVec3 {
        self.frame.axis()
    }

    /// Shell radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Extent along the axis.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Which side of the shell is solid.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
