//! # Boundary Descriptor
//!
//! The tagged variant handed, read-only, to the engine. Each variant carries
//! one fully validated boundary primitive; the engine converts it into a
//! signed-distance test on its grid.

use serde::{Deserialize, Serialize};

use crate::cylinder::Cylinder;
use crate::direction::Direction;
use crate::frustum::HollowConicalFrustum;
use crate::wall::Wall;

/// A boundary shape ready for engine registration.
///
/// Descriptors are immutable value objects; registration order matters only
/// in that later-registered boundaries may take precedence in the engine's
/// overlap resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoundaryShape {
    /// A capped cylindrical shell.
    Cylinder(Cylinder),
    /// An infinite planar wall.
    Wall(Wall),
    /// A hollow conical frustum.
    HollowConicalFrustum(HollowConicalFrustum),
}

impl BoundaryShape {
    /// Returns the kind tag of this descriptor.
    pub fn kind(&self) -> ShapeKind {
        match self {
            BoundaryShape::Cylinder(_) => ShapeKind::Cylinder,
            BoundaryShape::Wall(_) => ShapeKind::Wall,
            BoundaryShape::HollowConicalFrustum(_) => ShapeKind::HollowConicalFrustum,
        }
    }

    /// Returns the solid-side sign, if this shape carries one.
    ///
    /// Walls encode their orientation in the normal and have no separate
    /// direction sign.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            BoundaryShape::Cylinder(c) => Some(c.direction()),
            BoundaryShape::Wall(_) => None,
            BoundaryShape::HollowConicalFrustum(f) => Some(f.direction()),
        }
    }

    /// Returns true if this shape is axially symmetric.
    pub fn is_axisymmetric(&self) -> bool {
        matches!(
            self,
            BoundaryShape::Cylinder(_) | BoundaryShape::HollowConicalFrustum(_)
        )
    }
}

impl From<Cylinder> for BoundaryShape {
    fn from(shape: Cylinder) -> Self {
        BoundaryShape::Cylinder(shape)
    }
}

impl From<Wall> for BoundaryShape {
    fn from(shape: Wall) -> Self {
        BoundaryShape::Wall(shape)
    }
}

impl From<HollowConicalFrustum> for BoundaryShape {
    fn from(shape: HollowConicalFrustum) -> Self {
        BoundaryShape::HollowConicalFrustum(shape)
    }
}

/// Kind tag of a boundary shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Capped cylindrical shell
    Cylinder,
    /// Infinite planar wall
    Wall,
    /// Hollow conical frustum
    HollowConicalFrustum,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::CylindricalTransform;
    use glam::DVec3;

    #[test]
    fn test_kind_tags() {
        let wall: BoundaryShape = Wall::new(2.0, DVec3::X).expect("wall succeeds").into();
        assert_eq!(wall.kind(), ShapeKind::Wall);
        assert!(!wall.is_axisymmetric());
    }

    #[test]
    fn test_direction_accessor() {
        let cyl: BoundaryShape =
            Cylinder::new(DVec3::ZERO, DVec3::X, 1.0, 2.0, Direction::Negative)
                .expect("cylinder succeeds")
                .into();
        assert_eq!(cyl.direction(), Some(Direction::Negative));
        assert!(cyl.is_axisymmetric());

        let wall: BoundaryShape = Wall::new(0.0, DVec3::Y).expect("wall succeeds").into();
        assert_eq!(wall.direction(), None);
    }

    #[test]
    fn test_frustum_roundtrips_through_enum() {
        let frame =
            CylindricalTransform::new(-DVec3::X, DVec3::ZERO).expect("valid frame");
        let cone = HollowConicalFrustum::new(frame, 10.0, 4.0, 2.0, 18.0, Direction::Positive)
            .expect("frustum succeeds");
        let shape = BoundaryShape::from(cone);
        match shape {
            BoundaryShape::HollowConicalFrustum(f) => assert_eq!(f.r1(), 10.0),
            other => panic!("unexpected variant: {:?}", other.kind()),
        }
    }
}
