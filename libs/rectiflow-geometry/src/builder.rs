//! # Boundary Layout Builder
//!
//! Composes the four boundary descriptors of the rectifying channel from
//! validated inputs. Pure computation: no I/O, no shared state, a fixed
//! number of arithmetic operations.

use config::constants::CONE_SHIFT_FACTOR;
use glam::DVec3;
use rectiflow_shapes::{
    BoundaryShape, Cylinder, CylindricalTransform, Direction, HollowConicalFrustum, Wall,
};

use crate::cone::ConeSpec;
use crate::dimensions::BoxDimensions;
use crate::error::GeometryResult;

/// Derives the boundary layout of the rectifying channel.
///
/// Produces, in registration order:
/// 1. the channel bore: a capped cylinder along x, centered in the box,
///    solid on the outside ([`Direction::Negative`]);
/// 2. the near end cap: a wall at `+padding` facing `+x`;
/// 3. the far end cap: a wall at `-(length + padding)` facing `-x`;
/// 4. the funnel: a hollow conical frustum opening back toward the channel
///    (axis `-x`), solid shell ([`Direction::Positive`]).
///
/// The order is part of the contract: engines commonly resolve overlapping
/// boundaries last-writer-wins, and the funnel must win over the bore where
/// they meet. Overlap resolution itself is the engine's job.
///
/// The funnel center sits [`CONE_SHIFT_FACTOR`] axial shifts upstream of the
/// box center; the factor is placement tuning, not a derived quantity.
///
/// Deterministic and atomic: identical inputs yield bitwise-identical
/// descriptors, and any invalid input fails the whole call with no partial
/// sequence.
///
/// # Example
///
/// ```rust
/// use rectiflow_geometry::{build_rectification_geometry, BoxDimensions, ConeSpec};
///
/// let shapes = build_rectification_geometry(
///     &BoxDimensions::default(),
///     &ConeSpec::default(),
/// ).unwrap();
/// assert_eq!(shapes.len(), 4);
/// ```
pub fn build_rectification_geometry(
    channel: &BoxDimensions,
    cone: &ConeSpec,
) -> GeometryResult<Vec<BoundaryShape>> {
    let box_size = channel.box_size();

    let bore = Cylinder::new(
        0.5 * box_size,
        DVec3::X,
        channel.diameter() / 2.0,
        channel.length(),
        Direction::Negative,
    )?;

    let near_cap = Wall::new(channel.padding(), DVec3::X)?;
    let far_cap = Wall::new(-(channel.length() + channel.padding()), -DVec3::X)?;

    let outer_radius = cone.outer_radius(channel.diameter())?;
    let shift = cone.axial_shift(outer_radius);
    let funnel_center = DVec3::new(
        0.5 * box_size.x - CONE_SHIFT_FACTOR * shift,
        0.5 * box_size.y,
        0.5 * box_size.z,
    );
    let funnel = HollowConicalFrustum::new(
        CylindricalTransform::new(-DVec3::X, funnel_center)?,
        outer_radius,
        cone.inner_radius(),
        cone.thickness(),
        cone.length(),
        Direction::Positive,
    )?;

    Ok(vec![
        bore.into(),
        near_cap.into(),
        far_cap.into(),
        funnel.into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rectiflow_shapes::ShapeKind;
    use std::f64::consts::FRAC_PI_4;

    fn reference() -> (BoxDimensions, ConeSpec) {
        (
            BoxDimensions::new(100.0, 20.0, 2.0).expect("valid dimensions"),
            ConeSpec::new(4.0, FRAC_PI_4, 2.0, 18.0).expect("valid cone"),
        )
    }

    #[test]
    fn test_descriptor_order_is_fixed() {
        let (channel, cone) = reference();
        let shapes = build_rectification_geometry(&channel, &cone).expect("build succeeds");
        let kinds: Vec<ShapeKind> = shapes.iter().map(BoundaryShape::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ShapeKind::Cylinder,
                ShapeKind::Wall,
                ShapeKind::Wall,
                ShapeKind::HollowConicalFrustum,
            ]
        );
    }

    #[test]
    fn test_bore_matches_reference() {
        let (channel, cone) = reference();
        let shapes = build_rectification_geometry(&channel, &cone).expect("build succeeds");
        let BoundaryShape::Cylinder(bore) = &shapes[0] else {
            panic!("expected cylinder first");
        };
        assert_eq!(bore.center(), DVec3::new(52.0, 12.0, 12.0));
        assert_eq!(bore.axis(), DVec3::X);
        assert_eq!(bore.radius(), 10.0);
        assert_eq!(bore.length(), 100.0);
        assert_eq!(bore.direction(), Direction::Negative);
    }

    #[test]
    fn test_caps_sit_inside_the_box() {
        let (channel, cone) = reference();
        let shapes = build_rectification_geometry(&channel, &cone).expect("build succeeds");
        let BoundaryShape::Wall(near) = &shapes[1] else {
            panic!("expected wall second");
        };
        let BoundaryShape::Wall(far) = &shapes[2] else {
            panic!("expected wall third");
        };
        assert_eq!(near.dist(), 2.0);
        assert_eq!(near.normal(), DVec3::X);
        assert_eq!(far.dist(), -102.0);
        assert_eq!(far.normal(), -DVec3::X);
    }

    #[test]
    fn test_funnel_matches_reference() {
        let (channel, cone) = reference();
        let shapes = build_rectification_geometry(&channel, &cone).expect("build succeeds");
        let BoundaryShape::HollowConicalFrustum(funnel) = &shapes[3] else {
            panic!("expected frustum last");
        };
        assert_relative_eq!(funnel.r1(), 22.627416997969522, epsilon = 1e-9);
        assert_eq!(funnel.r2(), 4.0);
        assert_eq!(funnel.thickness(), 2.0);
        assert_eq!(funnel.length(), 18.0);
        assert_eq!(funnel.direction(), Direction::Positive);
        assert_eq!(funnel.frame().axis(), -DVec3::X);
        // 52 - 1.3 * 4.0 = 46.8
        assert_relative_eq!(funnel.frame().center().x, 46.8, epsilon = 1e-12);
        assert_eq!(funnel.frame().center().y, 12.0);
        assert_eq!(funnel.frame().center().z, 12.0);
    }

    #[test]
    fn test_build_is_idempotent() {
        // Identical inputs must yield bitwise-identical descriptors
        let (channel, cone) = reference();
        let first = build_rectification_geometry(&channel, &cone).expect("build succeeds");
        let second = build_rectification_geometry(&channel, &cone).expect("build succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn test_oversized_cone_fails_atomically() {
        let channel = BoxDimensions::new(100.0, 20.0, 2.0).expect("valid dimensions");
        let cone = ConeSpec::new(25.0, FRAC_PI_4, 2.0, 18.0).expect("valid cone");
        let err = build_rectification_geometry(&channel, &cone).unwrap_err();
        assert_eq!(
            err,
            crate::GeometryError::ConeWiderThanChannel {
                inner_radius: 25.0,
                diameter: 20.0
            }
        );
    }

    #[test]
    fn test_opposite_solid_sides() {
        // Bore keeps fluid inside, funnel shell is solid: the signs differ
        let (channel, cone) = reference();
        let shapes = build_rectification_geometry(&channel, &cone).expect("build succeeds");
        assert_eq!(shapes[0].direction(), Some(Direction::Negative));
        assert_eq!(shapes[3].direction(), Some(Direction::Positive));
    }
}
