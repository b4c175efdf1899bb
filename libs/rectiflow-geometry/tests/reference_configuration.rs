//! End-to-end check of the reference rectification layout against the
//! published configuration numbers.

use approx::assert_relative_eq;
use glam::DVec3;
use rectiflow_geometry::{build_rectification_geometry, BoxDimensions, ConeSpec};
use rectiflow_shapes::{BoundaryShape, Direction};
use std::f64::consts::FRAC_PI_4;

#[test]
fn reference_configuration_reproduces_published_numbers() {
    let channel = BoxDimensions::new(100.0, 20.0, 2.0).expect("valid dimensions");
    let cone = ConeSpec::new(4.0, FRAC_PI_4, 2.0, 18.0).expect("valid cone");

    assert_eq!(channel.box_size(), DVec3::new(104.0, 24.0, 24.0));

    let orad = cone.outer_radius(channel.diameter()).expect("cone fits");
    assert_relative_eq!(orad, 22.627416997969522, epsilon = 1e-9);
    assert_relative_eq!(cone.axial_shift(orad), 4.0, epsilon = 1e-12);

    let shapes = build_rectification_geometry(&channel, &cone).expect("build succeeds");
    assert_eq!(shapes.len(), 4);

    let BoundaryShape::HollowConicalFrustum(funnel) = &shapes[3] else {
        panic!("expected the funnel to be registered last");
    };
    assert_relative_eq!(funnel.frame().center().x, 46.8, epsilon = 1e-12);
    assert_eq!(funnel.frame().center().y, 12.0);
    assert_eq!(funnel.frame().center().z, 12.0);
}

#[test]
fn defaults_and_explicit_reference_inputs_agree() {
    let explicit = build_rectification_geometry(
        &BoxDimensions::new(100.0, 20.0, 2.0).expect("valid dimensions"),
        &ConeSpec::new(4.0, FRAC_PI_4, 2.0, 18.0).expect("valid cone"),
    )
    .expect("build succeeds");
    let defaulted =
        build_rectification_geometry(&BoxDimensions::default(), &ConeSpec::default())
            .expect("build succeeds");
    assert_eq!(explicit, defaulted);
}

#[test]
fn invalid_inputs_produce_no_descriptors() {
    let channel = BoxDimensions::new(100.0, 20.0, 2.0).expect("valid dimensions");

    // Cone wider than the channel
    let cone = ConeSpec::new(25.0, FRAC_PI_4, 2.0, 18.0).expect("valid cone");
    assert!(build_rectification_geometry(&channel, &cone).is_err());

    // Degenerate opening angles never reach the builder
    assert!(ConeSpec::new(4.0, 0.0, 2.0, 18.0).is_err());
    assert!(ConeSpec::new(4.0, std::f64::consts::FRAC_PI_2, 2.0, 18.0).is_err());

    // The two solid-side conventions stay opposite
    let shapes = build_rectification_geometry(&channel, &ConeSpec::default())
        .expect("build succeeds");
    assert_eq!(shapes[0].direction(), Some(Direction::Negative));
    assert_eq!(shapes[3].direction(), Some(Direction::Positive));
}
