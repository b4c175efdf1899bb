//! # Rectiflow Geometry
//!
//! Derives the boundary layout of a rectifying channel: a capped cylinder,
//! two end walls guarding the periodic box edges, and a hollow conical
//! frustum whose asymmetry rectifies the motion of self-propelled particles.
//!
//! ## Architecture
//!
//! ```text
//! BoxDimensions + ConeSpec → rectiflow-geometry → [BoundaryShape; 4] → engine
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rectiflow_geometry::{build_rectification_geometry, BoxDimensions, ConeSpec};
//!
//! let channel = BoxDimensions::new(100.0, 20.0, 2.0).unwrap();
//! let cone = ConeSpec::new(4.0, std::f64::consts::FRAC_PI_4, 2.0, 18.0).unwrap();
//! let shapes = build_rectification_geometry(&channel, &cone).unwrap();
//! assert_eq!(shapes.len(), 4);
//! ```

pub mod builder;
pub mod cone;
pub mod dimensions;
pub mod error;

// Re-export public API
pub use builder::build_rectification_geometry;
pub use cone::ConeSpec;
pub use dimensions::BoxDimensions;
pub use error::{GeometryError, GeometryResult};
