//! # Rectiflow Shapes
//!
//! Validated boundary-shape descriptors for lattice fluid setups.
//! A descriptor names a boundary primitive and carries the fully resolved
//! geometric parameters the engine needs to voxelize it; it performs no
//! voxelization itself.
//!
//! ## Architecture
//!
//! ```text
//! rectiflow-geometry (GeometryBuilder)
//!       ↓
//! BoundaryShape descriptors (this crate)
//!       ↓
//! External engine (signed-distance voxelization)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use rectiflow_shapes::{Cylinder, Direction};
//!
//! let bore = Cylinder::new(
//!     DVec3::new(52.0, 12.0, 12.0),
//!     DVec3::X,
//!     10.0,
//!     100.0,
//!     Direction::Negative,
//! ).unwrap();
//! assert_eq!(bore.radius(), 10.0);
//! ```

pub mod cylinder;
pub mod descriptor;
pub mod direction;
pub mod error;
pub mod frustum;
pub mod transform;
pub mod wall;

// Re-export public API
pub use cylinder::Cylinder;
pub use descriptor::{BoundaryShape, ShapeKind};
pub use direction::Direction;
pub use error::{ShapeError, ShapeResult};
pub use frustum::HollowConicalFrustum;
pub use transform::CylindricalTransform;
pub use wall::Wall;
