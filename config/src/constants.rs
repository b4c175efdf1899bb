//! # Configuration Constants
//!
//! Centralized constants for the rectification pipeline. The channel and
//! cone defaults reproduce the reference rectification configuration; the
//! fluid and system defaults are the values the boundary geometry was tuned
//! against.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Channel**: Reference channel (capped cylinder) dimensions
//! - **Cone**: Reference hollow-cone insert parameters and placement tuning
//! - **Fluid**: Lattice fluid defaults forwarded to the engine
//! - **System**: Simulation-wide scalar defaults forwarded to the engine

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// CHANNEL CONSTANTS (reference configuration)
// =============================================================================

/// Length of the cylindrical channel along its axis, in lattice length units.
pub const DEFAULT_CHANNEL_LENGTH: f64 = 100.0;

/// Diameter of the cylindrical channel, in lattice length units.
pub const DEFAULT_CHANNEL_DIAMETER: f64 = 20.0;

/// Padding between the channel boundaries and the edges of the simulation
/// box, in lattice length units.
///
/// The box is padded so that every registered boundary sits strictly inside
/// the periodic domain; a boundary touching the box edge would interact with
/// its own periodic image.
pub const DEFAULT_BOX_PADDING: f64 = 2.0;

// =============================================================================
// CONE CONSTANTS (reference configuration)
// =============================================================================

/// Radius of the narrow opening of the hollow cone, in lattice length units.
pub const DEFAULT_CONE_INNER_RADIUS: f64 = 4.0;

/// Opening half-angle of the hollow cone, in radians.
///
/// Must stay strictly inside `(0, PI/2)`: the wide-end radius is derived by
/// dividing by `sin(angle)`.
pub const DEFAULT_CONE_OPENING_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Wall thickness of the hollow cone, in lattice length units.
pub const DEFAULT_CONE_THICKNESS: f64 = 2.0;

/// Axial length of the hollow cone, in lattice length units.
pub const DEFAULT_CONE_LENGTH: f64 = 18.0;

/// Multiplier applied to the cone's axial shift when placing it inside the
/// channel.
///
/// Empirically chosen offset ensuring the cone's narrow end sits inside the
/// cylindrical bore without intersecting the end wall. This is a tunable
/// constant, not a derived physical quantity; it is not computed from the
/// opening angle.
///
/// # Example
///
/// ```rust
/// use config::constants::CONE_SHIFT_FACTOR;
///
/// let axial_shift = 4.0;
/// let offset_from_box_center = CONE_SHIFT_FACTOR * axial_shift;
/// assert!((offset_from_box_center - 5.2).abs() < 1e-12);
/// ```
pub const CONE_SHIFT_FACTOR: f64 = 1.3;

// =============================================================================
// FLUID CONSTANTS (engine pass-through defaults)
// =============================================================================

/// Lattice grid spacing of the fluid field, in lattice length units.
pub const DEFAULT_GRID_SPACING: f64 = 0.5;

/// Fluid density, in lattice mass per volume units.
pub const DEFAULT_FLUID_DENSITY: f64 = 1.0;

/// Kinematic viscosity of the fluid, in lattice units.
pub const DEFAULT_KINEMATIC_VISCOSITY: f64 = 1.0;

/// Integration time step, shared between the fluid field and the
/// particle system, in lattice time units.
pub const DEFAULT_TIME_STEP: f64 = 0.01;

// =============================================================================
// SYSTEM CONSTANTS (engine pass-through defaults)
// =============================================================================

/// Cell-system skin used by the engine's neighbor lists, in lattice length
/// units.
pub const DEFAULT_CELL_SKIN: f64 = 0.1;

/// Minimum global interaction cutoff, in lattice length units.
pub const DEFAULT_MIN_GLOBAL_CUT: f64 = 0.5;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Default directory for boundary-visualization output, created if absent.
pub const DEFAULT_OUTPUT_DIR: &str = "RESULTS_RECTIFICATION";

/// File name of the boundary-visualization dump inside the output directory.
pub const BOUNDARY_VTK_FILENAME: &str = "boundary.vtk";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a floating-point value is approximately zero.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
