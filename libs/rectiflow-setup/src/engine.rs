//! # Engine Interface
//!
//! The seam to the external simulation engine. The engine owns the lattice
//! fluid, the boundary voxelization, and the visualization file format;
//! this crate only drives it.

use std::path::Path;

use glam::DVec3;
use rectiflow_shapes::BoundaryShape;
use thiserror::Error;

use crate::params::{FluidParams, SystemParams};

/// External lattice fluid engine.
///
/// Boundaries are registered one at a time, in order; an engine resolving
/// overlapping boundaries is expected to let later registrations win. A
/// registration the engine cannot voxelize is a fatal setup error, not a
/// recoverable one: a malformed simulation geometry cannot safely proceed.
pub trait LatticeBoltzmannEngine {
    /// Instantiates the lattice fluid over the given box.
    fn init_fluid(
        &mut self,
        box_size: DVec3,
        system: &SystemParams,
        fluid: &FluidParams,
    ) -> EngineResult<()>;

    /// Registers one boundary shape for voxelization.
    fn add_boundary(&mut self, shape: BoundaryShape) -> EngineResult<()>;

    /// Serializes the current boundary voxelization to a visualization file.
    ///
    /// The format is engine-owned; the caller only supplies the path.
    fn write_boundary_visualization(&mut self, path: &Path) -> EngineResult<()>;
}

/// Errors surfaced by the engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// The engine could not instantiate the fluid field.
    #[error("fluid initialization failed: {reason}")]
    FluidInitFailed {
        /// Engine-supplied diagnostic
        reason: String,
    },

    /// The engine rejected a boundary it cannot voxelize.
    #[error("engine rejected boundary: {reason}")]
    BoundaryRejected {
        /// Engine-supplied diagnostic
        reason: String,
    },

    /// The boundary-visualization dump failed.
    #[error("visualization dump failed: {reason}")]
    VisualizationFailed {
        /// Engine-supplied diagnostic
        reason: String,
    },
}

/// Result type alias for engine calls.
pub type EngineResult<T> = Result<T, EngineError>;
