//! # Setup Errors
//!
//! Error types for the engine-facing setup flow.

use rectiflow_geometry::GeometryError;
use thiserror::Error;

use crate::engine::EngineError;

/// Errors that can occur during rectification setup.
///
/// Setup is atomic from the caller's view: the first failure aborts the
/// whole flow, and the engine is left to discard whatever partial state it
/// holds.
#[derive(Debug, Error)]
pub enum SetupError {
    /// An engine parameter was outside its domain.
    #[error("{name} must be strictly positive and finite, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Boundary-layout derivation failed.
    #[error("geometry derivation failed: {0}")]
    Geometry(#[from] GeometryError),

    /// The engine refused a setup call.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// The output directory could not be created.
    #[error("output directory error: {0}")]
    Io(#[from] std::io::Error),
}
