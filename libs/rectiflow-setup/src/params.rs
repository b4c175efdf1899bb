//! # Engine Parameters
//!
//! Scalar parameters forwarded to the engine, validated before they cross
//! the seam.

use crate::error::SetupError;

/// Lattice fluid parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidParams {
    grid_spacing: f64,
    density: f64,
    viscosity: f64,
    time_step: f64,
}

impl FluidParams {
    /// Creates fluid parameters.
    ///
    /// # Arguments
    /// * `grid_spacing` - Lattice grid spacing. Strictly positive.
    /// * `density` - Fluid density. Strictly positive.
    /// * `viscosity` - Kinematic viscosity. Strictly positive.
    /// * `time_step` - Fluid integration time step, usually shared with the
    ///   particle system. Strictly positive.
    ///
    /// # Errors
    /// [`SetupError::InvalidParameter`] on any non-positive or non-finite
    /// value.
    pub fn new(
        grid_spacing: f64,
        density: f64,
        viscosity: f64,
        time_step: f64,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            grid_spacing: ensure_param("grid_spacing", grid_spacing)?,
            density: ensure_param("density", density)?,
            viscosity: ensure_param("viscosity", viscosity)?,
            time_step: ensure_param("time_step", time_step)?,
        })
    }

    /// Lattice grid spacing.
    pub fn grid_spacing(&self) -> f64 {
        self.grid_spacing
    }

    /// Fluid density.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Kinematic viscosity.
    pub fn viscosity(&self) -> f64 {
        self.viscosity
    }

    /// Fluid integration time step.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }
}

impl Default for FluidParams {
    /// The reference fluid configuration.
    fn default() -> Self {
        Self {
            grid_spacing: config::constants::DEFAULT_GRID_SPACING,
            density: config::constants::DEFAULT_FLUID_DENSITY,
            viscosity: config::constants::DEFAULT_KINEMATIC_VISCOSITY,
            time_step: config::constants::DEFAULT_TIME_STEP,
        }
    }
}

/// Simulation-wide scalar parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParams {
    time_step: f64,
    cell_skin: f64,
    min_global_cut: f64,
}

impl SystemParams {
    /// Creates system parameters.
    ///
    /// # Errors
    /// [`SetupError::InvalidParameter`] on any non-positive or non-finite
    /// value.
    pub fn new(time_step: f64, cell_skin: f64, min_global_cut: f64) -> Result<Self, SetupError> {
        Ok(Self {
            time_step: ensure_param("time_step", time_step)?,
            cell_skin: ensure_param("cell_skin", cell_skin)?,
            min_global_cut: ensure_param("min_global_cut", min_global_cut)?,
        })
    }

    /// Integration time step.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Cell-system skin for neighbor lists.
    pub fn cell_skin(&self) -> f64 {
        self.cell_skin
    }

    /// Minimum global interaction cutoff.
    pub fn min_global_cut(&self) -> f64 {
        self.min_global_cut
    }
}

impl Default for SystemParams {
    /// The reference system configuration.
    fn default() -> Self {
        Self {
            time_step: config::constants::DEFAULT_TIME_STEP,
            cell_skin: config::constants::DEFAULT_CELL_SKIN,
            min_global_cut: config::constants::DEFAULT_MIN_GLOBAL_CUT,
        }
    }
}

fn ensure_param(name: &'static str, value: f64) -> Result<f64, SetupError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SetupError::InvalidParameter { name, value })
    }
}
