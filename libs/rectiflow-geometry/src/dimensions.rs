//! # Box Dimensions
//!
//! Physical dimensions of the channel and the padded simulation box around
//! it.

use glam::DVec3;

use crate::error::{ensure_dimension, GeometryResult};

/// Channel dimensions plus the padding separating the boundaries from the
/// box edges.
///
/// The derived box size is the authoritative simulation domain; all shape
/// centers are expressed relative to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    length: f64,
    diameter: f64,
    padding: f64,
}

impl BoxDimensions {
    /// Creates channel dimensions.
    ///
    /// # Arguments
    /// * `length` - Channel extent along the x axis. Strictly positive.
    /// * `diameter` - Channel bore diameter. Strictly positive.
    /// * `padding` - Gap between the boundaries and the box edges. Strictly
    ///   positive, so the end caps sit strictly inside the box walls.
    ///
    /// # Errors
    /// [`crate::GeometryError::InvalidDimension`] on any non-positive or
    /// non-finite value.
    pub fn new(length: f64, diameter: f64, padding: f64) -> GeometryResult<Self> {
        Ok(Self {
            length: ensure_dimension("length", length)?,
            diameter: ensure_dimension("diameter", diameter)?,
            padding: ensure_dimension("padding", padding)?,
        })
    }

    /// Channel extent along the x axis.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Channel bore diameter.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Gap between the boundaries and the box edges.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Size of the padded simulation box.
    ///
    /// `(length + 2·padding, diameter + 2·padding, diameter + 2·padding)` —
    /// the channel runs along x, the cross-section fills y and z.
    pub fn box_size(&self) -> DVec3 {
        DVec3::new(
            self.length + 2.0 * self.padding,
            self.diameter + 2.0 * self.padding,
            self.diameter + 2.0 * self.padding,
        )
    }
}

impl Default for BoxDimensions {
    /// The reference channel configuration.
    fn default() -> Self {
        Self {
            length: config::constants::DEFAULT_CHANNEL_LENGTH,
            diameter: config::constants::DEFAULT_CHANNEL_DIAMETER,
            padding: config::constants::DEFAULT_BOX_PADDING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_box_size() {
        let dims = BoxDimensions::new(100.0, 20.0, 2.0).expect("valid dimensions");
        assert_eq!(dims.box_size(), DVec3::new(104.0, 24.0, 24.0));
    }

    #[test]
    fn test_zero_padding_rejected() {
        // A cap at dist = 0 would coincide with the box wall
        let err = BoxDimensions::new(100.0, 20.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidDimension {
                name: "padding",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_negative_length_rejected() {
        assert!(BoxDimensions::new(-100.0, 20.0, 2.0).is_err());
    }

    #[test]
    fn test_default_matches_reference() {
        let dims = BoxDimensions::default();
        assert_eq!(dims.length(), 100.0);
        assert_eq!(dims.diameter(), 20.0);
        assert_eq!(dims.padding(), 2.0);
    }
}
