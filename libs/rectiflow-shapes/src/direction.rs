//! # Boundary Direction
//!
//! Sign convention selecting which side of a boundary surface is solid.

use serde::{Deserialize, Serialize};

/// Which side of a shape's surface the engine treats as solid.
///
/// The engine multiplies its signed distance to the surface by this sign
/// before classifying a cell. The convention is engine-defined and must be
/// preserved exactly for each primitive: flipping a sign silently produces
/// an unbounded or empty fluid domain rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Sign +1: the region on the positive-distance side is solid.
    Positive,
    /// Sign −1: the region on the negative-distance side is solid.
    Negative,
}

impl Direction {
    /// The numeric sign forwarded to the engine.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }

    /// Returns the opposite sign.
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
}
