//! # Config Crate
//!
//! Centralized configuration constants for the rectification pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, CONE_SHIFT_FACTOR, DEFAULT_CHANNEL_DIAMETER};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // The cone placement multiplier is empirical tuning, not a derived value
//! assert_eq!(CONE_SHIFT_FACTOR, 1.3);
//! assert!(DEFAULT_CHANNEL_DIAMETER > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Reference Configuration**: Defaults reproduce the published
//!   rectification channel setup
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
