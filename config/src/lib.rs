//! # Config Crate
//!
//! Centralized configuration constants for the parametric shape kernel.
//! All tolerances, clamp ranges and parameter limits are defined here so the
//! generators never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_SIZE, STAIRS_MAX_STEPS};
//!
//! // Degenerate extents are replaced by MIN_SIZE
//! let width: f64 = 0.0;
//! let width = if width.abs() < EPSILON { MIN_SIZE } else { width };
//! assert_eq!(width, MIN_SIZE);
//!
//! // Step counts are clamped, never rejected
//! let steps = 1000u32.min(STAIRS_MAX_STEPS);
//! assert_eq!(steps, 256);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Clamp, Don't Reject**: Every limit here is a clamp bound
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
