//! # Configuration Constants
//!
//! Centralized constants for the shape kernel. All tolerances, clamp ranges
//! and parameter defaults used by the generators are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sizing**: Minimum extents substituted for degenerate sizes
//! - **Limits**: Clamp ranges for every generator parameter
//! - **Geometry**: Mathematical constants used by the templates

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for geometric comparisons.
///
/// Used to decide whether an angle, radius or extent is "effectively zero".
/// Generators treat anything below this value as degenerate and switch to
/// their collapsed variant (single cap, triangular tread, empty sprite).
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn is_degenerate(angle: f64) -> bool {
///     angle.abs() < EPSILON
/// }
///
/// assert!(is_degenerate(1e-9));
/// ```
pub const EPSILON: f64 = 1e-6;

/// Tolerance below which a bounds extent is considered flat when fitting a
/// mesh to a requested size.
///
/// # Example
///
/// ```rust
/// use config::constants::FIT_EPSILON;
///
/// let extent = 0.0005;
/// assert!(extent < FIT_EPSILON);
/// ```
pub const FIT_EPSILON: f64 = 0.001;

// =============================================================================
// SIZING CONSTANTS
// =============================================================================

/// Smallest extent allowed on an axis a generator divides by.
///
/// A size component of zero is replaced by this value (keeping its sign) so
/// that downstream colliders and UV projections never see a zero-width box.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SIZE;
///
/// let requested = 0.0_f64;
/// let used = if requested.abs() < MIN_SIZE { MIN_SIZE } else { requested };
/// assert_eq!(used, MIN_SIZE);
/// ```
pub const MIN_SIZE: f64 = 0.001;

/// Smallest radius or thickness a curved generator will emit.
pub const MIN_RADIUS: f64 = 0.01;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of sides on any swept cross-section.
pub const MIN_SIDES: u32 = 3;

/// Maximum number of sides on Cylinder, Cone, Pipe and Torus sections.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SIDES, MIN_SIDES};
///
/// let requested = 500u32;
/// assert_eq!(requested.clamp(MIN_SIDES, MAX_SIDES), MAX_SIDES);
/// ```
pub const MAX_SIDES: u32 = 64;

/// Maximum number of horizontal cuts along a Cylinder or Pipe.
pub const MAX_HEIGHT_CUTS: u32 = 32;

/// Maximum number of grid cuts on either axis of a Plane.
pub const MAX_PLANE_CUTS: u32 = 64;

/// Minimum number of blocks composing an Arch.
pub const MIN_ARCH_SIDES: u32 = 2;

/// Maximum number of blocks composing an Arch.
pub const MAX_ARCH_SIDES: u32 = 200;

/// Smallest icosphere subdivision level.
pub const SPHERE_MIN_SUBDIVISIONS: u32 = 1;

/// Largest icosphere subdivision level.
///
/// Level 5 already yields `20 * 4^5 = 20480` triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::SPHERE_MAX_SUBDIVISIONS;
///
/// let triangles = 20 * 4u32.pow(SPHERE_MAX_SUBDIVISIONS);
/// assert_eq!(triangles, 20480);
/// ```
pub const SPHERE_MAX_SUBDIVISIONS: u32 = 5;

/// Maximum number of steps a staircase may contain.
///
/// # Example
///
/// ```rust
/// use config::constants::STAIRS_MAX_STEPS;
///
/// let requested = 1000u32;
/// assert_eq!(requested.min(STAIRS_MAX_STEPS), 256);
/// ```
pub const STAIRS_MAX_STEPS: u32 = 256;

/// Smallest step height accepted in height-driven stair generation.
pub const STAIRS_MIN_STEP_HEIGHT: f64 = 0.01;

/// Largest absolute arc, in degrees, for curved stairs.
pub const STAIRS_MAX_CIRCUMFERENCE: f64 = 360.0;

/// Smallest sweep angle, in degrees, accepted by the Torus.
pub const TORUS_MIN_CIRCUMFERENCE: f64 = 0.01;

/// Smallest door leg width and lintel height.
pub const DOOR_MIN_FEATURE: f64 = 0.01;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// The golden ratio, used by the icosahedron template.
///
/// # Example
///
/// ```rust
/// use config::constants::PHI;
///
/// assert!((PHI * PHI - PHI - 1.0).abs() < 1e-12);
/// ```
pub const PHI: f64 = 1.618_033_988_749_895;

/// Smoothing group assigned to faces that should share normals by default.
pub const DEFAULT_SMOOTHING_GROUP: i32 = 1;

/// Smoothing group meaning "hard edges".
pub const SMOOTHING_GROUP_NONE: i32 = 0;

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of kernel settings shared by the shape component.
///
/// # Examples
/// ```
/// use config::constants::KernelConfig;
/// let config = KernelConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert!(config.min_size > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Extent below which an axis is treated as flat when fitting a mesh.
    pub tolerance: f64,
    /// Extent substituted for a zero size component.
    pub min_size: f64,
}

impl KernelConfig {
    /// Builds a configuration, rejecting non-positive values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-4, 0.01).expect("valid config");
    /// assert_eq!(cfg.min_size, 0.01);
    /// ```
    pub fn new(tolerance: f64, min_size: f64) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(min_size > 0.0) {
            return Err(ConfigError::InvalidMinSize(min_size));
        }
        Ok(Self {
            tolerance,
            min_size,
        })
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: FIT_EPSILON,
            min_size: MIN_SIZE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the minimum size is zero, negative or NaN.
    InvalidMinSize(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidMinSize(value) => {
                write!(f, "min_size must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-9));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-9));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
