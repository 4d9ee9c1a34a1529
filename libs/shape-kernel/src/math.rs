//! # Numeric Primitives
//!
//! Stateless helpers shared by every generator: circle and ellipse sampling,
//! per-axis sign handling for mirrored sizes, and logged parameter clamps.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};
use std::fmt::Display;
use tracing::debug;

/// Samples a point on a circle centered at the origin.
///
/// The angle is measured in degrees from the +X axis toward +Y.
///
/// # Example
///
/// ```rust
/// use shape_kernel::math::point_on_circle;
///
/// let p = point_on_circle(2.0, 90.0);
/// assert!(p.x.abs() < 1e-12);
/// assert!((p.y - 2.0).abs() < 1e-12);
/// ```
pub fn point_on_circle(radius: f64, angle_degrees: f64) -> DVec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    DVec2::new(cos * radius, sin * radius)
}

/// Samples a point on an axis-aligned ellipse and the unit tangent there.
///
/// The tangent points in the direction of increasing angle. When both radii
/// collapse to zero the tangent of the unit circle is returned so that
/// callers orienting a cross-section never receive a zero vector.
///
/// # Example
///
/// ```rust
/// use shape_kernel::math::point_on_ellipse;
///
/// let (p, t) = point_on_ellipse(3.0, 1.0, 0.0);
/// assert!((p.x - 3.0).abs() < 1e-12);
/// assert!((t.y - 1.0).abs() < 1e-12);
/// ```
pub fn point_on_ellipse(radius_x: f64, radius_y: f64, angle_degrees: f64) -> (DVec2, DVec2) {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let point = DVec2::new(cos * radius_x, sin * radius_y);
    let tangent = DVec2::new(-sin * radius_x, cos * radius_y).normalize_or_zero();
    let tangent = if tangent == DVec2::ZERO {
        DVec2::new(-sin, cos)
    } else {
        tangent
    };
    (point, tangent)
}

/// Per-axis sign of a vector, mapping zero to `+1`.
pub fn sign_vector(v: DVec3) -> DVec3 {
    DVec3::new(sign(v.x), sign(v.y), sign(v.z))
}

/// Per-axis absolute value of a vector.
#[inline]
pub fn abs_vector(v: DVec3) -> DVec3 {
    v.abs()
}

/// Returns true when scaling by `size` mirrors geometry an odd number of
/// times, which turns every face inside out unless its winding is reversed.
pub fn flips_winding(size: DVec3) -> bool {
    let s = sign_vector(size);
    s.x * s.y * s.z < 0.0
}

#[inline]
fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Returns true when an angle in degrees is within epsilon of zero.
#[inline]
pub fn is_degenerate_angle(angle_degrees: f64) -> bool {
    angle_degrees.abs() < EPSILON
}

/// Clamps a parameter into `[min, max]`, logging when the value moved.
pub fn clamp_param<T>(name: &str, value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy + Display,
{
    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };
    if clamped != value {
        debug!("clamping {name} from {value} to {clamped}");
    }
    clamped
}

/// Clamps a float parameter, mapping NaN to `min`.
pub fn clamp_scalar(name: &str, value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        debug!("clamping {name} from NaN to {min}");
        return min;
    }
    clamp_param(name, value, min, max.max(min))
}
