//! # Bounds
//!
//! Axis-aligned boxes stored as center and size, the form the editor uses
//! for pivot placement and gizmo sizing.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
///
/// `size` may carry negative components when it mirrors a shape's requested
/// size; [`Bounds::abs`] normalizes it.
///
/// # Example
///
/// ```rust
/// use shape_kernel::Bounds;
/// use glam::DVec3;
///
/// let b = Bounds::from_min_max(DVec3::splat(-1.0), DVec3::splat(3.0));
/// assert_eq!(b.center, DVec3::ONE);
/// assert_eq!(b.size, DVec3::splat(4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub center: DVec3,
    pub size: DVec3,
}

impl Bounds {
    /// Creates bounds from a center and a size.
    pub fn new(center: DVec3, size: DVec3) -> Self {
        Self { center, size }
    }

    /// Creates bounds spanning two corners.
    pub fn from_min_max(min: DVec3, max: DVec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            size: max - min,
        }
    }

    /// Smallest box containing every point; zero-sized at the origin if empty.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Self::from_min_max(min, max)
    }

    /// Half of the size.
    #[inline]
    pub fn extents(&self) -> DVec3 {
        self.size * 0.5
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> DVec3 {
        self.center - self.extents().abs()
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> DVec3 {
        self.center + self.extents().abs()
    }

    /// Copy with a non-negative size.
    pub fn abs(&self) -> Self {
        Self::new(self.center, self.size.abs())
    }

    /// The eight corners, ordered by the bits of their index (x, y, z).
    pub fn corners(&self) -> [DVec3; 8] {
        let min = self.min();
        let max = self.max();
        std::array::from_fn(|i| {
            DVec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            )
        })
    }

    /// Axis-aligned box enclosing this box after rotation about the origin.
    pub fn rotated(&self, rotation: DQuat) -> Self {
        Self::from_points(self.corners().into_iter().map(|c| rotation * c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_from_points_empty() {
        let b = Bounds::from_points(std::iter::empty());
        assert_eq!(b, Bounds::default());
    }

    #[test]
    fn test_from_points() {
        let b = Bounds::from_points([DVec3::new(-1.0, 0.0, 2.0), DVec3::new(3.0, 4.0, 2.0)]);
        assert_eq!(b.center, DVec3::new(1.0, 2.0, 2.0));
        assert_eq!(b.size, DVec3::new(4.0, 4.0, 0.0));
    }

    #[test]
    fn test_min_max_with_negative_size() {
        let b = Bounds::new(DVec3::ZERO, DVec3::new(-2.0, 2.0, 2.0));
        assert_eq!(b.min(), DVec3::splat(-1.0));
        assert_eq!(b.max(), DVec3::splat(1.0));
        assert_eq!(b.abs().size, DVec3::splat(2.0));
    }

    #[test]
    fn test_rotated_swaps_axes() {
        let b = Bounds::new(DVec3::ZERO, DVec3::new(2.0, 4.0, 6.0));
        let r = b.rotated(DQuat::from_rotation_y(FRAC_PI_2));
        assert_abs_diff_eq!(r.size.x, 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.size.y, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.size.z, 2.0, epsilon = 1e-9);
    }
}
