//! # Plane
//!
//! Subdivided rectangle lying in the XZ plane, facing +Y.

use crate::math::clamp_param;
use crate::mesh::MeshOutput;
use config::constants::{MAX_PLANE_CUTS, MIN_SIZE};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Plane subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaneParams {
    /// Cuts across X, `0..=64`.
    pub width_cuts: u32,
    /// Cuts across Z, `0..=64`.
    pub height_cuts: u32,
}

/// Creates a grid of `(width_cuts + 1) * (height_cuts + 1)` quads.
///
/// The Y component of `size` is ignored; X and Z are at least `MIN_SIZE`.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::{create_plane, PlaneParams};
/// use glam::DVec3;
///
/// let params = PlaneParams { width_cuts: 1, height_cuts: 2 };
/// let mesh = create_plane(DVec3::new(4.0, 0.0, 6.0), &params);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_plane(size: DVec3, params: &PlaneParams) -> MeshOutput {
    let width_segments = clamp_param("width_cuts", params.width_cuts, 0, MAX_PLANE_CUTS) + 1;
    let height_segments = clamp_param("height_cuts", params.height_cuts, 0, MAX_PLANE_CUTS) + 1;

    let size = DVec3::new(size.x.max(MIN_SIZE), 0.0, size.z.max(MIN_SIZE));
    let step_x = size.x / f64::from(width_segments);
    let step_z = size.z / f64::from(height_segments);
    let origin = DVec3::new(-size.x * 0.5, 0.0, -size.z * 0.5);

    let count = (width_segments * height_segments) as usize;
    let mut mesh = MeshOutput::with_capacity(count * 4, count);
    for ix in 0..width_segments {
        let x0 = f64::from(ix) * step_x;
        let x1 = f64::from(ix + 1) * step_x;
        for iz in 0..height_segments {
            let z0 = f64::from(iz) * step_z;
            let z1 = f64::from(iz + 1) * step_z;
            mesh.add_quad([
                origin + DVec3::new(x0, 0.0, z0),
                origin + DVec3::new(x0, 0.0, z1),
                origin + DVec3::new(x1, 0.0, z0),
                origin + DVec3::new(x1, 0.0, z1),
            ]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_plane_default_is_single_quad() {
        let mesh = create_plane(DVec3::ONE, &PlaneParams::default());
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn test_plane_faces_up() {
        let params = PlaneParams {
            width_cuts: 3,
            height_cuts: 2,
        };
        let mesh = create_plane(DVec3::new(2.0, 5.0, 3.0), &params);
        assert_eq!(mesh.face_count(), 12);
        for face in mesh.faces() {
            assert_abs_diff_eq!(face.normal(mesh.positions()).y, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_plane_bounds_ignore_height() {
        let mesh = create_plane(DVec3::new(2.0, 5.0, 3.0), &PlaneParams::default());
        let bounds = mesh.bounds();
        assert_abs_diff_eq!(bounds.size.x, 2.0);
        assert_abs_diff_eq!(bounds.size.y, 0.0);
        assert_abs_diff_eq!(bounds.size.z, 3.0);
        assert_abs_diff_eq!(bounds.center.x, 0.0);
    }

    #[test]
    fn test_zero_width_plane_is_clamped() {
        let mesh = create_plane(DVec3::new(0.0, 1.0, 2.0), &PlaneParams::default());
        assert_abs_diff_eq!(mesh.bounds().size.x, MIN_SIZE);
        let normal = mesh.faces()[0].normal(mesh.positions());
        assert_abs_diff_eq!(normal.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_plane_cuts_are_clamped() {
        let params = PlaneParams {
            width_cuts: 1000,
            height_cuts: 0,
        };
        let mesh = create_plane(DVec3::ONE, &params);
        assert_eq!(mesh.face_count(), (MAX_PLANE_CUTS + 1) as usize);
    }
}
