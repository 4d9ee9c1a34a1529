//! # Cylinder
//!
//! Circular cylinder around Y. The footprint is always round with a radius
//! of half the larger horizontal extent; fitting the mesh to the requested
//! size afterwards turns it elliptical.

use crate::math::{clamp_param, point_on_circle};
use crate::mesh::{Anchor, MeshOutput, UvProjection};
use config::constants::{DEFAULT_SMOOTHING_GROUP, MAX_HEIGHT_CUTS, MAX_SIDES, MIN_SIDES, MIN_SIZE};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Cylinder tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CylinderParams {
    /// Sides around the axis, `3..=64`, rounded up to an even count.
    pub axis_divisions: u32,
    /// Horizontal cuts along the height, `0..=32`.
    pub height_cuts: u32,
    /// Smoothing group of the side faces; `0` keeps hard edges.
    pub smoothing_group: i32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            axis_divisions: 6,
            height_cuts: 0,
            smoothing_group: DEFAULT_SMOOTHING_GROUP,
        }
    }
}

impl CylinderParams {
    /// Side count after clamping and rounding up to even.
    pub fn resolved_divisions(&self) -> u32 {
        let divisions = clamp_param("axis_divisions", self.axis_divisions, MIN_SIDES, MAX_SIDES);
        if divisions % 2 == 0 {
            divisions
        } else {
            (divisions + 1).min(MAX_SIDES)
        }
    }
}

/// Radius used for a requested size: half the larger of X and Z.
pub fn cylinder_radius(size: DVec3) -> f64 {
    (size.x.abs().max(size.z.abs()) * 0.5).max(MIN_SIZE)
}

/// Creates a capped cylinder centered at the origin.
///
/// Produces `divisions * (height_cuts + 1)` side quads and `2 * divisions`
/// cap triangles, each its own face.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::{create_cylinder, CylinderParams};
/// use glam::DVec3;
///
/// let params = CylinderParams { axis_divisions: 8, ..Default::default() };
/// let mesh = create_cylinder(DVec3::new(2.0, 4.0, 2.0), &params);
/// assert_eq!(mesh.face_count(), 8 + 16);
/// ```
pub fn create_cylinder(size: DVec3, params: &CylinderParams) -> MeshOutput {
    let divisions = params.resolved_divisions();
    let height_cuts = clamp_param("height_cuts", params.height_cuts, 0, MAX_HEIGHT_CUTS);
    let radius = cylinder_radius(size);
    let height = size.y.abs().max(MIN_SIZE);
    let bottom = -height * 0.5;
    let segments = height_cuts + 1;
    let step_height = height / f64::from(segments);
    let step_angle = 360.0 / f64::from(divisions);

    let circle: Vec<DVec3> = (0..divisions)
        .map(|i| {
            let p = point_on_circle(radius, step_angle * f64::from(i));
            DVec3::new(p.x, 0.0, p.y)
        })
        .collect();
    let at = |index: u32, y: f64| circle[(index % divisions) as usize] + DVec3::Y * y;

    let uv = UvProjection {
        anchor: Anchor::LowerLeft,
        ..UvProjection::default()
    };

    let side_faces = (divisions * segments) as usize;
    let cap_faces = (divisions * 2) as usize;
    let mut mesh =
        MeshOutput::with_capacity(side_faces * 4 + cap_faces * 3, side_faces + cap_faces);

    for i in 0..segments {
        let y0 = bottom + f64::from(i) * step_height;
        let y1 = bottom + f64::from(i + 1) * step_height;
        for n in 0..divisions {
            let face = mesh.add_quad([at(n, y0), at(n, y1), at(n + 1, y0), at(n + 1, y1)]);
            face.smoothing_group = params.smoothing_group;
            face.uv = uv;
            face.manual_uv = true;
        }
    }

    let top = bottom + height;
    for n in 0..divisions {
        mesh.add_triangle([at(n + 1, bottom), DVec3::Y * bottom, at(n, bottom)]);
    }
    for n in 0..divisions {
        mesh.add_triangle([at(n, top), DVec3::Y * top, at(n + 1, top)]);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(divisions: u32, cuts: u32) -> CylinderParams {
        CylinderParams {
            axis_divisions: divisions,
            height_cuts: cuts,
            ..Default::default()
        }
    }

    #[test]
    fn test_divisions_rounded_up_to_even() {
        assert_eq!(params(7, 0).resolved_divisions(), 8);
        assert_eq!(params(3, 0).resolved_divisions(), 4);
        assert_eq!(params(1000, 0).resolved_divisions(), 64);
        assert_eq!(params(6, 0).resolved_divisions(), 6);
    }

    #[test]
    fn test_cylinder_face_counts() {
        let mesh = create_cylinder(DVec3::new(2.0, 4.0, 2.0), &params(8, 2));
        assert_eq!(mesh.face_count(), 8 * 3 + 16);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_cylinder_radius_uses_larger_extent() {
        let mesh = create_cylinder(DVec3::new(1.0, 2.0, 3.0), &params(8, 0));
        let bounds = mesh.bounds();
        assert_abs_diff_eq!(bounds.size.x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.size.y, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.center.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cylinder_normals_point_outward() {
        let mesh = create_cylinder(DVec3::new(2.0, 2.0, 2.0), &params(12, 1));
        let positions = mesh.positions();
        for face in mesh.faces() {
            let n = face.normal(positions);
            let first = positions[face.indices()[0] as usize];
            assert!(n.dot(first) > 0.0, "inward face {:?}", face.indices());
        }
    }

    #[test]
    fn test_cylinder_side_attributes() {
        let mesh = create_cylinder(DVec3::ONE, &params(6, 0));
        let side = &mesh.faces()[0];
        assert_eq!(side.smoothing_group, DEFAULT_SMOOTHING_GROUP);
        assert!(side.manual_uv);
        assert_eq!(side.uv.anchor, Anchor::LowerLeft);
        let cap = &mesh.faces()[6];
        assert!(!cap.is_smooth());
    }

    #[test]
    fn test_cylinder_zero_size_is_clamped() {
        let mesh = create_cylinder(DVec3::ZERO, &CylinderParams::default());
        assert!(mesh.validate().is_ok());
        assert!(mesh.positions().iter().all(|p| p.is_finite()));
    }
}
