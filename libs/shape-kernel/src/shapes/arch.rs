//! # Arch
//!
//! Thick circular arc in the XY plane, extruded along Z. The arc starts on
//! +X and sweeps counter-clockwise toward +Y.

use crate::math::{clamp_param, clamp_scalar, is_degenerate_angle, point_on_circle};
use crate::mesh::MeshOutput;
use config::constants::{MAX_ARCH_SIDES, MIN_ARCH_SIDES, MIN_SIZE};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

const OUTER_SMOOTHING_GROUP: i32 = 1;
const INNER_SMOOTHING_GROUP: i32 = 2;

/// Arch proportions and tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchParams {
    /// Radial thickness of the arch, `[0.001, radius]`.
    pub thickness: f64,
    /// Number of blocks along the arc, `2..=200`.
    pub sides: u32,
    /// Swept angle in degrees, `0..=360`.
    pub degrees: f64,
    /// Close both ends when the arc is open.
    pub end_caps: bool,
    /// Smooth the outer and inner walls in separate groups.
    pub smooth: bool,
}

impl Default for ArchParams {
    fn default() -> Self {
        Self {
            thickness: 0.1,
            sides: 6,
            degrees: 180.0,
            end_caps: true,
            smooth: true,
        }
    }
}

/// Creates an arch sized from `size`.
///
/// The outer radius is the larger of half the X extent and the Y extent;
/// depth runs along Z centered on the origin. A swept angle of zero emits
/// the single cap quad instead of wedges.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::{create_arch, ArchParams};
/// use glam::DVec3;
///
/// let mesh = create_arch(DVec3::new(2.0, 1.0, 0.5), &ArchParams::default());
/// // 6 blocks with 4 faces each, plus two end caps
/// assert_eq!(mesh.face_count(), 26);
/// ```
pub fn create_arch(size: DVec3, params: &ArchParams) -> MeshOutput {
    let sides = clamp_param("sides", params.sides, MIN_ARCH_SIDES, MAX_ARCH_SIDES);
    let degrees = clamp_scalar("degrees", params.degrees, 0.0, 360.0);
    let radius = (size.x * 0.5).max(size.y).max(MIN_SIZE);
    let thickness = clamp_scalar("thickness", params.thickness, MIN_SIZE, radius);
    let half_depth = size.z.max(MIN_SIZE) * 0.5;

    let at = |p: DVec2, z: f64| DVec3::new(p.x, p.y, z);
    let (front, back) = (half_depth, -half_depth);

    if is_degenerate_angle(degrees) {
        let outer = point_on_circle(radius, 0.0);
        let inner = point_on_circle(radius - thickness, 0.0);
        let mut mesh = MeshOutput::with_capacity(4, 1);
        mesh.add_quad([at(outer, front), at(inner, front), at(outer, back), at(inner, back)]);
        return mesh;
    }

    let step = degrees / f64::from(sides);
    let outer: Vec<DVec2> = (0..=sides)
        .map(|i| point_on_circle(radius, step * f64::from(i)))
        .collect();
    let inner: Vec<DVec2> = (0..=sides)
        .map(|i| point_on_circle(radius - thickness, step * f64::from(i)))
        .collect();
    let last = sides as usize;
    let caps = degrees < 360.0 && params.end_caps;
    let (outer_group, inner_group) = if params.smooth {
        (OUTER_SMOOTHING_GROUP, INNER_SMOOTHING_GROUP)
    } else {
        (0, 0)
    };

    let mut mesh = MeshOutput::with_capacity((last * 4 + 2) * 4, last * 4 + 2);
    for n in 0..last {
        mesh.add_quad([
            at(outer[n], back),
            at(outer[n + 1], back),
            at(outer[n], front),
            at(outer[n + 1], front),
        ])
        .smoothing_group = outer_group;
        mesh.add_quad([
            at(inner[n + 1], back),
            at(inner[n], back),
            at(inner[n + 1], front),
            at(inner[n], front),
        ])
        .smoothing_group = inner_group;
    }

    if caps {
        mesh.add_quad([
            at(outer[0], front),
            at(inner[0], front),
            at(outer[0], back),
            at(inner[0], back),
        ]);
        mesh.add_quad([
            at(inner[last], front),
            at(outer[last], front),
            at(inner[last], back),
            at(outer[last], back),
        ]);
    }

    for n in 0..last {
        mesh.add_quad([
            at(outer[n], front),
            at(outer[n + 1], front),
            at(inner[n], front),
            at(inner[n + 1], front),
        ]);
        mesh.add_quad([
            at(outer[n + 1], back),
            at(outer[n], back),
            at(inner[n + 1], back),
            at(inner[n], back),
        ]);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_arch_face_counts() {
        let mesh = create_arch(DVec3::new(2.0, 1.0, 0.5), &ArchParams::default());
        assert_eq!(mesh.face_count(), 6 * 4 + 2);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_full_circle_has_no_caps() {
        let params = ArchParams {
            degrees: 360.0,
            ..Default::default()
        };
        let mesh = create_arch(DVec3::new(2.0, 1.0, 0.5), &params);
        assert_eq!(mesh.face_count(), 6 * 4);
    }

    #[test]
    fn test_caps_can_be_disabled() {
        let params = ArchParams {
            end_caps: false,
            ..Default::default()
        };
        let mesh = create_arch(DVec3::new(2.0, 1.0, 0.5), &params);
        assert_eq!(mesh.face_count(), 6 * 4);
    }

    #[test]
    fn test_zero_degrees_emits_single_cap() {
        let params = ArchParams {
            degrees: 0.0,
            ..Default::default()
        };
        let mesh = create_arch(DVec3::new(2.0, 1.0, 0.5), &params);
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_half_arch_bounds() {
        let params = ArchParams {
            sides: 8,
            ..Default::default()
        };
        let mesh = create_arch(DVec3::new(2.0, 1.0, 0.5), &params);
        let bounds = mesh.bounds();
        assert_abs_diff_eq!(bounds.size.x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.size.y, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.size.z, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_arch_walls_and_faces_orientation() {
        let params = ArchParams {
            smooth: true,
            ..Default::default()
        };
        let mesh = create_arch(DVec3::new(2.0, 1.0, 0.5), &params);
        let positions = mesh.positions();
        let outer = &mesh.faces()[0];
        let inner = &mesh.faces()[1];
        let radial = |p: DVec3| DVec3::new(p.x, p.y, 0.0);
        let op = positions[outer.indices()[0] as usize];
        let ip = positions[inner.indices()[0] as usize];
        assert!(outer.normal(positions).dot(radial(op)) > 0.0);
        assert!(inner.normal(positions).dot(radial(ip)) < 0.0);
        assert_eq!(outer.smoothing_group, 1);
        assert_eq!(inner.smoothing_group, 2);

        let start_cap = &mesh.faces()[12];
        assert_abs_diff_eq!(start_cap.normal(positions).y, -1.0, epsilon = 1e-9);
        let front = &mesh.faces()[14];
        assert_abs_diff_eq!(front.normal(positions).z, 1.0, epsilon = 1e-9);
        let back = &mesh.faces()[15];
        assert_abs_diff_eq!(back.normal(positions).z, -1.0, epsilon = 1e-9);
    }
}
