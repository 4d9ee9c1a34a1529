//! # Sphere
//!
//! Geodesic sphere built by repeatedly subdividing an icosahedron and
//! projecting every new vertex back onto the sphere.

use crate::math::clamp_param;
use crate::mesh::MeshOutput;
use config::constants::{
    DEFAULT_SMOOTHING_GROUP, MIN_SIZE, PHI, SMOOTHING_GROUP_NONE, SPHERE_MAX_SUBDIVISIONS,
    SPHERE_MIN_SUBDIVISIONS,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Icosphere tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SphereParams {
    /// Subdivision rounds, `1..=5`.
    pub subdivisions: u32,
    pub smooth: bool,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            subdivisions: 3,
            smooth: true,
        }
    }
}

const ICOSAHEDRON_VERTICES: [DVec3; 12] = [
    DVec3::new(-1.0, PHI, 0.0),
    DVec3::new(1.0, PHI, 0.0),
    DVec3::new(-1.0, -PHI, 0.0),
    DVec3::new(1.0, -PHI, 0.0),
    DVec3::new(0.0, -1.0, PHI),
    DVec3::new(0.0, 1.0, PHI),
    DVec3::new(0.0, -1.0, -PHI),
    DVec3::new(0.0, 1.0, -PHI),
    DVec3::new(PHI, 0.0, -1.0),
    DVec3::new(PHI, 0.0, 1.0),
    DVec3::new(-PHI, 0.0, -1.0),
    DVec3::new(-PHI, 0.0, 1.0),
];

const ICOSAHEDRON_TRIANGLES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Radius used for a requested size: half the largest extent.
pub fn sphere_radius(size: DVec3) -> f64 {
    (size.abs().max_element() * 0.5).max(MIN_SIZE)
}

/// Creates an icosphere centered at the origin.
///
/// Each subdivision round splits every triangle into four, so the result has
/// `20 * 4^n` single-triangle faces.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::{create_sphere, SphereParams};
/// use glam::DVec3;
///
/// let params = SphereParams { subdivisions: 2, smooth: true };
/// let mesh = create_sphere(DVec3::splat(2.0), &params);
/// assert_eq!(mesh.face_count(), 320);
/// ```
pub fn create_sphere(size: DVec3, params: &SphereParams) -> MeshOutput {
    let subdivisions = clamp_param(
        "subdivisions",
        params.subdivisions,
        SPHERE_MIN_SUBDIVISIONS,
        SPHERE_MAX_SUBDIVISIONS,
    );
    let radius = sphere_radius(size);

    let mut triangles: Vec<[DVec3; 3]> = ICOSAHEDRON_TRIANGLES
        .iter()
        .map(|t| t.map(|i| ICOSAHEDRON_VERTICES[i].normalize()))
        .collect();
    for _ in 0..subdivisions {
        triangles = subdivide(&triangles);
    }

    let group = if params.smooth {
        DEFAULT_SMOOTHING_GROUP
    } else {
        SMOOTHING_GROUP_NONE
    };
    let mut mesh = MeshOutput::with_capacity(triangles.len() * 3, triangles.len());
    for triangle in triangles {
        mesh.add_triangle(triangle.map(|p| p * radius)).smoothing_group = group;
    }
    mesh
}

// Corners p0, p2, p5 with edge midpoints p1 (p0-p2), p3 (p0-p5), p4 (p2-p5).
fn subdivide(triangles: &[[DVec3; 3]]) -> Vec<[DVec3; 3]> {
    let mut out = Vec::with_capacity(triangles.len() * 4);
    for &[p0, p2, p5] in triangles {
        let p1 = p0.lerp(p2, 0.5).normalize();
        let p3 = p0.lerp(p5, 0.5).normalize();
        let p4 = p2.lerp(p5, 0.5).normalize();
        out.push([p0, p1, p3]);
        out.push([p1, p2, p4]);
        out.push([p1, p4, p3]);
        out.push([p3, p4, p5]);
    }
    out
}

/// Index of the position with the smallest Y, first one on ties.
pub fn bottom_most_vertex(positions: &[DVec3]) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, p)| match best {
            Some((_, y)) if y <= p.y => best,
            _ => Some((i, p.y)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sphere_face_growth() {
        for n in 1..=4 {
            let params = SphereParams {
                subdivisions: n,
                smooth: true,
            };
            let mesh = create_sphere(DVec3::splat(2.0), &params);
            assert_eq!(mesh.face_count(), 20 * 4usize.pow(n));
        }
    }

    #[test]
    fn test_sphere_vertices_on_radius() {
        let mesh = create_sphere(DVec3::new(1.0, 3.0, 2.0), &SphereParams::default());
        for p in mesh.positions() {
            assert_abs_diff_eq!(p.length(), 1.5, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_sphere_subdivisions_clamped() {
        let params = SphereParams {
            subdivisions: 0,
            smooth: false,
        };
        let mesh = create_sphere(DVec3::ONE, &params);
        assert_eq!(mesh.face_count(), 80);
        assert!(mesh.faces().iter().all(|f| !f.is_smooth()));
    }

    #[test]
    fn test_sphere_normals_point_outward() {
        let params = SphereParams {
            subdivisions: 1,
            smooth: true,
        };
        let mesh = create_sphere(DVec3::ONE, &params);
        let positions = mesh.positions();
        for face in mesh.faces() {
            let p = positions[face.indices()[0] as usize];
            assert!(face.normal(positions).dot(p) > 0.0);
        }
    }

    #[test]
    fn test_bottom_most_vertex() {
        let positions = [
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, -2.0, 0.0),
            DVec3::new(1.0, -2.0, 0.0),
        ];
        assert_eq!(bottom_most_vertex(&positions), Some(1));
        assert_eq!(bottom_most_vertex(&[]), None);
    }

    #[test]
    fn test_sphere_bottom_vertex_at_minus_radius() {
        let mesh = create_sphere(DVec3::splat(2.0), &SphereParams::default());
        let Some(index) = bottom_most_vertex(mesh.positions()) else {
            panic!("sphere has no vertices");
        };
        // First subdivision puts a midpoint on the pole
        assert_abs_diff_eq!(mesh.positions()[index].y, -1.0, epsilon = 1e-9);
    }
}
