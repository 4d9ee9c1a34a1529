//! # Cone
//!
//! Circular cone around Y with its apex on top.

use crate::math::{clamp_param, point_on_circle};
use crate::mesh::MeshOutput;
use config::constants::{
    DEFAULT_SMOOTHING_GROUP, MAX_SIDES, MIN_SIDES, MIN_SIZE, SMOOTHING_GROUP_NONE,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Cone tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConeParams {
    /// Sides around the axis, `3..=64`.
    pub sides: u32,
    /// Share normals across the slanted faces.
    pub smooth: bool,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            sides: 6,
            smooth: true,
        }
    }
}

/// Creates a cone centered at the origin: `sides` slanted triangles meeting
/// at the apex plus `sides` base triangles.
pub fn create_cone(size: DVec3, params: &ConeParams) -> MeshOutput {
    let sides = clamp_param("sides", params.sides, MIN_SIDES, MAX_SIDES);
    let radius = (size.x.max(size.z) * 0.5).max(MIN_SIZE);
    let half_height = size.y.max(MIN_SIZE) * 0.5;
    let step = 360.0 / f64::from(sides);

    let circle: Vec<DVec3> = (0..sides)
        .map(|i| {
            let p = point_on_circle(radius, step * f64::from(i));
            DVec3::new(p.x, -half_height, p.y)
        })
        .collect();
    let apex = DVec3::new(0.0, half_height, 0.0);
    let base = DVec3::new(0.0, -half_height, 0.0);
    let group = if params.smooth {
        DEFAULT_SMOOTHING_GROUP
    } else {
        SMOOTHING_GROUP_NONE
    };

    let mut mesh = MeshOutput::with_capacity(sides as usize * 6, sides as usize * 2);
    for i in 0..circle.len() {
        let next = circle[(i + 1) % circle.len()];
        mesh.add_triangle([apex, next, circle[i]]).smoothing_group = group;
    }
    for i in 0..circle.len() {
        let next = circle[(i + 1) % circle.len()];
        mesh.add_triangle([circle[i], next, base]);
    }
    mesh
}
