//! # Torus
//!
//! A circular tube swept along an ellipse in the XZ plane. Both the sweep and
//! the tube cross-section may be partial arcs.

use crate::math::{clamp_param, clamp_scalar, point_on_circle, point_on_ellipse};
use crate::mesh::MeshOutput;
use config::constants::{
    DEFAULT_SMOOTHING_GROUP, MAX_SIDES, MIN_RADIUS, MIN_SIDES, MIN_SIZE, SMOOTHING_GROUP_NONE,
    TORUS_MIN_CIRCUMFERENCE,
};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Torus tessellation and sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    /// Samples around the tube cross-section, `3..=64`.
    pub rows: u32,
    /// Samples along the sweep path, `3..=64`.
    pub columns: u32,
    /// Radius of the tube, `[0.01, path radius]`.
    pub tube_radius: f64,
    /// Swept angle along the path in degrees, `[0.01, 360]`.
    pub horizontal_circumference: f64,
    /// Angle of the tube cross-section in degrees, `[0.01, 360]`.
    pub vertical_circumference: f64,
    pub smooth: bool,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            rows: 16,
            columns: 24,
            tube_radius: 0.1,
            horizontal_circumference: 360.0,
            vertical_circumference: 360.0,
            smooth: true,
        }
    }
}

/// Creates a torus whose outer footprint spans `size.x` by `size.z`.
///
/// Emits `columns * rows` quads.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::{create_torus, TorusParams};
/// use glam::DVec3;
///
/// let mesh = create_torus(DVec3::new(2.0, 0.2, 2.0), &TorusParams::default());
/// assert_eq!(mesh.face_count(), 16 * 24);
/// ```
pub fn create_torus(size: DVec3, params: &TorusParams) -> MeshOutput {
    let rows = clamp_param("rows", params.rows, MIN_SIDES, MAX_SIDES);
    let columns = clamp_param("columns", params.columns, MIN_SIDES, MAX_SIDES);
    let horizontal = clamp_scalar(
        "horizontal_circumference",
        params.horizontal_circumference,
        TORUS_MIN_CIRCUMFERENCE,
        360.0,
    );
    let vertical = clamp_scalar(
        "vertical_circumference",
        params.vertical_circumference,
        TORUS_MIN_CIRCUMFERENCE,
        360.0,
    );

    let half_x = size.x * 0.5;
    let half_z = size.z * 0.5;
    let path_radius = half_x.min(half_z).max(MIN_RADIUS);
    let tube = clamp_scalar("tube_radius", params.tube_radius, MIN_RADIUS, path_radius);
    let radius_x = (half_x - tube).max(MIN_SIZE);
    let radius_z = (half_z - tube).max(MIN_SIZE);

    let ring_step = vertical / f64::from(rows);
    let ring: Vec<DVec3> = (0..=rows)
        .map(|j| {
            let p = point_on_circle(tube, ring_step * f64::from(j));
            DVec3::new(p.x, p.y, 0.0)
        })
        .collect();

    let sweep_step = horizontal / f64::from(columns);
    let sections: Vec<Vec<DVec3>> = (0..=columns)
        .map(|i| {
            let (point, tangent) = point_on_ellipse(radius_x, radius_z, sweep_step * f64::from(i));
            let orientation = DQuat::from_rotation_y(tangent.x.atan2(tangent.y));
            let center = DVec3::new(point.x, 0.0, point.y);
            ring.iter().map(|&p| center + orientation * p).collect()
        })
        .collect();

    let group = if params.smooth {
        DEFAULT_SMOOTHING_GROUP
    } else {
        SMOOTHING_GROUP_NONE
    };

    let faces = (rows * columns) as usize;
    let mut mesh = MeshOutput::with_capacity(faces * 4, faces);
    for pair in sections.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        for j in 0..rows as usize {
            let face = mesh.add_quad([current[j], current[j + 1], next[j], next[j + 1]]);
            face.smoothing_group = group;
            face.manual_uv = true;
        }
    }
    mesh
}
