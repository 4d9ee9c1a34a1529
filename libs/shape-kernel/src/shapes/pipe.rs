//! # Pipe
//!
//! Hollow cylinder around Y: outer wall, inner wall and two annular caps.

use crate::math::{clamp_param, clamp_scalar, point_on_circle};
use crate::mesh::MeshOutput;
use config::constants::{MAX_HEIGHT_CUTS, MAX_SIDES, MIN_SIDES, MIN_SIZE};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Pipe wall and tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeParams {
    /// Wall thickness, `[0.001, radius - 0.001]`.
    pub thickness: f64,
    /// Sides around the axis, `3..=64`.
    pub sides: u32,
    /// Horizontal cuts along the height, `0..=32`.
    pub height_cuts: u32,
}

impl Default for PipeParams {
    fn default() -> Self {
        Self {
            thickness: 0.25,
            sides: 6,
            height_cuts: 0,
        }
    }
}

/// Creates a pipe centered at the origin.
///
/// Each of the `height_cuts + 1` bands contributes one outer and one inner
/// quad per side; each cap contributes one quad per side.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::{create_pipe, PipeParams};
/// use glam::DVec3;
///
/// let mesh = create_pipe(DVec3::new(2.0, 1.0, 2.0), &PipeParams::default());
/// assert_eq!(mesh.face_count(), 6 * 4);
/// ```
pub fn create_pipe(size: DVec3, params: &PipeParams) -> MeshOutput {
    let sides = clamp_param("sides", params.sides, MIN_SIDES, MAX_SIDES);
    let height_cuts = clamp_param("height_cuts", params.height_cuts, 0, MAX_HEIGHT_CUTS);
    let radius = (size.x.max(size.z) * 0.5).max(MIN_SIZE * 2.0);
    let thickness = clamp_scalar("thickness", params.thickness, MIN_SIZE, radius - MIN_SIZE);
    let inner_radius = radius - thickness;
    let height = size.y.max(MIN_SIZE);
    let bottom = -height * 0.5;
    let top = bottom + height;
    let segments = height_cuts + 1;
    let step_height = height / f64::from(segments);
    let step_angle = 360.0 / f64::from(sides);

    let ring = |r: f64| -> Vec<DVec3> {
        (0..sides)
            .map(|i| {
                let p = point_on_circle(r, step_angle * f64::from(i));
                DVec3::new(p.x, 0.0, p.y)
            })
            .collect()
    };
    let outer = ring(radius);
    let inner = ring(inner_radius);
    let count = outer.len();
    let lift = |p: DVec3, y: f64| p + DVec3::Y * y;

    let faces = count * (segments as usize * 2 + 2);
    let mut mesh = MeshOutput::with_capacity(faces * 4, faces);

    for band in 0..segments {
        let y0 = bottom + f64::from(band) * step_height;
        let y1 = bottom + f64::from(band + 1) * step_height;
        for n in 0..count {
            let m = (n + 1) % count;
            mesh.add_quad([
                lift(outer[m], y0),
                lift(outer[n], y0),
                lift(outer[m], y1),
                lift(outer[n], y1),
            ]);
            mesh.add_quad([
                lift(inner[n], y0),
                lift(inner[m], y0),
                lift(inner[n], y1),
                lift(inner[m], y1),
            ]);
        }
    }

    for n in 0..count {
        let m = (n + 1) % count;
        mesh.add_quad([
            lift(outer[n], bottom),
            lift(outer[m], bottom),
            lift(inner[n], bottom),
            lift(inner[m], bottom),
        ]);
        mesh.add_quad([
            lift(outer[m], top),
            lift(outer[n], top),
            lift(inner[m], top),
            lift(inner[n], top),
        ]);
    }
    mesh
}
