//! # Door
//!
//! Door frame: two legs joined by a lintel, with the opening cut through Z.

use crate::math::clamp_scalar;
use crate::mesh::MeshOutput;
use config::constants::{DOOR_MIN_FEATURE, MIN_SIZE};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Door frame proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorParams {
    /// Width of each leg, `[0.01, width / 2 - 0.01]`.
    pub leg_width: f64,
    /// Height of the lintel above the opening, `[0.01, height - 0.01]`.
    pub ledge_height: f64,
}

impl Default for DoorParams {
    fn default() -> Self {
        Self {
            leg_width: 0.75,
            ledge_height: 0.5,
        }
    }
}

// Front quads over the 4x3 template grid (row * 4 + column).
const FRONT: [[usize; 4]; 5] = [
    [0, 1, 4, 5],
    [4, 5, 8, 9],
    [5, 6, 9, 10],
    [6, 7, 10, 11],
    [2, 3, 6, 7],
];

/// Creates a door frame of `size` centered at the origin.
///
/// Five front quads, their mirrored back copies and the three quads lining
/// the opening give 13 quad faces. Width and height never drop below room
/// for two minimal features, depth never below `MIN_SIZE`.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::{create_door, DoorParams};
/// use glam::DVec3;
///
/// let mesh = create_door(DVec3::new(4.0, 4.0, 1.0), &DoorParams::default());
/// assert_eq!(mesh.face_count(), 13);
/// ```
pub fn create_door(size: DVec3, params: &DoorParams) -> MeshOutput {
    let half_width = (size.x * 0.5).max(DOOR_MIN_FEATURE * 2.0);
    let height = size.y.max(DOOR_MIN_FEATURE * 2.0);
    let half_depth = size.z.max(MIN_SIZE) * 0.5;

    let leg_width = clamp_scalar(
        "leg_width",
        params.leg_width,
        DOOR_MIN_FEATURE,
        half_width - DOOR_MIN_FEATURE,
    );
    let ledge_height = clamp_scalar(
        "ledge_height",
        params.ledge_height,
        DOOR_MIN_FEATURE,
        height - DOOR_MIN_FEATURE,
    );

    let inner = half_width - leg_width;
    let columns = [-half_width, -inner, inner, half_width];
    let rows = [0.0, height - ledge_height, height];
    let shift = DVec3::new(0.0, -height * 0.5, 0.0);

    let front: [DVec3; 12] =
        std::array::from_fn(|i| DVec3::new(columns[i % 4], rows[i / 4], half_depth) + shift);
    let back = front.map(|p| DVec3::new(p.x, p.y, -half_depth));

    let mut mesh = MeshOutput::with_capacity(52, 13);
    for quad in FRONT {
        mesh.add_quad(quad.map(|i| front[i]));
    }
    for quad in FRONT {
        mesh.add_quad(quad.map(|i| back[i])).reverse();
    }

    mesh.add_quad([front[1], back[1], front[5], back[5]]);
    mesh.add_quad([front[5], back[5], front[6], back[6]]);
    mesh.add_quad([front[6], back[6], front[2], back[2]]);
    mesh
}
