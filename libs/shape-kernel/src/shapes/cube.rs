//! # Cube
//!
//! Box built from a unit template scaled by the requested size.

use crate::mesh::MeshOutput;
use config::constants::MIN_SIZE;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// The cube has no parameters beyond its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CubeParams;

const TEMPLATE: [DVec3; 8] = [
    DVec3::new(-0.5, -0.5, 0.5),
    DVec3::new(0.5, -0.5, 0.5),
    DVec3::new(0.5, -0.5, -0.5),
    DVec3::new(-0.5, -0.5, -0.5),
    DVec3::new(-0.5, 0.5, 0.5),
    DVec3::new(0.5, 0.5, 0.5),
    DVec3::new(0.5, 0.5, -0.5),
    DVec3::new(-0.5, 0.5, -0.5),
];

// Corners of each side, in quad order (first and last are opposite).
const SIDES: [[usize; 4]; 6] = [
    [0, 1, 4, 5], // front  +Z
    [1, 2, 5, 6], // right  +X
    [2, 3, 6, 7], // back   -Z
    [3, 0, 7, 4], // left   -X
    [4, 5, 7, 6], // top    +Y
    [3, 2, 0, 1], // bottom -Y
];

/// Creates a box of `size` centered at the origin.
///
/// Every side owns its four corners, giving 24 positions and 6 quad faces.
/// Axes below `MIN_SIZE` are raised to it.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::splat(2.0));
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_cube(size: DVec3) -> MeshOutput {
    let size = size.max(DVec3::splat(MIN_SIZE));
    let mut mesh = MeshOutput::with_capacity(24, 6);
    for side in SIDES {
        mesh.add_quad(side.map(|i| TEMPLATE[i] * size));
    }
    mesh
}
