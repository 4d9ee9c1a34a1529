//! # Prism
//!
//! Triangular prism: a gable-shaped cross-section extruded along Z.

use crate::mesh::MeshOutput;
use config::constants::MIN_SIZE;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// The prism has no parameters beyond its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrismParams;

/// Creates a triangular prism of `size` centered at the origin.
///
/// The ridge runs along Z at the top of the box; the base lies on `-Y`.
/// Two triangular ends and three quads give 18 positions and 5 faces.
/// Axes below `MIN_SIZE` are raised to it.
pub fn create_prism(size: DVec3) -> MeshOutput {
    let size = size.max(DVec3::splat(MIN_SIZE));
    let t = [
        DVec3::new(-0.5, -0.5, -0.5),
        DVec3::new(0.5, -0.5, -0.5),
        DVec3::new(0.0, 0.5, -0.5),
        DVec3::new(-0.5, -0.5, 0.5),
        DVec3::new(0.5, -0.5, 0.5),
        DVec3::new(0.0, 0.5, 0.5),
    ]
    .map(|p| p * size);

    let mut mesh = MeshOutput::with_capacity(18, 5);
    mesh.add_triangle([t[2], t[1], t[0]]);
    mesh.add_quad([t[1], t[2], t[4], t[5]]);
    mesh.add_quad([t[3], t[5], t[0], t[2]]);
    mesh.add_triangle([t[5], t[3], t[4]]);
    mesh.add_quad([t[0], t[1], t[3], t[4]]);
    mesh
}
