//! # Sprite
//!
//! Single quad in the XZ plane, facing +Y. Its "height" runs along Z.

use crate::mesh::MeshOutput;
use config::constants::EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// The sprite has no parameters beyond its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpriteParams;

/// Creates a single quad of `size.x` by `size.z`.
///
/// Returns an empty mesh when either in-plane extent is effectively zero.
pub fn create_sprite(size: DVec3) -> MeshOutput {
    if size.x.abs() < EPSILON || size.z.abs() < EPSILON {
        return MeshOutput::new();
    }
    let x = size.x * 0.5;
    let z = size.z * 0.5;
    let mut mesh = MeshOutput::with_capacity(4, 1);
    mesh.add_quad([
        DVec3::new(-x, 0.0, -z),
        DVec3::new(-x, 0.0, z),
        DVec3::new(x, 0.0, -z),
        DVec3::new(x, 0.0, z),
    ]);
    mesh
}
