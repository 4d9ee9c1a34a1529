//! # Bounds and Pivot Reconciliation
//!
//! Helpers the editor uses after a rebuild: fitting the mesh to the requested
//! size, moving the object origin without moving geometry, and the six
//! resize handles of a bounding box.

use crate::bounds::Bounds;
use crate::math::sign_vector;
use crate::mesh::MeshOutput;
use config::constants::{EPSILON, FIT_EPSILON};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Where the object origin sits relative to its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotLocation {
    /// Center of the shape box.
    #[default]
    Center,
    /// First corner of the box the shape was drawn in.
    FirstCorner,
}

/// Rigid placement of an object in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
    };

    /// Creates a transform from a position and a rotation.
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    /// Local to world.
    #[inline]
    pub fn transform_point(&self, local: DVec3) -> DVec3 {
        self.position + self.rotation * local
    }

    /// World to local.
    #[inline]
    pub fn inverse_transform_point(&self, world: DVec3) -> DVec3 {
        self.rotation.inverse() * (world - self.position)
    }
}

/// Scales `mesh` about `current.center` so its extents match `|size|`.
///
/// Uses [`FIT_EPSILON`] as the flatness threshold; see
/// [`fit_to_size_with_tolerance`].
pub fn fit_to_size(mesh: &mut MeshOutput, current: Bounds, size: DVec3) {
    fit_to_size_with_tolerance(mesh, current, size, FIT_EPSILON);
}

/// Scales `mesh` about `current.center` so its extents match `|size|`.
///
/// Axes whose current extent is below `tolerance` collapse to zero. Nothing
/// happens when the mesh is empty or the resulting scale is exactly one or
/// exactly zero.
///
/// # Example
///
/// ```rust
/// use shape_kernel::pivot::fit_to_size;
/// use shape_kernel::shapes::create_cube;
/// use glam::DVec3;
///
/// let mut mesh = create_cube(DVec3::ONE);
/// let current = mesh.bounds();
/// fit_to_size(&mut mesh, current, DVec3::new(2.0, -3.0, 4.0));
/// assert_eq!(mesh.bounds().size, DVec3::new(2.0, 3.0, 4.0));
/// ```
pub fn fit_to_size_with_tolerance(
    mesh: &mut MeshOutput,
    current: Bounds,
    size: DVec3,
    tolerance: f64,
) {
    if mesh.is_empty() {
        return;
    }
    let target = size.abs();
    let extent = current.size.abs();
    let axis_scale = |target: f64, extent: f64| {
        if extent < tolerance {
            0.0
        } else {
            target / extent
        }
    };
    let scale = DVec3::new(
        axis_scale(target.x, extent.x),
        axis_scale(target.y, extent.y),
        axis_scale(target.z, extent.z),
    );
    if scale == DVec3::ONE || scale == DVec3::ZERO {
        return;
    }
    let center = current.center;
    for p in mesh.positions_mut() {
        *p = (*p - center) * scale + center;
    }
}

/// Moves the origin of `transform` to `world_pivot`, shifting positions so
/// the geometry stays where it is in world space.
pub fn set_pivot(mesh: &mut MeshOutput, transform: &mut Transform, world_pivot: DVec3) {
    let offset = transform.inverse_transform_point(world_pivot);
    if offset != DVec3::ZERO {
        mesh.translate(-offset);
    }
    transform.position = world_pivot;
}

/// One side of a bounding box, used to place a resize handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsFace {
    pub center: DVec3,
    /// Outward unit normal, flipped on axes where the box size is negative.
    pub normal: DVec3,
    pub points: [DVec3; 4],
    /// False when the side has no area.
    pub is_valid: bool,
}

/// The six sides of `bounds`, ordered `+X, -X, +Y, -Y, +Z, -Z`.
///
/// Extents are multiplied by `scale` first, so handles can follow an object
/// scale without rebuilding the box.
pub fn bounds_faces(bounds: Bounds, scale: DVec3) -> [BoundsFace; 6] {
    let extents = (bounds.extents() * scale).abs();
    let signs = sign_vector(bounds.size * scale);
    let axes = [DVec3::X, DVec3::Y, DVec3::Z];

    std::array::from_fn(|i| {
        let axis = i / 2;
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        let normal = axes[axis] * signs[axis] * direction;
        let u = axes[(axis + 1) % 3] * extents[(axis + 1) % 3];
        let v = axes[(axis + 2) % 3] * extents[(axis + 2) % 3];
        let center = bounds.center + normal * extents[axis];
        BoundsFace {
            center,
            normal,
            points: [center - u - v, center + u - v, center - u + v, center + u + v],
            is_valid: u.length() > EPSILON && v.length() > EPSILON,
        }
    })
}
