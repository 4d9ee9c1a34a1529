//! # Procedural Shape Component
//!
//! Ties a shape descriptor to the mesh it produced and keeps the bounds and
//! pivot bookkeeping consistent while the editor resizes, rotates or swaps
//! the shape.
//!
//! Positions in the owned mesh are local to [`ProceduralShape::transform`].

use crate::bounds::Bounds;
use crate::math::sign_vector;
use crate::mesh::MeshOutput;
use crate::pivot::{fit_to_size_with_tolerance, set_pivot, PivotLocation, Transform};
use crate::registry::Shape;
use crate::shapes::bottom_most_vertex;
use config::constants::{KernelConfig, EPSILON};
use glam::{DQuat, DVec3};
use tracing::trace;

/// A shape placed in the world together with its generated mesh.
///
/// # Example
///
/// ```rust
/// use shape_kernel::{ProceduralShape, Shape, ShapeKind};
/// use glam::DVec3;
///
/// let mut component = ProceduralShape::new(Shape::new(ShapeKind::Cube));
/// component.set_size(DVec3::new(2.0, 1.0, 3.0));
/// component.rebuild();
/// assert_eq!(component.mesh().bounds().size, DVec3::new(2.0, 1.0, 3.0));
/// assert!(component.is_editable());
/// ```
#[derive(Debug, Clone)]
pub struct ProceduralShape {
    shape: Shape,
    size: DVec3,
    rotation: DQuat,
    pivot_location: PivotLocation,
    pivot_position: DVec3,
    shape_box: Bounds,
    transform: Transform,
    mesh: MeshOutput,
    unmodified_version: u32,
    config: KernelConfig,
}

impl ProceduralShape {
    /// Creates a unit-sized component and builds its mesh.
    pub fn new(shape: Shape) -> Self {
        Self::with_config(shape, KernelConfig::default())
    }

    /// Creates a unit-sized component using `config` thresholds.
    pub fn with_config(shape: Shape, config: KernelConfig) -> Self {
        let mut component = Self {
            shape,
            size: DVec3::ONE,
            rotation: DQuat::IDENTITY,
            pivot_location: PivotLocation::Center,
            pivot_position: DVec3::ZERO,
            shape_box: Bounds::default(),
            transform: Transform::IDENTITY,
            mesh: MeshOutput::new(),
            unmodified_version: 0,
            config,
        };
        component.rebuild();
        component
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Mutable access to the shape parameters; call [`Self::rebuild`] after.
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn size(&self) -> DVec3 {
        self.size
    }

    /// Sets the requested size.
    ///
    /// A zero X or Z component is replaced by the configured minimum size,
    /// keeping the sign of the previous value. Y may be zero.
    pub fn set_size(&mut self, size: DVec3) {
        let previous = sign_vector(self.size);
        let min_size = self.config.min_size;
        let non_zero = |value: f64, sign: f64| if value == 0.0 { sign * min_size } else { value };
        self.size = DVec3::new(non_zero(size.x, previous.x), size.y, non_zero(size.z, previous.z));
    }

    pub fn rotation(&self) -> DQuat {
        self.rotation
    }

    /// Sets the shape rotation; call [`Self::rebuild`] after.
    pub fn set_rotation(&mut self, rotation: DQuat) {
        self.rotation = rotation;
    }

    pub fn pivot_location(&self) -> PivotLocation {
        self.pivot_location
    }

    pub fn set_pivot_location(&mut self, location: PivotLocation) {
        self.pivot_location = location;
    }

    /// Pivot position in the local space of the transform.
    pub fn pivot_local_position(&self) -> DVec3 {
        self.pivot_position
    }

    pub fn pivot_world_position(&self) -> DVec3 {
        self.transform.transform_point(self.pivot_position)
    }

    pub fn set_pivot_world_position(&mut self, world: DVec3) {
        self.pivot_position = self.transform.inverse_transform_point(world);
    }

    /// Bounds returned by the last rebuild, in local space.
    pub fn shape_box(&self) -> Bounds {
        self.shape_box
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn mesh(&self) -> &MeshOutput {
        &self.mesh
    }

    /// Mutable access for free-form edits. Editing positions ends
    /// [`Self::is_editable`].
    pub fn mesh_mut(&mut self) -> &mut MeshOutput {
        &mut self.mesh
    }

    /// Box the editor shows while resizing: the shape box center with the
    /// requested size, flattened when the shape box has no height.
    pub fn edition_bounds(&self) -> Bounds {
        let size = if self.shape_box.size.y.abs() < EPSILON {
            DVec3::new(self.size.x, 0.0, self.size.z)
        } else {
            self.size
        };
        Bounds::new(self.shape_box.center, size)
    }

    /// True while the mesh has not been changed since the last rebuild.
    pub fn is_editable(&self) -> bool {
        self.unmodified_version == self.mesh.version()
    }

    /// Regenerates the mesh, rebuilds the pivot and fits the mesh to size.
    pub fn rebuild(&mut self) {
        trace!(kind = %self.shape.kind(), size = ?self.size, "rebuilding component");
        self.shape_box = self.shape.rebuild(&mut self.mesh, self.size, self.rotation);
        self.rebuild_pivot();

        let fit_box = self.shape_box.abs();
        fit_to_size_with_tolerance(&mut self.mesh, fit_box, self.size, self.config.tolerance);
        self.unmodified_version = self.mesh.version();
    }

    /// Re-centers the pivot on the shape box, then rebuilds.
    pub fn update_component(&mut self) {
        self.reset_pivot();
        self.rebuild();
    }

    /// Adopts world-space `bounds` as the new shape box and size.
    pub fn update_bounds(&mut self, bounds: Bounds) {
        self.shape_box.center = self.transform.inverse_transform_point(bounds.center);
        self.reset_pivot();
        self.set_size(bounds.size);
        self.rebuild();
    }

    /// Places the shape in world-space `bounds` with `rotation`, as when the
    /// user drags out a new shape.
    pub fn rebuild_with(&mut self, bounds: Bounds, rotation: DQuat) {
        self.set_size(bounds.size);
        self.transform.position = bounds.center;
        self.transform.rotation = rotation;
        self.rebuild();
    }

    /// Swaps the shape descriptor.
    ///
    /// Flat shapes drop the box height; going back to a solid shape with a
    /// first-corner pivot lifts the box so its base stays on the pivot.
    pub fn set_shape(&mut self, shape: Shape, location: PivotLocation) {
        self.pivot_location = location;
        self.shape = shape;

        if self.shape.kind().is_flat() {
            self.shape_box.center.y = 0.0;
            self.shape_box.size.y = 0.0;
            self.size.y = 0.0;
        } else if location == PivotLocation::FirstCorner
            && self.shape_box.size.y == 0.0
            && self.size.y != 0.0
        {
            self.shape_box.center.y += self.size.y * 0.5;
            self.shape_box.size.y = self.size.y;
        }
        self.reset_pivot();
        self.rebuild();
    }

    /// Applies `delta` on top of the current rotation, keeping the shape
    /// inside its box.
    pub fn rotate_inside_bounds(&mut self, delta: DQuat) {
        self.reset_pivot();
        self.rotation = delta * self.rotation;
        self.rebuild();
    }

    /// Moves the object origin to `world_pivot` without moving the geometry.
    pub fn set_pivot(&mut self, world_pivot: DVec3) {
        let shape_box_world = self.transform.transform_point(self.shape_box.center);
        let pivot_world = self.pivot_world_position();
        set_pivot(&mut self.mesh, &mut self.transform, world_pivot);
        self.shape_box.center = self.transform.inverse_transform_point(shape_box_world);
        self.pivot_position = self.transform.inverse_transform_point(pivot_world);
    }

    fn reset_pivot(&mut self) {
        let center = self.transform.transform_point(self.shape_box.center);
        let pivot_world = self.pivot_world_position();
        set_pivot(&mut self.mesh, &mut self.transform, center);
        self.pivot_position = self.transform.inverse_transform_point(pivot_world);
        self.shape_box =
            self.shape
                .update_bounds(&self.mesh, self.size, self.rotation, self.shape_box);
    }

    fn rebuild_pivot(&mut self) {
        let box_center = self.transform.transform_point(self.shape_box.center);
        let pivot_world = self.pivot_world_position();
        let target = match self.pivot_location {
            PivotLocation::Center => self.transform.transform_point(self.mesh.bounds().center),
            PivotLocation::FirstCorner => match self.shape {
                Shape::Sphere(_) => bottom_most_vertex(self.mesh.positions())
                    .map(|i| self.transform.transform_point(self.mesh.positions()[i]))
                    .unwrap_or(pivot_world),
                _ => pivot_world,
            },
        };
        set_pivot(&mut self.mesh, &mut self.transform, target);
        self.shape_box.center = self.transform.inverse_transform_point(box_center);
        self.pivot_position = self.transform.inverse_transform_point(pivot_world);
        self.shape_box =
            self.shape
                .update_bounds(&self.mesh, self.size, self.rotation, self.shape_box);
    }
}
