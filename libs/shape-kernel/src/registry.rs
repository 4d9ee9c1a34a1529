//! # Shape Registry
//!
//! The closed set of shape kinds and the single dispatch point from a shape
//! descriptor to its generator. This module also applies the steps every
//! generator shares: mirroring for negative sizes, rotation, and bounds.

use crate::bounds::Bounds;
use crate::error::ShapeError;
use crate::math::{flips_winding, sign_vector};
use crate::mesh::MeshOutput;
use crate::shapes::{
    create_arch, create_cone, create_cube, create_cylinder, create_door, create_pipe,
    create_plane, create_prism, create_sphere, create_sprite, create_stairs, create_torus,
    cylinder_radius, sphere_radius, ArchParams, ConeParams, CubeParams, CylinderParams,
    DoorParams, PipeParams, PlaneParams, PrismParams, SphereParams, SpriteParams, StairsParams,
    TorusParams,
};
use config::constants::MIN_SIZE;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Tag identifying a shape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeKind {
    Cube,
    Prism,
    Plane,
    Sprite,
    Cylinder,
    Cone,
    Pipe,
    Arch,
    Door,
    Torus,
    Sphere,
    Stairs,
}

impl ShapeKind {
    /// Every kind, in menu order.
    pub const ALL: [ShapeKind; 12] = [
        ShapeKind::Cube,
        ShapeKind::Prism,
        ShapeKind::Plane,
        ShapeKind::Sprite,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Pipe,
        ShapeKind::Arch,
        ShapeKind::Door,
        ShapeKind::Torus,
        ShapeKind::Sphere,
        ShapeKind::Stairs,
    ];

    /// User-facing name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Prism => "Prism",
            ShapeKind::Plane => "Plane",
            ShapeKind::Sprite => "Sprite",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Pipe => "Pipe",
            ShapeKind::Arch => "Arch",
            ShapeKind::Door => "Door",
            ShapeKind::Torus => "Torus",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Stairs => "Stairs",
        }
    }

    /// Flat kinds have no thickness along Y.
    pub fn is_flat(self) -> bool {
        matches!(self, ShapeKind::Plane | ShapeKind::Sprite)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Parses a kind name, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_kernel::ShapeKind;
    ///
    /// assert_eq!("stairs".parse::<ShapeKind>().ok(), Some(ShapeKind::Stairs));
    /// assert!("Teapot".parse::<ShapeKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ShapeError::unknown_kind(name))
    }
}

/// A shape descriptor: its kind together with the kind's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum Shape {
    Cube(CubeParams),
    Prism(PrismParams),
    Plane(PlaneParams),
    Sprite(SpriteParams),
    Cylinder(CylinderParams),
    Cone(ConeParams),
    Pipe(PipeParams),
    Arch(ArchParams),
    Door(DoorParams),
    Torus(TorusParams),
    Sphere(SphereParams),
    Stairs(StairsParams),
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Cube(CubeParams)
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Shape::new(kind)
    }
}

impl Shape {
    /// Creates a shape of `kind` with default parameters.
    pub fn new(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Cube => Shape::Cube(CubeParams),
            ShapeKind::Prism => Shape::Prism(PrismParams),
            ShapeKind::Plane => Shape::Plane(PlaneParams::default()),
            ShapeKind::Sprite => Shape::Sprite(SpriteParams),
            ShapeKind::Cylinder => Shape::Cylinder(CylinderParams::default()),
            ShapeKind::Cone => Shape::Cone(ConeParams::default()),
            ShapeKind::Pipe => Shape::Pipe(PipeParams::default()),
            ShapeKind::Arch => Shape::Arch(ArchParams::default()),
            ShapeKind::Door => Shape::Door(DoorParams::default()),
            ShapeKind::Torus => Shape::Torus(TorusParams::default()),
            ShapeKind::Sphere => Shape::Sphere(SphereParams::default()),
            ShapeKind::Stairs => Shape::Stairs(StairsParams::default()),
        }
    }

    /// The kind tag of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cube(_) => ShapeKind::Cube,
            Shape::Prism(_) => ShapeKind::Prism,
            Shape::Plane(_) => ShapeKind::Plane,
            Shape::Sprite(_) => ShapeKind::Sprite,
            Shape::Cylinder(_) => ShapeKind::Cylinder,
            Shape::Cone(_) => ShapeKind::Cone,
            Shape::Pipe(_) => ShapeKind::Pipe,
            Shape::Arch(_) => ShapeKind::Arch,
            Shape::Door(_) => ShapeKind::Door,
            Shape::Torus(_) => ShapeKind::Torus,
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Stairs(_) => ShapeKind::Stairs,
        }
    }

    /// Builds the unmirrored, unrotated mesh for a non-negative size.
    fn generate(&self, size: DVec3) -> MeshOutput {
        match self {
            Shape::Cube(_) => create_cube(size),
            Shape::Prism(_) => create_prism(size),
            Shape::Plane(params) => create_plane(size, params),
            Shape::Sprite(_) => create_sprite(size),
            Shape::Cylinder(params) => create_cylinder(size, params),
            Shape::Cone(params) => create_cone(size, params),
            Shape::Pipe(params) => create_pipe(size, params),
            Shape::Arch(params) => create_arch(size, params),
            Shape::Door(params) => create_door(size, params),
            Shape::Torus(params) => create_torus(size, params),
            Shape::Sphere(params) => create_sphere(size, params),
            Shape::Stairs(params) => create_stairs(size, params),
        }
    }

    /// Size of the box some shapes report instead of their geometry's bounds.
    ///
    /// Cylinders report a square footprint so the mesh can later be fitted
    /// to an elliptical one; spheres report the cube around the sphere.
    fn explicit_box_size(&self, size: DVec3) -> Option<DVec3> {
        match self {
            Shape::Cylinder(_) => {
                let diameter = cylinder_radius(size) * 2.0;
                Some(DVec3::new(diameter, size.y.abs().max(MIN_SIZE), diameter))
            }
            Shape::Sphere(_) => Some(DVec3::splat(sphere_radius(size) * 2.0)),
            _ => None,
        }
    }

    /// Regenerates `output` for `size` and `rotation`, returning the shape box.
    ///
    /// Negative size components mirror the mesh; when an odd number of axes
    /// are mirrored every face is reversed so normals keep pointing outward.
    /// Never fails and fully overwrites `output`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_kernel::{MeshOutput, Shape, ShapeKind};
    /// use glam::{DQuat, DVec3};
    ///
    /// let mut mesh = MeshOutput::new();
    /// let cube = Shape::new(ShapeKind::Cube);
    /// let bounds = cube.rebuild(&mut mesh, DVec3::splat(2.0), DQuat::IDENTITY);
    /// assert_eq!(mesh.vertex_count(), 24);
    /// assert_eq!(bounds.size, DVec3::splat(2.0));
    /// ```
    pub fn rebuild(&self, output: &mut MeshOutput, size: DVec3, rotation: DQuat) -> Bounds {
        trace!(kind = %self.kind(), ?size, "rebuilding shape");

        let mut mesh = self.generate(size.abs());
        let signs = sign_vector(size);
        if signs != DVec3::ONE {
            mesh.scale(signs);
        }
        if flips_winding(size) {
            mesh.reverse_faces();
        }
        if rotation != DQuat::IDENTITY {
            mesh.rotate(rotation);
        }
        output.replace_with(mesh);

        match self.explicit_box_size(size) {
            Some(box_size) if self.kind() == ShapeKind::Cylinder => {
                Bounds::new(DVec3::ZERO, box_size).rotated(rotation)
            }
            Some(box_size) => Bounds::new(DVec3::ZERO, box_size),
            None => output.bounds(),
        }
    }

    /// Recomputes the shape box from `output` without regenerating it.
    ///
    /// Shapes with an explicit box keep its size and move it to the center of
    /// the geometry; an empty mesh keeps `current`.
    pub fn update_bounds(
        &self,
        output: &MeshOutput,
        size: DVec3,
        rotation: DQuat,
        current: Bounds,
    ) -> Bounds {
        if output.is_empty() {
            return current;
        }
        let mesh_bounds = output.bounds();
        match self.explicit_box_size(size) {
            Some(box_size) if self.kind() == ShapeKind::Cylinder => {
                let rotated = Bounds::new(DVec3::ZERO, box_size).rotated(rotation);
                Bounds::new(mesh_bounds.center, rotated.size)
            }
            Some(box_size) => Bounds::new(mesh_bounds.center, box_size),
            None => mesh_bounds,
        }
    }

    /// Copies the parameters of `other` into `self` when both share a kind.
    ///
    /// Returns false, leaving `self` untouched, for mismatched kinds.
    pub fn copy_parameters(&mut self, other: &Shape) -> bool {
        if self.kind() != other.kind() {
            debug!(
                from = %other.kind(),
                to = %self.kind(),
                "ignoring parameter copy between different shape kinds"
            );
            return false;
        }
        *self = other.clone();
        true
    }
}

/// Copies parameters from `from` into `to`; see [`Shape::copy_parameters`].
pub fn copy_parameters(from: &Shape, to: &mut Shape) -> bool {
    to.copy_parameters(from)
}
