//! # Shape Generators
//!
//! One module per shape family. Every generator takes the magnitude of the
//! requested size, builds the mesh in local space centered on the origin and
//! never fails: out-of-range parameters are clamped and logged.
//!
//! Mirroring for negative sizes and the shape rotation are applied afterwards
//! by [`crate::registry::Shape::rebuild`].

pub mod arch;
pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod door;
pub mod pipe;
pub mod plane;
pub mod prism;
pub mod sphere;
pub mod sprite;
pub mod stairs;
pub mod torus;

pub use arch::{create_arch, ArchParams};
pub use cone::{create_cone, ConeParams};
pub use cube::{create_cube, CubeParams};
pub use cylinder::{create_cylinder, cylinder_radius, CylinderParams};
pub use door::{create_door, DoorParams};
pub use pipe::{create_pipe, PipeParams};
pub use plane::{create_plane, PlaneParams};
pub use prism::{create_prism, PrismParams};
pub use sphere::{bottom_most_vertex, create_sphere, sphere_radius, SphereParams};
pub use sprite::{create_sprite, SpriteParams};
pub use stairs::{create_stairs, resolve_steps, StairsParams, StepGenerationMode, StepLayout};
pub use torus::{create_torus, TorusParams};
