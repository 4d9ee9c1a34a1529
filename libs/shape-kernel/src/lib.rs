//! # Shape Kernel
//!
//! Parametric solid-mesh generation for interactive editing.
//! Turns a shape descriptor (kind, parameters, size, rotation) into vertex
//! positions and faces, and keeps the bounds and pivot bookkeeping an editor
//! needs to resize the shape without corrupting its topology.
//!
//! ## Architecture
//!
//! ```text
//! math, mesh, bounds → shapes/* → registry (Shape) → component (ProceduralShape)
//!                                                          ↑
//!                                     pivot (fit-to-size, set_pivot)
//! ```
//!
//! ## Shapes
//!
//! Cube, Prism, Plane, Sprite, Cylinder, Cone, Pipe, Arch, Door, Torus,
//! Sphere and Stairs. Generators never fail; out-of-range parameters are
//! clamped and logged through `tracing` at debug level.
//!
//! ## Usage
//!
//! ```rust
//! use shape_kernel::{MeshOutput, Shape, ShapeKind};
//! use glam::{DQuat, DVec3};
//!
//! let mut mesh = MeshOutput::new();
//! let bounds = Shape::new(ShapeKind::Stairs).rebuild(&mut mesh, DVec3::ONE, DQuat::IDENTITY);
//! assert!(mesh.validate().is_ok());
//! assert!(bounds.size.y > 0.0);
//! ```

pub mod bounds;
pub mod component;
pub mod error;
pub mod math;
pub mod mesh;
pub mod pivot;
pub mod presets;
pub mod registry;
pub mod shapes;

pub use bounds::Bounds;
pub use component::ProceduralShape;
pub use error::{ShapeError, ShapeResult};
pub use mesh::{Face, MeshOutput, UvProjection};
pub use pivot::{bounds_faces, fit_to_size, BoundsFace, PivotLocation, Transform};
pub use presets::ShapePresets;
pub use registry::{copy_parameters, Shape, ShapeKind};
