//! # Mesh Output Value
//!
//! The value every generator writes into: ordered vertex positions and ordered
//! faces. Positions are never welded, so a cube has 24 of them (4 per face)
//! and each face can carry its own UV projection.

use crate::bounds::Bounds;
use crate::error::{ShapeError, ShapeResult};
use config::constants::SMOOTHING_GROUP_NONE;
use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Triangulation used for every quad: the first and last corners are
/// opposite, so `(0, 1, 2)` and `(1, 3, 2)` share the `1-2` diagonal.
pub const QUAD_TRIANGLES: [u32; 6] = [0, 1, 2, 1, 3, 2];

/// Point of the UV rectangle that stays fixed when the projection is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anchor {
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
    #[default]
    None,
}

/// How projected coordinates are mapped onto the texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fill {
    Fit,
    #[default]
    Tile,
    Stretch,
}

/// Per-face UV projection settings.
///
/// The kernel only records these; computing texture coordinates is the job of
/// the editing mesh that consumes the output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvProjection {
    pub anchor: Anchor,
    pub fill: Fill,
    pub offset: DVec2,
    /// Rotation in degrees.
    pub rotation: f64,
    pub scale: DVec2,
    pub use_world_space: bool,
    pub flip_u: bool,
    pub flip_v: bool,
    pub swap_uv: bool,
}

impl Default for UvProjection {
    fn default() -> Self {
        Self {
            anchor: Anchor::None,
            fill: Fill::Tile,
            offset: DVec2::ZERO,
            rotation: 0.0,
            scale: DVec2::ONE,
            use_world_space: false,
            flip_u: false,
            flip_v: false,
            swap_uv: false,
        }
    }
}

/// A logical surface stored as a pre-triangulated index list.
///
/// # Example
///
/// ```rust
/// use shape_kernel::mesh::Face;
///
/// let face = Face::quad(4);
/// assert_eq!(face.indices(), &[4, 5, 6, 5, 7, 6]);
/// assert_eq!(face.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    indices: Vec<u32>,
    /// Faces sharing a positive group share vertex normals.
    pub smoothing_group: i32,
    pub uv: UvProjection,
    /// Set when the generator computed `uv` itself.
    pub manual_uv: bool,
    /// Faces sharing a group are unwrapped together; `-1` means none.
    pub texture_group: i32,
    pub submesh_index: u32,
}

impl Face {
    /// Creates a face from an index list with default attributes.
    pub fn new(indices: Vec<u32>) -> Self {
        Self {
            indices,
            smoothing_group: SMOOTHING_GROUP_NONE,
            uv: UvProjection::default(),
            manual_uv: false,
            texture_group: -1,
            submesh_index: 0,
        }
    }

    /// Creates a quad face over four consecutive positions starting at `base`.
    pub fn quad(base: u32) -> Self {
        Self::new(QUAD_TRIANGLES.iter().map(|i| base + i).collect())
    }

    /// Returns the triangulated index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles in the index list.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns true if the face shares normals with its neighbours.
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.smoothing_group > SMOOTHING_GROUP_NONE
    }

    /// Reverses the whole index list, flipping the winding of every triangle.
    pub fn reverse(&mut self) {
        self.indices.reverse();
    }

    /// Unit normal of the first non-degenerate triangle, or zero.
    pub fn normal(&self, positions: &[DVec3]) -> DVec3 {
        self.triangles()
            .filter_map(|[a, b, c]| {
                let p0 = *positions.get(a as usize)?;
                let p1 = *positions.get(b as usize)?;
                let p2 = *positions.get(c as usize)?;
                let n = (p1 - p0).cross(p2 - p0);
                (n.length_squared() > 0.0).then(|| n.normalize())
            })
            .next()
            .unwrap_or(DVec3::ZERO)
    }
}

/// Vertex positions plus faces, overwritten on every rebuild.
///
/// # Example
///
/// ```rust
/// use shape_kernel::MeshOutput;
/// use glam::DVec3;
///
/// let mut mesh = MeshOutput::new();
/// mesh.add_quad([
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
/// ]);
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshOutput {
    positions: Vec<DVec3>,
    faces: Vec<Face>,
    version: u32,
}

impl MeshOutput {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(position_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(position_count),
            faces: Vec::with_capacity(face_count),
            version: 0,
        }
    }

    /// Returns the number of positions.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the total number of triangles across all faces.
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(Face::triangle_count).sum()
    }

    /// Returns true if the mesh has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns a reference to the positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Mutable access to the positions for external editing.
    ///
    /// Counts as a modification: the version is bumped.
    pub fn positions_mut(&mut self) -> &mut [DVec3] {
        self.touch();
        &mut self.positions
    }

    /// Monotonic counter bumped by every write.
    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Adds a position and returns its index.
    pub fn add_position(&mut self, position: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Adds a face and returns it for attribute tweaks.
    pub fn add_face(&mut self, face: Face) -> &mut Face {
        let index = self.faces.len();
        self.faces.push(face);
        &mut self.faces[index]
    }

    /// Appends four corners and a quad face triangulated as [`QUAD_TRIANGLES`].
    pub fn add_quad(&mut self, corners: [DVec3; 4]) -> &mut Face {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.add_face(Face::quad(base))
    }

    /// Appends three corners and a single-triangle face.
    pub fn add_triangle(&mut self, corners: [DVec3; 3]) -> &mut Face {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.add_face(Face::new(vec![base, base + 1, base + 2]))
    }

    /// Appends positions and a face whose indices are local to `points`.
    pub fn add_polygon(&mut self, points: &[DVec3], local_indices: &[u32]) -> &mut Face {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(points);
        self.add_face(Face::new(local_indices.iter().map(|i| base + i).collect()))
    }

    /// Replaces positions and faces with those of `other`, bumping the version.
    pub fn replace_with(&mut self, other: MeshOutput) {
        self.positions = other.positions;
        self.faces = other.faces;
        self.touch();
    }

    /// Removes all geometry, bumping the version.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.faces.clear();
        self.touch();
    }

    /// Reverses the winding of every face.
    pub fn reverse_faces(&mut self) {
        for face in &mut self.faces {
            face.reverse();
        }
        self.touch();
    }

    /// Multiplies every position component-wise by `factor`.
    pub fn scale(&mut self, factor: DVec3) {
        for p in &mut self.positions {
            *p *= factor;
        }
        self.touch();
    }

    /// Rotates every position about the origin.
    pub fn rotate(&mut self, rotation: DQuat) {
        for p in &mut self.positions {
            *p = rotation * *p;
        }
        self.touch();
    }

    /// Translates every position.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.positions {
            *p += offset;
        }
        self.touch();
    }

    /// Axis-aligned bounds of the positions, zero-sized at the origin if empty.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.positions.iter().copied())
    }

    /// Checks that every face describes whole triangles over existing positions.
    pub fn validate(&self) -> ShapeResult<()> {
        let vertex_count = self.positions.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if face.indices.len() % 3 != 0 {
                return Err(ShapeError::invalid_topology(format!(
                    "face {face_index} has {} indices, not a multiple of 3",
                    face.indices.len()
                )));
            }
            if let Some(&index) = face.indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(ShapeError::IndexOutOfRange {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
