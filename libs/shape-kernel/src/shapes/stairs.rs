//! # Stairs
//!
//! Straight or curved staircases. Steps are laid out either from a count or
//! from a target step height; a non-zero circumference sweeps the stairs
//! around the Y axis instead of running them along +Z.

use crate::math::{clamp_param, clamp_scalar, wrap_degrees};
use crate::mesh::MeshOutput;
use config::constants::{
    EPSILON, MIN_SIZE, STAIRS_MAX_CIRCUMFERENCE, STAIRS_MAX_STEPS, STAIRS_MIN_STEP_HEIGHT,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the number of steps is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepGenerationMode {
    /// Use `steps_count` steps of equal height.
    #[default]
    Count,
    /// Derive the count from `steps_height`.
    Height,
}

/// Staircase layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairsParams {
    pub mode: StepGenerationMode,
    /// Step count in [`StepGenerationMode::Count`], `1..=256`.
    pub steps_count: u32,
    /// Target step height in [`StepGenerationMode::Height`], at least `0.01`.
    pub steps_height: f64,
    /// In height mode, spread the total height evenly over the steps instead
    /// of adding a shorter remainder step on top.
    pub homogeneous: bool,
    /// Swept angle in degrees, `-360..=360`; zero gives straight stairs.
    pub circumference: f64,
    /// Radius of the inner edge of curved stairs.
    pub inner_radius: f64,
    /// Emit side walls and the back face.
    pub sides: bool,
}

impl Default for StairsParams {
    fn default() -> Self {
        Self {
            mode: StepGenerationMode::Count,
            steps_count: 10,
            steps_height: 0.2,
            homogeneous: true,
            circumference: 0.0,
            inner_radius: 0.0,
            sides: true,
        }
    }
}

/// Cumulative step heights from the floor, starting at `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepLayout {
    heights: Vec<f64>,
}

impl StepLayout {
    fn uniform(count: u32, total_height: f64) -> Self {
        let heights = (0..=count)
            .map(|i| total_height * f64::from(i) / f64::from(count))
            .collect();
        Self { heights }
    }

    /// Number of steps.
    #[inline]
    pub fn count(&self) -> usize {
        self.heights.len() - 1
    }

    /// Height of the top of step `i - 1`, i.e. the bottom of step `i`.
    #[inline]
    pub fn height(&self, i: usize) -> f64 {
        self.heights[i]
    }

    /// All cumulative heights, `count() + 1` values.
    #[inline]
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }
}

/// Resolves the step heights for a staircase of `total_height`.
///
/// Never yields fewer than 1 or more than 256 steps; whatever the mode, the
/// last cumulative height equals `total_height`.
///
/// # Example
///
/// ```rust
/// use shape_kernel::shapes::{resolve_steps, StairsParams, StepGenerationMode};
///
/// let params = StairsParams {
///     mode: StepGenerationMode::Height,
///     steps_height: 0.3,
///     homogeneous: false,
///     ..Default::default()
/// };
/// let layout = resolve_steps(&params, 1.0);
/// assert_eq!(layout.count(), 4);
/// assert!((layout.height(3) - 0.9).abs() < 1e-9);
/// ```
pub fn resolve_steps(params: &StairsParams, total_height: f64) -> StepLayout {
    match params.mode {
        StepGenerationMode::Count => {
            let count = clamp_param("steps_count", params.steps_count, 1, STAIRS_MAX_STEPS);
            StepLayout::uniform(count, total_height)
        }
        StepGenerationMode::Height => {
            let step_height = clamp_scalar(
                "steps_height",
                params.steps_height,
                STAIRS_MIN_STEP_HEIGHT,
                f64::MAX,
            );
            // Ratios a hair below a whole number count as that number.
            // Saturating float-to-int cast keeps huge ratios in range.
            let full_steps = (total_height / step_height + EPSILON).floor() as u32;

            if params.homogeneous {
                let count = clamp_param("steps_count", full_steps, 1, STAIRS_MAX_STEPS);
                return StepLayout::uniform(count, total_height);
            }

            if full_steps == 0 {
                return StepLayout::uniform(1, total_height);
            }
            let remainder = total_height - f64::from(full_steps) * step_height;
            let has_remainder = remainder > EPSILON;
            let count = full_steps.saturating_add(u32::from(has_remainder));
            if count > STAIRS_MAX_STEPS {
                debug!("clamping step count from {count} to {STAIRS_MAX_STEPS}");
                return StepLayout::uniform(STAIRS_MAX_STEPS, total_height);
            }

            let mut heights: Vec<f64> = (0..=full_steps)
                .map(|i| f64::from(i) * step_height)
                .collect();
            if has_remainder {
                heights.push(total_height);
            } else if let Some(last) = heights.last_mut() {
                *last = total_height;
            }
            StepLayout { heights }
        }
    }
}

/// Creates a staircase of `size`.
///
/// Straight stairs climb along +Z inside the box centered at the origin.
/// Curved stairs wind around Y starting on -X, with the stair width taken
/// from `size.x`. A negative circumference winds the other way.
pub fn create_stairs(size: DVec3, params: &StairsParams) -> MeshOutput {
    let height = size.y.max(MIN_SIZE);
    let layout = resolve_steps(params, height);
    let circumference = clamp_scalar(
        "circumference",
        params.circumference,
        -STAIRS_MAX_CIRCUMFERENCE,
        STAIRS_MAX_CIRCUMFERENCE,
    );

    if circumference.abs() < EPSILON {
        return straight_stairs(size, height, &layout, params.sides);
    }

    let inner_radius = clamp_scalar("inner_radius", params.inner_radius, 0.0, f64::MAX);
    let mut mesh = curved_stairs(
        size.x.max(MIN_SIZE),
        height,
        inner_radius,
        circumference.abs(),
        &layout,
        params.sides,
    );
    if circumference < 0.0 {
        mesh.scale(DVec3::new(-1.0, 1.0, 1.0));
        mesh.reverse_faces();
    }
    mesh
}

const QUAD: [u32; 6] = [0, 1, 2, 1, 3, 2];
const QUAD_REVERSED: [u32; 6] = [2, 1, 0, 2, 3, 1];
const TRIANGLE: [u32; 3] = [0, 1, 2];
const TRIANGLE_REVERSED: [u32; 3] = [2, 1, 0];

fn straight_stairs(size: DVec3, height: f64, layout: &StepLayout, sides: bool) -> MeshOutput {
    let width = size.x.max(MIN_SIZE);
    let depth = size.z.max(MIN_SIZE);
    let offset = DVec3::new(width, height, depth) * -0.5;
    let steps = layout.count();
    let z = |i: usize| depth * i as f64 / steps as f64;
    let at = |x: f64, y: f64, z: f64| DVec3::new(x, y, z) + offset;

    let mut mesh = MeshOutput::with_capacity(steps * 22 + 4, steps * 4 + 1);
    for i in 0..steps {
        let (y0, y1) = (layout.height(i), layout.height(i + 1));
        let (z0, z1) = (z(i), z(i + 1));
        // riser
        mesh.add_quad([at(width, y0, z0), at(0.0, y0, z0), at(width, y1, z0), at(0.0, y1, z0)]);
        // tread
        mesh.add_quad([at(width, y1, z0), at(0.0, y1, z0), at(width, y1, z1), at(0.0, y1, z1)]);
    }

    if !sides {
        return mesh;
    }

    for (side, x) in [0.0, width].into_iter().enumerate() {
        let (quad, triangle) = if side == 0 {
            (QUAD, TRIANGLE_REVERSED)
        } else {
            (QUAD_REVERSED, TRIANGLE)
        };
        let texture_group = side as i32 + 1;
        for i in 0..steps {
            let y0 = layout.height(i.max(1));
            let y1 = layout.height(i + 1);
            let (z0, z1) = (z(i), z(i + 1));
            mesh.add_polygon(
                &[at(x, 0.0, z0), at(x, 0.0, z1), at(x, y0, z0), at(x, y1, z1)],
                &quad,
            )
            .texture_group = texture_group;

            if i > 0 {
                mesh.add_polygon(&[at(x, y0, z0), at(x, y1, z0), at(x, y1, z1)], &triangle)
                    .texture_group = texture_group;
            }
        }
    }

    mesh.add_quad([
        at(0.0, 0.0, depth),
        at(width, 0.0, depth),
        at(0.0, height, depth),
        at(width, height, depth),
    ]);
    mesh
}

fn curved_stairs(
    width: f64,
    height: f64,
    inner_radius: f64,
    circumference: f64,
    layout: &StepLayout,
    sides: bool,
) -> MeshOutput {
    let steps = layout.count();
    let no_inner_side = inner_radius < EPSILON;
    let outer_radius = inner_radius + width;
    let sweep = circumference.to_radians();
    let angle = |i: usize| sweep * i as f64 / steps as f64;
    let direction = |a: f64| DVec3::new(-a.cos(), 0.0, a.sin());
    let shift = DVec3::new(0.0, -height * 0.5, 0.0);
    let at = |a: f64, radius: f64, y: f64| direction(a) * radius + DVec3::Y * y + shift;

    let mut mesh = MeshOutput::with_capacity(steps * 22 + 4, steps * 4 + 1);
    for i in 0..steps {
        let (a0, a1) = (angle(i), angle(i + 1));
        let (h0, h1) = (layout.height(i), layout.height(i + 1));

        mesh.add_quad([
            at(a0, inner_radius, h0),
            at(a0, outer_radius, h0),
            at(a0, inner_radius, h1),
            at(a0, outer_radius, h1),
        ]);

        let tread = if no_inner_side {
            mesh.add_triangle([
                at(a0, inner_radius, h1),
                at(a0, outer_radius, h1),
                at(a1, outer_radius, h1),
            ])
        } else {
            mesh.add_polygon(
                &[
                    at(a0, inner_radius, h1),
                    at(a0, outer_radius, h1),
                    at(a1, outer_radius, h1),
                    at(a1, inner_radius, h1),
                ],
                &[0, 1, 2, 0, 2, 3],
            )
        };
        tread.uv.rotation = wrap_degrees(-(a0 + a1).to_degrees() * 0.5);
    }

    if !sides {
        return mesh;
    }

    let first_side = usize::from(no_inner_side);
    for side in first_side..2 {
        let (radius, quad, triangle) = if side == 0 {
            (inner_radius, QUAD_REVERSED, TRIANGLE)
        } else {
            (outer_radius, QUAD, TRIANGLE_REVERSED)
        };
        let group = side as i32 + 1;
        for i in 0..steps {
            let (a0, a1) = (angle(i), angle(i + 1));
            let y0 = layout.height(i.max(1));
            let y1 = layout.height(i + 1);
            mesh.add_polygon(
                &[
                    at(a0, radius, 0.0),
                    at(a1, radius, 0.0),
                    at(a0, radius, y0),
                    at(a1, radius, y1),
                ],
                &quad,
            )
            .smoothing_group = group;

            if i > 0 {
                mesh.add_polygon(
                    &[at(a0, radius, y0), at(a0, radius, y1), at(a1, radius, y1)],
                    &triangle,
                )
                .smoothing_group = group;
            }
        }
    }

    mesh.add_polygon(
        &[
            at(sweep, inner_radius, 0.0),
            at(sweep, outer_radius, 0.0),
            at(sweep, inner_radius, height),
            at(sweep, outer_radius, height),
        ],
        &QUAD_REVERSED,
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn height_mode(step_height: f64, homogeneous: bool) -> StairsParams {
        StairsParams {
            mode: StepGenerationMode::Height,
            steps_height: step_height,
            homogeneous,
            ..Default::default()
        }
    }

    #[test]
    fn test_count_mode_layout() {
        let layout = resolve_steps(&StairsParams::default(), 2.0);
        assert_eq!(layout.count(), 10);
        assert_abs_diff_eq!(layout.height(1), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(layout.height(10), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_count_mode_clamped() {
        let params = StairsParams {
            steps_count: 1000,
            ..Default::default()
        };
        assert_eq!(resolve_steps(&params, 1.0).count(), 256);

        let params = StairsParams {
            steps_count: 0,
            ..Default::default()
        };
        assert_eq!(resolve_steps(&params, 1.0).count(), 1);
    }

    #[test]
    fn test_height_mode_homogeneous() {
        let layout = resolve_steps(&height_mode(0.3, true), 1.0);
        assert_eq!(layout.count(), 3);
        assert_abs_diff_eq!(layout.height(1), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_height_mode_remainder_step() {
        let layout = resolve_steps(&height_mode(0.3, false), 1.0);
        assert_eq!(layout.count(), 4);
        assert_abs_diff_eq!(layout.height(1), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(layout.height(4), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_height_mode_exact_fit_has_no_remainder() {
        let layout = resolve_steps(&height_mode(0.25, false), 1.0);
        assert_eq!(layout.count(), 4);
    }

    #[test]
    fn test_height_mode_tolerates_float_ratio() {
        // 0.3 / 0.1 evaluates just below 3
        for homogeneous in [true, false] {
            let layout = resolve_steps(&height_mode(0.1, homogeneous), 0.3);
            assert_eq!(layout.count(), 3);
            assert_abs_diff_eq!(layout.height(3), 0.3, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_step_taller_than_stairs_gives_one_step() {
        for homogeneous in [true, false] {
            let layout = resolve_steps(&height_mode(5.0, homogeneous), 1.0);
            assert_eq!(layout.count(), 1);
            assert_abs_diff_eq!(layout.height(1), 1.0);
        }
    }

    #[test]
    fn test_height_mode_too_many_steps() {
        let layout = resolve_steps(&height_mode(0.01, false), 100.0);
        assert_eq!(layout.count(), 256);
        assert_abs_diff_eq!(layout.height(256), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_straight_stairs_counts() {
        let params = StairsParams {
            steps_count: 4,
            ..Default::default()
        };
        let mesh = create_stairs(DVec3::new(2.0, 2.0, 4.0), &params);
        // 2 per step, 2 sides of (4 quads + 3 triangles), back
        assert_eq!(mesh.face_count(), 8 + 2 * 7 + 1);
        assert!(mesh.validate().is_ok());

        let bounds = mesh.bounds();
        assert_abs_diff_eq!(bounds.center.length(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds.size.z, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_straight_stairs_without_sides() {
        let params = StairsParams {
            steps_count: 4,
            sides: false,
            ..Default::default()
        };
        let mesh = create_stairs(DVec3::ONE, &params);
        assert_eq!(mesh.face_count(), 8);
    }

    #[test]
    fn test_straight_stairs_orientation() {
        let params = StairsParams {
            steps_count: 3,
            ..Default::default()
        };
        let mesh = create_stairs(DVec3::new(2.0, 2.0, 2.0), &params);
        let positions = mesh.positions();
        let faces = mesh.faces();
        assert_abs_diff_eq!(faces[0].normal(positions).z, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(faces[1].normal(positions).y, 1.0, epsilon = 1e-12);
        // first side runs along -X, second along +X
        assert_abs_diff_eq!(faces[6].normal(positions).x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(faces[7].normal(positions).x, -1.0, epsilon = 1e-12);
        assert_eq!(faces[6].texture_group, 1);
        assert_abs_diff_eq!(faces[11].normal(positions).x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(faces[12].normal(positions).x, 1.0, epsilon = 1e-12);
        assert_eq!(faces[11].texture_group, 2);
        let back = faces.last().map(|f| f.normal(positions));
        assert_abs_diff_eq!(back.unwrap_or_default().z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_curved_stairs_counts() {
        let params = StairsParams {
            steps_count: 6,
            circumference: 90.0,
            inner_radius: 1.0,
            ..Default::default()
        };
        let mesh = create_stairs(DVec3::new(1.0, 2.0, 1.0), &params);
        assert_eq!(mesh.face_count(), 12 + 2 * 11 + 1);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_curved_stairs_without_inner_radius() {
        let params = StairsParams {
            steps_count: 6,
            circumference: 180.0,
            ..Default::default()
        };
        let mesh = create_stairs(DVec3::new(1.0, 2.0, 1.0), &params);
        // triangular treads and only the outer wall
        assert_eq!(mesh.faces()[1].triangle_count(), 1);
        assert_eq!(mesh.face_count(), 12 + 11 + 1);
    }

    #[test]
    fn test_curved_stairs_orientation() {
        let params = StairsParams {
            steps_count: 4,
            circumference: 90.0,
            inner_radius: 1.0,
            ..Default::default()
        };
        let mesh = create_stairs(DVec3::new(1.0, 2.0, 1.0), &params);
        let positions = mesh.positions();
        let faces = mesh.faces();
        assert!(faces[1].normal(positions).y > 0.999);
        // inner wall faces the axis, outer wall faces away
        for face in &faces[8..15] {
            let p = positions[face.indices()[0] as usize];
            assert!(face.normal(positions).dot(DVec3::new(p.x, 0.0, p.z)) < 0.0);
        }
        for face in &faces[15..22] {
            let p = positions[face.indices()[0] as usize];
            assert!(face.normal(positions).dot(DVec3::new(p.x, 0.0, p.z)) > 0.0);
        }
    }

    #[test]
    fn test_tread_uv_rotation_follows_arc() {
        let params = StairsParams {
            steps_count: 2,
            circumference: 90.0,
            inner_radius: 1.0,
            sides: false,
            ..Default::default()
        };
        let mesh = create_stairs(DVec3::new(1.0, 1.0, 1.0), &params);
        assert_abs_diff_eq!(mesh.faces()[1].uv.rotation, 337.5, epsilon = 1e-9);
        assert_abs_diff_eq!(mesh.faces()[3].uv.rotation, 292.5, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_circumference_mirrors() {
        let params = StairsParams {
            steps_count: 4,
            circumference: 90.0,
            inner_radius: 0.5,
            ..Default::default()
        };
        let mirrored = StairsParams {
            circumference: -90.0,
            ..params
        };
        let size = DVec3::new(1.0, 1.0, 1.0);
        let a = create_stairs(size, &params);
        let b = create_stairs(size, &mirrored);
        assert_eq!(a.vertex_count(), b.vertex_count());
        for (p, q) in a.positions().iter().zip(b.positions()) {
            assert_abs_diff_eq!(p.x, -q.x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.z, q.z, epsilon = 1e-12);
        }
        for (f, g) in a.faces().iter().zip(b.faces()) {
            let reversed: Vec<u32> = f.indices().iter().rev().copied().collect();
            assert_eq!(g.indices(), reversed.as_slice());
        }
    }
}
