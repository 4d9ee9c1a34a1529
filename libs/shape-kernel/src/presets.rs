//! # Parameter Presets
//!
//! Remembers the last parameters used for each shape kind so that switching
//! back to a kind restores them instead of the defaults.

use crate::registry::{Shape, ShapeKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Last-used parameters per shape kind.
///
/// # Example
///
/// ```rust
/// use shape_kernel::{Shape, ShapeKind, ShapePresets};
/// use shape_kernel::shapes::SphereParams;
///
/// let mut presets = ShapePresets::new();
/// let sphere = Shape::Sphere(SphereParams { subdivisions: 1, smooth: false });
/// presets.save(&sphere);
/// assert_eq!(presets.create(ShapeKind::Sphere), sphere);
/// assert_eq!(presets.create(ShapeKind::Cube), Shape::new(ShapeKind::Cube));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePresets {
    saved: BTreeMap<ShapeKind, Shape>,
}

impl ShapePresets {
    /// Creates an empty preset table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `shape` as the last-used parameters for its kind.
    pub fn save(&mut self, shape: &Shape) {
        debug!(kind = %shape.kind(), "saving shape preset");
        self.saved.insert(shape.kind(), shape.clone());
    }

    /// Returns the saved parameters for `kind`, if any.
    pub fn get(&self, kind: ShapeKind) -> Option<&Shape> {
        self.saved.get(&kind)
    }

    /// Creates a shape of `kind`: defaults overlaid with the saved preset.
    pub fn create(&self, kind: ShapeKind) -> Shape {
        let mut shape = Shape::new(kind);
        if let Some(saved) = self.saved.get(&kind) {
            shape.copy_parameters(saved);
        }
        shape
    }

    /// Forgets every saved preset.
    pub fn reset(&mut self) {
        self.saved.clear();
    }

    /// Returns true if no preset was saved.
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

impl Shape {
    /// Returns the shape to use after the user picks `kind`.
    ///
    /// Keeps the current parameters when the kind does not change; otherwise
    /// builds the new kind from `presets`.
    pub fn switch_kind(&self, kind: ShapeKind, presets: &ShapePresets) -> Shape {
        if self.kind() == kind {
            self.clone()
        } else {
            presets.create(kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ConeParams, PipeParams};

    #[test]
    fn test_create_without_preset_gives_defaults() {
        let presets = ShapePresets::new();
        for kind in ShapeKind::ALL {
            assert_eq!(presets.create(kind), Shape::new(kind));
        }
    }

    #[test]
    fn test_save_overwrites_previous() {
        let mut presets = ShapePresets::new();
        presets.save(&Shape::Cone(ConeParams {
            sides: 10,
            smooth: true,
        }));
        let latest = Shape::Cone(ConeParams {
            sides: 20,
            smooth: false,
        });
        presets.save(&latest);
        assert_eq!(presets.get(ShapeKind::Cone), Some(&latest));
    }

    #[test]
    fn test_reset() {
        let mut presets = ShapePresets::new();
        presets.save(&Shape::new(ShapeKind::Door));
        assert!(!presets.is_empty());
        presets.reset();
        assert!(presets.is_empty());
        assert_eq!(presets.get(ShapeKind::Door), None);
    }

    #[test]
    fn test_switch_kind() {
        let mut presets = ShapePresets::new();
        let pipe = Shape::Pipe(PipeParams {
            sides: 12,
            ..Default::default()
        });
        presets.save(&pipe);

        let custom_cone = Shape::Cone(ConeParams {
            sides: 7,
            smooth: false,
        });
        assert_eq!(custom_cone.switch_kind(ShapeKind::Cone, &presets), custom_cone);
        assert_eq!(custom_cone.switch_kind(ShapeKind::Pipe, &presets), pipe);
        assert_eq!(
            custom_cone.switch_kind(ShapeKind::Arch, &presets),
            Shape::new(ShapeKind::Arch)
        );
    }
}
