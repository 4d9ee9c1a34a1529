//! Serialized shape descriptor tests.

use shape_kernel::shapes::{CylinderParams, StairsParams, StepGenerationMode};
use shape_kernel::{Shape, ShapeKind, ShapePresets};

#[test]
fn shape_is_tagged_by_kind() {
    let shape = Shape::Cylinder(CylinderParams {
        axis_divisions: 8,
        ..Default::default()
    });
    let value = serde_json::to_value(&shape).expect("serialize cylinder");
    assert_eq!(value["kind"], "Cylinder");
    assert_eq!(value["params"]["axis_divisions"], 8);

    let back: Shape = serde_json::from_value(value).expect("deserialize cylinder");
    assert_eq!(back, shape);
}

#[test]
fn stairs_descriptor_from_json() {
    let json = r#"{
        "kind": "Stairs",
        "params": {
            "mode": "Height",
            "steps_count": 10,
            "steps_height": 0.25,
            "homogeneous": false,
            "circumference": 90.0,
            "inner_radius": 0.5,
            "sides": true
        }
    }"#;
    let shape: Shape = serde_json::from_str(json).expect("parse stairs");
    assert_eq!(shape.kind(), ShapeKind::Stairs);
    match shape {
        Shape::Stairs(StairsParams {
            mode,
            circumference,
            ..
        }) => {
            assert_eq!(mode, StepGenerationMode::Height);
            assert_eq!(circumference, 90.0);
        }
        other => panic!("expected stairs, got {other:?}"),
    }
}

#[test]
fn unknown_kind_is_rejected() {
    let json = r#"{ "kind": "Teapot", "params": {} }"#;
    assert!(serde_json::from_str::<Shape>(json).is_err());
}

#[test]
fn presets_survive_serialization() {
    let mut presets = ShapePresets::new();
    presets.save(&Shape::Cylinder(CylinderParams {
        axis_divisions: 12,
        ..Default::default()
    }));
    presets.save(&Shape::new(ShapeKind::Torus));

    let json = serde_json::to_string(&presets).expect("serialize presets");
    let back: ShapePresets = serde_json::from_str(&json).expect("deserialize presets");
    assert_eq!(back, presets);
    assert_eq!(
        back.create(ShapeKind::Cylinder),
        Shape::Cylinder(CylinderParams {
            axis_divisions: 12,
            ..Default::default()
        })
    );
}
