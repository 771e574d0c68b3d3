//! Integration tests for the wire contract and error taxonomy.

use vizset::*;

#[test]
fn broken_json_is_a_malformed_payload() {
    let err = from_json_slice::<VisualizationSet>(b"{\"identifier\": ").unwrap_err();
    assert!(matches!(err, SchemaError::MalformedPayload(_)));
}

#[test]
fn unknown_tags_surface_as_unknown_variant() {
    let err = from_json_str::<Geometry>(r#"{"type":"Torus","r1":1.0,"r2":0.2}"#).unwrap_err();
    match err {
        SchemaError::UnknownVariant { family, tag } => {
            assert_eq!(family, "Geometry");
            assert_eq!(tag, "Torus");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nested_unknown_tags_are_still_typed() {
    // The bad tag sits two levels deep, inside a list field of a
    // container; it must still come back as UnknownVariant.
    let json = r#"{
        "type": "AnalysisGeometry",
        "identifier": "grid",
        "geometry": [{"type":"Blob","x":0.0}],
        "data_sets": [{"type":"VisualizationData","values":[1.0]}]
    }"#;
    let err = from_json_str::<AnalysisGeometry>(json).unwrap_err();
    match err {
        SchemaError::UnknownVariant { family, tag } => {
            assert_eq!(family, "Geometry");
            assert_eq!(tag, "Blob");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_tags_on_union_payloads_are_field_constraints() {
    let err = from_json_str::<Geometry>(r#"{"x":0.0,"y":0.0}"#).unwrap_err();
    assert!(matches!(err, SchemaError::FieldConstraint { .. }));
}

#[test]
fn unknown_keys_are_a_hard_error() {
    let err =
        from_json_str::<Point3D>(r#"{"type":"Point3D","x":0.0,"y":0.0,"z":0.0,"w":1.0}"#)
            .unwrap_err();
    assert!(matches!(err, SchemaError::FieldConstraint { .. }));
}

#[test]
fn wrong_scalar_types_are_field_constraints() {
    let err = from_json_str::<Point3D>(r#"{"type":"Point3D","x":"0","y":0.0,"z":0.0}"#)
        .unwrap_err();
    assert!(matches!(err, SchemaError::FieldConstraint { .. }));
}

#[test]
fn parse_is_deterministic() {
    let payload = r#"{"type":"Polyline2D","vertices":[[0.0,0.0],[1.0,0.0]]}"#;
    let first = from_json_str::<Polyline2D>(payload).unwrap_err().to_string();
    let second = from_json_str::<Polyline2D>(payload).unwrap_err().to_string();
    assert_eq!(first, second);
}

#[test]
fn serialized_defaults_parse_back_identically() {
    // Fields left at their documented defaults survive a full circuit.
    let json = r#"{
        "type": "AnalysisGeometry",
        "identifier": "grid",
        "geometry": [{"type":"Point3D","x":0.0,"y":0.0,"z":0.0}],
        "data_sets": [{"type":"VisualizationData","values":[1.0]}]
    }"#;
    let analysis: AnalysisGeometry = from_json_str(json).unwrap();
    assert_eq!(analysis.active_data, 0);
    assert_eq!(analysis.display_mode, DisplayMode::Surface);
    assert!(!analysis.hidden);

    let round = to_json_string(&analysis).unwrap();
    let back: AnalysisGeometry = from_json_str(&round).unwrap();
    assert_eq!(back, analysis);
}

#[test]
fn values_from_intermediate_json_parse_too() {
    let value = serde_json::json!({
        "type": "Color",
        "r": 12,
        "g": 200,
        "b": 44
    });
    let color: Color = from_json_value(value).unwrap();
    assert_eq!(color, Color::new(12, 200, 44));
}
