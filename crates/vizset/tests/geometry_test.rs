//! Integration tests for parsing and validating geometry primitives.

use vizset::*;

#[test]
fn point_parses_and_round_trips() {
    let json = r#"{"type":"Point3D","x":1.5,"y":-2.0,"z":0.25}"#;
    let point: Point3D = from_json_str(json).unwrap();
    assert_eq!(point, Point3D::new(1.5, -2.0, 0.25));

    let out = to_json_string(&point).unwrap();
    assert!(out.contains(r#""type":"Point3D""#));
    let back: Point3D = from_json_str(&out).unwrap();
    assert_eq!(back, point);
}

#[test]
fn tag_fidelity_is_enforced() {
    // A Vector3D payload must not parse as a Point3D even though the
    // field shapes are identical.
    let json = r#"{"type":"Vector3D","x":0.0,"y":0.0,"z":1.0}"#;
    assert!(from_json_str::<Point3D>(json).is_err());
    assert!(from_json_str::<Vector3D>(json).is_ok());
}

#[test]
fn ray_requires_exactly_three_coordinates() {
    let flat = r#"{"type":"Ray3D","p":[0.0,0.0],"v":[1.0,0.0,0.0]}"#;
    assert!(matches!(
        from_json_str::<Ray3D>(flat),
        Err(SchemaError::FieldConstraint { .. })
    ));
    let ok = r#"{"type":"Ray3D","p":[0.0,0.0,0.0],"v":[1.0,0.0,0.0]}"#;
    assert!(from_json_str::<Ray3D>(ok).is_ok());
}

#[test]
fn polyline_needs_at_least_three_vertices() {
    let two = r#"{"type":"Polyline2D","vertices":[[0.0,0.0],[1.0,0.0]]}"#;
    assert!(matches!(
        from_json_str::<Polyline2D>(two),
        Err(SchemaError::FieldConstraint { .. })
    ));

    let three = r#"{"type":"Polyline2D","vertices":[[0.0,0.0],[1.0,0.0],[1.0,1.0]]}"#;
    let polyline: Polyline2D = from_json_str(three).unwrap();
    assert!(!polyline.interpolated);
}

#[test]
fn mesh_color_counts_accept_any_topology_match() {
    let base = r#"{
        "type": "Mesh2D",
        "vertices": [[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,1.0]],
        "faces": [[0,1,2],[0,2,3]],
        "colors": [COLORS]
    }"#;
    let color = r#"{"type":"Color","r":10,"g":20,"b":30}"#;
    for count in [1usize, 2, 4] {
        let colors = vec![color; count].join(",");
        let json = base.replace("COLORS", &colors);
        assert!(
            from_json_str::<Mesh2D>(&json).is_ok(),
            "colors of length {count} should be accepted"
        );
    }
    let colors = vec![color; 3].join(",");
    let err = from_json_str::<Mesh2D>(&base.replace("COLORS", &colors)).unwrap_err();
    match err {
        SchemaError::StructuralMismatch { count, valid, .. } => {
            assert_eq!(count, 3);
            assert_eq!(valid, vec![1, 2, 4]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn mesh_faces_are_triangles_or_quads() {
    let json = r#"{
        "type": "Mesh2D",
        "vertices": [[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,1.0],[0.5,2.0]],
        "faces": [[0,1,2,3,4]]
    }"#;
    assert!(from_json_str::<Mesh2D>(json).is_err());
}

#[test]
fn polyface_carries_optional_edge_information() {
    let json = r#"{
        "type": "Polyface3D",
        "vertices": [[0.0,0.0,0.0],[1.0,0.0,0.0],[1.0,1.0,0.0],[0.0,1.0,0.0]],
        "face_indices": [[[0,1,2,3]]],
        "edge_information": {
            "type": "PolyfaceEdgeInfo",
            "edge_indices": [[0,1],[1,2],[2,3],[3,0]],
            "edge_types": [0,0,0,0]
        }
    }"#;
    let polyface: Polyface3D = from_json_str(json).unwrap();
    let info = polyface.edge_information.as_ref().unwrap();
    assert_eq!(info.edge_indices.len(), info.edge_types.len());

    // Parallel arrays of different lengths are a structural mismatch.
    let skewed = json.replace("[0,0,0,0]", "[0,0,0]");
    assert!(matches!(
        from_json_str::<Polyface3D>(&skewed),
        Err(SchemaError::StructuralMismatch { .. })
    ));
}

#[test]
fn arc_angles_are_range_checked() {
    let json = r#"{"type":"Arc2D","c":[0.0,0.0],"r":1.0,"a1":0.0,"a2":9.0}"#;
    assert!(matches!(
        from_json_str::<Arc2D>(json),
        Err(SchemaError::FieldConstraint { .. })
    ));
    let circle = r#"{"type":"Arc2D","c":[0.0,0.0],"r":1.0}"#;
    let arc: Arc2D = from_json_str(circle).unwrap();
    assert_eq!(arc.a1, 0.0);
    assert_eq!(arc.a2, std::f64::consts::TAU);
}

#[test]
fn geometry_union_dispatches_every_family_member() {
    let payloads = [
        r#"{"type":"Vector2D","x":1.0,"y":2.0}"#,
        r#"{"type":"LineSegment3D","p":[0.0,0.0,0.0],"v":[0.0,0.0,1.0]}"#,
        r#"{"type":"Plane","n":[0.0,0.0,1.0],"o":[0.0,0.0,0.0]}"#,
        r#"{"type":"Sphere","center":[0.0,0.0,0.0],"radius":2.0}"#,
        r#"{"type":"Cone","vertex":[0.0,0.0,1.0],"axis":[0.0,0.0,-1.0],"angle":0.5}"#,
        r#"{"type":"Cylinder","center":[0.0,0.0,0.0],"axis":[0.0,0.0,1.0],"radius":0.5}"#,
        r#"{"type":"Face3D","boundary":[[0.0,0.0,0.0],[1.0,0.0,0.0],[1.0,1.0,0.0]]}"#,
    ];
    for payload in payloads {
        let geometry: Geometry = from_json_str(payload).unwrap();
        let round = to_json_string(&geometry).unwrap();
        let back: Geometry = from_json_str(&round).unwrap();
        assert_eq!(back, geometry);
    }
}

#[test]
fn face_holes_are_cardinality_checked() {
    let json = r#"{
        "type": "Face3D",
        "boundary": [[0.0,0.0,0.0],[4.0,0.0,0.0],[4.0,4.0,0.0],[0.0,4.0,0.0]],
        "holes": [[[1.0,1.0,0.0],[2.0,1.0,0.0]]]
    }"#;
    assert!(from_json_str::<Face3D>(json).is_err());
}
