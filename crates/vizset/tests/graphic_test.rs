//! Integration tests for the graphic container.

use vizset::*;

fn quad_mesh_json() -> &'static str {
    r#"{
        "type": "Mesh3D",
        "vertices": [[0.0,0.0,0.0],[1.0,0.0,0.0],[1.0,1.0,0.0],[0.0,1.0,0.0]],
        "faces": [[0,1,2],[0,2,3]]
    }"#
}

#[test]
fn mesh_container_aligns_values_to_faces_or_vertices() {
    let json = format!(
        r#"{{"type":"GraphicContainer","values":[0.0,1.0],"geometry":{}}}"#,
        quad_mesh_json()
    );
    let container: GraphicContainer = from_json_str(&json).unwrap();
    assert!(matches!(
        container.geometry,
        Some(GraphicGeometry::Mesh3D(_))
    ));

    let skewed = format!(
        r#"{{"type":"GraphicContainer","values":[0.0,1.0,2.0],"geometry":{}}}"#,
        quad_mesh_json()
    );
    assert!(matches!(
        from_json_str::<GraphicContainer>(&skewed),
        Err(SchemaError::StructuralMismatch { .. })
    ));
}

#[test]
fn geometry_lists_require_explicit_bounds() {
    let json = r#"{
        "type": "GraphicContainer",
        "values": [0.0, 1.0],
        "geometry": [
            {"type":"Point3D","x":0.0,"y":0.0,"z":0.0},
            {"type":"Point3D","x":1.0,"y":0.0,"z":0.0}
        ]
    }"#;
    assert!(from_json_str::<GraphicContainer>(json).is_err());

    let with_bounds = r#"{
        "type": "GraphicContainer",
        "values": [0.0, 1.0],
        "geometry": [
            {"type":"Point3D","x":0.0,"y":0.0,"z":0.0},
            {"type":"Point3D","x":1.0,"y":0.0,"z":0.0}
        ],
        "min_point": {"type":"Point3D","x":0.0,"y":0.0,"z":0.0},
        "max_point": {"type":"Point3D","x":1.0,"y":0.0,"z":0.0}
    }"#;
    let container: GraphicContainer = from_json_str(with_bounds).unwrap();
    assert!(matches!(container.geometry, Some(GraphicGeometry::List(_))));
}

#[test]
fn bounds_alone_are_enough_without_geometry() {
    let json = r#"{
        "type": "GraphicContainer",
        "values": [1.0, 2.0, 3.0],
        "min_point": {"type":"Point3D","x":0.0,"y":0.0,"z":0.0},
        "max_point": {"type":"Point3D","x":10.0,"y":10.0,"z":0.0}
    }"#;
    let container: GraphicContainer = from_json_str(json).unwrap();
    assert!(container.geometry.is_none());
}

#[test]
fn empty_values_are_rejected() {
    let json = r#"{
        "type": "GraphicContainer",
        "values": [],
        "min_point": {"type":"Point3D","x":0.0,"y":0.0,"z":0.0},
        "max_point": {"type":"Point3D","x":1.0,"y":1.0,"z":0.0}
    }"#;
    assert!(matches!(
        from_json_str::<GraphicContainer>(json),
        Err(SchemaError::FieldConstraint { .. })
    ));
}

#[test]
fn container_round_trips_with_legend_and_data_type() {
    let json = format!(
        r#"{{
            "type": "GraphicContainer",
            "values": [120.0, 95.5],
            "geometry": {},
            "legend_parameters": {{
                "type": "LegendParameters",
                "segment_count": 4,
                "vertical": false
            }},
            "data_type": {{
                "type": "GenericDataType",
                "name": "Glare Index",
                "base_unit": "DGP"
            }},
            "unit": "DGP"
        }}"#,
        quad_mesh_json()
    );
    let container: GraphicContainer = from_json_str(&json).unwrap();
    let round = to_json_string(&container).unwrap();
    let back: GraphicContainer = from_json_str(&round).unwrap();
    assert_eq!(back, container);

    match back.data_type.as_ref().unwrap() {
        AnyDataType::GenericDataType(generic) => {
            assert_eq!(generic.base_unit, "DGP");
            assert!(generic.point_in_time);
        }
        AnyDataType::DataType(_) => panic!("expected the generic form"),
    }
}

#[test]
fn cumulative_point_in_time_data_types_are_rejected() {
    let json = r#"{
        "type": "GraphicContainer",
        "values": [1.0],
        "min_point": {"type":"Point3D","x":0.0,"y":0.0,"z":0.0},
        "max_point": {"type":"Point3D","x":1.0,"y":1.0,"z":0.0},
        "data_type": {
            "type": "GenericDataType",
            "name": "Rain",
            "base_unit": "mm",
            "point_in_time": true,
            "cumulative": true
        }
    }"#;
    assert!(matches!(
        from_json_str::<GraphicContainer>(json),
        Err(SchemaError::FieldConstraint { .. })
    ));
}
