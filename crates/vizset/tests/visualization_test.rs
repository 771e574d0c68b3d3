//! Integration tests for the scene-level containers.

use vizset::*;

fn two_points() -> Vec<Geometry> {
    vec![
        Geometry::from(Point3D::new(0.0, 0.0, 0.0)),
        Geometry::from(Point3D::new(1.0, 0.0, 0.0)),
    ]
}

fn quad_mesh() -> Mesh3D {
    Mesh3D::new(
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        vec![MeshFace::Tri([0, 1, 2]), MeshFace::Tri([0, 2, 3])],
    )
}

#[test]
fn one_value_per_geometry_aligns() {
    let analysis = AnalysisGeometry::new(
        "points",
        two_points(),
        vec![VisualizationData::new(vec![20.5, 21.0])],
    );
    assert!(analysis.validate().is_ok());
}

#[test]
fn misaligned_values_name_every_denominator() {
    let analysis = AnalysisGeometry::new(
        "points",
        two_points(),
        vec![VisualizationData::new(vec![1.0, 2.0, 3.0])],
    );
    let err = analysis.validate().unwrap_err();
    match err {
        SchemaError::AlignmentMismatch {
            values,
            geometries,
            faces,
            vertices,
        } => {
            assert_eq!(values, 3);
            assert_eq!(geometries, 2);
            assert_eq!(faces, 0);
            assert_eq!(vertices, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn mesh_entries_contribute_face_and_vertex_counts() {
    let geometry = vec![Geometry::from(quad_mesh())];
    // 1 geometry entry, 2 faces, 4 vertices - all three lengths align.
    for count in [1usize, 2, 4] {
        let analysis = AnalysisGeometry::new(
            "grid",
            geometry.clone(),
            vec![VisualizationData::new(vec![0.0; count])],
        );
        assert!(analysis.validate().is_ok(), "length {count} should align");
    }
    let analysis = AnalysisGeometry::new(
        "grid",
        geometry,
        vec![VisualizationData::new(vec![0.0; 3])],
    );
    assert!(matches!(
        analysis.validate(),
        Err(SchemaError::AlignmentMismatch { .. })
    ));
}

#[test]
fn polyfaces_do_not_contribute_topology_counts() {
    let polyface = Polyface3D::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
        vec![vec![vec![0, 1, 2]]],
    );
    let analysis = AnalysisGeometry::new(
        "shell",
        vec![Geometry::from(polyface)],
        vec![VisualizationData::new(vec![0.5])],
    );
    // One value for one geometry entry; the polyface's 3 vertices are not
    // a valid denominator.
    let (geometries, faces, vertices) = analysis.topology_counts();
    assert_eq!((geometries, faces, vertices), (1, 0, 0));
    assert!(analysis.validate().is_ok());

    let by_vertex = AnalysisGeometry::new(
        "shell",
        analysis.geometry.clone(),
        vec![VisualizationData::new(vec![0.0; 3])],
    );
    assert!(by_vertex.validate().is_err());
}

#[test]
fn later_data_sets_must_match_the_first_length() {
    // 5 geometry entries with data sets of lengths 5 and 6: rejected even
    // though a 6th value could never align anyway, and also rejected when
    // 6 *would* be a valid count on its own.
    let geometry: Vec<Geometry> = (0..5)
        .map(|i| Geometry::from(Point3D::new(f64::from(i), 0.0, 0.0)))
        .collect();
    let analysis = AnalysisGeometry::new(
        "sensors",
        geometry,
        vec![
            VisualizationData::new(vec![0.0; 5]),
            VisualizationData::new(vec![0.0; 6]),
        ],
    );
    let err = analysis.validate().unwrap_err();
    match err {
        SchemaError::StructuralMismatch { count, valid, .. } => {
            assert_eq!(count, 6);
            assert_eq!(valid, vec![5]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn identifiers_are_pattern_checked() {
    let analysis = AnalysisGeometry::new(
        "not valid!",
        two_points(),
        vec![VisualizationData::new(vec![0.0, 1.0])],
    );
    assert!(matches!(
        analysis.validate(),
        Err(SchemaError::FieldConstraint { .. })
    ));
}

#[test]
fn data_sets_carry_legend_and_data_type_metadata() {
    let json = r#"{
        "type": "VisualizationData",
        "values": [18.0, 21.5],
        "legend_parameters": {
            "type": "LegendParameters",
            "min": {"type": "Default"},
            "max": 30.0,
            "segment_count": 6
        },
        "data_type": {
            "type": "DataType",
            "data_type": "AirTemperature",
            "name": "Air Temperature"
        },
        "unit": "C"
    }"#;
    let data: VisualizationData = from_json_str(json).unwrap();
    let legend = data.legend_parameters.as_ref().unwrap();
    assert!(legend.min.is_default());
    assert_eq!(legend.max, DefaultOr::Value(30.0));
    assert_eq!(legend.segment_count, DefaultOr::Value(6));
    let round = to_json_string(&data).unwrap();
    let back: VisualizationData = from_json_str(&round).unwrap();
    assert_eq!(back, data);
}

#[test]
fn metadata_mirrors_a_data_set_without_values() {
    let json = r#"{
        "type": "VisualizationMetaData",
        "data_type": {
            "type": "DataType",
            "data_type": "Irradiance",
            "name": "Solar Irradiance"
        },
        "unit": "W/m2"
    }"#;
    let metadata: VisualizationMetaData = from_json_str(json).unwrap();
    assert_eq!(metadata.unit, "W/m2");
    let round = to_json_string(&metadata).unwrap();
    let back: VisualizationMetaData = from_json_str(&round).unwrap();
    assert_eq!(back, metadata);
}

#[test]
fn full_set_round_trips_through_the_wire() {
    let mesh_analysis = AnalysisGeometry::new(
        "radiation-grid",
        vec![Geometry::from(quad_mesh())],
        vec![
            VisualizationData::new(vec![820.0, 745.5]),
            VisualizationData::new(vec![0.31, 0.58]),
        ],
    );

    let outline = DisplayPolyline3D::new(
        Polyline3D::new(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
        ]),
        Color::new(40, 40, 40),
    );
    let context = ContextGeometry::new("site-outline", vec![Display::from(outline)]);

    let mut set = VisualizationSet::new(
        "solar-study",
        vec![
            SceneGeometry::from(mesh_analysis),
            SceneGeometry::from(context),
        ],
    );
    set.units = Some(Units::Meters);
    set.display_name = Some("Solar Study :: Roof".to_owned());

    let payload = to_json_vec(&set).unwrap();
    let back: VisualizationSet = from_json_slice(&payload).unwrap();
    assert_eq!(back, set);
    assert_eq!(back.geometry[0].type_tag(), "AnalysisGeometry");
    assert_eq!(back.geometry[1].type_tag(), "ContextGeometry");
}

#[test]
fn scene_entries_discriminate_on_their_tag() {
    let err = from_json_str::<SceneGeometry>(r#"{"type":"ModelGeometry"}"#).unwrap_err();
    match err {
        SchemaError::UnknownVariant { family, tag } => {
            assert_eq!(family, "SceneGeometry");
            assert_eq!(tag, "ModelGeometry");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nested_failures_surface_from_set_validation() {
    // An invalid data set buried two levels deep fails the whole set.
    let analysis = AnalysisGeometry::new(
        "grid",
        two_points(),
        vec![VisualizationData::new(vec![])],
    );
    let set = VisualizationSet::new("study", vec![SceneGeometry::from(analysis)]);
    assert!(set.validate().is_err());
}

#[test]
fn validation_is_idempotent() {
    let analysis = AnalysisGeometry::new(
        "points",
        two_points(),
        vec![VisualizationData::new(vec![20.5, 21.0])],
    );
    let set = VisualizationSet::new("study", vec![SceneGeometry::from(analysis)]);
    assert!(set.validate().is_ok());
    assert!(set.validate().is_ok());
}
