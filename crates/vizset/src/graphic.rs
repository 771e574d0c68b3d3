//! The graphic container: values plus the legend, bounds, and metadata
//! needed to draw any colored graphic.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use vizset_core::validate::{check_count_in, check_min_items, Validate};
use vizset_core::{Result, SchemaError, UserData};
use vizset_geometry::{Geometry, Mesh2D, Mesh3D, Point3D, Polyface3D};

use crate::data_type::AnyDataType;
use crate::legend::LegendParameters;

vizset_core::fixed_tag!(pub struct GraphicContainerTag = "GraphicContainer";);

/// The geometry a graphic container's values are aligned with: a single
/// mesh-like object colored per face or per vertex, or a list of
/// geometries colored one value apiece.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicGeometry {
    /// A 2D mesh; values align with its faces or vertices.
    Mesh2D(Mesh2D),
    /// A 3D mesh; values align with its faces or vertices.
    Mesh3D(Mesh3D),
    /// A polyface; values align with its face groups or vertices.
    Polyface3D(Polyface3D),
    /// A list of geometries; values align with the list.
    List(Vec<Geometry>),
}

impl Serialize for GraphicGeometry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Mesh2D(mesh) => mesh.serialize(serializer),
            Self::Mesh3D(mesh) => mesh.serialize(serializer),
            Self::Polyface3D(polyface) => polyface.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for GraphicGeometry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)
                .map(Self::List)
                .map_err(D::Error::custom),
            serde_json::Value::Object(ref map) => {
                let tag = map
                    .get("type")
                    .and_then(serde_json::Value::as_str)
                    .ok_or_else(|| D::Error::custom("missing or non-string type tag"))?
                    .to_owned();
                match tag.as_str() {
                    "Mesh2D" => {
                        return serde_json::from_value(value)
                            .map(Self::Mesh2D)
                            .map_err(D::Error::custom);
                    }
                    "Mesh3D" => {
                        return serde_json::from_value(value)
                            .map(Self::Mesh3D)
                            .map_err(D::Error::custom);
                    }
                    "Polyface3D" => {
                        return serde_json::from_value(value)
                            .map(Self::Polyface3D)
                            .map_err(D::Error::custom);
                    }
                    _ => {}
                }
                Err(D::Error::custom(SchemaError::UnknownVariant {
                    family: "GraphicGeometry".to_owned(),
                    tag,
                }))
            }
            _ => Err(D::Error::custom(
                "expected a geometry object or a list of geometry objects",
            )),
        }
    }
}

impl Validate for GraphicGeometry {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Mesh2D(mesh) => mesh.validate(),
            Self::Mesh3D(mesh) => mesh.validate(),
            Self::Polyface3D(polyface) => polyface.validate(),
            Self::List(items) => items.validate(),
        }
    }
}

/// A container binding numerical values to geometry, a bounding box, and
/// legend metadata, from which a rendering client derives legends, titles,
/// and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphicContainer {
    /// Wire discriminant, always `"GraphicContainer"`.
    #[serde(rename = "type", default)]
    pub type_tag: GraphicContainerTag,
    /// Values used to generate the legend and colors, at least 1.
    pub values: Vec<f64>,
    /// Optional geometry aligned with the values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GraphicGeometry>,
    /// Minimum of the bounding box around the graphic geometry. Required
    /// unless the geometry is a mesh or polyface the box can be derived
    /// from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_point: Option<Point3D>,
    /// Maximum of the bounding box around the graphic geometry. Required
    /// unless the geometry is a mesh or polyface the box can be derived
    /// from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_point: Option<Point3D>,
    /// Optional parameters overriding the default legend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_parameters: Option<LegendParameters>,
    /// Optional data type used to assign default legend properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<AnyDataType>,
    /// Optional unit for the values. When empty, the default unit of the
    /// data type applies.
    #[serde(default)]
    pub unit: String,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl GraphicContainer {
    /// Creates a container for values aligned with a mesh-like geometry.
    pub fn new(values: Vec<f64>, geometry: GraphicGeometry) -> Self {
        Self {
            type_tag: GraphicContainerTag,
            values,
            geometry: Some(geometry),
            min_point: None,
            max_point: None,
            legend_parameters: None,
            data_type: None,
            unit: String::new(),
            user_data: None,
        }
    }
}

impl Validate for GraphicContainer {
    fn validate(&self) -> Result<()> {
        check_min_items("GraphicContainer.values", self.values.len(), 1)?;
        self.geometry.validate()?;
        self.legend_parameters.validate()?;
        self.data_type.validate()?;

        match &self.geometry {
            Some(GraphicGeometry::Mesh2D(mesh)) => check_count_in(
                "GraphicContainer.values",
                self.values.len(),
                &[mesh.faces.len(), mesh.vertices.len()],
            ),
            Some(GraphicGeometry::Mesh3D(mesh)) => check_count_in(
                "GraphicContainer.values",
                self.values.len(),
                &[mesh.faces.len(), mesh.vertices.len()],
            ),
            Some(GraphicGeometry::Polyface3D(polyface)) => check_count_in(
                "GraphicContainer.values",
                self.values.len(),
                &[polyface.face_indices.len(), polyface.vertices.len()],
            ),
            other => {
                // Without a mesh-like geometry there is nothing to derive
                // the bounding box from, so the corners must be explicit.
                if self.min_point.is_none() || self.max_point.is_none() {
                    return Err(SchemaError::field(
                        "GraphicContainer.min_point",
                        "min_point and max_point are required when the geometry \
                         is not a mesh or polyface",
                    ));
                }
                if let Some(GraphicGeometry::List(items)) = other {
                    check_count_in("GraphicContainer.values", self.values.len(), &[items.len()])?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizset_geometry::MeshFace;

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
    fn mesh_values_must_match_faces_or_vertices() {
        let per_face = GraphicContainer::new(vec![0.0, 1.0], GraphicGeometry::Mesh3D(quad_mesh()));
        assert!(per_face.validate().is_ok());
        let per_vertex =
            GraphicContainer::new(vec![0.0; 4], GraphicGeometry::Mesh3D(quad_mesh()));
        assert!(per_vertex.validate().is_ok());
        let skewed = GraphicContainer::new(vec![0.0; 3], GraphicGeometry::Mesh3D(quad_mesh()));
        assert!(matches!(
            skewed.validate(),
            Err(SchemaError::StructuralMismatch { .. })
        ));
    }

    #[test]
    fn point_lists_need_bounding_box_corners() {
        let points = GraphicGeometry::List(vec![
            Geometry::from(Point3D::new(0.0, 0.0, 0.0)),
            Geometry::from(Point3D::new(1.0, 0.0, 0.0)),
        ]);
        let mut container = GraphicContainer::new(vec![0.0, 1.0], points);
        assert!(container.validate().is_err());
        container.min_point = Some(Point3D::new(0.0, 0.0, 0.0));
        container.max_point = Some(Point3D::new(1.0, 0.0, 0.0));
        assert!(container.validate().is_ok());
        container.values.push(2.0);
        assert!(container.validate().is_err());
    }

    #[test]
    fn non_mesh_single_geometry_is_rejected() {
        let err = serde_json::from_str::<GraphicGeometry>(
            r#"{"type":"Point3D","x":0.0,"y":0.0,"z":0.0}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn list_geometry_round_trips() {
        let points = GraphicGeometry::List(vec![
            Geometry::from(Point3D::new(0.0, 0.0, 0.0)),
            Geometry::from(Point3D::new(1.0, 0.0, 0.0)),
        ]);
        let json = serde_json::to_string(&points).unwrap();
        assert!(json.starts_with('['));
        let back: GraphicGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, points);
    }
}
