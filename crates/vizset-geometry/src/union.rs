//! The geometry family union.

use vizset_core::tagged_union;

use crate::geometry2d::{
    Arc2D, LineSegment2D, Mesh2D, Point2D, Polygon2D, Polyline2D, Ray2D, Vector2D,
};
use crate::geometry3d::{
    Arc3D, Cone, Cylinder, Face3D, LineSegment3D, Mesh3D, Plane, Point3D, Polyface3D, Polyline3D,
    Ray3D, Sphere, Vector3D,
};

tagged_union! {
    /// Closed union over every geometric primitive, discriminated by the
    /// `type` tag and nothing else.
    pub enum Geometry {
        Vector2D,
        Point2D,
        Ray2D,
        LineSegment2D,
        Polyline2D,
        Arc2D,
        Polygon2D,
        Mesh2D,
        Vector3D,
        Point3D,
        Ray3D,
        Plane,
        LineSegment3D,
        Polyline3D,
        Arc3D,
        Face3D,
        Mesh3D,
        Polyface3D,
        Sphere,
        Cone,
        Cylinder,
    }
}

impl Geometry {
    /// Face and vertex counts when the variant is a mesh.
    ///
    /// Only `Mesh2D` and `Mesh3D` expose topology counts here; every other
    /// variant (polyfaces included) contributes nothing to value-alignment
    /// denominators.
    pub fn mesh_counts(&self) -> Option<(usize, usize)> {
        match self {
            Self::Mesh2D(mesh) => Some((mesh.faces.len(), mesh.vertices.len())),
            Self::Mesh3D(mesh) => Some((mesh.faces.len(), mesh.vertices.len())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizset_core::{SchemaError, Validate};

    #[test]
    fn tags_are_unique_within_the_family() {
        let mut seen = std::collections::HashSet::new();
        for tag in Geometry::TAGS {
            assert!(seen.insert(tag), "duplicate tag {tag}");
        }
        assert_eq!(Geometry::TAGS.len(), 21);
    }

    #[test]
    fn dispatches_on_the_tag() {
        let json = r#"{"type":"Point3D","x":1.0,"y":2.0,"z":3.0}"#;
        let geometry: Geometry = serde_json::from_str(json).unwrap();
        assert_eq!(geometry, Geometry::Point3D(Point3D::new(1.0, 2.0, 3.0)));
        assert_eq!(geometry.type_tag(), "Point3D");
    }

    #[test]
    fn unknown_tags_are_reported_by_family() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"type":"Mesh5D","vertices":[]}"#).unwrap();
        let err = Geometry::from_tagged_value(value).unwrap_err();
        match err {
            SchemaError::UnknownVariant { family, tag } => {
                assert_eq!(family, "Geometry");
                assert_eq!(tag, "Mesh5D");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn serialization_reembeds_the_tag() {
        let geometry = Geometry::from(Vector2D::new(0.0, 1.0));
        let json = serde_json::to_string(&geometry).unwrap();
        assert!(json.contains(r#""type":"Vector2D""#));
        let back: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, geometry);
    }

    #[test]
    fn validation_dispatches_to_the_variant() {
        let short = Geometry::from(Polyline2D::new(vec![[0.0, 0.0], [1.0, 1.0]]));
        assert!(short.validate().is_err());
    }
}
