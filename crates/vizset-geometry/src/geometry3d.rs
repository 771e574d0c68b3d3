//! Geometry primitives in 3D space.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use vizset_core::validate::{check_min_items, check_positive, Validate};
use vizset_core::{Color, Result, SchemaError};

use crate::geometry2d::check_angle;
use crate::mesh::{check_color_alignment, MeshFace};

vizset_core::fixed_tag!(pub struct Vector3DTag = "Vector3D";);
vizset_core::fixed_tag!(pub struct Point3DTag = "Point3D";);
vizset_core::fixed_tag!(pub struct Ray3DTag = "Ray3D";);
vizset_core::fixed_tag!(pub struct PlaneTag = "Plane";);
vizset_core::fixed_tag!(pub struct LineSegment3DTag = "LineSegment3D";);
vizset_core::fixed_tag!(pub struct Polyline3DTag = "Polyline3D";);
vizset_core::fixed_tag!(pub struct Arc3DTag = "Arc3D";);
vizset_core::fixed_tag!(pub struct Face3DTag = "Face3D";);
vizset_core::fixed_tag!(pub struct Mesh3DTag = "Mesh3D";);
vizset_core::fixed_tag!(pub struct Polyface3DTag = "Polyface3D";);
vizset_core::fixed_tag!(pub struct PolyfaceEdgeInfoTag = "PolyfaceEdgeInfo";);
vizset_core::fixed_tag!(pub struct SphereTag = "Sphere";);
vizset_core::fixed_tag!(pub struct ConeTag = "Cone";);
vizset_core::fixed_tag!(pub struct CylinderTag = "Cylinder";);

/// A vector in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vector3D {
    /// Wire discriminant, always `"Vector3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Vector3DTag,
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3D {
    /// Creates a vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            type_tag: Vector3DTag,
            x,
            y,
            z,
        }
    }
}

impl From<Vector3D> for DVec3 {
    fn from(v: Vector3D) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Vector3D::new(v.x, v.y, v.z)
    }
}

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point3D {
    /// Wire discriminant, always `"Point3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Point3DTag,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3D {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            type_tag: Point3DTag,
            x,
            y,
            z,
        }
    }
}

impl From<Point3D> for DVec3 {
    fn from(p: Point3D) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<DVec3> for Point3D {
    fn from(p: DVec3) -> Self {
        Point3D::new(p.x, p.y, p.z)
    }
}

/// A ray in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ray3D {
    /// Wire discriminant, always `"Ray3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Ray3DTag,
    /// Base point as 3 (x, y, z) values.
    pub p: [f64; 3],
    /// Direction vector as 3 (x, y, z) values.
    pub v: [f64; 3],
}

impl Ray3D {
    /// Creates a ray from a base point and direction.
    pub fn new(p: [f64; 3], v: [f64; 3]) -> Self {
        Self {
            type_tag: Ray3DTag,
            p,
            v,
        }
    }

    /// Base point as a vector type.
    pub fn point(&self) -> DVec3 {
        DVec3::from_array(self.p)
    }

    /// Direction as a vector type.
    pub fn direction(&self) -> DVec3 {
        DVec3::from_array(self.v)
    }
}

/// A plane, defined by a normal and an origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plane {
    /// Wire discriminant, always `"Plane"`.
    #[serde(rename = "type", default)]
    pub type_tag: PlaneTag,
    /// Normal vector as 3 (x, y, z) values.
    pub n: [f64; 3],
    /// Origin point as 3 (x, y, z) values.
    pub o: [f64; 3],
    /// Optional X axis as 3 (x, y, z) values; when absent the axis is
    /// chosen by the consuming interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<[f64; 3]>,
}

impl Plane {
    /// Creates a plane from a normal and origin, leaving the X axis to the
    /// consumer.
    pub fn new(n: [f64; 3], o: [f64; 3]) -> Self {
        Self {
            type_tag: PlaneTag,
            n,
            o,
            x: None,
        }
    }

    /// The world XY plane at the origin.
    pub fn world_xy() -> Self {
        Self::new([0.0, 0.0, 1.0], [0.0, 0.0, 0.0])
    }

    /// Normal as a vector type.
    pub fn normal(&self) -> DVec3 {
        DVec3::from_array(self.n)
    }

    /// Origin as a vector type.
    pub fn origin(&self) -> DVec3 {
        DVec3::from_array(self.o)
    }
}

/// A single line segment in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineSegment3D {
    /// Wire discriminant, always `"LineSegment3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: LineSegment3DTag,
    /// Base point as 3 (x, y, z) values.
    pub p: [f64; 3],
    /// Direction vector as 3 (x, y, z) values; the segment runs from `p`
    /// to `p + v`.
    pub v: [f64; 3],
}

impl LineSegment3D {
    /// Creates a segment from a base point and direction.
    pub fn new(p: [f64; 3], v: [f64; 3]) -> Self {
        Self {
            type_tag: LineSegment3DTag,
            p,
            v,
        }
    }

    /// Base point as a vector type.
    pub fn point(&self) -> DVec3 {
        DVec3::from_array(self.p)
    }

    /// Direction as a vector type.
    pub fn direction(&self) -> DVec3 {
        DVec3::from_array(self.v)
    }
}

/// A polyline in 3D space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Polyline3D {
    /// Wire discriminant, always `"Polyline3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Polyline3DTag,
    /// Vertices of the polyline, at least 3, each as 3 (x, y, z) values.
    pub vertices: Vec<[f64; 3]>,
    /// Whether the polyline should be interpolated between the vertices
    /// when translated to other interfaces.
    #[serde(default)]
    pub interpolated: bool,
}

impl Polyline3D {
    /// Creates a non-interpolated polyline.
    pub fn new(vertices: Vec<[f64; 3]>) -> Self {
        Self {
            type_tag: Polyline3DTag,
            vertices,
            interpolated: false,
        }
    }
}

impl Validate for Polyline3D {
    fn validate(&self) -> Result<()> {
        check_min_items("Polyline3D.vertices", self.vertices.len(), 3)
    }
}

/// A single arc or circle in 3D space, drawn in a plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Arc3D {
    /// Wire discriminant, always `"Arc3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Arc3DTag,
    /// Plane in which the arc lies, with the origin as the arc center.
    pub plane: Plane,
    /// Radius of the arc.
    pub radius: f64,
    /// Start angle in radians, between 0 and 2π.
    #[serde(default)]
    pub a1: f64,
    /// End angle in radians, between 0 and 2π.
    #[serde(default = "tau")]
    pub a2: f64,
}

fn tau() -> f64 {
    TAU
}

impl Arc3D {
    /// Creates a full circle in the given plane.
    pub fn circle(plane: Plane, radius: f64) -> Self {
        Self {
            type_tag: Arc3DTag,
            plane,
            radius,
            a1: 0.0,
            a2: TAU,
        }
    }
}

impl Validate for Arc3D {
    fn validate(&self) -> Result<()> {
        check_positive("Arc3D.radius", self.radius)?;
        check_angle("Arc3D.a1", self.a1)?;
        check_angle("Arc3D.a2", self.a2)
    }
}

/// A planar face in 3D space, with an outer boundary and optional holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Face3D {
    /// Wire discriminant, always `"Face3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Face3DTag,
    /// Vertices of the outer boundary, at least 3, each as 3 (x, y, z)
    /// values.
    pub boundary: Vec<[f64; 3]>,
    /// Optional hole loops, each with at least 3 vertices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holes: Option<Vec<Vec<[f64; 3]>>>,
    /// Optional plane of the face; when absent it is derived from the
    /// boundary by the consumer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<Plane>,
}

impl Face3D {
    /// Creates a face without holes.
    pub fn new(boundary: Vec<[f64; 3]>) -> Self {
        Self {
            type_tag: Face3DTag,
            boundary,
            holes: None,
            plane: None,
        }
    }
}

impl Validate for Face3D {
    fn validate(&self) -> Result<()> {
        check_min_items("Face3D.boundary", self.boundary.len(), 3)?;
        if let Some(holes) = &self.holes {
            for hole in holes {
                check_min_items("Face3D.holes", hole.len(), 3)?;
            }
        }
        Ok(())
    }
}

/// A mesh in 3D space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mesh3D {
    /// Wire discriminant, always `"Mesh3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Mesh3DTag,
    /// Vertices of the mesh, at least 3, each as 3 (x, y, z) values.
    pub vertices: Vec<[f64; 3]>,
    /// Faces as groups of 3 or 4 indices into `vertices`.
    pub faces: Vec<MeshFace>,
    /// Optional colors, one per face, one per vertex, or a single color
    /// for the whole mesh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Color>>,
}

impl Mesh3D {
    /// Creates an uncolored mesh.
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<MeshFace>) -> Self {
        Self {
            type_tag: Mesh3DTag,
            vertices,
            faces,
            colors: None,
        }
    }

    /// Attaches a color list to the mesh.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }
}

impl Validate for Mesh3D {
    fn validate(&self) -> Result<()> {
        check_min_items("Mesh3D.vertices", self.vertices.len(), 3)?;
        check_min_items("Mesh3D.faces", self.faces.len(), 1)?;
        if let Some(colors) = &self.colors {
            check_color_alignment(
                "Mesh3D.colors",
                colors.len(),
                self.faces.len(),
                self.vertices.len(),
            )?;
        }
        Ok(())
    }
}

/// Precomputed edge topology of a [`Polyface3D`].
///
/// This is a cache of information derivable from the vertices and face
/// indices; producers that have already computed it can ship it, and
/// consumers without it must derive it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolyfaceEdgeInfo {
    /// Wire discriminant, always `"PolyfaceEdgeInfo"`.
    #[serde(rename = "type", default)]
    pub type_tag: PolyfaceEdgeInfoTag,
    /// Edges as ordered pairs of vertex indices.
    pub edge_indices: Vec<[u32; 2]>,
    /// Edge condition codes, parallel to `edge_indices`.
    pub edge_types: Vec<u32>,
}

impl PolyfaceEdgeInfo {
    /// Creates edge information from parallel index and type arrays.
    pub fn new(edge_indices: Vec<[u32; 2]>, edge_types: Vec<u32>) -> Self {
        Self {
            type_tag: PolyfaceEdgeInfoTag,
            edge_indices,
            edge_types,
        }
    }
}

impl Validate for PolyfaceEdgeInfo {
    fn validate(&self) -> Result<()> {
        if self.edge_indices.len() == self.edge_types.len() {
            Ok(())
        } else {
            Err(SchemaError::structural(
                "PolyfaceEdgeInfo.edge_types",
                self.edge_types.len(),
                vec![self.edge_indices.len()],
            ))
        }
    }
}

/// A collection of faces enclosing a solid or open shell in 3D space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Polyface3D {
    /// Wire discriminant, always `"Polyface3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Polyface3DTag,
    /// Vertices of the polyface, at least 3, each as 3 (x, y, z) values.
    pub vertices: Vec<[f64; 3]>,
    /// One entry per face: a list of index loops into `vertices`, where
    /// the first loop is the boundary and any further loops are holes.
    pub face_indices: Vec<Vec<Vec<u32>>>,
    /// Optional precomputed edge topology.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_information: Option<PolyfaceEdgeInfo>,
}

impl Polyface3D {
    /// Creates a polyface without edge information.
    pub fn new(vertices: Vec<[f64; 3]>, face_indices: Vec<Vec<Vec<u32>>>) -> Self {
        Self {
            type_tag: Polyface3DTag,
            vertices,
            face_indices,
            edge_information: None,
        }
    }
}

impl Validate for Polyface3D {
    fn validate(&self) -> Result<()> {
        check_min_items("Polyface3D.vertices", self.vertices.len(), 3)?;
        check_min_items("Polyface3D.face_indices", self.face_indices.len(), 1)?;
        for face in &self.face_indices {
            check_min_items("Polyface3D.face_indices", face.len(), 1)?;
            for loop_indices in face {
                check_min_items("Polyface3D.face_indices", loop_indices.len(), 3)?;
            }
        }
        self.edge_information.validate()
    }
}

/// A sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sphere {
    /// Wire discriminant, always `"Sphere"`.
    #[serde(rename = "type", default)]
    pub type_tag: SphereTag,
    /// Center as 3 (x, y, z) values.
    pub center: [f64; 3],
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere from a center and radius.
    pub fn new(center: [f64; 3], radius: f64) -> Self {
        Self {
            type_tag: SphereTag,
            center,
            radius,
        }
    }
}

impl Validate for Sphere {
    fn validate(&self) -> Result<()> {
        check_positive("Sphere.radius", self.radius)
    }
}

/// A cone, defined by its apex and axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cone {
    /// Wire discriminant, always `"Cone"`.
    #[serde(rename = "type", default)]
    pub type_tag: ConeTag,
    /// Apex as 3 (x, y, z) values.
    pub vertex: [f64; 3],
    /// Axis from the apex toward the base as 3 (x, y, z) values; its
    /// length is the height of the cone.
    pub axis: [f64; 3],
    /// Half-angle between the axis and the slanted surface, in radians.
    pub angle: f64,
}

impl Cone {
    /// Creates a cone from an apex, axis, and half-angle.
    pub fn new(vertex: [f64; 3], axis: [f64; 3], angle: f64) -> Self {
        Self {
            type_tag: ConeTag,
            vertex,
            axis,
            angle,
        }
    }
}

impl Validate for Cone {
    fn validate(&self) -> Result<()> {
        check_positive("Cone.angle", self.angle)
    }
}

/// A cylinder, defined by the center of its base and its axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cylinder {
    /// Wire discriminant, always `"Cylinder"`.
    #[serde(rename = "type", default)]
    pub type_tag: CylinderTag,
    /// Center of the base as 3 (x, y, z) values.
    pub center: [f64; 3],
    /// Axis from the base toward the top as 3 (x, y, z) values; its
    /// length is the height of the cylinder.
    pub axis: [f64; 3],
    /// Radius of the cylinder.
    pub radius: f64,
}

impl Cylinder {
    /// Creates a cylinder from a base center, axis, and radius.
    pub fn new(center: [f64; 3], axis: [f64; 3], radius: f64) -> Self {
        Self {
            type_tag: CylinderTag,
            center,
            axis,
            radius,
        }
    }
}

impl Validate for Cylinder {
    fn validate(&self) -> Result<()> {
        check_positive("Cylinder.radius", self.radius)
    }
}

no_structural_invariants!(Vector3D, Point3D, Ray3D, Plane, LineSegment3D);
