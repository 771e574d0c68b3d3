//! Geometry primitives in 2D space.
//!
//! Field names follow the wire format: single-letter keys for base points
//! (`p`), directions (`v`), and arc centers (`c`), with coordinates as
//! exactly-2 arrays of doubles.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use vizset_core::validate::{check_min_items, Validate};
use vizset_core::{Color, Result, SchemaError};

use crate::mesh::{check_color_alignment, MeshFace};

vizset_core::fixed_tag!(pub struct Vector2DTag = "Vector2D";);
vizset_core::fixed_tag!(pub struct Point2DTag = "Point2D";);
vizset_core::fixed_tag!(pub struct Ray2DTag = "Ray2D";);
vizset_core::fixed_tag!(pub struct LineSegment2DTag = "LineSegment2D";);
vizset_core::fixed_tag!(pub struct Polyline2DTag = "Polyline2D";);
vizset_core::fixed_tag!(pub struct Arc2DTag = "Arc2D";);
vizset_core::fixed_tag!(pub struct Polygon2DTag = "Polygon2D";);
vizset_core::fixed_tag!(pub struct Mesh2DTag = "Mesh2D";);

/// A vector in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vector2D {
    /// Wire discriminant, always `"Vector2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Vector2DTag,
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2D {
    /// Creates a vector from its components.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            type_tag: Vector2DTag,
            x,
            y,
        }
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point2D {
    /// Wire discriminant, always `"Point2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Point2DTag,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            type_tag: Point2DTag,
            x,
            y,
        }
    }
}

impl From<Point2D> for DVec2 {
    fn from(p: Point2D) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point2D {
    fn from(p: DVec2) -> Self {
        Point2D::new(p.x, p.y)
    }
}

/// A ray in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ray2D {
    /// Wire discriminant, always `"Ray2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Ray2DTag,
    /// Base point as 2 (x, y) values.
    pub p: [f64; 2],
    /// Direction vector as 2 (x, y) values.
    pub v: [f64; 2],
}

impl Ray2D {
    /// Creates a ray from a base point and direction.
    pub fn new(p: [f64; 2], v: [f64; 2]) -> Self {
        Self {
            type_tag: Ray2DTag,
            p,
            v,
        }
    }

    /// Base point as a vector type.
    pub fn point(&self) -> DVec2 {
        DVec2::from_array(self.p)
    }

    /// Direction as a vector type.
    pub fn direction(&self) -> DVec2 {
        DVec2::from_array(self.v)
    }
}

/// A single line segment in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineSegment2D {
    /// Wire discriminant, always `"LineSegment2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: LineSegment2DTag,
    /// Base point as 2 (x, y) values.
    pub p: [f64; 2],
    /// Direction vector as 2 (x, y) values; the segment runs from `p` to
    /// `p + v`.
    pub v: [f64; 2],
}

impl LineSegment2D {
    /// Creates a segment from a base point and direction.
    pub fn new(p: [f64; 2], v: [f64; 2]) -> Self {
        Self {
            type_tag: LineSegment2DTag,
            p,
            v,
        }
    }

    /// Base point as a vector type.
    pub fn point(&self) -> DVec2 {
        DVec2::from_array(self.p)
    }

    /// Direction as a vector type.
    pub fn direction(&self) -> DVec2 {
        DVec2::from_array(self.v)
    }
}

/// A polyline in 2D space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Polyline2D {
    /// Wire discriminant, always `"Polyline2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Polyline2DTag,
    /// Vertices of the polyline, at least 3, each as 2 (x, y) values.
    pub vertices: Vec<[f64; 2]>,
    /// Whether the polyline should be interpolated between the vertices
    /// when translated to other interfaces.
    #[serde(default)]
    pub interpolated: bool,
}

impl Polyline2D {
    /// Creates a non-interpolated polyline.
    pub fn new(vertices: Vec<[f64; 2]>) -> Self {
        Self {
            type_tag: Polyline2DTag,
            vertices,
            interpolated: false,
        }
    }
}

impl Validate for Polyline2D {
    fn validate(&self) -> Result<()> {
        check_min_items("Polyline2D.vertices", self.vertices.len(), 3)
    }
}

/// A single arc or circle in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Arc2D {
    /// Wire discriminant, always `"Arc2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Arc2DTag,
    /// Center of the arc as 2 (x, y) values.
    pub c: [f64; 2],
    /// Radius of the arc.
    pub r: f64,
    /// Start angle in radians, between 0 and 2π.
    #[serde(default)]
    pub a1: f64,
    /// End angle in radians, between 0 and 2π. The default 2π together
    /// with `a1 = 0` describes a full circle.
    #[serde(default = "tau")]
    pub a2: f64,
}

fn tau() -> f64 {
    TAU
}

impl Arc2D {
    /// Creates a full circle.
    pub fn circle(c: [f64; 2], r: f64) -> Self {
        Self {
            type_tag: Arc2DTag,
            c,
            r,
            a1: 0.0,
            a2: TAU,
        }
    }

    /// Creates an arc between two angles in radians.
    pub fn new(c: [f64; 2], r: f64, a1: f64, a2: f64) -> Self {
        Self {
            type_tag: Arc2DTag,
            c,
            r,
            a1,
            a2,
        }
    }
}

impl Validate for Arc2D {
    fn validate(&self) -> Result<()> {
        check_angle("Arc2D.a1", self.a1)?;
        check_angle("Arc2D.a2", self.a2)
    }
}

pub(crate) fn check_angle(field: &str, value: f64) -> Result<()> {
    if (0.0..=TAU).contains(&value) {
        Ok(())
    } else {
        Err(SchemaError::field(
            field,
            format!("angle must be between 0 and 2*pi, found {value}"),
        ))
    }
}

/// A polygon in 2D space, without holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Polygon2D {
    /// Wire discriminant, always `"Polygon2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Polygon2DTag,
    /// Vertices of the polygon boundary, at least 3, each as 2 (x, y)
    /// values.
    pub vertices: Vec<[f64; 2]>,
}

impl Polygon2D {
    /// Creates a polygon from its boundary vertices.
    pub fn new(vertices: Vec<[f64; 2]>) -> Self {
        Self {
            type_tag: Polygon2DTag,
            vertices,
        }
    }
}

impl Validate for Polygon2D {
    fn validate(&self) -> Result<()> {
        check_min_items("Polygon2D.vertices", self.vertices.len(), 3)
    }
}

/// A mesh in 2D space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mesh2D {
    /// Wire discriminant, always `"Mesh2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: Mesh2DTag,
    /// Vertices of the mesh, at least 3, each as 2 (x, y) values.
    pub vertices: Vec<[f64; 2]>,
    /// Faces as groups of 3 or 4 indices into `vertices`.
    pub faces: Vec<MeshFace>,
    /// Optional colors, one per face, one per vertex, or a single color
    /// for the whole mesh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Color>>,
}

impl Mesh2D {
    /// Creates an uncolored mesh.
    pub fn new(vertices: Vec<[f64; 2]>, faces: Vec<MeshFace>) -> Self {
        Self {
            type_tag: Mesh2DTag,
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

impl Validate for Mesh2D {
    fn validate(&self) -> Result<()> {
        check_min_items("Mesh2D.vertices", self.vertices.len(), 3)?;
        check_min_items("Mesh2D.faces", self.faces.len(), 1)?;
        if let Some(colors) = &self.colors {
            check_color_alignment(
                "Mesh2D.colors",
                colors.len(),
                self.faces.len(),
                self.vertices.len(),
            )?;
        }
        Ok(())
    }
}

no_structural_invariants!(Vector2D, Point2D, Ray2D, LineSegment2D);
