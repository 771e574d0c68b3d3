//! Display decorators for 2D geometry.
//!
//! Each decorator owns exactly one geometry value plus the attributes a
//! rendering client needs to draw it. The attribute sets are composed per
//! decorator rather than inherited: point-like decorators carry a radius,
//! curve-like decorators carry line styling, and meshes carry a color list
//! and a display mode.

use serde::{Deserialize, Serialize};
use vizset_core::validate::{check_non_negative, Validate};
use vizset_core::{Color, DefaultOr, DisplayMode, LineType, Result, UserData};
use vizset_geometry::mesh::check_color_alignment;
use vizset_geometry::{Arc2D, LineSegment2D, Mesh2D, Point2D, Polygon2D, Polyline2D, Ray2D, Vector2D};

vizset_core::fixed_tag!(pub struct DisplayVector2DTag = "DisplayVector2D";);
vizset_core::fixed_tag!(pub struct DisplayPoint2DTag = "DisplayPoint2D";);
vizset_core::fixed_tag!(pub struct DisplayRay2DTag = "DisplayRay2D";);
vizset_core::fixed_tag!(pub struct DisplayLineSegment2DTag = "DisplayLineSegment2D";);
vizset_core::fixed_tag!(pub struct DisplayPolyline2DTag = "DisplayPolyline2D";);
vizset_core::fixed_tag!(pub struct DisplayArc2DTag = "DisplayArc2D";);
vizset_core::fixed_tag!(pub struct DisplayPolygon2DTag = "DisplayPolygon2D";);
vizset_core::fixed_tag!(pub struct DisplayMesh2DTag = "DisplayMesh2D";);

/// A 2D vector with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayVector2D {
    /// Wire discriminant, always `"DisplayVector2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayVector2DTag,
    /// The decorated geometry.
    pub geometry: Vector2D,
    /// Color for the geometry.
    pub color: Color,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayVector2D {
    /// Creates a decorated vector.
    pub fn new(geometry: Vector2D, color: Color) -> Self {
        Self {
            type_tag: DisplayVector2DTag,
            geometry,
            color,
            user_data: None,
        }
    }
}

impl Validate for DisplayVector2D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A 2D point with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayPoint2D {
    /// Wire discriminant, always `"DisplayPoint2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayPoint2DTag,
    /// The decorated geometry.
    pub geometry: Point2D,
    /// Color for the geometry.
    pub color: Color,
    /// Radius with which the point is displayed, in pixels (screen) or
    /// millimeters (print).
    #[serde(default)]
    pub radius: DefaultOr<f64>,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayPoint2D {
    /// Creates a decorated point with the default radius.
    pub fn new(geometry: Point2D, color: Color) -> Self {
        Self {
            type_tag: DisplayPoint2DTag,
            geometry,
            color,
            radius: DefaultOr::Default,
            user_data: None,
        }
    }
}

impl Validate for DisplayPoint2D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        if let Some(radius) = self.radius.as_value() {
            check_non_negative("DisplayPoint2D.radius", *radius)?;
        }
        Ok(())
    }
}

/// A 2D ray with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayRay2D {
    /// Wire discriminant, always `"DisplayRay2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayRay2DTag,
    /// The decorated geometry.
    pub geometry: Ray2D,
    /// Color for the geometry.
    pub color: Color,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayRay2D {
    /// Creates a decorated ray.
    pub fn new(geometry: Ray2D, color: Color) -> Self {
        Self {
            type_tag: DisplayRay2DTag,
            geometry,
            color,
            user_data: None,
        }
    }
}

impl Validate for DisplayRay2D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A 2D line segment with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayLineSegment2D {
    /// Wire discriminant, always `"DisplayLineSegment2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayLineSegment2DTag,
    /// The decorated geometry.
    pub geometry: LineSegment2D,
    /// Color for the geometry.
    pub color: Color,
    /// Line width in pixels (screen) or millimeters (print). Zero hides
    /// the geometry; the sentinel defers to the interface.
    #[serde(default)]
    pub line_width: DefaultOr<f64>,
    /// Line style.
    #[serde(default)]
    pub line_type: LineType,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayLineSegment2D {
    /// Creates a decorated segment with default line styling.
    pub fn new(geometry: LineSegment2D, color: Color) -> Self {
        Self {
            type_tag: DisplayLineSegment2DTag,
            geometry,
            color,
            line_width: DefaultOr::Default,
            line_type: LineType::Continuous,
            user_data: None,
        }
    }
}

impl Validate for DisplayLineSegment2D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_line_width("DisplayLineSegment2D.line_width", &self.line_width)
    }
}

/// A 2D polyline with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayPolyline2D {
    /// Wire discriminant, always `"DisplayPolyline2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayPolyline2DTag,
    /// The decorated geometry.
    pub geometry: Polyline2D,
    /// Color for the geometry.
    pub color: Color,
    /// Line width in pixels (screen) or millimeters (print).
    #[serde(default)]
    pub line_width: DefaultOr<f64>,
    /// Line style.
    #[serde(default)]
    pub line_type: LineType,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayPolyline2D {
    /// Creates a decorated polyline with default line styling.
    pub fn new(geometry: Polyline2D, color: Color) -> Self {
        Self {
            type_tag: DisplayPolyline2DTag,
            geometry,
            color,
            line_width: DefaultOr::Default,
            line_type: LineType::Continuous,
            user_data: None,
        }
    }
}

impl Validate for DisplayPolyline2D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_line_width("DisplayPolyline2D.line_width", &self.line_width)
    }
}

/// A 2D arc with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayArc2D {
    /// Wire discriminant, always `"DisplayArc2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayArc2DTag,
    /// The decorated geometry.
    pub geometry: Arc2D,
    /// Color for the geometry.
    pub color: Color,
    /// Line width in pixels (screen) or millimeters (print).
    #[serde(default)]
    pub line_width: DefaultOr<f64>,
    /// Line style.
    #[serde(default)]
    pub line_type: LineType,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayArc2D {
    /// Creates a decorated arc with default line styling.
    pub fn new(geometry: Arc2D, color: Color) -> Self {
        Self {
            type_tag: DisplayArc2DTag,
            geometry,
            color,
            line_width: DefaultOr::Default,
            line_type: LineType::Continuous,
            user_data: None,
        }
    }
}

impl Validate for DisplayArc2D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_line_width("DisplayArc2D.line_width", &self.line_width)
    }
}

/// A 2D polygon with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayPolygon2D {
    /// Wire discriminant, always `"DisplayPolygon2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayPolygon2DTag,
    /// The decorated geometry.
    pub geometry: Polygon2D,
    /// Color for the geometry.
    pub color: Color,
    /// Line width in pixels (screen) or millimeters (print).
    #[serde(default)]
    pub line_width: DefaultOr<f64>,
    /// Line style.
    #[serde(default)]
    pub line_type: LineType,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayPolygon2D {
    /// Creates a decorated polygon with default line styling.
    pub fn new(geometry: Polygon2D, color: Color) -> Self {
        Self {
            type_tag: DisplayPolygon2DTag,
            geometry,
            color,
            line_width: DefaultOr::Default,
            line_type: LineType::Continuous,
            user_data: None,
        }
    }
}

impl Validate for DisplayPolygon2D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_line_width("DisplayPolygon2D.line_width", &self.line_width)
    }
}

/// A 2D mesh with display properties.
///
/// Unlike the single-color decorators, a mesh carries a full color list so
/// that faces or vertices can be colored individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayMesh2D {
    /// Wire discriminant, always `"DisplayMesh2D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayMesh2DTag,
    /// The decorated geometry.
    pub geometry: Mesh2D,
    /// Colors, one per face, one per vertex, or a single color for the
    /// whole mesh.
    pub colors: Vec<Color>,
    /// Render mode for the mesh surface.
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayMesh2D {
    /// Creates a decorated mesh rendered as a surface.
    pub fn new(geometry: Mesh2D, colors: Vec<Color>) -> Self {
        Self {
            type_tag: DisplayMesh2DTag,
            geometry,
            colors,
            display_mode: DisplayMode::Surface,
            user_data: None,
        }
    }
}

impl Validate for DisplayMesh2D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_color_alignment(
            "DisplayMesh2D.colors",
            self.colors.len(),
            self.geometry.faces.len(),
            self.geometry.vertices.len(),
        )
    }
}

pub(crate) fn check_line_width(field: &str, width: &DefaultOr<f64>) -> Result<()> {
    match width.as_value() {
        Some(value) => check_non_negative(field, *value),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_width_round_trips_as_sentinel() {
        let display = DisplayLineSegment2D::new(
            LineSegment2D::new([0.0, 0.0], [1.0, 0.0]),
            Color::new(0, 0, 0),
        );
        let json = serde_json::to_string(&display).unwrap();
        assert!(json.contains(r#""line_width":{"type":"Default"}"#));
        let back: DisplayLineSegment2D = serde_json::from_str(&json).unwrap();
        assert!(back.line_width.is_default());
    }

    #[test]
    fn negative_line_width_is_rejected() {
        let mut display = DisplayPolyline2D::new(
            Polyline2D::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]),
            Color::new(0, 0, 0),
        );
        display.line_width = DefaultOr::Value(-1.0);
        assert!(display.validate().is_err());
    }

    #[test]
    fn mesh_decorator_checks_color_alignment() {
        let mesh = Mesh2D::new(
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            vec![
                vizset_geometry::MeshFace::Tri([0, 1, 2]),
                vizset_geometry::MeshFace::Tri([0, 2, 3]),
            ],
        );
        let gray = Color::new(128, 128, 128);
        assert!(DisplayMesh2D::new(mesh.clone(), vec![gray; 2]).validate().is_ok());
        assert!(DisplayMesh2D::new(mesh, vec![gray; 3]).validate().is_err());
    }
}
