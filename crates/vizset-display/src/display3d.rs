//! Display decorators for 3D geometry.

use serde::{Deserialize, Serialize};
use vizset_core::validate::{check_positive, Validate};
use vizset_core::{
    Color, DefaultOr, DisplayMode, HorizontalAlignment, LineType, Result, UserData,
    VerticalAlignment,
};
use vizset_geometry::mesh::check_color_alignment;
use vizset_geometry::{
    Arc3D, Cone, Cylinder, Face3D, LineSegment3D, Mesh3D, Plane, Point3D, Polyface3D, Polyline3D,
    Ray3D, Sphere, Vector3D,
};

use crate::display2d::check_line_width;

vizset_core::fixed_tag!(pub struct DisplayVector3DTag = "DisplayVector3D";);
vizset_core::fixed_tag!(pub struct DisplayPoint3DTag = "DisplayPoint3D";);
vizset_core::fixed_tag!(pub struct DisplayRay3DTag = "DisplayRay3D";);
vizset_core::fixed_tag!(pub struct DisplayPlaneTag = "DisplayPlane";);
vizset_core::fixed_tag!(pub struct DisplayLineSegment3DTag = "DisplayLineSegment3D";);
vizset_core::fixed_tag!(pub struct DisplayPolyline3DTag = "DisplayPolyline3D";);
vizset_core::fixed_tag!(pub struct DisplayArc3DTag = "DisplayArc3D";);
vizset_core::fixed_tag!(pub struct DisplayFace3DTag = "DisplayFace3D";);
vizset_core::fixed_tag!(pub struct DisplayMesh3DTag = "DisplayMesh3D";);
vizset_core::fixed_tag!(pub struct DisplayPolyface3DTag = "DisplayPolyface3D";);
vizset_core::fixed_tag!(pub struct DisplaySphereTag = "DisplaySphere";);
vizset_core::fixed_tag!(pub struct DisplayConeTag = "DisplayCone";);
vizset_core::fixed_tag!(pub struct DisplayCylinderTag = "DisplayCylinder";);
vizset_core::fixed_tag!(pub struct DisplayText3DTag = "DisplayText3D";);

/// A 3D vector with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayVector3D {
    /// Wire discriminant, always `"DisplayVector3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayVector3DTag,
    /// The decorated geometry.
    pub geometry: Vector3D,
    /// Color for the geometry.
    pub color: Color,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayVector3D {
    /// Creates a decorated vector.
    pub fn new(geometry: Vector3D, color: Color) -> Self {
        Self {
            type_tag: DisplayVector3DTag,
            geometry,
            color,
            user_data: None,
        }
    }
}

impl Validate for DisplayVector3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A 3D point with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayPoint3D {
    /// Wire discriminant, always `"DisplayPoint3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayPoint3DTag,
    /// The decorated geometry.
    pub geometry: Point3D,
    /// Color for the geometry.
    pub color: Color,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayPoint3D {
    /// Creates a decorated point.
    pub fn new(geometry: Point3D, color: Color) -> Self {
        Self {
            type_tag: DisplayPoint3DTag,
            geometry,
            color,
            user_data: None,
        }
    }
}

impl Validate for DisplayPoint3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A 3D ray with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayRay3D {
    /// Wire discriminant, always `"DisplayRay3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayRay3DTag,
    /// The decorated geometry.
    pub geometry: Ray3D,
    /// Color for the geometry.
    pub color: Color,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayRay3D {
    /// Creates a decorated ray.
    pub fn new(geometry: Ray3D, color: Color) -> Self {
        Self {
            type_tag: DisplayRay3DTag,
            geometry,
            color,
            user_data: None,
        }
    }
}

impl Validate for DisplayRay3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A plane with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayPlane {
    /// Wire discriminant, always `"DisplayPlane"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayPlaneTag,
    /// The decorated geometry.
    pub geometry: Plane,
    /// Color for the geometry.
    pub color: Color,
    /// Whether to display XY axes instead of just an origin point and a
    /// normal vector.
    #[serde(default)]
    pub show_axes: bool,
    /// Whether to display the plane with a grid.
    #[serde(default)]
    pub show_grid: bool,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayPlane {
    /// Creates a decorated plane without axes or grid.
    pub fn new(geometry: Plane, color: Color) -> Self {
        Self {
            type_tag: DisplayPlaneTag,
            geometry,
            color,
            show_axes: false,
            show_grid: false,
            user_data: None,
        }
    }
}

impl Validate for DisplayPlane {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A 3D line segment with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayLineSegment3D {
    /// Wire discriminant, always `"DisplayLineSegment3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayLineSegment3DTag,
    /// The decorated geometry.
    pub geometry: LineSegment3D,
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

impl DisplayLineSegment3D {
    /// Creates a decorated segment with default line styling.
    pub fn new(geometry: LineSegment3D, color: Color) -> Self {
        Self {
            type_tag: DisplayLineSegment3DTag,
            geometry,
            color,
            line_width: DefaultOr::Default,
            line_type: LineType::Continuous,
            user_data: None,
        }
    }
}

impl Validate for DisplayLineSegment3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_line_width("DisplayLineSegment3D.line_width", &self.line_width)
    }
}

/// A 3D polyline with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayPolyline3D {
    /// Wire discriminant, always `"DisplayPolyline3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayPolyline3DTag,
    /// The decorated geometry.
    pub geometry: Polyline3D,
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

impl DisplayPolyline3D {
    /// Creates a decorated polyline with default line styling.
    pub fn new(geometry: Polyline3D, color: Color) -> Self {
        Self {
            type_tag: DisplayPolyline3DTag,
            geometry,
            color,
            line_width: DefaultOr::Default,
            line_type: LineType::Continuous,
            user_data: None,
        }
    }
}

impl Validate for DisplayPolyline3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_line_width("DisplayPolyline3D.line_width", &self.line_width)
    }
}

/// A 3D arc with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayArc3D {
    /// Wire discriminant, always `"DisplayArc3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayArc3DTag,
    /// The decorated geometry.
    pub geometry: Arc3D,
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

impl DisplayArc3D {
    /// Creates a decorated arc with default line styling.
    pub fn new(geometry: Arc3D, color: Color) -> Self {
        Self {
            type_tag: DisplayArc3DTag,
            geometry,
            color,
            line_width: DefaultOr::Default,
            line_type: LineType::Continuous,
            user_data: None,
        }
    }
}

impl Validate for DisplayArc3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_line_width("DisplayArc3D.line_width", &self.line_width)
    }
}

/// A planar face with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayFace3D {
    /// Wire discriminant, always `"DisplayFace3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayFace3DTag,
    /// The decorated geometry.
    pub geometry: Face3D,
    /// Color for the geometry.
    pub color: Color,
    /// Render mode for the face.
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayFace3D {
    /// Creates a decorated face rendered as a surface.
    pub fn new(geometry: Face3D, color: Color) -> Self {
        Self {
            type_tag: DisplayFace3DTag,
            geometry,
            color,
            display_mode: DisplayMode::Surface,
            user_data: None,
        }
    }
}

impl Validate for DisplayFace3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A 3D mesh with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayMesh3D {
    /// Wire discriminant, always `"DisplayMesh3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayMesh3DTag,
    /// The decorated geometry.
    pub geometry: Mesh3D,
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

impl DisplayMesh3D {
    /// Creates a decorated mesh rendered as a surface.
    pub fn new(geometry: Mesh3D, colors: Vec<Color>) -> Self {
        Self {
            type_tag: DisplayMesh3DTag,
            geometry,
            colors,
            display_mode: DisplayMode::Surface,
            user_data: None,
        }
    }
}

impl Validate for DisplayMesh3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_color_alignment(
            "DisplayMesh3D.colors",
            self.colors.len(),
            self.geometry.faces.len(),
            self.geometry.vertices.len(),
        )
    }
}

/// A polyface with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayPolyface3D {
    /// Wire discriminant, always `"DisplayPolyface3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayPolyface3DTag,
    /// The decorated geometry.
    pub geometry: Polyface3D,
    /// Colors, one per face, one per vertex, or a single color for the
    /// whole polyface.
    pub colors: Vec<Color>,
    /// Render mode for the polyface surface.
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayPolyface3D {
    /// Creates a decorated polyface rendered as a surface.
    pub fn new(geometry: Polyface3D, colors: Vec<Color>) -> Self {
        Self {
            type_tag: DisplayPolyface3DTag,
            geometry,
            colors,
            display_mode: DisplayMode::Surface,
            user_data: None,
        }
    }
}

impl Validate for DisplayPolyface3D {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        check_color_alignment(
            "DisplayPolyface3D.colors",
            self.colors.len(),
            self.geometry.face_indices.len(),
            self.geometry.vertices.len(),
        )
    }
}

/// A sphere with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplaySphere {
    /// Wire discriminant, always `"DisplaySphere"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplaySphereTag,
    /// The decorated geometry.
    pub geometry: Sphere,
    /// Color for the geometry.
    pub color: Color,
    /// Render mode for the sphere surface.
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplaySphere {
    /// Creates a decorated sphere rendered as a surface.
    pub fn new(geometry: Sphere, color: Color) -> Self {
        Self {
            type_tag: DisplaySphereTag,
            geometry,
            color,
            display_mode: DisplayMode::Surface,
            user_data: None,
        }
    }
}

impl Validate for DisplaySphere {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A cone with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayCone {
    /// Wire discriminant, always `"DisplayCone"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayConeTag,
    /// The decorated geometry.
    pub geometry: Cone,
    /// Color for the geometry.
    pub color: Color,
    /// Render mode for the cone surface.
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayCone {
    /// Creates a decorated cone rendered as a surface.
    pub fn new(geometry: Cone, color: Color) -> Self {
        Self {
            type_tag: DisplayConeTag,
            geometry,
            color,
            display_mode: DisplayMode::Surface,
            user_data: None,
        }
    }
}

impl Validate for DisplayCone {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// A cylinder with display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayCylinder {
    /// Wire discriminant, always `"DisplayCylinder"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayCylinderTag,
    /// The decorated geometry.
    pub geometry: Cylinder,
    /// Color for the geometry.
    pub color: Color,
    /// Render mode for the cylinder surface.
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

impl DisplayCylinder {
    /// Creates a decorated cylinder rendered as a surface.
    pub fn new(geometry: Cylinder, color: Color) -> Self {
        Self {
            type_tag: DisplayCylinderTag,
            geometry,
            color,
            display_mode: DisplayMode::Surface,
            user_data: None,
        }
    }
}

impl Validate for DisplayCylinder {
    fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// Text rendered in the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayText3D {
    /// Wire discriminant, always `"DisplayText3D"`.
    #[serde(rename = "type", default)]
    pub type_tag: DisplayText3DTag,
    /// The text to display.
    pub text: String,
    /// Plane in which the text is drawn, with the origin as the anchor
    /// point.
    pub plane: Plane,
    /// Height of the text in model units.
    pub height: f64,
    /// Color for the text.
    pub color: Color,
    /// Font family for the text. Certain interfaces with limited font
    /// access may ignore this.
    #[serde(default = "arial")]
    pub font: String,
    /// Horizontal anchoring of the text relative to the plane origin.
    #[serde(default)]
    pub horizontal_alignment: HorizontalAlignment,
    /// Vertical anchoring of the text relative to the plane origin.
    #[serde(default)]
    pub vertical_alignment: VerticalAlignment,
    /// Optional free-form data carried through serialization untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}

fn arial() -> String {
    "Arial".to_owned()
}

impl DisplayText3D {
    /// Creates left/bottom anchored text in the given plane.
    pub fn new(text: impl Into<String>, plane: Plane, height: f64, color: Color) -> Self {
        Self {
            type_tag: DisplayText3DTag,
            text: text.into(),
            plane,
            height,
            color,
            font: arial(),
            horizontal_alignment: HorizontalAlignment::Left,
            vertical_alignment: VerticalAlignment::Bottom,
            user_data: None,
        }
    }
}

impl Validate for DisplayText3D {
    fn validate(&self) -> Result<()> {
        self.plane.validate()?;
        check_positive("DisplayText3D.height", self.height)
    }
}
