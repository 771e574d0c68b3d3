//! vizset-rs: a typed, versioned data model for geometric visualization
//! sets.
//!
//! The crate models 2D/3D geometric primitives and their display
//! decorations, composed into scene-level containers (legends, analysis
//! data sets, full visualization sets) that a geometry-producing engine
//! and a rendering client exchange as JSON.
//!
//! # Quick Start
//!
//! ```
//! use vizset::*;
//!
//! fn main() -> Result<()> {
//!     // Two analysis points, one value apiece.
//!     let geometry = vec![
//!         Geometry::from(Point3D::new(0.0, 0.0, 0.0)),
//!         Geometry::from(Point3D::new(1.0, 0.0, 0.0)),
//!     ];
//!     let data = VisualizationData::new(vec![20.5, 21.0]);
//!     let analysis = AnalysisGeometry::new("sensor-grid", geometry, vec![data]);
//!     let set = VisualizationSet::new("study", vec![analysis.into()]);
//!
//!     // Wire round-trip: serialize, parse, validate.
//!     let payload = to_json_vec(&set)?;
//!     let back: VisualizationSet = from_json_slice(&payload)?;
//!     assert_eq!(back, set);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Entities are split across three layers:
//!
//! - [`Geometry`] - plain value types for already-computed geometry
//! - [`Display`] - one decorator per geometry variant, adding color,
//!   line styling, and render modes
//! - scene containers - [`AnalysisGeometry`], [`ContextGeometry`],
//!   [`VisualizationSet`], and [`GraphicContainer`], which align value
//!   sequences with geometry topology
//!
//! Every entity carries a fixed `type` tag; unions dispatch on the tag
//! alone. Parsing always ends with a structural validation pass, so a
//! value returned from [`from_json_slice`] is valid in full or not
//! returned at all.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod data_type;
mod graphic;
mod legend;
mod visualization;

// Re-export core types
pub use vizset_core::{
    from_json_slice, from_json_str, from_json_value, to_json_string, to_json_vec, Color,
    DefaultOr, DisplayMode, HorizontalAlignment, LineType, Result, SchemaError, Units, UserData,
    Validate, VerticalAlignment, DEFAULT_TAG,
};

// Re-export the geometry family
pub use vizset_geometry::{
    Arc2D, Arc3D, Cone, Cylinder, DVec2, DVec3, Face3D, Geometry, LineSegment2D, LineSegment3D,
    Mesh2D, Mesh3D, MeshFace, Plane, Point2D, Point3D, Polyface3D, PolyfaceEdgeInfo, Polygon2D,
    Polyline2D, Polyline3D, Ray2D, Ray3D, Sphere, Vector2D, Vector3D,
};

// Re-export the display family
pub use vizset_display::{
    Display, DisplayArc2D, DisplayArc3D, DisplayCone, DisplayCylinder, DisplayFace3D,
    DisplayLineSegment2D, DisplayLineSegment3D, DisplayMesh2D, DisplayMesh3D, DisplayPlane,
    DisplayPoint2D, DisplayPoint3D, DisplayPolyface3D, DisplayPolygon2D, DisplayPolyline2D,
    DisplayPolyline3D, DisplayRay2D, DisplayRay3D, DisplaySphere, DisplayText3D, DisplayVector2D,
    DisplayVector3D,
};

pub use data_type::{AnyDataType, DataKind, DataType, GenericDataType};
pub use graphic::{GraphicContainer, GraphicGeometry};
pub use legend::{Legend2DParameters, Legend3DParameters, LegendParameters};
pub use visualization::{
    AnalysisGeometry, ContextGeometry, SceneGeometry, VisualizationData, VisualizationMetaData,
    VisualizationSet,
};
