//! Display decorators for vizset-rs.
//!
//! Wraps each geometric primitive with the rendering attributes a client
//! needs to draw it (color, line styling, render mode, text properties),
//! one decorator variant per geometry variant, composed into the
//! [`Display`] union.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod display2d;
pub mod display3d;
mod union;

pub use display2d::{
    DisplayArc2D, DisplayLineSegment2D, DisplayMesh2D, DisplayPoint2D, DisplayPolygon2D,
    DisplayPolyline2D, DisplayRay2D, DisplayVector2D,
};
pub use display3d::{
    DisplayArc3D, DisplayCone, DisplayCylinder, DisplayFace3D, DisplayLineSegment3D,
    DisplayMesh3D, DisplayPlane, DisplayPoint3D, DisplayPolyface3D, DisplayPolyline3D,
    DisplayRay3D, DisplaySphere, DisplayText3D, DisplayVector3D,
};
pub use union::Display;
