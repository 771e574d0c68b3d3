//! The display family union.

use vizset_core::tagged_union;

use crate::display2d::{
    DisplayArc2D, DisplayLineSegment2D, DisplayMesh2D, DisplayPoint2D, DisplayPolygon2D,
    DisplayPolyline2D, DisplayRay2D, DisplayVector2D,
};
use crate::display3d::{
    DisplayArc3D, DisplayCone, DisplayCylinder, DisplayFace3D, DisplayLineSegment3D,
    DisplayMesh3D, DisplayPlane, DisplayPoint3D, DisplayPolyface3D, DisplayPolyline3D,
    DisplayRay3D, DisplaySphere, DisplayText3D, DisplayVector3D,
};

tagged_union! {
    /// Closed union over every display decorator, discriminated by the
    /// `type` tag and nothing else.
    pub enum Display {
        DisplayVector2D,
        DisplayPoint2D,
        DisplayRay2D,
        DisplayLineSegment2D,
        DisplayPolyline2D,
        DisplayArc2D,
        DisplayPolygon2D,
        DisplayMesh2D,
        DisplayVector3D,
        DisplayPoint3D,
        DisplayRay3D,
        DisplayPlane,
        DisplayLineSegment3D,
        DisplayPolyline3D,
        DisplayArc3D,
        DisplayFace3D,
        DisplayMesh3D,
        DisplayPolyface3D,
        DisplaySphere,
        DisplayCone,
        DisplayCylinder,
        DisplayText3D,
    }
}
