//! Geometric primitives for vizset-rs.
//!
//! Plain value types describing already-computed geometry in 2D and 3D
//! space, plus the [`Geometry`] union that discriminates between them on
//! the wire. There are no processing algorithms here: values are parsed,
//! structurally validated, and handed on.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

// Primitives whose only constraints are carried by their field types.
// Defined before the modules so it is in textual scope for all of them.
macro_rules! no_structural_invariants {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl vizset_core::Validate for $ty {
                fn validate(&self) -> vizset_core::Result<()> {
                    Ok(())
                }
            }
        )+
    };
}

pub mod geometry2d;
pub mod geometry3d;
pub mod mesh;
mod union;

pub use geometry2d::{
    Arc2D, LineSegment2D, Mesh2D, Point2D, Polygon2D, Polyline2D, Ray2D, Vector2D,
};
pub use geometry3d::{
    Arc3D, Cone, Cylinder, Face3D, LineSegment3D, Mesh3D, Plane, Point3D, Polyface3D,
    PolyfaceEdgeInfo, Polyline3D, Ray3D, Sphere, Vector3D,
};
pub use mesh::MeshFace;
pub use union::Geometry;

// Re-export glam vector types for convenience
pub use glam::{DVec2, DVec3};
