//! Shared mesh building blocks.

use serde::{Deserialize, Serialize};
use vizset_core::validate::check_count_in;
use vizset_core::Result;

/// One mesh face: a group of 3 or 4 vertex indices.
///
/// The arity constraint is carried by the representation itself; any other
/// index count fails at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeshFace {
    /// A triangular face.
    Tri([u32; 3]),
    /// A quadrilateral face.
    Quad([u32; 4]),
}

impl MeshFace {
    /// The vertex indices of the face, in winding order.
    pub fn indices(&self) -> &[u32] {
        match self {
            Self::Tri(indices) => indices,
            Self::Quad(indices) => indices,
        }
    }
}

/// Checks the mesh color invariant: a color list must hold one color for
/// the whole mesh, one per face, or one per vertex.
///
/// A count equal to both the face count and the vertex count is accepted
/// without further interpretation.
pub fn check_color_alignment(
    context: &str,
    colors: usize,
    faces: usize,
    vertices: usize,
) -> Result<()> {
    check_count_in(context, colors, &[1, faces, vertices])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_arity_is_three_or_four() {
        let tri: MeshFace = serde_json::from_str("[0,1,2]").unwrap();
        assert_eq!(tri, MeshFace::Tri([0, 1, 2]));
        let quad: MeshFace = serde_json::from_str("[0,1,2,3]").unwrap();
        assert_eq!(quad.indices(), &[0, 1, 2, 3]);
        assert!(serde_json::from_str::<MeshFace>("[0,1]").is_err());
        assert!(serde_json::from_str::<MeshFace>("[0,1,2,3,4]").is_err());
        assert!(serde_json::from_str::<MeshFace>("[0,-1,2]").is_err());
    }
}
