//! `IndexedMesh`: plain vertex and face arrays.
//!
//! The topology engine reads nothing from vertex positions; they ride along so
//! that operations which change the vertex set (see
//! [`cut_mesh`](crate::algs::cut::cut_mesh)) can carry them. Positions are any
//! `Clone` type, `[f64; 3]` by default.

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshTopoError;
use crate::topology::corner::Simplex;

/// Number of vertices implied by a face list: `max(F) + 1`, or 0 when there
/// are no faces.
///
/// Vertices past the largest referenced index are invisible to this count, so
/// callers holding an explicit vertex array should prefer its length.
pub fn vertex_count<S: Simplex>(faces: &[S]) -> usize {
    faces
        .iter()
        .flat_map(|f| f.vertices().iter().copied())
        .max()
        .map_or(0, |m| m + 1)
}

/// Check that every face index lies in `[0, n)`.
pub fn check_face_indices<S: Simplex>(faces: &[S], n: usize) -> Result<(), MeshTopoError> {
    for (face, f) in faces.iter().enumerate() {
        if let Some(&vertex) = f.vertices().iter().find(|&&v| v >= n) {
            return Err(MeshTopoError::VertexIndexOutOfRange {
                face,
                vertex,
                vertex_count: n,
            });
        }
    }
    Ok(())
}

/// Triangle mesh as a vertex array and a face index array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexedMesh<P = [f64; 3]> {
    /// Vertex payloads, usually positions.
    pub vertices: Vec<P>,
    /// Triangles as indices into `vertices`.
    pub faces: Vec<[usize; 3]>,
}

impl<P> Default for IndexedMesh<P> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl<P> IndexedMesh<P> {
    /// Build a mesh, rejecting faces that reference missing vertices.
    pub fn new(vertices: Vec<P>, faces: Vec<[usize; 3]>) -> Result<Self, MeshTopoError> {
        check_face_indices(&faces, vertices.len())?;
        Ok(Self { vertices, faces })
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_follows_largest_index() {
        assert_eq!(vertex_count::<[usize; 3]>(&[]), 0);
        assert_eq!(vertex_count(&[[0usize, 1, 2], [2, 1, 7]]), 8);
        assert_eq!(vertex_count(&[[0usize, 1, 2, 3]]), 4);
    }

    #[test]
    fn new_rejects_dangling_face() {
        let err = IndexedMesh::new(vec![[0.0; 3]; 3], vec![[0, 1, 3]]).unwrap_err();
        assert_eq!(
            err,
            MeshTopoError::VertexIndexOutOfRange {
                face: 0,
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn unreferenced_vertices_are_kept() {
        let mesh = IndexedMesh::new(vec![[0.0; 3]; 5], vec![[0, 1, 2]]).unwrap();
        assert_eq!(mesh.num_vertices(), 5);
        assert_eq!(vertex_count(&mesh.faces), 3);
    }
}
