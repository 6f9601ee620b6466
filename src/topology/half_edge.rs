//! Cell-tuple navigation on an indexed triangle mesh.
//!
//! This is not a classical half-edge structure. A cursor is the tuple
//! `(face, local edge, reverse)` in the sense of Brisson's cell-tuple complex,
//! and moves with three involutions:
//!
//! - [`flip_f`](HalfEdgeIterator::flip_f) crosses the current edge into the
//!   neighboring face (no-op on a border),
//! - [`flip_e`](HalfEdgeIterator::flip_e) swaps to the other edge of the
//!   current face incident on the current vertex,
//! - [`flip_v`](HalfEdgeIterator::flip_v) swaps to the other endpoint of the
//!   current edge.
//!
//! The cursor borrows the face list and a [`TriangleAdjacency`] and owns
//! nothing else. Mutating code (see [`cut_mesh`](crate::algs::cut::cut_mesh))
//! drops the cursor before touching the tables, so every traversal sees a
//! consistent snapshot.

use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Triangle, next, prev};
use crate::topology::triangle_adjacency::TriangleAdjacency;
use crate::topology::vertex_face::VertexFaceAdjacency;

/// Cursor over `(face, local edge, reverse)`.
///
/// The current vertex is `F[face][edge]` when not reversed and
/// `F[face][(edge + 1) % 3]` when reversed.
#[derive(Clone, Copy, Debug)]
pub struct HalfEdgeIterator<'a> {
    faces: &'a [Triangle],
    adjacency: &'a TriangleAdjacency,
    fi: usize,
    ei: usize,
    reverse: bool,
}

impl<'a> HalfEdgeIterator<'a> {
    /// Cursor at an explicit tuple.
    pub fn new(
        faces: &'a [Triangle],
        adjacency: &'a TriangleAdjacency,
        fi: usize,
        ei: usize,
        reverse: bool,
    ) -> Result<Self, MeshTopoError> {
        if adjacency.num_faces() != faces.len() {
            return Err(MeshTopoError::LengthMismatch {
                what: "triangle adjacency rows",
                expected: faces.len(),
                found: adjacency.num_faces(),
            });
        }
        if fi >= faces.len() {
            return Err(MeshTopoError::FaceIndexOutOfRange {
                face: fi,
                face_count: faces.len(),
            });
        }
        if ei > 2 {
            return Err(MeshTopoError::LocalEdgeOutOfRange { edge: ei });
        }
        Ok(Self {
            faces,
            adjacency,
            fi,
            ei,
            reverse,
        })
    }

    /// Cursor whose current vertex is `v`, on the first face incident to it.
    ///
    /// `Ok(None)` when `v` has no incident face; an error when the tables do
    /// not match `faces`.
    pub fn at_vertex(
        faces: &'a [Triangle],
        adjacency: &'a TriangleAdjacency,
        vf: &VertexFaceAdjacency,
        v: usize,
    ) -> Result<Option<Self>, MeshTopoError> {
        if v >= vf.num_vertices() {
            return Ok(None);
        }
        let Some((f, c)) = vf.incidences(v).next() else {
            return Ok(None);
        };
        Self::new(faces, adjacency, f, c, false).map(Some)
    }

    /// Cross into the neighboring face; stays put on a border.
    pub fn flip_f(&mut self) {
        if let Some((g, kn)) = self.adjacency.across(self.fi, self.ei) {
            self.fi = g;
            self.ei = kn;
            self.reverse = !self.reverse;
        }
    }

    /// Move to the other edge of this face incident on the current vertex.
    pub fn flip_e(&mut self) {
        self.ei = if self.reverse {
            next(self.ei)
        } else {
            prev(self.ei)
        };
        self.reverse = !self.reverse;
    }

    /// Make the other endpoint of the current edge the current vertex.
    pub fn flip_v(&mut self) {
        self.reverse = !self.reverse;
    }

    #[inline]
    pub fn is_border(&self) -> bool {
        self.adjacency.is_border(self.fi, self.ei)
    }

    /// Step to the next face around the current vertex, jumping across the
    /// gap when the vertex lies on a border.
    ///
    /// ```text
    ///      _________
    ///     /\ c | b /\
    ///    /  \  |  /  \
    ///   / d  \ | / a  \
    ///  /______\|/______\
    ///          v
    /// ```
    ///
    /// With `a` and `d` on the border, repeated calls visit `a, b, c, d, a, ...`.
    /// Returns `false` on the step that wraps around the gap.
    pub fn next_fe(&mut self) -> bool {
        if self.is_border() {
            // a fan of #F faces has at most #F edges to walk back over
            for _ in 0..=self.faces.len() {
                self.flip_f();
                self.flip_e();
                if self.is_border() {
                    break;
                }
            }
            self.flip_e();
            false
        } else {
            self.flip_f();
            self.flip_e();
            true
        }
    }

    /// Current vertex.
    #[inline]
    pub fn vi(&self) -> usize {
        let f = &self.faces[self.fi];
        if self.reverse { f[next(self.ei)] } else { f[self.ei] }
    }

    /// Current face.
    #[inline]
    pub fn fi(&self) -> usize {
        self.fi
    }

    /// Current local edge.
    #[inline]
    pub fn ei(&self) -> usize {
        self.ei
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Faces around the current vertex, starting with the current face, in
    /// the order [`next_fe`](Self::next_fe) visits them.
    pub fn one_ring_faces(&self) -> Vec<usize> {
        let mut ring = Vec::new();
        let mut cursor = *self;
        // a manifold fan visits each of its faces once per turn
        for _ in 0..=self.faces.len() {
            ring.push(cursor.fi);
            cursor.next_fe();
            if cursor == *self {
                break;
            }
        }
        ring
    }
}

impl PartialEq for HalfEdgeIterator<'_> {
    /// Same tuple over the same tables; cursors over different meshes never
    /// compare equal.
    fn eq(&self, other: &Self) -> bool {
        self.fi == other.fi
            && self.ei == other.ei
            && self.reverse == other.reverse
            && std::ptr::eq(self.faces, other.faces)
            && std::ptr::eq(self.adjacency, other.adjacency)
    }
}

impl Eq for HalfEdgeIterator<'_> {}
