//! Vertex-to-face incidence in CSR form.
//!
//! Faces incident to vertex `i` occupy `vf[ni[i]..ni[i + 1]]`, and
//! `vfi[j]` is the corner of `vf[j]` that holds `i`. Built by a counting sort
//! over face corners: one pass for degrees, a prefix sum, one scatter pass.
//!
//! A face that repeats a vertex (combinatorially degenerate) is listed once per
//! occurrence under that vertex.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshTopoError;
use crate::topology::corner::Triangle;
use crate::topology::mesh::{check_face_indices, vertex_count};

/// CSR incidence table `VF`/`NI` with corner indices `VFi`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexFaceAdjacency {
    /// Incident face ids, grouped by vertex. Length `3 * #F`.
    pub vf: Vec<usize>,
    /// Corner of `vf[j]` holding the vertex, parallel to `vf`.
    pub vfi: Vec<u8>,
    /// Cumulative degrees with a leading zero. Length `n + 1`.
    pub ni: Vec<usize>,
}

impl Default for VertexFaceAdjacency {
    fn default() -> Self {
        Self {
            vf: Vec::new(),
            vfi: Vec::new(),
            ni: vec![0],
        }
    }
}

impl VertexFaceAdjacency {
    /// Build incidence for `n` vertices.
    ///
    /// `n` may exceed `max(F) + 1`; trailing vertices get empty slices.
    pub fn build(faces: &[Triangle], n: usize) -> Result<Self, MeshTopoError> {
        check_face_indices(faces, n)?;

        let mut ni = vec![0usize; n + 1];
        for f in faces {
            for &v in f {
                ni[v + 1] += 1;
            }
        }
        for i in 0..n {
            ni[i + 1] += ni[i];
        }

        // running write offset per vertex
        let mut cursor = ni[..n].to_vec();
        let mut vf = vec![0usize; 3 * faces.len()];
        let mut vfi = vec![0u8; 3 * faces.len()];
        for (fid, f) in faces.iter().enumerate() {
            for (c, &v) in f.iter().enumerate() {
                let pos = cursor[v];
                vf[pos] = fid;
                vfi[pos] = c as u8;
                cursor[v] += 1;
            }
        }

        let out = Self { vf, vfi, ni };
        log::debug!(
            "vertex-face adjacency: {} vertices, {} incidences",
            out.num_vertices(),
            out.vf.len()
        );
        crate::debug_invariants!(out.validate_invariants(), "VertexFaceAdjacency::build");
        Ok(out)
    }

    /// Build with `n = max(F) + 1`.
    pub fn from_faces(faces: &[Triangle]) -> Self {
        let n = vertex_count(faces);
        // every index is < max + 1 by construction
        Self::build(faces, n).unwrap_or_default()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.ni.len().saturating_sub(1)
    }

    /// Faces incident to `v`.
    #[inline]
    pub fn faces_of(&self, v: usize) -> &[usize] {
        &self.vf[self.ni[v]..self.ni[v + 1]]
    }

    /// Corners of `v` in each face of [`faces_of`](Self::faces_of).
    #[inline]
    pub fn corners_of(&self, v: usize) -> &[u8] {
        &self.vfi[self.ni[v]..self.ni[v + 1]]
    }

    /// `(face, corner)` pairs incident to `v`.
    pub fn incidences(&self, v: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces_of(v)
            .iter()
            .copied()
            .zip(self.corners_of(v).iter().map(|&c| c as usize))
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.ni[v + 1] - self.ni[v]
    }
}

impl DebugInvariants for VertexFaceAdjacency {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "VertexFaceAdjacency");
    }

    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        ensure(!self.ni.is_empty() && self.ni[0] == 0, || {
            "NI must start with 0".to_string()
        })?;
        ensure(self.ni.windows(2).all(|w| w[0] <= w[1]), || {
            "NI must be non-decreasing".to_string()
        })?;
        let last = *self.ni.last().unwrap_or(&0);
        ensure(last == self.vf.len(), || {
            format!("NI ends at {last}, VF has {} entries", self.vf.len())
        })?;
        ensure(self.vf.len() % 3 == 0, || {
            format!("VF length {} is not a multiple of 3", self.vf.len())
        })?;
        ensure(self.vfi.len() == self.vf.len(), || {
            "VFi must be parallel to VF".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_triangle_strip() {
        let faces = [[0, 1, 2], [2, 1, 3]];
        let adj = VertexFaceAdjacency::from_faces(&faces);
        assert_eq!(adj.ni, vec![0, 1, 3, 5, 6]);
        assert_eq!(adj.faces_of(0), &[0]);
        assert_eq!(adj.faces_of(1), &[0, 1]);
        assert_eq!(adj.faces_of(2), &[0, 1]);
        assert_eq!(adj.faces_of(3), &[1]);
        let v1: Vec<_> = adj.incidences(1).collect();
        assert_eq!(v1, vec![(0, 1), (1, 1)]);
        let v2: Vec<_> = adj.incidences(2).collect();
        assert_eq!(v2, vec![(0, 2), (1, 0)]);
    }

    #[test]
    fn empty_inputs_are_valid() {
        let adj = VertexFaceAdjacency::build(&[], 0).unwrap();
        assert_eq!(adj.ni, vec![0]);
        assert!(adj.vf.is_empty());
        assert_eq!(adj.num_vertices(), 0);

        let adj = VertexFaceAdjacency::build(&[], 3).unwrap();
        assert_eq!(adj.ni, vec![0, 0, 0, 0]);
    }

    #[test]
    fn extra_vertices_get_empty_slices() {
        let adj = VertexFaceAdjacency::build(&[[0, 1, 2]], 5).unwrap();
        assert_eq!(adj.degree(3), 0);
        assert_eq!(adj.degree(4), 0);
        assert!(adj.validate_invariants().is_ok());
    }

    #[test]
    fn too_few_vertices_is_an_error() {
        let err = VertexFaceAdjacency::build(&[[0, 1, 2]], 2).unwrap_err();
        assert!(matches!(
            err,
            MeshTopoError::VertexIndexOutOfRange { vertex: 2, .. }
        ));
    }
}
