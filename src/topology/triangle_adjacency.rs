//! Triangle-triangle adjacency.
//!
//! Two builds are provided:
//!
//! - [`TriangleAdjacency`]: one neighbor per local edge (`TT`) plus the local
//!   edge of the neighbor that leads back (`TTi`). Built from
//!   [`VertexFaceAdjacency`] and assumes an edge-manifold mesh; on an edge
//!   shared by three or more faces the first match wins and the symmetry
//!   invariant no longer holds.
//! - [`TriangleAdjacencyLists`]: every neighbor per local edge, in CSR form,
//!   built from a [`UniqueEdgeMap`]. Correct for any face list.
//!
//! Local edge `k` of face `f` is the directed edge `(f[k], f[(k + 1) % 3])`.
//!
//! Symmetry: if `tt[f][k] == Some(g)` then `tt[g][tti[f][k]] == Some(f)` and
//! `tti[g][tti[f][k]] == Some(k)`. [`HalfEdgeIterator::flip_f`] relies on it.
//!
//! [`HalfEdgeIterator::flip_f`]: crate::topology::half_edge::HalfEdgeIterator::flip_f

use serde::{Deserialize, Serialize};

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Triangle, edge_endpoints, next};
use crate::topology::mesh::vertex_count;
use crate::topology::unique_edge::UniqueEdgeMap;
use crate::topology::vertex_face::VertexFaceAdjacency;

/// `TT`/`TTi` tables of an edge-manifold triangle mesh. `None` marks a border.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleAdjacency {
    /// Face across each local edge.
    pub tt: Vec<[Option<usize>; 3]>,
    /// Local edge, in the face across, that shares the edge.
    pub tti: Vec<[Option<usize>; 3]>,
}

impl TriangleAdjacency {
    /// Build with `#V = max(F) + 1`.
    pub fn build(faces: &[Triangle]) -> Self {
        let vf = VertexFaceAdjacency::from_faces(faces);
        Self::scan(faces, &vf)
    }

    /// Build from an existing incidence table.
    pub fn build_with(
        faces: &[Triangle],
        vf: &VertexFaceAdjacency,
    ) -> Result<Self, MeshTopoError> {
        let needed = vertex_count(faces);
        if vf.num_vertices() < needed {
            return Err(MeshTopoError::LengthMismatch {
                what: "vertex-face adjacency vertex count",
                expected: needed,
                found: vf.num_vertices(),
            });
        }
        Ok(Self::scan(faces, vf))
    }

    fn scan(faces: &[Triangle], vf: &VertexFaceAdjacency) -> Self {
        let mut tt = vec![[None; 3]; faces.len()];
        for (f, tri) in faces.iter().enumerate() {
            for k in 0..3 {
                let [vi, vin] = edge_endpoints(tri, k);
                tt[f][k] = vf
                    .faces_of(vi)
                    .iter()
                    .copied()
                    .find(|&g| g != f && faces[g].contains(&vin));
            }
        }

        let mut tti = vec![[None; 3]; faces.len()];
        for (f, tri) in faces.iter().enumerate() {
            for k in 0..3 {
                if let Some(g) = tt[f][k] {
                    tti[f][k] = shared_edge(&faces[g], edge_endpoints(tri, k));
                }
            }
        }

        log::debug!(
            "triangle adjacency: {} faces, {} border edges",
            faces.len(),
            tt.iter().flatten().filter(|n| n.is_none()).count()
        );
        Self { tt, tti }
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.tt.len()
    }

    /// Face across local edge `k` of `f`.
    #[inline]
    pub fn neighbor(&self, f: usize, k: usize) -> Option<usize> {
        self.tt[f][k]
    }

    /// `(face, local edge)` across local edge `k` of `f`.
    #[inline]
    pub fn across(&self, f: usize, k: usize) -> Option<(usize, usize)> {
        Some((self.tt[f][k]?, self.tti[f][k]?))
    }

    #[inline]
    pub fn is_border(&self, f: usize, k: usize) -> bool {
        self.tt[f][k].is_none()
    }

    /// Whether any edge of `f` is a border.
    #[inline]
    pub fn touches_border(&self, f: usize) -> bool {
        self.tt[f].iter().any(Option::is_none)
    }

    /// Turn local edge `k` of `f` into a border on this side only.
    #[inline]
    pub fn sever(&mut self, f: usize, k: usize) {
        self.tt[f][k] = None;
        self.tti[f][k] = None;
    }
}

/// Local edge of `g` with the same endpoints as `edge`. The oppositely
/// oriented match (consistent winding) is preferred.
fn shared_edge(g: &Triangle, [a, b]: [usize; 2]) -> Option<usize> {
    (0..3)
        .find(|&kn| g[kn] == b && g[next(kn)] == a)
        .or_else(|| (0..3).find(|&kn| g[kn] == a && g[next(kn)] == b))
}

impl DebugInvariants for TriangleAdjacency {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "TriangleAdjacency");
    }

    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        ensure(self.tt.len() == self.tti.len(), || {
            "TT and TTi must have one row per face".to_string()
        })?;
        for f in 0..self.num_faces() {
            for k in 0..3 {
                let Some(g) = self.tt[f][k] else { continue };
                let Some(kn) = self.tti[f][k] else {
                    return Err(MeshTopoError::InvariantViolation(format!(
                        "TT[{f}][{k}] = {g} has no TTi entry"
                    )));
                };
                ensure(g < self.num_faces() && kn < 3, || {
                    format!("TT[{f}][{k}] = ({g}, {kn}) out of range")
                })?;
                ensure(self.tt[g][kn] == Some(f) && self.tti[g][kn] == Some(k), || {
                    format!(
                        "asymmetric adjacency: ({f},{k}) -> ({g},{kn}) -> ({:?},{:?})",
                        self.tt[g][kn], self.tti[g][kn]
                    )
                })?;
            }
        }
        Ok(())
    }
}

/// All faces across each local edge, for meshes that may be non-manifold.
///
/// Neighbors of local edge `k` of face `f` sit in slot `3 * f + k`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleAdjacencyLists {
    /// CSR offsets, `3 * #F + 1` entries.
    pub offsets: Vec<usize>,
    /// Neighbor faces.
    pub faces: Vec<usize>,
    /// Local edge of each neighbor that shares the edge, parallel to `faces`.
    pub edges: Vec<u8>,
}

impl TriangleAdjacencyLists {
    pub fn build(faces: &[Triangle]) -> Self {
        Self::from_edge_map(&UniqueEdgeMap::build(faces))
    }

    /// Every other directed edge in the same unique-edge group is a neighbor.
    pub fn from_edge_map(map: &UniqueEdgeMap) -> Self {
        let nf = map.num_faces;
        let mut offsets = Vec::with_capacity(3 * nf + 1);
        let mut faces = Vec::new();
        let mut edges = Vec::new();
        offsets.push(0);
        for f in 0..nf {
            for k in 0..3 {
                let row = map.row_of(f, k);
                for &other in map.occurrences(map.emap[row]) {
                    if other != row {
                        faces.push(map.face_of(other));
                        edges.push(map.local_edge_of(other) as u8);
                    }
                }
                offsets.push(faces.len());
            }
        }
        log::debug!(
            "triangle adjacency lists: {nf} faces, {} neighbor entries",
            faces.len()
        );
        Self {
            offsets,
            faces,
            edges,
        }
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        (self.offsets.len() - 1) / 3
    }

    #[inline]
    fn slot(&self, f: usize, k: usize) -> std::ops::Range<usize> {
        self.offsets[3 * f + k]..self.offsets[3 * f + k + 1]
    }

    /// Faces across local edge `k` of `f`.
    #[inline]
    pub fn neighbors(&self, f: usize, k: usize) -> &[usize] {
        &self.faces[self.slot(f, k)]
    }

    /// Local edges of [`neighbors`](Self::neighbors) in their own faces.
    #[inline]
    pub fn neighbor_edges(&self, f: usize, k: usize) -> &[u8] {
        &self.edges[self.slot(f, k)]
    }

    /// All neighbors of `f` over its three edges.
    #[inline]
    pub fn face_neighbors(&self, f: usize) -> &[usize] {
        &self.faces[self.offsets[3 * f]..self.offsets[3 * f + 3]]
    }

    #[inline]
    pub fn is_border(&self, f: usize, k: usize) -> bool {
        self.slot(f, k).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_adjacency() {
        let faces = [[0, 1, 2], [2, 1, 3]];
        let adj = TriangleAdjacency::build(&faces);
        // edge 1 of face 0 is (1, 2); edge 0 of face 1 is (2, 1)
        assert_eq!(adj.tt[0], [None, Some(1), None]);
        assert_eq!(adj.tt[1], [Some(0), None, None]);
        assert_eq!(adj.across(0, 1), Some((1, 0)));
        assert_eq!(adj.across(1, 0), Some((0, 1)));
        assert!(adj.touches_border(0));
        assert!(adj.validate_invariants().is_ok());
    }

    #[test]
    fn closed_tetrahedron_has_no_border() {
        let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let adj = TriangleAdjacency::build(&faces);
        for f in 0..4 {
            assert!(!adj.touches_border(f));
        }
        assert!(adj.validate_invariants().is_ok());
    }

    #[test]
    fn inconsistent_winding_still_pairs_up() {
        // face 1 repeats the shared edge in the same direction
        let faces = [[0, 1, 2], [1, 2, 3]];
        let adj = TriangleAdjacency::build(&faces);
        assert_eq!(adj.across(0, 1), Some((1, 0)));
        assert_eq!(adj.across(1, 0), Some((0, 1)));
    }

    #[test]
    fn sever_makes_a_one_sided_border() {
        let faces = [[0, 1, 2], [2, 1, 3]];
        let mut adj = TriangleAdjacency::build(&faces);
        adj.sever(0, 1);
        assert!(adj.is_border(0, 1));
        assert!(!adj.is_border(1, 0));
        assert!(adj.validate_invariants().is_err());
    }

    #[test]
    fn build_with_checks_vertex_coverage() {
        let faces = [[0, 1, 2], [2, 1, 3]];
        let vf = VertexFaceAdjacency::build(&faces[..1], 3).unwrap();
        assert!(TriangleAdjacency::build_with(&faces, &vf).is_err());
    }

    #[test]
    fn lists_keep_every_neighbor_of_a_fin() {
        // three faces hinged on edge (0, 1)
        let faces = [[0, 1, 2], [1, 0, 3], [0, 1, 4]];
        let lists = TriangleAdjacencyLists::build(&faces);
        assert_eq!(lists.num_faces(), 3);
        let mut n = lists.neighbors(0, 0).to_vec();
        n.sort_unstable();
        assert_eq!(n, vec![1, 2]);
        assert!(lists.is_border(0, 1));
        // face 1 sees edge (0, 1) as its local edge 0 (1 -> 0)
        let pos = lists.neighbors(2, 0).iter().position(|&g| g == 1).unwrap();
        assert_eq!(lists.neighbor_edges(2, 0)[pos], 0);
    }

    #[test]
    fn lists_agree_with_fast_path_on_manifold_input() {
        let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let adj = TriangleAdjacency::build(&faces);
        let lists = TriangleAdjacencyLists::build(&faces);
        for f in 0..faces.len() {
            for k in 0..3 {
                assert_eq!(lists.neighbors(f, k), adj.tt[f][k].as_slice());
                assert_eq!(
                    lists.neighbor_edges(f, k).first().map(|&e| e as usize),
                    adj.tti[f][k]
                );
            }
        }
    }

    #[test]
    fn empty_mesh() {
        let adj = TriangleAdjacency::build(&[]);
        assert_eq!(adj.num_faces(), 0);
        let lists = TriangleAdjacencyLists::build(&[]);
        assert_eq!(lists.num_faces(), 0);
        assert_eq!(lists.offsets, vec![0]);
    }
}
