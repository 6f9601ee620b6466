//! Directed facets and their collapse into unique undirected edges.
//!
//! [`oriented_facets`] lists every directed facet of a simplex list (for
//! triangles: every half-edge) with the facet opposite corner `c` of simplex
//! `f` at row `f + #F * c`. [`UniqueEdgeMap`] groups those rows by their
//! unordered vertex pair.
//!
//! The back-references from unique edges to directed rows are stored in the
//! cumulative form `uec`/`uee`: the directed rows sharing unique edge `u` are
//! `uee[uec[u]..uec[u + 1]]`. A manifold interior edge has two rows, a border
//! edge one, and a non-manifold edge three or more; nothing special-cases the
//! count.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Simplex, Triangle, edge_of_facet, facet_of_edge, sorted};

/// All directed facets; the facet opposite corner `c` of simplex `f` lands at
/// row `f + simplices.len() * c`.
pub fn oriented_facets<S: Simplex>(simplices: &[S]) -> Vec<S::Facet> {
    let m = simplices.len();
    let mut out = Vec::with_capacity(m * S::SIZE);
    for c in 0..S::SIZE {
        out.extend(simplices.iter().map(|s| s.facet(c)));
    }
    out
}

/// Result of grouping equal rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueRows<K> {
    /// Distinct rows in ascending order.
    pub unique: Vec<K>,
    /// For each unique row, the first input row equal to it.
    pub ia: Vec<usize>,
    /// For each input row, its index into `unique`.
    pub ic: Vec<usize>,
}

/// Group equal rows: stable lexicographic sort, then one pass over runs.
pub fn unique_rows<K: Ord + Copy>(rows: &[K]) -> UniqueRows<K> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by_key(|&i| rows[i]);

    let mut unique = Vec::new();
    let mut ia = Vec::new();
    let mut ic = vec![0usize; rows.len()];
    for (key, run) in &order.iter().copied().chunk_by(|&i| rows[i]) {
        let id = unique.len();
        let mut run = run.peekable();
        if let Some(&first) = run.peek() {
            ia.push(first);
        }
        for i in run {
            ic[i] = id;
        }
        unique.push(key);
    }
    UniqueRows { unique, ia, ic }
}

/// Combinatorially unique simplices, independent of vertex order within a
/// simplex. Representatives are returned sorted ascending.
pub fn unique_simplices<const N: usize>(simplices: &[[usize; N]]) -> UniqueRows<[usize; N]> {
    let keys: Vec<[usize; N]> = simplices.iter().map(|&s| sorted(s)).collect();
    unique_rows(&keys)
}

/// Directed half-edges of a triangle list and their unique undirected edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueEdgeMap {
    /// Number of faces the map was built from.
    pub num_faces: usize,
    /// `3 * #F` directed edges in oriented-facet order.
    pub e: Vec<[usize; 2]>,
    /// Unique undirected edges, each sorted ascending, rows in ascending order.
    pub ue: Vec<[usize; 2]>,
    /// Row of `ue` for each row of `e`.
    pub emap: Vec<usize>,
    /// Cumulative directed-edge counts per unique edge, leading zero.
    pub uec: Vec<usize>,
    /// Directed rows grouped by unique edge, ascending within a group.
    pub uee: Vec<usize>,
}

impl UniqueEdgeMap {
    pub fn build(faces: &[Triangle]) -> Self {
        let e = oriented_facets(faces);
        let UniqueRows { unique: ue, ic: emap, .. } = unique_simplices(&e);

        let mut uec = vec![0usize; ue.len() + 1];
        for &u in &emap {
            uec[u + 1] += 1;
        }
        for u in 0..ue.len() {
            uec[u + 1] += uec[u];
        }
        let mut cursor = uec[..ue.len()].to_vec();
        let mut uee = vec![0usize; emap.len()];
        for (row, &u) in emap.iter().enumerate() {
            uee[cursor[u]] = row;
            cursor[u] += 1;
        }

        let out = Self {
            num_faces: faces.len(),
            e,
            ue,
            emap,
            uec,
            uee,
        };
        log::debug!(
            "unique edge map: {} directed edges, {} unique edges",
            out.e.len(),
            out.ue.len()
        );
        crate::debug_invariants!(out.validate_invariants(), "UniqueEdgeMap::build");
        out
    }

    #[inline]
    pub fn num_unique(&self) -> usize {
        self.ue.len()
    }

    /// Directed rows sharing unique edge `u` (the `uE2E[u]` list).
    #[inline]
    pub fn occurrences(&self, u: usize) -> &[usize] {
        &self.uee[self.uec[u]..self.uec[u + 1]]
    }

    /// Number of directed edges sharing unique edge `u`.
    #[inline]
    pub fn multiplicity(&self, u: usize) -> usize {
        self.uec[u + 1] - self.uec[u]
    }

    /// Face owning directed row `row`.
    #[inline]
    pub fn face_of(&self, row: usize) -> usize {
        row % self.num_faces
    }

    /// Corner that directed row `row` is opposite of.
    #[inline]
    pub fn facet_of(&self, row: usize) -> usize {
        row / self.num_faces
    }

    /// Local edge (corner-to-next-corner numbering) of directed row `row`.
    #[inline]
    pub fn local_edge_of(&self, row: usize) -> usize {
        edge_of_facet(self.facet_of(row))
    }

    /// Directed row of local edge `k` of face `f`.
    #[inline]
    pub fn row_of(&self, f: usize, k: usize) -> usize {
        f + self.num_faces * facet_of_edge(k)
    }

    /// Unique edge of local edge `k` of face `f`.
    #[inline]
    pub fn unique_of(&self, f: usize, k: usize) -> usize {
        self.emap[self.row_of(f, k)]
    }

    /// Expand the cumulative encoding into one list per unique edge.
    pub fn to_lists(&self) -> Vec<Vec<usize>> {
        (0..self.num_unique())
            .map(|u| self.occurrences(u).to_vec())
            .collect()
    }
}

impl DebugInvariants for UniqueEdgeMap {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "UniqueEdgeMap");
    }

    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        ensure(self.e.len() == 3 * self.num_faces, || {
            format!("{} directed edges for {} faces", self.e.len(), self.num_faces)
        })?;
        ensure(self.emap.len() == self.e.len(), || {
            "EMAP must have one entry per directed edge".to_string()
        })?;
        ensure(self.uec.len() == self.ue.len() + 1, || {
            "uEC must have #uE + 1 entries".to_string()
        })?;
        for (row, (&edge, &u)) in self.e.iter().zip(&self.emap).enumerate() {
            ensure(self.ue.get(u) == Some(&sorted(edge)), || {
                format!("directed edge {row} {edge:?} maps to unique edge {u}")
            })?;
            ensure(self.occurrences(u).contains(&row), || {
                format!("directed edge {row} missing from uE2E[{u}]")
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oriented_facet_rows_are_facet_major() {
        let faces: [Triangle; 2] = [[0, 1, 2], [2, 1, 3]];
        let e = oriented_facets(&faces);
        assert_eq!(e, vec![[1, 2], [1, 3], [2, 0], [3, 2], [0, 1], [2, 1]]);
    }

    #[test]
    fn unique_rows_picks_first_occurrence() {
        let rows = [3, 1, 3, 2, 1];
        let u = unique_rows(&rows);
        assert_eq!(u.unique, vec![1, 2, 3]);
        assert_eq!(u.ia, vec![1, 3, 0]);
        assert_eq!(u.ic, vec![2, 0, 2, 1, 0]);
    }

    #[test]
    fn unique_simplices_ignores_orientation() {
        let u = unique_simplices(&[[0, 1, 2], [2, 1, 0], [1, 2, 3]]);
        assert_eq!(u.unique, vec![[0, 1, 2], [1, 2, 3]]);
        assert_eq!(u.ic, vec![0, 0, 1]);
    }

    #[test]
    fn strip_has_one_shared_edge() {
        let faces = [[0, 1, 2], [2, 1, 3]];
        let map = UniqueEdgeMap::build(&faces);
        assert_eq!(map.ue, vec![[0, 1], [0, 2], [1, 2], [1, 3], [2, 3]]);
        let shared = map.ue.iter().position(|&e| e == [1, 2]).unwrap();
        assert_eq!(map.occurrences(shared), &[0, 5]);
        assert_eq!(map.multiplicity(shared), 2);
        // row 5: face 1, opposite corner 2, which is local edge 0 (2 -> 1)
        assert_eq!(map.face_of(5), 1);
        assert_eq!(map.local_edge_of(5), 0);
        assert_eq!(map.unique_of(1, 0), shared);
        assert!(map.validate_invariants().is_ok());
    }

    #[test]
    fn fan_of_three_faces_on_one_edge() {
        let faces = [[0, 1, 2], [1, 0, 3], [0, 1, 4]];
        let map = UniqueEdgeMap::build(&faces);
        let u = map.ue.iter().position(|&e| e == [0, 1]).unwrap();
        assert_eq!(map.multiplicity(u), 3);
        let lists = map.to_lists();
        assert_eq!(lists[u].len(), 3);
    }

    #[test]
    fn empty_face_list() {
        let map = UniqueEdgeMap::build(&[]);
        assert!(map.e.is_empty());
        assert_eq!(map.uec, vec![0]);
        assert!(map.validate_invariants().is_ok());
    }
}
