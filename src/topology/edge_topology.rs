//! Edge-indexed topology for edge-manifold triangle meshes.
//!
//! Every undirected edge gets an id. `ev[e]` holds its endpoints (ascending),
//! `fe[f][k]` the id of local edge `k` of face `f`, and `ef[e]` the (at most
//! two) faces on it. After construction `ef[e][0]` is the face that traverses
//! `ev[e]` in the stored direction, when there is one.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Triangle, edge_endpoints, next, sorted};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTopology {
    /// Edge endpoints, ascending.
    pub ev: Vec<[usize; 2]>,
    /// Edge id of each local edge.
    pub fe: Vec<[usize; 3]>,
    /// Incident faces; a border edge has one `None` slot.
    pub ef: Vec<[Option<usize>; 2]>,
}

impl EdgeTopology {
    /// Build the tables. Fails on the first edge shared by three or more faces.
    pub fn build(faces: &[Triangle]) -> Result<Self, MeshTopoError> {
        if faces.is_empty() {
            return Ok(Self::default());
        }

        // (min, max, face, local edge)
        let mut ett: Vec<(usize, usize, usize, usize)> = Vec::with_capacity(3 * faces.len());
        for (f, tri) in faces.iter().enumerate() {
            for k in 0..3 {
                let [a, b] = sorted(edge_endpoints(tri, k));
                ett.push((a, b, f, k));
            }
        }
        ett.sort_unstable();

        let key = |r: &(usize, usize, usize, usize)| (r.0, r.1);
        let mut ev = Vec::new();
        let mut ef = Vec::new();
        let mut fe = vec![[0usize; 3]; faces.len()];
        let mut i = 0;
        while i < ett.len() {
            let r1 = ett[i];
            let e = ev.len();
            ev.push([r1.0, r1.1]);
            fe[r1.2][r1.3] = e;
            match ett.get(i + 1).filter(|r2| key(*r2) == key(&r1)) {
                Some(&r2) => {
                    if ett.get(i + 2).is_some_and(|r3| key(r3) == key(&r1)) {
                        return Err(MeshTopoError::NonManifoldEdge { v0: r1.0, v1: r1.1 });
                    }
                    fe[r2.2][r2.3] = e;
                    ef.push([Some(r1.2), Some(r2.2)]);
                    i += 2;
                }
                None => {
                    ef.push([Some(r1.2), None]);
                    i += 1;
                }
            }
        }

        // put the face that walks ev[e] forward first
        for (e, pair) in ef.iter_mut().enumerate() {
            let [a, b] = ev[e];
            if let Some(f) = pair[0] {
                let tri = &faces[f];
                let forward = (0..3).any(|k| tri[k] == a && tri[next(k)] == b);
                if !forward {
                    pair.swap(0, 1);
                }
            }
        }

        let out = Self { ev, fe, ef };
        log::debug!(
            "edge topology: {} faces, {} edges",
            out.fe.len(),
            out.ev.len()
        );
        crate::debug_invariants!(out.validate_invariants(), "EdgeTopology::build");
        Ok(out)
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.ev.len()
    }

    #[inline]
    pub fn is_border_edge(&self, e: usize) -> bool {
        self.ef[e].iter().any(Option::is_none)
    }

    /// Faces on edge `e`.
    pub fn faces_of(&self, e: usize) -> impl Iterator<Item = usize> + '_ {
        self.ef[e].iter().flatten().copied()
    }
}

impl DebugInvariants for EdgeTopology {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "EdgeTopology");
    }

    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        ensure(self.ef.len() == self.ev.len(), || {
            "EF must have one row per edge".to_string()
        })?;
        for (f, row) in self.fe.iter().enumerate() {
            for &e in row {
                ensure(e < self.ev.len(), || format!("FE[{f}] references edge {e}"))?;
                ensure(self.ef[e].contains(&Some(f)), || {
                    format!("edge {e} of face {f} does not list it in EF")
                })?;
            }
        }
        Ok(())
    }
}
