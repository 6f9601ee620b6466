//! Local edge and facet numbering.
//!
//! Two numberings exist for the three edges of a triangle and this module is
//! the only place that converts between them.
//!
//! - **Local edge** `k` runs from corner `k` to corner `(k + 1) % 3`, i.e. the
//!   directed edge `(f[k], f[(k + 1) % 3])`. Every per-face table in the crate
//!   (triangle adjacency, the cell-tuple iterator, edge topology, manifold
//!   flags, cut flags) is indexed by local edge.
//! - **Facet** `c` is the facet *opposite* corner `c`. It is used only by the
//!   row layout of [`oriented_facets`](crate::topology::unique_edge::oriented_facets)
//!   (`row = f + #F * c`) and by the corner output of
//!   [`boundary_facets`](crate::algs::boundary::boundary_facets).
//!
//! For triangles, facet `c` is the local edge starting at corner `c + 1`.

use serde::{Serialize, de::DeserializeOwned};

/// A triangle as three vertex indices.
pub type Triangle = [usize; 3];
/// A tetrahedron as four vertex indices.
pub type Tetrahedron = [usize; 4];

/// Corner index one step forward around a triangle.
#[inline]
pub const fn next(k: usize) -> usize {
    (k + 1) % 3
}

/// Corner index one step backward around a triangle.
#[inline]
pub const fn prev(k: usize) -> usize {
    (k + 2) % 3
}

/// Local edge equal to the facet opposite corner `c`.
#[inline]
pub const fn edge_of_facet(c: usize) -> usize {
    next(c)
}

/// Facet (opposite-corner numbering) equal to local edge `k`.
#[inline]
pub const fn facet_of_edge(k: usize) -> usize {
    prev(k)
}

/// Directed endpoints of local edge `k` of face `f`.
#[inline]
pub fn edge_endpoints(f: &Triangle, k: usize) -> [usize; 2] {
    [f[k], f[next(k)]]
}

/// Corner of `f` holding vertex `v`, if any.
#[inline]
pub fn corner_of(f: &Triangle, v: usize) -> Option<usize> {
    f.iter().position(|&x| x == v)
}

/// Sort a small index array ascending (used for undirected keys).
#[inline]
pub fn sorted<const N: usize>(mut a: [usize; N]) -> [usize; N] {
    a.sort_unstable();
    a
}

/// A simplex whose facets can be enumerated: triangles (facets are edges)
/// and tetrahedra (facets are triangles).
///
/// Simplex kinds without an implementation are rejected at compile time.
pub trait Simplex: Copy + Eq + Serialize + DeserializeOwned {
    /// Number of corners.
    const SIZE: usize;
    /// Facet type, one vertex fewer than the simplex.
    type Facet: Copy + Ord + std::fmt::Debug + Serialize + DeserializeOwned;

    /// Oriented facet opposite corner `c`.
    fn facet(&self, c: usize) -> Self::Facet;
    /// Facet with its vertices sorted ascending (orientation-free key).
    fn facet_key(&self, c: usize) -> Self::Facet;
    /// Vertex indices of this simplex.
    fn vertices(&self) -> &[usize];
}

impl Simplex for Triangle {
    const SIZE: usize = 3;
    type Facet = [usize; 2];

    #[inline]
    fn facet(&self, c: usize) -> [usize; 2] {
        [self[next(c)], self[prev(c)]]
    }

    #[inline]
    fn facet_key(&self, c: usize) -> [usize; 2] {
        sorted(self.facet(c))
    }

    #[inline]
    fn vertices(&self) -> &[usize] {
        self
    }
}

impl Simplex for Tetrahedron {
    const SIZE: usize = 4;
    type Facet = [usize; 3];

    /// Winding per facet: (1,3,2), (0,2,3), (0,3,1), (0,1,2).
    #[inline]
    fn facet(&self, c: usize) -> [usize; 3] {
        match c {
            0 => [self[1], self[3], self[2]],
            1 => [self[0], self[2], self[3]],
            2 => [self[0], self[3], self[1]],
            _ => [self[0], self[1], self[2]],
        }
    }

    #[inline]
    fn facet_key(&self, c: usize) -> [usize; 3] {
        sorted(self.facet(c))
    }

    #[inline]
    fn vertices(&self) -> &[usize] {
        self
    }
}
