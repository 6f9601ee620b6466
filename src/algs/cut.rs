//! Cut a triangle mesh open along flagged edges.
//!
//! `cuts[f][k]` marks local edge `k` of face `f`. Both faces on an interior
//! edge should flag it; the vertex bookkeeping counts each undirected cut edge
//! once (from the side where the first endpoint is the smaller index).
//!
//! Fans are split in face-major, edge-minor order. For a vertex that ends up
//! in several fans, the fan reached last in that order keeps the original
//! index and the earlier ones receive copies. This ordering is fixed.
//!
//! Each fan is collected with a [`HalfEdgeIterator`] over the current tables,
//! then the iterator is dropped and the faces and adjacency are updated
//! before the next fan is walked. Later fans therefore see the borders that
//! earlier cuts created. A final pass detaches every flagged slot together
//! with its partner, including cut edges whose endpoints needed no copy.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Triangle, next};
use crate::topology::half_edge::HalfEdgeIterator;
use crate::topology::mesh::{IndexedMesh, check_face_indices};
use crate::topology::triangle_adjacency::TriangleAdjacency;
use crate::topology::vertex_face::VertexFaceAdjacency;

/// A cut mesh and, for each of its vertices, the source vertex it copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CutMesh<P = [f64; 3]> {
    pub mesh: IndexedMesh<P>,
    /// `birth[i]` is the source vertex of vertex `i`; identity on the
    /// original vertices.
    pub birth: Vec<usize>,
}

/// Cut a copy of `mesh`; the input is left untouched.
pub fn cut_mesh<P: Clone>(
    mesh: &IndexedMesh<P>,
    cuts: &[[bool; 3]],
) -> Result<CutMesh<P>, MeshTopoError> {
    let mut vertices = mesh.vertices.clone();
    let mut faces = mesh.faces.clone();
    let birth = cut_mesh_in_place(&mut vertices, &mut faces, cuts)?;
    Ok(CutMesh {
        mesh: IndexedMesh { vertices, faces },
        birth,
    })
}

/// Cut in place, building the triangle adjacency first.
pub fn cut_mesh_in_place<P: Clone>(
    vertices: &mut Vec<P>,
    faces: &mut [Triangle],
    cuts: &[[bool; 3]],
) -> Result<Vec<usize>, MeshTopoError> {
    let vf = VertexFaceAdjacency::build(faces, vertices.len())?;
    let mut adjacency = TriangleAdjacency::build_with(faces, &vf)?;
    cut_mesh_with_adjacency(vertices, faces, &mut adjacency, cuts)
}

/// Cut in place along `cuts`, keeping `adjacency` in step: on return every
/// flagged local edge is a border in `adjacency`, on both of its sides.
///
/// New vertices are appended to `vertices` as copies of the vertex they
/// split from. Returns the source index of every vertex, old and new.
pub fn cut_mesh_with_adjacency<P: Clone>(
    vertices: &mut Vec<P>,
    faces: &mut [Triangle],
    adjacency: &mut TriangleAdjacency,
    cuts: &[[bool; 3]],
) -> Result<Vec<usize>, MeshTopoError> {
    let nf = faces.len();
    let n_v = vertices.len();
    check_cut_inputs(faces, n_v, adjacency, cuts)?;

    let eventual = eventual_fans(faces, n_v, adjacency, cuts);
    let n_new: usize = eventual.iter().map(|&e| e.saturating_sub(1)).sum();
    let mut occurrence = vec![1usize; n_v];

    vertices.reserve(n_new);
    let mut birth: Vec<usize> = (0..n_v).collect();
    birth.reserve(n_new);

    for f in 0..nf {
        for k in 0..3 {
            let v0 = faces[f][k];
            if v0 >= n_v || !cuts[f][k] || occurrence[v0] == eventual[v0] {
                continue;
            }
            let (fan, end) = collect_fan(faces, adjacency, cuts, f, k)?;

            let pos = vertices.len();
            let copy = vertices[v0].clone();
            vertices.push(copy);
            birth.push(v0);
            occurrence[v0] += 1;
            for &g in &fan {
                for slot in faces[g].iter_mut().filter(|slot| **slot == v0) {
                    *slot = pos;
                }
            }
            sever_both(adjacency, f, k);
            sever_both(adjacency, end.0, end.1);
            log::trace!("cut: vertex {v0} -> {pos}, fan {fan:?}");
        }
    }

    // flagged edges whose endpoints never needed a new fan
    for (f, row) in cuts.iter().enumerate() {
        for k in (0..3).filter(|&k| row[k]) {
            sever_both(adjacency, f, k);
        }
    }

    log::debug!(
        "cut mesh: {} new vertices (bookkeeping expects {n_new})",
        vertices.len() - n_v
    );
    crate::debug_invariants!(adjacency.validate_invariants(), "cut_mesh");
    Ok(birth)
}

/// Number of vertex copies the cut bookkeeping plans for: the sum over
/// vertices of `max(eventual - 1, 0)`, where `eventual` counts the border
/// edges leaving a vertex plus the cut edges on it.
///
/// This is an upper bound on what [`cut_mesh_with_adjacency`] appends. A
/// vertex whose fans already end on borders (a bowtie center, say) is
/// counted once per border but never split.
pub fn planned_vertex_copies(
    faces: &[Triangle],
    num_vertices: usize,
    adjacency: &TriangleAdjacency,
    cuts: &[[bool; 3]],
) -> Result<usize, MeshTopoError> {
    check_cut_inputs(faces, num_vertices, adjacency, cuts)?;
    Ok(eventual_fans(faces, num_vertices, adjacency, cuts)
        .iter()
        .map(|&e| e.saturating_sub(1))
        .sum())
}

fn check_cut_inputs(
    faces: &[Triangle],
    num_vertices: usize,
    adjacency: &TriangleAdjacency,
    cuts: &[[bool; 3]],
) -> Result<(), MeshTopoError> {
    let nf = faces.len();
    if cuts.len() != nf {
        return Err(MeshTopoError::LengthMismatch {
            what: "cut flags",
            expected: nf,
            found: cuts.len(),
        });
    }
    if adjacency.num_faces() != nf {
        return Err(MeshTopoError::LengthMismatch {
            what: "triangle adjacency rows",
            expected: nf,
            found: adjacency.num_faces(),
        });
    }
    check_face_indices(faces, num_vertices)
}

/// Fans each vertex will be split into: one per border edge leaving it, one
/// per cut edge on it.
fn eventual_fans(
    faces: &[Triangle],
    num_vertices: usize,
    adjacency: &TriangleAdjacency,
    cuts: &[[bool; 3]],
) -> Vec<usize> {
    let mut eventual = vec![0usize; num_vertices];
    for (f, tri) in faces.iter().enumerate() {
        for k in 0..3 {
            let (u, v) = (tri[k], tri[next(k)]);
            if adjacency.is_border(f, k) {
                eventual[u] += 1;
            } else if cuts[f][k] && u < v {
                eventual[u] += 1;
                eventual[v] += 1;
            }
        }
    }
    eventual
}

/// Detach `(f, k)` and, when it has one, its partner slot.
fn sever_both(adjacency: &mut TriangleAdjacency, f: usize, k: usize) {
    if let Some((g, kn)) = adjacency.across(f, k) {
        adjacency.sever(g, kn);
    }
    adjacency.sever(f, k);
}

/// Faces around `F[f][k]` from `(f, k)` up to the next cut or border, and the
/// `(face, local edge)` where the walk stopped.
fn collect_fan(
    faces: &[Triangle],
    adjacency: &TriangleAdjacency,
    cuts: &[[bool; 3]],
    f: usize,
    k: usize,
) -> Result<(Vec<usize>, (usize, usize)), MeshTopoError> {
    let mut he = HalfEdgeIterator::new(faces, adjacency, f, k, false)?;
    let mut fan = Vec::new();
    for _ in 0..=faces.len() {
        fan.push(he.fi());
        he.flip_e();
        he.flip_f();
        if cuts[he.fi()][he.ei()] || he.is_border() {
            return Ok((fan, (he.fi(), he.ei())));
        }
    }
    Err(MeshTopoError::InvariantViolation(format!(
        "fan around vertex {} starting at face {f} edge {k} never reached a cut or border",
        faces[f][k]
    )))
}
