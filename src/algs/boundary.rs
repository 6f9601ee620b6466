//! Boundary facets, border vertices and ordered boundary loops.

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Simplex, Triangle, corner_of, next};
use crate::topology::mesh::vertex_count;
use crate::topology::triangle_adjacency::TriangleAdjacency;
use crate::topology::unique_edge::{oriented_facets, unique_rows};
use crate::topology::vertex_face::VertexFaceAdjacency;

/// Facets that belong to exactly one simplex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryFacets<K> {
    /// Boundary facets with the orientation of their owning simplex, in
    /// ascending order of their sorted vertex keys.
    pub facets: Vec<K>,
    /// Owning simplex of each facet.
    pub faces: Vec<usize>,
    /// Corner of the owning simplex each facet is opposite of.
    pub corners: Vec<usize>,
}

/// Collect the facets whose (orientation-free) key occurs exactly once.
///
/// For triangles the facets are the border edges; for tetrahedra, the
/// boundary triangles of the volume.
pub fn boundary_facets<S: Simplex>(simplices: &[S]) -> BoundaryFacets<S::Facet> {
    let m = simplices.len();
    let all = oriented_facets(simplices);
    let keys: Vec<S::Facet> = (0..S::SIZE)
        .flat_map(|c| simplices.iter().map(move |s| s.facet_key(c)))
        .collect();
    let groups = unique_rows(&keys);

    let mut counts = vec![0usize; groups.unique.len()];
    for &u in &groups.ic {
        counts[u] += 1;
    }

    let mut out = BoundaryFacets {
        facets: Vec::new(),
        faces: Vec::new(),
        corners: Vec::new(),
    };
    for (u, &row) in groups.ia.iter().enumerate() {
        if counts[u] == 1 {
            out.facets.push(all[row]);
            out.faces.push(row % m);
            out.corners.push(row / m);
        }
    }
    log::debug!("boundary facets: {} of {} unique", out.facets.len(), counts.len());
    out
}

/// Whether each vertex `0..=max(F)` ends a border edge.
pub fn is_border_vertex(faces: &[Triangle]) -> Vec<bool> {
    border_vertices(faces, &TriangleAdjacency::build(faces), vertex_count(faces))
}

fn border_vertices(faces: &[Triangle], adjacency: &TriangleAdjacency, n: usize) -> Vec<bool> {
    let mut border = vec![false; n];
    for (f, tri) in faces.iter().enumerate() {
        for k in 0..3 {
            if adjacency.is_border(f, k) {
                border[tri[k]] = true;
                border[tri[next(k)]] = true;
            }
        }
    }
    border
}

/// All boundary loops of a manifold mesh, each an ordered vertex list
/// following the face orientation.
///
/// Loops are seeded from the smallest unvisited border vertex, so the output
/// is deterministic. A closed mesh has no loops.
pub fn boundary_loops(faces: &[Triangle]) -> Vec<Vec<usize>> {
    let adjacency = TriangleAdjacency::build(faces);
    let vf = VertexFaceAdjacency::from_faces(faces);
    walk_loops(faces, &adjacency, &vf)
}

/// As [`boundary_loops`], reusing existing tables.
pub fn boundary_loops_with(
    faces: &[Triangle],
    adjacency: &TriangleAdjacency,
    vf: &VertexFaceAdjacency,
) -> Result<Vec<Vec<usize>>, MeshTopoError> {
    if adjacency.num_faces() != faces.len() {
        return Err(MeshTopoError::LengthMismatch {
            what: "triangle adjacency rows",
            expected: faces.len(),
            found: adjacency.num_faces(),
        });
    }
    let needed = vertex_count(faces);
    if vf.num_vertices() < needed {
        return Err(MeshTopoError::LengthMismatch {
            what: "vertex-face adjacency vertex count",
            expected: needed,
            found: vf.num_vertices(),
        });
    }
    Ok(walk_loops(faces, adjacency, vf))
}

fn walk_loops(
    faces: &[Triangle],
    adjacency: &TriangleAdjacency,
    vf: &VertexFaceAdjacency,
) -> Vec<Vec<usize>> {
    let mut unvisited = border_vertices(faces, adjacency, vf.num_vertices());
    let mut loops = Vec::new();

    for start in 0..unvisited.len() {
        if !unvisited[start] {
            continue;
        }
        unvisited[start] = false;
        let mut l = vec![start];
        let mut v = start;
        // follow the border edge leaving v to a vertex not yet on a loop
        while let Some(w) = vf.faces_of(v).iter().find_map(|&f| {
            let c = corner_of(&faces[f], v)?;
            let w = faces[f][next(c)];
            (adjacency.is_border(f, c) && unvisited[w]).then_some(w)
        }) {
            unvisited[w] = false;
            l.push(w);
            v = w;
        }
        loops.push(l);
    }
    log::debug!("boundary loops: {}", loops.len());
    loops
}

/// The longest boundary loop, or an empty list for a closed mesh.
///
/// Ties go to the loop found first.
pub fn boundary_loop(faces: &[Triangle]) -> Vec<usize> {
    longest(boundary_loops(faces))
}

fn longest(loops: Vec<Vec<usize>>) -> Vec<usize> {
    let mut best: Vec<usize> = Vec::new();
    for l in loops {
        if l.len() > best.len() {
            best = l;
        }
    }
    best
}
