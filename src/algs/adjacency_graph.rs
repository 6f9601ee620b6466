//! Vertex graphs of a triangle mesh.
//!
//! Provides the unique edge list, a vertex-to-vertex adjacency graph in CSR
//! form, connected components of that graph, and the Euler characteristic.
//!
//! Determinism:
//! - Neighbor lists are always sorted and deduplicated.
//! - Component ids are assigned in ascending order of their smallest vertex.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Triangle, edge_endpoints};
use crate::topology::edge_topology::EdgeTopology;
use crate::topology::mesh::{check_face_indices, vertex_count};
use crate::topology::unique_edge::UniqueEdgeMap;

/// Unique undirected edges, each `[min, max]`, in ascending order.
pub fn edges(faces: &[Triangle]) -> Vec<[usize; 2]> {
    UniqueEdgeMap::build(faces).ue
}

/// CSR-style adjacency graph over vertex indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    /// CSR offsets into `adjncy` for each vertex.
    pub xadj: Vec<usize>,
    /// CSR adjacency list.
    pub adjncy: Vec<usize>,
}

impl AdjacencyGraph {
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.xadj.len() - 1
    }

    /// Return the neighbor index slice for vertex `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }
}

/// Vertex adjacency for `#V = max(F) + 1`.
pub fn vertex_adjacency_graph(faces: &[Triangle]) -> AdjacencyGraph {
    build_graph(faces, vertex_count(faces))
}

/// Vertex adjacency for an explicit vertex count.
pub fn vertex_adjacency_graph_with_count(
    faces: &[Triangle],
    n: usize,
) -> Result<AdjacencyGraph, MeshTopoError> {
    check_face_indices(faces, n)?;
    Ok(build_graph(faces, n))
}

fn build_graph(faces: &[Triangle], n: usize) -> AdjacencyGraph {
    let mut neigh: Vec<Vec<usize>> = vec![Vec::new(); n];
    for tri in faces {
        for k in 0..3 {
            let [a, b] = edge_endpoints(tri, k);
            if a != b {
                neigh[a].push(b);
                neigh[b].push(a);
            }
        }
    }

    let mut xadj = Vec::with_capacity(n + 1);
    let mut adjncy = Vec::new();
    xadj.push(0);
    for list in &mut neigh {
        list.sort_unstable();
        list.dedup();
        adjncy.extend(list.iter().copied());
        xadj.push(adjncy.len());
    }
    log::debug!(
        "vertex adjacency graph: {n} vertices, {} directed arcs",
        adjncy.len()
    );
    AdjacencyGraph { xadj, adjncy }
}

/// Connected components of a vertex graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    /// Component id of each vertex.
    pub ids: Vec<usize>,
    /// Number of vertices in each component.
    pub counts: Vec<usize>,
}

impl Components {
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Breadth-first components of `graph`. An isolated vertex is its own
/// component.
pub fn graph_components(graph: &AdjacencyGraph) -> Components {
    let n = graph.num_vertices();
    let mut ids = vec![usize::MAX; n];
    let mut counts = Vec::new();
    let mut q: VecDeque<usize> = VecDeque::new();
    for seed in 0..n {
        if ids[seed] != usize::MAX {
            continue;
        }
        let id = counts.len();
        counts.push(0);
        ids[seed] = id;
        q.push_back(seed);
        while let Some(v) = q.pop_front() {
            counts[id] += 1;
            for &w in graph.neighbors(v) {
                if ids[w] == usize::MAX {
                    ids[w] = id;
                    q.push_back(w);
                }
            }
        }
    }
    Components { ids, counts }
}

/// Components of the vertices `0..=max(F)`; unreferenced vertices stand alone.
pub fn vertex_components(faces: &[Triangle]) -> Components {
    graph_components(&vertex_adjacency_graph(faces))
}

/// `#V - #E + #F` with `#V = max(F) + 1`.
pub fn euler_characteristic(faces: &[Triangle]) -> isize {
    let nv = vertex_count(faces) as isize;
    let ne = edges(faces).len() as isize;
    nv - ne + faces.len() as isize
}

/// `#V - #E + #F` with an explicit vertex count and edges counted through
/// [`EdgeTopology`], which requires an edge-manifold mesh.
pub fn euler_characteristic_with_count(
    faces: &[Triangle],
    n: usize,
) -> Result<isize, MeshTopoError> {
    check_face_indices(faces, n)?;
    let ne = EdgeTopology::build(faces)?.num_edges();
    Ok(n as isize - ne as isize + faces.len() as isize)
}
