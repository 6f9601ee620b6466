#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-topo
//!
//! mesh-topo is the combinatorial core of a triangle-mesh processing library.
//! It turns a plain face index array into the connectivity tables that
//! geometry code (normals, Laplacians, parameterization) is built on, and
//! provides the topological queries and edits that need them.
//!
//! ## Features
//! - Vertex-face incidence, directed and unique edges, face-face adjacency
//!   (a fast table for edge-manifold meshes and CSR lists for any mesh)
//! - A cell-tuple cursor for walking around vertices and across edges
//! - Edge- and vertex-manifoldness checks with option-driven validation
//! - Boundary facets (triangles and tetrahedra) and ordered boundary loops
//! - Cutting a mesh open along flagged edges
//! - Vertex graphs, connected components and the Euler characteristic
//!
//! ## Conventions
//!
//! Faces are `[usize; 3]`. Local edge `k` of face `f` is the directed edge
//! `(f[k], f[(k + 1) % 3])` in every per-face table; see
//! [`topology::corner`] for the one place where the "facet opposite corner"
//! numbering appears. Border slots are `None`.
//!
//! Unless a function takes an explicit vertex count, a face list implies
//! `#V = max(F) + 1`.
//!
//! ## Cargo features
//! - `rayon`: per-vertex manifold checks run in parallel.
//! - `strict-invariants` / `check-invariants`: keep the structural self-checks
//!   of [`DebugInvariants`] in release builds.
//!
//! ```
//! use mesh_topo::prelude::*;
//!
//! let faces = vec![[0, 1, 2], [2, 1, 3]];
//! let tt = TriangleAdjacency::build(&faces);
//! assert_eq!(tt.neighbor(0, 1), Some(1));
//! assert_eq!(boundary_loop(&faces), vec![0, 1, 3, 2]);
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use mesh_error::MeshTopoError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::adjacency_graph::{
        AdjacencyGraph, edges, euler_characteristic, vertex_adjacency_graph, vertex_components,
    };
    pub use crate::algs::boundary::{
        boundary_facets, boundary_loop, boundary_loops, is_border_vertex,
    };
    pub use crate::algs::cut::{
        CutMesh, cut_mesh, cut_mesh_in_place, cut_mesh_with_adjacency, planned_vertex_copies,
    };
    pub use crate::algs::manifold::{
        ManifoldValidationOptions, NonManifoldHandling, is_edge_manifold, is_vertex_manifold,
        validate_manifold,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::MeshTopoError;
    pub use crate::topology::corner::{Simplex, Tetrahedron, Triangle};
    pub use crate::topology::edge_topology::EdgeTopology;
    pub use crate::topology::half_edge::HalfEdgeIterator;
    pub use crate::topology::mesh::IndexedMesh;
    pub use crate::topology::triangle_adjacency::{TriangleAdjacency, TriangleAdjacencyLists};
    pub use crate::topology::unique_edge::UniqueEdgeMap;
    pub use crate::topology::vertex_face::VertexFaceAdjacency;
}
