//! Algorithms over the derived connectivity tables.

pub mod adjacency_graph;
pub mod boundary;
pub mod cut;
pub mod manifold;

pub use adjacency_graph::{
    AdjacencyGraph, Components, edges, euler_characteristic, vertex_adjacency_graph,
    vertex_components,
};
pub use boundary::{BoundaryFacets, boundary_facets, boundary_loop, boundary_loops, is_border_vertex};
pub use cut::{
    CutMesh, cut_mesh, cut_mesh_in_place, cut_mesh_with_adjacency, planned_vertex_copies,
};
pub use manifold::{
    EdgeManifoldReport, ManifoldValidationOptions, NonManifoldHandling, VertexManifoldReport,
    is_edge_manifold, is_vertex_manifold, validate_manifold,
};
