//! Mesh data model and the connectivity tables derived from it.
//!
//! Everything here is built eagerly from a face list and is read-only
//! afterwards, except [`TriangleAdjacency::sever`] which the cutter uses.
//!
//! - [`mesh`]: [`IndexedMesh`] and the `max(F) + 1` vertex count
//! - [`corner`]: local edge and facet numbering, the [`Simplex`] trait
//! - [`vertex_face`]: vertex-to-face incidence (`VF`, `VFi`, `NI`)
//! - [`unique_edge`]: directed and unique edges (`E`, `uE`, `EMAP`, `uE2E`)
//! - [`triangle_adjacency`]: face-to-face adjacency (`TT`, `TTi`, and lists)
//! - [`half_edge`]: cell-tuple cursor
//! - [`edge_topology`]: edge-indexed tables (`EV`, `FE`, `EF`)

pub mod corner;
pub mod edge_topology;
pub mod half_edge;
pub mod mesh;
pub mod triangle_adjacency;
pub mod unique_edge;
pub mod vertex_face;

pub use corner::{Simplex, Tetrahedron, Triangle};
pub use edge_topology::EdgeTopology;
pub use half_edge::HalfEdgeIterator;
pub use mesh::{IndexedMesh, vertex_count};
pub use triangle_adjacency::{TriangleAdjacency, TriangleAdjacencyLists};
pub use unique_edge::{UniqueEdgeMap, UniqueRows, oriented_facets, unique_simplices};
pub use vertex_face::VertexFaceAdjacency;
