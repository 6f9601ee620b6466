//! MeshTopoError: Unified error type for mesh-topo public APIs
//!
//! Every operation that can observe a precondition violation (an index out of
//! range, a flag array of the wrong length, a non-manifold edge where one is
//! forbidden) reports it through this type before producing any table, so a
//! malformed input never turns into silently wrong topology.

use thiserror::Error;

/// Unified error type for mesh-topo operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshTopoError {
    /// A face refers to a vertex outside `[0, vertex_count)`.
    #[error("face {face} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// A face index outside `[0, face_count)`.
    #[error("face index {face} out of range (mesh has {face_count} faces)")]
    FaceIndexOutOfRange { face: usize, face_count: usize },
    /// A local edge index outside `{0, 1, 2}`.
    #[error("local edge index {edge} out of range (triangles have edges 0, 1, 2)")]
    LocalEdgeOutOfRange { edge: usize },
    /// A per-face or per-vertex array does not match the mesh it describes.
    #[error("{what}: expected length {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// An operation that requires an edge-manifold mesh met an edge shared by
    /// more than two faces.
    #[error("edge ({v0}, {v1}) is shared by more than two faces")]
    NonManifoldEdge { v0: usize, v1: usize },
    /// Validation found an edge with too many incident faces.
    #[error("non-manifold edge {edge:?}: {incident_faces} incident faces")]
    NonManifoldIncidentFaces {
        edge: [usize; 2],
        incident_faces: usize,
    },
    /// Validation found a vertex whose incident faces do not form one fan.
    #[error("vertex {vertex} is not manifold (incident faces form {fans} fans)")]
    NonManifoldVertex { vertex: usize, fans: usize },
    /// A derived table failed its structural self-check.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
