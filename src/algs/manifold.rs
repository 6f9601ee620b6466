//! Edge- and vertex-manifoldness checks.
//!
//! An edge is manifold when at most two directed edges share it. A vertex is
//! manifold when its incident faces form exactly one fan, i.e. one connected
//! component under face adjacency restricted to faces containing the vertex.
//! Vertices that no face references form zero fans and are reported as
//! non-manifold. A vertex on a non-manifold edge can still be vertex-manifold;
//! the two checks are independent.

use std::collections::VecDeque;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshTopoError;
use crate::topology::corner::Triangle;
use crate::topology::mesh::{check_face_indices, vertex_count};
use crate::topology::triangle_adjacency::TriangleAdjacencyLists;
use crate::topology::unique_edge::UniqueEdgeMap;
use crate::topology::vertex_face::VertexFaceAdjacency;

/// Per-face and per-edge manifold flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeManifoldReport {
    pub manifold: bool,
    /// Whether local edge `k` of face `f` is manifold.
    pub per_face: Vec<[bool; 3]>,
    /// Whether each unique edge (rows of [`UniqueEdgeMap::ue`]) is manifold.
    pub per_edge: Vec<bool>,
}

/// Whether no edge is shared by more than two faces.
pub fn is_edge_manifold(faces: &[Triangle]) -> bool {
    let map = UniqueEdgeMap::build(faces);
    (0..map.num_unique()).all(|u| map.multiplicity(u) <= 2)
}

pub fn edge_manifold_report(faces: &[Triangle]) -> EdgeManifoldReport {
    edge_manifold_report_with_map(&UniqueEdgeMap::build(faces))
}

/// Edge flags from an existing [`UniqueEdgeMap`].
pub fn edge_manifold_report_with_map(map: &UniqueEdgeMap) -> EdgeManifoldReport {
    let per_edge: Vec<bool> = (0..map.num_unique())
        .map(|u| map.multiplicity(u) <= 2)
        .collect();
    let per_face = (0..map.num_faces)
        .map(|f| std::array::from_fn(|k| per_edge[map.unique_of(f, k)]))
        .collect();
    EdgeManifoldReport {
        manifold: per_edge.iter().all(|&ok| ok),
        per_face,
        per_edge,
    }
}

/// Per-vertex fan counts and manifold flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexManifoldReport {
    pub manifold: bool,
    /// `fans[v] == 1`.
    pub per_vertex: Vec<bool>,
    /// Number of face fans around each vertex.
    pub fans: Vec<usize>,
}

/// Whether every vertex `0..=max(F)` has exactly one fan.
pub fn is_vertex_manifold(faces: &[Triangle]) -> bool {
    vertex_manifold_report(faces).manifold
}

/// Vertex flags for `#V = max(F) + 1`.
pub fn vertex_manifold_report(faces: &[Triangle]) -> VertexManifoldReport {
    let vf = VertexFaceAdjacency::from_faces(faces);
    let lists = TriangleAdjacencyLists::build(faces);
    vertex_report(faces, &vf, &lists)
}

/// Vertex flags for an explicit vertex count; trailing unreferenced vertices
/// are reported non-manifold.
pub fn vertex_manifold_report_with_count(
    faces: &[Triangle],
    n: usize,
) -> Result<VertexManifoldReport, MeshTopoError> {
    let vf = VertexFaceAdjacency::build(faces, n)?;
    let lists = TriangleAdjacencyLists::build(faces);
    Ok(vertex_report(faces, &vf, &lists))
}

fn vertex_report(
    faces: &[Triangle],
    vf: &VertexFaceAdjacency,
    lists: &TriangleAdjacencyLists,
) -> VertexManifoldReport {
    let n = vf.num_vertices();

    #[cfg(feature = "rayon")]
    let fans: Vec<usize> = {
        use rayon::prelude::*;
        (0..n)
            .into_par_iter()
            .map(|v| count_fans(faces, vf, lists, v))
            .collect()
    };
    #[cfg(not(feature = "rayon"))]
    let fans: Vec<usize> = (0..n).map(|v| count_fans(faces, vf, lists, v)).collect();

    let per_vertex: Vec<bool> = fans.iter().map(|&c| c == 1).collect();
    VertexManifoldReport {
        manifold: per_vertex.iter().all(|&ok| ok),
        per_vertex,
        fans,
    }
}

/// Connected components of the faces around `v`.
fn count_fans(
    faces: &[Triangle],
    vf: &VertexFaceAdjacency,
    lists: &TriangleAdjacencyLists,
    v: usize,
) -> usize {
    let mut seen: HashSet<usize> = HashSet::with_capacity(vf.degree(v));
    let mut fans = 0;
    // seed in incidence order so the count does not depend on hash order
    for &seed in vf.faces_of(v) {
        if !seen.insert(seed) {
            continue;
        }
        fans += 1;
        let mut queue = VecDeque::from([seed]);
        while let Some(f) = queue.pop_front() {
            for &g in lists.face_neighbors(f) {
                if faces[g].contains(&v) && seen.insert(g) {
                    queue.push_back(g);
                }
            }
        }
    }
    fans
}

/// Behavior for non-manifold detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonManifoldHandling {
    /// Skip non-manifold detection.
    Ignore,
    /// Log a warning on non-manifold entities.
    Warn,
    /// Return an error on the first non-manifold entity.
    Error,
}

/// Optional validation toggles for [`validate_manifold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifoldValidationOptions {
    /// Report edges shared by more than two faces.
    pub check_edges: bool,
    /// Report vertices whose incident faces do not form one fan.
    pub check_vertices: bool,
    pub non_manifold: NonManifoldHandling,
}

impl Default for ManifoldValidationOptions {
    fn default() -> Self {
        Self {
            check_edges: true,
            check_vertices: true,
            non_manifold: NonManifoldHandling::Warn,
        }
    }
}

impl ManifoldValidationOptions {
    /// Enable all checks and fail on the first violation.
    pub fn all() -> Self {
        Self {
            check_edges: true,
            check_vertices: true,
            non_manifold: NonManifoldHandling::Error,
        }
    }
}

/// Validate a face list against the requested manifold checks.
///
/// Out-of-range indices cannot occur when `#V = max(F) + 1`, so the only
/// errors are the non-manifold ones under [`NonManifoldHandling::Error`].
pub fn validate_manifold(
    faces: &[Triangle],
    options: ManifoldValidationOptions,
) -> Result<(), MeshTopoError> {
    validate_manifold_with_count(faces, vertex_count(faces), options)
}

/// As [`validate_manifold`], for an explicit vertex count.
pub fn validate_manifold_with_count(
    faces: &[Triangle],
    n: usize,
    options: ManifoldValidationOptions,
) -> Result<(), MeshTopoError> {
    check_face_indices(faces, n)?;
    let handling = options.non_manifold;
    if handling == NonManifoldHandling::Ignore {
        return Ok(());
    }

    if options.check_edges {
        let map = UniqueEdgeMap::build(faces);
        for (u, &edge) in map.ue.iter().enumerate() {
            let count = map.multiplicity(u);
            if count <= 2 {
                continue;
            }
            match handling {
                NonManifoldHandling::Warn => {
                    log::warn!("Non-manifold edge detected: edge={edge:?} incident_faces={count}");
                }
                NonManifoldHandling::Error => {
                    return Err(MeshTopoError::NonManifoldIncidentFaces {
                        edge,
                        incident_faces: count,
                    });
                }
                NonManifoldHandling::Ignore => {}
            }
        }
    }

    if options.check_vertices {
        let report = vertex_manifold_report_with_count(faces, n)?;
        for (vertex, &fans) in report.fans.iter().enumerate() {
            if fans == 1 {
                continue;
            }
            match handling {
                NonManifoldHandling::Warn => {
                    log::warn!("Non-manifold vertex detected: vertex={vertex} fans={fans}");
                }
                NonManifoldHandling::Error => {
                    return Err(MeshTopoError::NonManifoldVertex { vertex, fans });
                }
                NonManifoldHandling::Ignore => {}
            }
        }
    }

    Ok(())
}
