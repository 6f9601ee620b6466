mod util;
use mesh_topo::algs::manifold::{
    ManifoldValidationOptions, NonManifoldHandling, edge_manifold_report, is_edge_manifold,
    is_vertex_manifold, validate_manifold, vertex_manifold_report,
};
use mesh_topo::mesh_error::MeshTopoError;
use util::*;

#[test]
fn closed_fixtures_are_manifold() {
    for faces in [tetrahedron(), octahedron(), icosahedron()] {
        assert!(is_edge_manifold(&faces));
        assert!(is_vertex_manifold(&faces));
        assert!(validate_manifold(&faces, ManifoldValidationOptions::all()).is_ok());
    }
}

#[test]
fn bowtie_center_is_not_vertex_manifold() {
    let faces = bowtie();
    assert!(is_edge_manifold(&faces));
    let report = vertex_manifold_report(&faces);
    assert!(!report.per_vertex[0]);
    assert!(report.per_vertex[1..].iter().all(|&ok| ok));
}

#[test]
fn diagonal_quads_touch_at_one_vertex() {
    // quads (0, 0) and (1, 1) of a 2x2 grid share only vertex 4
    let all = grid(2, 2);
    let faces = vec![all[0], all[1], all[6], all[7]];
    let report = vertex_manifold_report(&faces);
    assert_eq!(report.fans[4], 2);
    // vertices 2 and 6 belong to no face
    assert_eq!(report.fans[2], 0);
    assert_eq!(report.fans[6], 0);
    assert_eq!(
        report.per_vertex,
        vec![true, true, false, true, false, true, false, true, true]
    );
    assert_eq!(
        validate_manifold(
            &bowtie(),
            ManifoldValidationOptions {
                check_edges: false,
                ..ManifoldValidationOptions::all()
            }
        ),
        Err(MeshTopoError::NonManifoldVertex { vertex: 0, fans: 2 })
    );
}

#[test]
fn extra_face_on_a_closed_edge_is_not_edge_manifold() {
    let mut faces = tetrahedron();
    faces.push([0, 1, 4]);
    let report = edge_manifold_report(&faces);
    assert!(!report.manifold);
    assert_eq!(report.per_edge.iter().filter(|&&ok| !ok).count(), 1);
    // edge (0, 1) is local edge 0 of the new face
    assert_eq!(report.per_face[4], [false, true, true]);
    assert!(matches!(
        validate_manifold(&faces, ManifoldValidationOptions::all()),
        Err(MeshTopoError::NonManifoldIncidentFaces {
            edge: [0, 1],
            incident_faces: 3
        })
    ));
    let warn = ManifoldValidationOptions {
        non_manifold: NonManifoldHandling::Warn,
        ..ManifoldValidationOptions::all()
    };
    assert!(validate_manifold(&faces, warn).is_ok());
}

#[test]
fn holey_grids_stay_edge_manifold() {
    for seed in 0..16 {
        let faces = holey_grid(4, 4, 0.4, seed);
        assert!(is_edge_manifold(&faces), "seed {seed}");
    }
}
