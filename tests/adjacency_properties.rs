mod util;
use mesh_topo::DebugInvariants;
use mesh_topo::algs::boundary::{boundary_loops, is_border_vertex};
use mesh_topo::topology::corner::{Triangle, sorted};
use mesh_topo::topology::mesh::vertex_count;
use mesh_topo::topology::triangle_adjacency::{TriangleAdjacency, TriangleAdjacencyLists};
use mesh_topo::topology::unique_edge::UniqueEdgeMap;
use mesh_topo::topology::vertex_face::VertexFaceAdjacency;
use proptest::prelude::*;
use util::*;

fn check_tt_symmetry(faces: &[Triangle]) {
    let adj = TriangleAdjacency::build(faces);
    for f in 0..faces.len() {
        for k in 0..3 {
            if let Some((g, kn)) = adj.across(f, k) {
                assert_eq!(adj.tt[g][kn], Some(f), "TT not symmetric at ({f},{k})");
                assert_eq!(adj.tti[g][kn], Some(k), "TTi not symmetric at ({f},{k})");
            } else {
                assert!(adj.tt[f][k].is_none() || adj.tti[f][k].is_none());
            }
        }
    }
    assert!(adj.validate_invariants().is_ok());
}

fn check_vf_completeness(faces: &[Triangle]) {
    let vf = VertexFaceAdjacency::from_faces(faces);
    let n = vertex_count(faces);
    assert_eq!(vf.ni.len(), n + 1);
    assert_eq!(vf.ni[n], 3 * faces.len());
    for (f, tri) in faces.iter().enumerate() {
        for (c, &v) in tri.iter().enumerate() {
            let hits = vf
                .incidences(v)
                .filter(|&(g, cg)| g == f && cg == c)
                .count();
            assert_eq!(hits, 1, "incidence ({v}, {f}, {c}) listed {hits} times");
        }
    }
}

fn check_unique_edge_round_trip(faces: &[Triangle]) {
    let map = UniqueEdgeMap::build(faces);
    for (row, &e) in map.e.iter().enumerate() {
        let u = map.emap[row];
        assert_eq!(map.ue[u], sorted(e));
        assert!(map.occurrences(u).contains(&row));
    }
    let total: usize = (0..map.num_unique()).map(|u| map.multiplicity(u)).sum();
    assert_eq!(total, 3 * faces.len());
}

fn check_loops_walk_border_edges(faces: &[Triangle]) {
    let border = is_border_vertex(faces);
    let mut on_loop = vec![false; border.len()];
    for l in boundary_loops(faces) {
        for w in l.windows(2) {
            // a border edge is walked by exactly one face
            assert_eq!(directed_edge_count(faces, w[0], w[1]), 1);
            assert_eq!(directed_edge_count(faces, w[1], w[0]), 0);
        }
        for &v in &l {
            assert!(!on_loop[v], "vertex {v} on two loops");
            on_loop[v] = true;
        }
    }
    assert_eq!(on_loop, border);
}

fn check_lists_extend_fast_path(faces: &[Triangle]) {
    let adj = TriangleAdjacency::build(faces);
    let lists = TriangleAdjacencyLists::build(faces);
    for f in 0..faces.len() {
        for k in 0..3 {
            assert_eq!(lists.neighbors(f, k), adj.tt[f][k].as_slice());
        }
    }
}

#[test]
fn closed_fixtures_have_symmetric_adjacency() {
    for faces in [tetrahedron(), octahedron(), icosahedron()] {
        check_tt_symmetry(&faces);
        let adj = TriangleAdjacency::build(&faces);
        assert!((0..faces.len()).all(|f| !adj.touches_border(f)));
    }
}

#[test]
fn full_grid_tables() {
    let faces = grid(3, 4);
    check_tt_symmetry(&faces);
    check_vf_completeness(&faces);
    check_unique_edge_round_trip(&faces);
    check_loops_walk_border_edges(&faces);
    // 3x4 quads: 4 rows of 4 and 3 rows of 5 grid edges, 12 diagonals
    assert_eq!(UniqueEdgeMap::build(&faces).num_unique(), 16 + 15 + 12);
}

proptest! {
    #[test]
    fn prop_holey_grid_tables(
        n in 1usize..6,
        m in 1usize..6,
        drop in 0.0f64..0.6,
        seed in any::<u64>(),
    ) {
        let faces = holey_grid(n, m, drop, seed);
        check_tt_symmetry(&faces);
        check_vf_completeness(&faces);
        check_unique_edge_round_trip(&faces);
        check_loops_walk_border_edges(&faces);
        check_lists_extend_fast_path(&faces);
    }
}
