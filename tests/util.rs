#![allow(dead_code)]
use mesh_topo::topology::corner::Triangle;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Closed tetrahedron, outward winding.
pub fn tetrahedron() -> Vec<Triangle> {
    vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]
}

/// Closed octahedron with poles 4 and 5.
pub fn octahedron() -> Vec<Triangle> {
    vec![
        [4, 0, 2],
        [4, 2, 1],
        [4, 1, 3],
        [4, 3, 0],
        [5, 2, 0],
        [5, 1, 2],
        [5, 3, 1],
        [5, 0, 3],
    ]
}

/// Closed icosahedron: 12 vertices of degree 5, 30 edges, 20 faces.
pub fn icosahedron() -> Vec<Triangle> {
    vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ]
}

/// Two triangles touching only at vertex 0.
pub fn bowtie() -> Vec<Triangle> {
    vec![[0, 1, 2], [0, 3, 4]]
}

/// Unit square split into four triangles around center vertex 4.
pub fn square_fan() -> Vec<Triangle> {
    vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]]
}

/// Index of grid vertex `(i, j)` in a grid `m` quads wide.
pub fn grid_vertex(m: usize, i: usize, j: usize) -> usize {
    i * (m + 1) + j
}

/// `n` rows by `m` columns of quads, each split along the `(i, j)`-`(i+1, j+1)`
/// diagonal, consistently wound.
pub fn grid(n: usize, m: usize) -> Vec<Triangle> {
    let mut faces = Vec::with_capacity(2 * n * m);
    for i in 0..n {
        for j in 0..m {
            let a = grid_vertex(m, i, j);
            let b = grid_vertex(m, i, j + 1);
            let c = grid_vertex(m, i + 1, j + 1);
            let d = grid_vertex(m, i + 1, j);
            faces.push([a, b, c]);
            faces.push([a, c, d]);
        }
    }
    faces
}

/// A grid with each face dropped with probability `drop`, reproducible from
/// `seed`. Stays edge-manifold but may have bowtie vertices.
pub fn holey_grid(n: usize, m: usize, drop: f64, seed: u64) -> Vec<Triangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    grid(n, m)
        .into_iter()
        .filter(|_| !rng.gen_bool(drop))
        .collect()
}

/// Number of local edges of `faces` running `u -> v`.
pub fn directed_edge_count(faces: &[Triangle], u: usize, v: usize) -> usize {
    faces
        .iter()
        .flat_map(|f| (0..3).map(move |k| (f[k], f[(k + 1) % 3])))
        .filter(|&e| e == (u, v))
        .count()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
