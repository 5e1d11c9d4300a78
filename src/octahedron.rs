use nalgebra::point;
use octasphere_common::{ArrayIndex, Float};
use octasphere_mesh::Mesh;

/// The unit octahedron: one vertex at ±1 on each axis, eight faces wound to face outward.
///
/// # Diagram
/// `N>I`, where `N` is the vertex's position and `I` its index.
/// <pre>
///        +Y>0
///          |  -Z>3
///          | /
/// -X>2 ----+---- +X>1
///        / |
///    +Z>4  |
///        -Y>5
/// </pre>
///
/// Faces 0..4 fan around `+Y`, faces 4..8 around `-Y`.
pub fn octahedron<Real: Float, Idx: ArrayIndex>() -> Mesh<Real, Idx> {
    let (o, l) = (Real::ZERO, Real::ONE);
    let vertices = vec![
        point![o, l, o],
        point![l, o, o],
        point![-l, o, o],
        point![o, o, -l],
        point![o, o, l],
        point![o, -l, o],
    ];
    #[rustfmt::skip]
    let polygons = [
        [0, 1, 3], [0, 3, 2], [0, 4, 1], [0, 2, 4],
        [5, 3, 1], [5, 2, 3], [5, 1, 4], [5, 4, 2],
    ]
    .map(|tri: [u8; 3]| tri.map(<Idx as From<u8>>::from))
    .to_vec();
    // every index is < 6, which any ArrayIndex can hold
    Mesh::new_unchecked(vertices, polygons)
}
