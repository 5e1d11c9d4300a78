use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{point, Point3};
use octasphere::{
    generate_texcoords, octahedron, subdivide,
    texcoord::{latitude_v, longitude_u, triangle_texcoords},
    Depth, Error, Mesh, MidpointStrategy,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Unit vector at latitude `lat` (from the equator, towards `+Y`) and longitude `lon` (from `+X`,
/// towards `+Z`), both in degrees.
fn from_degrees(lat: f64, lon: f64) -> Point3<f64> {
    let (lat, lon) = (lat.to_radians(), lon.to_radians());
    point![lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin()]
}

fn textured(depth: u32) -> Mesh {
    let mut mesh = octahedron();
    subdivide(&mut mesh, Depth::new(depth).unwrap(), MidpointStrategy::PerFace).unwrap();
    generate_texcoords(&mut mesh).unwrap();
    mesh
}

#[test]
fn reference_meridian() {
    let p = point![1.0, 0.0, 0.0];
    assert_eq!(longitude_u(&p), 0.5);
    assert_eq!(latitude_v(&p), 0.5);
    assert!((longitude_u(&point![0.0_f64, 0.0, 1.0]) - 0.75).abs() < 1e-15);
    assert_eq!(longitude_u(&point![0.0, 0.0, -1.0]), 0.25);
}

#[test]
fn poles() {
    assert_eq!(latitude_v(&point![0.0, 1.0, 0.0]), 1.0);
    assert_eq!(latitude_v(&point![0.0, -1.0, 0.0]), 0.0);
}

#[test]
fn pole_takes_mean_of_other_corners() {
    let mesh = textured(0);
    // face (+Y, +X, -Z)
    let [pole, x, nz] = mesh.texcoords()[0];
    assert_eq!(pole.y, 1.0);
    assert_eq!(x.x, 0.5);
    assert_eq!(nz.x, 0.25);
    assert_eq!(pole.x, (x.x + nz.x) / 2.0);

    // face (-Y, -Z, +X)
    let [pole, _, _] = mesh.texcoords()[4];
    assert_eq!(pole, nalgebra::vector![0.375, 0.0]);
}

#[test]
fn seam_vertex_differs_per_triangle() {
    let mesh = textured(0);
    // -X lies on the seam; face (+Y, -Z, -X) sits low, face (+Y, -X, +Z) sits high
    assert_eq!(mesh.polygons()[1], [0, 3, 2]);
    assert_eq!(mesh.texcoords()[1][2].x, 0.0);
    assert_eq!(mesh.polygons()[3], [0, 2, 4]);
    assert_eq!(mesh.texcoords()[3][1].x, 1.0);
}

#[test]
fn seam_straddling_triangle_high() {
    let tri = [
        from_degrees(0.0, -179.0),
        from_degrees(0.0, 179.0),
        from_degrees(1.0, 178.0),
    ];
    let uv = triangle_texcoords(&tri);
    for a in &uv {
        assert!(a.x > 0.9, "{uv:?}");
        for b in &uv {
            assert!((a.x - b.x).abs() < 0.05, "{uv:?}");
        }
    }
}

#[test]
fn seam_straddling_triangle_low() {
    let tri = [
        from_degrees(0.0, 179.0),
        from_degrees(0.0, -179.0),
        from_degrees(1.0, -178.0),
    ];
    let uv = triangle_texcoords(&tri);
    for a in &uv {
        assert!(a.x < 0.1, "{uv:?}");
        for b in &uv {
            assert!((a.x - b.x).abs() < 0.05, "{uv:?}");
        }
    }
}

#[test]
fn triangle_away_from_seam_is_untouched() {
    let tri = [
        from_degrees(10.0, 80.0),
        from_degrees(-5.0, 100.0),
        from_degrees(5.0, 95.0),
    ];
    let uv = triangle_texcoords(&tri);
    for (t, p) in uv.iter().zip(&tri) {
        assert_eq!(t.x, longitude_u(p));
        assert_eq!(t.y, latitude_v(p));
    }
}

#[test]
fn no_triangle_spans_the_texture() {
    for depth in 0..=5 {
        let mesh = textured(depth);
        assert_eq!(mesh.texcoords().len(), mesh.polygons().len());
        for (n, uv) in mesh.texcoords().iter().enumerate() {
            let (lo, hi) = uv
                .iter()
                .fold((f64::MAX, f64::MIN), |(lo, hi), t| (lo.min(t.x), hi.max(t.x)));
            assert!(hi - lo < 0.5, "depth {depth}, triangle {n}: {uv:?}");
            for t in uv {
                assert!((0.0..=1.0).contains(&t.x) && (0.0..=1.0).contains(&t.y));
            }
        }
    }
}

#[test]
fn scaled_mesh_is_rejected() {
    let mut mesh: Mesh = octahedron();
    mesh.scale_all(250.0);
    assert_eq!(
        generate_texcoords(&mut mesh),
        Err(Error::PreconditionViolated {
            index: 0,
            length: 250.0
        })
    );
    assert!(mesh.texcoords().is_empty());
}

#[test]
fn scaling_keeps_texcoords() {
    let mut mesh = textured(2);
    let before = mesh.texcoords().to_vec();
    mesh.scale_all(250.0);
    assert_eq!(mesh.texcoords(), &before[..]);
}

#[quickcheck]
fn texcoords_locate_the_point(lat: f64, lon: f64) -> TestResult {
    if !lat.is_finite() || !lon.is_finite() {
        return TestResult::discard();
    }
    let p = from_degrees(lat % 90.0, lon % 180.0);
    let (u, v) = (longitude_u(&p), latitude_v(&p));
    if !((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)) {
        return TestResult::failed();
    }
    let (phi, theta) = (u * 2.0 * PI - PI, v * PI - FRAC_PI_2);
    let back = point![
        theta.cos() * phi.cos(),
        theta.sin(),
        theta.cos() * phi.sin()
    ];
    TestResult::from_bool((back - p).norm() < 1e-6)
}
