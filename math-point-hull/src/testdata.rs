//! Reference point sets for hull tests and demos

use crate::types::Point3;
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, PI};

/// Generate random points near a sphere (radius varies by ±10%)
pub fn random_sphere_points(n: usize, radius: f64) -> Vec<Point3> {
    let mut rng = rand::rng();
    let mut points = Vec::with_capacity(n);

    for _ in 0..n {
        let azimuth = rng.random::<f64>() * 2.0 * PI;
        let elevation = (rng.random::<f64>() * 2.0 - 1.0).asin();
        let r = radius * (0.9 + 0.2 * rng.random::<f64>());

        points.push(Point3::from_spherical(azimuth, elevation, r));
    }

    points
}

/// Generate uniformly distributed points on a sphere using Fibonacci lattice
pub fn fibonacci_sphere_points(n: usize, radius: f64) -> Vec<Point3> {
    let mut points = Vec::with_capacity(n);
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;

    for i in 0..n {
        let theta = 2.0 * PI * (i as f64) / golden_ratio;
        let phi = ((2 * i + 1) as f64 / n as f64 - 1.0).acos();

        let x = radius * phi.sin() * theta.cos();
        let y = radius * phi.sin() * theta.sin();
        let z = radius * phi.cos();

        points.push(Point3::new(x, y, z));
    }

    points
}

/// The unit right-corner tetrahedron
pub fn tetrahedron_vertices() -> Vec<Point3> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ]
}

/// Generate a cube's corners, centred on the origin
pub fn cube_vertices(size: f64) -> Vec<Point3> {
    let s = size / 2.0;
    vec![
        Point3::new(-s, -s, -s),
        Point3::new(s, -s, -s),
        Point3::new(s, s, -s),
        Point3::new(-s, s, -s),
        Point3::new(-s, -s, s),
        Point3::new(s, -s, s),
        Point3::new(s, s, s),
        Point3::new(-s, s, s),
    ]
}

/// Cube corners followed by `n_interior` random points strictly inside
pub fn cube_with_interior_points(size: f64, n_interior: usize) -> Vec<Point3> {
    let mut points = cube_vertices(size);
    let mut rng = rand::rng();
    // keep clear of the faces so no sample lands on the boundary
    let s = 0.45 * size;

    for _ in 0..n_interior {
        let x = (rng.random::<f64>() * 2.0 - 1.0) * s;
        let y = (rng.random::<f64>() * 2.0 - 1.0) * s;
        let z = (rng.random::<f64>() * 2.0 - 1.0) * s;
        points.push(Point3::new(x, y, z));
    }

    points
}

/// Generate vertices for an octahedron
pub fn octahedron_vertices() -> Vec<Point3> {
    vec![
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
    ]
}

/// Generate vertices for an icosahedron
pub fn icosahedron_vertices() -> Vec<Point3> {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;

    vec![
        Point3::new(-1.0, phi, 0.0),
        Point3::new(1.0, phi, 0.0),
        Point3::new(-1.0, -phi, 0.0),
        Point3::new(1.0, -phi, 0.0),
        Point3::new(0.0, -1.0, phi),
        Point3::new(0.0, 1.0, phi),
        Point3::new(0.0, -1.0, -phi),
        Point3::new(0.0, 1.0, -phi),
        Point3::new(phi, 0.0, -1.0),
        Point3::new(phi, 0.0, 1.0),
        Point3::new(-phi, 0.0, -1.0),
        Point3::new(-phi, 0.0, 1.0),
    ]
}

/// Surface samples of a UV sphere mesh, with the duplicated seam and pole
/// vertices a real vertex buffer carries
pub fn uv_sphere_mesh_points(rings: usize, segments: usize, radius: f64) -> Vec<Point3> {
    let mut points = Vec::with_capacity((rings + 1) * (segments + 1));

    for ring in 0..=rings {
        let elevation = PI * (ring as f64 / rings as f64) - FRAC_PI_2;
        for segment in 0..=segments {
            let azimuth = 2.0 * PI * (segment as f64 / segments as f64);
            points.push(Point3::from_spherical(azimuth, elevation, radius));
        }
    }

    points
}
