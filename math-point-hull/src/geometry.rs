//! Geometric predicates shared by the hull builder

use crate::types::Point3;

/// Signed volume of the tetrahedron (a, b, c, d).
///
/// Positive when `d` lies on the side the normal of the `a -> b -> c` winding
/// points toward, i.e. "outside" of a face wound that way.
pub fn signed_volume(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    let ab = b.sub(a);
    let ac = c.sub(a);
    let ad = d.sub(a);

    ab.cross(&ac).dot(&ad) / 6.0
}

/// Unsigned volume of the tetrahedron formed by 4 points
pub fn tetrahedron_volume(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    signed_volume(a, b, c, d).abs()
}

/// Check if 4 points are coplanar
pub fn are_coplanar(a: &Point3, b: &Point3, c: &Point3, d: &Point3, epsilon: f64) -> bool {
    tetrahedron_volume(a, b, c, d) <= epsilon
}

/// Squared perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Falls back to the squared distance to `a` when the line is degenerate.
pub fn distance_sq_to_line(p: &Point3, a: &Point3, b: &Point3) -> f64 {
    let dir = b.sub(a).normalize();
    let to_point = p.sub(a);
    let along = dir.dot(&to_point);

    (to_point.length_squared() - along * along).max(0.0)
}

/// Volume-decomposition containment test.
///
/// `p` is enclosed by the tetrahedron (a, b, c, d) when the four
/// sub-tetrahedra it forms with each face add up to the whole volume.
/// Points on the boundary count as enclosed.
pub fn encloses(
    a: &Point3,
    b: &Point3,
    c: &Point3,
    d: &Point3,
    p: &Point3,
    epsilon: f64,
) -> bool {
    let total = tetrahedron_volume(a, b, c, d);
    let parts = tetrahedron_volume(a, b, c, p)
        + tetrahedron_volume(d, b, a, p)
        + tetrahedron_volume(d, c, b, p)
        + tetrahedron_volume(d, a, c, p);

    parts - total <= epsilon
}

/// Diagonal length of the axis-aligned bounding box of `points`
pub fn bounding_extent(points: &[Point3]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };

    let (lo, hi) = points.iter().fold((*first, *first), |(lo, hi), p| {
        (
            Point3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
            Point3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
        )
    });

    hi.distance(&lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_tetrahedron() -> [Point3; 4] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_signed_volume_sign() {
        let [a, b, c, d] = unit_tetrahedron();
        // cross(b-a, c-a) = +z, so d above the xy plane is positive
        assert_relative_eq!(signed_volume(&a, &b, &c, &d), 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(signed_volume(&a, &c, &b, &d), -1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(tetrahedron_volume(&a, &c, &b, &d), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coplanarity() {
        let [a, b, c, d] = unit_tetrahedron();
        let mid = Point3::new(0.5, 0.5, 0.0);

        assert!(are_coplanar(&a, &b, &c, &mid, 1e-8));
        assert!(!are_coplanar(&a, &b, &c, &d, 1e-8));
    }

    #[test]
    fn test_distance_sq_to_line() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 0.0);
        let p = Point3::new(5.0, 3.0, 4.0);
        assert_relative_eq!(distance_sq_to_line(&p, &a, &b), 25.0, epsilon = 1e-12);
        assert_relative_eq!(distance_sq_to_line(&a, &a, &b), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_encloses() {
        let [a, b, c, d] = unit_tetrahedron();

        assert!(encloses(&a, &b, &c, &d, &Point3::new(0.1, 0.1, 0.1), 1e-12));
        // boundary and vertices count as enclosed
        assert!(encloses(&a, &b, &c, &d, &Point3::new(0.5, 0.5, 0.0), 1e-12));
        assert!(encloses(&a, &b, &c, &d, &d, 1e-12));
        assert!(!encloses(&a, &b, &c, &d, &Point3::new(1.0, 1.0, 1.0), 1e-12));
        assert!(!encloses(&a, &b, &c, &d, &Point3::new(-0.01, 0.1, 0.1), 1e-12));
    }

    #[test]
    fn test_bounding_extent() {
        let [a, b, c, d] = unit_tetrahedron();
        assert_relative_eq!(
            bounding_extent(&[a, b, c, d]),
            3.0_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(bounding_extent(&[]), 0.0);
    }
}
