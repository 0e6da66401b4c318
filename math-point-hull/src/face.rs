//! Triangular hull face with winding-aware equality

use crate::geometry::signed_volume;
use crate::types::Point3;
use serde::{Deserialize, Serialize};

/// A triangle of the hull, wound `a -> b -> c` around its outward normal.
///
/// Two faces are equal when one is a cyclic rotation of the other. A
/// reflected face (`a, c, b`) is *not* equal: it faces the other way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Face {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
}

impl Face {
    /// Create a new face from three corners in winding order
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Corners as an array, in winding order
    pub fn vertices(&self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    /// The three directed edges, in winding order
    pub fn edges(&self) -> [(Point3, Point3); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Whether `p` is exactly one of the corners
    pub fn contains_vertex(&self, p: &Point3) -> bool {
        self.a == *p || self.b == *p || self.c == *p
    }

    /// Unit outward normal, or zero for a sliver triangle.
    ///
    /// Computed on demand so it always agrees with the current winding.
    pub fn normal(&self) -> Point3 {
        self.b.sub(&self.a).cross(&self.c.sub(&self.a)).normalize()
    }

    /// Compute the centroid of this face
    pub fn centroid(&self) -> Point3 {
        self.a.add(&self.b).add(&self.c).scale(1.0 / 3.0)
    }

    /// Triangle area
    pub fn area(&self) -> f64 {
        self.b.sub(&self.a).cross(&self.c.sub(&self.a)).magnitude() / 2.0
    }

    /// Signed volume of (a, b, c, p); positive when `p` is outside this face
    pub fn signed_volume_to(&self, p: &Point3) -> f64 {
        signed_volume(&self.a, &self.b, &self.c, p)
    }

    /// Number of corners this face has in common with `other`
    fn common_vertices(&self, other: &Face) -> usize {
        self.vertices()
            .iter()
            .filter(|p| other.contains_vertex(p))
            .count()
    }

    /// If the two faces share exactly one edge, return its endpoints in
    /// `self`'s winding order.
    pub fn shared_edge(&self, other: &Face) -> Option<(Point3, Point3)> {
        if self.common_vertices(other) != 2 {
            return None;
        }

        self.edges()
            .into_iter()
            .find(|(p, q)| other.contains_vertex(p) && other.contains_vertex(q))
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b && self.c == other.c)
            || (self.a == other.b && self.b == other.c && self.c == other.a)
            || (self.a == other.c && self.b == other.a && self.c == other.b)
    }
}
