//! Core point type for 3D hull computation

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Length below which a vector is treated as zero by [`Point3::normalize`]
const NORMALIZE_EPSILON: f64 = 1e-12;

/// A 3D point / vector in double precision
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The origin / zero vector
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Widen a single-precision position, as read from a GPU vertex buffer
    pub fn from_f32(x: f32, y: f32, z: f32) -> Self {
        Self::new(f64::from(x), f64::from(y), f64::from(z))
    }

    /// Create a point from spherical coordinates (azimuth, elevation in radians, radius)
    pub fn from_spherical(azimuth: f64, elevation: f64, radius: f64) -> Self {
        let x = radius * elevation.cos() * azimuth.cos();
        let y = radius * elevation.cos() * azimuth.sin();
        let z = radius * elevation.sin();
        Self { x, y, z }
    }

    /// Create a point from spherical coordinates in degrees
    pub fn from_spherical_deg(azimuth_deg: f64, elevation_deg: f64, radius: f64) -> Self {
        Self::from_spherical(azimuth_deg.to_radians(), elevation_deg.to_radians(), radius)
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector
    pub fn cross(&self, other: &Point3) -> Point3 {
        Point3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Subtract another point
    pub fn sub(&self, other: &Point3) -> Point3 {
        Point3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Add another point
    pub fn add(&self, other: &Point3) -> Point3 {
        Point3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Scale by a scalar
    pub fn scale(&self, s: f64) -> Point3 {
        Point3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Squared length
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Compute the magnitude/length
    pub fn magnitude(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length.
    ///
    /// A (near) zero-length vector yields [`Point3::ZERO`] rather than NaNs;
    /// callers decide what a degenerate direction means for them.
    pub fn normalize(&self) -> Point3 {
        let mag = self.magnitude();
        if mag > NORMALIZE_EPSILON {
            self.scale(1.0 / mag)
        } else {
            Point3::ZERO
        }
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point3) -> f64 {
        self.sub(other).magnitude()
    }

    /// Lexicographic ordering: x first, then y, then z
    pub fn lex_cmp(&self, other: &Point3) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.z.total_cmp(&other.z))
    }

    /// Bit-exact key, usable for hashing identical input points
    pub(crate) fn bits(&self) -> [u64; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(p: [f64; 3]) -> Self {
        Point3::new(p[0], p[1], p[2])
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}
