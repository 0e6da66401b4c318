//! Immutable outcome of one hull construction

use crate::face::Face;
use crate::types::Point3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// How a hull construction ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HullStatus {
    /// Every input point is inside or on the hull
    Succeeded,
    /// The watchdog (or iteration cap) fired; faces are partial and untrusted
    TimedOut,
    /// Seeds were collinear/coplanar, or the face set became inconsistent
    Degenerate,
    /// Fewer than 4 input points
    InsufficientPoints,
    /// The caller's cancellation flag was observed; faces are partial
    Cancelled,
}

impl HullStatus {
    /// Whether faces from a result with this status describe a complete hull
    pub fn is_reliable(self) -> bool {
        self == HullStatus::Succeeded
    }

    /// Whether the result may carry a (partial) face set at all
    pub fn has_faces(self) -> bool {
        matches!(
            self,
            HullStatus::Succeeded | HullStatus::TimedOut | HullStatus::Cancelled
        )
    }
}

impl fmt::Display for HullStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HullStatus::Succeeded => "succeeded",
            HullStatus::TimedOut => "timed out",
            HullStatus::Degenerate => "degenerate input",
            HullStatus::InsufficientPoints => "insufficient points",
            HullStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Faces plus diagnostics, frozen at the end of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HullResult {
    faces: Vec<Face>,
    status: HullStatus,
    iterations: usize,
    elapsed: Duration,
    input_points: usize,
    pruned_points: usize,
}

impl HullResult {
    pub(crate) fn new(
        faces: Vec<Face>,
        status: HullStatus,
        iterations: usize,
        elapsed: Duration,
        input_points: usize,
        pruned_points: usize,
    ) -> Self {
        // Fatal outcomes never expose faces.
        let faces = if status.has_faces() { faces } else { Vec::new() };
        Self {
            faces,
            status,
            iterations,
            elapsed,
            input_points,
            pruned_points,
        }
    }

    /// Result for a run that failed before any geometry work
    pub(crate) fn failed(status: HullStatus, input_points: usize) -> Self {
        Self::new(Vec::new(), status, 0, Duration::ZERO, input_points, 0)
    }

    /// Accepted faces
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Get the number of faces
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn status(&self) -> HullStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == HullStatus::Succeeded
    }

    /// Whether the faces can be trusted as a complete hull
    pub fn is_reliable(&self) -> bool {
        self.status.is_reliable()
    }

    /// Frontier iterations performed
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Wall-clock time spent building
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of points handed to the builder
    pub fn input_points(&self) -> usize {
        self.input_points
    }

    /// Points discarded as interior during construction
    pub fn pruned_points(&self) -> usize {
        self.pruned_points
    }

    /// Distinct face corners, in first-seen order
    pub fn hull_vertices(&self) -> Vec<Point3> {
        self.to_indexed().0
    }

    /// Three line segments per face, for wireframe rendering
    pub fn edge_segments(&self) -> Vec<[Point3; 2]> {
        self.faces
            .iter()
            .flat_map(|f| f.edges().map(|(p, q)| [p, q]))
            .collect()
    }

    /// Shared vertex list plus one index triple per face
    pub fn to_indexed(&self) -> (Vec<Point3>, Vec<[usize; 3]>) {
        let mut lookup: HashMap<[u64; 3], usize> = HashMap::new();
        let mut vertices = Vec::new();

        let triangles = self
            .faces
            .iter()
            .map(|face| {
                face.vertices().map(|p| {
                    *lookup.entry(p.bits()).or_insert_with(|| {
                        vertices.push(p);
                        vertices.len() - 1
                    })
                })
            })
            .collect();

        (vertices, triangles)
    }

    /// Enclosed volume (divergence theorem over the faces)
    pub fn volume(&self) -> f64 {
        self.faces
            .iter()
            .map(|f| f.a.dot(&f.b.cross(&f.c)) / 6.0)
            .sum::<f64>()
            .abs()
    }

    /// Compute the surface area of the convex hull
    pub fn surface_area(&self) -> f64 {
        self.faces.iter().map(Face::area).sum()
    }

    /// Check that no point lies more than `epsilon` (signed volume) outside any face
    pub fn check_containment(&self, points: &[Point3], epsilon: f64) -> bool {
        self.faces
            .iter()
            .all(|f| points.iter().all(|p| f.signed_volume_to(p) <= epsilon))
    }

    /// Check that every directed edge is matched by exactly one opposite edge
    /// and by no other face in the same direction.
    pub fn is_closed_manifold(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }

        let mut directed: HashMap<([u64; 3], [u64; 3]), usize> = HashMap::new();
        for face in &self.faces {
            for (p, q) in face.edges() {
                *directed.entry((p.bits(), q.bits())).or_default() += 1;
            }
        }

        directed
            .iter()
            .all(|(&(p, q), &count)| count == 1 && directed.get(&(q, p)) == Some(&1))
    }
}
