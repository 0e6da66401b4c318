//! 3D convex hulls of mesh point clouds
//!
//! This library builds the convex boundary of an unordered 3D point set with
//! an incremental, QuickHull-style procedure: seed a tetrahedron from
//! extremal points, then repeatedly absorb the farthest outside point of a
//! frontier face until no point lies outside the hull.
//!
//! Every run ends in a tagged [`HullStatus`] instead of an error, so callers
//! can decide whether to draw a partial hull after a timeout.
//!
//! # Example
//! ```
//! use math_point_hull::{HullBuilder, HullConfig, HullStatus, Point3};
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//!
//! let hull = HullBuilder::new(HullConfig::default()).run(&points);
//! assert_eq!(hull.status(), HullStatus::Succeeded);
//! assert_eq!(hull.num_faces(), 4);
//! ```

mod builder;
mod config;
mod export;
mod face;
mod geometry;
mod result;
mod source;
mod task;
mod types;

// Make testdata publicly available for tests
pub mod testdata;

pub use builder::{BuilderState, HullBuilder, StepOutcome};
pub use config::{
    DEFAULT_COLLINEAR_EPSILON, DEFAULT_EPSILON, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TIMEOUT,
    HullConfig, HullConfigBuilder,
};
pub use export::{export_html, export_obj};
pub use face::Face;
pub use geometry::{
    are_coplanar, bounding_extent, distance_sq_to_line, encloses, signed_volume,
    tetrahedron_volume,
};
pub use result::{HullResult, HullStatus};
pub use source::{load_obj_vertices, points_from_vertex_buffer};
pub use task::HullTask;
pub use types::Point3;

/// Errors from the I/O and configuration layers around the hull builder.
///
/// Hull construction itself never fails with an error; see [`HullStatus`].
#[derive(Debug, thiserror::Error)]
pub enum HullError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error(
        "invalid vertex buffer: {len} bytes with stride {stride} and position offset {offset}"
    )]
    InvalidVertexBuffer {
        len: usize,
        stride: usize,
        offset: usize,
    },

    #[error("no vertices found")]
    NoVertices,
}

impl HullError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Returns `true` for filesystem failures.
    pub fn is_io_error(&self) -> bool {
        matches!(self, HullError::Io(_))
    }

    /// Returns `true` for configuration parsing or validation failures.
    pub fn is_config_error(&self) -> bool {
        matches!(self, HullError::Json(_) | HullError::InvalidConfig { .. })
    }

    /// Returns `true` when the input held no usable points.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HullError::InvalidVertexBuffer { .. } | HullError::NoVertices
        )
    }
}

pub type Result<T> = std::result::Result<T, HullError>;
