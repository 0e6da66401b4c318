//! Tunable parameters for hull construction

use crate::{HullError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default volume tolerance for sidedness and containment tests
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Default threshold for rejecting a new face whose wings are collinear
pub const DEFAULT_COLLINEAR_EPSILON: f64 = f32::EPSILON as f64;

/// Default watchdog duration
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Below this many remaining points, scans run sequentially
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Hull construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullConfig {
    /// Signed-volume tolerance: a point is outside a face only above this
    pub epsilon: f64,
    /// Scale `epsilon` by the cube of the input's bounding-box diagonal
    pub relative_epsilon: bool,
    /// New faces with `1 - |cos(wing angle)|` at or below this are skipped
    pub collinear_epsilon: f64,
    /// Wall-clock watchdog
    #[serde(with = "duration_ms")]
    pub timeout: Duration,
    /// Optional hard cap on frontier iterations
    pub iteration_limit: Option<usize>,
    /// Remaining-point count from which per-step scans use rayon
    pub parallel_threshold: usize,
    /// Emit a progress line every N iterations (0 = never)
    pub log_interval: usize,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            relative_epsilon: true,
            collinear_epsilon: DEFAULT_COLLINEAR_EPSILON,
            timeout: DEFAULT_TIMEOUT,
            iteration_limit: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            log_interval: 1000,
        }
    }
}

impl HullConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: HullConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the builder cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(HullError::invalid_config(
                "epsilon",
                format!("must be finite and >= 0, got {}", self.epsilon),
            ));
        }
        if !self.collinear_epsilon.is_finite() || !(0.0..1.0).contains(&self.collinear_epsilon) {
            return Err(HullError::invalid_config(
                "collinear_epsilon",
                format!("must be in [0, 1), got {}", self.collinear_epsilon),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(HullError::invalid_config(
                "parallel_threshold",
                "must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Builder for [`HullConfig`].
///
/// ```
/// use math_point_hull::HullConfigBuilder;
/// use std::time::Duration;
///
/// let config = HullConfigBuilder::new()
///     .epsilon(1e-9)
///     .timeout(Duration::from_secs(20))
///     .build()
///     .expect("valid config");
/// assert_eq!(config.epsilon, 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HullConfigBuilder {
    cfg: HullConfig,
}

impl HullConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            cfg: HullConfig::default(),
        }
    }
    /// Sets the signed-volume tolerance.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.cfg.epsilon = v;
        self
    }
    /// Enables or disables scaling the tolerance by the input extent.
    pub fn relative_epsilon(mut self, v: bool) -> Self {
        self.cfg.relative_epsilon = v;
        self
    }
    /// Sets the collinear-wing rejection threshold.
    pub fn collinear_epsilon(mut self, v: f64) -> Self {
        self.cfg.collinear_epsilon = v;
        self
    }
    /// Sets the watchdog duration.
    pub fn timeout(mut self, v: Duration) -> Self {
        self.cfg.timeout = v;
        self
    }
    /// Caps the number of frontier iterations.
    pub fn iteration_limit(mut self, v: usize) -> Self {
        self.cfg.iteration_limit = Some(v);
        self
    }
    /// Sets the remaining-point count from which scans run in parallel.
    pub fn parallel_threshold(mut self, v: usize) -> Self {
        self.cfg.parallel_threshold = v;
        self
    }
    /// Sets the progress logging interval (0 disables it).
    pub fn log_interval(mut self, v: usize) -> Self {
        self.cfg.log_interval = v;
        self
    }
    /// Validates and returns the configuration.
    pub fn build(self) -> Result<HullConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = HullConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        let err = HullConfigBuilder::new().epsilon(-1.0).build().unwrap_err();
        assert!(err.is_config_error());

        let err = HullConfigBuilder::new()
            .collinear_epsilon(1.5)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("collinear_epsilon"));

        assert!(HullConfigBuilder::new().parallel_threshold(0).build().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HullConfig =
            serde_json::from_str(r#"{ "epsilon": 1e-8, "timeout": 2500 }"#).unwrap();
        assert_eq!(config.epsilon, 1e-8);
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.collinear_epsilon, DEFAULT_COLLINEAR_EPSILON);
        assert!(config.relative_epsilon);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "math_point_hull_config_{}.json",
            std::process::id()
        ));
        let config = HullConfigBuilder::new()
            .iteration_limit(500)
            .log_interval(0)
            .build()
            .unwrap();

        config.to_file(&path).unwrap();
        let loaded = HullConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = HullConfig::from_file("/nonexistent/hull.json").unwrap_err();
        assert!(err.is_io_error());
    }
}
