//! Incremental convex hull construction
//!
//! The builder seeds a tetrahedron from extremal points, then works through a
//! frontier of faces. Each face with points beyond its plane absorbs the
//! farthest one: faces visible from that point are replaced by a fan of new
//! faces along the horizon, and every point swallowed by the grown hull is
//! pruned from the working set.
//!
//! Every run ends in exactly one terminal [`HullStatus`]; nothing in here
//! panics on bad geometry.

use crate::config::HullConfig;
use crate::face::Face;
use crate::geometry::{bounding_extent, distance_sq_to_line, encloses, signed_volume};
use crate::result::{HullResult, HullStatus};
use crate::types::Point3;
use rayon::prelude::*;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Lifecycle of a [`HullBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Uninitialized,
    /// Seed tetrahedron built, no step taken yet
    Seeded,
    Expanding,
    Finished(HullStatus),
}

impl BuilderState {
    pub fn is_terminal(self) -> bool {
        matches!(self, BuilderState::Finished(_))
    }
}

/// What a single call to [`HullBuilder::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The popped face had no outside points, or was already replaced
    Resolved,
    /// A point was absorbed and `new_faces` faces were attached to the horizon
    Expanded { new_faces: usize },
    /// The run is over
    Finished(HullStatus),
}

/// One-shot hull construction over a fixed point set
#[derive(Debug)]
pub struct HullBuilder {
    config: HullConfig,
    state: BuilderState,
    /// Volume tolerance for this input (possibly scaled)
    epsilon: f64,
    /// Points not yet known to be interior or hull vertices, in input order
    remaining: Vec<Point3>,
    frontier: VecDeque<Face>,
    accepted: Vec<Face>,
    input_points: usize,
    pruned: usize,
    iterations: usize,
    started: Option<Instant>,
    elapsed: Duration,
    cancel: Option<Arc<AtomicBool>>,
}

impl HullBuilder {
    /// The config is validated when the builder is initialized; an invalid
    /// one ends the run `Degenerate` without touching the points.
    pub fn new(config: HullConfig) -> Self {
        let epsilon = config.epsilon;
        Self {
            config,
            state: BuilderState::Uninitialized,
            epsilon,
            remaining: Vec::new(),
            frontier: VecDeque::new(),
            accepted: Vec::new(),
            input_points: 0,
            pruned: 0,
            iterations: 0,
            started: None,
            elapsed: Duration::ZERO,
            cancel: None,
        }
    }

    /// Observe `flag` once per step; when set, the run ends `Cancelled`.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn config(&self) -> &HullConfig {
        &self.config
    }

    /// Effective volume tolerance for the current input
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn remaining_points(&self) -> usize {
        self.remaining.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn accepted_len(&self) -> usize {
        self.accepted.len()
    }

    /// Build everything in one go: initialize, step to completion, publish.
    pub fn run(mut self, points: &[Point3]) -> HullResult {
        self.initialize(points);
        while !self.state.is_terminal() {
            self.step();
        }
        self.into_result()
    }

    /// Seed the initial tetrahedron from `points`.
    ///
    /// Returns [`BuilderState::Seeded`] on success, or the terminal state
    /// the input forced (`InsufficientPoints` / `Degenerate`).
    pub fn initialize(&mut self, points: &[Point3]) -> BuilderState {
        if self.state != BuilderState::Uninitialized {
            log::warn!("initialize called on a builder in state {:?}", self.state);
            return self.state;
        }

        self.started = Some(Instant::now());
        self.input_points = points.len();

        if let Err(e) = self.config.validate() {
            log::warn!("refusing to build with an invalid config: {}", e);
            return self.terminate(HullStatus::Degenerate);
        }

        if points.len() < 4 {
            log::warn!("convex hull needs at least 4 points, got {}", points.len());
            return self.terminate(HullStatus::InsufficientPoints);
        }

        // Volumes scale with extent³ and squared line distances with extent².
        // A zero extent means every point coincides, caught below.
        let (eps, line_eps) = if self.config.relative_epsilon {
            let extent = bounding_extent(points);
            (
                self.config.epsilon * extent.powi(3),
                self.config.epsilon * extent.powi(2),
            )
        } else {
            (self.config.epsilon, self.config.epsilon)
        };
        self.epsilon = eps;

        let (Some(&lo), Some(&hi)) = (
            points.iter().min_by(|a, b| a.lex_cmp(b)),
            points.iter().max_by(|a, b| a.lex_cmp(b)),
        ) else {
            return self.terminate(HullStatus::InsufficientPoints);
        };
        let (mut min, mut max) = (lo, hi);

        if min == max {
            log::warn!("all input points coincide at {}", min);
            return self.terminate(HullStatus::Degenerate);
        }

        let Some((far1, line_dist)) = first_max(points, |p| distance_sq_to_line(p, &min, &max))
        else {
            return self.terminate(HullStatus::Degenerate);
        };
        if line_dist <= line_eps {
            log::warn!("input points are collinear");
            return self.terminate(HullStatus::Degenerate);
        }

        let Some((far2, volume)) = first_max_by_abs(points, |p| signed_volume(&min, &max, &far1, p))
        else {
            return self.terminate(HullStatus::Degenerate);
        };
        if volume.abs() <= eps {
            log::warn!("input points are coplanar");
            return self.terminate(HullStatus::Degenerate);
        }

        // Keep V(min, max, far1, far2) negative so all four faces wind outward.
        if volume > 0.0 {
            std::mem::swap(&mut min, &mut max);
        }

        let seeds = [min, max, far1, far2];
        let coincide = (0..4).any(|i| (i + 1..4).any(|j| seeds[i] == seeds[j]));
        if coincide {
            log::warn!("seed points coincide: {} {} {} {}", min, max, far1, far2);
            return self.terminate(HullStatus::Degenerate);
        }

        log::debug!(
            "seed tetrahedron: min {} max {} far1 {} far2 {} (eps {:e})",
            min,
            max,
            far1,
            far2,
            eps
        );

        let faces = [
            Face::new(min, max, far1),
            Face::new(max, min, far2),
            Face::new(far1, max, far2),
            Face::new(far1, far2, min),
        ];
        self.accepted.extend(faces);
        self.frontier.extend(faces);

        self.remaining = points.to_vec();
        self.prune(&[seeds], &seeds);
        log::debug!(
            "{} of {} points remain after seeding",
            self.remaining.len(),
            points.len()
        );

        self.state = BuilderState::Seeded;
        self.state
    }

    /// Resolve one frontier face.
    pub fn step(&mut self) -> StepOutcome {
        match self.state {
            BuilderState::Finished(status) => return StepOutcome::Finished(status),
            BuilderState::Uninitialized => {
                log::warn!("step called before initialize");
                return self.finish(HullStatus::InsufficientPoints);
            }
            BuilderState::Seeded | BuilderState::Expanding => {}
        }
        self.state = BuilderState::Expanding;

        if self.remaining.is_empty() || self.frontier.is_empty() {
            return self.finish(HullStatus::Succeeded);
        }
        if let Some(status) = self.interruption() {
            return self.finish(status);
        }

        self.iterations += 1;
        if self.config.log_interval > 0 && self.iterations % self.config.log_interval == 0 {
            log::debug!(
                "iteration {}: {} faces, {} in frontier, {} points remaining",
                self.iterations,
                self.accepted.len(),
                self.frontier.len(),
                self.remaining.len()
            );
        }

        let Some(face) = self.frontier.pop_front() else {
            return self.finish(HullStatus::Succeeded);
        };

        // Replaced since it was queued.
        if !self.accepted.contains(&face) {
            return StepOutcome::Resolved;
        }

        let Some((apex, _)) = self.farthest_outside(&face) else {
            return StepOutcome::Resolved;
        };

        let eps = self.epsilon;
        let (visible, invisible): (Vec<Face>, Vec<Face>) = self
            .accepted
            .drain(..)
            .partition(|f| f.signed_volume_to(&apex) > eps);

        if visible.is_empty() || invisible.is_empty() {
            log::warn!(
                "inconsistent visibility from {}: {} visible, {} hidden faces",
                apex,
                visible.len(),
                invisible.len()
            );
            return self.finish(HullStatus::Degenerate);
        }

        let mut horizon = Vec::new();
        for seen in &visible {
            for hidden in &invisible {
                let Some((p1, p2)) = seen.shared_edge(hidden) else {
                    continue;
                };
                if self.is_sliver(&p1, &p2, &apex) {
                    log::trace!("skipping sliver face ({}, {}, {})", p1, p2, apex);
                    continue;
                }
                horizon.push(Face::new(p1, p2, apex));
            }
        }
        self.accepted = invisible;

        if horizon.is_empty() {
            log::warn!("no horizon found around {}", apex);
            return self.finish(HullStatus::Degenerate);
        }

        let new_faces = horizon.len();
        for new_face in horizon {
            if self.accepted.contains(&new_face) {
                log::warn!("new face {:?} duplicates an accepted face", new_face);
                return self.finish(HullStatus::Degenerate);
            }
            self.accepted.push(new_face);
            self.frontier.push_back(new_face);
        }

        let cones: Vec<[Point3; 4]> = visible.iter().map(|f| [f.a, f.b, f.c, apex]).collect();
        self.prune(&cones, &[apex]);

        StepOutcome::Expanded { new_faces }
    }

    /// Freeze the builder into its result.
    ///
    /// A builder abandoned before reaching a terminal state reports
    /// `Cancelled`, keeping whatever faces it had.
    pub fn into_result(mut self) -> HullResult {
        let status = match self.state {
            BuilderState::Finished(status) => status,
            BuilderState::Uninitialized => HullStatus::InsufficientPoints,
            BuilderState::Seeded | BuilderState::Expanding => {
                self.terminate(HullStatus::Cancelled);
                HullStatus::Cancelled
            }
        };

        HullResult::new(
            self.accepted,
            status,
            self.iterations,
            self.elapsed,
            self.input_points,
            self.pruned,
        )
    }

    fn finish(&mut self, status: HullStatus) -> StepOutcome {
        self.terminate(status);
        StepOutcome::Finished(status)
    }

    fn terminate(&mut self, status: HullStatus) -> BuilderState {
        self.elapsed = self.started.map(|t| t.elapsed()).unwrap_or_default();
        self.state = BuilderState::Finished(status);

        match status {
            HullStatus::Succeeded => log::info!(
                "hull built: {} faces from {} points in {} iterations ({:.1?})",
                self.accepted.len(),
                self.input_points,
                self.iterations,
                self.elapsed
            ),
            _ => log::warn!(
                "hull construction stopped ({}) after {} iterations ({:.1?})",
                status,
                self.iterations,
                self.elapsed
            ),
        }

        self.state
    }

    /// Cancellation, watchdog and iteration cap, checked once per step
    fn interruption(&self) -> Option<HullStatus> {
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Some(HullStatus::Cancelled);
        }
        if self
            .started
            .is_some_and(|t| t.elapsed() >= self.config.timeout)
        {
            return Some(HullStatus::TimedOut);
        }
        if self
            .config
            .iteration_limit
            .is_some_and(|limit| self.iterations >= limit)
        {
            return Some(HullStatus::TimedOut);
        }
        None
    }

    /// Farthest remaining point strictly outside `face`; ties go to the
    /// earliest point in the working set.
    fn farthest_outside(&self, face: &Face) -> Option<(Point3, f64)> {
        let eps = self.epsilon;

        if self.remaining.len() >= self.config.parallel_threshold {
            self.remaining
                .par_iter()
                .enumerate()
                .map(|(i, p)| (i, face.signed_volume_to(p)))
                .filter(|&(_, v)| v > eps)
                .reduce_with(|x, y| {
                    if y.1 > x.1 || (y.1 == x.1 && y.0 < x.0) {
                        y
                    } else {
                        x
                    }
                })
                .map(|(i, v)| (self.remaining[i], v))
        } else {
            first_max(&self.remaining, |p| face.signed_volume_to(p)).filter(|&(_, v)| v > eps)
        }
    }

    /// Whether the face (p1, p2, apex) would be a needle: both wings point
    /// along (nearly) the same line.
    fn is_sliver(&self, p1: &Point3, p2: &Point3, apex: &Point3) -> bool {
        let w1 = apex.sub(p1).normalize();
        let w2 = apex.sub(p2).normalize();
        1.0 - w1.dot(&w2).abs() <= self.config.collinear_epsilon
    }

    /// Drop `absorbed` points (now hull vertices) and every point enclosed by
    /// one of `tetrahedra` from the working set.
    fn prune(&mut self, tetrahedra: &[[Point3; 4]], absorbed: &[Point3]) {
        self.remaining.retain(|p| !absorbed.contains(p));

        let eps = self.epsilon;
        let outside = |p: &Point3| {
            !tetrahedra
                .iter()
                .any(|[a, b, c, d]| encloses(a, b, c, d, p, eps))
        };

        let before = self.remaining.len();
        if before >= self.config.parallel_threshold {
            self.remaining = std::mem::take(&mut self.remaining)
                .into_par_iter()
                .filter(|p| outside(p))
                .collect();
        } else {
            self.remaining.retain(|p| outside(p));
        }
        self.pruned += before - self.remaining.len();
    }
}

/// First point with the highest score
fn first_max<F: Fn(&Point3) -> f64>(points: &[Point3], score: F) -> Option<(Point3, f64)> {
    let mut best: Option<(Point3, f64)> = None;
    for p in points {
        let s = score(p);
        if best.is_none_or(|(_, b)| s > b) {
            best = Some((*p, s));
        }
    }
    best
}

/// First point with the highest absolute score, returned with its signed score
fn first_max_by_abs<F: Fn(&Point3) -> f64>(
    points: &[Point3],
    score: F,
) -> Option<(Point3, f64)> {
    let mut best: Option<(Point3, f64)> = None;
    for p in points {
        let s = score(p);
        if best.is_none_or(|(_, b)| s.abs() > b.abs()) {
            best = Some((*p, s));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tetrahedron() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]
    }

    fn unit_cube() -> Vec<Point3> {
        let mut corners = Vec::new();
        for z in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for x in [0.0, 1.0] {
                    corners.push(Point3::new(x, y, z));
                }
            }
        }
        corners
    }

    #[test]
    fn test_initialize_insufficient_points() {
        let mut builder = HullBuilder::new(HullConfig::default());
        let state = builder.initialize(&unit_tetrahedron()[..3]);
        assert_eq!(state, BuilderState::Finished(HullStatus::InsufficientPoints));
        assert_eq!(builder.accepted_len(), 0);
    }

    #[test]
    fn test_seed_faces_wind_outward() {
        let points = unit_tetrahedron();
        let mut builder = HullBuilder::new(HullConfig::default());
        assert_eq!(builder.initialize(&points), BuilderState::Seeded);
        assert_eq!(builder.accepted_len(), 4);
        assert_eq!(builder.frontier_len(), 4);
        assert_eq!(builder.remaining_points(), 0);

        for face in &builder.accepted {
            let fourth = points
                .iter()
                .find(|p| !face.contains_vertex(p))
                .expect("tetrahedron has a fourth corner");
            assert!(face.signed_volume_to(fourth) < 0.0, "{:?} winds inward", face);
        }
    }

    #[test]
    fn test_seed_prunes_interior_points() {
        let mut points = unit_tetrahedron();
        points.push(Point3::new(0.1, 0.1, 0.1));
        points.push(Point3::new(0.2, 0.2, 0.0)); // on the base
        points.push(Point3::new(2.0, 2.0, 2.0));

        let mut builder = HullBuilder::new(HullConfig::default());
        builder.initialize(&points);
        // (2,2,2) is lexicographically largest, so the seed differs from the
        // unit tetrahedron; only the genuinely interior points are dropped.
        assert!(builder.remaining.iter().all(|p| *p != Point3::new(0.1, 0.1, 0.1)));
    }

    #[test]
    fn test_coplanar_input_is_degenerate() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.5, 0.3, 0.0),
        ];
        let mut builder = HullBuilder::new(HullConfig::default());
        assert_eq!(
            builder.initialize(&points),
            BuilderState::Finished(HullStatus::Degenerate)
        );
    }

    #[test]
    fn test_collinear_and_identical_inputs_are_degenerate() {
        let line: Vec<Point3> = (0..6).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
        let result = HullBuilder::new(HullConfig::default()).run(&line);
        assert_eq!(result.status(), HullStatus::Degenerate);

        let same = vec![Point3::new(1.0, 2.0, 3.0); 5];
        let result = HullBuilder::new(HullConfig::default()).run(&same);
        assert_eq!(result.status(), HullStatus::Degenerate);
        assert!(result.faces().is_empty());
    }

    #[test]
    fn test_step_expands_then_succeeds() {
        let points = unit_cube();
        let mut builder = HullBuilder::new(HullConfig::default());
        builder.initialize(&points);
        assert!(builder.remaining_points() > 0);

        let mut expansions = 0;
        loop {
            match builder.step() {
                StepOutcome::Expanded { new_faces } => {
                    assert!(new_faces >= 3);
                    expansions += 1;
                }
                StepOutcome::Resolved => {}
                StepOutcome::Finished(status) => {
                    assert_eq!(status, HullStatus::Succeeded);
                    break;
                }
            }
        }
        assert!(expansions > 0);
        assert_eq!(builder.step(), StepOutcome::Finished(HullStatus::Succeeded));

        let result = builder.into_result();
        assert_eq!(result.num_faces(), 12);
        assert!(result.is_closed_manifold());
    }

    #[test]
    fn test_step_before_initialize() {
        let mut builder = HullBuilder::new(HullConfig::default());
        assert_eq!(
            builder.step(),
            StepOutcome::Finished(HullStatus::InsufficientPoints)
        );
    }

    #[test]
    fn test_second_initialize_is_ignored() {
        let mut builder = HullBuilder::new(HullConfig::default());
        builder.initialize(&unit_tetrahedron());
        assert_eq!(builder.initialize(&unit_cube()), BuilderState::Seeded);
        assert_eq!(builder.input_points, 4);
    }

    #[test]
    fn test_zero_timeout() {
        let config = HullConfig {
            timeout: Duration::ZERO,
            ..HullConfig::default()
        };
        let result = HullBuilder::new(config).run(&unit_cube());
        assert_eq!(result.status(), HullStatus::TimedOut);
        assert_eq!(result.num_faces(), 4);
        assert!(!result.is_reliable());
    }

    #[test]
    fn test_iteration_limit() {
        let config = HullConfig {
            iteration_limit: Some(1),
            ..HullConfig::default()
        };
        let result = HullBuilder::new(config).run(&unit_cube());
        assert_eq!(result.status(), HullStatus::TimedOut);
        assert_eq!(result.iterations(), 1);
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(true));
        let result = HullBuilder::new(HullConfig::default())
            .with_cancel_flag(flag)
            .run(&unit_cube());
        assert_eq!(result.status(), HullStatus::Cancelled);
        assert_eq!(result.iterations(), 0);
    }

    #[test]
    fn test_abandoned_builder_reports_cancelled() {
        let mut builder = HullBuilder::new(HullConfig::default());
        builder.initialize(&unit_cube());
        let result = builder.into_result();
        assert_eq!(result.status(), HullStatus::Cancelled);
        assert_eq!(result.num_faces(), 4);
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let points = crate::testdata::fibonacci_sphere_points(300, 1.0);

        let sequential = HullBuilder::new(HullConfig::default()).run(&points);
        let parallel = HullBuilder::new(HullConfig {
            parallel_threshold: 1,
            ..HullConfig::default()
        })
        .run(&points);

        assert_eq!(sequential.status(), HullStatus::Succeeded);
        assert_eq!(parallel.status(), HullStatus::Succeeded);
        assert_eq!(sequential.faces(), parallel.faces());
    }

    #[test]
    fn test_small_scale_inputs_succeed() {
        for scale in [1e-3, 1e-4, 1e-6] {
            let tetrahedron: Vec<Point3> = unit_tetrahedron()
                .iter()
                .map(|p| p.scale(scale))
                .collect();
            let result = HullBuilder::new(HullConfig::default()).run(&tetrahedron);
            assert_eq!(result.status(), HullStatus::Succeeded, "tetrahedron at {}", scale);
            assert_eq!(result.num_faces(), 4);

            let cube: Vec<Point3> = crate::testdata::cube_vertices(2.0)
                .iter()
                .map(|p| p.scale(scale))
                .collect();
            let result = HullBuilder::new(HullConfig::default()).run(&cube);
            assert_eq!(result.status(), HullStatus::Succeeded, "cube at {}", scale);
            assert_eq!(result.num_faces(), 12);
            assert!(result.is_closed_manifold());
        }
    }

    #[test]
    fn test_small_scale_coplanar_is_still_degenerate() {
        let square: Vec<Point3> = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
            .iter()
            .map(|&[x, y]| Point3::new(x * 1e-5, y * 1e-5, 0.0))
            .collect();
        let result = HullBuilder::new(HullConfig::default()).run(&square);
        assert_eq!(result.status(), HullStatus::Degenerate);
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let config = HullConfig {
            epsilon: f64::NAN,
            ..HullConfig::default()
        };
        let mut builder = HullBuilder::new(config);
        assert_eq!(
            builder.initialize(&unit_cube()),
            BuilderState::Finished(HullStatus::Degenerate)
        );
        let result = builder.into_result();
        assert!(result.faces().is_empty());
        assert_eq!(result.input_points(), 8);
    }

    #[test]
    fn test_is_sliver_threshold() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(1.0, 0.0, 0.0);
        // wing angle ~5e-6 rad: 1 - cos is ~1e-11
        let needle = Point3::new(2.0, 1e-5, 0.0);
        // wing angle ~5e-3 rad: 1 - cos is ~1e-5
        let narrow = Point3::new(2.0, 1e-2, 0.0);
        let wide = Point3::new(0.5, 1.0, 0.0);

        let default = HullBuilder::new(HullConfig::default());
        assert!(default.is_sliver(&p1, &p2, &needle));
        assert!(!default.is_sliver(&p1, &p2, &narrow));
        assert!(!default.is_sliver(&p1, &p2, &wide));

        let loose = HullBuilder::new(HullConfig {
            collinear_epsilon: 1e-3,
            ..HullConfig::default()
        });
        assert!(loose.is_sliver(&p1, &p2, &needle));
        assert!(loose.is_sliver(&p1, &p2, &narrow));
        assert!(!loose.is_sliver(&p1, &p2, &wide));

        let strict = HullBuilder::new(HullConfig {
            collinear_epsilon: 0.0,
            ..HullConfig::default()
        });
        assert!(!strict.is_sliver(&p1, &p2, &needle));
    }

    #[test]
    fn test_horizon_face_duplicating_accepted_face_is_degenerate() {
        let mut points = unit_tetrahedron();
        let apex = Point3::new(0.4, 0.4, 0.4);
        points.push(apex);

        let mut builder = HullBuilder::new(HullConfig::default());
        assert_eq!(builder.initialize(&points), BuilderState::Seeded);
        assert_eq!(builder.remaining_points(), 1);

        // The apex only sees the slanted face, whose horizon includes the
        // edge (1,0,0)-(0,1,0). Plant the face that edge will produce.
        let planted = Face::new(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0), apex);
        builder.accepted.push(planted);

        let status = loop {
            if let StepOutcome::Finished(status) = builder.step() {
                break status;
            }
        };
        assert_eq!(status, HullStatus::Degenerate);
        assert!(builder.into_result().faces().is_empty());
    }

    #[test]
    fn test_first_max_tie_break() {
        let points = vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ];
        let best = first_max(&points, |p| p.x.max(p.y));
        assert_eq!(best, Some((Point3::new(2.0, 0.0, 0.0), 2.0)));

        let best = first_max_by_abs(&points, |p| -p.y);
        assert_eq!(best, Some((Point3::new(0.0, 2.0, 0.0), -2.0)));
    }
}
