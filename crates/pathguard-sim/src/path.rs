//! Path geometry: where an enemy is for a given distance travelled.
//!
//! Both path shapes end up as an arc-length table over a polyline. A
//! `Polyline` path uses the waypoints directly; a `Smooth` path first samples
//! a Catmull-Rom curve through them at a fixed resolution. Progress is always
//! a distance in path units, clamped to `[0, total_length]`.

use pathguard_core::config::ConfigError;
use pathguard_core::constants::{PATH_END_EPSILON, SMOOTH_SAMPLES_PER_SEGMENT};
use pathguard_core::enums::PathShape;
use pathguard_core::types::Position;

/// Segment index and fraction along it for a given progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLocation {
    pub segment: usize,
    /// Fraction in `[0, 1]` along `segment`.
    pub t: f64,
}

/// Immutable traversal geometry, built once per game.
#[derive(Debug, Clone)]
pub struct PathModel {
    points: Vec<Position>,
    /// `cumulative[i]` is the arc length from the start to `points[i]`.
    cumulative: Vec<f64>,
}

impl PathModel {
    /// Build a path through `waypoints`.
    ///
    /// Consecutive duplicate points are dropped. Fails when fewer than two
    /// distinct points remain or a coordinate is not finite.
    pub fn new(waypoints: &[Position], shape: PathShape) -> Result<Self, ConfigError> {
        if let Some(bad) = waypoints.iter().find(|p| !p.is_finite()) {
            return Err(ConfigError::Invalid(format!("non-finite waypoint {bad:?}")));
        }

        let mut distinct: Vec<Position> = Vec::with_capacity(waypoints.len());
        for &p in waypoints {
            if distinct.last() != Some(&p) {
                distinct.push(p);
            }
        }
        if distinct.len() < 2 {
            return Err(ConfigError::Invalid(format!(
                "path needs at least 2 distinct waypoints, got {}",
                distinct.len()
            )));
        }

        let points = match shape {
            PathShape::Polyline => distinct,
            PathShape::Smooth => sample_catmull_rom(&distinct, SMOOTH_SAMPLES_PER_SEGMENT),
        };

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in points.windows(2) {
            total += pair[0].range_to(&pair[1]);
            cumulative.push(total);
        }

        Ok(Self { points, cumulative })
    }

    /// Total arc length.
    pub fn total_length(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    pub fn start(&self) -> Position {
        self.points[0]
    }

    /// Last point of the path: the goal, where the tower stands.
    pub fn end(&self) -> Position {
        self.points[self.points.len() - 1]
    }

    /// Polyline vertices (sampled points for smooth paths).
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// Clamp `progress` into the valid range and report whether it reached the end.
    pub fn clamp_to_end(&self, progress: f64) -> (f64, bool) {
        let total = self.total_length();
        if progress >= total - PATH_END_EPSILON {
            (total, true)
        } else if progress > 0.0 {
            (progress, false)
        } else {
            // Also catches NaN.
            (0.0, false)
        }
    }

    /// Segment and fraction for a progress value (clamped).
    pub fn locate(&self, progress: f64) -> PathLocation {
        let (distance, _) = self.clamp_to_end(progress);
        let last_segment = self.points.len() - 2;

        // First vertex strictly beyond `distance`, minus one, is the segment start.
        let segment = self
            .cumulative
            .partition_point(|&d| d <= distance)
            .saturating_sub(1)
            .min(last_segment);

        let seg_start = self.cumulative[segment];
        let seg_len = self.cumulative[segment + 1] - seg_start;
        let t = if seg_len > 0.0 {
            ((distance - seg_start) / seg_len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        PathLocation { segment, t }
    }

    /// Position at a progress value (clamped). `position_at(total_length())` is `end()`.
    pub fn position_at(&self, progress: f64) -> Position {
        let PathLocation { segment, t } = self.locate(progress);
        if t >= 1.0 {
            return self.points[segment + 1];
        }
        self.points[segment].lerp(&self.points[segment + 1], t)
    }
}

/// Sample a uniform Catmull-Rom spline through `points`, keeping every
/// control point as a sample so the curve starts and ends exactly on them.
fn sample_catmull_rom(points: &[Position], samples_per_segment: usize) -> Vec<Position> {
    let n = points.len();
    let steps = samples_per_segment.max(1);
    let mut out = Vec::with_capacity((n - 1) * steps + 1);

    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)].as_dvec2();
        let p1 = points[i].as_dvec2();
        let p2 = points[i + 1].as_dvec2();
        let p3 = points[(i + 2).min(n - 1)].as_dvec2();

        out.push(points[i]);
        for s in 1..steps {
            let t = s as f64 / steps as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let v = 0.5
                * ((2.0 * p1)
                    + (p2 - p0) * t
                    + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
                    + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3);
            out.push(v.into());
        }
    }
    out.push(points[n - 1]);

    // Sampling can repeat a point on degenerate input; keep segments non-empty.
    out.dedup();
    out
}
