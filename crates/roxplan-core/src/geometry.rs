//! Arc-length geometry over ordered point sequences.
//!
//! Routes are rendered as polylines decorated with direction arrows and a
//! midpoint label. Everything here is a pure function of the point order
//! (insertion order along the path, never spatial order) and is recomputed
//! on every call.

use serde::{Deserialize, Serialize};

/// Rotation added to the tangent angle of every arrow marker.
///
/// The renderer draws arrows as a triangle glyph whose apex points up
/// (negative y) at rotation 0, so a glyph following a segment heading at
/// angle `a` must be rotated by `a + 90`.
pub const ARROW_ROTATION_OFFSET_DEG: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A position on a path together with the heading of the segment it lies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub point: Point,
    /// `atan2(dy, dx)` of the containing segment, in degrees.
    pub angle_degrees: f64,
}

/// A direction-arrow glyph placed along a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowMarker {
    pub point: Point,
    /// Tangent angle plus [`ARROW_ROTATION_OFFSET_DEG`].
    pub rotation_degrees: f64,
}

fn segment_angle(from: &Point, to: &Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Total length of the polyline: the sum of consecutive Euclidean distances.
///
/// Returns 0 for fewer than two points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Samples the path at `target_distance` measured from its first point.
///
/// Distances at or below zero yield the first point; distances at or beyond
/// the total length yield the last point with the heading of the final
/// segment. The path is never extrapolated. Returns `None` for fewer than
/// two points.
pub fn point_at_distance(points: &[Point], target_distance: f64) -> Option<PathSample> {
    if points.len() < 2 {
        return None;
    }

    let mut accumulated = 0.0;
    for w in points.windows(2) {
        let (from, to) = (&w[0], &w[1]);
        let seg_len = from.distance_to(to);
        // Zero-length segments carry no heading and would divide by zero.
        if seg_len == 0.0 {
            continue;
        }

        if accumulated + seg_len >= target_distance {
            let ratio = ((target_distance - accumulated) / seg_len).clamp(0.0, 1.0);
            return Some(PathSample {
                point: Point::new(
                    from.x + (to.x - from.x) * ratio,
                    from.y + (to.y - from.y) * ratio,
                ),
                angle_degrees: segment_angle(from, to),
            });
        }
        accumulated += seg_len;
    }

    let last = points.len() - 1;
    Some(PathSample {
        point: points[last],
        angle_degrees: segment_angle(&points[last - 1], &points[last]),
    })
}

/// Places direction arrows at `spacing, 2 * spacing, ...` strictly before the
/// end of the path.
///
/// A non-positive or non-finite spacing, or a path of fewer than two points,
/// yields no markers.
pub fn arrow_markers(points: &[Point], spacing: f64) -> Vec<ArrowMarker> {
    if points.len() < 2 || !spacing.is_finite() || spacing <= 0.0 {
        return Vec::new();
    }

    let total = path_length(points);
    let mut markers = Vec::new();
    let mut step = 1u32;
    loop {
        // Multiply rather than accumulate so long paths do not drift.
        let dist = spacing * f64::from(step);
        if dist >= total {
            break;
        }
        if let Some(sample) = point_at_distance(points, dist) {
            markers.push(ArrowMarker {
                point: sample.point,
                rotation_degrees: sample.angle_degrees + ARROW_ROTATION_OFFSET_DEG,
            });
        }
        step += 1;
    }
    markers
}

/// Anchor for a route label: the sample at half the path length.
pub fn label_anchor(points: &[Point]) -> Option<PathSample> {
    point_at_distance(points, path_length(points) / 2.0)
}

/// Axis-aligned bounds `(min, max)` of a point set.
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = points.first()?;
    let init = (*first, *first);
    Some(points.iter().skip(1).fold(init, |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}
