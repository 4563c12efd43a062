//! Route drawing in progress.
//!
//! Clicks add points; a completion gesture turns the draft into a
//! [`NewRoute`]. Drafts with fewer than two points are dropped, so no inert
//! route ever reaches the document.

use roxplan_core::Point;
use roxplan_settings::EditingSettings;

use crate::model::{NewRoute, MIN_ROUTE_POINTS};

#[derive(Debug, Clone, Default)]
pub struct RouteDraft {
    points: Vec<Point>,
    color: String,
    stroke_width: f64,
    arrow_spacing: f64,
}

impl RouteDraft {
    pub fn new() -> Self {
        Self::from_settings(&EditingSettings::default())
    }

    /// Draft whose finished route uses the configured route style.
    pub fn from_settings(settings: &EditingSettings) -> Self {
        Self {
            points: Vec::new(),
            color: settings.route_color.clone(),
            stroke_width: settings.route_stroke_width,
            arrow_spacing: settings.route_arrow_spacing,
        }
    }

    /// Adds a clicked point. Non-finite points are ignored.
    pub fn push(&mut self, point: Point) {
        if point.is_finite() {
            self.points.push(point);
        } else {
            tracing::warn!("Ignoring non-finite route point {:?}", point);
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Completes the draft. Returns `None`, and discards the points, when
    /// fewer than two were collected.
    pub fn finish(&mut self) -> Option<NewRoute> {
        let points = std::mem::take(&mut self.points);
        if points.len() < MIN_ROUTE_POINTS {
            tracing::debug!("Discarding route draft with {} point(s)", points.len());
            return None;
        }
        let mut route = NewRoute::new(points);
        route.color = self.color.clone();
        route.stroke_width = self.stroke_width;
        route.arrow_spacing = self.arrow_spacing;
        Some(route)
    }

    pub fn cancel(&mut self) {
        self.points.clear();
    }
}
