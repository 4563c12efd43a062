use roxplan_core::geometry::{self, ArrowMarker, PathSample};
use roxplan_core::{is_hex_color, Point, ValidationError};
use serde::{Deserialize, Serialize};

use crate::patch::{check_finite, check_non_negative, check_positive};

pub type RouteId = String;

/// Fewest points a route needs to be drawn and measured.
pub const MIN_ROUTE_POINTS: usize = 2;

/// A course segment drawn as a polyline.
///
/// `points` are kept in the order they were drawn; all derived geometry
/// walks them in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: RouteId,
    pub points: Vec<Point>,
    pub color: String,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<Vec<f64>>,
    pub show_arrows: bool,
    /// Canvas distance between direction arrows
    pub arrow_spacing: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Route {
    /// Routes with fewer than two points are inert: not drawn, not measured.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= MIN_ROUTE_POINTS
    }

    pub fn length(&self) -> f64 {
        geometry::path_length(&self.points)
    }

    pub fn point_at(&self, distance: f64) -> Option<PathSample> {
        geometry::point_at_distance(&self.points, distance)
    }

    /// Direction arrows, or none when arrows are switched off.
    pub fn arrow_markers(&self) -> Vec<ArrowMarker> {
        if !self.show_arrows {
            return Vec::new();
        }
        geometry::arrow_markers(&self.points, self.arrow_spacing)
    }

    pub fn label_anchor(&self) -> Option<PathSample> {
        geometry::label_anchor(&self.points)
    }
}

/// A route about to be added; the editor assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub points: Vec<Point>,
    pub color: String,
    pub stroke_width: f64,
    pub dash_pattern: Option<Vec<f64>>,
    pub show_arrows: bool,
    pub arrow_spacing: f64,
    pub label: Option<String>,
}

impl NewRoute {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            color: "#000000".to_string(),
            stroke_width: 3.0,
            dash_pattern: None,
            show_arrows: true,
            arrow_spacing: 80.0,
            label: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_points(&self.points)?;
        if !is_hex_color(&self.color) {
            return Err(ValidationError::InvalidColor {
                field: "color",
                value: self.color.clone(),
            });
        }
        check_non_negative("strokeWidth", self.stroke_width)?;
        check_positive("arrowSpacing", self.arrow_spacing)?;
        if let Some(dash) = &self.dash_pattern {
            for d in dash {
                check_non_negative("dashPattern", *d)?;
            }
        }
        Ok(())
    }

    pub(crate) fn into_route(self, id: RouteId) -> Route {
        Route {
            id,
            points: self.points,
            color: self.color,
            stroke_width: self.stroke_width,
            dash_pattern: self.dash_pattern,
            show_arrows: self.show_arrows,
            arrow_spacing: self.arrow_spacing,
            label: self.label,
        }
    }
}

pub(crate) fn validate_points(points: &[Point]) -> Result<(), ValidationError> {
    if points.len() < MIN_ROUTE_POINTS {
        return Err(ValidationError::TooFewPoints {
            count: points.len(),
            min: MIN_ROUTE_POINTS,
        });
    }
    for p in points {
        check_finite("points", p.x)?;
        check_finite("points", p.y)?;
    }
    Ok(())
}
