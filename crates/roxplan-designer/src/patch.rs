//! Typed field-level updates for elements and routes.
//!
//! Every update is checked by `validate` before it touches the document. An
//! invalid update is rejected whole; nothing is applied and no history entry
//! is recorded.

use roxplan_core::{is_hex_color, Point, ValidationError};

use crate::model::{Element, ExerciseType, FillStyle, Route, ShapeForm, MAX_Z_INDEX};

/// A single-field update to an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum ElementUpdate {
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
    /// Degrees; wrapped into `[0, 360)` on apply
    Rotation(f64),
    Label(String),
    Icon(String),
    Color(String),
    Opacity(f64),
    FontSize(Option<f64>),
    FillStyle(Option<FillStyle>),
    FillOpacity(Option<f64>),
    StrokeWidth(Option<f64>),
    DashPattern(Option<Vec<f64>>),
    ShowIcon(Option<bool>),
    ShapeForm(Option<ShapeForm>),
    CustomPoints(Option<Vec<Point>>),
    StationNumber(Option<u32>),
    ExerciseType(Option<ExerciseType>),
    Reps(Option<String>),
    Equipment(Option<Vec<String>>),
    Locked(bool),
    Visible(bool),
    ZIndex(i64),
}

impl ElementUpdate {
    /// Position change as the pair of updates a drag produces.
    pub fn moved_to(x: f64, y: f64) -> [ElementUpdate; 2] {
        [ElementUpdate::X(x), ElementUpdate::Y(y)]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::X(v) => check_finite("x", *v),
            Self::Y(v) => check_finite("y", *v),
            Self::Width(v) => check_non_negative("width", *v),
            Self::Height(v) => check_non_negative("height", *v),
            Self::Rotation(v) => check_finite("rotation", *v),
            Self::Color(c) => check_color("color", c),
            Self::Opacity(v) => check_unit_interval("opacity", *v),
            Self::FontSize(Some(v)) => check_positive("fontSize", *v),
            Self::FillOpacity(Some(v)) => check_unit_interval("fillOpacity", *v),
            Self::StrokeWidth(Some(v)) => check_non_negative("strokeWidth", *v),
            Self::DashPattern(Some(dash)) => dash
                .iter()
                .try_for_each(|d| check_non_negative("dashPattern", *d)),
            Self::CustomPoints(Some(points)) => points.iter().try_for_each(|p| {
                check_finite("customPoints", p.x)?;
                check_finite("customPoints", p.y)
            }),
            Self::ZIndex(v) => check_z_index(*v),
            _ => Ok(()),
        }
    }

    /// Writes the value into `element` without checking it.
    pub(crate) fn apply(self, element: &mut Element) {
        match self {
            Self::X(v) => element.x = v,
            Self::Y(v) => element.y = v,
            Self::Width(v) => element.width = v,
            Self::Height(v) => element.height = v,
            Self::Rotation(v) => element.rotation = wrap_degrees(v),
            Self::Label(v) => element.label = v,
            Self::Icon(v) => element.icon = v,
            Self::Color(v) => element.color = v,
            Self::Opacity(v) => element.opacity = v,
            Self::FontSize(v) => element.font_size = v,
            Self::FillStyle(v) => element.fill_style = v,
            Self::FillOpacity(v) => element.fill_opacity = v,
            Self::StrokeWidth(v) => element.stroke_width = v,
            Self::DashPattern(v) => element.dash_pattern = v,
            Self::ShowIcon(v) => element.show_icon = v,
            Self::ShapeForm(v) => element.shape_form = v,
            Self::CustomPoints(v) => element.custom_points = v,
            Self::StationNumber(v) => element.station_number = v,
            Self::ExerciseType(v) => element.exercise_type = v,
            Self::Reps(v) => element.reps = v,
            Self::Equipment(v) => element.equipment = v,
            Self::Locked(v) => element.locked = v,
            Self::Visible(v) => element.visible = v,
            Self::ZIndex(v) => element.z_index = v,
        }
    }
}

/// A single-field update to a [`Route`].
#[derive(Debug, Clone, PartialEq)]
pub enum RouteUpdate {
    Points(Vec<Point>),
    Color(String),
    StrokeWidth(f64),
    DashPattern(Option<Vec<f64>>),
    ShowArrows(bool),
    ArrowSpacing(f64),
    Label(Option<String>),
}

impl RouteUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Points(points) => crate::model::route::validate_points(points),
            Self::Color(c) => check_color("color", c),
            Self::StrokeWidth(v) => check_non_negative("strokeWidth", *v),
            Self::DashPattern(Some(dash)) => dash
                .iter()
                .try_for_each(|d| check_non_negative("dashPattern", *d)),
            Self::ArrowSpacing(v) => check_positive("arrowSpacing", *v),
            _ => Ok(()),
        }
    }

    pub(crate) fn apply(self, route: &mut Route) {
        match self {
            Self::Points(v) => route.points = v,
            Self::Color(v) => route.color = v,
            Self::StrokeWidth(v) => route.stroke_width = v,
            Self::DashPattern(v) => route.dash_pattern = v,
            Self::ShowArrows(v) => route.show_arrows = v,
            Self::ArrowSpacing(v) => route.arrow_spacing = v,
            Self::Label(v) => route.label = v,
        }
    }
}

/// Validates a batch; the first failure rejects all of it.
pub fn validate_element_updates(updates: &[ElementUpdate]) -> Result<(), ValidationError> {
    updates.iter().try_for_each(ElementUpdate::validate)
}

pub fn validate_route_updates(updates: &[RouteUpdate]) -> Result<(), ValidationError> {
    updates.iter().try_for_each(RouteUpdate::validate)
}

fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: f64::MAX,
        });
    }
    Ok(())
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(())
}

pub(crate) fn check_unit_interval(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

fn check_z_index(value: i64) -> Result<(), ValidationError> {
    if !(-MAX_Z_INDEX..=MAX_Z_INDEX).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "zIndex",
            value: value as f64,
            min: -MAX_Z_INDEX as f64,
            max: MAX_Z_INDEX as f64,
        });
    }
    Ok(())
}

fn check_color(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_hex_color(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}
