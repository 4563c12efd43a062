use roxplan_core::{is_hex_color, Point, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::patch::{
    check_finite, check_non_negative, check_positive, check_unit_interval, ElementUpdate,
};

pub type ElementId = String;

/// Largest z-index a plan may hold: the largest integer a JSON number
/// carries exactly. Stacking above it would lose order on the wire.
pub const MAX_Z_INDEX: i64 = (1 << 53) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Station,
    Zone,
    Marker,
    Text,
    Arrow,
    Barrier,
    Shape,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Station => "Station",
            Self::Zone => "Zone",
            Self::Marker => "Marker",
            Self::Text => "Text",
            Self::Arrow => "Arrow",
            Self::Barrier => "Barrier",
            Self::Shape => "Shape",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    #[default]
    Solid,
    /// Semi-transparent fill, see `fill_opacity`
    Transparent,
    /// Outline only
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeForm {
    #[default]
    Rectangle,
    Circle,
    Diamond,
    Hexagon,
    Triangle,
    /// Free polygon described by `custom_points`
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Skierg,
    SledPush,
    SledPull,
    BurpeeBroadJump,
    Rowing,
    FarmersCarry,
    Lunges,
    WallBalls,
    Custom,
}

/// A placed object on the plan canvas.
///
/// Field names serialize to the camelCase plan record. Optional appearance
/// fields stay `None` when the record did not carry them so that a load/save
/// cycle reproduces the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,

    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, kept within `[0, 360)`
    pub rotation: f64,

    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_number: Option<u32>,
    #[serde(default)]
    pub icon: String,
    pub color: String,
    /// Element opacity on the 0-1 scale
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_style: Option<FillStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_form: Option<ShapeForm>,
    /// Polygon vertices relative to `(x, y)`, used with [`ShapeForm::Custom`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_points: Option<Vec<Point>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<ExerciseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,

    pub locked: bool,
    pub visible: bool,
    pub z_index: i64,
}

impl Element {
    pub fn is_station(&self) -> bool {
        self.kind == ElementKind::Station
    }

    pub fn effective_fill_style(&self) -> FillStyle {
        self.fill_style.unwrap_or_default()
    }

    pub fn effective_shape_form(&self) -> ShapeForm {
        self.shape_form.unwrap_or_default()
    }

    /// Icons are shown unless explicitly hidden.
    pub fn shows_icon(&self) -> bool {
        self.show_icon != Some(false)
    }

    /// Hit test against the element's box, rotated about its origin `(x, y)`.
    ///
    /// Hidden elements never hit.
    pub fn contains_point(&self, p: Point) -> bool {
        if !self.visible {
            return false;
        }
        let (sin, cos) = (-self.rotation.to_radians()).sin_cos();
        let dx = p.x - self.x;
        let dy = p.y - self.y;
        let lx = dx * cos - dy * sin;
        let ly = dx * sin + dy * cos;
        (0.0..=self.width).contains(&lx) && (0.0..=self.height).contains(&ly)
    }

    /// Checks every numeric and color field the way typed updates are checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_non_negative("width", self.width)?;
        check_non_negative("height", self.height)?;
        check_finite("rotation", self.rotation)?;
        check_unit_interval("opacity", self.opacity)?;
        if !is_hex_color(&self.color) {
            return Err(ValidationError::InvalidColor {
                field: "color",
                value: self.color.clone(),
            });
        }
        if let Some(size) = self.font_size {
            check_positive("fontSize", size)?;
        }
        if let Some(o) = self.fill_opacity {
            check_unit_interval("fillOpacity", o)?;
        }
        if let Some(w) = self.stroke_width {
            check_non_negative("strokeWidth", w)?;
        }
        if let Some(dash) = &self.dash_pattern {
            for d in dash {
                check_non_negative("dashPattern", *d)?;
            }
        }
        if let Some(points) = &self.custom_points {
            for p in points {
                check_finite("customPoints", p.x)?;
                check_finite("customPoints", p.y)?;
            }
        }
        Ok(())
    }
}

/// A not-yet-placed element: everything but the id and the z-index, which
/// the editor assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewElement {
    inner: Element,
}

impl NewElement {
    /// Starts from the library defaults of `kind`.
    pub fn new(kind: ElementKind) -> Self {
        let (width, height, color) = match kind {
            ElementKind::Station => (80.0, 80.0, "#3B82F6"),
            ElementKind::Zone => (200.0, 150.0, "#10B981"),
            ElementKind::Marker => (40.0, 40.0, "#F59E0B"),
            ElementKind::Text => (120.0, 30.0, "#111827"),
            ElementKind::Arrow => (80.0, 20.0, "#6B7280"),
            ElementKind::Barrier => (200.0, 10.0, "#EF4444"),
            ElementKind::Shape => (100.0, 100.0, "#8B5CF6"),
        };

        let mut inner = Element {
            id: String::new(),
            kind,
            x: 0.0,
            y: 0.0,
            width,
            height,
            rotation: 0.0,
            label: kind.to_string(),
            station_number: None,
            icon: kind.to_string().to_lowercase(),
            color: color.to_string(),
            opacity: 1.0,
            font_size: None,
            fill_style: None,
            fill_opacity: None,
            stroke_width: None,
            dash_pattern: None,
            show_icon: None,
            shape_form: None,
            custom_points: None,
            exercise_type: None,
            reps: None,
            equipment: None,
            locked: false,
            visible: true,
            z_index: 0,
        };

        match kind {
            ElementKind::Zone => {
                inner.fill_style = Some(FillStyle::Transparent);
                inner.fill_opacity = Some(0.2);
                inner.stroke_width = Some(2.0);
            }
            ElementKind::Text => {
                inner.font_size = Some(16.0);
                inner.show_icon = Some(false);
            }
            ElementKind::Barrier => {
                inner.stroke_width = Some(4.0);
                inner.dash_pattern = Some(vec![10.0, 5.0]);
                inner.show_icon = Some(false);
            }
            ElementKind::Shape => {
                inner.shape_form = Some(ShapeForm::Rectangle);
                inner.show_icon = Some(false);
            }
            _ => {}
        }

        Self { inner }
    }

    /// Template built from an existing element (id and z-index are dropped).
    pub fn from_element(element: &Element) -> Self {
        let mut inner = element.clone();
        inner.id.clear();
        inner.z_index = 0;
        Self { inner }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.inner.x = x;
        self.inner.y = y;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.inner.width = width;
        self.inner.height = height;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.inner.label = label.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.inner.color = color.into();
        self
    }

    /// Applies any typed update to the template. Values are checked when the
    /// element is added.
    pub fn with(mut self, update: ElementUpdate) -> Self {
        update.apply(&mut self.inner);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.inner.kind
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.inner.validate()
    }

    pub(crate) fn into_element(self, id: ElementId, z_index: i64) -> Element {
        Element {
            id,
            z_index,
            ..self.inner
        }
    }
}
