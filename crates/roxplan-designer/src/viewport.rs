//! Viewport and coordinate transformation for canvas rendering.
//!
//! Maps pointer coordinates (screen space) to plan coordinates (canvas
//! space). Both spaces have their origin at the top-left with Y pointing
//! down, so the transform is a uniform scale plus a translation:
//!
//! ```text
//! canvas = (screen - pan) / zoom
//! screen = canvas * zoom + pan
//! ```

use roxplan_core::Point;
use roxplan_settings::EditingSettings;

/// Zoom and pan state of the editor view.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl Viewport {
    /// Creates a viewport at 100% with no pan.
    pub fn new() -> Self {
        Self::from_settings(&EditingSettings::default())
    }

    /// Creates a viewport using the zoom bounds and step of `settings`.
    pub fn from_settings(settings: &EditingSettings) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            zoom_step: settings.zoom_step,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured bounds.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// One wheel notch around `pointer` (screen coordinates).
    ///
    /// The canvas point under the pointer stays under the pointer. When the
    /// zoom is clamped, the pan is computed from the clamped value.
    pub fn zoom_at(&mut self, pointer: Point, zoom_in: bool) {
        let anchor = self.screen_to_canvas(pointer);
        let target = if zoom_in {
            self.zoom * self.zoom_step
        } else {
            self.zoom / self.zoom_step
        };
        self.set_zoom(target);
        self.pan_x = pointer.x - anchor.x * self.zoom;
        self.pan_y = pointer.y - anchor.y * self.zoom;
    }

    /// Converts pointer coordinates to plan coordinates.
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Converts plan coordinates to pointer coordinates.
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.zoom + self.pan_x,
            canvas.y * self.zoom + self.pan_y,
        )
    }

    /// Back to 100% with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
