//! # RoxPlan Core
//!
//! Core types and utilities shared by the RoxPlan crates:
//! - **geometry**: arc-length sampling over polylines (route length,
//!   point/tangent at distance, direction-arrow placement)
//! - **error**: validation and persistence error taxonomy
//! - **clock**: monotonic time source used by debounced history and autosave
//! - **background**: canvas background kinds

pub mod background;
pub mod clock;
pub mod color;
pub mod error;
pub mod geometry;

pub use background::BackgroundKind;
pub use clock::{Clock, ManualClock, SystemClock};
pub use color::is_hex_color;
pub use error::{Error, Result, StoreError, ValidationError};
pub use geometry::{
    arrow_markers, bounding_box, label_anchor, path_length, point_at_distance, ArrowMarker,
    PathSample, Point, ARROW_ROTATION_OFFSET_DEG,
};
