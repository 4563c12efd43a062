//! # RoxPlan
//!
//! Course plan editor core for fitness events (HYROX, CrossFit and custom
//! formats): stations, zones, markers, barriers and routes laid out on a
//! 2D canvas.
//!
//! ## Architecture
//!
//! RoxPlan is organized as a workspace with multiple crates:
//!
//! 1. **roxplan-core** - Geometry, errors, clock, shared value types
//! 2. **roxplan-settings** - Editor configuration (history, autosave, canvas defaults)
//! 3. **roxplan-designer** - Document model, mutations, undo/redo, persistence
//! 4. **roxplan** - Command-line front end over a plan store
//!
//! ## Features
//!
//! - **Typed mutations**: field-level updates validated before they touch the plan
//! - **Undo/redo**: snapshot history with a 50-step cap and debounced continuous edits
//! - **Route geometry**: arc-length sampling for lengths, labels and direction arrows
//! - **Persistence**: camelCase JSON plan records in memory or on disk, with autosave

pub mod cli;

pub use roxplan_core::{
    arrow_markers, path_length, point_at_distance, ArrowMarker, BackgroundKind, Clock, Error,
    ManualClock, Point, Result, StoreError, SystemClock, ValidationError,
};

pub use roxplan_designer::{
    ActiveTool, AutosaveScheduler, AutosaveStatus, EditorCommand, EditorState, Element,
    ElementId, ElementKind, ElementUpdate, EventType, History, JsonFilePlanStore,
    MemoryPlanStore, MutationOutcome, NewElement, NewRoute, PlanRecord, PlanStore, PlanSummary,
    Route, RouteDraft, RouteId, RouteUpdate, Selection, Viewport,
};

pub use roxplan_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
/// - INFO as the fallback level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so command output on stdout stays clean
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
