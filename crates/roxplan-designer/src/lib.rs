//! # RoxPlan Designer
//!
//! This crate provides the editable course plan behind the RoxPlan editor:
//! the document model, the mutation API, undo/redo history and plan
//! persistence.
//!
//! ## Core Components
//!
//! ### Document
//! - **Model**: elements (stations, zones, markers, text, arrows, barriers,
//!   shapes), routes and plan metadata
//! - **Patch**: typed field-level updates validated at the API boundary
//! - **Editor state**: the single-writer container that applies mutations
//!
//! ### History
//! - **Snapshots**: deep copies of elements and routes taken before a change
//! - **Debounce gate**: folds a burst of continuous edits into one undo step
//!
//! ### Persistence
//! - **Plan record**: the camelCase JSON plan exchanged with stores
//! - **Stores**: in-memory and single-file JSON plan lists
//! - **Autosave**: saves a dirty plan after a quiet period
//!
//! ## Architecture
//!
//! ```text
//! EditorState
//!   ├── PlanMeta / CanvasSettings
//!   ├── Elements, Routes (model)
//!   ├── Selection, ActiveTool, Viewport
//!   └── History (Snapshot stacks + DebounceGate)
//!
//! PlanRecord <-> PlanStore (memory, JSON file)
//!   └── AutosaveScheduler
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roxplan_designer::{EditorState, ElementKind, NewElement};
//!
//! let mut editor = EditorState::new();
//! let id = editor.add_element(NewElement::new(ElementKind::Station).at(100.0, 50.0))?;
//! editor.move_element(&id, 120.0, 60.0)?;
//! editor.undo();
//! ```

pub mod autosave;
pub mod commands;
pub mod editor_state;
pub mod history;
pub mod model;
pub mod patch;
pub mod route_draft;
pub mod selection;
pub mod serialization;
pub mod store;
pub mod viewport;

pub use autosave::{AutosaveScheduler, AutosaveStatus};
pub use commands::{ActiveTool, EditorCommand};
pub use editor_state::{EditorState, MutationOutcome};
pub use history::{DebounceGate, EditTarget, GateState, History, Snapshot};
pub use model::{
    Background, CanvasSettings, Element, ElementId, ElementKind, EventType, ExerciseType,
    FillStyle, NewElement, NewRoute, PlanMeta, Route, RouteId, ShapeForm, MAX_Z_INDEX,
};
pub use patch::{ElementUpdate, RouteUpdate};
pub use route_draft::RouteDraft;
pub use selection::Selection;
pub use serialization::{PlanRecord, PlanSummary};
pub use store::{JsonFilePlanStore, MemoryPlanStore, PlanStore, StoreResult};
pub use viewport::Viewport;
