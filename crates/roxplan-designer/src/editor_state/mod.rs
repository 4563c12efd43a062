//! Editor state manager.
//!
//! [`EditorState`] owns the live plan: metadata, canvas settings, elements,
//! routes, selection and history. Its fields are private; the mutation
//! methods are the only way to change the document, so every change passes
//! through history and the dirty flag.
//!
//! This module is split into submodules:
//! - `elements`: element mutations
//! - `routes`: route mutations
//! - `history`: undo/redo
//! - `stations`: station numbering and legend
//! - `file_io`: load, reset and store round-trips

mod elements;
mod file_io;
mod history;
mod routes;
mod stations;

use chrono::{DateTime, Utc};
use roxplan_core::{BackgroundKind, Clock, Point, SystemClock};
use roxplan_settings::{Config, EditingSettings};
use std::sync::Arc;

use crate::commands::{ActiveTool, EditorCommand};
use crate::history::{History, Snapshot};
use crate::model::{CanvasSettings, Element, EventType, PlanMeta, Route};
use crate::selection::Selection;
use crate::viewport::Viewport;

/// Result of a mutation aimed at an existing entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    /// No entity with that id; nothing changed.
    NotFound,
    /// The element is locked against moves; nothing changed.
    Locked,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Live editing state of one plan.
#[derive(Debug, Clone)]
pub struct EditorState {
    meta: PlanMeta,
    canvas: CanvasSettings,
    elements: Vec<Element>,
    routes: Vec<Route>,
    selection: Selection,
    active_tool: ActiveTool,
    viewport: Viewport,
    history: History,
    dirty: bool,
    saving: bool,
    last_saved_at: Option<DateTime<Utc>>,
    config: Config,
    clock: Arc<dyn Clock>,
}

impl EditorState {
    /// Creates an editor on a blank plan with default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an editor reading time from `clock`.
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            meta: PlanMeta::default(),
            canvas: CanvasSettings::from(&config.canvas),
            elements: Vec::new(),
            routes: Vec::new(),
            selection: Selection::None,
            active_tool: ActiveTool::Select,
            viewport: Viewport::from_settings(&config.editing),
            history: History::with_settings(
                config.history.capacity,
                config.history.debounce_window(),
            ),
            dirty: false,
            saving: false,
            last_saved_at: None,
            config,
            clock,
        }
    }

    pub fn meta(&self) -> &PlanMeta {
        &self.meta
    }

    pub fn canvas(&self) -> &CanvasSettings {
        &self.canvas
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Routes in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Visible elements, lowest z-index first. Ties keep insertion order.
    pub fn elements_in_paint_order(&self) -> Vec<&Element> {
        let mut visible: Vec<&Element> = self.elements.iter().filter(|e| e.visible).collect();
        visible.sort_by_key(|e| e.z_index);
        visible
    }

    /// Topmost visible element under `point` (canvas coordinates).
    pub fn hit_test(&self, point: Point) -> Option<&Element> {
        self.elements_in_paint_order()
            .into_iter()
            .rev()
            .find(|e| e.contains_point(point))
    }

    pub fn editing_settings(&self) -> &EditingSettings {
        &self.config.editing
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    // Selection

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.element_id().and_then(|id| self.element(id))
    }

    pub fn selected_route(&self) -> Option<&Route> {
        self.selection.route_id().and_then(|id| self.route(id))
    }

    /// Selects an element, clearing any route selection.
    pub fn select_element(&mut self, id: impl Into<String>) {
        self.selection = Selection::Element(id.into());
    }

    /// Selects a route, clearing any element selection.
    pub fn select_route(&mut self, id: impl Into<String>) {
        self.selection = Selection::Route(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.active_tool
    }

    /// Switches tool; the selection is cleared.
    pub fn set_active_tool(&mut self, tool: ActiveTool) {
        self.active_tool = tool;
        self.selection = Selection::None;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    // Plan metadata and background. These mark the plan dirty but are not
    // part of undo history.

    pub fn set_plan_name(&mut self, name: impl Into<String>) {
        self.meta.name = name.into();
        self.dirty = true;
    }

    pub fn set_event_type(&mut self, event_type: EventType) {
        self.meta.event_type = event_type;
        self.dirty = true;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.meta.description = description;
        self.dirty = true;
    }

    pub fn set_public(&mut self, is_public: bool) {
        self.meta.is_public = is_public;
        self.dirty = true;
    }

    /// Ignores zero dimensions.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            tracing::warn!("Ignoring canvas size {}x{}", width, height);
            return;
        }
        self.canvas.width = width;
        self.canvas.height = height;
        self.dirty = true;
    }

    pub fn set_background_kind(&mut self, kind: BackgroundKind) {
        self.canvas.background.kind = kind;
        self.dirty = true;
    }

    pub fn set_background_image(&mut self, url: Option<String>) {
        self.canvas.background.image_url = url;
        self.dirty = true;
    }

    /// Background opacity on the 0-100 scale; larger values are clamped.
    pub fn set_background_opacity(&mut self, opacity: u8) {
        self.canvas.background.opacity = opacity.min(100);
        self.dirty = true;
    }

    // Save status

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    /// Host toggles this around a save; finishing a save stamps
    /// `last_saved_at`.
    pub fn set_save_status(&mut self, saving: bool) {
        self.saving = saving;
        if !saving {
            self.last_saved_at = Some(Utc::now());
        }
    }

    // History accessors

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// `-1` when there is nothing to undo.
    pub fn history_index(&self) -> isize {
        self.history.index()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Ends any open debounce burst, e.g. when the host view goes away.
    pub fn cancel_pending_edit(&mut self) {
        self.history.reset_gate();
    }

    /// Runs a keyboard command. Returns whether anything changed.
    pub fn dispatch(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::DeleteSelection => match self.selection.clone() {
                Selection::Element(id) => self.remove_element(&id).is_applied(),
                Selection::Route(id) => self.remove_route(&id).is_applied(),
                Selection::None => false,
            },
            EditorCommand::DuplicateSelection => match self.selection.clone() {
                Selection::Element(id) => self.duplicate_element(&id).is_some(),
                _ => false,
            },
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.elements, &self.routes, self.clock.now())
    }

    /// Immediate pre-mutation snapshot.
    fn record_history(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    fn next_z_index(&self) -> i64 {
        self.elements
            .iter()
            .map(|e| e.z_index)
            .max()
            .unwrap_or(0)
            .max(0)
            .saturating_add(1)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
