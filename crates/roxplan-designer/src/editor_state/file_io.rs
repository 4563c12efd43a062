//! Load, reset and store operations for editor state.

use roxplan_core::StoreError;

use super::EditorState;
use crate::commands::ActiveTool;
use crate::history::History;
use crate::model::{CanvasSettings, PlanMeta, MAX_Z_INDEX};
use crate::selection::Selection;
use crate::serialization::PlanRecord;
use crate::store::PlanStore;
use crate::viewport::Viewport;

impl EditorState {
    /// Replaces the whole document with `record`.
    ///
    /// Selection and history are cleared and the plan is clean afterwards;
    /// undo never crosses a load.
    pub fn load_plan(&mut self, record: PlanRecord) {
        tracing::info!(
            "Loading plan '{}' ({} elements, {} routes)",
            record.name,
            record.elements.len(),
            record.routes.len()
        );
        self.meta = record.meta();
        self.canvas = record.canvas();
        self.elements = record.elements;
        self.routes = record.routes;
        for element in &mut self.elements {
            let z = element.z_index.clamp(-MAX_Z_INDEX, MAX_Z_INDEX);
            if z != element.z_index {
                tracing::warn!("Clamped z-index {} of element {}", element.z_index, element.id);
                element.z_index = z;
            }
        }
        self.selection = Selection::None;
        self.history.clear();
        self.dirty = false;
    }

    /// Serializable copy of the current document.
    pub fn to_record(&self) -> PlanRecord {
        PlanRecord::from_parts(
            &self.meta,
            &self.canvas,
            self.elements.clone(),
            self.routes.clone(),
        )
    }

    /// Back to a blank plan with a fresh id, as on startup.
    pub fn reset_editor(&mut self) {
        self.meta = PlanMeta::default();
        self.canvas = CanvasSettings::from(&self.config.canvas);
        self.elements.clear();
        self.routes.clear();
        self.selection = Selection::None;
        self.active_tool = ActiveTool::Select;
        self.viewport = Viewport::from_settings(&self.config.editing);
        self.history = History::with_settings(
            self.config.history.capacity,
            self.config.history.debounce_window(),
        );
        self.dirty = false;
        self.saving = false;
        self.last_saved_at = None;
        tracing::info!("Editor reset");
    }

    /// Writes the document to `store` and marks it clean.
    ///
    /// On failure the plan stays dirty and the error is returned.
    pub fn save_to_store(&mut self, store: &mut dyn PlanStore) -> Result<(), StoreError> {
        self.set_save_status(true);
        match store.put(self.to_record()) {
            Ok(stored) => {
                self.meta.created_at = stored.created_at;
                self.meta.updated_at = stored.updated_at;
                self.dirty = false;
                self.set_save_status(false);
                tracing::info!("Saved plan '{}'", self.meta.name);
                Ok(())
            }
            Err(e) => {
                self.saving = false;
                tracing::warn!("Failed to save plan '{}': {}", self.meta.name, e);
                Err(e)
            }
        }
    }

    /// Loads plan `id` from `store`.
    pub fn open_from_store(&mut self, store: &dyn PlanStore, id: &str) -> Result<(), StoreError> {
        let record = store.get(id)?;
        self.load_plan(record);
        Ok(())
    }
}
