//! Element mutations.

use roxplan_core::ValidationError;

use super::{EditorState, MutationOutcome};
use crate::history::{EditTarget, Snapshot};
use crate::model::{ElementId, NewElement};
use crate::patch::{validate_element_updates, ElementUpdate};

impl EditorState {
    /// Adds an element on top of all others and selects it.
    pub fn add_element(&mut self, element: NewElement) -> Result<ElementId, ValidationError> {
        if let Err(e) = element.validate() {
            tracing::warn!("Rejected new {} element: {}", element.kind(), e);
            return Err(e);
        }

        self.record_history();
        let id = uuid::Uuid::new_v4().to_string();
        let element = element.into_element(id.clone(), self.next_z_index());
        tracing::debug!("Added {} element {} at z {}", element.kind, id, element.z_index);
        self.elements.push(element);
        self.select_element(id.clone());
        self.dirty = true;
        Ok(id)
    }

    /// Applies a batch of field updates to one element.
    ///
    /// Continuous edits on the same element within the debounce window share
    /// one undo step. The batch is validated first and rejected whole.
    pub fn update_element(
        &mut self,
        id: &str,
        updates: impl IntoIterator<Item = ElementUpdate>,
    ) -> Result<MutationOutcome, ValidationError> {
        let updates: Vec<ElementUpdate> = updates.into_iter().collect();
        if let Err(e) = validate_element_updates(&updates) {
            tracing::warn!("Rejected update to element {}: {}", id, e);
            return Err(e);
        }
        let Some(index) = self.elements.iter().position(|e| e.id == id) else {
            tracing::debug!("update_element: no element {}", id);
            return Ok(MutationOutcome::NotFound);
        };
        if updates.is_empty() {
            return Ok(MutationOutcome::Applied);
        }

        let now = self.clock.now();
        let target = EditTarget::Element(id.to_string());
        self.history.record_debounced(&target, now, || {
            Snapshot::capture(&self.elements, &self.routes, now)
        });

        let element = &mut self.elements[index];
        for update in updates {
            update.apply(element);
        }
        self.dirty = true;
        Ok(MutationOutcome::Applied)
    }

    /// Drags an element to `(x, y)`. Locked elements stay put.
    pub fn move_element(
        &mut self,
        id: &str,
        x: f64,
        y: f64,
    ) -> Result<MutationOutcome, ValidationError> {
        let locked = match self.element(id) {
            Some(e) => e.locked,
            None => {
                tracing::debug!("move_element: no element {}", id);
                return Ok(MutationOutcome::NotFound);
            }
        };
        if locked {
            tracing::debug!("move_element: element {} is locked", id);
            return Ok(MutationOutcome::Locked);
        }
        self.update_element(id, ElementUpdate::moved_to(x, y))
    }

    /// Removes an element; a selection on it is cleared.
    pub fn remove_element(&mut self, id: &str) -> MutationOutcome {
        let Some(index) = self.elements.iter().position(|e| e.id == id) else {
            tracing::debug!("remove_element: no element {}", id);
            return MutationOutcome::NotFound;
        };

        self.record_history();
        self.elements.remove(index);
        if self.selection.element_id() == Some(id) {
            self.clear_selection();
        }
        self.dirty = true;
        MutationOutcome::Applied
    }

    /// Copies an element, offset by the configured duplicate offset, on top
    /// of all others. Returns the new id, or `None` if `id` is unknown.
    pub fn duplicate_element(&mut self, id: &str) -> Option<ElementId> {
        let Some(source) = self.element(id).cloned() else {
            tracing::debug!("duplicate_element: no element {}", id);
            return None;
        };

        self.record_history();
        let offset = self.config.editing.duplicate_offset;
        let new_id = uuid::Uuid::new_v4().to_string();
        let mut copy = source;
        copy.id = new_id.clone();
        copy.x += offset;
        copy.y += offset;
        copy.z_index = self.next_z_index();
        self.elements.push(copy);
        self.select_element(new_id.clone());
        self.dirty = true;
        Some(new_id)
    }
}
