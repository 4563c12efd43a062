//! Undo/redo on the live document.

use super::EditorState;
use crate::history::Snapshot;
use crate::selection::Selection;

impl EditorState {
    /// Restores the state before the most recent recorded mutation.
    ///
    /// Returns `false`, changing nothing, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let now = self.clock.now();
        let Some(previous) = self
            .history
            .undo(|| Snapshot::capture(&self.elements, &self.routes, now))
        else {
            return false;
        };
        self.restore(previous);
        true
    }

    /// Re-applies the most recently undone mutation.
    pub fn redo(&mut self) -> bool {
        let now = self.clock.now();
        let Some(next) = self
            .history
            .redo(|| Snapshot::capture(&self.elements, &self.routes, now))
        else {
            return false;
        };
        self.restore(next);
        true
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.elements = snapshot.elements;
        self.routes = snapshot.routes;
        self.dirty = true;

        // Drop a selection whose target no longer exists
        let stale = match &self.selection {
            Selection::Element(id) => self.element(id).is_none(),
            Selection::Route(id) => self.route(id).is_none(),
            Selection::None => false,
        };
        if stale {
            self.clear_selection();
        }
    }
}
