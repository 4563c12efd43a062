//! Route mutations.

use roxplan_core::ValidationError;

use super::{EditorState, MutationOutcome};
use crate::history::{EditTarget, Snapshot};
use crate::model::{NewRoute, RouteId};
use crate::patch::{validate_route_updates, RouteUpdate};

impl EditorState {
    /// Adds a route and selects it. Fewer than two points is rejected.
    pub fn add_route(&mut self, route: NewRoute) -> Result<RouteId, ValidationError> {
        if let Err(e) = route.validate() {
            tracing::warn!("Rejected new route: {}", e);
            return Err(e);
        }

        self.record_history();
        let id = uuid::Uuid::new_v4().to_string();
        let route = route.into_route(id.clone());
        tracing::debug!("Added route {} ({} points)", id, route.points.len());
        self.routes.push(route);
        self.select_route(id.clone());
        self.dirty = true;
        Ok(id)
    }

    /// Applies a batch of field updates to one route, debounced like
    /// element updates.
    pub fn update_route(
        &mut self,
        id: &str,
        updates: impl IntoIterator<Item = RouteUpdate>,
    ) -> Result<MutationOutcome, ValidationError> {
        let updates: Vec<RouteUpdate> = updates.into_iter().collect();
        if let Err(e) = validate_route_updates(&updates) {
            tracing::warn!("Rejected update to route {}: {}", id, e);
            return Err(e);
        }
        let Some(index) = self.routes.iter().position(|r| r.id == id) else {
            tracing::debug!("update_route: no route {}", id);
            return Ok(MutationOutcome::NotFound);
        };
        if updates.is_empty() {
            return Ok(MutationOutcome::Applied);
        }

        let now = self.clock.now();
        let target = EditTarget::Route(id.to_string());
        self.history.record_debounced(&target, now, || {
            Snapshot::capture(&self.elements, &self.routes, now)
        });

        let route = &mut self.routes[index];
        for update in updates {
            update.apply(route);
        }
        self.dirty = true;
        Ok(MutationOutcome::Applied)
    }

    /// Removes a route; a selection on it is cleared.
    pub fn remove_route(&mut self, id: &str) -> MutationOutcome {
        let Some(index) = self.routes.iter().position(|r| r.id == id) else {
            tracing::debug!("remove_route: no route {}", id);
            return MutationOutcome::NotFound;
        };

        self.record_history();
        self.routes.remove(index);
        if self.selection.route_id() == Some(id) {
            self.clear_selection();
        }
        self.dirty = true;
        MutationOutcome::Applied
    }
}
