//! Autosave scheduling.
//!
//! The scheduler arms when it first sees the plan dirty and fires once the
//! quiet period has passed since then. Later edits do not push the deadline
//! back. A failed save leaves the plan dirty; the scheduler re-arms on the
//! next poll and tries again after another quiet period.

use std::time::{Duration, Instant};

use roxplan_settings::AutosaveSettings;

use crate::editor_state::EditorState;
use crate::store::PlanStore;

/// What a call to [`AutosaveScheduler::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosaveStatus {
    /// Disabled, or nothing to save
    Idle,
    /// Waiting for the quiet period to end
    Pending,
    Saved,
    Failed,
}

#[derive(Debug, Clone)]
pub struct AutosaveScheduler {
    enabled: bool,
    quiet_period: Duration,
    armed_at: Option<Instant>,
}

impl AutosaveScheduler {
    pub fn new(settings: &AutosaveSettings) -> Self {
        Self {
            enabled: settings.enabled,
            quiet_period: settings.quiet_period(),
            armed_at: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Drops a pending save without touching the plan.
    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    /// Checks the editor and saves through `store` when due.
    pub fn poll(&mut self, editor: &mut EditorState, store: &mut dyn PlanStore) -> AutosaveStatus {
        if !self.enabled || !editor.is_dirty() {
            self.armed_at = None;
            return AutosaveStatus::Idle;
        }

        let now = editor.clock().now();
        let armed_at = *self.armed_at.get_or_insert(now);
        if now.duration_since(armed_at) < self.quiet_period {
            return AutosaveStatus::Pending;
        }

        self.armed_at = None;
        match editor.save_to_store(store) {
            Ok(()) => {
                tracing::debug!("Autosaved plan {}", editor.meta().id);
                AutosaveStatus::Saved
            }
            Err(e) => {
                tracing::warn!("Autosave failed: {}", e);
                AutosaveStatus::Failed
            }
        }
    }
}

impl Default for AutosaveScheduler {
    fn default() -> Self {
        Self::new(&AutosaveSettings::default())
    }
}
