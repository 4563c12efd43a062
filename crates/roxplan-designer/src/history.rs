//! Undo/redo history of document snapshots.
//!
//! Two stacks hold full copies of the element and route collections. A
//! snapshot is taken *before* a mutation is applied, so popping the undo
//! stack yields the state to restore.
//!
//! Continuous edits (drags, sliders, typing) go through a [`DebounceGate`]:
//! the first edit of a burst records a snapshot and opens a suppression
//! window; further continuous edits inside the window are folded into that
//! entry, whichever element or route they touch.

use std::time::{Duration, Instant};

use crate::model::{Element, ElementId, Route, RouteId};

/// Default number of snapshots kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// Default suppression window for continuous edits.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Deep copy of the document collections at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub elements: Vec<Element>,
    pub routes: Vec<Route>,
    pub taken_at: Instant,
}

impl Snapshot {
    pub fn capture(elements: &[Element], routes: &[Route], taken_at: Instant) -> Self {
        Self {
            elements: elements.to_vec(),
            routes: routes.to_vec(),
            taken_at,
        }
    }
}

/// The entity a continuous edit is aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditTarget {
    Element(ElementId),
    Route(RouteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Idle,
    /// `target` is the edit that opened the burst.
    Suppressing { target: EditTarget, until: Instant },
}

/// Decides whether a continuous edit opens a new history entry.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    window: Duration,
    state: GateState,
}

impl DebounceGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: GateState::Idle,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Returns `true` when the edit starts a new burst and must be recorded.
    ///
    /// One window is shared by all targets. It runs from the first edit of
    /// the burst and is not extended by the edits it suppresses.
    pub fn admit(&mut self, target: &EditTarget, now: Instant) -> bool {
        if let GateState::Suppressing { until, .. } = &self.state {
            if now < *until {
                return false;
            }
        }
        self.state = GateState::Suppressing {
            target: target.clone(),
            until: now + self.window,
        };
        true
    }

    /// Back to idle. Safe to call any number of times.
    pub fn reset(&mut self) {
        self.state = GateState::Idle;
    }
}

/// Bounded linear undo/redo history.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    capacity: usize,
    gate: DebounceGate,
}

impl History {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_CAPACITY, DEFAULT_DEBOUNCE)
    }

    pub fn with_settings(capacity: usize, debounce: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: Vec::with_capacity(capacity),
            redo_stack: Vec::new(),
            capacity,
            gate: DebounceGate::new(debounce),
        }
    }

    /// Record a pre-mutation snapshot for a discrete operation.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.gate.reset();
        self.push_undo(snapshot);
    }

    /// Record a pre-mutation snapshot for a continuous edit, unless the edit
    /// belongs to a burst that already has one. `snapshot` is only called
    /// when an entry is recorded.
    pub fn record_debounced(
        &mut self,
        target: &EditTarget,
        now: Instant,
        snapshot: impl FnOnce() -> Snapshot,
    ) -> bool {
        if self.gate.admit(target, now) {
            self.push_undo(snapshot());
            true
        } else {
            tracing::trace!("Edit on {:?} folded into the current history entry", target);
            false
        }
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        // A new mutation drops the redo branch
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.remove(0);
        }
    }

    /// Pops the state to restore. `current` is kept for redo.
    pub fn undo(&mut self, current: impl FnOnce() -> Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current());
        self.gate.reset();
        Some(previous)
    }

    /// Pops the state to re-apply. `current` is kept for undo.
    pub fn redo(&mut self, current: impl FnOnce() -> Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current());
        self.gate.reset();
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Total entries, undoable and redoable.
    pub fn len(&self) -> usize {
        self.undo_stack.len() + self.redo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor of the most recent undoable entry; `-1` when there is none.
    pub fn index(&self) -> isize {
        self.undo_stack.len() as isize - 1
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Ends any open debounce burst.
    pub fn reset_gate(&mut self) {
        self.gate.reset();
    }

    pub fn gate(&self) -> &DebounceGate {
        &self.gate
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.gate.reset();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
