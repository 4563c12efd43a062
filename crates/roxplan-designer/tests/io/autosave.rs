use roxplan_core::{ManualClock, StoreError};
use roxplan_designer::{
    AutosaveScheduler, AutosaveStatus, EditorState, ElementKind, MemoryPlanStore, NewElement,
    PlanRecord, PlanStore, PlanSummary, StoreResult,
};
use roxplan_settings::{AutosaveSettings, Config};
use std::sync::Arc;

fn editor(clock: &ManualClock) -> EditorState {
    EditorState::with_clock(Config::default(), Arc::new(clock.clone()))
}

fn touch(editor: &mut EditorState) {
    editor
        .add_element(NewElement::new(ElementKind::Marker))
        .unwrap();
}

/// A store whose disk is always full.
struct BrokenStore;

impl PlanStore for BrokenStore {
    fn list(&self) -> StoreResult<Vec<PlanSummary>> {
        Ok(Vec::new())
    }

    fn get(&self, id: &str) -> StoreResult<PlanRecord> {
        Err(StoreError::NotFound(id.to_string()))
    }

    fn create(&mut self, _name: &str) -> StoreResult<PlanRecord> {
        Err(StoreError::Corrupted("read-only".into()))
    }

    fn put(&mut self, _record: PlanRecord) -> StoreResult<PlanRecord> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }

    fn duplicate(&mut self, id: &str) -> StoreResult<PlanRecord> {
        Err(StoreError::NotFound(id.to_string()))
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        Err(StoreError::NotFound(id.to_string()))
    }
}

#[test]
fn test_clean_plan_is_idle() {
    let clock = ManualClock::new();
    let mut editor = editor(&clock);
    let mut store = MemoryPlanStore::new();
    let mut autosave = AutosaveScheduler::default();

    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Idle);
    assert!(!autosave.is_armed());
}

#[test]
fn test_saves_after_quiet_period() {
    let clock = ManualClock::new();
    let mut editor = editor(&clock);
    let mut store = MemoryPlanStore::new();
    let mut autosave = AutosaveScheduler::default();

    touch(&mut editor);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Pending);
    clock.advance_ms(1999);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Pending);
    clock.advance_ms(1);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Saved);

    assert!(!editor.is_dirty());
    assert_eq!(store.get(&editor.meta().id).unwrap().elements.len(), 1);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Idle);
}

#[test]
fn test_later_edits_do_not_delay_save() {
    let clock = ManualClock::new();
    let mut editor = editor(&clock);
    let mut store = MemoryPlanStore::new();
    let mut autosave = AutosaveScheduler::default();

    touch(&mut editor);
    autosave.poll(&mut editor, &mut store);
    clock.advance_ms(1500);
    touch(&mut editor);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Pending);
    clock.advance_ms(500);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Saved);
    assert_eq!(store.get(&editor.meta().id).unwrap().elements.len(), 2);
}

#[test]
fn test_disabled_never_saves() {
    let clock = ManualClock::new();
    let mut editor = editor(&clock);
    let mut store = MemoryPlanStore::new();
    let mut autosave = AutosaveScheduler::new(&AutosaveSettings {
        enabled: false,
        quiet_period_ms: 10,
    });

    touch(&mut editor);
    clock.advance_ms(10_000);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Idle);
    assert!(store.is_empty());
    assert!(editor.is_dirty());
}

#[test]
fn test_failed_save_keeps_plan_dirty() {
    let clock = ManualClock::new();
    let mut editor = editor(&clock);
    let mut store = BrokenStore;
    let mut autosave = AutosaveScheduler::default();

    touch(&mut editor);
    autosave.poll(&mut editor, &mut store);
    clock.advance_ms(2000);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Failed);
    assert!(editor.is_dirty());
    assert!(!editor.is_saving());
    assert!(editor.last_saved_at().is_none());

    // Re-armed on the next poll
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Pending);
    assert!(autosave.is_armed());
}

#[test]
fn test_cancel_disarms() {
    let clock = ManualClock::new();
    let mut editor = editor(&clock);
    let mut store = MemoryPlanStore::new();
    let mut autosave = AutosaveScheduler::default();

    touch(&mut editor);
    autosave.poll(&mut editor, &mut store);
    assert!(autosave.is_armed());
    clock.advance_ms(1500);
    autosave.cancel();
    assert!(!autosave.is_armed());

    // The quiet period restarts from the next poll
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Pending);
    clock.advance_ms(1999);
    assert_eq!(autosave.poll(&mut editor, &mut store), AutosaveStatus::Pending);
}
