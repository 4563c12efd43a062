use roxplan_core::{ManualClock, StoreError};
use roxplan_designer::{
    EditorState, ElementKind, JsonFilePlanStore, MemoryPlanStore, NewElement, PlanRecord,
    PlanStore,
};
use roxplan_settings::Config;
use std::sync::Arc;

fn exercise_store(store: &mut dyn PlanStore) {
    let first = store.create("First").unwrap();
    let second = store.create("").unwrap();
    assert_eq!(second.name, "Untitled");

    // Newest first
    let ids: Vec<String> = store.list().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![second.id.clone(), first.id.clone()]);

    let copy = store.duplicate(&first.id).unwrap();
    assert_ne!(copy.id, first.id);
    assert_eq!(copy.name, "First (copy)");
    assert_eq!(store.list().unwrap()[0].id, copy.id);

    let mut edited = store.get(&first.id).unwrap();
    edited.name = "First, edited".to_string();
    edited.created_at = chrono::Utc::now() + chrono::Duration::days(30);
    let stored = store.put(edited).unwrap();
    assert_eq!(stored.created_at, first.created_at);
    assert!(stored.updated_at >= first.updated_at);
    assert_eq!(store.get(&first.id).unwrap().name, "First, edited");
    assert_eq!(store.list().unwrap().len(), 3);

    store.delete(&second.id).unwrap();
    assert!(matches!(store.get(&second.id), Err(StoreError::NotFound(_))));
    assert!(matches!(store.delete(&second.id), Err(StoreError::NotFound(_))));
    assert!(matches!(store.duplicate("nope"), Err(StoreError::NotFound(_))));
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn test_memory_store() {
    let mut store = MemoryPlanStore::new();
    assert!(store.is_empty());
    exercise_store(&mut store);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_json_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("plans.json");
    let mut store = JsonFilePlanStore::new(&path);
    assert!(store.list().unwrap().is_empty());

    exercise_store(&mut store);

    // A second handle on the same file sees the same plans
    let reopened = JsonFilePlanStore::new(&path);
    assert_eq!(reopened.list().unwrap().len(), 2);
}

#[test]
fn test_put_unknown_plan_goes_first() {
    let mut store = MemoryPlanStore::new();
    store.create("Existing").unwrap();
    let fresh = PlanRecord::new_blank("Fresh");
    store.put(fresh.clone()).unwrap();
    assert_eq!(store.list().unwrap()[0].id, fresh.id);
}

#[test]
fn test_json_file_store_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plans.json");
    let plan = PlanRecord::new_blank("Twice");
    std::fs::write(&path, serde_json::to_string(&vec![plan.clone(), plan]).unwrap()).unwrap();

    let store = JsonFilePlanStore::new(&path);
    assert!(matches!(store.list(), Err(StoreError::Corrupted(_))));
}

#[test]
fn test_json_file_store_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plans.json");
    std::fs::write(&path, "[{").unwrap();
    let store = JsonFilePlanStore::new(&path);
    assert!(matches!(store.list(), Err(StoreError::Json(_))));
}

#[test]
fn test_editor_save_and_open() {
    let mut store = MemoryPlanStore::new();
    let created = store.create("Course").unwrap();

    let mut editor = EditorState::with_clock(Config::default(), Arc::new(ManualClock::new()));
    editor.open_from_store(&store, &created.id).unwrap();
    editor
        .add_element(NewElement::new(ElementKind::Station).at(40.0, 40.0))
        .unwrap();
    assert!(editor.is_dirty());

    editor.save_to_store(&mut store).unwrap();
    assert!(!editor.is_dirty());
    assert!(!editor.is_saving());
    assert!(editor.last_saved_at().is_some());

    let saved = store.get(&created.id).unwrap();
    assert_eq!(saved.elements.len(), 1);
    assert_eq!(saved.created_at, created.created_at);

    let mut other = EditorState::new();
    assert!(other.open_from_store(&store, "missing").is_err());
    other.open_from_store(&store, &created.id).unwrap();
    assert_eq!(other.elements(), editor.elements());
}
