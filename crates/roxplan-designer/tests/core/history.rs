use proptest::prelude::*;
use roxplan_core::{ManualClock, Point};
use roxplan_designer::{
    EditorCommand, EditorState, ElementKind, ElementUpdate, NewElement, NewRoute, PlanRecord,
    RouteUpdate, Selection,
};
use roxplan_settings::Config;
use std::sync::Arc;

fn editor() -> (EditorState, ManualClock) {
    let clock = ManualClock::new();
    let editor = EditorState::with_clock(Config::default(), Arc::new(clock.clone()));
    (editor, clock)
}

fn station() -> NewElement {
    NewElement::new(ElementKind::Station).at(10.0, 10.0)
}

#[test]
fn test_undo_redo_inverse() {
    let (mut editor, _) = editor();
    let first = editor.add_element(station()).unwrap();
    let before = (editor.elements().to_vec(), editor.routes().to_vec());

    editor.add_element(station().at(300.0, 10.0)).unwrap();
    let after = (editor.elements().to_vec(), editor.routes().to_vec());

    assert!(editor.undo());
    assert_eq!((editor.elements().to_vec(), editor.routes().to_vec()), before);
    assert!(editor.element(&first).is_some());

    assert!(editor.redo());
    assert_eq!((editor.elements().to_vec(), editor.routes().to_vec()), after);
    assert!(!editor.can_redo());
}

#[test]
fn test_undo_redo_boundaries_are_noops() {
    let (mut editor, _) = editor();
    assert!(!editor.undo());
    assert!(!editor.redo());
    assert_eq!(editor.history_index(), -1);
    assert!(!editor.is_dirty());
}

#[test]
fn test_undo_marks_dirty() {
    let (mut editor, _) = editor();
    editor.add_element(station()).unwrap();
    editor.mark_clean();
    assert!(editor.undo());
    assert!(editor.is_dirty());
}

#[test]
fn test_history_cursor_tracks_undo_and_redo() {
    let (mut editor, _) = editor();
    for _ in 0..3 {
        editor.add_element(station()).unwrap();
    }
    assert_eq!(editor.history_len(), 3);
    assert_eq!(editor.history_index(), 2);

    editor.undo();
    editor.undo();
    assert_eq!(editor.history_len(), 3);
    assert_eq!(editor.history_index(), 0);
    assert_eq!(editor.elements().len(), 1);

    editor.redo();
    assert_eq!(editor.history_index(), 1);
    assert_eq!(editor.elements().len(), 2);
}

#[test]
fn test_new_mutation_discards_redo() {
    let (mut editor, _) = editor();
    editor.add_element(station()).unwrap();
    editor.add_element(station()).unwrap();
    editor.undo();
    assert!(editor.can_redo());

    editor.add_route(NewRoute::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]))
        .unwrap();
    assert!(!editor.can_redo());
    assert!(!editor.redo());
    assert_eq!(editor.history_len(), 2);
}

#[test]
fn test_history_cap() {
    let (mut editor, _) = editor();
    for _ in 0..60 {
        editor.add_element(station()).unwrap();
    }
    assert_eq!(editor.history_len(), 50);

    let mut steps = 0;
    while editor.undo() {
        steps += 1;
    }
    assert_eq!(steps, 50);
    // The oldest surviving snapshot was taken before the 11th add
    assert_eq!(editor.elements().len(), 10);
}

#[test]
fn test_custom_capacity_from_config() {
    let clock = ManualClock::new();
    let mut config = Config::default();
    config.history.capacity = 5;
    let mut editor = EditorState::with_clock(config, Arc::new(clock));
    for _ in 0..8 {
        editor.add_element(station()).unwrap();
    }
    assert_eq!(editor.history_len(), 5);
}

#[test]
fn test_debounce_coalesces_burst() {
    let (mut editor, clock) = editor();
    let id = editor.add_element(station()).unwrap();
    assert_eq!(editor.history_len(), 1);

    for i in 0..5 {
        editor
            .move_element(&id, 10.0 + i as f64, 10.0)
            .unwrap();
        clock.advance_ms(50);
    }
    assert_eq!(editor.history_len(), 2);
    assert_eq!(editor.element(&id).unwrap().x, 14.0);

    // One undo step reverts the whole drag
    editor.undo();
    assert_eq!(editor.element(&id).unwrap().x, 10.0);
}

#[test]
fn test_debounce_spaced_edits_record_each() {
    let (mut editor, clock) = editor();
    let id = editor.add_element(station()).unwrap();

    for i in 0..4 {
        editor
            .update_element(&id, [ElementUpdate::Label(format!("S{i}"))])
            .unwrap();
        clock.advance_ms(300);
    }
    assert_eq!(editor.history_len(), 5);
}

#[test]
fn test_debounce_window_is_not_extended() {
    let (mut editor, clock) = editor();
    let id = editor.add_element(station()).unwrap();

    editor.move_element(&id, 11.0, 10.0).unwrap();
    clock.advance_ms(250);
    editor.move_element(&id, 12.0, 10.0).unwrap();
    clock.advance_ms(100);
    // 350 ms after the burst started: a new entry even though the last edit
    // was only 100 ms ago
    editor.move_element(&id, 13.0, 10.0).unwrap();
    assert_eq!(editor.history_len(), 3);
}

#[test]
fn test_debounce_burst_spans_targets() {
    let (mut editor, clock) = editor();
    let a = editor.add_element(station()).unwrap();
    let route = editor
        .add_route(NewRoute::new(vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)]))
        .unwrap();

    editor.move_element(&a, 1.0, 1.0).unwrap();
    clock.advance_ms(50);
    editor
        .update_route(&route, [RouteUpdate::ShowArrows(false)])
        .unwrap();
    clock.advance_ms(50);
    editor.move_element(&a, 2.0, 2.0).unwrap();
    assert_eq!(editor.history_len(), 3);

    // One undo step reverts the whole interleaved burst
    assert!(editor.undo());
    assert_eq!(editor.element(&a).unwrap().x, 10.0);
    assert!(editor.route(&route).unwrap().show_arrows);

    clock.advance_ms(300);
    editor.move_element(&a, 3.0, 3.0).unwrap();
    clock.advance_ms(300);
    editor
        .update_route(&route, [RouteUpdate::ShowArrows(false)])
        .unwrap();
    assert_eq!(editor.history_len(), 4);
}

#[test]
fn test_immediate_mutation_ends_burst() {
    let (mut editor, _) = editor();
    let a = editor.add_element(station()).unwrap();
    editor.move_element(&a, 1.0, 1.0).unwrap();
    editor.add_element(station()).unwrap();
    editor.move_element(&a, 2.0, 2.0).unwrap();
    assert_eq!(editor.history_len(), 4);
}

#[test]
fn test_cancel_pending_edit_ends_burst() {
    let (mut editor, _) = editor();
    let a = editor.add_element(station()).unwrap();
    editor.move_element(&a, 1.0, 1.0).unwrap();
    editor.cancel_pending_edit();
    editor.cancel_pending_edit();
    editor.move_element(&a, 2.0, 2.0).unwrap();
    assert_eq!(editor.history_len(), 3);
}

#[test]
fn test_undo_drops_stale_selection() {
    let (mut editor, _) = editor();
    let id = editor.add_element(station()).unwrap();
    assert_eq!(editor.selection(), &Selection::Element(id));

    editor.undo();
    assert_eq!(editor.selection(), &Selection::None);
}

#[test]
fn test_snapshots_do_not_alias_live_state() {
    let (mut editor, clock) = editor();
    let id = editor.add_element(station()).unwrap();
    clock.advance_ms(1000);
    editor
        .update_element(&id, [ElementUpdate::Label("changed".into())])
        .unwrap();
    clock.advance_ms(1000);
    editor
        .update_element(&id, [ElementUpdate::Label("changed again".into())])
        .unwrap();

    editor.undo();
    assert_eq!(editor.element(&id).unwrap().label, "changed");
    editor.undo();
    assert_eq!(editor.element(&id).unwrap().label, "Station");
}

#[test]
fn test_load_plan_resets_history() {
    let (mut editor, _) = editor();
    for _ in 0..4 {
        editor.add_element(station()).unwrap();
    }
    editor.undo();

    editor.load_plan(PlanRecord::new_blank("Loaded"));
    assert_eq!(editor.history_len(), 0);
    assert_eq!(editor.history_index(), -1);
    assert!(!editor.undo());
    assert!(!editor.redo());
    assert!(!editor.is_dirty());
}

#[test]
fn test_keyboard_undo_redo() {
    let (mut editor, _) = editor();
    editor.add_element(station()).unwrap();

    let undo = EditorCommand::from_key("z", true, false).unwrap();
    let redo = EditorCommand::from_key("z", true, true).unwrap();
    assert!(editor.dispatch(undo));
    assert!(editor.elements().is_empty());
    assert!(editor.dispatch(redo));
    assert_eq!(editor.elements().len(), 1);
}

proptest! {
    #[test]
    fn prop_history_never_exceeds_capacity(adds in 0usize..120, undos in 0usize..60) {
        let (mut editor, _) = editor();
        for _ in 0..adds {
            editor.add_element(station()).unwrap();
        }
        for _ in 0..undos {
            editor.undo();
        }
        prop_assert!(editor.history_len() <= 50);
        prop_assert_eq!(editor.history_len(), adds.min(50));
        prop_assert_eq!(editor.history_index(), adds.min(50) as isize - undos.min(adds.min(50)) as isize - 1);
    }
}
