use roxplan_core::{ManualClock, Point, ValidationError};
use roxplan_designer::{
    EditorState, ElementKind, MutationOutcome, NewElement, NewRoute, RouteDraft, RouteUpdate,
    Selection,
};
use roxplan_settings::Config;
use std::sync::Arc;

fn editor() -> EditorState {
    EditorState::with_clock(Config::default(), Arc::new(ManualClock::new()))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn l_shape() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(300.0, 0.0),
        Point::new(300.0, 100.0),
    ]
}

#[test]
fn test_add_route_selects_and_records() {
    let mut editor = editor();
    let element = editor
        .add_element(NewElement::new(ElementKind::Station))
        .unwrap();
    assert_eq!(editor.selection(), &Selection::Element(element));

    let id = editor.add_route(NewRoute::new(l_shape())).unwrap();
    assert_eq!(editor.selection(), &Selection::Route(id.clone()));
    assert_eq!(editor.history_len(), 2);

    let route = editor.route(&id).unwrap();
    assert_eq!(route.points, l_shape());
    assert_eq!(route.color, "#000000");
    assert_eq!(route.stroke_width, 3.0);
    assert!(route.show_arrows);
    assert_eq!(route.arrow_spacing, 80.0);
}

#[test]
fn test_add_route_rejects_short_paths() {
    let mut editor = editor();
    let err = editor
        .add_route(NewRoute::new(vec![Point::new(5.0, 5.0)]))
        .unwrap_err();
    assert_eq!(err, ValidationError::TooFewPoints { count: 1, min: 2 });
    assert!(editor.routes().is_empty());
    assert_eq!(editor.history_len(), 0);
    assert!(!editor.is_dirty());
}

#[test]
fn test_route_geometry_follows_point_order() {
    let mut editor = editor();
    let id = editor.add_route(NewRoute::new(l_shape())).unwrap();
    let route = editor.route(&id).unwrap();

    assert!(approx(route.length(), 400.0));
    let mid = route.label_anchor().unwrap();
    assert!(approx(mid.point.x, 200.0) && approx(mid.point.y, 0.0));

    let arrows = route.arrow_markers();
    // 80, 160, 240, 320 (turning the corner), never at 400
    assert_eq!(arrows.len(), 4);
    assert!(approx(arrows[0].rotation_degrees, 90.0));
    assert!(approx(arrows[3].point.x, 300.0) && approx(arrows[3].point.y, 20.0));
    assert!(approx(arrows[3].rotation_degrees, 180.0));
}

#[test]
fn test_update_route() {
    let mut editor = editor();
    let id = editor.add_route(NewRoute::new(l_shape())).unwrap();

    let outcome = editor
        .update_route(
            &id,
            [
                RouteUpdate::ShowArrows(false),
                RouteUpdate::Label(Some("Run 1km".into())),
                RouteUpdate::DashPattern(Some(vec![8.0, 4.0])),
            ],
        )
        .unwrap();
    assert_eq!(outcome, MutationOutcome::Applied);

    let route = editor.route(&id).unwrap();
    assert!(route.arrow_markers().is_empty());
    assert_eq!(route.label.as_deref(), Some("Run 1km"));
    assert_eq!(route.dash_pattern, Some(vec![8.0, 4.0]));
}

#[test]
fn test_update_route_rejects_degenerate_points() {
    let mut editor = editor();
    let id = editor.add_route(NewRoute::new(l_shape())).unwrap();
    let len = editor.history_len();

    assert!(editor
        .update_route(&id, [RouteUpdate::Points(vec![Point::new(0.0, 0.0)])])
        .is_err());
    assert!(editor
        .update_route(&id, [RouteUpdate::ArrowSpacing(-10.0)])
        .is_err());
    assert_eq!(editor.route(&id).unwrap().points.len(), 3);
    assert_eq!(editor.history_len(), len);

    assert_eq!(
        editor
            .update_route("missing", [RouteUpdate::ShowArrows(true)])
            .unwrap(),
        MutationOutcome::NotFound
    );
}

#[test]
fn test_remove_route() {
    let mut editor = editor();
    let id = editor.add_route(NewRoute::new(l_shape())).unwrap();
    assert_eq!(editor.remove_route(&id), MutationOutcome::Applied);
    assert!(editor.routes().is_empty());
    assert_eq!(editor.selection(), &Selection::None);
    assert_eq!(editor.remove_route(&id), MutationOutcome::NotFound);

    editor.undo();
    assert_eq!(editor.routes().len(), 1);
}

#[test]
fn test_route_draft_to_route() {
    let mut editor = editor();
    let mut draft = RouteDraft::from_settings(editor.editing_settings());

    draft.push(Point::new(0.0, 0.0));
    assert!(draft.finish().is_none());

    draft.push(Point::new(0.0, 0.0));
    draft.push(Point::new(0.0, 50.0));
    let route = draft.finish().unwrap();
    let id = editor.add_route(route).unwrap();
    assert!(approx(editor.route(&id).unwrap().length(), 50.0));
}
