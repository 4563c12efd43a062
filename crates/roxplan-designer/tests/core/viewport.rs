use roxplan_core::Point;
use roxplan_designer::Viewport;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_zoom_is_clamped() {
    let mut vp = Viewport::new();
    assert_eq!(vp.zoom(), 1.0);

    vp.set_zoom(10.0);
    assert_eq!(vp.zoom(), 5.0);
    vp.set_zoom(0.01);
    assert_eq!(vp.zoom(), 0.1);
    vp.set_zoom(f64::NAN);
    assert_eq!(vp.zoom(), 0.1);
}

#[test]
fn test_screen_canvas_conversion() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.0);
    vp.set_pan(100.0, 50.0);

    let canvas = vp.screen_to_canvas(Point::new(300.0, 250.0));
    assert!(approx(canvas.x, 100.0));
    assert!(approx(canvas.y, 100.0));

    let screen = vp.canvas_to_screen(canvas);
    assert!(approx(screen.x, 300.0));
    assert!(approx(screen.y, 250.0));
}

#[test]
fn test_zoom_at_keeps_pointer_anchor() {
    let mut vp = Viewport::new();
    vp.set_pan(-40.0, 25.0);
    let pointer = Point::new(420.0, 310.0);
    let anchor = vp.screen_to_canvas(pointer);

    vp.zoom_at(pointer, true);
    assert!(approx(vp.zoom(), 1.08));
    let after = vp.screen_to_canvas(pointer);
    assert!(approx(after.x, anchor.x));
    assert!(approx(after.y, anchor.y));

    vp.zoom_at(pointer, false);
    assert!(approx(vp.zoom(), 1.0));
}

#[test]
fn test_zoom_at_clamped_keeps_anchor() {
    let mut vp = Viewport::new();
    vp.set_zoom(5.0);
    let pointer = Point::new(100.0, 100.0);
    let anchor = vp.screen_to_canvas(pointer);

    vp.zoom_at(pointer, true);
    assert_eq!(vp.zoom(), 5.0);
    let after = vp.screen_to_canvas(pointer);
    assert!(approx(after.x, anchor.x));
    assert!(approx(after.y, anchor.y));
}

#[test]
fn test_pan_and_reset() {
    let mut vp = Viewport::new();
    vp.pan_by(10.0, -5.0);
    vp.pan_by(1.0, 1.0);
    assert_eq!((vp.pan_x(), vp.pan_y()), (11.0, -4.0));

    vp.set_zoom(3.0);
    vp.reset();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!((vp.pan_x(), vp.pan_y()), (0.0, 0.0));
}
