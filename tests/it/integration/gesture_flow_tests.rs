//! Gesture classification flows through `DrawingCanvas`.

use crate::helpers::{
    TestCanvasBuilder, approx, committed_strokes, ctrl, ctrl_mouse, lift, mouse, ms, touch,
    two_touch, wheel,
};
use inkboard::brush::BrushSmoother;
use inkboard::input::{CanvasContext, DrawOptions, PointerEvent};
use inkboard::types::{ClientPoint, Modifiers, ViewPoint};
use inkboard::viewport::{CoordinateSystem, ViewState};
use inkboard::{CanvasEvent, Color, DrawingCanvas, GestureState, PixelBuffer};

/// Moves halfway toward the pointer on each update unless pinned.
struct TrailingBrush {
    position: ViewPoint,
}

impl BrushSmoother for TrailingBrush {
    fn update(&mut self, point: ViewPoint, both: bool) -> bool {
        let before = self.position;
        self.position = if both {
            point
        } else {
            ViewPoint::new(
                (self.position.x + point.x) / 2.0,
                (self.position.y + point.y) / 2.0,
            )
        };
        before != self.position
    }

    fn brush_coordinates(&self) -> ViewPoint {
        self.position
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn set_radius(&mut self, _radius: f32) {}
}

fn trailing_canvas(pan_and_zoom: bool) -> DrawingCanvas {
    let ctx = CanvasContext::new(
        CoordinateSystem::default(),
        PixelBuffer::new(64, 64, Color::WHITE),
        TrailingBrush {
            position: ViewPoint::new(40.0, 40.0),
        },
    )
    .with_options(DrawOptions {
        pan_and_zoom,
        ..DrawOptions::default()
    });
    DrawingCanvas::new(ctx)
}

#[test]
fn test_touch_pins_brush_to_finger() {
    let mut canvas = trailing_canvas(false);
    canvas.draw_start(&touch(0.0, 0.0, 0), false);
    assert_eq!(
        canvas.state().stroke().and_then(|s| s.last_point()),
        Some(ViewPoint::new(0.0, 0.0))
    );
}

#[test]
fn test_start_at_edge_keeps_brush_trailing() {
    let mut canvas = trailing_canvas(false);
    canvas.draw_start(&touch(0.0, 0.0, 0), true);
    assert_eq!(
        canvas.state().stroke().and_then(|s| s.last_point()),
        Some(ViewPoint::new(20.0, 20.0))
    );
}

#[test]
fn test_mouse_never_pins_brush() {
    let mut canvas = trailing_canvas(false);
    canvas.draw_start(&mouse(0.0, 0.0, 0), false);
    assert_eq!(
        canvas.state().stroke().and_then(|s| s.last_point()),
        Some(ViewPoint::new(20.0, 20.0))
    );
}

#[test]
fn test_replayed_touch_matches_live_mouse_stroke() {
    let path = [(2.0, 2.0), (4.0, 3.0), (6.0, 3.0), (9.0, 5.0), (14.0, 6.0)];

    let mut live = TestCanvasBuilder::new().build();
    live.draw_start(&mouse(path[0].0, path[0].1, 0), false);
    for (i, &(x, y)) in path.iter().enumerate().skip(1) {
        live.draw_move(&mouse(x, y, i as u64 * 10));
    }
    live.draw_end(&mouse(14.0, 6.0, 100));

    let mut deferred = TestCanvasBuilder::new().with_pan_and_zoom().build();
    deferred.draw_start(&touch(path[0].0, path[0].1, 0), false);
    for (i, &(x, y)) in path.iter().enumerate().skip(1) {
        deferred.draw_move(&touch(x, y, i as u64 * 10));
    }
    deferred.draw_end(&lift(14.0, 6.0, 100));

    let live_strokes = committed_strokes(&live.drain_events());
    let deferred_strokes = committed_strokes(&deferred.drain_events());
    assert_eq!(live_strokes.len(), 1);
    assert_eq!(live_strokes, deferred_strokes);
}

#[test]
fn test_wait_holds_back_redraws_until_released() {
    let mut canvas = TestCanvasBuilder::new().with_pan_and_zoom().build();
    canvas.draw_start(&touch(0.0, 0.0, 0), false);
    canvas.draw_move(&touch(2.0, 2.0, 50));
    assert!(matches!(canvas.state(), GestureState::WaitForPinch(_)));
    assert!(canvas.context().events().is_empty());

    // 250ms elapsed: give up waiting
    canvas.draw_move(&touch(3.0, 2.0, 250));
    assert!(canvas.state().is_drawing());
    assert_eq!(canvas.state().stroke().map(|s| s.len()), Some(3));
    assert!(canvas
        .drain_events()
        .iter()
        .all(|e| *e == CanvasEvent::RedrawRequested));
}

#[test]
fn test_slop_counts_from_first_point_not_last() {
    let mut canvas = TestCanvasBuilder::new().with_pan_and_zoom().build();
    canvas.draw_start(&touch(0.0, 0.0, 0), false);
    // each step is small, the total is not
    canvas.draw_move(&touch(3.0, 0.0, 5));
    canvas.draw_move(&touch(6.0, 0.0, 10));
    assert!(matches!(canvas.state(), GestureState::WaitForPinch(_)));
    canvas.draw_move(&touch(6.0, 4.0, 15));
    assert!(canvas.state().is_drawing());
}

#[test]
fn test_second_finger_during_wait_starts_pinch() {
    let mut canvas = TestCanvasBuilder::new().with_pan_and_zoom().build();
    canvas.draw_start(&touch(5.0, 5.0, 0), false);
    canvas.draw_start(&two_touch((5.0, 5.0), (25.0, 5.0), 40), false);
    assert!(matches!(canvas.state(), GestureState::ScaleOrPan(_)));

    canvas.draw_move(&two_touch((5.0, 5.0), (45.0, 5.0), 60));
    assert!(matches!(canvas.state(), GestureState::TouchScale(_)));
    assert!(approx(canvas.context().coords.scale(), 2.0));

    canvas.draw_end(&PointerEvent::touch_end(
        ClientPoint::new(45.0, 5.0),
        vec![ClientPoint::new(5.0, 5.0)],
        ms(80),
    ));
    assert_eq!(canvas.state(), &GestureState::Default);
    assert!(committed_strokes(&canvas.drain_events()).is_empty());
}

#[test]
fn test_pinch_keeps_centroid_document_point() {
    let mut canvas = TestCanvasBuilder::new()
        .with_pan_and_zoom()
        .with_view(20.0, -10.0, 1.25)
        .build();
    let start = ((30.0, 40.0), (70.0, 40.0));
    let centroid = ClientPoint::new(50.0, 40.0);
    let anchor = canvas.context().coords.client_point_to_view_point(centroid);

    canvas.draw_start(&two_touch(start.0, start.1, 0), false);
    // spread and drift at once
    canvas.draw_move(&two_touch((20.0, 60.0), (100.0, 60.0), 16));

    let moved_centroid = ClientPoint::new(60.0, 60.0);
    let under = canvas.context().coords.client_point_to_view_point(moved_centroid);
    assert!(matches!(canvas.state(), GestureState::TouchScale(_)));
    assert!(approx(canvas.context().coords.scale(), 2.5));
    assert!(approx(under.x, anchor.x) && approx(under.y, anchor.y));
}

#[test]
fn test_two_finger_pan_then_lift() {
    let mut canvas = TestCanvasBuilder::new().with_pan_and_zoom().build();
    canvas.draw_start(&two_touch((10.0, 10.0), (20.0, 10.0), 0), false);
    canvas.draw_move(&two_touch((10.0, 22.0), (20.0, 22.0), 16));
    assert!(matches!(canvas.state(), GestureState::TouchPan(_)));
    canvas.draw_move(&two_touch((4.0, 30.0), (14.0, 30.0), 32));
    assert_eq!(canvas.context().coords.view(), ViewState::new(-6.0, 20.0, 1.0));

    canvas.draw_move(&touch(4.0, 30.0, 48));
    assert_eq!(canvas.state(), &GestureState::Default);
}

#[test]
fn test_modifier_drag_pans_and_ignores_wheel() {
    let mut canvas = TestCanvasBuilder::new().with_pan_and_zoom().build();
    canvas.draw_start(&ctrl_mouse(50.0, 50.0, 0), false);
    assert!(canvas.state().is_navigating());
    canvas.draw_move(&mouse(20.0, 70.0, 16));
    canvas.wheel(&wheel(20.0, 70.0, -40.0, ctrl()));
    canvas.draw_end(&mouse(20.0, 70.0, 32));

    assert_eq!(canvas.context().coords.view(), ViewState::new(-30.0, 20.0, 1.0));
    assert_eq!(canvas.state(), &GestureState::Default);
    assert!(canvas.drain_events().is_empty());
}

#[test]
fn test_wheel_zoom_around_cursor() {
    let mut canvas = TestCanvasBuilder::new().with_pan_and_zoom().build();
    let cursor = ClientPoint::new(8.0, 12.0);
    let before = canvas.context().coords.client_point_to_view_point(cursor);

    canvas.wheel(&wheel(cursor.x, cursor.y, -25.0, ctrl()));
    assert!(approx(canvas.context().coords.scale(), 1.25));
    let after = canvas.context().coords.client_point_to_view_point(cursor);
    assert!(approx(before.x, after.x) && approx(before.y, after.y));

    // scrolling down zooms out
    canvas.wheel(&wheel(cursor.x, cursor.y, 50.0, ctrl()));
    assert!(approx(canvas.context().coords.scale(), 0.75));

    // no modifier: plain scroll, view untouched
    canvas.wheel(&wheel(cursor.x, cursor.y, 50.0, Modifiers::default()));
    assert!(approx(canvas.context().coords.scale(), 0.75));
}

#[test]
fn test_platform_modifier_also_zooms() {
    let mut canvas = TestCanvasBuilder::new().with_pan_and_zoom().build();
    let meta = Modifiers {
        platform: true,
        ..Modifiers::default()
    };
    canvas.wheel(&wheel(0.0, 0.0, -10.0, meta));
    assert!(approx(canvas.context().coords.scale(), 1.1));
}

#[test]
fn test_disable_takes_effect_at_next_gesture() {
    let mut canvas = TestCanvasBuilder::new().build();
    canvas.draw_start(&mouse(1.0, 1.0, 0), false);
    canvas.context_mut().set_disabled(true);
    canvas.draw_move(&mouse(5.0, 1.0, 10));
    canvas.draw_end(&mouse(9.0, 1.0, 20));
    assert_eq!(committed_strokes(&canvas.drain_events()).len(), 1);

    canvas.draw_start(&mouse(1.0, 1.0, 30), false);
    assert_eq!(canvas.state(), &GestureState::Disabled);
    canvas.draw_move(&mouse(5.0, 5.0, 40));
    canvas.draw_end(&mouse(5.0, 5.0, 50));
    assert_eq!(canvas.state(), &GestureState::Disabled);
    assert!(canvas.drain_events().is_empty());

    canvas.context_mut().set_disabled(false);
    canvas.draw_start(&mouse(1.0, 1.0, 60), false);
    assert!(canvas.state().is_drawing());
}

#[test]
fn test_canvas_built_disabled_starts_disabled() {
    let mut ctx = TestCanvasBuilder::new().build_context();
    ctx.set_disabled(true);
    let canvas = DrawingCanvas::new(ctx);
    assert_eq!(canvas.state(), &GestureState::Disabled);
}
