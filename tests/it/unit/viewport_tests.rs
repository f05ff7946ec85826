//! Unit tests for the viewport coordinate system.

use crate::helpers::approx;
use inkboard::types::{ClientPoint, ViewPoint};
use inkboard::viewport::{CoordinateSystem, ScaleExtents, ViewState};
use std::cell::RefCell;
use std::rc::Rc;

fn coords_with_view(x: f32, y: f32, scale: f32) -> CoordinateSystem {
    let mut coords = CoordinateSystem::default();
    coords.set_view(ViewState::new(x, y, scale));
    coords
}

#[test]
fn test_round_trip_client_document() {
    let mut coords = coords_with_view(37.0, -12.5, 1.75);
    coords.set_surface(ClientPoint::new(100.0, 40.0), 800.0, 600.0);

    for &(x, y) in &[(0.0, 0.0), (123.4, 56.7), (-40.0, 900.0), (100.0, 40.0)] {
        let client = ClientPoint::new(x, y);
        let doc = coords.client_point_to_view_point(client);
        let back = coords.view_point_to_client_point(doc);
        assert!(approx(back.x, x) && approx(back.y, y), "{client:?} -> {doc:?} -> {back:?}");
    }
}

#[test]
fn test_surface_origin_is_subtracted() {
    let mut coords = coords_with_view(10.0, 20.0, 2.0);
    coords.set_surface(ClientPoint::new(5.0, 5.0), 100.0, 100.0);
    let doc = coords.client_point_to_view_point(ClientPoint::new(35.0, 45.0));
    assert_eq!(doc, ViewPoint::new(10.0, 10.0));
}

#[test]
fn test_zoom_keeps_anchor_fixed() {
    let mut coords = coords_with_view(-30.0, 14.0, 1.2);
    let anchor = ClientPoint::new(210.0, 95.0);
    let before = coords.client_point_to_view_point(anchor);

    assert!(coords.scale_at_client_point(0.9, anchor));
    let after = coords.client_point_to_view_point(anchor);

    assert!(approx(coords.scale(), 2.1));
    assert!(approx(before.x, after.x) && approx(before.y, after.y));
}

#[test]
fn test_zoom_is_clamped_and_reports_no_change() {
    let mut coords = CoordinateSystem::default();
    assert!(coords.scale_at_client_point(100.0, ClientPoint::new(50.0, 50.0)));
    assert_eq!(coords.scale(), 3.0);

    let view = coords.view();
    assert!(!coords.scale_at_client_point(1.0, ClientPoint::new(10.0, 10.0)));
    assert_eq!(coords.view(), view);

    assert!(coords.scale_at_client_point(-100.0, ClientPoint::new(50.0, 50.0)));
    assert!(approx(coords.scale(), 0.33));
}

#[test]
fn test_clamped_zoom_still_keeps_anchor_fixed() {
    let mut coords = coords_with_view(12.0, 8.0, 2.5);
    let anchor = ClientPoint::new(64.0, 32.0);
    let before = coords.client_point_to_view_point(anchor);
    coords.scale_at_client_point(10.0, anchor);
    let after = coords.client_point_to_view_point(anchor);
    assert_eq!(coords.scale(), 3.0);
    assert!(approx(before.x, after.x) && approx(before.y, after.y));
}

#[test]
fn test_set_view_clamps_scale_only() {
    let mut coords = CoordinateSystem::default();
    coords.set_view(ViewState::new(-5000.0, 7000.0, 9.0));
    assert_eq!(coords.view(), ViewState::new(-5000.0, 7000.0, 3.0));
}

#[test]
fn test_reset_view() {
    let mut coords = coords_with_view(4.0, 4.0, 2.0);
    coords.reset_view();
    assert_eq!(coords.view(), ViewState::default());
}

#[test]
fn test_listeners_notified_once_per_mutation() {
    let mut coords = CoordinateSystem::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = coords.subscribe(move |view| sink.borrow_mut().push(*view));

    coords.set_view(ViewState::new(1.0, 2.0, 1.5));
    coords.scale_at_client_point(0.5, ClientPoint::new(0.0, 0.0));
    coords.reset_view();
    coords.set_view(ViewState::new(0.0, 0.0, 1.0));
    // scale unchanged: still one notification
    assert!(!coords.scale_at_client_point(0.0, ClientPoint::new(0.0, 0.0)));

    assert_eq!(seen.borrow().len(), 5);
    assert_eq!(seen.borrow()[0], ViewState::new(1.0, 2.0, 1.5));
    assert_eq!(seen.borrow()[4], ViewState::new(0.0, 0.0, 1.0));

    assert!(coords.unsubscribe(id));
    assert!(!coords.unsubscribe(id));
    coords.reset_view();
    assert_eq!(seen.borrow().len(), 5);
}

#[test]
fn test_multiple_subscribers() {
    let mut coords = CoordinateSystem::default();
    let count = Rc::new(RefCell::new(0));
    for _ in 0..3 {
        let c = Rc::clone(&count);
        coords.subscribe(move |_| *c.borrow_mut() += 1);
    }
    assert_eq!(coords.listener_count(), 3);
    coords.reset_view();
    assert_eq!(*count.borrow(), 3);
}

#[test]
fn test_canvas_bounds_cover_visible_document() {
    let mut coords = coords_with_view(-100.0, -50.0, 2.0);
    coords.set_surface(ClientPoint::new(0.0, 0.0), 400.0, 300.0);
    let bounds = coords.canvas_bounds();
    assert_eq!(bounds.view_min, ViewPoint::new(50.0, 25.0));
    assert_eq!(bounds.view_max, ViewPoint::new(250.0, 175.0));
    assert_eq!((bounds.canvas_width, bounds.canvas_height), (400.0, 300.0));
}

#[test]
fn test_scale_extents_reorder_and_reclamp() {
    let extents = ScaleExtents::new(4.0, 0.5);
    assert_eq!((extents.min, extents.max), (0.5, 4.0));

    let mut coords = coords_with_view(0.0, 0.0, 2.5);
    coords.set_scale_extents(ScaleExtents::new(0.5, 2.0));
    assert_eq!(coords.scale(), 2.0);
}

#[test]
fn test_set_view_round_trip_restores_transform() {
    let v0 = ViewState::new(-12.5, 40.0, 0.75);
    let v1 = ViewState::new(300.0, -8.25, 2.5);
    let mut coords = coords_with_view(v0.x, v0.y, v0.scale);
    let t0 = coords.transform();

    coords.set_view(v1);
    assert_ne!(coords.transform(), t0);
    coords.set_view(v0);
    assert_eq!(coords.transform(), t0);
    assert_eq!(coords.view(), v0);
}

#[test]
fn test_transform_inverse_pair() {
    let coords = coords_with_view(13.0, -7.0, 0.8);
    let composed = coords.transform().compose(&coords.inverse_transform());
    let (x, y) = composed.apply(42.0, -17.0);
    assert!(approx(x, 42.0) && approx(y, -17.0));
}
