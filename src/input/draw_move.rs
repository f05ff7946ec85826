//! Draw move handling - the hot path.
//!
//! Called for every pointer/touch move, so each arm does the minimum work:
//! one coordinate conversion and at most one view update or stroke append.

use crate::input::context::CanvasContext;
use crate::input::draw_start::{pan_start, scale_or_pan_start};
use crate::input::event::PointerEvent;
use crate::input::replay;
use crate::input::state::{DeferredPoint, GestureState, PanGesture, PinchWait, TouchClassifier};
use crate::input::touch::{TouchBaseline, TouchGeometry};
use crate::viewport::ViewState;
use tracing::{debug, trace};

impl GestureState {
    /// Pointer / touch move.
    pub fn handle_draw_move(self, event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
        match self {
            GestureState::Default => default_move(event, ctx),
            GestureState::Disabled => {
                if ctx.options().disabled {
                    GestureState::Disabled
                } else {
                    default_move(event, ctx)
                }
            }
            GestureState::Pan(pan) => pan_move(pan, event, ctx),
            GestureState::WaitForPinch(wait) => wait_move(wait, event, ctx),
            GestureState::ScaleOrPan(classifier) => classify_move(classifier, event, ctx),
            GestureState::TouchPan(baseline) => touch_pan_move(baseline, event, ctx),
            GestureState::TouchScale(baseline) => touch_scale_move(baseline, event, ctx),
            GestureState::Drawing(mut drawing) => {
                let point = ctx.view_point(event.position);
                drawing.extend_to(point, ctx);
                GestureState::Drawing(drawing)
            }
        }
    }
}

fn default_move(event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
    if ctx.options().disabled {
        return GestureState::Disabled;
    }
    let point = ctx.view_point(event.position);
    ctx.brush_mut().update(point, false);
    GestureState::Default
}

fn pan_move(pan: PanGesture, event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
    let Some(origin) = pan.origin else {
        return pan_start(pan, event, ctx);
    };
    let view = pan.start_view;
    ctx.coords.set_view(ViewState {
        x: view.x + (event.position.x - origin.x),
        y: view.y + (event.position.y - origin.y),
        scale: view.scale,
    });
    GestureState::Pan(pan)
}

fn wait_move(mut wait: PinchWait, event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
    if event.touch_count() >= 2 && ctx.options().pan_and_zoom {
        debug!(dropped = wait.deferred.len(), "second touch, switching to pinch classification");
        return scale_or_pan_start(event, ctx);
    }

    let started = *wait.started_at.get_or_insert(event.timestamp);
    wait.deferred.push(DeferredPoint {
        client: event.position,
        point: ctx.view_point(event.position),
        touch: event.has_touches(),
    });

    let first = wait.deferred[0].client;
    let travelled = event.position.manhattan_distance(first);
    let elapsed = event.timestamp.saturating_sub(started);

    if elapsed < ctx.config.pinch_timeout && travelled < ctx.config.slop_threshold {
        return GestureState::WaitForPinch(wait);
    }

    trace!(
        elapsed_ms = elapsed.as_millis() as u64,
        travelled,
        points = wait.deferred.len(),
        "pinch wait over, replaying"
    );
    GestureState::Drawing(replay::into_drawing(wait, ctx))
}

fn classify_move(
    classifier: TouchClassifier,
    event: &PointerEvent,
    ctx: &mut CanvasContext,
) -> GestureState {
    let Some(current) = TouchGeometry::from_touches(&event.touches) else {
        return GestureState::Default;
    };
    let Some(baseline) = classifier.baseline else {
        return scale_or_pan_start(event, ctx);
    };

    let slop = ctx.config.slop_threshold;
    if (current.distance - baseline.start.distance).abs() >= slop {
        debug!("classified as pinch zoom");
        return touch_scale_move(baseline, event, ctx);
    }
    if current.centroid.manhattan_distance(baseline.start.centroid) >= slop {
        debug!("classified as two-finger pan");
        return touch_pan_move(baseline, event, ctx);
    }
    GestureState::ScaleOrPan(classifier)
}

fn touch_pan_move(baseline: TouchBaseline, event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
    let Some(current) = TouchGeometry::from_touches(&event.touches) else {
        return GestureState::Default;
    };
    let start = baseline.start.centroid;
    ctx.coords.set_view(ViewState {
        x: baseline.view.x + (current.centroid.x - start.x),
        y: baseline.view.y + (current.centroid.y - start.y),
        scale: baseline.view.scale,
    });
    GestureState::TouchPan(baseline)
}

fn touch_scale_move(baseline: TouchBaseline, event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
    let Some(current) = TouchGeometry::from_touches(&event.touches) else {
        return GestureState::Default;
    };
    if baseline.start.distance <= 0.0 {
        return GestureState::TouchScale(baseline);
    }

    let scale = baseline.view.scale * (current.distance / baseline.start.distance);
    // document point that sat under the fingers when the pinch began
    let anchor = ctx.coords.view_point_under(baseline.start.centroid, baseline.view);
    let view = ctx.coords.view_anchored_at(anchor, current.centroid, scale);
    ctx.coords.set_view(view);
    GestureState::TouchScale(baseline)
}
