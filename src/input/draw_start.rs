//! Draw start handling - gesture classification begins here.

use crate::input::context::CanvasContext;
use crate::input::event::PointerEvent;
use crate::input::state::{DrawingGesture, GestureState, PanGesture, PinchWait, TouchClassifier};
use crate::input::touch::{TouchBaseline, TouchGeometry};
use tracing::debug;

impl GestureState {
    /// Pointer down / touch start.
    ///
    /// `start_at_edge` keeps the smoothing filter where it is instead of
    /// snapping it to the touch point, so the stroke starts at the brush edge.
    pub fn handle_draw_start(
        self,
        event: &PointerEvent,
        ctx: &mut CanvasContext,
        start_at_edge: bool,
    ) -> GestureState {
        match self {
            GestureState::Default => default_start(event, ctx, start_at_edge),
            GestureState::Disabled => {
                if ctx.options().disabled {
                    GestureState::Disabled
                } else {
                    default_start(event, ctx, start_at_edge)
                }
            }
            GestureState::Pan(pan) => pan_start(pan, event, ctx),
            GestureState::WaitForPinch(wait) => wait_start(wait, event, ctx),
            GestureState::ScaleOrPan(_) => scale_or_pan_start(event, ctx),
            state @ (GestureState::TouchPan(_) | GestureState::TouchScale(_)) => state,
            GestureState::Drawing(drawing) => drawing_start(drawing, event, ctx, start_at_edge),
        }
    }
}

fn default_start(event: &PointerEvent, ctx: &mut CanvasContext, start_at_edge: bool) -> GestureState {
    if ctx.options().disabled {
        return GestureState::Disabled;
    }
    if ctx.options().pan_and_zoom && event.modifiers.pan_zoom() {
        return pan_start(PanGesture::new(ctx.coords.view()), event, ctx);
    }
    wait_start(PinchWait::new(start_at_edge), event, ctx)
}

pub(super) fn pan_start(mut pan: PanGesture, event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
    pan.origin = Some(event.position);
    pan.start_view = ctx.coords.view();
    GestureState::Pan(pan)
}

fn wait_start(wait: PinchWait, event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
    if !event.has_touches() || !ctx.options().pan_and_zoom {
        let drawing = DrawingGesture::new(ctx.options());
        return drawing_start(drawing, event, ctx, wait.start_at_edge);
    }
    if event.touch_count() >= 2 {
        return scale_or_pan_start(event, ctx);
    }
    GestureState::WaitForPinch(wait).handle_draw_move(event, ctx)
}

/// Record the two-finger baseline. Falls back to `Default` without two touches.
pub(super) fn scale_or_pan_start(event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
    let Some(start) = TouchGeometry::from_touches(&event.touches) else {
        debug!(touches = event.touch_count(), "two-finger gesture without two touches");
        return GestureState::Default;
    };
    GestureState::ScaleOrPan(TouchClassifier {
        baseline: Some(TouchBaseline {
            start,
            view: ctx.coords.view(),
        }),
    })
}

fn drawing_start(
    mut drawing: DrawingGesture,
    event: &PointerEvent,
    ctx: &mut CanvasContext,
    start_at_edge: bool,
) -> GestureState {
    let point = ctx.view_point(event.position);
    drawing.begin_at(point, event.has_touches() && !start_at_edge, ctx);
    GestureState::Drawing(drawing)
}
