//! Deferred-point replay for the `WaitForPinch` give-up path.
//!
//! Points are replayed at the document-point level: the first as a draw
//! start, the rest as draw moves, in capture order. An empty buffer yields a
//! fresh drawing with nothing in it.

use crate::input::context::CanvasContext;
use crate::input::state::{DrawingGesture, PinchWait};
use crate::profile_function;

pub(crate) fn into_drawing(wait: PinchWait, ctx: &mut CanvasContext) -> DrawingGesture {
    profile_function!();
    let mut drawing = DrawingGesture::new(ctx.options());
    let mut points = wait.deferred.into_iter();

    if let Some(first) = points.next() {
        drawing.begin_at(first.point, first.touch && !wait.start_at_edge, ctx);
    }
    for deferred in points {
        drawing.extend_to(deferred.point, ctx);
    }
    drawing
}
