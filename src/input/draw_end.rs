//! Draw end handling - finalize the gesture and return to the default posture.

use crate::input::context::CanvasContext;
use crate::input::event::PointerEvent;
use crate::input::replay;
use crate::input::state::GestureState;

impl GestureState {
    /// Pointer up / touch end.
    pub fn handle_draw_end(self, event: &PointerEvent, ctx: &mut CanvasContext) -> GestureState {
        match self {
            GestureState::Default | GestureState::Disabled => {
                if ctx.options().disabled {
                    GestureState::Disabled
                } else {
                    GestureState::Default
                }
            }
            GestureState::Pan(_)
            | GestureState::ScaleOrPan(_)
            | GestureState::TouchPan(_)
            | GestureState::TouchScale(_) => GestureState::Default,
            GestureState::WaitForPinch(wait) => {
                // a short tap: draw what was held back, then end it
                let drawing = replay::into_drawing(wait, ctx);
                GestureState::Drawing(drawing).handle_draw_end(event, ctx)
            }
            GestureState::Drawing(mut drawing) => {
                let point = ctx.view_point(event.position);
                drawing.extend_to(point, ctx);
                drawing.finish(ctx);
                GestureState::Default
            }
        }
    }
}
