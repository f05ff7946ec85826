//! Wheel handling - modifier + wheel zooms around the cursor.

use crate::input::context::CanvasContext;
use crate::input::event::WheelEvent;
use crate::input::state::GestureState;
use tracing::trace;

impl GestureState {
    /// Mouse wheel / trackpad scroll. Swallowed by every active gesture.
    pub fn handle_wheel(self, event: &WheelEvent, ctx: &mut CanvasContext) -> GestureState {
        match self {
            GestureState::Default => default_wheel(event, ctx),
            GestureState::Disabled => {
                if ctx.options().disabled {
                    GestureState::Disabled
                } else {
                    default_wheel(event, ctx)
                }
            }
            active => active,
        }
    }
}

fn default_wheel(event: &WheelEvent, ctx: &mut CanvasContext) -> GestureState {
    if ctx.options().disabled {
        return GestureState::Disabled;
    }
    if ctx.options().pan_and_zoom && event.modifiers.pan_zoom() {
        let delta_scale = -ctx.config.wheel_zoom_factor * event.delta.pixel_y();
        let changed = ctx.coords.scale_at_client_point(delta_scale, event.position);
        trace!(delta_scale, changed, scale = ctx.coords.scale(), "wheel zoom");
    }
    GestureState::Default
}
