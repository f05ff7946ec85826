//! Host-facing drawing canvas.
//!
//! Owns the current gesture state and its context. Each event handler swaps
//! the state for the transition result, so a host only has to forward events
//! and drain `CanvasEvent`s afterwards.

use crate::brush::BrushSmoother;
use crate::input::{CanvasContext, CanvasEvent, GestureState, PointerEvent, WheelEvent};
use crate::perf::EventLatencyMonitor;
use crate::profile_scope;
use crate::raster::PixelBuffer;
use crate::settings::CanvasSettings;
use crate::viewport::CoordinateSystem;
use tracing::debug;

#[derive(Debug)]
pub struct DrawingCanvas {
    state: GestureState,
    ctx: CanvasContext,
    latency: EventLatencyMonitor,
}

impl DrawingCanvas {
    pub fn new(ctx: CanvasContext) -> Self {
        let state = if ctx.options().disabled {
            GestureState::Disabled
        } else {
            GestureState::Default
        };
        Self {
            state,
            ctx,
            latency: EventLatencyMonitor::new(),
        }
    }

    pub fn from_settings(
        settings: &CanvasSettings,
        buffer: PixelBuffer,
        brush: impl BrushSmoother + 'static,
    ) -> Self {
        let ctx = CanvasContext::new(CoordinateSystem::new(settings.scale_extents()), buffer, brush)
            .with_options(settings.draw_options())
            .with_config(settings.gesture_config());
        Self::new(ctx)
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn context(&self) -> &CanvasContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut CanvasContext {
        &mut self.ctx
    }

    pub fn latency(&self) -> &EventLatencyMonitor {
        &self.latency
    }

    pub fn draw_start(&mut self, event: &PointerEvent, start_at_edge: bool) {
        self.dispatch("draw_start", |state, ctx| {
            state.handle_draw_start(event, ctx, start_at_edge)
        });
    }

    pub fn draw_move(&mut self, event: &PointerEvent) {
        self.dispatch("draw_move", |state, ctx| state.handle_draw_move(event, ctx));
    }

    pub fn draw_end(&mut self, event: &PointerEvent) {
        self.dispatch("draw_end", |state, ctx| state.handle_draw_end(event, ctx));
    }

    pub fn wheel(&mut self, event: &WheelEvent) {
        self.dispatch("wheel", |state, ctx| state.handle_wheel(event, ctx));
    }

    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        self.ctx.drain_events()
    }

    /// Back to scale 1 with no pan. Does not interrupt the current gesture.
    pub fn reset_view(&mut self) {
        self.ctx.coords.reset_view();
    }

    /// Apply reloaded settings to the live canvas. The host's disabled flag
    /// survives the reload.
    pub fn apply_settings(&mut self, settings: &CanvasSettings) {
        let disabled = self.ctx.options().disabled;
        let mut options = settings.draw_options();
        options.disabled = disabled;
        self.ctx.set_options(options);
        self.ctx.config = settings.gesture_config();
        self.ctx.coords.set_scale_extents(settings.scale_extents());
        debug!("settings applied to canvas");
    }

    fn dispatch(
        &mut self,
        kind: &'static str,
        transition: impl FnOnce(GestureState, &mut CanvasContext) -> GestureState,
    ) {
        profile_scope!(kind);
        self.latency.begin_event(kind);
        let from = self.state.name();
        let state = std::mem::take(&mut self.state);
        self.state = transition(state, &mut self.ctx);
        let to = self.state.name();
        if from != to {
            debug!(event = kind, from, to, "gesture transition");
        }
        self.latency.end_event();
    }
}
