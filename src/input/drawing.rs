//! Point-level drawing logic shared by live input and deferred replay.
//!
//! Event handlers convert events to document points and call into here, so
//! a replayed point goes through exactly the same path as a live one.

use crate::constants::TARGET_FRAME_MS;
use crate::fill::flood_fill;
use crate::input::context::{CanvasContext, CanvasEvent};
use crate::input::state::DrawingGesture;
use crate::perf::measure_and_log;
use crate::types::{Tool, ViewPoint};
use tracing::{debug, trace};

impl DrawingGesture {
    /// First point of a gesture. With `pin` set the smoothing filter is snapped
    /// to the point so the brush does not trail in from its old position.
    pub fn begin_at(&mut self, point: ViewPoint, pin: bool, ctx: &mut CanvasContext) {
        if pin {
            ctx.brush_mut().update(point, true);
        }
        self.extend_to(point, ctx);
    }

    /// One move. Either fills at the pointer or grows the stroke.
    pub fn extend_to(&mut self, point: ViewPoint, ctx: &mut CanvasContext) {
        if ctx.options().tool == Tool::Bucket {
            self.fill_at(point, ctx);
            return;
        }

        ctx.brush_mut().update(point, false);
        let brush = ctx.brush().brush_coordinates();
        if self.stroke.push(brush) {
            trace!(x = brush.x, y = brush.y, points = self.stroke.len(), "stroke point");
        }
        ctx.emit(CanvasEvent::RedrawRequested);
    }

    fn fill_at(&self, point: ViewPoint, ctx: &mut CanvasContext) {
        let seed = point.to_pixel();
        let color = ctx.options().brush_color;
        let tolerance = ctx.options().fill_tolerance;
        let buffer = &mut ctx.buffer;
        let result = measure_and_log("paint_bucket", TARGET_FRAME_MS, || {
            flood_fill(buffer, seed, color, tolerance)
        });
        match result {
            Ok(report) if report.is_noop() => {}
            Ok(report) => ctx.emit(CanvasEvent::Filled(report)),
            Err(err) => {
                debug!(%err, "paint bucket rejected");
                ctx.emit(CanvasEvent::FillRejected { seed });
            }
        }
    }

    /// Commit or discard the stroke.
    pub fn finish(self, ctx: &mut CanvasContext) {
        if ctx.options().tool == Tool::Bucket {
            return;
        }
        let points = self.stroke.len();
        match self.stroke.finalize() {
            Some(stroke) => {
                debug!(points, "stroke committed");
                ctx.emit(CanvasEvent::StrokeCommitted(stroke));
            }
            None => {
                debug!(points, "stroke discarded");
                ctx.emit(CanvasEvent::StrokeDiscarded { points });
            }
        }
    }
}
