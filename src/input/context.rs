//! Host context threaded through every gesture transition.
//!
//! Bundles what the transitions read and mutate: the coordinate system, the
//! raster, the smoothing filter, the host's live drawing options and the
//! outbox of results the host drains after each event.

use crate::brush::BrushSmoother;
use crate::constants::{
    DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_RADIUS, DEFAULT_FILL_TOLERANCE, PINCH_TIMEOUT_MS, SLOP_THRESHOLD,
    WHEEL_ZOOM_FACTOR,
};
use crate::fill::{FillReport, Tolerance};
use crate::raster::PixelBuffer;
use crate::stroke::Stroke;
use crate::types::{ClientPoint, Color, PixelPoint, Tool, ViewPoint};
use crate::viewport::CoordinateSystem;
use std::fmt;
use std::time::Duration;

/// Host-controlled flags and brush parameters, read live on every event.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOptions {
    /// Ignore drawing input entirely
    pub disabled: bool,
    /// Allow modifier-drag panning, wheel zoom and two-finger gestures
    pub pan_and_zoom: bool,
    pub tool: Tool,
    pub brush_color: Color,
    pub brush_radius: f32,
    pub fill_tolerance: Tolerance,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            pan_and_zoom: false,
            tool: Tool::Brush,
            brush_color: DEFAULT_BRUSH_COLOR,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            fill_tolerance: DEFAULT_FILL_TOLERANCE,
        }
    }
}

/// Classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Manhattan distance in client units
    pub slop_threshold: f32,
    pub pinch_timeout: Duration,
    /// Scale change per pixel of wheel delta
    pub wheel_zoom_factor: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            slop_threshold: SLOP_THRESHOLD,
            pinch_timeout: Duration::from_millis(PINCH_TIMEOUT_MS),
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
        }
    }
}

/// Results reported to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A finished stroke to fold into the host's history
    StrokeCommitted(Stroke),
    /// A draw gesture ended with too few points to keep
    StrokeDiscarded { points: usize },
    /// The raster was repainted by the paint bucket
    Filled(FillReport),
    /// The paint bucket was aimed outside the raster
    FillRejected { seed: PixelPoint },
    /// The in-progress stroke layer changed
    RedrawRequested,
}

pub struct CanvasContext {
    pub coords: CoordinateSystem,
    pub buffer: PixelBuffer,
    pub config: GestureConfig,
    options: DrawOptions,
    brush: Box<dyn BrushSmoother>,
    events: Vec<CanvasEvent>,
}

impl fmt::Debug for CanvasContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasContext")
            .field("coords", &self.coords)
            .field("buffer", &self.buffer)
            .field("config", &self.config)
            .field("options", &self.options)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl CanvasContext {
    pub fn new(
        coords: CoordinateSystem,
        buffer: PixelBuffer,
        brush: impl BrushSmoother + 'static,
    ) -> Self {
        let mut ctx = Self {
            coords,
            buffer,
            config: GestureConfig::default(),
            options: DrawOptions::default(),
            brush: Box::new(brush),
            events: Vec::new(),
        };
        ctx.brush.set_radius(ctx.options.brush_radius);
        ctx
    }

    pub fn with_options(mut self, options: DrawOptions) -> Self {
        self.set_options(options);
        self
    }

    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    /// Replace the drawing options; the brush radius is pushed to the
    /// smoothing filter.
    pub fn set_options(&mut self, options: DrawOptions) {
        self.brush.set_radius(options.brush_radius);
        self.options = options;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.options.tool = tool;
    }

    pub fn brush(&self) -> &dyn BrushSmoother {
        self.brush.as_ref()
    }

    pub fn brush_mut(&mut self) -> &mut dyn BrushSmoother {
        self.brush.as_mut()
    }

    #[inline]
    pub fn view_point(&self, client: ClientPoint) -> ViewPoint {
        self.coords.client_point_to_view_point(client)
    }

    pub(crate) fn emit(&mut self, event: CanvasEvent) {
        self.events.push(event);
    }

    /// Pending results, oldest first.
    pub fn events(&self) -> &[CanvasEvent] {
        &self.events
    }

    /// Take all pending results.
    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }
}
