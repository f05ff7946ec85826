//! Normalized input events.
//!
//! Hosts translate their platform's mouse/touch/wheel events into these
//! before handing them to the gesture machine.

use crate::constants::LINE_DELTA_PIXELS;
use crate::types::{ClientPoint, Modifiers, ViewPoint};
use crate::viewport::CoordinateSystem;
use std::time::Duration;

/// A pointer (mouse or touch) event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerEvent {
    /// Primary pointer position: the mouse, the first touch, or the touch
    /// that was lifted for an end event.
    pub position: ClientPoint,
    /// Active touch points; empty for mouse input.
    pub touches: Vec<ClientPoint>,
    pub modifiers: Modifiers,
    /// Monotonic host timestamp.
    pub timestamp: Duration,
}

impl PointerEvent {
    pub fn mouse(position: ClientPoint, timestamp: Duration) -> Self {
        Self {
            position,
            touches: Vec::new(),
            modifiers: Modifiers::default(),
            timestamp,
        }
    }

    /// Touch event; the first touch becomes the primary position.
    pub fn touch(touches: impl Into<Vec<ClientPoint>>, timestamp: Duration) -> Self {
        let touches = touches.into();
        Self {
            position: touches.first().copied().unwrap_or_default(),
            touches,
            modifiers: Modifiers::default(),
            timestamp,
        }
    }

    /// Touch end: `lifted` is the finger that went up, `remaining` the ones
    /// still down.
    pub fn touch_end(
        lifted: ClientPoint,
        remaining: impl Into<Vec<ClientPoint>>,
        timestamp: Duration,
    ) -> Self {
        Self {
            position: lifted,
            touches: remaining.into(),
            modifiers: Modifiers::default(),
            timestamp,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[inline]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    #[inline]
    pub fn has_touches(&self) -> bool {
        !self.touches.is_empty()
    }
}

/// Wheel delta, either in pixels or in lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDelta {
    Pixels { x: f32, y: f32 },
    Lines { x: f32, y: f32 },
}

impl ScrollDelta {
    /// Vertical delta in pixels.
    pub fn pixel_y(&self) -> f32 {
        match *self {
            ScrollDelta::Pixels { y, .. } => y,
            ScrollDelta::Lines { y, .. } => y * LINE_DELTA_PIXELS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub position: ClientPoint,
    pub delta: ScrollDelta,
    pub modifiers: Modifiers,
}

/// Document-space position of an event's primary pointer.
#[inline]
pub fn view_point_from_event(coords: &CoordinateSystem, event: &PointerEvent) -> ViewPoint {
    coords.client_point_to_view_point(event.position)
}
