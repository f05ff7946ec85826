//! Pointer, touch and wheel input handling for the drawing surface.
//!
//! ## Architecture
//!
//! Input is classified by an explicit state machine (`GestureState`). Every
//! handler consumes the current state plus a `CanvasContext` and returns the
//! next state; nothing is hidden outside the state payloads.
//!
//! ## Modules
//!
//! - `state` - Gesture state enum and per-state payloads
//! - `context` - Host context, drawing options and result outbox
//! - `event` - Normalized pointer and wheel events
//! - `touch` - Two-finger geometry
//! - `draw_start` - Pointer down / touch start
//! - `draw_move` - Pointer / touch move (pan, pinch, stroke growth)
//! - `draw_end` - Pointer up / touch end (commit strokes)
//! - `wheel` - Wheel zoom
//! - `drawing` - Point-level stroke and paint-bucket logic
//! - `replay` - Replays points held back while waiting for a pinch

mod context;
mod draw_end;
mod draw_move;
mod draw_start;
mod drawing;
mod event;
mod replay;
mod state;
mod touch;
mod wheel;

pub use context::{CanvasContext, CanvasEvent, DrawOptions, GestureConfig};
pub use event::{PointerEvent, ScrollDelta, WheelEvent, view_point_from_event};
pub use state::{
    DeferredPoint, DrawingGesture, GestureState, PanGesture, PinchWait, TouchClassifier,
};
pub use touch::{TouchBaseline, TouchGeometry};
