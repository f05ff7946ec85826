//! Gesture state machine - one enum for every interaction posture.
//!
//! Each handler consumes the current state and returns the next one; the
//! host always stores the returned value and uses it for the next event.
//!
//! ## State Transitions
//!
//! ```text
//! Default -> Disabled        (any event while the disabled flag is set)
//! Default -> Pan             (draw start with pan/zoom modifier)
//! Default -> WaitForPinch    (draw start)
//! Disabled -> Default logic  (any event once the flag is cleared)
//!
//! WaitForPinch -> Drawing    (mouse / pan-zoom off, timeout, or slop exceeded)
//! WaitForPinch -> ScaleOrPan (second touch)
//! ScaleOrPan -> TouchScale   (finger spread changed by slop)
//! ScaleOrPan -> TouchPan     (centroid moved by slop)
//!
//! ScaleOrPan | TouchPan | TouchScale -> Default   (fewer than two touches)
//! Any -> Default             (draw end)
//! ```

use crate::input::context::DrawOptions;
use crate::input::touch::TouchBaseline;
use crate::stroke::Stroke;
use crate::types::{ClientPoint, ViewPoint};
use crate::viewport::ViewState;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// Idle; tracks the pointer for the brush preview
    #[default]
    Default,
    /// Drawing input is switched off by the host
    Disabled,
    /// Modifier-drag panning
    Pan(PanGesture),
    /// Single touch held back while waiting for a possible second finger
    WaitForPinch(PinchWait),
    /// Two fingers down, not yet classified
    ScaleOrPan(TouchClassifier),
    /// Two-finger pan
    TouchPan(TouchBaseline),
    /// Two-finger pinch zoom
    TouchScale(TouchBaseline),
    /// Stroke (or paint bucket) in progress
    Drawing(DrawingGesture),
}

/// Drag origin for modifier panning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// Client position of the pointer when the drag started
    pub origin: Option<ClientPoint>,
    /// View when the drag started
    pub start_view: ViewState,
}

impl PanGesture {
    pub fn new(start_view: ViewState) -> Self {
        Self {
            origin: None,
            start_view,
        }
    }
}

/// A point captured while waiting for a pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeferredPoint {
    pub client: ClientPoint,
    pub point: ViewPoint,
    pub touch: bool,
}

/// Buffered input held in `WaitForPinch`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PinchWait {
    /// Timestamp of the first event handled in this state
    pub started_at: Option<Duration>,
    pub deferred: Vec<DeferredPoint>,
    /// Carried into the replayed draw start
    pub start_at_edge: bool,
}

impl PinchWait {
    pub fn new(start_at_edge: bool) -> Self {
        Self {
            started_at: None,
            deferred: Vec::new(),
            start_at_edge,
        }
    }
}

/// Baseline captured on entering `ScaleOrPan`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchClassifier {
    pub baseline: Option<TouchBaseline>,
}

/// In-progress stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingGesture {
    pub stroke: Stroke,
}

impl DrawingGesture {
    pub fn new(options: &DrawOptions) -> Self {
        Self {
            stroke: Stroke::new(options.brush_color, options.brush_radius),
        }
    }
}

impl GestureState {
    /// Short state name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Disabled => "disabled",
            Self::Pan(_) => "pan",
            Self::WaitForPinch(_) => "wait_for_pinch",
            Self::ScaleOrPan(_) => "scale_or_pan",
            Self::TouchPan(_) => "touch_pan",
            Self::TouchScale(_) => "touch_scale",
            Self::Drawing(_) => "drawing",
        }
    }

    /// Returns true if idle (default or disabled)
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Default | Self::Disabled)
    }

    /// Returns true if the view is being moved or zoomed
    pub fn is_navigating(&self) -> bool {
        matches!(
            self,
            Self::Pan(_) | Self::ScaleOrPan(_) | Self::TouchPan(_) | Self::TouchScale(_)
        )
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }

    /// The stroke being drawn, if any
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Drawing(d) => Some(&d.stroke),
            _ => None,
        }
    }

    /// Points buffered while waiting for a pinch
    pub fn deferred_points(&self) -> &[DeferredPoint] {
        match self {
            Self::WaitForPinch(wait) => &wait.deferred,
            _ => &[],
        }
    }

    /// Baseline of the current two-finger gesture
    pub fn touch_baseline(&self) -> Option<&TouchBaseline> {
        match self {
            Self::ScaleOrPan(c) => c.baseline.as_ref(),
            Self::TouchPan(b) | Self::TouchScale(b) => Some(b),
            _ => None,
        }
    }
}
