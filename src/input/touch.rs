//! Two-finger touch geometry shared by the pinch/pan states.

use crate::types::ClientPoint;
use crate::viewport::ViewState;

/// Centroid and spread of the first two touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchGeometry {
    pub centroid: ClientPoint,
    pub distance: f32,
}

impl TouchGeometry {
    /// `None` with fewer than two touches.
    pub fn from_touches(touches: &[ClientPoint]) -> Option<Self> {
        let [a, b, ..] = touches else {
            return None;
        };
        Some(Self {
            centroid: a.midpoint(*b),
            distance: a.distance(*b),
        })
    }
}

/// Snapshot taken when a two-finger gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchBaseline {
    pub start: TouchGeometry,
    /// View at gesture start
    pub view: ViewState,
}
