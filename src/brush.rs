//! Pointer smoothing filter interface.
//!
//! The smoothing filter (a "lazy brush" that trails the pointer on a string)
//! lives outside this crate. The gesture machine only feeds it raw document
//! points and reads back where the brush ended up.

use crate::types::ViewPoint;

/// A stateful, single-owner pointer smoothing filter.
pub trait BrushSmoother {
    /// Feed a raw pointer position. With `both` set, the lagged brush and
    /// the leading pointer anchor are both pinned to `point`.
    /// Returns whether the brush moved.
    fn update(&mut self, point: ViewPoint, both: bool) -> bool;

    /// Current (possibly lagged) brush position.
    fn brush_coordinates(&self) -> ViewPoint;

    fn is_enabled(&self) -> bool;

    fn set_radius(&mut self, radius: f32);
}

/// No smoothing: the brush sits exactly on the pointer.
#[derive(Debug, Clone, Default)]
pub struct DirectBrush {
    position: ViewPoint,
    radius: f32,
}

impl DirectBrush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl BrushSmoother for DirectBrush {
    fn update(&mut self, point: ViewPoint, _both: bool) -> bool {
        let moved = self.position != point;
        self.position = point;
        moved
    }

    fn brush_coordinates(&self) -> ViewPoint {
        self.position
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }
}
