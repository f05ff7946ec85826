//! Freehand strokes.
//!
//! A stroke is built while a draw gesture is active and frozen when it ends.
//! Consecutive duplicate points are dropped, so a gesture that never moved
//! holds a single point and is discarded on finalize.

use crate::constants::MIN_STROKE_POINTS;
use crate::types::{Color, ViewPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<ViewPoint>,
    pub color: Color,
    pub radius: f32,
}

impl Stroke {
    pub fn new(color: Color, radius: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            radius,
        }
    }

    /// Append a brush position. Returns `false` when it repeats the last point.
    pub fn push(&mut self, point: ViewPoint) -> bool {
        if self.points.last() == Some(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_point(&self) -> Option<ViewPoint> {
        self.points.last().copied()
    }

    /// Freeze the stroke. `None` when it is too short to draw.
    pub fn finalize(self) -> Option<Stroke> {
        (self.points.len() >= MIN_STROKE_POINTS).then_some(self)
    }
}
