//! Paint-bucket flood fill.
//!
//! Repaints the maximal 4-connected region whose pixels match the seed
//! pixel's color within a tolerance. The fill is span based: each row run is
//! painted in one pass and only the rows directly above and below it are
//! queued for scanning.
//!
//! ## Color matching
//!
//! Two colors match when their largest per-channel difference (R, G, B or A)
//! is `<= tolerance`. A tolerance of 0 means exact equality.

mod scanline;

pub use scanline::flood_fill;

use crate::types::{Color, PixelRect};
use serde::Serialize;

/// Tolerance bound for color matching: maximum per-channel difference.
pub type Tolerance = u8;

/// Outcome of a fill call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FillReport {
    /// Color of the seed pixel before the fill
    pub seed_color: Color,
    /// Number of pixels repainted
    pub painted: usize,
    /// Bounding box of the repainted pixels, `None` when nothing changed
    pub bounds: Option<PixelRect>,
}

impl FillReport {
    /// True when the fill left the buffer untouched.
    pub fn is_noop(&self) -> bool {
        self.painted == 0
    }
}

/// Whether `candidate` counts as the same color as `target`.
#[inline]
pub fn colors_match(target: Color, candidate: Color, tolerance: Tolerance) -> bool {
    target.distance(candidate) <= tolerance
}
