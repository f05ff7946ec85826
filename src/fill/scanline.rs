//! Span-based scanline fill.
//!
//! Each stack entry is a parent span `x1..=x2` on row `y`, plus the direction
//! `dy` it was reached from. Scanning a row grows runs left and right from
//! the parent range; runs that stick out past the parent also get queued
//! back toward the parent row, which is the only place unexplored pixels can
//! hide. Painted pixels never match the seed color again (the call returns
//! early otherwise), so no visited set is needed.

use super::{FillReport, Tolerance, colors_match};
use crate::error::{CanvasError, CanvasResult};
use crate::profile_scope;
use crate::raster::PixelBuffer;
use crate::types::{Color, PixelPoint, PixelRect};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy)]
struct Span {
    x1: i32,
    x2: i32,
    y: i32,
    dy: i32,
}

struct SpanFiller<'a> {
    buffer: &'a mut PixelBuffer,
    target: Color,
    replacement: Color,
    tolerance: Tolerance,
    width: i32,
    height: i32,
    stack: Vec<Span>,
    painted: usize,
    min: PixelPoint,
    max: PixelPoint,
}

impl<'a> SpanFiller<'a> {
    #[inline]
    fn inside(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.buffer
            .get(PixelPoint::new(x, y))
            .is_some_and(|c| colors_match(self.target, c, self.tolerance))
    }

    #[inline]
    fn paint(&mut self, x: i32, y: i32) {
        self.buffer.row_mut(y as u32)[x as usize] = self.replacement;
        self.painted += 1;
        self.min.x = self.min.x.min(x);
        self.min.y = self.min.y.min(y);
        self.max.x = self.max.x.max(x);
        self.max.y = self.max.y.max(y);
    }

    /// Queue a span; rows outside the buffer are never queued.
    #[inline]
    fn push(&mut self, x1: i32, x2: i32, y: i32, dy: i32) {
        if y < 0 || y >= self.height || x1 > x2 {
            return;
        }
        self.stack.push(Span { x1, x2, y, dy });
    }

    fn run(&mut self, seed: PixelPoint) {
        self.push(seed.x, seed.x, seed.y, 1);
        self.push(seed.x, seed.x, seed.y - 1, -1);

        while let Some(Span { x1, x2, y, dy }) = self.stack.pop() {
            let mut x1 = x1;
            let mut x = x1;

            // grow left past the parent's start
            if self.inside(x, y) {
                while self.inside(x - 1, y) {
                    self.paint(x - 1, y);
                    x -= 1;
                }
                if x < x1 {
                    self.push(x, x1 - 1, y - dy, -dy);
                }
            }

            while x1 <= x2 {
                while self.inside(x1, y) {
                    self.paint(x1, y);
                    x1 += 1;
                }
                if x1 > x {
                    self.push(x, x1 - 1, y + dy, dy);
                }
                // run overshot the parent on the right
                if x1 - 1 > x2 {
                    self.push(x2 + 1, x1 - 1, y - dy, -dy);
                }
                x1 += 1;
                while x1 < x2 && !self.inside(x1, y) {
                    x1 += 1;
                }
                x = x1;
            }
        }
    }
}

/// Repaint the region connected to `seed` with `color`.
///
/// Returns a no-op report when the seed color is already within `tolerance`
/// of `color`. Rejects seeds outside the buffer.
pub fn flood_fill(
    buffer: &mut PixelBuffer,
    seed: PixelPoint,
    color: Color,
    tolerance: Tolerance,
) -> CanvasResult<FillReport> {
    profile_scope!("flood_fill");

    let Some(seed_color) = buffer.get(seed) else {
        return Err(CanvasError::SeedOutOfBounds {
            x: seed.x,
            y: seed.y,
            width: buffer.width(),
            height: buffer.height(),
        });
    };

    if colors_match(seed_color, color, tolerance) {
        trace!(%seed_color, %color, tolerance, "fill color indistinguishable from seed");
        return Ok(FillReport {
            seed_color,
            painted: 0,
            bounds: None,
        });
    }

    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let mut filler = SpanFiller {
        buffer,
        target: seed_color,
        replacement: color,
        tolerance,
        width,
        height,
        stack: Vec::with_capacity(64),
        painted: 0,
        min: seed,
        max: seed,
    };
    filler.run(seed);

    let bounds = (filler.painted > 0).then(|| PixelRect::from_corners(filler.min, filler.max));
    debug!(
        x = seed.x,
        y = seed.y,
        painted = filler.painted,
        "flood fill complete"
    );

    Ok(FillReport {
        seed_color,
        painted: filler.painted,
        bounds,
    })
}
