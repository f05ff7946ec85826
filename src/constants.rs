//! Crate-wide constants.
//!
//! Centralizes gesture tie-breaks, zoom extents and drawing defaults so the
//! state machine, viewport and settings layer agree on the same numbers.

use crate::types::Color;

// ============================================================================
// Gesture Classification
// ============================================================================

/// Manhattan distance (client units) a pointer must travel before an
/// ambiguous touch is classified.
pub const SLOP_THRESHOLD: f32 = 10.0;

/// How long a single touch may wait for a second finger before drawing starts.
pub const PINCH_TIMEOUT_MS: u64 = 250;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum scale factor
pub const MIN_SCALE: f32 = 0.33;

/// Maximum scale factor
pub const MAX_SCALE: f32 = 3.0;

/// Default scale factor
pub const DEFAULT_SCALE: f32 = 1.0;

/// Scale change per pixel of wheel delta
pub const WHEEL_ZOOM_FACTOR: f32 = 0.01;

/// Pixels represented by one line of a line-based wheel delta
pub const LINE_DELTA_PIXELS: f32 = 20.0;

// ============================================================================
// Brush & Fill Defaults
// ============================================================================

/// Default brush color
pub const DEFAULT_BRUSH_COLOR: Color = Color::from_rgba(0x44, 0x44, 0x44, 0xff);

/// Default brush radius in document units
pub const DEFAULT_BRUSH_RADIUS: f32 = 10.0;

/// Default flood fill tolerance (exact match)
pub const DEFAULT_FILL_TOLERANCE: u8 = 0;

/// Strokes with fewer points than this are discarded on finalize
pub const MIN_STROKE_POINTS: usize = 2;

// ============================================================================
// Frame Budget
// ============================================================================

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;
