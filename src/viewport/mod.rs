//! Viewport transform - pan/zoom state and coordinate conversion.
//!
//! ## Modules
//!
//! - `affine` - 2D affine transform math
//! - `coords` - `CoordinateSystem`, the owner of the view state

pub mod affine;
mod coords;

pub use affine::AffineTransform;
pub use coords::{CanvasBounds, CoordinateSystem, ListenerId, ScaleExtents, ViewState};
