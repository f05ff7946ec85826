//! Inkboard - the input and raster core of a pan/zoom drawing surface.
//!
//! - `viewport` maps between client (screen) space and document space
//! - `input` classifies pointer, touch and wheel input into pan, pinch-zoom
//!   and drawing gestures
//! - `fill` is the paint-bucket flood fill over a `raster::PixelBuffer`
//! - `canvas::DrawingCanvas` ties them together for a host event loop

pub mod brush;
pub mod canvas;
pub mod constants;
pub mod error;
pub mod fill;
pub mod input;
pub mod logging;
pub mod perf;
pub mod raster;
pub mod settings;
pub mod settings_watcher;
pub mod stroke;
pub mod types;
pub mod viewport;

pub use canvas::DrawingCanvas;
pub use error::{CanvasError, CanvasResult};
pub use fill::{FillReport, flood_fill};
pub use input::{CanvasContext, CanvasEvent, DrawOptions, GestureConfig, GestureState};
pub use raster::PixelBuffer;
pub use types::{ClientPoint, Color, PixelPoint, PixelRect, Tool, ViewPoint};
pub use viewport::{CoordinateSystem, ViewState};
