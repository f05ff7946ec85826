//! Integration tests for inkboard.
//!
//! These drive the canvas with event sequences and check what reaches the
//! raster, the view and the host outbox.

mod gesture_flow_tests;
