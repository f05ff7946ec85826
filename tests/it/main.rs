//! Single test binary entry point.
//!
//! Structure:
//! - helpers: canvas builder and event constructors
//! - integration: multi-component flows (gestures driving fills and views)
//! - unit: single-component tests

mod integration;
