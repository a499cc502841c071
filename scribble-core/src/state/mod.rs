//! # State
//!
//! The document state shared between input, rendering, and export.

pub mod stroke_log;

pub use stroke_log::{Snapshot, StrokeLog, DEFAULT_DIMENSIONS};
