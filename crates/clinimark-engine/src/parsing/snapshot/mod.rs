//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders parsed blocks as a stable text outline for
//!   `insta` snapshot testing
//! - **`invariants`**: runtime checks for segmenter correctness (no empty or
//!   adjacent list groups, no empty fragments, no more nodes than lines)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
