//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - grid building blocks (`AxisSpec`, `GridPoint`)
//! - the tagged objective result (`Evaluation`) and search outcome (`SearchOutcome`)
//! - per-model run configurations and the exported `SearchReport`

pub mod types;

pub use types::*;
