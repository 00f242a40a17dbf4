//! Input/output helpers.
//!
//! - search report JSON read/write (`report`)

pub mod report;

pub use report::*;
