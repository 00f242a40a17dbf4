//! `gridmax` library crate.
//!
//! The binary (`gridmax`) is a thin wrapper around this library so that:
//!
//! - search and model logic is testable without spawning processes
//! - the maximizer and objectives are reusable from other Rust code
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
pub mod search;
