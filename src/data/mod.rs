//! Sample data for the logit model.

pub mod sample;

pub use sample::*;
