//! Objective models searched by the grid maximizer.
//!
//! Models are small, pure functions plus an adapter struct implementing the
//! search traits, so the search code stays generic.

pub mod ces;
pub mod logit;
pub mod production;

pub use ces::*;
pub use logit::*;
pub use production::*;
