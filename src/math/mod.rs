//! Mathematical utilities: stable logistic primitives, weighted least squares,
//! and the Newton-Raphson logit fit built on them.

pub mod newton;
pub mod ols;
pub mod stable;

pub use newton::*;
pub use ols::*;
pub use stable::*;
