//! Objective adapters.
//!
//! The search loops only see these traits. Model code (CES utility, logit
//! log-likelihood, profit) implements them, and plain closures get them for
//! free.

use crate::domain::Evaluation;

/// A scalar objective of two parameters.
///
/// Implementations must be pure: the same inputs always give the same
/// `Evaluation`. Auxiliary data (prices, samples) is borrowed, never mutated.
pub trait Objective2 {
    fn evaluate(&self, p0: f64, p1: f64) -> Evaluation;
}

impl<F> Objective2 for F
where
    F: Fn(f64, f64) -> Evaluation,
{
    fn evaluate(&self, p0: f64, p1: f64) -> Evaluation {
        self(p0, p1)
    }
}

/// A scalar objective of one parameter.
pub trait Objective1 {
    fn evaluate(&self, p: f64) -> Evaluation;
}

impl<F> Objective1 for F
where
    F: Fn(f64) -> Evaluation,
{
    fn evaluate(&self, p: f64) -> Evaluation {
        self(p)
    }
}
