//! Newton-Raphson maximum likelihood for the bivariate logit model.
//!
//! Used to cross-check grid estimates against the continuous optimum. For the
//! logit model the Newton step is exactly one weighted least squares solve
//! (IRLS):
//!
//! ```text
//! p_i = σ(β0 + β1 x_i)
//! w_i = p_i (1 - p_i)
//! z_i = β0 + β1 x_i + (y_i - p_i) / w_i
//! β'  = argmin Σ w_i (z_i - β0 - β1 x_i)^2
//! ```

use nalgebra::{DMatrix, DVector};

use crate::error::AppError;
use crate::math::ols::solve_weighted_least_squares;
use crate::math::stable::{log_one_minus_sigmoid, log_sigmoid, sigmoid};

/// Floor for IRLS weights so fitted probabilities of exactly 0/1 stay solvable.
const MIN_WEIGHT: f64 = 1e-10;

#[derive(Debug, Clone, Copy)]
pub struct NewtonOptions {
    pub max_iter: usize,
    /// Convergence threshold on the largest coefficient change.
    pub tol: f64,
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-10,
        }
    }
}

/// Converged Newton-Raphson fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogitFit {
    pub beta_0: f64,
    pub beta_1: f64,
    pub log_likelihood: f64,
    pub iterations: usize,
}

/// Fit `P(y=1|x) = σ(β0 + β1 x)` by Newton-Raphson.
///
/// Errors with exit code 2 on malformed input and 4 when the iteration fails
/// to converge (e.g. perfectly separated data, where the MLE does not exist).
pub fn fit_logit_newton(y: &[f64], x: &[f64], opts: &NewtonOptions) -> Result<LogitFit, AppError> {
    if y.len() != x.len() {
        return Err(AppError::invalid(format!(
            "Label and regressor lengths differ: {} vs {}.",
            y.len(),
            x.len()
        )));
    }
    if y.is_empty() {
        return Err(AppError::new(3, "No observations to fit."));
    }
    if y.iter().any(|&v| v != 0.0 && v != 1.0) {
        return Err(AppError::invalid("Labels must be 0 or 1."));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(AppError::invalid("Regressors must be finite."));
    }

    if is_separated(y, x) {
        return Err(AppError::new(
            4,
            "Labels are separated by x: the maximum likelihood estimate does not exist.",
        ));
    }

    let n = y.len();
    let mut design = DMatrix::<f64>::zeros(n, 2);
    for (i, &xi) in x.iter().enumerate() {
        design[(i, 0)] = 1.0;
        design[(i, 1)] = xi;
    }

    let mut beta = [0.0_f64, 0.0_f64];
    let mut z = DVector::<f64>::zeros(n);
    let mut w = vec![0.0; n];

    for iter in 1..=opts.max_iter {
        for i in 0..n {
            let eta = beta[0] + beta[1] * x[i];
            let p = sigmoid(eta);
            let wi = (p * (1.0 - p)).max(MIN_WEIGHT);
            w[i] = wi;
            z[i] = eta + (y[i] - p) / wi;
        }

        let next = solve_weighted_least_squares(&design, &z, &w)
            .ok_or_else(|| AppError::new(4, "Newton step failed: singular weighted design."))?;

        let change = (next[0] - beta[0]).abs().max((next[1] - beta[1]).abs());
        beta = [next[0], next[1]];

        if change < opts.tol {
            return Ok(LogitFit {
                beta_0: beta[0],
                beta_1: beta[1],
                log_likelihood: log_likelihood(y, x, beta[0], beta[1]),
                iterations: iter,
            });
        }
    }

    Err(AppError::new(
        4,
        format!(
            "Newton-Raphson did not converge in {} iterations (separated data?).",
            opts.max_iter
        ),
    ))
}

/// Whether a threshold on `x` splits the labels (complete or quasi-complete
/// separation), including the case of a single label class.
fn is_separated(y: &[f64], x: &[f64]) -> bool {
    let mut min0 = f64::INFINITY;
    let mut max0 = f64::NEG_INFINITY;
    let mut min1 = f64::INFINITY;
    let mut max1 = f64::NEG_INFINITY;
    for (&yi, &xi) in y.iter().zip(x) {
        if yi == 1.0 {
            min1 = min1.min(xi);
            max1 = max1.max(xi);
        } else {
            min0 = min0.min(xi);
            max0 = max0.max(xi);
        }
    }
    // An empty class leaves its bounds at +/-inf, which reads as separated.
    max0 <= min1 || max1 <= min0
}

fn log_likelihood(y: &[f64], x: &[f64], beta_0: f64, beta_1: f64) -> f64 {
    y.iter()
        .zip(x)
        .map(|(&yi, &xi)| {
            let z = beta_0 + beta_1 * xi;
            if yi == 1.0 { log_sigmoid(z) } else { log_one_minus_sigmoid(z) }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intercept_only_data_recovers_log_odds() {
        // Both groups have 2 of 3 successes, so x carries no information.
        let y = [1.0, 1.0, 0.0, 1.0, 1.0, 0.0];
        let x = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let fit = fit_logit_newton(&y, &x, &NewtonOptions::default()).unwrap();
        assert!((fit.beta_0 - 2.0_f64.ln()).abs() < 1e-8);
        assert!(fit.beta_1.abs() < 1e-8);
    }

    #[test]
    fn group_log_odds_are_recovered() {
        // x=0: 1 of 2 successes -> β0 = 0; x=1: 2 of 3 -> β0+β1 = ln 2.
        let y = [1.0, 0.0, 1.0, 0.0, 1.0];
        let x = [0.0, 0.0, 1.0, 1.0, 1.0];
        let fit = fit_logit_newton(&y, &x, &NewtonOptions::default()).unwrap();
        assert!(fit.beta_0.abs() < 1e-8);
        assert!((fit.beta_1 - 2.0_f64.ln()).abs() < 1e-8);
        assert!(fit.log_likelihood.is_finite());
    }

    #[test]
    fn separated_data_has_no_estimate() {
        let opts = NewtonOptions::default();
        let x = [-2.0, -1.0, 1.0, 2.0];
        let err = fit_logit_newton(&[0.0, 0.0, 1.0, 1.0], &x, &opts).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        let err = fit_logit_newton(&[1.0, 1.0, 1.0, 1.0], &x, &opts).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn rejects_malformed_input() {
        let opts = NewtonOptions::default();
        assert_eq!(fit_logit_newton(&[1.0], &[1.0, 2.0], &opts).unwrap_err().exit_code(), 2);
        assert_eq!(fit_logit_newton(&[], &[], &opts).unwrap_err().exit_code(), 3);
        assert_eq!(fit_logit_newton(&[2.0], &[1.0], &opts).unwrap_err().exit_code(), 2);
    }
}
