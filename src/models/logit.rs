//! Bivariate logistic regression.
//!
//! `P(y=1 | x) = exp(β0 + β1 x) / (1 + exp(β0 + β1 x))`
//!
//! The grid estimator maximizes the sample log-likelihood
//! `Σ_i ln P(y_i | x_i, β0, β1)` over a rectangle of `(β0, β1)` candidates.
//! Log-probabilities are evaluated with the softplus forms in
//! `math::stable`, so extreme coefficients or regressors never overflow.

use crate::domain::{AxisSpec, Evaluation, SearchOutcome};
use crate::error::AppError;
use crate::math::{log_one_minus_sigmoid, log_sigmoid, sigmoid};
use crate::search::{Objective2, grid_maximize, grid_maximize_par};

/// Paired labels and regressors.
///
/// Labels are kept as `f64` so out-of-domain values can be represented; they
/// make every candidate inadmissible rather than failing construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LogitSample {
    y: Vec<f64>,
    x: Vec<f64>,
}

impl LogitSample {
    /// Pair labels with regressors.
    ///
    /// Errors (exit code 2) when lengths differ or a regressor is not finite,
    /// and (exit code 3) when the sample is empty.
    pub fn new(y: Vec<f64>, x: Vec<f64>) -> Result<Self, AppError> {
        if y.len() != x.len() {
            return Err(AppError::invalid(format!(
                "Label and regressor lengths differ: y has {}, x has {}.",
                y.len(),
                x.len()
            )));
        }
        if y.is_empty() {
            return Err(AppError::new(3, "Logit sample is empty."));
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(AppError::invalid("Regressors must be finite."));
        }
        Ok(Self { y, x })
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Whether every label is 0 or 1.
    pub fn labels_are_binary(&self) -> bool {
        self.y.iter().all(|&v| is_binary(v))
    }
}

fn is_binary(v: f64) -> bool {
    v == 0.0 || v == 1.0
}

/// The logit link `P(y=1 | x)`.
pub fn logit(x: f64, beta_0: f64, beta_1: f64) -> f64 {
    sigmoid(beta_0 + x * beta_1)
}

/// Log-likelihood of one observation; inadmissible for a non-binary label.
pub fn logit_like(y: f64, x: f64, beta_0: f64, beta_1: f64) -> Evaluation {
    let z = beta_0 + x * beta_1;
    if y == 1.0 {
        Evaluation::Admissible(log_sigmoid(z))
    } else if y == 0.0 {
        Evaluation::Admissible(log_one_minus_sigmoid(z))
    } else {
        Evaluation::Inadmissible
    }
}

/// Sample log-likelihood; a single non-binary label makes the whole sum
/// inadmissible.
pub fn logit_like_sum(sample: &LogitSample, beta_0: f64, beta_1: f64) -> Evaluation {
    let mut sum = 0.0;
    for (&yi, &xi) in sample.y.iter().zip(&sample.x) {
        match logit_like(yi, xi, beta_0, beta_1) {
            Evaluation::Admissible(v) => sum += v,
            Evaluation::Inadmissible => return Evaluation::Inadmissible,
        }
    }
    Evaluation::Admissible(sum)
}

/// Coefficient index for score computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    Intercept,
    Slope,
}

impl Coefficient {
    /// `∂(β0 + β1 x)/∂β_k`.
    fn design(self, x: f64) -> f64 {
        match self {
            Coefficient::Intercept => 1.0,
            Coefficient::Slope => x,
        }
    }
}

/// Score of one observation: `∂ ln L_i / ∂β_k = d_k(x) (y - P(y=1|x))`.
///
/// `None` for a non-binary label.
pub fn logit_score(y: f64, x: f64, k: Coefficient, beta_0: f64, beta_1: f64) -> Option<f64> {
    if !is_binary(y) {
        return None;
    }
    Some(k.design(x) * (y - logit(x, beta_0, beta_1)))
}

/// Gradient of the sample log-likelihood, `[∂/∂β0, ∂/∂β1]`.
pub fn logit_gradient(sample: &LogitSample, beta_0: f64, beta_1: f64) -> Option<[f64; 2]> {
    let mut grad = [0.0, 0.0];
    for (&yi, &xi) in sample.y.iter().zip(&sample.x) {
        grad[0] += logit_score(yi, xi, Coefficient::Intercept, beta_0, beta_1)?;
        grad[1] += logit_score(yi, xi, Coefficient::Slope, beta_0, beta_1)?;
    }
    Some(grad)
}

/// Sample log-likelihood as a search objective over `(β0, β1)`.
#[derive(Debug, Clone, Copy)]
pub struct LogitObjective<'a> {
    pub sample: &'a LogitSample,
}

impl<'a> LogitObjective<'a> {
    pub fn new(sample: &'a LogitSample) -> Self {
        Self { sample }
    }
}

impl Objective2 for LogitObjective<'_> {
    fn evaluate(&self, beta_0: f64, beta_1: f64) -> Evaluation {
        logit_like_sum(self.sample, beta_0, beta_1)
    }
}

/// Grid estimate of `(β0, β1)` over `[b0_min, b0_max) × [b1_min, b1_max)`.
///
/// Returns `None` when no candidate is admissible (empty grid or non-binary
/// labels).
pub fn max_logit(
    sample: &LogitSample,
    beta_0_min: f64,
    beta_0_max: f64,
    beta_1_min: f64,
    beta_1_max: f64,
    step: f64,
) -> Option<[f64; 2]> {
    let axis_b0 = AxisSpec::new(beta_0_min, beta_0_max, step);
    let axis_b1 = AxisSpec::new(beta_1_min, beta_1_max, step);
    search_logit(sample, &axis_b0, &axis_b1, false)
        .point()
        .map(|p| p.to_array())
}

/// Full search outcome for reporting, optionally on the rayon pool.
pub fn search_logit(sample: &LogitSample, axis_b0: &AxisSpec, axis_b1: &AxisSpec, parallel: bool) -> SearchOutcome {
    let objective = LogitObjective::new(sample);
    if parallel {
        grid_maximize_par(axis_b0, axis_b1, &objective)
    } else {
        grid_maximize(axis_b0, axis_b1, &objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn sample(y: &[f64], x: &[f64]) -> LogitSample {
        LogitSample::new(y.to_vec(), x.to_vec()).unwrap()
    }

    #[test]
    fn link_known_values() {
        assert_eq!(logit(13.7, 0.0, 0.0), 0.5);
        assert!(close(logit(0.0, 2.0_f64.ln(), 2.0), 2.0 / 3.0, 1e-15));
        assert!(close(logit(1.0, 0.0, 5.0_f64.ln()), 5.0 / 6.0, 1e-15));
    }

    #[test]
    fn single_observation_likelihood() {
        let v = logit_like(1.0, 13.7, 0.0, 0.0).value().unwrap();
        assert!(close(v, -0.6931471805599453, 1e-15));
        let v = logit_like(0.0, 0.0, 2.0_f64.ln(), 2.0).value().unwrap();
        assert!(close(v, -1.0986122886681096, 1e-14));
        let v = logit_like(1.0, 1.0, 0.0, 5.0_f64.ln()).value().unwrap();
        assert!(close(v, -0.1823215567939547, 1e-14));
        assert_eq!(logit_like(2.0, 1.0, 0.0, 0.0), Evaluation::Inadmissible);
    }

    #[test]
    fn sample_likelihood_sums() {
        let s = sample(&[1.0, 1.0, 1.0], &[13.7, 12.0, 437.0]);
        let v = logit_like_sum(&s, 0.0, 0.0).value().unwrap();
        assert!(close(v, -2.0794415416798357, 1e-14));

        let s = sample(&[1.0, 0.0], &[1.0, 1.0]);
        let v = logit_like_sum(&s, 0.0, 2.0_f64.ln()).value().unwrap();
        assert!(close(v, -1.504077396776274, 1e-14));

        let s = sample(&[1.0, 0.0], &[2.0, 3.0]);
        let v = logit_like_sum(&s, 5.0_f64.ln(), 2.0_f64.ln()).value().unwrap();
        assert!(close(v, -3.762362230873739, 1e-13));
    }

    #[test]
    fn non_binary_label_poisons_the_sum() {
        let s = sample(&[1.0, 0.5, 0.0], &[1.0, 2.0, 3.0]);
        assert!(!s.labels_are_binary());
        assert_eq!(logit_like_sum(&s, 0.0, 0.0), Evaluation::Inadmissible);
        assert_eq!(max_logit(&s, -1.0, 1.0, -1.0, 1.0, 0.5), None);
    }

    #[test]
    fn sample_construction_fails_fast() {
        assert_eq!(LogitSample::new(vec![1.0], vec![1.0, 2.0]).unwrap_err().exit_code(), 2);
        assert_eq!(LogitSample::new(vec![], vec![]).unwrap_err().exit_code(), 3);
        assert!(LogitSample::new(vec![1.0], vec![f64::NAN]).is_err());
    }

    #[test]
    fn extreme_coefficients_do_not_overflow() {
        let s = sample(&[1.0, 0.0], &[1000.0, 1000.0]);
        let v = logit_like_sum(&s, 5.0, 10.0);
        let v = v.value().expect("finite log-likelihood");
        // The y=0 observation contributes about -(5 + 10*1000).
        assert!(close(v, -10005.0, 1e-6), "got {v}");
    }

    #[test]
    fn score_known_values() {
        use Coefficient::*;
        assert_eq!(logit_score(1.0, 0.0, Intercept, 0.0, 0.0), Some(0.5));
        assert!(close(logit_score(0.0, 15.0_f64.ln(), Intercept, 0.0, 16.0).unwrap(), -1.0, 1e-12));
        let v = logit_score(1.0, 2.0, Intercept, 11.0_f64.ln(), 3.0_f64.ln()).unwrap();
        assert!(close(v, 0.01, 1e-12));
        let v = logit_score(0.0, 2.0, Slope, 11.0_f64.ln(), 3.0_f64.ln()).unwrap();
        assert!(close(v, -1.98, 1e-12));
        assert_eq!(logit_score(23.275, 1.0, Intercept, 3.0, 4.0), None);
    }

    #[test]
    fn symmetric_sample_estimates_zero_exactly() {
        let s = sample(&[1.0, 1.0, 0.0, 0.0], &[15.0, 5.0, 15.0, 5.0]);
        assert_eq!(max_logit(&s, -2.0, 2.0, -2.0, 2.0, 0.10), Some([0.0, 0.0]));
    }

    #[test]
    fn grid_estimates_match_group_log_odds() {
        let s = sample(&[1.0, 0.0, 1.0], &[15.0, 10.0, 5.0]);
        let [b0, b1] = max_logit(&s, -1.0, 1.0, -1.0, 1.0, 0.01).unwrap();
        assert!(close(b0, 0.69, 1e-9) && close(b1, 0.0, 1e-12), "got ({b0}, {b1})");

        let s = sample(&[1.0, 0.0, 1.0, 0.0, 1.0], &[0.0, 0.0, 1.0, 1.0, 1.0]);
        let [b0, b1] = max_logit(&s, -1.0, 1.0, -1.0, 1.0, 0.01).unwrap();
        assert!(close(b0, 0.0, 1e-12) && close(b1, 0.69, 1e-9), "got ({b0}, {b1})");
    }

    #[test]
    fn gradient_vanishes_at_the_mle() {
        let s = sample(&[1.0, 0.0, 1.0, 0.0, 1.0], &[0.0, 0.0, 1.0, 1.0, 1.0]);
        let [g0, g1] = logit_gradient(&s, 0.0, 2.0_f64.ln()).unwrap();
        assert!(g0.abs() < 1e-12 && g1.abs() < 1e-12);
    }

    #[test]
    fn parallel_search_agrees() {
        let s = sample(&[1.0, 0.0, 1.0, 1.0, 0.0], &[0.5, 1.5, 2.0, 3.0, 2.5]);
        let ax = AxisSpec::new(-2.0, 2.0, 0.05);
        assert_eq!(search_logit(&s, &ax, &ax, false), search_logit(&s, &ax, &ax, true));
    }
}
