//! Synthetic logistic samples with a known data-generating process.
//!
//! Regressors are drawn from `N(x_mean, x_sd^2)` and labels from
//! `Bernoulli(σ(β0 + β1 x))`. The generator is seeded, so the same settings
//! always give the same sample.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Bernoulli, Normal};

use crate::error::AppError;
use crate::models::{LogitSample, logit};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticLogit {
    pub n: usize,
    pub seed: u64,
    pub beta_0: f64,
    pub beta_1: f64,
    pub x_mean: f64,
    pub x_sd: f64,
}

impl SyntheticLogit {
    pub fn new(n: usize, seed: u64, beta_0: f64, beta_1: f64) -> Self {
        Self {
            n,
            seed,
            beta_0,
            beta_1,
            x_mean: 0.0,
            x_sd: 1.0,
        }
    }
}

pub fn generate_logit_sample(spec: &SyntheticLogit) -> Result<LogitSample, AppError> {
    if spec.n == 0 {
        return Err(AppError::invalid("Sample size must be > 0."));
    }
    if !(spec.beta_0.is_finite() && spec.beta_1.is_finite()) {
        return Err(AppError::invalid("True coefficients must be finite."));
    }
    if !(spec.x_mean.is_finite() && spec.x_sd.is_finite() && spec.x_sd > 0.0) {
        return Err(AppError::invalid(format!(
            "Regressor mean must be finite and standard deviation finite and > 0, got mean={} sd={}.",
            spec.x_mean, spec.x_sd
        )));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let normal = Normal::new(spec.x_mean, spec.x_sd)
        .map_err(|e| AppError::invalid(format!("Regressor distribution error: {e}")))?;

    let mut y = Vec::with_capacity(spec.n);
    let mut x = Vec::with_capacity(spec.n);
    for _ in 0..spec.n {
        let xi = normal.sample(&mut rng);
        let p = logit(xi, spec.beta_0, spec.beta_1);
        let label = Bernoulli::new(p)
            .map_err(|e| AppError::new(4, format!("Label distribution error: {e}")))?
            .sample(&mut rng);
        x.push(xi);
        y.push(if label { 1.0 } else { 0.0 });
    }

    LogitSample::new(y, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AxisSpec;
    use crate::math::{NewtonOptions, fit_logit_newton};
    use crate::models::search_logit;

    #[test]
    fn same_seed_same_sample() {
        let spec = SyntheticLogit::new(50, 7, 0.3, -0.8);
        let a = generate_logit_sample(&spec).unwrap();
        let b = generate_logit_sample(&spec).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.labels_are_binary());
    }

    #[test]
    fn rejects_bad_settings() {
        assert!(generate_logit_sample(&SyntheticLogit::new(0, 1, 0.0, 0.0)).is_err());
        assert!(generate_logit_sample(&SyntheticLogit::new(10, 1, f64::NAN, 0.0)).is_err());

        for (x_mean, x_sd) in [(0.0, -1.0), (0.0, 0.0), (0.0, f64::NAN), (f64::INFINITY, 1.0)] {
            let spec = SyntheticLogit {
                x_mean,
                x_sd,
                ..SyntheticLogit::new(10, 1, 0.0, 0.0)
            };
            let err = generate_logit_sample(&spec).unwrap_err();
            assert_eq!(err.exit_code(), 2, "mean={x_mean} sd={x_sd}");
        }
    }

    #[test]
    fn regressor_location_and_scale_are_honored() {
        let spec = SyntheticLogit {
            x_mean: 5.0,
            x_sd: 0.5,
            ..SyntheticLogit::new(2000, 3, 0.0, 0.0)
        };
        let sample = generate_logit_sample(&spec).unwrap();
        let mean = sample.x().iter().sum::<f64>() / sample.len() as f64;
        assert!((mean - 5.0).abs() < 0.1, "mean={mean}");
        assert!(sample.x().iter().all(|&v| (v - 5.0).abs() < 5.0));
    }

    #[test]
    fn grid_estimate_agrees_with_newton_mle() {
        let sample = generate_logit_sample(&SyntheticLogit::new(400, 11, -0.5, 0.8)).unwrap();
        let step = 0.05;
        let axis = AxisSpec::new(-2.0, 2.0, step);

        let grid = search_logit(&sample, &axis, &axis, true).point().unwrap();
        let mle = fit_logit_newton(sample.y(), sample.x(), &NewtonOptions::default()).unwrap();

        assert!((grid.p0 - mle.beta_0).abs() <= step, "b0 grid={} mle={}", grid.p0, mle.beta_0);
        assert!((grid.p1 - mle.beta_1).abs() <= step, "b1 grid={} mle={}", grid.p1, mle.beta_1);
    }
}
