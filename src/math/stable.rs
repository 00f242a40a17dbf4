//! Numerically stable logistic primitives.
//!
//! The logit link is `σ(z) = exp(z) / (1 + exp(z))`. Evaluated literally it
//! overflows for `z ≳ 710` and loses all precision in `1 - σ(z)` for large `z`.
//! We work with the log-probabilities instead:
//!
//! - `ln σ(z)     = -softplus(-z)`
//! - `ln (1-σ(z)) = -softplus(z)`
//!
//! where `softplus(z) = ln(1 + exp(z)) = max(z, 0) + ln_1p(exp(-|z|))` never
//! exponentiates a positive argument.

/// `ln(1 + exp(z))` without overflow.
pub fn softplus(z: f64) -> f64 {
    z.max(0.0) + (-z.abs()).exp().ln_1p()
}

/// The logistic function `exp(z) / (1 + exp(z))`.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// `ln σ(z)`.
pub fn log_sigmoid(z: f64) -> f64 {
    -softplus(-z)
}

/// `ln (1 - σ(z))`.
pub fn log_one_minus_sigmoid(z: f64) -> f64 {
    -softplus(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_known_values() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0_f64.ln()) - 2.0 / 3.0).abs() < 1e-15);
        assert!((sigmoid(-(3.0_f64.ln())) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn log_probabilities_match_naive_form_in_safe_range() {
        for &z in &[-20.0_f64, -3.0, -0.5, 0.0, 0.7, 4.0, 25.0] {
            let p = z.exp() / (1.0 + z.exp());
            assert!((log_sigmoid(z) - p.ln()).abs() < 1e-12, "z={z}");
            // The naive complement cancels badly for large z.
            if z.abs() <= 5.0 {
                assert!((log_one_minus_sigmoid(z) - (1.0 - p).ln()).abs() < 1e-9, "z={z}");
            }
        }
    }

    #[test]
    fn extreme_arguments_stay_finite() {
        for &z in &[-1e6_f64, -800.0, 800.0, 1e6] {
            assert!(sigmoid(z).is_finite());
            assert!(log_sigmoid(z).is_finite());
            assert!(log_one_minus_sigmoid(z).is_finite());
        }
        assert!((log_one_minus_sigmoid(800.0) + 800.0).abs() < 1e-9);
        assert!((log_sigmoid(-800.0) + 800.0).abs() < 1e-9);
    }
}
