//! Axis generation.
//!
//! Each axis is a half-open range `[min, max)` walked with a fixed step.
//! Values are computed as `min + i * step` rather than by repeated addition,
//! so rounding error does not accumulate along the axis and round values such
//! as `-2.0 + 20 * 0.1` land exactly on `0.0`.

use crate::domain::AxisSpec;

impl AxisSpec {
    /// Number of candidate values on this axis.
    ///
    /// `ceil((max - min) / step)` for a well-formed spec, `0` otherwise.
    ///
    /// The quotient can round just above a whole number (e.g. `0.3 / 0.1`), so
    /// the count is trimmed until the last value is strictly below `max`.
    pub fn len(&self) -> usize {
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && self.step.is_finite()
            && self.step > 0.0
            && self.max > self.min;
        if !valid {
            return 0;
        }

        let n = ((self.max - self.min) / self.step).ceil();
        if !(n.is_finite() && n > 0.0) {
            return 0;
        }

        let mut n = n as usize;
        while n > 0 && self.value_at(n - 1) >= self.max {
            n -= 1;
        }
        n
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th candidate value. Callers keep `i < self.len()`.
    pub fn value_at(&self, i: usize) -> f64 {
        self.min + self.step * i as f64
    }

    /// All candidate values in ascending order.
    pub fn values(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.value_at(i)).collect()
    }
}

/// Candidate values for `[min, max)` with the given step.
pub fn axis_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    AxisSpec::new(min, max, step).values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_upper_bound() {
        let v = axis_values(0.0, 1.0, 0.25);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn partial_last_step_is_included() {
        let v = axis_values(0.0, 1.0, 0.3);
        assert_eq!(v.len(), 4);
        assert!(v[3] < 1.0);
    }

    #[test]
    fn degenerate_specs_are_empty() {
        assert!(axis_values(0.0, 1.0, 0.0).is_empty());
        assert!(axis_values(0.0, 1.0, -0.1).is_empty());
        assert!(axis_values(1.0, 1.0, 0.1).is_empty());
        assert!(axis_values(2.0, 1.0, 0.1).is_empty());
        assert!(axis_values(f64::NAN, 1.0, 0.1).is_empty());
        assert!(axis_values(0.0, f64::INFINITY, 0.1).is_empty());
    }

    #[test]
    fn tenth_steps_hit_zero_exactly() {
        let spec = AxisSpec::new(-2.0, 2.0, 0.1);
        assert_eq!(spec.len(), 40);
        assert_eq!(spec.value_at(20), 0.0);
        assert!(spec.value_at(39) < 2.0);
    }

    #[test]
    fn inexact_upper_bound_stays_exclusive() {
        // 0.3 / 0.1 rounds to 3.0000000000000004.
        let v = axis_values(1.0, 1.3, 0.1);
        assert_eq!(v.len(), 3);
        assert!(*v.last().unwrap() < 1.3);

        let v = axis_values(0.0, 1.1, 0.1);
        assert_eq!(v.len(), 11);
        assert!((v[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn every_value_is_below_max() {
        let cases = [
            (1.0, 1.3, 0.1),
            (0.0, 1.1, 0.1),
            (0.0, 0.7, 0.1),
            (-2.0, 2.0, 0.1),
            (0.0, 2.0, 0.01),
            (0.0, 100.0 / 3.0, 1.0),
            (0.1, 0.9, 0.2),
            (-1.0, 1.0, 0.05),
        ];
        for (min, max, step) in cases {
            let spec = AxisSpec::new(min, max, step);
            let values = spec.values();
            assert!(!values.is_empty(), "[{min}, {max}) step {step}");
            assert!(values.iter().all(|&v| v < max), "[{min}, {max}) step {step}");
            // Nothing was dropped: the next value reaches max.
            assert!(spec.value_at(values.len()) >= max - step * 1e-9, "[{min}, {max}) step {step}");
        }
    }
}
