//! Weighted least squares solver.
//!
//! The Newton-Raphson logistic fit solves one weighted regression per
//! iteration (iteratively reweighted least squares):
//!
//! ```text
//! minimize Σ w_i (z_i - x_i^T β)^2
//! ```
//!
//! Rows are scaled by `sqrt(w_i)` and the resulting ordinary least squares
//! problem is solved by SVD, which also handles tall design matrices (more
//! rows than columns).

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Solve `minimize Σ w_i (y_i - x_i^T β)^2` by row scaling.
///
/// Returns `None` on shape mismatch, non-positive/non-finite weights, or an
/// unsolvable system.
pub fn solve_weighted_least_squares(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    w: &[f64],
) -> Option<DVector<f64>> {
    let n = x.nrows();
    if y.len() != n || w.len() != n {
        return None;
    }
    if w.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return None;
    }

    let mut xw = x.clone();
    let mut yw = y.clone();
    for (i, &wi) in w.iter().enumerate() {
        let sw = wi.sqrt();
        for j in 0..x.ncols() {
            xw[(i, j)] *= sw;
        }
        yw[i] *= sw;
    }

    solve_least_squares(&xw, &yw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn weights_pull_fit_toward_heavy_rows() {
        // Intercept-only fit is the weighted mean.
        let x = DMatrix::from_row_slice(3, 1, &[1.0, 1.0, 1.0]);
        let y = DVector::from_row_slice(&[0.0, 0.0, 6.0]);

        let beta = solve_weighted_least_squares(&x, &y, &[1.0, 1.0, 4.0]).unwrap();
        assert!((beta[0] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn rejects_bad_weights_and_shapes() {
        let x = DMatrix::from_row_slice(2, 1, &[1.0, 1.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0]);
        assert!(solve_weighted_least_squares(&x, &y, &[1.0, 0.0]).is_none());
        assert!(solve_weighted_least_squares(&x, &y, &[1.0]).is_none());
    }
}
