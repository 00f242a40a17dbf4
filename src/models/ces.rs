//! Constant elasticity of substitution (CES) utility over two goods.
//!
//! `U(x, y) = (x^r + y^r)^(1/r)`
//!
//! A bundle is admissible when both quantities are non-negative, `r > 0`, and
//! the bundle is affordable: `p_x x + p_y y <= w`.
//!
//! For `0 < r < 1` the utility is concave and the calculus solution
//! ([`ces_demand`]) is the interior maximum. For `r > 1` the same first-order
//! conditions give a *minimum* along the budget line and the grid search lands
//! on a corner instead (nearly all wealth spent on one good).

use crate::domain::{AxisSpec, Evaluation, SearchOutcome};
use crate::error::AppError;
use crate::search::{Objective2, grid_maximize};

/// Unchecked CES utility.
pub fn ces_utility(x: f64, y: f64, r: f64) -> f64 {
    (x.powf(r) + y.powf(r)).powf(1.0 / r)
}

/// CES utility for valid inputs: `x >= 0`, `y >= 0`, `r > 0`.
pub fn ces_utility_valid(x: f64, y: f64, r: f64) -> Evaluation {
    if x < 0.0 || y < 0.0 || r <= 0.0 || x.is_nan() || y.is_nan() || r.is_nan() {
        return Evaluation::Inadmissible;
    }
    Evaluation::Admissible(ces_utility(x, y, r))
}

/// CES utility of an affordable, valid bundle.
pub fn ces_utility_in_budget(x: f64, y: f64, r: f64, price_x: f64, price_y: f64, wealth: f64) -> Evaluation {
    // Written so a NaN expenditure also fails the check.
    if !(price_x * x + price_y * y <= wealth) {
        return Evaluation::Inadmissible;
    }
    ces_utility_valid(x, y, r)
}

/// Budget-constrained CES utility as a search objective over `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CesObjective {
    pub r: f64,
    pub price_x: f64,
    pub price_y: f64,
    pub wealth: f64,
}

impl Objective2 for CesObjective {
    fn evaluate(&self, x: f64, y: f64) -> Evaluation {
        ces_utility_in_budget(x, y, self.r, self.price_x, self.price_y, self.wealth)
    }
}

/// Utility-maximizing bundle from the first-order conditions.
///
/// ```text
/// x* = p_x^(1/(r-1)) / (p_x^(r/(r-1)) + p_y^(r/(r-1))) * w
/// y* = p_y^(1/(r-1)) / (p_x^(r/(r-1)) + p_y^(r/(r-1))) * w
/// ```
///
/// Requires `r > 0`, `r != 1` (perfect substitutes have no interior solution),
/// positive prices, and non-negative wealth.
pub fn ces_demand(r: f64, price_x: f64, price_y: f64, wealth: f64) -> Result<[f64; 2], AppError> {
    if !(r.is_finite() && r > 0.0) {
        return Err(AppError::invalid(format!("CES elasticity r must be positive, got {r}.")));
    }
    if r == 1.0 {
        return Err(AppError::invalid("CES demand is undefined for r = 1 (perfect substitutes)."));
    }
    if !(price_x.is_finite() && price_y.is_finite() && price_x > 0.0 && price_y > 0.0) {
        return Err(AppError::invalid("Prices must be finite and positive."));
    }
    if !(wealth.is_finite() && wealth >= 0.0) {
        return Err(AppError::invalid("Wealth must be finite and non-negative."));
    }

    let x_num = price_x.powf(1.0 / (r - 1.0));
    let y_num = price_y.powf(1.0 / (r - 1.0));
    let denom = price_x.powf(r / (r - 1.0)) + price_y.powf(r / (r - 1.0));

    Ok([x_num / denom * wealth, y_num / denom * wealth])
}

/// Grid search for the utility-maximizing affordable bundle.
///
/// Returns `None` when no candidate is affordable and valid.
pub fn max_ces_xy(
    axis_x: &AxisSpec,
    axis_y: &AxisSpec,
    objective: &CesObjective,
) -> Option<[f64; 2]> {
    grid_maximize(axis_x, axis_y, objective)
        .point()
        .map(|p| p.to_array())
}

/// Utility of the grid-optimal bundle.
///
/// The value is re-evaluated at the maximizing bundle, which is bit-identical
/// to the value computed during the search.
pub fn max_ces_util(axis_x: &AxisSpec, axis_y: &AxisSpec, objective: &CesObjective) -> Option<f64> {
    let [x, y] = max_ces_xy(axis_x, axis_y, objective)?;
    objective.evaluate(x, y).value()
}

/// Full search outcome (point, utility, index) for reporting.
pub fn search_ces(axis_x: &AxisSpec, axis_y: &AxisSpec, objective: &CesObjective) -> SearchOutcome {
    grid_maximize(axis_x, axis_y, objective)
}
