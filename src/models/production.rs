//! Single-product firm: revenue, quadratic cost, profit.
//!
//! - revenue `R(q) = p q`
//! - cost `C(q) = F + m q^2`
//! - profit `π(q) = R(q) - C(q)`, maximized at `q* = p / (2m)`
//!
//! A firm that cannot make a positive profit at any candidate quantity
//! produces nothing (`q = 0`).

use crate::domain::{AxisSpec, Evaluation, SearchOutcome};
use crate::search::{Objective1, grid_maximize_1d};

pub fn total_revenue(num_units: f64, unit_price: f64) -> f64 {
    num_units * unit_price
}

pub fn total_cost(num_units: f64, multiplier: f64, fixed_cost: f64) -> f64 {
    fixed_cost + multiplier * num_units * num_units
}

pub fn total_profit(num_units: f64, unit_price: f64, multiplier: f64, fixed_cost: f64) -> f64 {
    total_revenue(num_units, unit_price) - total_cost(num_units, multiplier, fixed_cost)
}

/// Profit-maximizing quantity from the first-order condition.
///
/// Falls back to `0` when the optimum still loses money. Assumes
/// `unit_price > 0` and `multiplier > 0`.
pub fn max_profit_calc(unit_price: f64, multiplier: f64, fixed_cost: f64) -> f64 {
    let q_star = unit_price / (2.0 * multiplier);
    if total_profit(q_star, unit_price, multiplier, fixed_cost) < 0.0 {
        0.0
    } else {
        q_star
    }
}

/// Profit as a search objective over the quantity `q`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitObjective {
    pub unit_price: f64,
    pub multiplier: f64,
    pub fixed_cost: f64,
}

impl Objective1 for ProfitObjective {
    fn evaluate(&self, q: f64) -> Evaluation {
        Evaluation::Admissible(total_profit(q, self.unit_price, self.multiplier, self.fixed_cost))
    }
}

/// The quantity to produce given a search outcome: the maximizer if it is
/// strictly profitable, otherwise `0`.
pub fn quantity_from_outcome(outcome: &SearchOutcome<f64>) -> f64 {
    match outcome {
        SearchOutcome::Found { point, value, .. } if *value > 0.0 => *point,
        _ => 0.0,
    }
}

/// Profit-maximizing quantity by grid search over `q ∈ [0, q_max)`; `0` when
/// no candidate is strictly profitable (or the grid is empty).
pub fn profit_max_q(q_max: f64, step: f64, unit_price: f64, multiplier: f64, fixed_cost: f64) -> f64 {
    let objective = ProfitObjective {
        unit_price,
        multiplier,
        fixed_cost,
    };
    quantity_from_outcome(&grid_maximize_1d(&AxisSpec::new(0.0, q_max, step), &objective))
}
