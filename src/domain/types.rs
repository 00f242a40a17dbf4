//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during a search
//! - exported to JSON
//! - reloaded later for display

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One dimension of the search grid: candidate values `min, min+step, ...`
/// strictly below `max`.
///
/// A degenerate spec (`step <= 0`, `max <= min`, or non-finite bounds) is valid
/// and generates no values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisSpec {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }
}

/// A candidate point `(p0, p1)` of a two-axis grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub p0: f64,
    pub p1: f64,
}

impl GridPoint {
    pub fn new(p0: f64, p1: f64) -> Self {
        Self { p0, p1 }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.p0, self.p1]
    }
}

/// Result of evaluating an objective at one candidate.
///
/// `Inadmissible` marks a candidate that violates the objective's domain or
/// business constraints. The search loop skips it silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Admissible(f64),
    Inadmissible,
}

impl Evaluation {
    /// The admissible value, if any.
    ///
    /// Non-finite values are reported as `None`: a NaN cannot be ordered and an
    /// infinite objective is a numerical failure, not a maximum.
    pub fn value(self) -> Option<f64> {
        match self {
            Evaluation::Admissible(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    pub fn is_admissible(self) -> bool {
        self.value().is_some()
    }
}

impl From<Option<f64>> for Evaluation {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Evaluation::Admissible(v),
            None => Evaluation::Inadmissible,
        }
    }
}

/// Terminal state of a grid search.
///
/// `index` is the row-major position of the winning candidate in the grid.
/// `P` is `GridPoint` for two-axis searches and `f64` for single-axis ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome<P = GridPoint> {
    Found { point: P, value: f64, index: usize },
    NotFound,
}

impl<P: Copy> SearchOutcome<P> {
    pub fn point(&self) -> Option<P> {
        match self {
            SearchOutcome::Found { point, .. } => Some(*point),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            SearchOutcome::Found { value, .. } => Some(*value),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Grid points evaluated.
    pub visited: usize,
    /// Grid points whose evaluation was admissible.
    pub admissible: usize,
}

/// Which model a search run was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Ces,
    Logit,
    Profit,
}

impl ModelKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Ces => "CES utility",
            ModelKind::Logit => "Logit log-likelihood",
            ModelKind::Profit => "Production profit",
        }
    }

    /// Names of the searched parameters, in axis order.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            ModelKind::Ces => &["x", "y"],
            ModelKind::Logit => &["beta_0", "beta_1"],
            ModelKind::Profit => &["q"],
        }
    }
}

/// Where the logistic sample comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum LogitData {
    /// Labels and regressors given explicitly.
    Observed { y: Vec<f64>, x: Vec<f64> },
    /// Draw a seeded sample from a known model.
    Synthetic {
        n: usize,
        seed: u64,
        beta_0: f64,
        beta_1: f64,
        /// Regressors are drawn from `N(x_mean, x_sd^2)`.
        x_mean: f64,
        x_sd: f64,
    },
}

/// Configuration for a CES utility maximization run.
#[derive(Debug, Clone)]
pub struct CesConfig {
    pub axis_x: AxisSpec,
    pub axis_y: AxisSpec,
    pub r: f64,
    pub price_x: f64,
    pub price_y: f64,
    pub wealth: f64,
    pub parallel: bool,
    pub export: Option<PathBuf>,
}

/// Configuration for a logistic coefficient grid estimation run.
#[derive(Debug, Clone)]
pub struct LogitConfig {
    pub data: LogitData,
    pub axis_b0: AxisSpec,
    pub axis_b1: AxisSpec,
    /// Also run the Newton-Raphson MLE and report it next to the grid estimate.
    pub newton_check: bool,
    pub parallel: bool,
    pub export: Option<PathBuf>,
}

/// Configuration for a profit-maximizing quantity run.
#[derive(Debug, Clone)]
pub struct ProfitConfig {
    pub q_max: f64,
    pub step: f64,
    pub unit_price: f64,
    pub multiplier: f64,
    pub fixed_cost: f64,
    pub export: Option<PathBuf>,
}

/// A saved search run (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub model: ModelKind,
    pub axes: Vec<AxisSpec>,
    pub found: bool,
    /// Maximizing parameters in axis order (empty when nothing was found).
    pub point: Vec<f64>,
    pub value: Option<f64>,
    pub stats: SearchStats,
    /// Model-specific extras (closed-form solutions, MLE cross-checks, inputs).
    #[serde(default)]
    pub notes: BTreeMap<String, f64>,
}
