//! Shared run logic behind each CLI subcommand.
//!
//! Each `run_*` function takes a typed config, performs the search plus any
//! closed-form or MLE cross-check, and returns the outputs. Printing and
//! exporting stay in `app`, so these are testable without a process.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::data::{SyntheticLogit, generate_logit_sample};
use crate::domain::{
    AxisSpec, CesConfig, LogitConfig, LogitData, ModelKind, ProfitConfig, SearchOutcome,
    SearchReport, SearchStats,
};
use crate::error::AppError;
use crate::io::{build_report, build_report_1d};
use crate::math::{LogitFit, NewtonOptions, fit_logit_newton};
use crate::models::{
    CesObjective, LogitObjective, LogitSample, ProfitObjective, ces_demand, max_profit_calc, quantity_from_outcome,
};
use crate::search::{Objective2, grid_maximize_1d_with_stats, grid_maximize_par_with_stats, grid_maximize_with_stats};

/// Outputs of a CES run.
#[derive(Debug, Clone)]
pub struct CesRun {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    /// Calculus solution, when defined for the inputs.
    pub closed_form: Option<[f64; 2]>,
}

/// Outputs of a logit run.
#[derive(Debug, Clone)]
pub struct LogitRun {
    pub sample: LogitSample,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    pub mle: Option<LogitFit>,
    /// Why the MLE cross-check was unavailable, if it was requested.
    pub mle_error: Option<String>,
}

/// Outputs of a profit run.
#[derive(Debug, Clone)]
pub struct ProfitRun {
    pub outcome: SearchOutcome<f64>,
    pub stats: SearchStats,
    /// Quantity the firm should produce (0 when nothing is profitable).
    pub quantity: f64,
    pub closed_form: f64,
}

fn search<O>(axis0: &AxisSpec, axis1: &AxisSpec, objective: &O, parallel: bool) -> (SearchOutcome, SearchStats)
where
    O: Objective2 + Sync,
{
    if parallel {
        grid_maximize_par_with_stats(axis0, axis1, objective)
    } else {
        grid_maximize_with_stats(axis0, axis1, objective)
    }
}

pub fn run_ces(config: &CesConfig) -> Result<CesRun, AppError> {
    let objective = CesObjective {
        r: config.r,
        price_x: config.price_x,
        price_y: config.price_y,
        wealth: config.wealth,
    };

    let (outcome, stats) = search(&config.axis_x, &config.axis_y, &objective, config.parallel);
    info!(
        visited = stats.visited,
        admissible = stats.admissible,
        found = outcome.is_found(),
        "CES grid search done"
    );

    let closed_form = match ces_demand(config.r, config.price_x, config.price_y, config.wealth) {
        Ok(xy) => Some(xy),
        Err(e) => {
            info!("closed-form demand unavailable: {e}");
            None
        }
    };

    Ok(CesRun {
        outcome,
        stats,
        closed_form,
    })
}

pub fn run_logit(config: &LogitConfig) -> Result<LogitRun, AppError> {
    let sample = match &config.data {
        LogitData::Observed { y, x } => LogitSample::new(y.clone(), x.clone())?,
        LogitData::Synthetic {
            n,
            seed,
            beta_0,
            beta_1,
            x_mean,
            x_sd,
        } => generate_logit_sample(&SyntheticLogit {
            x_mean: *x_mean,
            x_sd: *x_sd,
            ..SyntheticLogit::new(*n, *seed, *beta_0, *beta_1)
        })?,
    };
    if !sample.labels_are_binary() {
        warn!("labels outside {{0, 1}}: every candidate is inadmissible");
    }

    let objective = LogitObjective::new(&sample);
    let (outcome, stats) = search(&config.axis_b0, &config.axis_b1, &objective, config.parallel);
    info!(
        n = sample.len(),
        visited = stats.visited,
        admissible = stats.admissible,
        found = outcome.is_found(),
        "logit grid search done"
    );

    let (mle, mle_error) = if config.newton_check {
        match fit_logit_newton(sample.y(), sample.x(), &NewtonOptions::default()) {
            Ok(fit) => {
                info!(iterations = fit.iterations, "Newton-Raphson MLE converged");
                (Some(fit), None)
            }
            Err(e) => {
                warn!("Newton-Raphson cross-check failed: {e}");
                (None, Some(e.to_string()))
            }
        }
    } else {
        (None, None)
    };

    Ok(LogitRun {
        sample,
        outcome,
        stats,
        mle,
        mle_error,
    })
}

pub fn run_profit(config: &ProfitConfig) -> Result<ProfitRun, AppError> {
    if !(config.unit_price.is_finite() && config.unit_price > 0.0) {
        return Err(AppError::invalid("Unit price must be finite and positive."));
    }
    if !(config.multiplier.is_finite() && config.multiplier > 0.0) {
        return Err(AppError::invalid("Cost multiplier must be finite and positive."));
    }
    if !config.fixed_cost.is_finite() {
        return Err(AppError::invalid("Fixed cost must be finite."));
    }

    let axis = profit_axis(config);
    let objective = ProfitObjective {
        unit_price: config.unit_price,
        multiplier: config.multiplier,
        fixed_cost: config.fixed_cost,
    };
    let (outcome, stats) = grid_maximize_1d_with_stats(&axis, &objective);

    let quantity = quantity_from_outcome(&outcome);
    if quantity == 0.0 {
        info!("no strictly profitable quantity on the grid; producing nothing");
    }

    Ok(ProfitRun {
        outcome,
        stats,
        quantity,
        closed_form: max_profit_calc(config.unit_price, config.multiplier, config.fixed_cost),
    })
}

fn profit_axis(config: &ProfitConfig) -> AxisSpec {
    AxisSpec::new(0.0, config.q_max, config.step)
}

pub fn ces_report(run: &CesRun, config: &CesConfig) -> SearchReport {
    let mut notes = BTreeMap::new();
    notes.insert("r".to_string(), config.r);
    notes.insert("price_x".to_string(), config.price_x);
    notes.insert("price_y".to_string(), config.price_y);
    notes.insert("wealth".to_string(), config.wealth);
    if let Some([x, y]) = run.closed_form {
        notes.insert("closed_form_x".to_string(), x);
        notes.insert("closed_form_y".to_string(), y);
    }
    build_report(ModelKind::Ces, [config.axis_x, config.axis_y], &run.outcome, run.stats, notes)
}

pub fn logit_report(run: &LogitRun, config: &LogitConfig) -> SearchReport {
    let mut notes = BTreeMap::new();
    notes.insert("n".to_string(), run.sample.len() as f64);
    if let Some(fit) = &run.mle {
        notes.insert("mle_beta_0".to_string(), fit.beta_0);
        notes.insert("mle_beta_1".to_string(), fit.beta_1);
        notes.insert("mle_log_likelihood".to_string(), fit.log_likelihood);
    }
    build_report(ModelKind::Logit, [config.axis_b0, config.axis_b1], &run.outcome, run.stats, notes)
}

pub fn profit_report(run: &ProfitRun, config: &ProfitConfig) -> SearchReport {
    let mut notes = BTreeMap::new();
    notes.insert("quantity".to_string(), run.quantity);
    notes.insert("closed_form_q".to_string(), run.closed_form);
    notes.insert("unit_price".to_string(), config.unit_price);
    notes.insert("multiplier".to_string(), config.multiplier);
    notes.insert("fixed_cost".to_string(), config.fixed_cost);
    build_report_1d(ModelKind::Profit, profit_axis(config), &run.outcome, run.stats, notes)
}
