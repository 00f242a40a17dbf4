//! Command-line parsing for the grid-search maximizer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! search/model code. Flags are turned into typed configs in `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gridmax", version, about = "Grid-search maximizer for small economic and statistical models")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Maximize CES utility subject to a budget constraint.
    Ces(CesArgs),
    /// Estimate bivariate logit coefficients by maximizing the log-likelihood.
    Logit(LogitArgs),
    /// Find the profit-maximizing production quantity.
    Profit(ProfitArgs),
    /// Print a previously exported report.
    Show(ShowArgs),
}

/// Options shared by the two-axis searches.
#[derive(Debug, Args, Clone)]
pub struct SearchArgs {
    /// Evaluate grid points on all cores (same result as the sequential scan).
    #[arg(long)]
    pub parallel: bool,

    /// Export the run as a JSON report.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct CesArgs {
    /// Elasticity parameter r (must be > 0).
    #[arg(long)]
    pub r: f64,

    /// Price of good x.
    #[arg(long)]
    pub px: f64,

    /// Price of good y.
    #[arg(long)]
    pub py: f64,

    /// Wealth (budget).
    #[arg(long)]
    pub wealth: f64,

    /// Lower bound of the x grid.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Upper bound (exclusive) of the x grid. Defaults to wealth / px.
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Lower bound of the y grid.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y_min: f64,

    /// Upper bound (exclusive) of the y grid. Defaults to wealth / py.
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Grid step for both axes.
    #[arg(long, default_value_t = 0.1)]
    pub step: f64,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Debug, Args, Clone)]
pub struct LogitArgs {
    /// Comma-separated 0/1 labels.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, requires = "x", conflicts_with = "synthetic")]
    pub y: Vec<f64>,

    /// Comma-separated regressor values (same length as --y).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, requires = "y")]
    pub x: Vec<f64>,

    /// Draw a synthetic sample of this size instead of passing --y/--x.
    #[arg(long, value_name = "N", required_unless_present = "y")]
    pub synthetic: Option<usize>,

    /// Seed for the synthetic sample.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// True intercept of the synthetic sample.
    #[arg(long, default_value_t = -0.5, allow_negative_numbers = true)]
    pub true_b0: f64,

    /// True slope of the synthetic sample.
    #[arg(long, default_value_t = 0.8, allow_negative_numbers = true)]
    pub true_b1: f64,

    /// Mean of the synthetic regressor.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x_mean: f64,

    /// Standard deviation of the synthetic regressor (must be > 0).
    #[arg(long, default_value_t = 1.0)]
    pub x_sd: f64,

    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub b0_min: f64,

    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub b0_max: f64,

    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub b1_min: f64,

    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub b1_max: f64,

    /// Grid step for both coefficients.
    #[arg(long, default_value_t = 0.1)]
    pub step: f64,

    /// Skip the Newton-Raphson MLE cross-check.
    #[arg(long)]
    pub no_newton: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ProfitArgs {
    /// Upper bound (exclusive) of the quantity grid.
    #[arg(long)]
    pub q_max: f64,

    /// Quantity increment.
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,

    /// Price per unit sold.
    #[arg(long)]
    pub price: f64,

    /// Multiplier on squared quantity in the cost function.
    #[arg(long)]
    pub multiplier: f64,

    /// Fixed cost.
    #[arg(long, default_value_t = 0.0)]
    pub fixed_cost: f64,

    /// Export the run as a JSON report.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Report JSON produced by `--export`.
    #[arg(long, value_name = "JSON")]
    pub report: PathBuf,
}
