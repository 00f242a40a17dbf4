//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments into typed configs
//! - runs the requested search
//! - prints reports and writes optional exports

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{CesArgs, Command, LogitArgs, ProfitArgs, ShowArgs};
use crate::domain::{AxisSpec, CesConfig, LogitConfig, LogitData, ProfitConfig};
use crate::error::AppError;

pub mod pipeline;

/// Environment variable holding the log filter (e.g. `info`, `gridmax=debug`).
pub const LOG_ENV: &str = "GRIDMAX_LOG";

/// Entry point for the `gridmax` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Ces(args) => handle_ces(args),
        Command::Logit(args) => handle_logit(args),
        Command::Profit(args) => handle_profit(args),
        Command::Show(args) => handle_show(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_ces(args: CesArgs) -> Result<(), AppError> {
    let config = ces_config_from_args(&args)?;
    debug!(?config, "CES config");
    let run = pipeline::run_ces(&config)?;

    println!("{}", crate::report::format_ces_run(&run, &config));

    if let Some(path) = &config.export {
        crate::io::write_report_json(path, &pipeline::ces_report(&run, &config))?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

fn handle_logit(args: LogitArgs) -> Result<(), AppError> {
    let config = logit_config_from_args(&args)?;
    debug!(?config, "logit config");
    let run = pipeline::run_logit(&config)?;

    println!("{}", crate::report::format_logit_run(&run, &config));

    if let Some(path) = &config.export {
        crate::io::write_report_json(path, &pipeline::logit_report(&run, &config))?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

fn handle_profit(args: ProfitArgs) -> Result<(), AppError> {
    let config = profit_config_from_args(&args);
    debug!(?config, "profit config");
    let run = pipeline::run_profit(&config)?;

    println!("{}", crate::report::format_profit_run(&run, &config));

    if let Some(path) = &config.export {
        crate::io::write_report_json(path, &pipeline::profit_report(&run, &config))?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let report = crate::io::read_report_json(&args.report)?;
    println!("{}", crate::report::format_report(&report));
    Ok(())
}

/// Build a CES config. Missing upper bounds default to the budget intercepts
/// `w / p_x` and `w / p_y`.
pub fn ces_config_from_args(args: &CesArgs) -> Result<CesConfig, AppError> {
    let x_max = match args.x_max {
        Some(v) => v,
        None => budget_intercept(args.wealth, args.px, "x")?,
    };
    let y_max = match args.y_max {
        Some(v) => v,
        None => budget_intercept(args.wealth, args.py, "y")?,
    };

    Ok(CesConfig {
        axis_x: AxisSpec::new(args.x_min, x_max, args.step),
        axis_y: AxisSpec::new(args.y_min, y_max, args.step),
        r: args.r,
        price_x: args.px,
        price_y: args.py,
        wealth: args.wealth,
        parallel: args.search.parallel,
        export: args.search.export.clone(),
    })
}

fn budget_intercept(wealth: f64, price: f64, good: &str) -> Result<f64, AppError> {
    if !(price.is_finite() && price > 0.0) {
        return Err(AppError::invalid(format!(
            "Price of {good} must be positive to derive --{good}-max; pass --{good}-max explicitly."
        )));
    }
    Ok(wealth / price)
}

pub fn logit_config_from_args(args: &LogitArgs) -> Result<LogitConfig, AppError> {
    let data = match args.synthetic {
        Some(n) => LogitData::Synthetic {
            n,
            seed: args.seed,
            beta_0: args.true_b0,
            beta_1: args.true_b1,
            x_mean: args.x_mean,
            x_sd: args.x_sd,
        },
        None if args.y.is_empty() && args.x.is_empty() => {
            return Err(AppError::invalid("Provide --y/--x or --synthetic N."));
        }
        None => LogitData::Observed {
            y: args.y.clone(),
            x: args.x.clone(),
        },
    };

    Ok(LogitConfig {
        data,
        axis_b0: AxisSpec::new(args.b0_min, args.b0_max, args.step),
        axis_b1: AxisSpec::new(args.b1_min, args.b1_max, args.step),
        newton_check: !args.no_newton,
        parallel: args.search.parallel,
        export: args.search.export.clone(),
    })
}

pub fn profit_config_from_args(args: &ProfitArgs) -> ProfitConfig {
    ProfitConfig {
        q_max: args.q_max,
        step: args.step,
        unit_price: args.price,
        multiplier: args.multiplier,
        fixed_cost: args.fixed_cost,
        export: args.export.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    fn parse(argv: &[&str]) -> Command {
        Cli::parse_from(argv).command
    }

    #[test]
    fn ces_bounds_default_to_budget_intercepts() {
        let Command::Ces(args) = parse(&["gridmax", "ces", "--r", "0.5", "--px", "2", "--py", "4", "--wealth", "12"])
        else {
            panic!("expected ces subcommand");
        };
        let config = ces_config_from_args(&args).unwrap();
        assert_eq!(config.axis_x, AxisSpec::new(0.0, 6.0, 0.1));
        assert_eq!(config.axis_y, AxisSpec::new(0.0, 3.0, 0.1));
    }

    #[test]
    fn ces_zero_price_needs_explicit_bound() {
        let Command::Ces(args) = parse(&["gridmax", "ces", "--r", "0.5", "--px", "0", "--py", "4", "--wealth", "12"])
        else {
            panic!("expected ces subcommand");
        };
        assert_eq!(ces_config_from_args(&args).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn logit_synthetic_config() {
        let Command::Logit(args) = parse(&["gridmax", "logit", "--synthetic", "200", "--seed", "7", "--no-newton"])
        else {
            panic!("expected logit subcommand");
        };
        let config = logit_config_from_args(&args).unwrap();
        assert_eq!(
            config.data,
            LogitData::Synthetic {
                n: 200,
                seed: 7,
                beta_0: -0.5,
                beta_1: 0.8,
                x_mean: 0.0,
                x_sd: 1.0,
            }
        );
        assert!(!config.newton_check);
        assert_eq!(config.axis_b0, AxisSpec::new(-2.0, 2.0, 0.1));
    }

    #[test]
    fn logit_synthetic_regressor_flags() {
        let Command::Logit(args) = parse(&[
            "gridmax", "logit", "--synthetic", "50", "--x-mean", "-1.5", "--x-sd", "2",
        ]) else {
            panic!("expected logit subcommand");
        };
        let LogitData::Synthetic { x_mean, x_sd, .. } = logit_config_from_args(&args).unwrap().data else {
            panic!("expected synthetic data");
        };
        assert_eq!((x_mean, x_sd), (-1.5, 2.0));
    }

    #[test]
    fn profit_config_maps_flags() {
        let Command::Profit(args) = parse(&[
            "gridmax", "profit", "--q-max", "1000", "--step", "10", "--price", "100", "--multiplier", "0.1",
            "--fixed-cost", "2",
        ]) else {
            panic!("expected profit subcommand");
        };
        let config = profit_config_from_args(&args);
        assert_eq!(config.unit_price, 100.0);
        assert_eq!(config.q_max, 1000.0);
        assert!(config.export.is_none());
    }
}
