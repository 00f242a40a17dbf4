//! Formatted terminal output.
//!
//! Formatting lives in one place so the search and model code stays free of
//! printing, and output changes stay localized.

use crate::app::pipeline::{CesRun, LogitRun, ProfitRun};
use crate::domain::{AxisSpec, CesConfig, LogitConfig, ModelKind, ProfitConfig, SearchReport, SearchStats};

/// Summary of a CES utility run.
pub fn format_ces_run(run: &CesRun, config: &CesConfig) -> String {
    let mut out = String::new();

    out.push_str("=== gridmax - CES utility ===\n");
    out.push_str(&format!(
        "r={} | p_x={} | p_y={} | w={}\n",
        config.r, config.price_x, config.price_y, config.wealth
    ));
    out.push_str(&format!("x: {}\n", fmt_axis(&config.axis_x)));
    out.push_str(&format!("y: {}\n", fmt_axis(&config.axis_y)));
    out.push_str(&fmt_stats(&run.stats));

    match run.outcome.point() {
        Some(p) => {
            out.push_str(&format!("Optimal bundle: x={} y={}\n", p.p0, p.p1));
            out.push_str(&format!("Utility: {}\n", fmt_opt(run.outcome.value())));
        }
        None => out.push_str(&not_found_hint(ModelKind::Ces)),
    }

    match run.closed_form {
        Some([x, y]) => {
            out.push_str(&format!("Closed-form demand: x={x:.6} y={y:.6}"));
            if config.r > 1.0 {
                out.push_str(" (a minimum for r > 1; expect a corner solution)");
            }
            out.push('\n');
        }
        None => out.push_str("Closed-form demand: n/a\n"),
    }

    out
}

/// Summary of a logit estimation run.
pub fn format_logit_run(run: &LogitRun, config: &LogitConfig) -> String {
    let mut out = String::new();

    out.push_str("=== gridmax - Logit log-likelihood ===\n");
    out.push_str(&format!("Observations: n={}\n", run.sample.len()));
    out.push_str(&format!("beta_0: {}\n", fmt_axis(&config.axis_b0)));
    out.push_str(&format!("beta_1: {}\n", fmt_axis(&config.axis_b1)));
    out.push_str(&fmt_stats(&run.stats));

    match run.outcome.point() {
        Some(p) => {
            out.push_str(&format!("Grid estimate: beta_0={} beta_1={}\n", p.p0, p.p1));
            out.push_str(&format!("Log-likelihood: {}\n", fmt_opt(run.outcome.value())));
        }
        None => out.push_str(&not_found_hint(ModelKind::Logit)),
    }

    if let Some(fit) = &run.mle {
        out.push_str(&format!(
            "Newton MLE: beta_0={:.6} beta_1={:.6} (loglik={:.6}, {} iterations)\n",
            fit.beta_0, fit.beta_1, fit.log_likelihood, fit.iterations
        ));
    } else if let Some(reason) = &run.mle_error {
        out.push_str(&format!("Newton MLE: n/a ({reason})\n"));
    }

    out
}

/// Summary of a profit run.
pub fn format_profit_run(run: &ProfitRun, config: &ProfitConfig) -> String {
    let mut out = String::new();

    out.push_str("=== gridmax - Production profit ===\n");
    out.push_str(&format!(
        "price={} | multiplier={} | fixed_cost={}\n",
        config.unit_price, config.multiplier, config.fixed_cost
    ));
    out.push_str(&format!("q: {}\n", fmt_axis(&AxisSpec::new(0.0, config.q_max, config.step))));
    out.push_str(&fmt_stats(&run.stats));

    if run.quantity == 0.0 && !matches!(run.outcome.value(), Some(v) if v > 0.0) {
        out.push_str("No positive value of quantity was profitable.\n");
    }
    out.push_str(&format!("Grid quantity: {}\n", run.quantity));
    out.push_str(&format!("Closed-form quantity: {}\n", run.closed_form));

    out
}

/// Render a saved report.
pub fn format_report(report: &SearchReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} report ({}) ===\n",
        report.tool,
        report.model.display_name()
    ));
    out.push_str(&format!("Generated: {}\n", report.generated_at.to_rfc3339()));

    for (name, axis) in report.model.param_names().iter().zip(&report.axes) {
        out.push_str(&format!("{name}: {}\n", fmt_axis(axis)));
    }
    out.push_str(&fmt_stats(&report.stats));

    if report.found {
        let params: Vec<String> = report
            .model
            .param_names()
            .iter()
            .zip(&report.point)
            .map(|(name, v)| format!("{name}={v}"))
            .collect();
        out.push_str(&format!("Maximizer: {}\n", params.join(" ")));
        out.push_str(&format!("Value: {}\n", fmt_opt(report.value)));
    } else {
        out.push_str(&not_found_hint(report.model));
    }

    if !report.notes.is_empty() {
        out.push_str("Notes:\n");
        for (key, value) in &report.notes {
            out.push_str(&format!("- {key}: {value}\n"));
        }
    }

    out
}

fn fmt_axis(axis: &AxisSpec) -> String {
    format!(
        "[{}, {}) step {} ({} candidates)",
        axis.min,
        axis.max,
        axis.step,
        axis.len()
    )
}

fn fmt_stats(stats: &SearchStats) -> String {
    format!(
        "Candidates: visited={} admissible={}\n",
        stats.visited, stats.admissible
    )
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

fn not_found_hint(model: ModelKind) -> String {
    let names = model.param_names().join(" and ");
    format!("No admissible point found. Choose different ranges for {names}.\n")
}
