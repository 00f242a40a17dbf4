//! Read/write search report JSON files.
//!
//! A report is the portable record of one search run:
//! - model kind and the searched axes
//! - the outcome (maximizing parameters and objective value, if any)
//! - visit counters and model-specific notes
//!
//! The schema is defined by `domain::SearchReport`.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{AxisSpec, GridPoint, ModelKind, SearchOutcome, SearchReport, SearchStats};
use crate::error::AppError;

const TOOL: &str = "gridmax";

/// Assemble a report for a two-axis search.
pub fn build_report(
    model: ModelKind,
    axes: [AxisSpec; 2],
    outcome: &SearchOutcome<GridPoint>,
    stats: SearchStats,
    notes: BTreeMap<String, f64>,
) -> SearchReport {
    SearchReport {
        tool: TOOL.to_string(),
        generated_at: Utc::now(),
        model,
        axes: axes.to_vec(),
        found: outcome.is_found(),
        point: outcome.point().map(|p| p.to_array().to_vec()).unwrap_or_default(),
        value: outcome.value(),
        stats,
        notes,
    }
}

/// Assemble a report for a single-axis search.
pub fn build_report_1d(
    model: ModelKind,
    axis: AxisSpec,
    outcome: &SearchOutcome<f64>,
    stats: SearchStats,
    notes: BTreeMap<String, f64>,
) -> SearchReport {
    SearchReport {
        tool: TOOL.to_string(),
        generated_at: Utc::now(),
        model,
        axes: vec![axis],
        found: outcome.is_found(),
        point: outcome.point().into_iter().collect(),
        value: outcome.value(),
        stats,
        notes,
    }
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, report: &SearchReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<SearchReport, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open report JSON '{}': {e}", path.display())))?;
    let report: SearchReport =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid report JSON: {e}")))?;
    Ok(report)
}
