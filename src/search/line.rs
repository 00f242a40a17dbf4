//! Single-axis grid maximizer.
//!
//! Same rules as the two-axis search: ascending scan, inadmissible values
//! skipped, strictly-greater replacement (first maximizer wins).

use tracing::debug;

use crate::domain::{AxisSpec, SearchOutcome, SearchStats};
use crate::search::objective::Objective1;

/// Find the admissible axis value with the highest objective value.
pub fn grid_maximize_1d<O>(axis: &AxisSpec, objective: &O) -> SearchOutcome<f64>
where
    O: Objective1 + ?Sized,
{
    grid_maximize_1d_with_stats(axis, objective).0
}

pub fn grid_maximize_1d_with_stats<O>(axis: &AxisSpec, objective: &O) -> (SearchOutcome<f64>, SearchStats)
where
    O: Objective1 + ?Sized,
{
    let mut stats = SearchStats::default();
    let mut best: Option<(usize, f64, f64)> = None;

    for i in 0..axis.len() {
        let p = axis.value_at(i);
        stats.visited += 1;

        let Some(value) = objective.evaluate(p).value() else {
            continue;
        };
        stats.admissible += 1;

        if best.is_none_or(|(_, _, v)| value > v) {
            best = Some((i, p, value));
        }
    }

    debug!(
        visited = stats.visited,
        admissible = stats.admissible,
        found = best.is_some(),
        "line search finished"
    );

    let outcome = match best {
        Some((index, point, value)) => SearchOutcome::Found { point, value, index },
        None => SearchOutcome::NotFound,
    };
    (outcome, stats)
}
