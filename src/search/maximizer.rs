//! Two-axis grid maximizer.
//!
//! The search visits every candidate `(p0, p1)` of `axis0 × axis1` in row-major
//! order (outer loop over `axis0`), skips inadmissible evaluations, and keeps a
//! running maximum that is only replaced on a *strictly* greater value. The
//! reported point is therefore the first maximizer in row-major order.
//!
//! Exhausting the grid without an admissible candidate is a normal outcome
//! (`SearchOutcome::NotFound`), including when either axis is empty or the grid
//! has more points than a `usize` index can address.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::domain::{AxisSpec, GridPoint, SearchOutcome, SearchStats};
use crate::search::objective::Objective2;

/// Find the admissible grid point with the highest objective value.
pub fn grid_maximize<O>(axis0: &AxisSpec, axis1: &AxisSpec, objective: &O) -> SearchOutcome
where
    O: Objective2 + ?Sized,
{
    grid_maximize_with_stats(axis0, axis1, objective).0
}

/// Sequential row-major scan, also returning visit counters.
pub fn grid_maximize_with_stats<O>(
    axis0: &AxisSpec,
    axis1: &AxisSpec,
    objective: &O,
) -> (SearchOutcome, SearchStats)
where
    O: Objective2 + ?Sized,
{
    let n0 = axis0.len();
    let n1 = axis1.len();
    if grid_size(n0, n1).is_none() {
        return (SearchOutcome::NotFound, SearchStats::default());
    }

    let mut stats = SearchStats::default();
    let mut best_value = f64::NEG_INFINITY;
    let mut best: Option<(usize, GridPoint)> = None;

    for i in 0..n0 {
        let p0 = axis0.value_at(i);
        for j in 0..n1 {
            let p1 = axis1.value_at(j);
            stats.visited += 1;

            let Some(value) = objective.evaluate(p0, p1).value() else {
                continue;
            };
            stats.admissible += 1;

            if value > best_value {
                best_value = value;
                best = Some((i * n1 + j, GridPoint::new(p0, p1)));
            }
        }
    }

    debug!(
        n0,
        n1,
        visited = stats.visited,
        admissible = stats.admissible,
        found = best.is_some(),
        "grid search finished"
    );

    let outcome = match best {
        Some((index, point)) => SearchOutcome::Found {
            point,
            value: best_value,
            index,
        },
        None => SearchOutcome::NotFound,
    };
    (outcome, stats)
}

/// Parallel variant of [`grid_maximize`].
///
/// Candidates are evaluated independently on the rayon pool and reduced with a
/// total order: higher value first, then lower row-major index. This selects the
/// same winner as the sequential scan.
pub fn grid_maximize_par<O>(axis0: &AxisSpec, axis1: &AxisSpec, objective: &O) -> SearchOutcome
where
    O: Objective2 + Sync + ?Sized,
{
    grid_maximize_par_with_stats(axis0, axis1, objective).0
}

/// Parallel scan, also returning visit counters.
pub fn grid_maximize_par_with_stats<O>(
    axis0: &AxisSpec,
    axis1: &AxisSpec,
    objective: &O,
) -> (SearchOutcome, SearchStats)
where
    O: Objective2 + Sync + ?Sized,
{
    let n0 = axis0.len();
    let n1 = axis1.len();
    let Some(total) = grid_size(n0, n1) else {
        return (SearchOutcome::NotFound, SearchStats::default());
    };

    let candidates: Vec<(usize, GridPoint, f64)> = (0..total)
        .into_par_iter()
        .filter_map(|idx| {
            let point = GridPoint::new(axis0.value_at(idx / n1), axis1.value_at(idx % n1));
            objective
                .evaluate(point.p0, point.p1)
                .value()
                .map(|value| (idx, point, value))
        })
        .collect();

    let stats = SearchStats {
        visited: total,
        admissible: candidates.len(),
    };

    let best = candidates
        .into_par_iter()
        .reduce_with(|a, b| if prefer(&b, &a) { b } else { a });

    debug!(
        n0,
        n1,
        visited = stats.visited,
        admissible = stats.admissible,
        found = best.is_some(),
        "parallel grid search finished"
    );

    let outcome = match best {
        Some((index, point, value)) => SearchOutcome::Found { point, value, index },
        None => SearchOutcome::NotFound,
    };
    (outcome, stats)
}

/// Number of grid points, or `None` (with a warning) when `n0 * n1` does not
/// fit in `usize`. Row-major indices must be representable.
fn grid_size(n0: usize, n1: usize) -> Option<usize> {
    let total = n0.checked_mul(n1);
    if total.is_none() {
        warn!(n0, n1, "grid has more points than can be indexed; search skipped");
    }
    total
}

/// Whether candidate `a` beats `b`: strictly higher value, or equal value at an
/// earlier row-major index.
fn prefer(a: &(usize, GridPoint, f64), b: &(usize, GridPoint, f64)) -> bool {
    a.2 > b.2 || (a.2 == b.2 && a.0 < b.0)
}

/// Run the search and report both the maximizing point and its value.
///
/// The value is the one computed inside the search loop for the winning point;
/// objectives are pure, so re-evaluating at the point gives the same bits.
pub fn maximize_with_value<O>(
    axis0: &AxisSpec,
    axis1: &AxisSpec,
    objective: &O,
) -> Option<(GridPoint, f64)>
where
    O: Objective2 + ?Sized,
{
    match grid_maximize(axis0, axis1, objective) {
        SearchOutcome::Found { point, value, .. } => Some((point, value)),
        SearchOutcome::NotFound => None,
    }
}
