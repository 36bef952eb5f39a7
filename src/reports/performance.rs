//! Performance trend derivation from goal completion.
//!
//! The source system perturbed each month with random jitter; here the
//! monthly values follow a fixed linear drift across the window so the
//! series is reproducible and testable. The trend is a plausible curve
//! anchored on real goal data, not a historical record.

use chrono::{DateTime, Utc};

use crate::models::Goal;
use crate::reports::types::{MonthlyPerformance, PerformanceStats};
use crate::reports::window::{trailing_months, WINDOW_MONTHS};

/// Baseline completion ratio assumed when no goal data exists at all.
pub const DEFAULT_COMPLETION_RATIO: f64 = 0.75;

const SATISFACTION_BASELINE: f64 = 85.0;
const RETENTION_BASELINE: f64 = 95.0;

/// Share of goals with status `Completed`, in `[0, 1]`.
///
/// An empty goal list yields [`DEFAULT_COMPLETION_RATIO`] rather than a
/// zero (or a 0/0 failure); missing goal data should not read as a
/// collapsed completion rate.
pub fn completion_ratio(goals: &[Goal]) -> f64 {
    if goals.is_empty() {
        return DEFAULT_COMPLETION_RATIO;
    }
    let completed = goals.iter().filter(|g| g.is_completed()).count();
    completed as f64 / goals.len() as f64
}

/// Deterministic per-month drift: month index 0 sits at `-amplitude / 2`,
/// the last month at `+amplitude / 2`, linearly in between.
fn drift(month_index: usize, amplitude: f64) -> f64 {
    let t = (month_index as f64 - (WINDOW_MONTHS as f64 - 1.0) / 2.0) / (WINDOW_MONTHS as f64 - 1.0);
    t * amplitude
}

fn clamp_round(value: f64, floor: f64, ceiling: f64) -> u32 {
    value.clamp(floor, ceiling).round() as u32
}

/// Derives the monthly performance series and its averaged stats for the
/// trailing window ending at the current month.
pub fn compute_performance(goals: &[Goal]) -> (Vec<MonthlyPerformance>, PerformanceStats) {
    compute_performance_at(goals, Utc::now())
}

/// Same as [`compute_performance`] with an explicit reference date.
///
/// Productivity is the goal completion ratio scaled to a percentage and
/// drifted within `[60, 100]`; satisfaction drifts around 85 within
/// `[70, 100]`; retention drifts around 95 within `[85, 100]`.
pub fn compute_performance_at(
    goals: &[Goal],
    now: DateTime<Utc>,
) -> (Vec<MonthlyPerformance>, PerformanceStats) {
    let base_productivity = completion_ratio(goals) * 100.0;

    let monthly: Vec<MonthlyPerformance> = trailing_months(now)
        .iter()
        .enumerate()
        .map(|(i, key)| MonthlyPerformance {
            month: key.label().to_string(),
            productivity: clamp_round(base_productivity + drift(i, 10.0), 60.0, 100.0),
            satisfaction: clamp_round(SATISFACTION_BASELINE + drift(i, 15.0), 70.0, 100.0),
            retention: clamp_round(RETENTION_BASELINE + drift(i, 8.0), 85.0, 100.0),
        })
        .collect();

    let mean = |f: fn(&MonthlyPerformance) -> u32| -> u32 {
        let sum: u32 = monthly.iter().map(f).sum();
        (f64::from(sum) / monthly.len() as f64).round() as u32
    };

    let stats = PerformanceStats {
        avg_productivity: mean(|m| m.productivity),
        avg_satisfaction: mean(|m| m.satisfaction),
        avg_retention: mean(|m| m.retention),
    };

    (monthly, stats)
}
