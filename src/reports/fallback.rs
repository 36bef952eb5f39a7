//! Static fallback series substituted when a required fetch fails.
//!
//! The dashboard deliberately renders plausible-looking data instead of
//! an error state; whether a failure is masked this way or surfaced is an
//! injectable policy so callers (and tests) can choose.

use crate::reports::types::{
    AttendanceStats, MonthlyAttendance, MonthlyPerformance, PerformanceStats,
};

/// What a report refresh does when a required fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Log the error and substitute the static series below, keeping the
    /// dashboard populated. The leave section has no static series and
    /// masks to an empty breakdown.
    #[default]
    MaskWithFallback,
    /// Propagate the first required-fetch error to the caller.
    SurfaceError,
}

/// Canned attendance section shown when the time-entry fetch fails.
pub fn fallback_attendance() -> (Vec<MonthlyAttendance>, AttendanceStats) {
    let rows = [
        ("Jan", 85, 15, 8),
        ("Feb", 88, 12, 6),
        ("Mar", 92, 8, 4),
        ("Apr", 87, 13, 7),
        ("May", 91, 9, 5),
        ("Jun", 89, 11, 6),
    ];
    let monthly = rows
        .into_iter()
        .map(|(month, present, absent, late)| MonthlyAttendance {
            month: month.to_string(),
            present,
            absent,
            late,
        })
        .collect();
    let stats = AttendanceStats {
        avg_attendance: 89,
        avg_late_arrivals: 6,
        perfect_attendance: 45,
    };
    (monthly, stats)
}

/// Canned performance section shown when the employee fetch fails.
pub fn fallback_performance() -> (Vec<MonthlyPerformance>, PerformanceStats) {
    let rows = [
        ("Jan", 78, 82, 95),
        ("Feb", 82, 85, 94),
        ("Mar", 85, 88, 96),
        ("Apr", 83, 86, 95),
        ("May", 87, 90, 97),
        ("Jun", 89, 92, 98),
    ];
    let monthly = rows
        .into_iter()
        .map(|(month, productivity, satisfaction, retention)| MonthlyPerformance {
            month: month.to_string(),
            productivity,
            satisfaction,
            retention,
        })
        .collect();
    let stats = PerformanceStats {
        avg_productivity: 84,
        avg_satisfaction: 87,
        avg_retention: 96,
    };
    (monthly, stats)
}
