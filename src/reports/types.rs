//! Derived value types produced by the report aggregations.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Attendance counts for one month of the trailing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyAttendance {
    pub month: String,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
}

/// Overall attendance stats across every time entry (not just the window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceStats {
    /// Share of entries with a clock-out, as a rounded percentage.
    pub avg_attendance: u32,
    /// Late entries averaged over the window months, rounded.
    pub avg_late_arrivals: u32,
    /// Present-and-never-late approximation; can go negative on
    /// anomalous data (late entries that never clocked out).
    pub perfect_attendance: i64,
}

/// One slice of the leave-type pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveTypeBreakdown {
    pub leave_type: String,
    pub count: u32,
    /// Rounded independently per entry; the column can sum to slightly
    /// more or less than 100.
    pub percentage: u32,
}

/// Performance indicators for one month of the trailing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPerformance {
    pub month: String,
    pub productivity: u32,
    pub satisfaction: u32,
    pub retention: u32,
}

/// Rounded means of the monthly performance values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceStats {
    pub avg_productivity: u32,
    pub avg_satisfaction: u32,
    pub avg_retention: u32,
}

/// Everything one report refresh cycle produces.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub attendance: Vec<MonthlyAttendance>,
    pub attendance_stats: AttendanceStats,
    pub leave: Vec<LeaveTypeBreakdown>,
    pub performance: Vec<MonthlyPerformance>,
    pub performance_stats: PerformanceStats,
    pub last_updated: DateTime<Utc>,
}
