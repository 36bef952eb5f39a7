//! Attendance aggregation over clock-in/clock-out records.

use chrono::{DateTime, Timelike, Utc};
use std::collections::HashMap;

use crate::models::TimeEntry;
use crate::reports::types::{AttendanceStats, MonthlyAttendance};
use crate::reports::window::{trailing_months, MonthKey, WINDOW_MONTHS};

/// An entry whose clock-in hour-of-day exceeds this is counted as late.
/// A 09:30 clock-in has hour 9 and is on time; 10:00 is late.
pub const LATE_HOUR: u32 = 9;

fn is_late(entry: &TimeEntry) -> bool {
    entry.clock_in.hour() > LATE_HOUR
}

#[derive(Default)]
struct MonthTally {
    total: u32,
    present: u32,
    late: u32,
}

/// Buckets time entries into the trailing six-month window ending at the
/// current month and derives overall attendance stats.
///
/// The window always has exactly [`WINDOW_MONTHS`] entries, oldest first;
/// empty input yields all-zero months. `absent` is clamped at zero so a
/// data anomaly (more clock-outs than entries) never produces a negative
/// count.
pub fn compute_attendance(entries: &[TimeEntry]) -> (Vec<MonthlyAttendance>, AttendanceStats) {
    compute_attendance_at(entries, Utc::now())
}

/// Same as [`compute_attendance`] with an explicit reference date for the
/// window end.
pub fn compute_attendance_at(
    entries: &[TimeEntry],
    now: DateTime<Utc>,
) -> (Vec<MonthlyAttendance>, AttendanceStats) {
    let window = trailing_months(now);
    let mut tallies: HashMap<MonthKey, MonthTally> = window
        .iter()
        .map(|&key| (key, MonthTally::default()))
        .collect();

    for entry in entries {
        let key = MonthKey::of(entry.clock_in);
        if let Some(tally) = tallies.get_mut(&key) {
            tally.total += 1;
            if entry.is_present() {
                tally.present += 1;
            }
            if is_late(entry) {
                tally.late += 1;
            }
        }
    }

    let monthly = window
        .iter()
        .map(|key| {
            let tally = &tallies[key];
            MonthlyAttendance {
                month: key.label().to_string(),
                present: tally.present,
                absent: tally.total.saturating_sub(tally.present),
                late: tally.late,
            }
        })
        .collect();

    // Overall stats count every entry, not just the window.
    let total = entries.len() as u32;
    let present = entries.iter().filter(|e| e.is_present()).count() as u32;
    let late = entries.iter().filter(|e| is_late(e)).count() as u32;

    let avg_attendance = if total == 0 {
        0
    } else {
        (f64::from(present) / f64::from(total) * 100.0).round() as u32
    };

    let stats = AttendanceStats {
        avg_attendance,
        avg_late_arrivals: (f64::from(late) / WINDOW_MONTHS as f64).round() as u32,
        perfect_attendance: i64::from(present) - i64::from(late),
    };

    (monthly, stats)
}
