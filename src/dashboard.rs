//! Caller-owned dashboard state and the report refresh cycle.
//!
//! One refresh issues all four fetches concurrently, waits for all of
//! them to settle, and rebuilds every section from scratch. The held
//! report is replaced wholesale on each completed refresh
//! (last-write-wins; concurrent refreshes are not cancelled).

use chrono::{DateTime, Utc};
use tracing::error;

use crate::fetch::{BasicClient, FetchError, HttpClient, ReportApi};
use crate::models::{Employee, Goal, LeaveRequest, TimeEntry};
use crate::reports::fallback::{fallback_attendance, fallback_performance, FallbackPolicy};
use crate::reports::types::DashboardReport;
use crate::reports::{compute_attendance_at, compute_leave_breakdown, compute_performance_at};

/// Holds the latest [`DashboardReport`] and knows how to rebuild it.
pub struct Dashboard<C = BasicClient> {
    api: ReportApi<C>,
    policy: FallbackPolicy,
    report: Option<DashboardReport>,
}

impl Dashboard<BasicClient> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_api(ReportApi::new(base_url), FallbackPolicy::default())
    }
}

impl<C: HttpClient> Dashboard<C> {
    pub fn with_api(api: ReportApi<C>, policy: FallbackPolicy) -> Self {
        Self {
            api,
            policy,
            report: None,
        }
    }

    /// The report from the last completed refresh, if any.
    pub fn report(&self) -> Option<&DashboardReport> {
        self.report.as_ref()
    }

    /// Runs one full fetch-aggregate cycle and replaces the held report.
    ///
    /// All four fetches run concurrently. Failures of required fetches
    /// are handled per the configured [`FallbackPolicy`]; the goals fetch
    /// degrades to empty inside [`ReportApi::goals`] before policy ever
    /// applies.
    pub async fn refresh(&mut self) -> Result<&DashboardReport, FetchError> {
        let (time_entries, leave_requests, goals, employees) = tokio::join!(
            self.api.time_entries(),
            self.api.leave_requests(),
            self.api.goals(),
            self.api.employees(),
        );

        let report = assemble_report(
            time_entries,
            leave_requests,
            goals,
            employees,
            self.policy,
            Utc::now(),
        )?;
        Ok(self.report.insert(report))
    }

    /// Drops the held report, returning to the pre-refresh state.
    pub fn clear(&mut self) {
        self.report = None;
    }
}

/// Builds a [`DashboardReport`] from settled fetch results.
///
/// Pure with respect to I/O, so the policy branches are testable without
/// a backend. Under [`FallbackPolicy::MaskWithFallback`] a failed
/// required fetch is logged and its section replaced: attendance and
/// performance get their static series, leave an empty breakdown. Under
/// [`FallbackPolicy::SurfaceError`] the first failure propagates.
pub fn assemble_report(
    time_entries: Result<Vec<TimeEntry>, FetchError>,
    leave_requests: Result<Vec<LeaveRequest>, FetchError>,
    goals: Vec<Goal>,
    employees: Result<Vec<Employee>, FetchError>,
    policy: FallbackPolicy,
    now: DateTime<Utc>,
) -> Result<DashboardReport, FetchError> {
    let (attendance, attendance_stats) = match time_entries {
        Ok(entries) => compute_attendance_at(&entries, now),
        Err(e) if policy == FallbackPolicy::MaskWithFallback => {
            error!(error = %e, "Time entry fetch failed, using fallback attendance");
            fallback_attendance()
        }
        Err(e) => return Err(e),
    };

    let leave = match leave_requests {
        Ok(requests) => compute_leave_breakdown(&requests),
        Err(e) if policy == FallbackPolicy::MaskWithFallback => {
            error!(error = %e, "Leave fetch failed, breakdown left empty");
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    // The employee directory is a required input for the performance
    // section even though only goal data feeds the math.
    let (performance, performance_stats) = match employees {
        Ok(_) => compute_performance_at(&goals, now),
        Err(e) if policy == FallbackPolicy::MaskWithFallback => {
            error!(error = %e, "Employee fetch failed, using fallback performance");
            fallback_performance()
        }
        Err(e) => return Err(e),
    };

    Ok(DashboardReport {
        attendance,
        attendance_stats,
        leave,
        performance,
        performance_stats,
        last_updated: now,
    })
}
