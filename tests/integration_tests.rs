use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;

use workday_reports::dashboard::assemble_report;
use workday_reports::fetch::FetchError;
use workday_reports::models::{EmployeeRef, Goal, LeaveRequest, TimeEntry};
use workday_reports::present::leave_slices;
use workday_reports::reports::FallbackPolicy;

fn entry(clock_in: &str, clock_out: Option<&str>) -> TimeEntry {
    TimeEntry {
        id: "te".into(),
        employee: EmployeeRef {
            id: "e1".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
        },
        clock_in: clock_in.parse().unwrap(),
        clock_out: clock_out.map(|s| s.parse().unwrap()),
        total_hours: None,
        overtime_hours: None,
    }
}

fn leave(reason: &str) -> LeaveRequest {
    LeaveRequest {
        id: "lr".into(),
        employee_id: "e1".into(),
        reason: reason.into(),
        status: "approved".into(),
        start_date: "2024-05-01T00:00:00Z".parse().unwrap(),
        end_date: "2024-05-03T00:00:00Z".parse().unwrap(),
    }
}

fn goal(status: &str) -> Goal {
    Goal {
        id: "g".into(),
        employee_id: "e1".into(),
        title: "Certification".into(),
        progress: 100.0,
        status: status.into(),
    }
}

fn june_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn test_full_report_from_raw_collections() {
    let time_entries = vec![
        entry("2024-05-02T08:30:00Z", Some("2024-05-02T17:00:00Z")),
        entry("2024-05-03T10:30:00Z", Some("2024-05-03T19:00:00Z")),
        entry("2024-06-04T09:30:00Z", None),
    ];
    let leaves = vec![leave("Family vacation"), leave("Sick - flu")];
    let goals = vec![goal("Completed"), goal("Completed"), goal("In Progress"), goal("Completed")];

    let report = assemble_report(
        Ok(time_entries),
        Ok(leaves),
        goals,
        Ok(vec![]),
        FallbackPolicy::SurfaceError,
        june_2024(),
    )
    .expect("all required fetches succeeded");

    // Window invariant: six months, oldest first, ending at June.
    assert_eq!(report.attendance.len(), 6);
    assert_eq!(report.attendance[0].month, "Jan");
    assert_eq!(report.attendance[5].month, "Jun");

    // Per month: present + absent == bucketed total, absent never negative.
    let may = report.attendance.iter().find(|m| m.month == "May").unwrap();
    assert_eq!((may.present, may.absent, may.late), (2, 0, 1));
    let june = report.attendance.iter().find(|m| m.month == "Jun").unwrap();
    assert_eq!((june.present, june.absent, june.late), (0, 1, 0));

    // Overall stats: 2 of 3 present, 1 late.
    assert_eq!(report.attendance_stats.avg_attendance, 67);
    assert_eq!(report.attendance_stats.perfect_attendance, 1);

    // Leave breakdown in fixed category order with rounded shares.
    assert_eq!(report.leave.len(), 2);
    assert_eq!(report.leave[0].leave_type, "Vacation");
    assert_eq!(report.leave[0].percentage, 50);
    assert_eq!(report.leave[1].leave_type, "Sick Leave");

    // Performance anchored on the 0.75 completion ratio.
    let productivity: Vec<u32> = report.performance.iter().map(|m| m.productivity).collect();
    assert_eq!(productivity, vec![70, 72, 74, 76, 78, 80]);
    assert_eq!(report.performance_stats.avg_productivity, 75);

    // Presenter attaches palette colors by position.
    let slices = leave_slices(&report.leave);
    assert_eq!(slices[0].color, "#0088FE");
    assert_eq!(slices[1].color, "#00C49F");
}

#[test]
fn test_masked_refresh_always_renders_something() {
    let unavailable = || FetchError::Response {
        url: "http://localhost:5000/workDay".into(),
        status: StatusCode::BAD_GATEWAY,
    };

    let report = assemble_report(
        Err(unavailable()),
        Err(unavailable()),
        vec![],
        Err(unavailable()),
        FallbackPolicy::MaskWithFallback,
        june_2024(),
    )
    .expect("mask policy never fails");

    assert_eq!(report.attendance.len(), 6);
    assert!(report.attendance.iter().all(|m| m.present > 0));
    assert!(report.leave.is_empty());
    assert_eq!(report.performance.len(), 6);
    assert_eq!(report.performance_stats.avg_retention, 96);
}
