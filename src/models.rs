//! Raw entities as the workDay backend serves them.
//!
//! Field names mirror the backend JSON (camelCase, Mongo `_id`), so these
//! types deserialize the responses verbatim. Everything here is read-only
//! from the reporting pipeline's perspective.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee reference embedded in populated records such as time entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl EmployeeRef {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One clock-in/clock-out record.
///
/// An entry counts as "present" when `clock_out` is set, and as "late"
/// when the clock-in hour-of-day is past [`crate::reports::LATE_HOUR`].
/// Timestamps are interpreted in UTC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "employeeId")]
    pub employee: EmployeeRef,
    #[serde(rename = "clockIn")]
    pub clock_in: DateTime<Utc>,
    #[serde(rename = "clockOut")]
    pub clock_out: Option<DateTime<Utc>>,
    #[serde(rename = "totalHours")]
    pub total_hours: Option<f64>,
    #[serde(rename = "overtimeHours")]
    pub overtime_hours: Option<f64>,
}

impl TimeEntry {
    pub fn is_present(&self) -> bool {
        self.clock_out.is_some()
    }
}

/// A leave request; the free-text `reason` is what gets classified into
/// a leave category for the breakdown chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    pub reason: String,
    pub status: String,
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,
}

/// An employee goal. Only the completion ratio is consumed by the
/// performance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    pub title: String,
    pub progress: f64,
    pub status: String,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.status == "Completed"
    }
}

/// Directory record, used only to enrich other records with display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
}

/// Deduction heads on a payroll record, as the backend stores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deductions {
    pub tax: f64,
    pub pf: f64,
    #[serde(rename = "professionalTax")]
    pub professional_tax: f64,
    pub hra: f64,
    #[serde(rename = "medicalAllowance")]
    pub medical_allowance: f64,
    #[serde(rename = "specialAllowance")]
    pub special_allowance: f64,
    pub insurance: Option<f64>,
    pub retirement: Option<f64>,
}

impl Deductions {
    /// Sum over every deduction head, including the optional ones.
    pub fn total(&self) -> f64 {
        self.tax
            + self.pf
            + self.professional_tax
            + self.hra
            + self.medical_allowance
            + self.special_allowance
            + self.insurance.unwrap_or(0.0)
            + self.retirement.unwrap_or(0.0)
    }
}

/// A payroll record for one employee and pay period. Consumed by the
/// presenter for display formatting and the `final_bill` derivation;
/// never recomputed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayroll {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    #[serde(rename = "employeeName")]
    pub employee_name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    #[serde(rename = "payPeriodStart")]
    pub pay_period_start: DateTime<Utc>,
    #[serde(rename = "payPeriodEnd")]
    pub pay_period_end: DateTime<Utc>,
    #[serde(rename = "regularHours")]
    pub regular_hours: f64,
    #[serde(rename = "overtimeHours")]
    pub overtime_hours: f64,
    pub wage: f64,
    #[serde(rename = "overtimeRate")]
    pub overtime_rate: f64,
    #[serde(rename = "grossPay")]
    pub gross_pay: f64,
    pub deductions: Deductions,
    #[serde(rename = "netPay")]
    pub net_pay: f64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_entry_deserializes_backend_json() {
        let json = r#"{
            "_id": "te1",
            "employeeId": {"_id": "e1", "firstName": "Asha", "lastName": "Rao"},
            "clockIn": "2024-03-05T08:30:00.000Z",
            "clockOut": "2024-03-05T17:00:00.000Z",
            "totalHours": 8.5
        }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "te1");
        assert_eq!(entry.employee.display_name(), "Asha Rao");
        assert!(entry.is_present());
        assert_eq!(entry.overtime_hours, None);
    }

    #[test]
    fn test_time_entry_without_clock_out_is_not_present() {
        let json = r#"{
            "_id": "te2",
            "employeeId": {"_id": "e1", "firstName": "Asha", "lastName": "Rao"},
            "clockIn": "2024-03-06T09:30:00.000Z"
        }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_present());
    }

    #[test]
    fn test_goal_completed_status_is_exact() {
        let mut goal = Goal {
            id: "g1".into(),
            employee_id: "e1".into(),
            title: "Onboarding".into(),
            progress: 100.0,
            status: "Completed".into(),
        };
        assert!(goal.is_completed());
        goal.status = "In Progress".into();
        assert!(!goal.is_completed());
    }

    #[test]
    fn test_deductions_total_includes_optional_heads() {
        let d = Deductions {
            tax: 100.0,
            pf: 50.0,
            professional_tax: 20.0,
            hra: 10.0,
            medical_allowance: 5.0,
            special_allowance: 5.0,
            insurance: Some(30.0),
            retirement: None,
        };
        assert_eq!(d.total(), 220.0);
    }
}
