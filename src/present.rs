//! Display shaping: chart palette assignment, currency and date
//! formatting, and the derived payroll display values that are not part
//! of any persisted record.

use serde::Serialize;

use crate::models::EmployeePayroll;
use crate::reports::types::LeaveTypeBreakdown;

/// Chart palette, assigned cyclically by slice position.
pub const CHART_COLORS: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D",
];

/// A leave breakdown entry with its pie-chart color attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveSlice {
    pub leave_type: String,
    pub count: u32,
    pub percentage: u32,
    pub color: &'static str,
}

/// Attaches a palette color to each breakdown entry, cycling through
/// [`CHART_COLORS`] by position.
pub fn leave_slices(breakdown: &[LeaveTypeBreakdown]) -> Vec<LeaveSlice> {
    breakdown
        .iter()
        .enumerate()
        .map(|(i, entry)| LeaveSlice {
            leave_type: entry.leave_type.clone(),
            count: entry.count,
            percentage: entry.percentage,
            color: CHART_COLORS[i % CHART_COLORS.len()],
        })
        .collect()
}

/// Formats an amount as Indian rupees with lakh/crore digit grouping,
/// e.g. `₹12,34,567.50`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let rupees = (cents / 100).to_string();
    let paise = cents % 100;

    let grouped = if rupees.len() <= 3 {
        rupees
    } else {
        // Last three digits, then groups of two.
        let (head, tail) = rupees.split_at(rupees.len() - 3);
        let mut groups = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    format!(
        "{}₹{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        paise
    )
}

/// Formats a timestamp as a dd/mm/yyyy date.
pub fn format_date(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%d/%m/%Y").to_string()
}

/// Overtime earnings on top of net pay; a display-only value the backend
/// does not store.
pub fn final_bill(payroll: &EmployeePayroll) -> f64 {
    payroll.overtime_hours * payroll.overtime_rate + payroll.net_pay
}

/// One payroll line as exported to CSV.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollRow {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub position: String,
    pub pay_period: String,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub wage: String,
    pub gross_pay: String,
    pub net_pay: String,
    pub final_bill: String,
    pub status: String,
}

/// Projects payroll records into formatted export rows.
pub fn payroll_rows(payrolls: &[EmployeePayroll]) -> Vec<PayrollRow> {
    payrolls
        .iter()
        .map(|p| PayrollRow {
            employee_id: p.employee_id.clone(),
            employee_name: p.employee_name.clone().unwrap_or_default(),
            department: p.department.clone().unwrap_or_default(),
            position: p.position.clone().unwrap_or_default(),
            pay_period: format!(
                "{} to {}",
                format_date(p.pay_period_start),
                format_date(p.pay_period_end)
            ),
            regular_hours: p.regular_hours,
            overtime_hours: p.overtime_hours,
            wage: format_currency(p.wage),
            gross_pay: format_currency(p.gross_pay),
            net_pay: format_currency(p.net_pay),
            final_bill: format_currency(final_bill(p)),
            status: p.status.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Deductions;
    use crate::reports::types::LeaveTypeBreakdown;

    fn breakdown(label: &str) -> LeaveTypeBreakdown {
        LeaveTypeBreakdown {
            leave_type: label.into(),
            count: 1,
            percentage: 10,
        }
    }

    fn payroll() -> EmployeePayroll {
        EmployeePayroll {
            id: "p1".into(),
            employee_id: "e1".into(),
            employee_name: Some("Asha Rao".into()),
            department: Some("Engineering".into()),
            position: None,
            pay_period_start: "2024-03-01T00:00:00Z".parse().unwrap(),
            pay_period_end: "2024-03-15T00:00:00Z".parse().unwrap(),
            regular_hours: 80.0,
            overtime_hours: 10.0,
            wage: 500.0,
            overtime_rate: 750.0,
            gross_pay: 47500.0,
            deductions: Deductions {
                tax: 4000.0,
                pf: 1800.0,
                professional_tax: 200.0,
                hra: 0.0,
                medical_allowance: 0.0,
                special_allowance: 0.0,
                insurance: None,
                retirement: None,
            },
            net_pay: 41500.0,
            status: "approved".into(),
        }
    }

    #[test]
    fn test_palette_wraps_around() {
        let entries: Vec<_> = (0..8).map(|i| breakdown(&format!("t{i}"))).collect();
        let slices = leave_slices(&entries);
        assert_eq!(slices[0].color, CHART_COLORS[0]);
        assert_eq!(slices[5].color, CHART_COLORS[5]);
        assert_eq!(slices[6].color, CHART_COLORS[0]);
        assert_eq!(slices[7].color, CHART_COLORS[1]);
    }

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(999.0), "₹999.00");
        assert_eq!(format_currency(1000.0), "₹1,000.00");
        assert_eq!(format_currency(123456.78), "₹1,23,456.78");
        assert_eq!(format_currency(12345678.9), "₹1,23,45,678.90");
        assert_eq!(format_currency(-1500.5), "-₹1,500.50");
    }

    #[test]
    fn test_final_bill_adds_overtime_to_net_pay() {
        let p = payroll();
        assert_eq!(final_bill(&p), 10.0 * 750.0 + 41500.0);
    }

    #[test]
    fn test_payroll_row_formatting() {
        let rows = payroll_rows(&[payroll()]);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.employee_name, "Asha Rao");
        assert_eq!(row.position, "");
        assert_eq!(row.pay_period, "01/03/2024 to 15/03/2024");
        assert_eq!(row.net_pay, "₹41,500.00");
        assert_eq!(row.final_bill, "₹49,000.00");
    }
}
