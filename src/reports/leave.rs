//! Leave-type classification and breakdown aggregation.

use crate::models::LeaveRequest;
use crate::reports::types::LeaveTypeBreakdown;

/// Closed set of leave categories the free-text reason is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveType {
    Vacation,
    SickLeave,
    Personal,
    MaternityPaternity,
    Bereavement,
}

impl LeaveType {
    /// All categories, in the fixed order breakdown entries are emitted.
    pub const ALL: [LeaveType; 5] = [
        LeaveType::Vacation,
        LeaveType::SickLeave,
        LeaveType::Personal,
        LeaveType::MaternityPaternity,
        LeaveType::Bereavement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Vacation => "Vacation",
            LeaveType::SickLeave => "Sick Leave",
            LeaveType::Personal => "Personal",
            LeaveType::MaternityPaternity => "Maternity/Paternity",
            LeaveType::Bereavement => "Bereavement",
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::SickLeave => "sick",
            LeaveType::Personal => "personal",
            LeaveType::MaternityPaternity => "maternity",
            LeaveType::Bereavement => "bereavement",
        }
    }
}

/// Maps a free-text leave reason onto a [`LeaveType`].
///
/// Case-insensitive substring match in [`LeaveType::ALL`] order, first
/// match wins; anything unrecognized defaults to `Vacation`. Pure
/// function of the lowercased string, so classification is idempotent.
pub fn classify_reason(reason: &str) -> LeaveType {
    let reason = reason.to_lowercase();
    LeaveType::ALL
        .into_iter()
        .find(|t| reason.contains(t.keyword()))
        .unwrap_or(LeaveType::Vacation)
}

/// Counts leave requests per category and derives each category's share.
///
/// Only categories with a nonzero count are emitted, in [`LeaveType::ALL`]
/// order. Percentages are rounded independently per entry; an empty input
/// yields an empty breakdown rather than a division by zero.
pub fn compute_leave_breakdown(requests: &[LeaveRequest]) -> Vec<LeaveTypeBreakdown> {
    let mut counts = [0u32; LeaveType::ALL.len()];
    for request in requests {
        counts[classify_reason(&request.reason) as usize] += 1;
    }

    let total: u32 = counts.iter().sum();

    LeaveType::ALL
        .into_iter()
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .map(|(leave_type, count)| LeaveTypeBreakdown {
            leave_type: leave_type.label().to_string(),
            count,
            percentage: if total == 0 {
                0
            } else {
                (f64::from(count) / f64::from(total) * 100.0).round() as u32
            },
        })
        .collect()
}
