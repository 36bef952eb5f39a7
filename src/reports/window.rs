//! The trailing calendar-month window every monthly series is bucketed
//! into.

use chrono::{DateTime, Datelike, Utc};

/// Number of calendar months in the reporting window.
pub const WINDOW_MONTHS: usize = 6;

/// One calendar month, identified by year and 1-based month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(ts: DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }

    /// Three-letter month label used on chart axes.
    pub fn label(&self) -> &'static str {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        MONTHS[(self.month - 1) as usize]
    }

    fn pred(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

/// Returns the trailing [`WINDOW_MONTHS`] months ending at (and
/// including) the month of `now`, oldest first.
pub fn trailing_months(now: DateTime<Utc>) -> Vec<MonthKey> {
    let mut key = MonthKey::of(now);
    let mut months = vec![key];
    for _ in 1..WINDOW_MONTHS {
        key = key.pred();
        months.push(key);
    }
    months.reverse();
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_window_has_six_months_oldest_first() {
        let months = trailing_months(at(2024, 6));
        assert_eq!(months.len(), WINDOW_MONTHS);
        assert_eq!(months[0], MonthKey { year: 2024, month: 1 });
        assert_eq!(months[5], MonthKey { year: 2024, month: 6 });
    }

    #[test]
    fn test_window_spans_year_boundary() {
        let months = trailing_months(at(2024, 2));
        assert_eq!(months[0], MonthKey { year: 2023, month: 9 });
        assert_eq!(months[4], MonthKey { year: 2024, month: 1 });
        assert_eq!(months[5], MonthKey { year: 2024, month: 2 });
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(MonthKey { year: 2024, month: 1 }.label(), "Jan");
        assert_eq!(MonthKey { year: 2024, month: 12 }.label(), "Dec");
    }
}
