//! Report aggregation: pure reductions of raw collections into the
//! derived series and stats shown on the analytics dashboard.
//!
//! Every function in this module is deterministic and side-effect free;
//! given the same input (and reference date) it produces the same output.

pub mod attendance;
pub mod fallback;
pub mod leave;
pub mod performance;
pub mod types;
pub mod window;

pub use attendance::{compute_attendance, compute_attendance_at, LATE_HOUR};
pub use fallback::FallbackPolicy;
pub use leave::{classify_reason, compute_leave_breakdown, LeaveType};
pub use performance::{completion_ratio, compute_performance, compute_performance_at};
pub use window::WINDOW_MONTHS;
