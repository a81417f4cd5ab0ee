//! Calculation logic for the shift reconciliation engine.
//!
//! This module contains duration formatting, the expected-hours policy, the
//! per-record delay-to-finish and net-hours calculators, the aggregate
//! reducer, smart offsetting between overtime and delay, and the
//! reconciliation pipeline that ties them together.

mod aggregate;
mod delay_to_finish;
mod expected_hours;
mod formatting;
mod net_hours;
mod offsetting;
mod reconcile;

pub use aggregate::{
    RecordTotals, build_summary, summarize_by_employee, summarize_records, total_records,
};
pub use delay_to_finish::{DelayToFinish, DelayToFinishResult, calculate_delay_to_finish};
pub use expected_hours::{DAY_SHIFT, DEFAULT_EXPECTED_HOURS, ExpectedHoursPolicy, NIGHT_SHIFT};
pub use formatting::{ALL_CLEAR, ZERO_DURATION, format_duration_hours, format_duration_minutes};
pub use net_hours::calculate_net_hours;
pub use offsetting::{OffsettingResolution, resolve_offsetting};
pub use reconcile::{
    CHECK_OUT_BEFORE_CHECK_IN, HOURS_WITHOUT_CHECK_IN, collect_warnings, derive_record_metrics,
    reconcile, validate_records,
};
