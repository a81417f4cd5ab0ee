//! Attendance record model.
//!
//! An [`AttendanceRecord`] is one employee's attendance for one work date, in
//! the normalized shape the engine consumes. Loosely-typed rows from the
//! attendance source are converted into this shape before any calculation runs.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One employee's attendance for a single work date.
///
/// `(user_id, work_date)` is unique within a record set. A missing
/// `check_in_time` means the employee did not work that day.
///
/// # Example
///
/// ```
/// use shift_reconciler::models::AttendanceRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     user_id: "emp_001".to_string(),
///     work_date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///     shift_name: Some("Day Shift".to_string()),
///     check_in_time: None,
///     check_out_time: None,
///     regular_hours: Decimal::new(7, 0),
///     overtime_hours: Decimal::ZERO,
///     delay_minutes: 0,
///     total_break_minutes: 30,
/// };
/// assert!(!record.is_working_day());
/// assert_eq!(record.total_hours(), Decimal::new(7, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Opaque identifier of the employee.
    pub user_id: String,
    /// The calendar date this record applies to.
    pub work_date: NaiveDate,
    /// Shift label, e.g. "Day Shift" or "Night Shift".
    #[serde(default)]
    pub shift_name: Option<String>,
    /// When the employee checked in, if they worked.
    #[serde(default)]
    pub check_in_time: Option<NaiveDateTime>,
    /// When the employee checked out.
    #[serde(default)]
    pub check_out_time: Option<NaiveDateTime>,
    /// Straight-time hours actually worked.
    pub regular_hours: Decimal,
    /// Overtime hours actually worked, recorded independently of regular hours.
    pub overtime_hours: Decimal,
    /// Recorded lateness at check-in, in minutes.
    pub delay_minutes: u32,
    /// Minutes spent on break during the shift.
    pub total_break_minutes: u32,
}

impl AttendanceRecord {
    /// Returns true if the employee checked in on this date.
    pub fn is_working_day(&self) -> bool {
        self.check_in_time.is_some()
    }

    /// Regular plus overtime hours, saturating at `Decimal::MAX`.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours.saturating_add(self.overtime_hours)
    }

    /// Regular plus overtime hours, or `None` if the sum is not representable.
    pub fn checked_total_hours(&self) -> Option<Decimal> {
        self.regular_hours.checked_add(self.overtime_hours)
    }

    /// Returns true if either hour field is negative.
    pub fn has_negative_hours(&self) -> bool {
        self.regular_hours < Decimal::ZERO || self.overtime_hours < Decimal::ZERO
    }

    /// Returns true if the record carries worked hours but no check-in.
    pub fn has_hours_without_check_in(&self) -> bool {
        !self.is_working_day() && self.total_hours() > Decimal::ZERO
    }

    /// Returns true if both timestamps are present and check-out precedes check-in.
    pub fn checks_out_before_check_in(&self) -> bool {
        match (self.check_in_time, self.check_out_time) {
            (Some(check_in), Some(check_out)) => check_out < check_in,
            _ => false,
        }
    }
}
