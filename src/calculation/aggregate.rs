//! Aggregate summary over a set of attendance records.
//!
//! The raw sums form a commutative monoid ([`RecordTotals`]), so they can be
//! folded in any order or split across workers and combined. The aggregate
//! delay-to-finish is derived from total break and total delay minutes, not
//! from the per-record shortfall.

use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AggregateSummary, AttendanceRecord};

use super::formatting::MINUTES_PER_HOUR;
use super::offsetting::{OffsettingResolution, resolve_offsetting};

/// Raw sums over a set of attendance records.
///
/// # Example
///
/// ```
/// use shift_reconciler::calculation::RecordTotals;
///
/// let totals = RecordTotals::EMPTY + RecordTotals::EMPTY;
/// assert_eq!(totals, RecordTotals::EMPTY);
/// assert_eq!(totals.working_days_count, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordTotals {
    /// Sum of regular hours.
    pub total_regular_hours: Decimal,
    /// Sum of overtime hours.
    pub raw_overtime_hours: Decimal,
    /// Sum of check-in delay minutes.
    pub total_delay_minutes: u64,
    /// Sum of break minutes.
    pub total_break_minutes: u64,
    /// Number of records with a check-in.
    pub working_days_count: u32,
}

impl RecordTotals {
    /// The identity element: totals over no records.
    pub const EMPTY: Self = Self {
        total_regular_hours: Decimal::ZERO,
        raw_overtime_hours: Decimal::ZERO,
        total_delay_minutes: 0,
        total_break_minutes: 0,
        working_days_count: 0,
    };

    /// Totals for a single record.
    pub fn from_record(record: &AttendanceRecord) -> Self {
        Self {
            total_regular_hours: record.regular_hours,
            raw_overtime_hours: record.overtime_hours,
            total_delay_minutes: u64::from(record.delay_minutes),
            total_break_minutes: u64::from(record.total_break_minutes),
            working_days_count: u32::from(record.is_working_day()),
        }
    }

    /// Average worked hours (regular plus overtime) per working day.
    ///
    /// Zero when there are no working days.
    pub fn average_hours_per_day(&self) -> Decimal {
        if self.working_days_count == 0 {
            return Decimal::ZERO;
        }
        self.total_regular_hours
            .saturating_add(self.raw_overtime_hours)
            / Decimal::from(self.working_days_count)
    }

    /// Aggregate delay-to-finish: (break minutes + delay minutes) / 60.
    pub fn raw_delay_to_finish_hours(&self) -> Decimal {
        Decimal::from(
            self.total_break_minutes
                .saturating_add(self.total_delay_minutes),
        ) / MINUTES_PER_HOUR
    }
}

impl RecordTotals {
    /// Adds two totals, or returns `None` if any sum is not representable.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            total_regular_hours: self
                .total_regular_hours
                .checked_add(other.total_regular_hours)?,
            raw_overtime_hours: self
                .raw_overtime_hours
                .checked_add(other.raw_overtime_hours)?,
            total_delay_minutes: self
                .total_delay_minutes
                .checked_add(other.total_delay_minutes)?,
            total_break_minutes: self
                .total_break_minutes
                .checked_add(other.total_break_minutes)?,
            working_days_count: self
                .working_days_count
                .checked_add(other.working_days_count)?,
        })
    }
}

/// Saturating addition. For non-negative totals this stays associative and
/// commutative; use [`RecordTotals::checked_add`] to detect overflow.
impl Add for RecordTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total_regular_hours: self
                .total_regular_hours
                .saturating_add(other.total_regular_hours),
            raw_overtime_hours: self
                .raw_overtime_hours
                .saturating_add(other.raw_overtime_hours),
            total_delay_minutes: self
                .total_delay_minutes
                .saturating_add(other.total_delay_minutes),
            total_break_minutes: self
                .total_break_minutes
                .saturating_add(other.total_break_minutes),
            working_days_count: self
                .working_days_count
                .saturating_add(other.working_days_count),
        }
    }
}

impl Sum for RecordTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::EMPTY, Add::add)
    }
}

impl<'a> Sum<&'a AttendanceRecord> for RecordTotals {
    fn sum<I: Iterator<Item = &'a AttendanceRecord>>(iter: I) -> Self {
        iter.map(RecordTotals::from_record).sum()
    }
}

/// Folds records into their raw totals.
pub fn total_records<'a, I>(records: I) -> RecordTotals
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records.into_iter().sum()
}

/// Combines raw totals and an offsetting resolution into a summary.
pub fn build_summary(totals: &RecordTotals, resolution: &OffsettingResolution) -> AggregateSummary {
    AggregateSummary {
        total_regular_hours: totals.total_regular_hours,
        raw_overtime_hours: totals.raw_overtime_hours,
        total_delay_minutes: totals.total_delay_minutes,
        total_break_minutes: totals.total_break_minutes,
        working_days_count: totals.working_days_count,
        average_hours_per_day: totals.average_hours_per_day(),
        raw_delay_to_finish_hours: totals.raw_delay_to_finish_hours(),
        net_overtime_hours: resolution.net_overtime_hours,
        net_delay_hours: resolution.net_delay_hours,
        offsetting_type: resolution.offsetting_type,
        has_smart_offsetting: resolution.has_smart_offsetting,
    }
}

/// Summarizes a set of records, applying smart offsetting.
///
/// The result does not depend on the order of the records.
///
/// # Example
///
/// ```
/// use shift_reconciler::calculation::summarize_records;
/// use shift_reconciler::models::{AttendanceRecord, OffsettingType};
/// use rust_decimal::Decimal;
///
/// let records: Vec<AttendanceRecord> = Vec::new();
/// let summary = summarize_records(&records);
/// assert_eq!(summary.working_days_count, 0);
/// assert_eq!(summary.average_hours_per_day, Decimal::ZERO);
/// assert_eq!(summary.net_delay_display(), "All Clear");
/// assert_eq!(summary.offsetting_type, OffsettingType::DelayCoversOvertime);
/// ```
pub fn summarize_records<'a, I>(records: I) -> AggregateSummary
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let totals = total_records(records);
    let resolution = resolve_offsetting(
        totals.raw_overtime_hours,
        totals.raw_delay_to_finish_hours(),
        1,
    );
    build_summary(&totals, &resolution)
}

/// Summarizes records separately for each employee, keyed by user id.
pub fn summarize_by_employee<'a, I>(records: I) -> BTreeMap<String, AggregateSummary>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut grouped: BTreeMap<&str, RecordTotals> = BTreeMap::new();
    for record in records {
        let totals = grouped.entry(record.user_id.as_str()).or_default();
        *totals = *totals + RecordTotals::from_record(record);
    }

    grouped
        .into_iter()
        .map(|(user_id, totals)| {
            let resolution = resolve_offsetting(
                totals.raw_overtime_hours,
                totals.raw_delay_to_finish_hours(),
                1,
            );
            (user_id.to_string(), build_summary(&totals, &resolution))
        })
        .collect()
}
