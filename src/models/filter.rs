//! Record filter model.
//!
//! A [`RecordFilter`] selects the attendance records that feed a summary:
//! optionally a single employee, and optionally a date window given either as
//! an inclusive range or as a calendar month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::AttendanceRecord;

/// The date window of a [`RecordFilter`].
///
/// # Example
///
/// ```
/// use shift_reconciler::models::DateFilter;
/// use chrono::NaiveDate;
///
/// let march = DateFilter::Month { year: 2025, month: 3 };
/// assert!(march.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
/// assert!(!march.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateFilter {
    /// An inclusive date range.
    Range {
        /// First included date.
        start_date: NaiveDate,
        /// Last included date.
        end_date: NaiveDate,
    },
    /// A calendar month.
    Month {
        /// The calendar year.
        year: i32,
        /// The month number, 1 through 12.
        month: u32,
    },
}

impl DateFilter {
    /// Checks whether a date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            DateFilter::Range {
                start_date,
                end_date,
            } => date >= start_date && date <= end_date,
            DateFilter::Month { year, month } => date.year() == year && date.month() == month,
        }
    }

    fn validate(&self) -> EngineResult<()> {
        match *self {
            DateFilter::Range {
                start_date,
                end_date,
            } if end_date < start_date => Err(EngineError::InvalidFilter {
                message: format!("end date {} is before start date {}", end_date, start_date),
            }),
            DateFilter::Month { month, .. } if !(1..=12).contains(&month) => {
                Err(EngineError::InvalidFilter {
                    message: format!("month must be between 1 and 12, got {}", month),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Selects attendance records by employee and date window.
///
/// An empty filter selects every record.
///
/// # Example
///
/// ```
/// use shift_reconciler::models::RecordFilter;
///
/// let filter = RecordFilter::for_employee("emp_001").with_month(2025, 3);
/// assert!(filter.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// The selected employee, or `None` for all employees.
    #[serde(default)]
    pub user_id: Option<String>,
    /// The selected date window, or `None` for all dates.
    #[serde(default)]
    pub dates: Option<DateFilter>,
}

impl RecordFilter {
    /// A filter that selects every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter that selects one employee's records.
    pub fn for_employee(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            dates: None,
        }
    }

    /// Restricts the filter to a calendar month.
    pub fn with_month(mut self, year: i32, month: u32) -> Self {
        self.dates = Some(DateFilter::Month { year, month });
        self
    }

    /// Restricts the filter to an inclusive date range.
    pub fn with_range(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.dates = Some(DateFilter::Range {
            start_date,
            end_date,
        });
        self
    }

    /// Checks that the date window is well formed.
    pub fn validate(&self) -> EngineResult<()> {
        match &self.dates {
            Some(dates) => dates.validate(),
            None => Ok(()),
        }
    }

    /// Checks whether a record is selected by this filter.
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        let employee_matches = self
            .user_id
            .as_deref()
            .is_none_or(|user_id| record.user_id == user_id);
        let date_matches = self
            .dates
            .is_none_or(|dates| dates.contains(record.work_date));

        employee_matches && date_matches
    }

    /// Returns the records selected by this filter, in input order.
    pub fn apply<'a>(
        &self,
        records: &'a [AttendanceRecord],
    ) -> EngineResult<Vec<&'a AttendanceRecord>> {
        self.validate()?;
        Ok(records.iter().filter(|r| self.matches(r)).collect())
    }

    /// Returns true if the filter selects everything.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.dates.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_record(user_id: &str, date: &str) -> AttendanceRecord {
        AttendanceRecord {
            user_id: user_id.to_string(),
            work_date: make_date(date),
            shift_name: None,
            check_in_time: None,
            check_out_time: None,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            delay_minutes: 0,
            total_break_minutes: 0,
        }
    }

    fn sample_records() -> Vec<AttendanceRecord> {
        vec![
            make_record("emp_001", "2025-02-28"),
            make_record("emp_001", "2025-03-01"),
            make_record("emp_002", "2025-03-15"),
            make_record("emp_001", "2025-03-31"),
            make_record("emp_002", "2025-04-01"),
        ]
    }

    #[test]
    fn test_empty_filter_selects_everything() {
        let records = sample_records();
        let filter = RecordFilter::all();

        assert!(filter.is_empty());
        assert_eq!(filter.apply(&records).unwrap().len(), 5);
    }

    #[test]
    fn test_employee_filter() {
        let records = sample_records();
        let selected = RecordFilter::for_employee("emp_002").apply(&records).unwrap();

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|r| r.user_id == "emp_002"));
    }

    #[test]
    fn test_month_filter_includes_month_boundaries() {
        let records = sample_records();
        let selected = RecordFilter::all()
            .with_month(2025, 3)
            .apply(&records)
            .unwrap();

        let dates: Vec<NaiveDate> = selected.iter().map(|r| r.work_date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2025-03-01"),
                make_date("2025-03-15"),
                make_date("2025-03-31")
            ]
        );
    }

    #[test]
    fn test_range_filter_is_inclusive() {
        let records = sample_records();
        let selected = RecordFilter::all()
            .with_range(make_date("2025-03-01"), make_date("2025-03-15"))
            .apply(&records)
            .unwrap();

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_employee_and_month_combined() {
        let records = sample_records();
        let selected = RecordFilter::for_employee("emp_001")
            .with_month(2025, 3)
            .apply(&records)
            .unwrap();

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let records = sample_records();
        let result = RecordFilter::all()
            .with_range(make_date("2025-03-15"), make_date("2025-03-01"))
            .apply(&records);

        match result {
            Err(EngineError::InvalidFilter { message }) => {
                assert!(message.contains("before start date"));
            }
            _ => panic!("Expected InvalidFilter error"),
        }
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        let filter = RecordFilter::all().with_month(2025, 13);
        assert!(matches!(
            filter.validate(),
            Err(EngineError::InvalidFilter { .. })
        ));
    }

    #[test]
    fn test_filter_deserialization() {
        let json = r#"{
            "user_id": "emp_001",
            "dates": { "type": "month", "year": 2025, "month": 3 }
        }"#;

        let filter: RecordFilter = serde_json::from_str(json).unwrap();
        assert_eq!(filter, RecordFilter::for_employee("emp_001").with_month(2025, 3));
    }
}
