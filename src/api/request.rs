//! Request types for the shift reconciliation API.
//!
//! Attendance rows arrive in the loosely-typed shape an attendance join
//! returns: numeric columns may be missing or null. They are normalized into
//! [`AttendanceRecord`] here, before any calculation runs.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, RecordFilter};

/// Request body for the `/reconcile` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The attendance rows to reconcile.
    pub records: Vec<AttendanceRecordRequest>,
    /// Employee and date selection. Omit to select everything.
    #[serde(default)]
    pub filter: RecordFilter,
}

/// One attendance row as supplied by the attendance source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// Identifier of the employee.
    pub user_id: String,
    /// The work date.
    pub work_date: NaiveDate,
    /// Shift label.
    #[serde(default)]
    pub shift_name: Option<String>,
    /// Check-in timestamp.
    #[serde(default)]
    pub check_in_time: Option<NaiveDateTime>,
    /// Check-out timestamp.
    #[serde(default)]
    pub check_out_time: Option<NaiveDateTime>,
    /// Regular hours worked; missing means zero.
    #[serde(default)]
    pub regular_hours: Option<Decimal>,
    /// Overtime hours worked; missing means zero.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Check-in delay in minutes; missing means zero.
    #[serde(default)]
    pub delay_minutes: Option<u32>,
    /// Break minutes; missing means zero.
    #[serde(default)]
    pub total_break_minutes: Option<u32>,
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            user_id: req.user_id,
            work_date: req.work_date,
            shift_name: req.shift_name.filter(|name| !name.is_empty()),
            check_in_time: req.check_in_time,
            check_out_time: req.check_out_time,
            regular_hours: req.regular_hours.unwrap_or_default(),
            overtime_hours: req.overtime_hours.unwrap_or_default(),
            delay_minutes: req.delay_minutes.unwrap_or_default(),
            total_break_minutes: req.total_break_minutes.unwrap_or_default(),
        }
    }
}

/// Request body for the `/delay-to-finish` endpoint: a single row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayToFinishRequest {
    /// Break minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Check-in delay in minutes.
    #[serde(default)]
    pub delay_minutes: u32,
    /// Regular hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Shift label.
    #[serde(default)]
    pub shift_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_missing_numeric_columns_default_to_zero() {
        let json = r#"{
            "user_id": "emp_001",
            "work_date": "2025-03-04",
            "regular_hours": null
        }"#;

        let req: AttendanceRecordRequest = serde_json::from_str(json).unwrap();
        let record: AttendanceRecord = req.into();

        assert_eq!(record.regular_hours, Decimal::ZERO);
        assert_eq!(record.overtime_hours, Decimal::ZERO);
        assert_eq!(record.delay_minutes, 0);
        assert_eq!(record.total_break_minutes, 0);
        assert!(!record.is_working_day());
    }

    #[test]
    fn test_numbers_and_strings_both_accepted_for_hours() {
        let json = r#"{
            "user_id": "emp_001",
            "work_date": "2025-03-04",
            "shift_name": "Night Shift",
            "check_in_time": "2025-03-04T21:00:00",
            "regular_hours": 7.5,
            "overtime_hours": "1.25",
            "delay_minutes": 15,
            "total_break_minutes": 30
        }"#;

        let record: AttendanceRecord =
            serde_json::from_str::<AttendanceRecordRequest>(json).unwrap().into();

        assert_eq!(record.shift_name.as_deref(), Some("Night Shift"));
        assert_eq!(record.regular_hours, dec("7.5"));
        assert_eq!(record.overtime_hours, dec("1.25"));
        assert_eq!(record.delay_minutes, 15);
        assert!(record.is_working_day());
    }

    #[test]
    fn test_empty_shift_name_treated_as_absent() {
        let json = r#"{
            "user_id": "emp_001",
            "work_date": "2025-03-04",
            "shift_name": ""
        }"#;

        let record: AttendanceRecord =
            serde_json::from_str::<AttendanceRecordRequest>(json).unwrap().into();
        assert_eq!(record.shift_name, None);
    }

    #[test]
    fn test_reconcile_request_filter_defaults_to_all() {
        let json = r#"{ "records": [] }"#;

        let req: ReconcileRequest = serde_json::from_str(json).unwrap();
        assert!(req.filter.is_empty());
        assert!(req.records.is_empty());
    }

    #[test]
    fn test_delay_to_finish_request_defaults() {
        let json = r#"{ "regular_hours": 5 }"#;

        let req: DelayToFinishRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.regular_hours, dec("5"));
        assert_eq!(req.overtime_hours, Decimal::ZERO);
        assert_eq!(req.delay_minutes, 0);
        assert_eq!(req.shift_name, None);
    }
}
