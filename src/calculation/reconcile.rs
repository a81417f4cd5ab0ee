//! End-to-end reconciliation of a set of attendance records.
//!
//! Applies the record filter, validates what it selects, derives the per-row
//! metrics, folds the aggregate summary and records every decision in an
//! audit trace.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, AuditWarning, DerivedRecordMetrics,
    ReconciliationReport, RecordFilter,
};

use super::aggregate::{RecordTotals, build_summary, total_records};
use super::delay_to_finish::calculate_delay_to_finish;
use super::expected_hours::ExpectedHoursPolicy;
use super::net_hours::calculate_net_hours;
use super::offsetting::resolve_offsetting;

/// Warning code for a record with hours but no check-in.
pub const HOURS_WITHOUT_CHECK_IN: &str = "HOURS_WITHOUT_CHECK_IN";

/// Warning code for a record whose check-out precedes its check-in.
pub const CHECK_OUT_BEFORE_CHECK_IN: &str = "CHECK_OUT_BEFORE_CHECK_IN";

/// Derives the display metrics for one record.
///
/// # Example
///
/// ```
/// use shift_reconciler::calculation::{derive_record_metrics, ExpectedHoursPolicy};
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
///     regular_hours: Decimal::from(6),
///     overtime_hours: Decimal::ZERO,
///     delay_minutes: 30,
///     total_break_minutes: 0,
/// };
///
/// let metrics = derive_record_metrics(&record, &ExpectedHoursPolicy::default());
/// assert_eq!(metrics.delay_to_finish, "1h");
/// assert_eq!(metrics.net_hours, Decimal::new(55, 1));
/// ```
pub fn derive_record_metrics(
    record: &AttendanceRecord,
    policy: &ExpectedHoursPolicy,
) -> DerivedRecordMetrics {
    let delay = calculate_delay_to_finish(
        record.total_break_minutes,
        record.delay_minutes,
        record.regular_hours,
        record.overtime_hours,
        record.shift_name.as_deref(),
        policy,
    );

    DerivedRecordMetrics {
        user_id: record.user_id.clone(),
        work_date: record.work_date,
        expected_hours: delay.expected_hours,
        delay_to_finish_minutes: delay.delay_to_finish.minutes(),
        delay_to_finish: delay.delay_to_finish.to_string(),
        net_hours: calculate_net_hours(record.total_hours(), record.delay_minutes),
    }
}

/// Rejects negative hours, hours whose sums are not representable, and
/// duplicate `(user_id, work_date)` pairs.
pub fn validate_records(records: &[&AttendanceRecord]) -> EngineResult<()> {
    let mut seen: HashSet<(&str, NaiveDate)> = HashSet::with_capacity(records.len());
    let mut running = RecordTotals::EMPTY;

    for record in records {
        if record.has_negative_hours() {
            let field = if record.regular_hours < Decimal::ZERO {
                "regular_hours"
            } else {
                "overtime_hours"
            };
            return Err(invalid_record(record, &format!("{field} cannot be negative")));
        }
        if record.checked_total_hours().is_none() {
            return Err(invalid_record(record, "regular plus overtime hours overflow"));
        }
        running = running
            .checked_add(RecordTotals::from_record(record))
            .ok_or_else(|| invalid_record(record, "hours overflow the aggregate total"))?;
        if !seen.insert((record.user_id.as_str(), record.work_date)) {
            return Err(EngineError::DuplicateRecord {
                user_id: record.user_id.clone(),
                work_date: record.work_date,
            });
        }
    }

    Ok(())
}

fn invalid_record(record: &AttendanceRecord, message: &str) -> EngineError {
    EngineError::InvalidRecord {
        user_id: record.user_id.clone(),
        work_date: record.work_date,
        message: message.to_string(),
    }
}

/// Collects data-quality warnings. Warnings never change any figure.
pub fn collect_warnings(records: &[&AttendanceRecord]) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    for record in records {
        if record.has_hours_without_check_in() {
            warnings.push(AuditWarning {
                code: HOURS_WITHOUT_CHECK_IN.to_string(),
                message: format!(
                    "{} has {} hours on {} but no check-in; the day is not counted as worked",
                    record.user_id,
                    record.total_hours().normalize(),
                    record.work_date
                ),
                severity: "medium".to_string(),
            });
        }
        if record.checks_out_before_check_in() {
            warnings.push(AuditWarning {
                code: CHECK_OUT_BEFORE_CHECK_IN.to_string(),
                message: format!(
                    "{} checked out before checking in on {}",
                    record.user_id, record.work_date
                ),
                severity: "low".to_string(),
            });
        }
    }

    warnings
}

/// Reconciles the records selected by `filter`.
///
/// Returns the aggregate summary with smart offsetting applied, per-row
/// metrics sorted by work date then employee, and the audit trace.
///
/// # Errors
///
/// - [`EngineError::InvalidFilter`] if the filter's date window is malformed.
/// - [`EngineError::InvalidRecord`] if a selected record has negative hours
///   or hours too large to total.
/// - [`EngineError::DuplicateRecord`] if an employee has two selected records
///   on the same date.
pub fn reconcile(
    records: &[AttendanceRecord],
    filter: &RecordFilter,
    policy: &ExpectedHoursPolicy,
) -> EngineResult<ReconciliationReport> {
    let mut steps = Vec::with_capacity(3);
    let mut step_number: u32 = 1;

    let selected = filter.apply(records)?;
    debug!(
        total_records = records.len(),
        selected_records = selected.len(),
        "Applied record filter"
    );
    steps.push(filter_step(filter, records.len(), selected.len(), step_number));
    step_number += 1;

    validate_records(&selected)?;
    let warnings = collect_warnings(&selected);

    let mut rows: Vec<DerivedRecordMetrics> = selected
        .iter()
        .map(|record| derive_record_metrics(record, policy))
        .collect();
    rows.sort_by(|a, b| {
        a.work_date
            .cmp(&b.work_date)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    let totals = total_records(selected.iter().copied());
    steps.push(totals_step(&totals, step_number));
    step_number += 1;

    let resolution = resolve_offsetting(
        totals.raw_overtime_hours,
        totals.raw_delay_to_finish_hours(),
        step_number,
    );
    let summary = build_summary(&totals, &resolution);
    steps.push(resolution.audit_step);

    info!(
        records = rows.len(),
        working_days = summary.working_days_count,
        net_overtime_hours = %summary.net_overtime_hours.normalize(),
        net_delay_hours = %summary.net_delay_hours.normalize(),
        offsetting_type = summary.offsetting_type.as_str(),
        warnings = warnings.len(),
        "Reconciliation completed"
    );

    Ok(ReconciliationReport {
        summary,
        rows,
        audit: AuditTrace { steps, warnings },
    })
}

fn filter_step(
    filter: &RecordFilter,
    total: usize,
    selected: usize,
    step_number: u32,
) -> AuditStep {
    let reasoning = if filter.is_empty() {
        format!("No filter applied, all {} records selected", total)
    } else {
        format!("{} of {} records matched the filter", selected, total)
    };

    AuditStep {
        step_number,
        rule_id: "record_filter".to_string(),
        rule_name: "Record Filter".to_string(),
        input: serde_json::json!({
            "total_records": total,
            "filter": filter
        }),
        output: serde_json::json!({
            "selected_records": selected
        }),
        reasoning,
    }
}

fn totals_step(totals: &RecordTotals, step_number: u32) -> AuditStep {
    let delay_hours = totals.raw_delay_to_finish_hours();

    AuditStep {
        step_number,
        rule_id: "aggregate_totals".to_string(),
        rule_name: "Aggregate Totals".to_string(),
        input: serde_json::json!({
            "total_delay_minutes": totals.total_delay_minutes,
            "total_break_minutes": totals.total_break_minutes
        }),
        output: serde_json::json!({
            "total_regular_hours": totals.total_regular_hours.normalize().to_string(),
            "raw_overtime_hours": totals.raw_overtime_hours.normalize().to_string(),
            "working_days_count": totals.working_days_count,
            "raw_delay_to_finish_hours": delay_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} break minutes plus {} delay minutes give {} hours of delay to finish",
            totals.total_break_minutes,
            totals.total_delay_minutes,
            delay_hours.normalize()
        ),
    }
}
