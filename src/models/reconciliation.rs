//! Reconciliation result models.
//!
//! This module contains the outputs of the engine: per-row
//! [`DerivedRecordMetrics`], the [`AggregateSummary`] with its smart
//! offsetting resolution, and the [`ReconciliationReport`] that bundles both
//! with an [`AuditTrace`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{ALL_CLEAR, format_duration_hours, format_duration_minutes};

/// Which side of the smart offsetting absorbed the other.
///
/// # Example
///
/// ```
/// use shift_reconciler::models::OffsettingType;
///
/// let json = serde_json::to_string(&OffsettingType::OvertimeCoversDelay).unwrap();
/// assert_eq!(json, "\"overtime_covers_delay\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsettingType {
    /// Overtime exceeded the delay; the residual is net overtime.
    OvertimeCoversDelay,
    /// Delay met or exceeded the overtime; the residual is net delay.
    DelayCoversOvertime,
}

impl OffsettingType {
    /// The snake_case label shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            OffsettingType::OvertimeCoversDelay => "overtime_covers_delay",
            OffsettingType::DelayCoversOvertime => "delay_covers_overtime",
        }
    }
}

/// Derived, display-ready metrics for one attendance record.
///
/// Recomputed from the source record on every query and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRecordMetrics {
    /// The employee the row belongs to.
    pub user_id: String,
    /// The work date of the row.
    pub work_date: NaiveDate,
    /// Expected hours resolved from the shift name.
    pub expected_hours: Decimal,
    /// Shortfall against expected hours, in minutes. Zero when all clear.
    pub delay_to_finish_minutes: Decimal,
    /// "All Clear" or the formatted shortfall.
    pub delay_to_finish: String,
    /// Worked hours minus recorded delay, floored at zero.
    pub net_hours: Decimal,
}

/// Aggregate figures over a filtered set of attendance records.
///
/// Exactly one of `net_overtime_hours` and `net_delay_hours` is positive,
/// or both are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Sum of regular hours.
    pub total_regular_hours: Decimal,
    /// Sum of overtime hours before offsetting.
    pub raw_overtime_hours: Decimal,
    /// Sum of check-in delay minutes.
    pub total_delay_minutes: u64,
    /// Sum of break minutes.
    pub total_break_minutes: u64,
    /// Number of records with a check-in.
    pub working_days_count: u32,
    /// (regular + overtime) / working days, or zero with no working days.
    pub average_hours_per_day: Decimal,
    /// (break minutes + delay minutes) / 60.
    pub raw_delay_to_finish_hours: Decimal,
    /// Overtime left after covering the delay.
    pub net_overtime_hours: Decimal,
    /// Delay left after absorbing the overtime.
    pub net_delay_hours: Decimal,
    /// Which branch of the offsetting was taken.
    pub offsetting_type: OffsettingType,
    /// True when both raw overtime and raw delay were positive.
    pub has_smart_offsetting: bool,
}

impl AggregateSummary {
    /// Net overtime as a duration string.
    pub fn net_overtime_display(&self) -> String {
        format_duration_hours(self.net_overtime_hours)
    }

    /// Net delay as a duration string, or "All Clear" when there is none.
    pub fn net_delay_display(&self) -> String {
        if self.net_delay_hours > Decimal::ZERO {
            format_duration_hours(self.net_delay_hours)
        } else {
            ALL_CLEAR.to_string()
        }
    }

    /// Total break time as a duration string.
    pub fn total_break_display(&self) -> String {
        format_duration_minutes(Decimal::from(self.total_break_minutes))
    }

    /// Total check-in delay as a duration string.
    pub fn total_delay_display(&self) -> String {
        format_duration_minutes(Decimal::from(self.total_delay_minutes))
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A data-quality warning raised while reconciling.
///
/// Warnings never change the computed figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The audit trace for a reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during reconciliation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete output of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Aggregate figures over the selected records.
    pub summary: AggregateSummary,
    /// Per-row metrics, ordered by work date then employee.
    pub rows: Vec<DerivedRecordMetrics>,
    /// Decisions and warnings recorded along the way.
    pub audit: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_summary() -> AggregateSummary {
        AggregateSummary {
            total_regular_hours: dec("21"),
            raw_overtime_hours: dec("3"),
            total_delay_minutes: 45,
            total_break_minutes: 90,
            working_days_count: 3,
            average_hours_per_day: dec("8"),
            raw_delay_to_finish_hours: dec("2.25"),
            net_overtime_hours: dec("0.75"),
            net_delay_hours: Decimal::ZERO,
            offsetting_type: OffsettingType::OvertimeCoversDelay,
            has_smart_offsetting: true,
        }
    }

    #[test]
    fn test_offsetting_type_serialization() {
        let json = serde_json::to_string(&OffsettingType::DelayCoversOvertime).unwrap();
        assert_eq!(json, "\"delay_covers_overtime\"");

        let parsed: OffsettingType = serde_json::from_str("\"overtime_covers_delay\"").unwrap();
        assert_eq!(parsed, OffsettingType::OvertimeCoversDelay);
    }

    #[test]
    fn test_offsetting_type_label_matches_serialization() {
        for kind in [
            OffsettingType::OvertimeCoversDelay,
            OffsettingType::DelayCoversOvertime,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_summary_display_helpers() {
        let summary = sample_summary();

        assert_eq!(summary.net_overtime_display(), "45min");
        assert_eq!(summary.net_delay_display(), "All Clear");
        assert_eq!(summary.total_break_display(), "1h 30min");
        assert_eq!(summary.total_delay_display(), "45min");
    }

    #[test]
    fn test_net_delay_display_formats_residual_delay() {
        let summary = AggregateSummary {
            net_overtime_hours: Decimal::ZERO,
            net_delay_hours: dec("1.5"),
            offsetting_type: OffsettingType::DelayCoversOvertime,
            ..sample_summary()
        };

        assert_eq!(summary.net_delay_display(), "1h 30min");
        assert_eq!(summary.net_overtime_display(), "0min");
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_value(sample_summary()).unwrap();

        assert_eq!(json["offsetting_type"], "overtime_covers_delay");
        assert_eq!(json["net_overtime_hours"], "0.75");
        assert_eq!(json["working_days_count"], 3);
        assert_eq!(json["has_smart_offsetting"], true);
    }
}
