//! Smart offsetting between overtime and delay.
//!
//! Aggregate overtime and aggregate delay-to-finish cancel each other out,
//! leaving a single residual: either net overtime or net delay, never both.
//! When the two are equal the delay side wins the tie and both residuals are
//! zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, OffsettingType};

/// The outcome of offsetting overtime against delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsettingResolution {
    /// Overtime left over after covering the delay.
    pub net_overtime_hours: Decimal,
    /// Delay left over after absorbing the overtime.
    pub net_delay_hours: Decimal,
    /// Which branch was taken.
    pub offsetting_type: OffsettingType,
    /// True when both sides were positive, i.e. something was actually offset.
    pub has_smart_offsetting: bool,
    /// The audit step recording the decision.
    pub audit_step: AuditStep,
}

/// Offsets raw overtime hours against raw delay-to-finish hours.
///
/// - overtime > delay: net overtime is the difference, net delay is zero.
/// - otherwise: net delay is the difference, net overtime is zero.
///
/// # Examples
///
/// ```
/// use shift_reconciler::calculation::resolve_offsetting;
/// use shift_reconciler::models::OffsettingType;
/// use rust_decimal::Decimal;
///
/// let result = resolve_offsetting(Decimal::from(5), Decimal::from(3), 1);
/// assert_eq!(result.net_overtime_hours, Decimal::from(2));
/// assert_eq!(result.net_delay_hours, Decimal::ZERO);
/// assert_eq!(result.offsetting_type, OffsettingType::OvertimeCoversDelay);
/// assert!(result.has_smart_offsetting);
/// ```
pub fn resolve_offsetting(
    raw_overtime_hours: Decimal,
    raw_delay_to_finish_hours: Decimal,
    step_number: u32,
) -> OffsettingResolution {
    let (net_overtime_hours, net_delay_hours, offsetting_type) =
        if raw_overtime_hours > raw_delay_to_finish_hours {
            (
                raw_overtime_hours - raw_delay_to_finish_hours,
                Decimal::ZERO,
                OffsettingType::OvertimeCoversDelay,
            )
        } else {
            (
                Decimal::ZERO,
                raw_delay_to_finish_hours - raw_overtime_hours,
                OffsettingType::DelayCoversOvertime,
            )
        };

    let has_smart_offsetting =
        raw_overtime_hours > Decimal::ZERO && raw_delay_to_finish_hours > Decimal::ZERO;

    let reasoning = match offsetting_type {
        OffsettingType::OvertimeCoversDelay => format!(
            "{} overtime hours exceed {} delay hours, leaving {} net overtime hours",
            raw_overtime_hours.normalize(),
            raw_delay_to_finish_hours.normalize(),
            net_overtime_hours.normalize()
        ),
        OffsettingType::DelayCoversOvertime if net_delay_hours.is_zero() => format!(
            "{} overtime hours equal {} delay hours, all clear",
            raw_overtime_hours.normalize(),
            raw_delay_to_finish_hours.normalize()
        ),
        OffsettingType::DelayCoversOvertime => format!(
            "{} delay hours exceed {} overtime hours, leaving {} net delay hours",
            raw_delay_to_finish_hours.normalize(),
            raw_overtime_hours.normalize(),
            net_delay_hours.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "smart_offsetting".to_string(),
        rule_name: "Smart Offsetting".to_string(),
        input: serde_json::json!({
            "raw_overtime_hours": raw_overtime_hours.normalize().to_string(),
            "raw_delay_to_finish_hours": raw_delay_to_finish_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_overtime_hours": net_overtime_hours.normalize().to_string(),
            "net_delay_hours": net_delay_hours.normalize().to_string(),
            "offsetting_type": offsetting_type.as_str(),
            "has_smart_offsetting": has_smart_offsetting
        }),
        reasoning,
    };

    OffsettingResolution {
        net_overtime_hours,
        net_delay_hours,
        offsetting_type,
        has_smart_offsetting,
        audit_step,
    }
}
