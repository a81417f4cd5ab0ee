//! Configuration types for the shift policy.
//!
//! These structures are deserialized from the YAML shift policy file.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::calculation::ExpectedHoursPolicy;
use crate::error::{EngineError, EngineResult};

/// The shift policy as written in `shifts.yaml`.
///
/// ```yaml
/// name: Default shift policy
/// version: "2025-01-01"
/// default_expected_hours: 7
/// shifts:
///   Day Shift: 7
///   Night Shift: 8
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftPolicyConfig {
    /// Human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// Expected hours for absent or unrecognized shift names.
    pub default_expected_hours: Decimal,
    /// Map of shift name to expected hours.
    #[serde(default)]
    pub shifts: HashMap<String, Decimal>,
}

impl ShiftPolicyConfig {
    /// Builds the lookup policy, rejecting negative expected hours.
    pub fn to_policy(&self) -> EngineResult<ExpectedHoursPolicy> {
        if self.default_expected_hours < Decimal::ZERO {
            return Err(EngineError::InvalidShiftPolicy {
                shift_name: "default".to_string(),
                message: "expected hours cannot be negative".to_string(),
            });
        }

        if let Some((name, _)) = self.shifts.iter().find(|(_, hours)| **hours < Decimal::ZERO) {
            return Err(EngineError::InvalidShiftPolicy {
                shift_name: name.clone(),
                message: "expected hours cannot be negative".to_string(),
            });
        }

        Ok(ExpectedHoursPolicy::new(
            self.shifts.clone(),
            self.default_expected_hours,
        ))
    }
}
