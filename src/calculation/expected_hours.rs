//! Expected-hours policy keyed by shift name.
//!
//! "Day Shift" expects 7 hours and "Night Shift" 8. Any other name, or no
//! name at all, falls back to the default of 7 hours. Shift names are matched
//! exactly.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Label of the day shift.
pub const DAY_SHIFT: &str = "Day Shift";

/// Label of the night shift.
pub const NIGHT_SHIFT: &str = "Night Shift";

/// Expected hours when the shift name is absent or unrecognized.
pub const DEFAULT_EXPECTED_HOURS: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

const DAY_SHIFT_EXPECTED_HOURS: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
const NIGHT_SHIFT_EXPECTED_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Lookup from shift name to the hours an employee is expected to work.
///
/// # Example
///
/// ```
/// use shift_reconciler::calculation::ExpectedHoursPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = ExpectedHoursPolicy::default();
/// assert_eq!(policy.expected_hours(Some("Night Shift")), Decimal::new(8, 0));
/// assert_eq!(policy.expected_hours(Some("Split Shift")), Decimal::new(7, 0));
/// assert_eq!(policy.expected_hours(None), Decimal::new(7, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedHoursPolicy {
    shifts: HashMap<String, Decimal>,
    default_hours: Decimal,
}

impl ExpectedHoursPolicy {
    /// Creates a policy from a shift table and a fallback.
    pub fn new(shifts: HashMap<String, Decimal>, default_hours: Decimal) -> Self {
        Self {
            shifts,
            default_hours,
        }
    }

    /// Resolves the expected hours for a shift name.
    pub fn expected_hours(&self, shift_name: Option<&str>) -> Decimal {
        shift_name
            .and_then(|name| self.shifts.get(name))
            .copied()
            .unwrap_or(self.default_hours)
    }

    /// The fallback used for absent or unknown shift names.
    pub fn default_hours(&self) -> Decimal {
        self.default_hours
    }

    /// The configured shift table.
    pub fn shifts(&self) -> &HashMap<String, Decimal> {
        &self.shifts
    }
}

impl Default for ExpectedHoursPolicy {
    fn default() -> Self {
        let shifts = HashMap::from([
            (DAY_SHIFT.to_string(), DAY_SHIFT_EXPECTED_HOURS),
            (NIGHT_SHIFT.to_string(), NIGHT_SHIFT_EXPECTED_HOURS),
        ]);
        Self::new(shifts, DEFAULT_EXPECTED_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_day_shift_expects_7_hours() {
        let policy = ExpectedHoursPolicy::default();
        assert_eq!(policy.expected_hours(Some(DAY_SHIFT)), dec("7"));
    }

    #[test]
    fn test_night_shift_expects_8_hours() {
        let policy = ExpectedHoursPolicy::default();
        assert_eq!(policy.expected_hours(Some(NIGHT_SHIFT)), dec("8"));
    }

    #[test]
    fn test_absent_and_unknown_fall_back_to_default() {
        let policy = ExpectedHoursPolicy::default();
        assert_eq!(policy.expected_hours(None), dec("7"));
        assert_eq!(policy.expected_hours(Some("Evening Shift")), dec("7"));
        assert_eq!(policy.expected_hours(Some("")), dec("7"));
    }

    #[test]
    fn test_names_match_exactly() {
        let policy = ExpectedHoursPolicy::default();
        assert_eq!(policy.expected_hours(Some("night shift")), dec("7"));
    }

    #[test]
    fn test_custom_policy() {
        let policy = ExpectedHoursPolicy::new(
            HashMap::from([("Weekend Shift".to_string(), dec("5.5"))]),
            dec("6"),
        );

        assert_eq!(policy.expected_hours(Some("Weekend Shift")), dec("5.5"));
        assert_eq!(policy.expected_hours(Some(NIGHT_SHIFT)), dec("6"));
        assert_eq!(policy.default_hours(), dec("6"));
        assert_eq!(policy.shifts().len(), 1);
    }
}
