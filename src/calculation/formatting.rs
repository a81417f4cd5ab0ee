//! Duration formatting for display.
//!
//! Durations render as `"{h}h {m}min"`, `"{h}h"` or `"{m}min"`. Anything that
//! is not positive renders as `"0min"`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of a duration when nothing is owed.
pub const ALL_CLEAR: &str = "All Clear";

/// The rendering of a zero or negative duration.
pub const ZERO_DURATION: &str = "0min";

pub(crate) const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Formats a duration given in minutes.
///
/// The total is rounded to the nearest whole minute (halves away from zero)
/// before it is split, and the hour part is floored.
///
/// # Examples
///
/// ```
/// use shift_reconciler::calculation::format_duration_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_duration_minutes(Decimal::from(125)), "2h 5min");
/// assert_eq!(format_duration_minutes(Decimal::from(60)), "1h");
/// assert_eq!(format_duration_minutes(Decimal::from(45)), "45min");
/// assert_eq!(format_duration_minutes(Decimal::from(-5)), "0min");
/// ```
pub fn format_duration_minutes(minutes: Decimal) -> String {
    if minutes <= Decimal::ZERO {
        return ZERO_DURATION.to_string();
    }

    let total = minutes.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let hours = (total / MINUTES_PER_HOUR).floor();
    let remainder = total - hours * MINUTES_PER_HOUR;

    match (hours.is_zero(), remainder.is_zero()) {
        (true, _) => format!("{}min", remainder.normalize()),
        (false, true) => format!("{}h", hours.normalize()),
        (false, false) => format!("{}h {}min", hours.normalize(), remainder.normalize()),
    }
}

/// Formats a duration given in decimal hours.
///
/// # Examples
///
/// ```
/// use shift_reconciler::calculation::format_duration_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_duration_hours(Decimal::from_str("2.25").unwrap()), "2h 15min");
/// assert_eq!(format_duration_hours(Decimal::ZERO), "0min");
/// ```
pub fn format_duration_hours(hours: Decimal) -> String {
    let minutes = hours.checked_mul(MINUTES_PER_HOUR).unwrap_or(Decimal::MAX);
    format_duration_minutes(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_non_positive_input_is_zero_duration() {
        for value in ["0", "-0.01", "-5", "-600"] {
            assert_eq!(format_duration_minutes(dec(value)), "0min", "input {}", value);
            assert_eq!(format_duration_hours(dec(value)), "0min", "input {}", value);
        }
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(format_duration_minutes(dec("125")), "2h 5min");
        assert_eq!(format_duration_minutes(dec("61")), "1h 1min");
        assert_eq!(format_duration_minutes(dec("1439")), "23h 59min");
    }

    #[test]
    fn test_whole_hours_drop_minutes() {
        assert_eq!(format_duration_minutes(dec("60")), "1h");
        assert_eq!(format_duration_minutes(dec("120")), "2h");
        assert_eq!(format_duration_minutes(dec("1500")), "25h");
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(format_duration_minutes(dec("45")), "45min");
        assert_eq!(format_duration_minutes(dec("1")), "1min");
    }

    #[test]
    fn test_fractional_minutes_round_to_nearest() {
        assert_eq!(format_duration_minutes(dec("44.4")), "44min");
        assert_eq!(format_duration_minutes(dec("44.5")), "45min");
        assert_eq!(format_duration_minutes(dec("0.4")), "0min");
        assert_eq!(format_duration_minutes(dec("0.5")), "1min");
    }

    #[test]
    fn test_rounding_carries_into_hours() {
        // 59.6 rounds to 60 before splitting
        assert_eq!(format_duration_minutes(dec("59.6")), "1h");
        assert_eq!(format_duration_minutes(dec("119.5")), "2h");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_duration_hours(dec("2")), "2h");
        assert_eq!(format_duration_hours(dec("0.75")), "45min");
        assert_eq!(format_duration_hours(dec("1.5")), "1h 30min");
        assert_eq!(format_duration_hours(dec("7.3333")), "7h 20min");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let value = dec("187.25");
        assert_eq!(format_duration_minutes(value), format_duration_minutes(value));
        assert_eq!(format_duration_minutes(value), "3h 7min");
    }

    #[test]
    fn test_huge_hours_do_not_overflow() {
        let formatted = format_duration_hours(Decimal::MAX);
        assert!(formatted.ends_with("min") || formatted.ends_with('h'));
    }
}
