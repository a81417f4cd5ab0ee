//! Per-record "delay to finish" calculation.
//!
//! Measures how far a single shift fell short of the hours its shift type
//! expects. Only the regular hours count towards meeting the expectation;
//! check-in lateness, breaks and overtime are accepted but do not affect the
//! result.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::expected_hours::ExpectedHoursPolicy;
use super::formatting::{ALL_CLEAR, MINUTES_PER_HOUR, format_duration_minutes};

/// Outcome of the delay-to-finish check for one shift.
///
/// Displays as `"All Clear"` or as the formatted shortfall.
///
/// # Example
///
/// ```
/// use shift_reconciler::calculation::DelayToFinish;
/// use rust_decimal::Decimal;
///
/// assert_eq!(DelayToFinish::AllClear.to_string(), "All Clear");
/// let short = DelayToFinish::Shortfall { minutes: Decimal::from(90) };
/// assert_eq!(short.to_string(), "1h 30min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DelayToFinish {
    /// The expected hours were met or exceeded.
    AllClear,
    /// The shift fell short by this many minutes.
    Shortfall {
        /// Missing minutes, always positive.
        minutes: Decimal,
    },
}

impl DelayToFinish {
    /// The shortfall in minutes, zero when all clear.
    pub fn minutes(&self) -> Decimal {
        match self {
            DelayToFinish::AllClear => Decimal::ZERO,
            DelayToFinish::Shortfall { minutes } => *minutes,
        }
    }

    /// Returns true if the expected hours were met.
    pub fn is_all_clear(&self) -> bool {
        matches!(self, DelayToFinish::AllClear)
    }
}

impl fmt::Display for DelayToFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayToFinish::AllClear => f.write_str(ALL_CLEAR),
            DelayToFinish::Shortfall { minutes } => {
                f.write_str(&format_duration_minutes(*minutes))
            }
        }
    }
}

/// The result of the delay-to-finish calculation for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayToFinishResult {
    /// Expected hours resolved from the shift name.
    pub expected_hours: Decimal,
    /// Whether the shift is all clear, and by how much it fell short if not.
    pub delay_to_finish: DelayToFinish,
}

/// Computes how far a shift fell short of its expected hours.
///
/// The shortfall is `(expected - regular_hours) * 60` minutes when
/// `regular_hours` is below the expectation for `shift_name`, and zero
/// otherwise. `break_minutes`, `delay_minutes` and `overtime_hours` are part
/// of the interface but do not contribute: recorded check-in lateness is not
/// added to the shortfall.
///
/// # Examples
///
/// ```
/// use shift_reconciler::calculation::{calculate_delay_to_finish, ExpectedHoursPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = ExpectedHoursPolicy::default();
///
/// let short = calculate_delay_to_finish(
///     30, 20, Decimal::from(5), Decimal::ZERO, Some("Day Shift"), &policy,
/// );
/// assert_eq!(short.delay_to_finish.to_string(), "2h");
///
/// let clear = calculate_delay_to_finish(
///     30, 20, Decimal::from(9), Decimal::ZERO, Some("Day Shift"), &policy,
/// );
/// assert_eq!(clear.delay_to_finish.to_string(), "All Clear");
/// ```
pub fn calculate_delay_to_finish(
    _break_minutes: u32,
    _delay_minutes: u32,
    regular_hours: Decimal,
    _overtime_hours: Decimal,
    shift_name: Option<&str>,
    policy: &ExpectedHoursPolicy,
) -> DelayToFinishResult {
    let expected_hours = policy.expected_hours(shift_name);

    let shortfall_minutes = if regular_hours < expected_hours {
        expected_hours
            .saturating_sub(regular_hours)
            .saturating_mul(MINUTES_PER_HOUR)
    } else {
        Decimal::ZERO
    };

    let delay_to_finish = if shortfall_minutes <= Decimal::ZERO {
        DelayToFinish::AllClear
    } else {
        DelayToFinish::Shortfall {
            minutes: shortfall_minutes,
        }
    };

    DelayToFinishResult {
        expected_hours,
        delay_to_finish,
    }
}
