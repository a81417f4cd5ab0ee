//! Net worked hours after subtracting recorded delay.
//!
//! Unlike the delay-to-finish check, this figure does charge check-in
//! lateness against the employee.

use rust_decimal::Decimal;

use super::formatting::MINUTES_PER_HOUR;

/// Computes `max(0, total_hours - delay_minutes / 60)`.
///
/// # Examples
///
/// ```
/// use shift_reconciler::calculation::calculate_net_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_net_hours(Decimal::from(8), 30), Decimal::new(75, 1));
/// assert_eq!(calculate_net_hours(Decimal::from(2), 180), Decimal::ZERO);
/// ```
pub fn calculate_net_hours(total_hours: Decimal, delay_minutes: u32) -> Decimal {
    let delay_hours = Decimal::from(delay_minutes) / MINUTES_PER_HOUR;
    total_hours.saturating_sub(delay_hours).max(Decimal::ZERO)
}
