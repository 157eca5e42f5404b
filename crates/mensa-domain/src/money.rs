//! Currency rounding and calendar-day truncation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::common::DateWindow;

/// Rounds a monetary value to 2 fractional digits, half away from zero.
///
/// Every monetary value surfaced to callers passes through this; sums are
/// accumulated at full precision and rounded only at the point of output.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncates an instant to its UTC calendar day.
///
/// The UTC day, not any local calendar, defines "today" and window
/// boundaries throughout.
pub fn day_key(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// The trailing 7-calendar-day window ending at `now`, current day included.
pub fn week_window(now: DateTime<Utc>) -> DateWindow {
    DateWindow::trailing(day_key(now), 7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_to_cents() {
        assert_eq!(round_currency(2.571428), 2.57);
        assert_eq!(round_currency(2.375), 2.38);
        assert_eq!(round_currency(10.0), 10.0);
        assert_eq!(round_currency(0.005), 0.01);
    }

    #[test]
    fn day_key_truncates_to_utc_date() {
        let instant = DateTime::parse_from_rfc3339("2025-03-10T23:59:59Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            day_key(instant),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[test]
    fn week_window_ends_on_reference_day() {
        let instant = DateTime::parse_from_rfc3339("2025-03-10T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let window = week_window(instant);
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(window.len_days(), 7);
    }
}
