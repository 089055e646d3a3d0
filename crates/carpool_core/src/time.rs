//! Travel-time comparison.
//!
//! Times of travel are wall-clock times without a date. By default both times
//! are placed on the same calendar day before subtracting, so 23:55 and 00:05
//! are 23h50m apart. With `wrap_midnight` the shorter way around the clock
//! face is used instead.

use chrono::{Duration, NaiveTime};

/// Default maximum gap between driver and rider departure times.
pub const DEFAULT_TIME_THRESHOLD_MINUTES: u32 = 15;

/// Absolute gap between two times of travel.
pub fn travel_time_gap(a: NaiveTime, b: NaiveTime, wrap_midnight: bool) -> Duration {
    let gap = if a >= b { a - b } else { b - a };
    if wrap_midnight {
        gap.min(Duration::days(1) - gap)
    } else {
        gap
    }
}

/// True when the two times are at most `threshold` apart.
pub fn time_compatible(a: NaiveTime, b: NaiveTime, threshold: Duration, wrap_midnight: bool) -> bool {
    travel_time_gap(a, b, wrap_midnight) <= threshold
}

/// Gap expressed in fractional minutes, for diagnostics.
pub fn gap_minutes(gap: Duration) -> f64 {
    gap.num_milliseconds() as f64 / 60_000.0
}
