//! Small helpers behind the "+X% vs last period" stat badges.

use serde::Serialize;

/// Absolute and relative change between two counts.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct StatsChange {
    pub value: i64,
    pub percentage: i64,
}

/// Computes the change from `previous` to `current`.
///
/// The percentage is rounded half away from zero. A zero baseline is
/// defined as 0% change regardless of `current`.
pub fn calculate_change(current: i64, previous: i64) -> StatsChange {
    let value = current - previous;
    let percentage = if previous == 0 {
        0
    } else {
        (value as f64 / previous as f64 * 100.0).round() as i64
    };
    StatsChange { value, percentage }
}

/// Human label for a look-back window length in days.
pub fn time_frame_label(days: u32) -> &'static str {
    if days <= 1 {
        "today"
    } else if days <= 7 {
        "this week"
    } else if days <= 30 {
        "this month"
    } else {
        "total"
    }
}
