//! Month-calendar helpers: which days carry notices, and what sits on a
//! given day.
//!
//! These only answer day-membership questions for the calendar widget;
//! week/month bucketing lives in [`super::categorize`].

use std::collections::BTreeSet;

use chrono::{Months, NaiveDate};

use crate::domain::notice::{Notice, Track};
use crate::services::categorize::valid_date;

/// Distinct calendar dates carrying at least one valid date on `track`.
/// Idempotent: same input, same set.
pub fn dates_with_notices(notices: &[Notice], track: Track) -> BTreeSet<NaiveDate> {
    notices
        .iter()
        .filter_map(|notice| valid_date(track.date_of(notice)))
        .collect()
}

/// Same as [`dates_with_notices`], scoped to the visible month range
/// (inclusive on both ends).
pub fn dates_with_notices_in(
    notices: &[Notice],
    track: Track,
    start: NaiveDate,
    end: NaiveDate,
) -> BTreeSet<NaiveDate> {
    dates_with_notices(notices, track)
        .into_iter()
        .filter(|date| *date >= start && *date <= end)
        .collect()
}

/// First and last day of a month, for the visible calendar range.
/// `None` for an invalid year/month combination.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

/// Notices whose `track` date falls exactly on `date`, for the day-detail
/// pane. Input order is preserved.
pub fn notices_on(notices: &[Notice], track: Track, date: NaiveDate) -> Vec<Notice> {
    notices
        .iter()
        .filter(|notice| valid_date(track.date_of(notice)) == Some(date))
        .cloned()
        .collect()
}
