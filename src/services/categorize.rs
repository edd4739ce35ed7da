//! Notice categorization: the due-date and hearing-date buckets behind the
//! dashboard.
//!
//! Classification is done at calendar-day granularity against an injectable
//! reference date. Per track, the buckets are mutually exclusive:
//!
//! - `Overdue`: date strictly before the reference date;
//! - `ThisWeek`: reference date through seven days out, both ends inclusive;
//! - `ThisMonth`: past the week window, up to the same day of the next
//!   calendar month (clamped to the end of that month when the day does not
//!   exist, e.g. Jan 31 -> Feb 28/29);
//! - anything further out is `Later` and appears in no dashboard bucket.
//!
//! Missing dates, dates that failed to parse, and epoch-era placeholders
//! (year <= 1970, how the API serializes unset dates) are excluded from
//! every bucket on that track. [`categorize`] itself is status-agnostic and
//! total; status filtering for display is the separate, documented
//! [`CategorizedNotices::dashboard_view`] step.

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::Serialize;

use crate::domain::notice::{Notice, Track};
use crate::dto::dashboard::{NoticesByCategory, TrackCounts};

/// Dates in or before this year are treated as unset placeholders.
const EPOCH_GUARD_YEAR: i32 = 1970;
/// Inclusive width of the "this week" window, in days.
const WEEK_WINDOW_DAYS: u64 = 7;

/// Where a single date falls relative to the reference date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateBucket {
    Overdue,
    ThisWeek,
    ThisMonth,
    /// Beyond the month window; shown in no dashboard bucket.
    Later,
}

/// Drops missing and placeholder dates, returning only real post-1970 ones.
pub fn valid_date(date: Option<NaiveDate>) -> Option<NaiveDate> {
    date.filter(|d| d.year() > EPOCH_GUARD_YEAR)
}

/// Classifies a single date against `today`. `None` means the date is
/// missing or invalid and belongs to no bucket.
///
/// Window arithmetic that would overflow the calendar range degrades to an
/// open-ended window, keeping the function total.
pub fn classify(date: Option<NaiveDate>, today: NaiveDate) -> Option<DateBucket> {
    let date = valid_date(date)?;

    if date < today {
        return Some(DateBucket::Overdue);
    }

    let week_end = today.checked_add_days(Days::new(WEEK_WINDOW_DAYS));
    if week_end.is_none_or(|end| date <= end) {
        return Some(DateBucket::ThisWeek);
    }

    let month_end = today.checked_add_months(Months::new(1));
    if month_end.is_none_or(|end| date <= end) {
        return Some(DateBucket::ThisMonth);
    }

    Some(DateBucket::Later)
}

/// The three dashboard buckets for one track. Notices keep the order they
/// had in the input.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackBuckets {
    pub this_week: Vec<Notice>,
    pub this_month: Vec<Notice>,
    pub overdue: Vec<Notice>,
}

impl TrackBuckets {
    fn push(&mut self, bucket: DateBucket, notice: &Notice) {
        match bucket {
            DateBucket::ThisWeek => self.this_week.push(notice.clone()),
            DateBucket::ThisMonth => self.this_month.push(notice.clone()),
            DateBucket::Overdue => self.overdue.push(notice.clone()),
            DateBucket::Later => {}
        }
    }

    pub fn counts(&self) -> TrackCounts {
        TrackCounts {
            this_week: self.this_week.len(),
            this_month: self.this_month.len(),
            overdue: self.overdue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.this_week.is_empty() && self.this_month.is_empty() && self.overdue.is_empty()
    }
}

/// Raw, status-agnostic categorization output for both tracks.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CategorizedNotices {
    pub due: TrackBuckets,
    pub hearing: TrackBuckets,
}

impl CategorizedNotices {
    /// The actionable display view: the due track (shown as "pending")
    /// keeps only pending notices in all three buckets; the hearing track
    /// keeps only pending notices in the week/month buckets but keeps every
    /// status in overdue, since a hearing date passing does not depend on
    /// whether the notice was completed.
    pub fn dashboard_view(&self) -> NoticesByCategory {
        NoticesByCategory {
            pending: TrackBuckets {
                this_week: only_pending(&self.due.this_week),
                this_month: only_pending(&self.due.this_month),
                overdue: only_pending(&self.due.overdue),
            },
            hearing: TrackBuckets {
                this_week: only_pending(&self.hearing.this_week),
                this_month: only_pending(&self.hearing.this_month),
                overdue: self.hearing.overdue.clone(),
            },
        }
    }
}

fn only_pending(notices: &[Notice]) -> Vec<Notice> {
    notices
        .iter()
        .filter(|notice| notice.status.is_pending())
        .cloned()
        .collect()
}

/// Partitions `notices` into buckets for both tracks against the given
/// reference date. Pure and deterministic: no I/O, no mutation of the
/// input, fresh output on every call.
pub fn categorize(notices: &[Notice], today: NaiveDate) -> CategorizedNotices {
    let mut categorized = CategorizedNotices::default();
    for notice in notices {
        if let Some(bucket) = classify(Track::Due.date_of(notice), today) {
            categorized.due.push(bucket, notice);
        }
        if let Some(bucket) = classify(Track::Hearing.date_of(notice), today) {
            categorized.hearing.push(bucket, notice);
        }
    }
    categorized
}

/// [`categorize`] against the local wall-clock date.
pub fn categorize_now(notices: &[Notice]) -> CategorizedNotices {
    categorize(notices, Local::now().date_naive())
}
