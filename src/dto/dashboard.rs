//! View shapes consumed by the dashboard UI.

use serde::Serialize;

use crate::domain::notice::Notice;
use crate::services::categorize::TrackBuckets;
use crate::services::stats::{StatsChange, calculate_change};

/// Categorized notices in the shape the dashboard consumes: the due-date
/// track under `pending`, the hearing-date track under `hearing`.
///
/// This is the display view produced by
/// [`CategorizedNotices::dashboard_view`](crate::services::categorize::CategorizedNotices::dashboard_view);
/// the raw, status-agnostic buckets stay on `CategorizedNotices`.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct NoticesByCategory {
    pub pending: TrackBuckets,
    pub hearing: TrackBuckets,
}

/// Bucket sizes for one track.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackCounts {
    pub this_week: usize,
    pub this_month: usize,
    pub overdue: usize,
}

/// Aggregated payload behind the dashboard page.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: usize,
    pub total_notices: usize,
    pub pending_notices: usize,
    pub completed_notices: usize,
    pub notices_by_category: NoticesByCategory,
    pub latest_completed_notices: Vec<Notice>,
    pub due_notices: TrackCounts,
    pub hearing_dates: TrackCounts,
}

impl DashboardStats {
    /// Share of completed notices, as a percentage in `0.0..=100.0`.
    /// Zero when there are no notices at all.
    pub fn completion_progress(&self) -> f64 {
        if self.total_notices == 0 {
            0.0
        } else {
            self.completed_notices as f64 / self.total_notices as f64 * 100.0
        }
    }

    /// Period-over-period changes against a previous snapshot, for the
    /// "+X% vs last period" badges.
    pub fn changes_since(&self, previous: &DashboardStats) -> DashboardChanges {
        DashboardChanges {
            clients: calculate_change(self.total_clients as i64, previous.total_clients as i64),
            notices: calculate_change(self.total_notices as i64, previous.total_notices as i64),
            pending: calculate_change(self.pending_notices as i64, previous.pending_notices as i64),
            completed: calculate_change(
                self.completed_notices as i64,
                previous.completed_notices as i64,
            ),
        }
    }
}

/// Change badges for each headline dashboard metric.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct DashboardChanges {
    pub clients: StatsChange,
    pub notices: StatsChange,
    pub pending: StatsChange,
    pub completed: StatsChange,
}
