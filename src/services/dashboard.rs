//! Assembles the aggregated payload behind the dashboard page.

use std::cmp::Reverse;

use chrono::{Local, NaiveDate};

use crate::domain::notice::Notice;
use crate::dto::dashboard::DashboardStats;
use crate::repository::{ClientReader, NoticeListQuery, NoticeReader};
use crate::services::{ServiceError, ServiceResult, categorize};

/// Cap on the "recently completed" list.
const LATEST_COMPLETED_LIMIT: usize = 5;

/// Loads everything the dashboard shows in one pass: headline totals, the
/// categorized due/hearing buckets (already status-filtered for display),
/// per-bucket counts and the latest completed notices.
pub fn load_dashboard<R>(repo: &R, today: NaiveDate) -> ServiceResult<DashboardStats>
where
    R: NoticeReader + ClientReader + ?Sized,
{
    let total_clients = repo.count_clients().map_err(|err| {
        log::error!("Failed to count clients: {err}");
        ServiceError::from(err)
    })?;

    let (total_notices, notices) = repo.list_notices(NoticeListQuery::new()).map_err(|err| {
        log::error!("Failed to list notices: {err}");
        ServiceError::from(err)
    })?;

    let pending_notices = notices.iter().filter(|n| n.status.is_pending()).count();
    let completed_notices = notices.iter().filter(|n| n.status.is_completed()).count();

    let notices_by_category = categorize::categorize(&notices, today).dashboard_view();
    let due_notices = notices_by_category.pending.counts();
    let hearing_dates = notices_by_category.hearing.counts();

    Ok(DashboardStats {
        total_clients,
        total_notices,
        pending_notices,
        completed_notices,
        latest_completed_notices: latest_completed(&notices),
        notices_by_category,
        due_notices,
        hearing_dates,
    })
}

/// [`load_dashboard`] against the local wall-clock date.
pub fn load_dashboard_now<R>(repo: &R) -> ServiceResult<DashboardStats>
where
    R: NoticeReader + ClientReader + ?Sized,
{
    load_dashboard(repo, Local::now().date_naive())
}

/// Completed notices, most recent due date first, dateless ones last.
fn latest_completed(notices: &[Notice]) -> Vec<Notice> {
    let mut completed: Vec<Notice> = notices
        .iter()
        .filter(|n| n.status.is_completed())
        .cloned()
        .collect();
    completed.sort_by_key(|n| Reverse(n.due_date));
    completed.truncate(LATEST_COMPLETED_LIMIT);
    completed
}
