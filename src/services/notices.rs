//! Listing and lookup services behind the notices page.

use chrono::NaiveDate;

use crate::domain::notice::{Notice, NoticeStatus};
use crate::domain::types::NoticeId;
use crate::repository::{NoticeListQuery, NoticeReader};
use crate::services::{DEFAULT_ITEMS_PER_PAGE, ServiceError, ServiceResult};

/// Query parameters accepted by the notices list service.
#[derive(Debug, Default)]
pub struct NoticesQuery {
    pub status: Option<NoticeStatus>,
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Result payload returned by [`list_notices`].
#[derive(Debug)]
pub struct NoticesPage {
    /// Total number of notices matching the filter.
    pub total: usize,
    /// Page of notices requested by the caller.
    pub notices: Vec<Notice>,
}

/// Returns the filtered list of notices. Blank search terms are dropped.
pub fn list_notices<R>(repo: &R, params: NoticesQuery) -> ServiceResult<NoticesPage>
where
    R: NoticeReader + ?Sized,
{
    let mut query = NoticeListQuery::new();

    if let Some(status) = params.status {
        query = query.status(status);
    }

    if let Some(page) = params.page {
        query = query.paginate(page, DEFAULT_ITEMS_PER_PAGE);
    }

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }

    let (total, notices) = repo.list_notices(query).map_err(|err| {
        log::error!("Failed to list notices: {err}");
        ServiceError::from(err)
    })?;

    Ok(NoticesPage { total, notices })
}

/// Notices due inside an inclusive date range, backing the calendar's
/// month view.
pub fn list_due_between<R>(
    repo: &R,
    start: NaiveDate,
    end: NaiveDate,
) -> ServiceResult<Vec<Notice>>
where
    R: NoticeReader + ?Sized,
{
    let (_, notices) = repo
        .list_notices(NoticeListQuery::new().due_between(start, end))
        .map_err(|err| {
            log::error!("Failed to list notices due between {start} and {end}: {err}");
            ServiceError::from(err)
        })?;
    Ok(notices)
}

/// Fetches a single notice, mapping a missing record to
/// [`ServiceError::NotFound`].
pub fn get_notice<R>(repo: &R, id: &NoticeId) -> ServiceResult<Notice>
where
    R: NoticeReader + ?Sized,
{
    repo.get_notice_by_id(id)
        .map_err(|err| {
            log::error!("Failed to fetch notice {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}
