//! Collaborator traits describing what the external API server provides.
//!
//! The real implementations live in the application shell that owns the
//! HTTP client; this crate only consumes the traits, which keeps every
//! service testable against in-memory fakes.

use chrono::NaiveDate;

use crate::domain::client::Client;
use crate::domain::notice::{Notice, NoticeStatus};
use crate::domain::storage::{FolderSummary, StorageEntry};
use crate::domain::types::{ClientId, FolderId, NoticeId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filters accepted by [`NoticeReader::list_notices`].
#[derive(Debug, Clone, Default)]
pub struct NoticeListQuery {
    pub status: Option<NoticeStatus>,
    /// Free-form term matched against headings and client names.
    pub search: Option<String>,
    /// Restrict to notices whose due date falls in this inclusive range.
    pub due_between: Option<(NaiveDate, NaiveDate)>,
    pub pagination: Option<Pagination>,
}

impl NoticeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: NoticeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn due_between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.due_between = Some((start, end));
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Filters accepted by [`ClientReader::list_clients`].
#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    /// Free-form term matched against client names.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait NoticeReader {
    fn get_notice_by_id(&self, id: &NoticeId) -> RepositoryResult<Option<Notice>>;
    /// Returns the total number of matches alongside the requested page.
    fn list_notices(&self, query: NoticeListQuery) -> RepositoryResult<(usize, Vec<Notice>)>;
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>>;
    /// Returns the total number of matches alongside the requested page.
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    fn count_clients(&self) -> RepositoryResult<usize>;
}

pub trait FolderReader {
    /// Lists the entries directly under `parent`; `None` is the root.
    fn list_entries(&self, parent: Option<FolderId>) -> RepositoryResult<Vec<StorageEntry>>;
    /// Returns the chain from the topmost ancestor down to `folder` itself,
    /// in one call. Errors with `NotFound` for an unknown folder.
    fn ancestor_path(&self, folder: &FolderId) -> RepositoryResult<Vec<FolderSummary>>;
}
