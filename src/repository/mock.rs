//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::Client;
use crate::domain::notice::Notice;
use crate::domain::storage::{FolderSummary, StorageEntry};
use crate::domain::types::{ClientId, FolderId, NoticeId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientListQuery, ClientReader, FolderReader, NoticeListQuery, NoticeReader,
};

mock! {
    pub Repository {}

    impl NoticeReader for Repository {
        fn get_notice_by_id(&self, id: &NoticeId) -> RepositoryResult<Option<Notice>>;
        fn list_notices(&self, query: NoticeListQuery) -> RepositoryResult<(usize, Vec<Notice>)>;
    }

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
        fn count_clients(&self) -> RepositoryResult<usize>;
    }

    impl FolderReader for Repository {
        fn list_entries(&self, parent: Option<FolderId>) -> RepositoryResult<Vec<StorageEntry>>;
        fn ancestor_path(&self, folder: &FolderId) -> RepositoryResult<Vec<FolderSummary>>;
    }
}
