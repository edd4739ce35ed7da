//! File-manager services: folder listings and breadcrumb trails.

use crate::domain::storage::{Breadcrumb, StorageEntry};
use crate::domain::types::FolderId;
use crate::repository::FolderReader;
use crate::services::{ServiceError, ServiceResult};

/// Builds the navigation trail for a folder. The root crumb ("Home") always
/// comes first; for a nested folder the whole ancestor chain arrives in a
/// single collaborator call rather than one round trip per level.
pub fn build_breadcrumbs<R>(repo: &R, folder: Option<&FolderId>) -> ServiceResult<Vec<Breadcrumb>>
where
    R: FolderReader + ?Sized,
{
    let mut crumbs = vec![Breadcrumb::home()];
    if let Some(folder) = folder {
        let path = repo.ancestor_path(folder).map_err(|err| {
            log::error!("Failed to load ancestor path for {folder}: {err}");
            ServiceError::from(err)
        })?;
        crumbs.extend(path.into_iter().map(Breadcrumb::from));
    }
    Ok(crumbs)
}

/// Lists the contents of a folder (the root when `parent` is `None`),
/// folders before files, each group sorted by name.
pub fn list_folder<R>(repo: &R, parent: Option<FolderId>) -> ServiceResult<Vec<StorageEntry>>
where
    R: FolderReader + ?Sized,
{
    let mut entries = repo.list_entries(parent).map_err(|err| {
        log::error!("Failed to list folder entries: {err}");
        ServiceError::from(err)
    })?;
    entries.sort_by(|a, b| {
        b.is_folder()
            .cmp(&a.is_folder())
            .then_with(|| a.name().cmp(b.name()))
    });
    Ok(entries)
}
