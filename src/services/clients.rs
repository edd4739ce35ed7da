//! Listing and lookup services behind the clients page.

use crate::domain::client::Client;
use crate::domain::types::ClientId;
use crate::repository::{ClientListQuery, ClientReader};
use crate::services::{DEFAULT_ITEMS_PER_PAGE, ServiceError, ServiceResult};

/// Query parameters accepted by the clients list service.
#[derive(Debug, Default)]
pub struct ClientsQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Result payload returned by [`list_clients`].
#[derive(Debug)]
pub struct ClientsPage {
    /// Total number of clients matching the filter.
    pub total: usize,
    /// Page of clients requested by the caller.
    pub clients: Vec<Client>,
}

/// Returns the filtered list of clients. Blank search terms are dropped.
pub fn list_clients<R>(repo: &R, params: ClientsQuery) -> ServiceResult<ClientsPage>
where
    R: ClientReader + ?Sized,
{
    let mut query = ClientListQuery::new();

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

    let (total, clients) = repo.list_clients(query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        ServiceError::from(err)
    })?;

    Ok(ClientsPage { total, clients })
}

/// Fetches a single client, mapping a missing record to
/// [`ServiceError::NotFound`].
pub fn get_client<R>(repo: &R, id: &ClientId) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(id)
        .map_err(|err| {
            log::error!("Failed to fetch client {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}
