//! Core catalog storage trait.
//!
//! [`CatalogStorage`] is the contract between the REST layer and the
//! upstream ILS store. The API is read-only end to end: there is no
//! create/update/delete anywhere on this trait. Identity-lookup misses are
//! expected and surface as `Ok(None)`; everything else a backend cannot do
//! is a [`StorageError`](crate::error::StorageError).

use async_trait::async_trait;
use stacks_catalog::{ApiUser, Bib, EResource, Item, ItemStatus, ItemType, Location, MarcRecord};

use crate::error::StorageResult;
use crate::query::ListQuery;
use crate::types::Page;

/// Read access to the library catalog store.
///
/// One list/get pair per resource, plus the aggregate call-number
/// operations and API-key authentication for the gated `apiusers`
/// resource. All list methods honor the query's filters and row window and
/// return an empty-but-valid [`Page`] for empty results.
#[async_trait]
pub trait CatalogStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    async fn list_items(&self, query: &ListQuery) -> StorageResult<Page<Item>>;

    /// Looks up one item by record number.
    async fn get_item(&self, id: &str) -> StorageResult<Option<Item>>;

    async fn list_bibs(&self, query: &ListQuery) -> StorageResult<Page<Bib>>;

    /// Looks up one bib by record number.
    async fn get_bib(&self, id: &str) -> StorageResult<Option<Bib>>;

    async fn list_marc(&self, query: &ListQuery) -> StorageResult<Page<MarcRecord>>;

    /// Looks up the MARC rendition of a bib by record number.
    async fn get_marc(&self, id: &str) -> StorageResult<Option<MarcRecord>>;

    async fn list_eresources(&self, query: &ListQuery) -> StorageResult<Page<EResource>>;

    /// Looks up one e-resource by record number.
    async fn get_eresource(&self, id: &str) -> StorageResult<Option<EResource>>;

    async fn list_locations(&self, query: &ListQuery) -> StorageResult<Page<Location>>;

    /// Looks up one shelving location by code.
    async fn get_location(&self, code: &str) -> StorageResult<Option<Location>>;

    async fn list_item_types(&self, query: &ListQuery) -> StorageResult<Page<ItemType>>;

    /// Looks up one item type by code.
    async fn get_item_type(&self, code: &str) -> StorageResult<Option<ItemType>>;

    async fn list_item_statuses(&self, query: &ListQuery) -> StorageResult<Page<ItemStatus>>;

    /// Looks up one item status by code.
    async fn get_item_status(&self, code: &str) -> StorageResult<Option<ItemStatus>>;

    async fn list_api_users(&self, query: &ListQuery) -> StorageResult<Page<ApiUser>>;

    /// Looks up one API user by username.
    async fn get_api_user(&self, username: &str) -> StorageResult<Option<ApiUser>>;

    /// Resolves an API key to the user that owns it, if any.
    ///
    /// This backs the authentication gate on the `apiusers` endpoints; a
    /// `None` here becomes a 403 upstream, never a 404.
    async fn authenticate(&self, api_key: &str) -> StorageResult<Option<ApiUser>>;

    /// Call numbers starting with `prefix`, in shelf order.
    ///
    /// Feeds the bare-sequence `/callnumbermatches/` endpoint; an empty
    /// prefix matches everything.
    async fn call_number_matches(&self, prefix: &str, limit: usize) -> StorageResult<Vec<String>>;

    /// The first item (by call number) at each shelving location.
    ///
    /// Filters in `query` apply to the items considered; the page's total
    /// counts distinct locations, not items.
    async fn first_item_per_location(&self, query: &ListQuery) -> StorageResult<Page<Item>>;
}
