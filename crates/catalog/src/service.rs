//! CatalogService: the store/index synchronization core
//!
//! ## Write discipline
//!
//! The record store is the single source of truth. Every `save` and
//! `delete` runs the store step first; only after it succeeds is the index
//! step issued, sequentially, within the same call. A store failure aborts
//! the call. An index failure after a committed store step is logged and
//! swallowed: the call still reports success, and the index diverges until
//! the next successful write to the same record.
//!
//! ## Concurrency
//!
//! Calls targeting different identifiers are independent. Calls racing on
//! the same identifier rely on the store's per-key last-writer-wins
//! ordering; the index may end up reflecting either write. No locks,
//! retries, or transactions span the two systems.

use phonecat_core::error::{Error, Result};
use phonecat_core::query::Query;
use phonecat_core::traits::{Entity, Fields, RecordStore, SearchIndex};
use phonecat_core::types::{EntityId, Page, PageRequest};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates authoritative store writes with a best-effort index mirror
///
/// Generic over one entity variant; each variant gets its own service
/// instance holding its own store and index handles, passed in at
/// construction.
pub struct CatalogService<T, S, X> {
    store: Arc<S>,
    index: Arc<X>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, S, X> CatalogService<T, S, X>
where
    T: Entity + Fields,
    S: RecordStore<T>,
    X: SearchIndex<T>,
{
    /// Create a service over injected store and index handles
    pub fn new(store: Arc<S>, index: Arc<X>) -> Self {
        CatalogService {
            store,
            index,
            _entity: PhantomData,
        }
    }

    /// The store handle
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The index handle
    pub fn index(&self) -> &Arc<X> {
        &self.index
    }

    /// Save a record: insert when it has no identifier, upsert otherwise
    ///
    /// The store write is the operation of record. The index write that
    /// follows is fire-and-forget relative to the caller: its outcome does
    /// not affect the returned value.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store step fails.
    pub fn save(&self, record: T) -> Result<T> {
        debug!(target: "phonecat::catalog", kind = T::KIND, "saving record");

        let saved = match record.id().cloned() {
            None => self.store.insert(record)?,
            Some(id) => self.store.overwrite(&id, record)?,
        };

        let id = saved.id().cloned().ok_or_else(|| {
            Error::StorageError("store returned a record without an identifier".to_string())
        })?;

        if let Err(err) = self.index.put(&id, saved.clone()) {
            warn!(
                target: "phonecat::catalog",
                kind = T::KIND,
                id = %id,
                error = %err,
                "index write failed; store remains authoritative"
            );
        }

        Ok(saved)
    }

    /// Paged listing straight from the store; never touches the index
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub fn find_all(&self, request: &PageRequest) -> Result<Page<T>> {
        debug!(target: "phonecat::catalog", kind = T::KIND, page = request.page, "listing records");
        let (items, total) = self.store.find_page(request)?;
        Ok(Page::new(items, request.page, request.size, total))
    }

    /// Point lookup by identifier; absence is `Ok(None)`
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub fn find_one(&self, id: &EntityId) -> Result<Option<T>> {
        debug!(target: "phonecat::catalog", kind = T::KIND, id = %id, "fetching record");
        self.store.find_by_id(id)
    }

    /// Delete from the store, then from the index
    ///
    /// Both removals are idempotent. The index removal is always issued,
    /// even for identifiers that were never indexed, and its failure is
    /// logged and swallowed.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store step fails.
    pub fn delete(&self, id: &EntityId) -> Result<()> {
        debug!(target: "phonecat::catalog", kind = T::KIND, id = %id, "deleting record");

        self.store.delete_by_id(id)?;

        if let Err(err) = self.index.delete_by_id(id) {
            warn!(
                target: "phonecat::catalog",
                kind = T::KIND,
                id = %id,
                error = %err,
                "index delete failed; store remains authoritative"
            );
        }

        Ok(())
    }

    /// Free-text search against the index only
    ///
    /// Results reflect the index's current state, which may lag the store
    /// after a swallowed index failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the index operation fails.
    pub fn search(&self, query: &str, page: usize, size: usize) -> Result<Page<T>> {
        debug!(target: "phonecat::catalog", kind = T::KIND, query, "searching records");
        let parsed = Query::parse(query);
        let (items, total) = self.index.query_page(&parsed, page, size)?;
        Ok(Page::new(items, page, size, total))
    }
}

impl<T, S, X> Clone for CatalogService<T, S, X> {
    fn clone(&self) -> Self {
        CatalogService {
            store: Arc::clone(&self.store),
            index: Arc::clone(&self.index),
            _entity: PhantomData,
        }
    }
}
