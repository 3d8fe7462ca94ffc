//! CatalogFacade: the DTO boundary over a CatalogService
//!
//! The façade owns the caller-input checks the core deliberately does not
//! perform: a create must not carry an identifier, an update must. Beyond
//! that it is a pass-through, translating DTOs and page requests into
//! service calls and mapping result pages back through the codec.

use crate::codec::Codec;
use crate::service::CatalogService;
use phonecat_core::error::{Error, Result};
use phonecat_core::traits::{Entity, Fields, RecordStore, SearchIndex};
use phonecat_core::types::{EntityId, Page, PageRequest};
use std::sync::Arc;

/// DTO-speaking boundary for one entity variant
pub struct CatalogFacade<C: Codec, S, X> {
    service: CatalogService<C::Record, S, X>,
    codec: C,
}

impl<C, S, X> CatalogFacade<C, S, X>
where
    C: Codec,
    C::Record: Fields,
    S: RecordStore<C::Record>,
    X: SearchIndex<C::Record>,
{
    /// Create a façade over injected store and index handles
    pub fn new(codec: C, store: Arc<S>, index: Arc<X>) -> Self {
        CatalogFacade {
            service: CatalogService::new(store, index),
            codec,
        }
    }

    /// The wrapped service
    pub fn service(&self) -> &CatalogService<C::Record, S, X> {
        &self.service
    }

    /// Create a new entity
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the DTO already carries an identifier,
    /// before anything reaches the store or the index.
    pub fn create(&self, dto: C::Dto) -> Result<C::Dto> {
        let record = self.codec.to_record(dto);
        if record.id().is_some() {
            return Err(Error::InvalidRequest(format!(
                "a new {} cannot already have an identifier",
                <C::Record as Entity>::KIND
            )));
        }
        Ok(self.codec.to_dto(self.service.save(record)?))
    }

    /// Update an existing entity
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the DTO carries no identifier.
    pub fn update(&self, dto: C::Dto) -> Result<C::Dto> {
        let record = self.codec.to_record(dto);
        if record.id().is_none() {
            return Err(Error::InvalidRequest(format!(
                "updating a {} requires an identifier",
                <C::Record as Entity>::KIND
            )));
        }
        Ok(self.codec.to_dto(self.service.save(record)?))
    }

    /// Point lookup; absence is `Ok(None)`
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub fn get(&self, id: &EntityId) -> Result<Option<C::Dto>> {
        Ok(self.service.find_one(id)?.map(|r| self.codec.to_dto(r)))
    }

    /// Paged listing from the store
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub fn list(&self, request: &PageRequest) -> Result<Page<C::Dto>> {
        Ok(self.service.find_all(request)?.map(|r| self.codec.to_dto(r)))
    }

    /// Free-text search against the index
    ///
    /// # Errors
    ///
    /// Returns an error if the index operation fails.
    pub fn search(&self, query: &str, page: usize, size: usize) -> Result<Page<C::Dto>> {
        Ok(self
            .service
            .search(query, page, size)?
            .map(|r| self.codec.to_dto(r)))
    }

    /// Delete by identifier; idempotent
    ///
    /// # Errors
    ///
    /// Returns an error only when the store step fails.
    pub fn delete(&self, id: &EntityId) -> Result<()> {
        self.service.delete(id)
    }
}
