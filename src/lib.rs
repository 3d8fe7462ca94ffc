//! Phonecat - catalog engine with a full-text search mirror
//!
//! Phonecat exposes catalog entities (Brand, Phone) through CRUD
//! operations while keeping a secondary search index consistent with the
//! primary record store. The store of record is authoritative; the index
//! is a best-effort mirror written after every successful store step.
//!
//! # Quick Start
//!
//! ```
//! use phonecat::{Brand, CatalogService, MemoryIndex, MemoryStore};
//! use std::sync::Arc;
//!
//! let service = CatalogService::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(MemoryIndex::new()),
//! );
//!
//! let saved = service.save(Brand::new().with_name("Acme")).unwrap();
//! assert!(saved.id.is_some());
//!
//! let hits = service.search("name:acme", 0, 10).unwrap();
//! assert_eq!(hits.total, 1);
//! ```
//!
//! # Architecture
//!
//! The service consumes its collaborators only through the narrow
//! [`RecordStore`] and [`SearchIndex`] contracts, so either side can be
//! swapped for a test double without touching the synchronization core.

pub use phonecat_catalog::{
    Brand, BrandCodec, BrandDto, CatalogFacade, CatalogService, Codec, Phone, PhoneCodec,
    PhoneDto,
};
pub use phonecat_core::{
    Clause, Entity, EntityId, Error, FieldValue, Fields, Occur, Page, PageRequest, Query,
    RecordStore, Result, SearchIndex, SortOrder, SortSpec,
};
pub use phonecat_search::MemoryIndex;
pub use phonecat_store::MemoryStore;
