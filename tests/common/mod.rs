//! Shared test utilities for the integration suite.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a test's
//! main.rs.

#![allow(dead_code)]

use phonecat::{
    Brand, BrandCodec, CatalogFacade, CatalogService, MemoryIndex, MemoryStore, Phone, PhoneCodec,
};
use std::sync::{Arc, Once};

static INIT_TRACING: Once = Once::new();

/// Route tracing output through the test harness, once per process.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

pub type BrandService = CatalogService<Brand, MemoryStore<Brand>, MemoryIndex<Brand>>;
pub type PhoneService = CatalogService<Phone, MemoryStore<Phone>, MemoryIndex<Phone>>;
pub type BrandFacade = CatalogFacade<BrandCodec, MemoryStore<Brand>, MemoryIndex<Brand>>;
pub type PhoneFacade = CatalogFacade<PhoneCodec, MemoryStore<Phone>, MemoryIndex<Phone>>;

/// A brand catalog over fresh in-memory collaborators.
pub fn brand_service() -> BrandService {
    init_tracing();
    CatalogService::new(Arc::new(MemoryStore::new()), Arc::new(MemoryIndex::new()))
}

/// A phone catalog over fresh in-memory collaborators.
pub fn phone_service() -> PhoneService {
    init_tracing();
    CatalogService::new(Arc::new(MemoryStore::new()), Arc::new(MemoryIndex::new()))
}

/// A brand façade over fresh in-memory collaborators.
pub fn brand_facade() -> BrandFacade {
    init_tracing();
    CatalogFacade::new(
        BrandCodec,
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryIndex::new()),
    )
}

/// A phone façade over fresh in-memory collaborators.
pub fn phone_facade() -> PhoneFacade {
    init_tracing();
    CatalogFacade::new(
        PhoneCodec,
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryIndex::new()),
    )
}
