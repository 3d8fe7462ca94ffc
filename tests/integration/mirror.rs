//! Best-effort mirror semantics under injected collaborator failures
//!
//! The index is consumed only through its narrow contract, so these tests
//! swap in doubles: a toggleable failing index, a call-counting index, and
//! a store that always fails.

use crate::common::init_tracing;
use phonecat::{
    Brand, CatalogService, Entity, EntityId, Error, MemoryIndex, MemoryStore, PageRequest, Query,
    RecordStore, Result, SearchIndex,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Doubles
// ============================================================================

/// Delegating index whose operations can be switched to fail
struct FlakyIndex {
    inner: MemoryIndex<Brand>,
    down: AtomicBool,
}

impl FlakyIndex {
    fn new() -> Self {
        FlakyIndex {
            inner: MemoryIndex::new(),
            down: AtomicBool::new(false),
        }
    }

    fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(Error::IndexError("search backend down".to_string()))
        } else {
            Ok(())
        }
    }
}

impl SearchIndex<Brand> for FlakyIndex {
    fn put(&self, id: &EntityId, document: Brand) -> Result<()> {
        self.check()?;
        self.inner.put(id, document)
    }

    fn delete_by_id(&self, id: &EntityId) -> Result<()> {
        self.check()?;
        self.inner.delete_by_id(id)
    }

    fn query_page(&self, query: &Query, page: usize, size: usize) -> Result<(Vec<Brand>, u64)> {
        self.check()?;
        self.inner.query_page(query, page, size)
    }
}

/// Delegating index that counts calls
struct CountingIndex {
    inner: MemoryIndex<Brand>,
    puts: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingIndex {
    fn new() -> Self {
        CountingIndex {
            inner: MemoryIndex::new(),
            puts: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }
}

impl SearchIndex<Brand> for CountingIndex {
    fn put(&self, id: &EntityId, document: Brand) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(id, document)
    }

    fn delete_by_id(&self, id: &EntityId) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id)
    }

    fn query_page(&self, query: &Query, page: usize, size: usize) -> Result<(Vec<Brand>, u64)> {
        self.inner.query_page(query, page, size)
    }
}

/// Store whose every operation fails
struct BrokenStore;

impl RecordStore<Brand> for BrokenStore {
    fn insert(&self, _record: Brand) -> Result<Brand> {
        Err(Error::StorageError("store unavailable".to_string()))
    }

    fn overwrite(&self, _id: &EntityId, _record: Brand) -> Result<Brand> {
        Err(Error::StorageError("store unavailable".to_string()))
    }

    fn find_by_id(&self, _id: &EntityId) -> Result<Option<Brand>> {
        Err(Error::StorageError("store unavailable".to_string()))
    }

    fn find_page(&self, _request: &PageRequest) -> Result<(Vec<Brand>, u64)> {
        Err(Error::StorageError("store unavailable".to_string()))
    }

    fn delete_by_id(&self, _id: &EntityId) -> Result<()> {
        Err(Error::StorageError("store unavailable".to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn save_succeeds_while_index_is_down() {
    init_tracing();
    let index = Arc::new(FlakyIndex::new());
    let svc: CatalogService<Brand, MemoryStore<Brand>, FlakyIndex> =
        CatalogService::new(Arc::new(MemoryStore::new()), Arc::clone(&index));

    index.set_down(true);
    let saved = svc.save(Brand::new().with_name("Acme")).unwrap();
    let id = saved.id().unwrap().clone();

    // the store committed; the mirror is behind
    assert!(svc.find_one(&id).unwrap().is_some());
    index.set_down(false);
    assert_eq!(svc.search("Acme", 0, 10).unwrap().total, 0);
}

#[test]
fn next_successful_save_repairs_the_mirror() {
    init_tracing();
    let index = Arc::new(FlakyIndex::new());
    let svc: CatalogService<Brand, MemoryStore<Brand>, FlakyIndex> =
        CatalogService::new(Arc::new(MemoryStore::new()), Arc::clone(&index));

    index.set_down(true);
    let saved = svc.save(Brand::new().with_name("Acme")).unwrap();
    let id = saved.id().unwrap().clone();

    index.set_down(false);
    assert_eq!(svc.search("Acme", 0, 10).unwrap().total, 0);

    // re-saving the same record closes the divergence window
    svc.save(saved).unwrap();
    let hits = svc.search("Acme", 0, 10).unwrap();
    assert_eq!(hits.total, 1);
    assert_eq!(hits.items[0].id(), Some(&id));
}

#[test]
fn delete_while_index_down_leaves_stale_copy_until_retried() {
    init_tracing();
    let index = Arc::new(FlakyIndex::new());
    let svc: CatalogService<Brand, MemoryStore<Brand>, FlakyIndex> =
        CatalogService::new(Arc::new(MemoryStore::new()), Arc::clone(&index));

    let saved = svc.save(Brand::new().with_name("Acme")).unwrap();
    let id = saved.id().unwrap().clone();
    assert_eq!(svc.search("Acme", 0, 10).unwrap().total, 1);

    index.set_down(true);
    svc.delete(&id).unwrap();
    assert!(svc.find_one(&id).unwrap().is_none());

    // stale indexed copy survives the failed mirror delete
    index.set_down(false);
    assert_eq!(svc.search("Acme", 0, 10).unwrap().total, 1);

    // deleting again is a store no-op but still clears the index
    svc.delete(&id).unwrap();
    assert_eq!(svc.search("Acme", 0, 10).unwrap().total, 0);
}

#[test]
fn index_delete_is_issued_even_for_never_indexed_ids() {
    init_tracing();
    let index = Arc::new(CountingIndex::new());
    let svc: CatalogService<Brand, MemoryStore<Brand>, CountingIndex> =
        CatalogService::new(Arc::new(MemoryStore::new()), Arc::clone(&index));

    svc.delete(&EntityId::from("never-indexed")).unwrap();
    assert_eq!(index.deletes.load(Ordering::SeqCst), 1);
}

#[test]
fn store_failure_aborts_before_the_index_step() {
    init_tracing();
    let index = Arc::new(CountingIndex::new());
    let svc: CatalogService<Brand, BrokenStore, CountingIndex> =
        CatalogService::new(Arc::new(BrokenStore), Arc::clone(&index));

    let result = svc.save(Brand::new().with_name("Acme"));
    assert!(matches!(result, Err(Error::StorageError(_))));
    assert_eq!(index.puts.load(Ordering::SeqCst), 0);

    let result = svc.delete(&EntityId::from("any"));
    assert!(matches!(result, Err(Error::StorageError(_))));
    assert_eq!(index.deletes.load(Ordering::SeqCst), 0);
}
