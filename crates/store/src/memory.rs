//! MemoryStore: the authoritative record store
//!
//! ## Design
//!
//! Records are held as MessagePack-encoded bytes in a `BTreeMap` keyed by
//! `EntityId`, behind a `parking_lot::RwLock`. The ordered map makes the
//! unsorted listing order (identifier order) deterministic.
//!
//! ## Thread Safety
//!
//! MemoryStore is `Send + Sync`. Per-key write ordering is last-writer-wins
//! at the lock: concurrent writers to the same identifier race, and the
//! later write sticks.
//!
//! ## Lifecycle
//!
//! `insert` assigns the identifier; `overwrite` stores at a caller-supplied
//! identifier with upsert semantics (no existence check); `delete_by_id` is
//! idempotent.

use parking_lot::RwLock;
use phonecat_core::error::{Error, Result};
use phonecat_core::traits::{Entity, Fields, RecordStore};
use phonecat_core::types::{EntityId, PageRequest, SortOrder, SortSpec};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Authoritative in-memory record store
///
/// Documents are stored serialized, the way an external document store
/// would hold them; decode failures surface as `SerializationError`.
///
/// # Example
///
/// ```ignore
/// use phonecat_store::MemoryStore;
///
/// let store: MemoryStore<Brand> = MemoryStore::new();
/// let saved = store.insert(Brand::new().with_name("Acme"))?;
/// assert!(saved.id().is_some());
/// ```
pub struct MemoryStore<T> {
    records: RwLock<BTreeMap<EntityId, Vec<u8>>>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> MemoryStore<T>
where
    T: Entity + Fields + Serialize + DeserializeOwned,
{
    /// Create an empty store
    pub fn new() -> Self {
        MemoryStore {
            records: RwLock::new(BTreeMap::new()),
            _entity: PhantomData,
        }
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Serialize a record for storage
    fn encode(record: &T) -> Result<Vec<u8>> {
        rmp_serde::to_vec(record).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// Deserialize a record from storage
    fn decode(bytes: &[u8]) -> Result<T> {
        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// Compare two records under a sort specification
    ///
    /// Records missing the sort field order last regardless of direction;
    /// ties fall back to identifier order for stable pagination.
    fn compare(a: &T, b: &T, sort: &SortSpec) -> Ordering {
        let by_field = match (a.field(&sort.field), b.field(&sort.field)) {
            (Some(x), Some(y)) => match sort.order {
                SortOrder::Asc => x.cmp(&y),
                SortOrder::Desc => y.cmp(&x),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_field.then_with(|| a.id().cmp(&b.id()))
    }
}

impl<T> Default for MemoryStore<T>
where
    T: Entity + Fields + Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Entity + Fields + Serialize + DeserializeOwned,
{
    fn insert(&self, mut record: T) -> Result<T> {
        let id = EntityId::generate();
        record.set_id(id.clone());
        let bytes = Self::encode(&record)?;
        self.records.write().insert(id, bytes);
        Ok(record)
    }

    fn overwrite(&self, id: &EntityId, mut record: T) -> Result<T> {
        record.set_id(id.clone());
        let bytes = Self::encode(&record)?;
        self.records.write().insert(id.clone(), bytes);
        Ok(record)
    }

    fn find_by_id(&self, id: &EntityId) -> Result<Option<T>> {
        match self.records.read().get(id) {
            Some(bytes) => Ok(Some(Self::decode(bytes)?)),
            None => Ok(None),
        }
    }

    fn find_page(&self, request: &PageRequest) -> Result<(Vec<T>, u64)> {
        let decoded: Vec<T> = {
            let guard = self.records.read();
            let mut all = Vec::with_capacity(guard.len());
            for bytes in guard.values() {
                all.push(Self::decode(bytes)?);
            }
            all
        };

        let total = decoded.len() as u64;
        let mut records = decoded;
        if let Some(sort) = &request.sort {
            records.sort_by(|a, b| Self::compare(a, b, sort));
        }

        let items = if request.size == 0 {
            vec![]
        } else {
            records
                .into_iter()
                .skip(request.offset())
                .take(request.size)
                .collect()
        };

        Ok((items, total))
    }

    fn delete_by_id(&self, id: &EntityId) -> Result<()> {
        self.records.write().remove(id);
        Ok(())
    }
}
