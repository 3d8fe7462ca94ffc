//! Contract definitions between the catalog core and its collaborators
//!
//! The record store and the search index are consumed only through the
//! narrow traits defined here, which is what allows swapping a live backend
//! for an in-memory fake in tests without touching the service layer.

use crate::error::Result;
use crate::query::Query;
use crate::types::{EntityId, PageRequest};
use crate::value::FieldValue;

/// A catalog entity
///
/// Entities carry an optional identifier: `None` before first insertion,
/// `Some` once the record store has assigned one.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Short lowercase entity kind name, used in log events
    const KIND: &'static str;

    /// The identifier, if the entity has been persisted
    fn id(&self) -> Option<&EntityId>;

    /// Attach an identifier (called by the record store on insertion)
    fn set_id(&mut self, id: EntityId);
}

/// Statically-typed field access for indexing and sorting
///
/// The replacement for reflection-driven field mapping: each entity
/// enumerates its present fields as `(name, value)` pairs. Absent
/// (`None`-valued) fields are simply omitted.
pub trait Fields {
    /// All present fields in declaration order
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;

    /// Look up a single field by name
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

/// Record store contract: the authoritative persistence layer
///
/// The store is the single source of truth for existence and field values.
/// All methods must be safe to call concurrently (requires Send + Sync);
/// per-key write ordering is last-writer-wins.
pub trait RecordStore<T: Entity>: Send + Sync {
    /// Insert a new record, assigning a fresh identifier
    ///
    /// Returns the record with its identifier populated.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn insert(&self, record: T) -> Result<T>;

    /// Store a record at an existing identifier (upsert)
    ///
    /// No existence check is performed: a fabricated identifier silently
    /// creates the record. Returns the record carrying `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn overwrite(&self, id: &EntityId, record: T) -> Result<T>;

    /// Point lookup by identifier
    ///
    /// Absence is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn find_by_id(&self, id: &EntityId) -> Result<Option<T>>;

    /// Bounded, ordered slice of records plus the total record count
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn find_page(&self, request: &PageRequest) -> Result<(Vec<T>, u64)>;

    /// Remove a record by identifier
    ///
    /// Deleting an absent identifier is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn delete_by_id(&self, id: &EntityId) -> Result<()>;
}

/// Search index contract: the derived, best-effort mirror
///
/// The index holds replaceable copies of records with no independent
/// identity. Failures here never roll back a store-side change; the
/// service layer observes and swallows them.
pub trait SearchIndex<T>: Send + Sync {
    /// Write the document copy for an identifier, replacing any prior copy
    ///
    /// # Errors
    ///
    /// Returns an error if the index operation fails.
    fn put(&self, id: &EntityId, document: T) -> Result<()>;

    /// Remove the document copy for an identifier
    ///
    /// Removing a never-indexed identifier is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the index operation fails.
    fn delete_by_id(&self, id: &EntityId) -> Result<()>;

    /// Execute a parsed query, returning one page of matching documents
    /// plus the total match count
    ///
    /// # Errors
    ///
    /// Returns an error if the index operation fails.
    fn query_page(&self, query: &Query, page: usize, size: usize) -> Result<(Vec<T>, u64)>;
}
