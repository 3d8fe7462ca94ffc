//! Foundational types for the catalog engine
//!
//! This module defines:
//! - EntityId: opaque string identifier assigned by the record store
//! - SortSpec / SortOrder: ordering specification for paged listings
//! - PageRequest: inbound pagination parameters
//! - Page: a bounded, ordered slice of results plus total-count metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// EntityId
// ============================================================================

/// Opaque identifier for a catalog record
///
/// Assigned by the record store on first insertion and immutable thereafter.
/// A record carrying an EntityId denotes an entity already persisted; a
/// record without one denotes a not-yet-created entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh random identifier (UUID v4, simple format)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Direction for a sorted listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending field order (default)
    #[default]
    Asc,
    /// Descending field order
    Desc,
}

/// Ordering specification for `find_page`
///
/// Names an entity field exposed through [`crate::traits::Fields`]. Records
/// missing the field sort after records that carry it, regardless of order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field name to order by
    pub field: String,
    /// Direction
    pub order: SortOrder,
}

impl SortSpec {
    /// Ascending sort on a field
    pub fn asc(field: impl Into<String>) -> Self {
        SortSpec {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    /// Descending sort on a field
    pub fn desc(field: impl Into<String>) -> Self {
        SortSpec {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

// ============================================================================
// PageRequest
// ============================================================================

/// Inbound pagination parameters
///
/// Page indices are zero-based. An unsorted request falls back to
/// identifier order, which keeps repeated listings deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: usize,
    /// Fixed page size
    pub size: usize,
    /// Optional ordering; identifier order when absent
    pub sort: Option<SortSpec>,
}

impl PageRequest {
    /// Create an unsorted page request
    pub fn new(page: usize, size: usize) -> Self {
        PageRequest {
            page,
            size,
            sort: None,
        }
    }

    /// Builder: set the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Offset of the first item on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

// ============================================================================
// Page
// ============================================================================

/// A bounded, ordered slice of results plus total-count metadata
///
/// `total` counts every matching record, not just the returned slice, so
/// callers can construct pagination metadata without a second query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records on this page
    pub items: Vec<T>,
    /// Zero-based page index this slice was taken from
    pub page: usize,
    /// Requested page size (the slice may be shorter on the last page)
    pub size: usize,
    /// Total matching records across all pages
    pub total: u64,
}

impl<T> Page<T> {
    /// Create a new page
    pub fn new(items: Vec<T>, page: usize, size: usize, total: u64) -> Self {
        Page {
            items,
            page,
            size,
            total,
        }
    }

    /// An empty page with zero total
    pub fn empty(page: usize, size: usize) -> Self {
        Page {
            items: vec![],
            page,
            size,
            total: 0,
        }
    }

    /// Map every item, preserving pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }

    /// Number of pages needed to cover `total` at this page size
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        let size = self.size as u64;
        (self.total + size - 1) / size
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
