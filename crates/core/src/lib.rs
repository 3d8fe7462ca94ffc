//! Core types and traits for the phonecat catalog engine
//!
//! This crate defines the foundational types used throughout the system:
//! - EntityId: Opaque string identifier assigned by the record store
//! - FieldValue: Statically-typed field representation for indexing and sorting
//! - Page / PageRequest / SortSpec: Pagination types
//! - Query: Parsed free-text query representation
//! - Error: Error type hierarchy
//! - Traits: Contract definitions (Entity, Fields, RecordStore, SearchIndex)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod query;
pub mod traits;
pub mod types;
pub mod value;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use query::{Clause, Occur, Query};
pub use traits::{Entity, Fields, RecordStore, SearchIndex};
pub use types::{EntityId, Page, PageRequest, SortOrder, SortSpec};
pub use value::FieldValue;
