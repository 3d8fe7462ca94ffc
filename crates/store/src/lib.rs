//! In-memory record store for the phonecat catalog engine
//!
//! This crate provides the store-of-record implementation behind the
//! `RecordStore` contract: serialized documents in an ordered map guarded
//! by a reader-writer lock. Identifier assignment happens here, on first
//! insertion.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryStore;
