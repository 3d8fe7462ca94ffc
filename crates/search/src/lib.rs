//! Search index for the phonecat catalog engine
//!
//! This crate provides:
//! - A basic tokenizer shared by indexing and query execution
//! - BM25-lite term scoring helpers
//! - MemoryIndex: an inverted index with per-field posting lists behind
//!   the `SearchIndex` contract
//!
//! The index holds denormalized document copies so queries are answered
//! without consulting the record store. It is a best-effort mirror: the
//! store of record remains authoritative.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod scorer;
pub mod tokenizer;

pub use index::MemoryIndex;
pub use tokenizer::{tokenize, tokenize_unique};
