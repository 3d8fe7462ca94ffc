//! Catalog entities and the store/index synchronization core
//!
//! This crate provides:
//! - Brand and Phone entities with their wire-level DTOs
//! - Per-entity codecs (DTO <-> record, pure and total)
//! - CatalogService: store-first writes with a best-effort index mirror
//! - CatalogFacade: DTO boundary with create/update validation
//!
//! The service holds its store and index as injected `Arc` collaborators;
//! there is no ambient lookup, and swapping either for a test double is a
//! type parameter away.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod brand;
pub mod codec;
pub mod dto;
pub mod facade;
pub mod phone;
pub mod service;

pub use brand::Brand;
pub use codec::{BrandCodec, Codec, PhoneCodec};
pub use dto::{BrandDto, PhoneDto};
pub use facade::CatalogFacade;
pub use phone::Phone;
pub use service::CatalogService;
