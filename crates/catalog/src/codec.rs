//! Per-entity codecs between wire DTOs and records
//!
//! One codec per entity variant, each a stateless unit struct. Mapping is
//! total and pure: every value the wire type accepts is accepted here,
//! field for field, with no validation. The reflection-driven mapper this
//! replaces did the same moves dynamically.

use crate::brand::Brand;
use crate::dto::{BrandDto, PhoneDto};
use crate::phone::Phone;
use phonecat_core::traits::Entity;
use phonecat_core::types::EntityId;

/// Bidirectional DTO <-> record mapping for one entity variant
pub trait Codec: Send + Sync {
    /// Internal record type
    type Record: Entity;
    /// Wire-level DTO type
    type Dto;

    /// Map a DTO to a record
    fn to_record(&self, dto: Self::Dto) -> Self::Record;

    /// Map a record to a DTO
    fn to_dto(&self, record: Self::Record) -> Self::Dto;
}

/// Codec for [`Brand`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrandCodec;

impl Codec for BrandCodec {
    type Record = Brand;
    type Dto = BrandDto;

    fn to_record(&self, dto: BrandDto) -> Brand {
        Brand {
            id: dto.id.map(EntityId::from),
            name: dto.name,
            country: dto.country,
        }
    }

    fn to_dto(&self, record: Brand) -> BrandDto {
        BrandDto {
            id: record.id.map(|id| id.to_string()),
            name: record.name,
            country: record.country,
        }
    }
}

/// Codec for [`Phone`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneCodec;

impl Codec for PhoneCodec {
    type Record = Phone;
    type Dto = PhoneDto;

    fn to_record(&self, dto: PhoneDto) -> Phone {
        Phone {
            id: dto.id.map(EntityId::from),
            name: dto.name,
            brand: dto.brand,
            price: dto.price,
        }
    }

    fn to_dto(&self, record: Phone) -> PhoneDto {
        PhoneDto {
            id: record.id.map(|id| id.to_string()),
            name: record.name,
            brand: record.brand,
            price: record.price,
        }
    }
}
