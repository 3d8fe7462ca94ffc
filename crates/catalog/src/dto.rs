//! Wire-level DTOs for catalog entities
//!
//! DTOs mirror the entity shapes with plain string identifiers. All fields
//! are optional; validation happens at the façade boundary, not here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire representation of a [`crate::Brand`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandDto {
    /// Identifier as an opaque string; absent on create
    pub id: Option<String>,
    /// Brand name
    pub name: Option<String>,
    /// Country of origin
    pub country: Option<String>,
}

/// Wire representation of a [`crate::Phone`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneDto {
    /// Identifier as an opaque string; absent on create
    pub id: Option<String>,
    /// Model name
    pub name: Option<String>,
    /// Manufacturer name
    pub brand: Option<String>,
    /// List price, arbitrary precision
    pub price: Option<Decimal>,
}
