//! Phone: a catalog listing for a handset

use phonecat_core::traits::{Entity, Fields};
use phonecat_core::types::EntityId;
use phonecat_core::value::FieldValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A handset listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    /// Store-assigned identifier; `None` until first insertion
    pub id: Option<EntityId>,
    /// Model name
    pub name: Option<String>,
    /// Manufacturer name
    pub brand: Option<String>,
    /// List price, arbitrary precision
    pub price: Option<Decimal>,
}

impl Phone {
    /// Create an empty, not-yet-persisted phone
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the model name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the manufacturer name
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Builder: set the list price
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

impl Entity for Phone {
    const KIND: &'static str = "phone";

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Fields for Phone {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = vec![];
        if let Some(id) = &self.id {
            fields.push(("id", FieldValue::text(id.as_str())));
        }
        if let Some(name) = &self.name {
            fields.push(("name", FieldValue::text(name.clone())));
        }
        if let Some(brand) = &self.brand {
            fields.push(("brand", FieldValue::text(brand.clone())));
        }
        if let Some(price) = &self.price {
            fields.push(("price", FieldValue::number(*price)));
        }
        fields
    }
}
