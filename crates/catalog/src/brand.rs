//! Brand: a phone manufacturer

use phonecat_core::traits::{Entity, Fields};
use phonecat_core::types::EntityId;
use phonecat_core::value::FieldValue;
use serde::{Deserialize, Serialize};

/// A phone manufacturer
///
/// Fields are optional end to end: the wire layer accepts partial
/// payloads and the codec is validation-free, so a record may carry any
/// subset of its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Store-assigned identifier; `None` until first insertion
    pub id: Option<EntityId>,
    /// Brand name
    pub name: Option<String>,
    /// Country of origin
    pub country: Option<String>,
}

impl Brand {
    /// Create an empty, not-yet-persisted brand
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

impl Entity for Brand {
    const KIND: &'static str = "brand";

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Fields for Brand {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = vec![];
        if let Some(id) = &self.id {
            fields.push(("id", FieldValue::text(id.as_str())));
        }
        if let Some(name) = &self.name {
            fields.push(("name", FieldValue::text(name.clone())));
        }
        if let Some(country) = &self.country {
            fields.push(("country", FieldValue::text(country.clone())));
        }
        fields
    }
}
