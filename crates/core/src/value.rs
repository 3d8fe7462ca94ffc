//! Field value representation for catalog entities
//!
//! Entities expose their scalar fields as `(name, FieldValue)` pairs through
//! the [`crate::traits::Fields`] trait. The search index tokenizes the
//! rendered text of each value; the record store compares values for sorted
//! listings. This replaces the original reflection-driven field access with
//! a statically-typed surface.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single entity field value
///
/// Values of the same variant compare naturally (lexical for text, numeric
/// for numbers). Across variants, numbers order before text so that mixed
/// sorts stay total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free-text field
    Text(String),
    /// Arbitrary-precision numeric field
    Number(Decimal),
}

impl FieldValue {
    /// Text field value
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Numeric field value
    pub fn number(n: Decimal) -> Self {
        FieldValue::Number(n)
    }

    /// Render the value as searchable text
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}
