//! Request payload coercion.
//!
//! Clients of the original API sent numeric fields as either JSON
//! numbers or numeric strings; both are accepted here. Each coercion
//! failure names the offending field so a missing `productId` and an
//! unparseable `quantity` produce distinct 400 responses.

use serde::Deserialize;

use crate::error::ApiError;

/// A request field that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// Coerces to i64 (string→long at the boundary).
    pub fn as_long(&self, field: &'static str) -> Result<i64, ApiError> {
        match self {
            FieldValue::Number(n) => n.as_i64().ok_or_else(|| not_a(field, "an integer")),
            FieldValue::Text(s) => s.trim().parse().map_err(|_| not_a(field, "an integer")),
        }
    }

    /// Coerces to i32 (string→int at the boundary).
    pub fn as_int(&self, field: &'static str) -> Result<i32, ApiError> {
        let value = self.as_long(field)?;
        i32::try_from(value).map_err(|_| not_a(field, "a 32-bit integer"))
    }

    /// Coerces to f64 (string→double at the boundary).
    pub fn as_double(&self, field: &'static str) -> Result<f64, ApiError> {
        match self {
            FieldValue::Number(n) => n.as_f64().ok_or_else(|| not_a(field, "a number")),
            FieldValue::Text(s) => s.trim().parse().map_err(|_| not_a(field, "a number")),
        }
    }
}

/// Unwraps a required field, failing with the field's name if absent.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ApiError> {
    value.ok_or(ApiError::Validation {
        field,
        reason: "missing required field".to_string(),
    })
}

fn not_a(field: &'static str, expected: &str) -> ApiError {
    ApiError::Validation {
        field,
        reason: format!("not {expected}"),
    }
}
