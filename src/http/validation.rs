//! # Validation Gate
//!
//! Shape-checks incoming product payloads before any mutation runs. All
//! violations are collected and reported in a single ValidationError, not
//! just the first.

use serde_json::Value;

use crate::errors::{ApiError, ApiResult};

/// A validated, normalized product payload
#[derive(Debug, Clone)]
pub struct ProductInput {
    /// Trimmed display name
    pub name: String,

    /// Trimmed description
    pub description: String,

    /// Non-negative price
    pub price: f64,

    /// Trimmed, lowercased category
    pub category: String,

    /// Stock flag when supplied; creation defaults to true, update
    /// preserves the stored value
    pub in_stock: Option<bool>,
}

/// Validate a raw JSON body into a `ProductInput`
pub fn validate_product(body: &Value) -> ApiResult<ProductInput> {
    let mut violations = Vec::new();

    let name = required_string(body, "name").unwrap_or_else(|| {
        violations.push("Name is required and must be a non-empty string".to_string());
        String::new()
    });

    let description = required_string(body, "description").unwrap_or_else(|| {
        violations.push("Description is required and must be a non-empty string".to_string());
        String::new()
    });

    let price = match body.get("price").and_then(Value::as_f64) {
        Some(p) if p >= 0.0 => p,
        _ => {
            violations.push("Price is required and must be a non-negative number".to_string());
            0.0
        }
    };

    let category = required_string(body, "category").unwrap_or_else(|| {
        violations.push("Category is required and must be a non-empty string".to_string());
        String::new()
    });

    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    Ok(ProductInput {
        name,
        description,
        price,
        category: category.to_lowercase(),
        in_stock: body.get("inStock").map(json_truthy),
    })
}

/// Extract a field that must be a non-empty (post-trim) string
fn required_string(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Truthiness coercion for non-boolean `inStock` values, matching the
/// loose coercion of the wire format this service replaces
fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
