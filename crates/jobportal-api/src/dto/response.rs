//! Response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jobportal_core::error::AppError;
use jobportal_core::types::PageResponse;

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Renders a page as `{<key>: items, page, limit, total, totalPages}`.
pub fn page_body<T: Serialize>(key: &str, page: PageResponse<T>) -> Result<Value, AppError> {
    let mut body = Map::new();
    body.insert(key.to_string(), serde_json::to_value(page.items)?);
    body.insert("page".to_string(), Value::from(page.page));
    body.insert("limit".to_string(), Value::from(page.limit));
    body.insert("total".to_string(), Value::from(page.total));
    body.insert("totalPages".to_string(), Value::from(page.total_pages));
    Ok(Value::Object(body))
}
