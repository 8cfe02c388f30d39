//! Pagination query parameter extractor.

use serde::Deserialize;

use jobportal_core::types::PageRequest;

/// Raw `page`/`limit` query parameters.
///
/// Kept as strings so that garbage such as `?page=abc` falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default: 10, max: 100).
    pub limit: Option<String>,
}

impl PaginationParams {
    /// Converts to a normalized `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}
