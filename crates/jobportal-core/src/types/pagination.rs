//! Pagination types for list endpoints.
//!
//! Every listing in the portal (users, jobs, applications) normalizes its
//! `page`/`limit` query parameters the same way and echoes
//! `{page, limit, total, totalPages}` alongside the items.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_LIMIT: u64 = 10;
/// Maximum page size.
pub const MAX_LIMIT: u64 = 100;

/// Normalized pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based, never below 1).
    pub page: u64,
    /// Number of items per page, within `1..=MAX_LIMIT`.
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping both values into range.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Build a page request from raw query-string values.
    ///
    /// Only the leading integer is read, so `"2abc"` is page 2. Missing,
    /// unparseable, or zero values fall back to the defaults (page 1,
    /// limit 10); negative values clamp to the lower bound and oversized
    /// limits clamp to [`MAX_LIMIT`].
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_or(page, 1).max(1);
        let limit = parse_or(limit, DEFAULT_LIMIT as i64).clamp(1, MAX_LIMIT as i64);
        Self {
            page: page as u64,
            limit: limit as u64,
        }
    }

    /// Number of rows to skip: `(page - 1) * limit`, saturating at
    /// `i64::MAX` so it always fits a SQL `OFFSET`.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    /// [`offset`](Self::offset) as a bind value.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset()).unwrap_or(i64::MAX)
    }

    /// `limit` as a bind value.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(MAX_LIMIT as i64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A page of results together with the echoed pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Requested page size.
    pub limit: u64,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// `ceil(total / limit)`; zero when nothing matches.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(request.limit),
        }
    }

    /// Transform every item, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }

    /// Same metadata, different items.
    pub fn with_items<U>(&self, items: Vec<U>) -> PageResponse<U> {
        PageResponse {
            items,
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }

    /// Drop items that fail `keep`, leaving `total` untouched.
    ///
    /// Used for filters that can only be evaluated after related entities
    /// are joined in; the page may end up shorter than `limit`.
    pub fn retain(mut self, keep: impl FnMut(&T) -> bool) -> Self {
        self.items.retain(keep);
        self
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(leading_int) {
        Some(0) | None => default,
        Some(v) => v,
    }
}

/// Reads an optional sign and the digits that follow, ignoring any
/// trailing text. Saturates instead of overflowing.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value = digits[..len].bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -value } else { value })
}
