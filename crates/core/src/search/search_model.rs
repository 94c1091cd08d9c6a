use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// A normalized free-text search with pagination.
///
/// Construction never fails: an out-of-range page is clamped to 1 and an
/// out-of-range page size falls back to [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub page: i64,
    pub page_size: i64,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = if page_size <= 0 || page_size > MAX_PAGE_SIZE {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self {
            text: text.into().trim().to_string(),
            page,
            page_size,
        }
    }

    /// Build a query from raw query-string values. Missing or non-numeric
    /// `page`/`page_size` fall back to their defaults.
    pub fn from_params(text: Option<&str>, page: Option<&str>, page_size: Option<&str>) -> Self {
        let parse = |raw: Option<&str>, default: i64| {
            raw.and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(default)
        };
        Self::new(
            text.unwrap_or_default(),
            parse(page, DEFAULT_PAGE),
            parse(page_size, DEFAULT_PAGE_SIZE),
        )
    }

    /// Whether the query should match every record.
    pub fn is_match_all(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset of the first hit on the requested page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("", DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_hits: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(query: &SearchQuery, total_hits: i64) -> Self {
        Self {
            page: query.page,
            page_size: query.page_size,
            total_hits,
            total_pages: total_pages(total_hits, query.page_size),
        }
    }
}

/// `ceil(total_hits / page_size)`, or 0 when there are no hits.
pub fn total_pages(total_hits: i64, page_size: i64) -> i64 {
    if total_hits <= 0 || page_size <= 0 {
        return 0;
    }
    (total_hits + page_size - 1) / page_size
}

/// One page of hits plus the total number of matching records.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHits<T> {
    pub total: i64,
    pub items: Vec<T>,
}
