//! Builds Elasticsearch search bodies from a [`SearchQuery`].

use serde_json::{json, Value};
use trellis_core::search::SearchQuery;

/// Fields matched by free-text search, with boosts.
pub const SEARCH_FIELDS: [&str; 3] = ["title^2", "description", "genre"];

/// Build the `_search` body for one page of movies.
///
/// Blank text matches everything. Results are ordered by rating (highest
/// first) with the exact title as tie-breaker so paging is stable.
pub fn build_search_request(query: &SearchQuery) -> Value {
    let clause = if query.is_match_all() {
        json!({ "match_all": {} })
    } else {
        json!({
            "multi_match": {
                "query": query.text,
                "fields": SEARCH_FIELDS,
            }
        })
    };

    json!({
        "from": query.offset(),
        "size": query.page_size,
        "track_total_hits": true,
        "query": clause,
        "sort": [
            { "rating": { "order": "desc" } },
            // Indexes created without the keyword sub-field still sort.
            { "title.keyword": { "order": "asc", "unmapped_type": "keyword" } },
        ],
    })
}
