//! Search module - paginated query and result metadata shared by indexed
//! collections.

mod search_model;

pub use search_model::{total_pages, Pagination, SearchHits, SearchQuery};
