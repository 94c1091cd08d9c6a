/// Page used when the client sends none (or garbage)
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client sends none, or one outside `1..=MAX_PAGE_SIZE`
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Largest page size a search may request
pub const MAX_PAGE_SIZE: i64 = 50;

/// Amount converted when the client omits it
pub const DEFAULT_CONVERSION_AMOUNT: &str = "1";

/// Date format accepted for `visited_at`
pub const VISITED_AT_FORMAT: &str = "%Y-%m-%d";
