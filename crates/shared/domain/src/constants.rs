//! Domain-level constants.
//!
//! Canonical catalog values used by the CRUD walkthrough and its tests.

// =============================================================================
// Categories
// =============================================================================

/// Category assigned to instructional titles
pub const CATEGORY_EDUCATION: &str = "education";

// =============================================================================
// Queries
// =============================================================================

/// Row limit applied to catalog searches
pub const DEFAULT_FIND_LIMIT: u64 = 10;

/// Books with stock below this value are eligible for a discount
pub const LOW_STOCK_THRESHOLD: i32 = 100;

// =============================================================================
// Fixtures
// =============================================================================

/// Title of the sample book inserted by the walkthrough
pub const SAMPLE_BOOK_TITLE: &str = "Rel for dummies";

/// Title the sample book is renamed to by the update step
pub const SAMPLE_BOOK_UPDATED_TITLE: &str = "REL for dummies";

/// Name of the sample book's author
pub const SAMPLE_AUTHOR_NAME: &str = "CZ2I28 Delta";

/// LIKE pattern matching the sample book
pub const SAMPLE_TITLE_PATTERN: &str = "%dummies%";
