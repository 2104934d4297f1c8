//! Pure read-side views over a catalog: search/type filtering and stats.

mod filter;
mod stats;

pub use filter::{filter_by_type, matches_search, query, search};
pub use stats::{count_by_type, distinct_tags, CatalogStats};
