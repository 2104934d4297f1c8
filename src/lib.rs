pub mod catalog;
pub mod config;
pub mod format;
pub mod logging;
pub mod query;
pub mod store;

// Re-export the data model crate for convenience
pub use types;

pub use catalog::{CatalogEngine, CatalogError, RawFile};
pub use store::CatalogStore;
