//! Durable storage for the document catalog.
//!
//! A store maps a single catalog key to the whole serialized document list.
//! There is no per-document addressing: every read and write moves the full
//! list as one unit.

mod backend;
mod file;
mod memory;
mod sqlite;

pub use backend::{decode, encode, validate_key, CatalogStore, StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key the catalog is stored under unless configured otherwise
pub const DEFAULT_CATALOG_KEY: &str = "job-documents";
