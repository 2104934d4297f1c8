use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use super::backend::{decode, encode, validate_key, CatalogStore, StoreError, StoreResult};
use super::DEFAULT_CATALOG_KEY;
use crate::types::Document;

/// In-process store. Keeps the serialized payload rather than the documents
/// themselves so reads go through the same parse path as the durable
/// backends.
pub struct MemoryStore {
  key: String,
  payload: RwLock<Option<String>>,
  fail_writes: AtomicBool,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::with_key(DEFAULT_CATALOG_KEY)
  }

  pub fn with_key(key: &str) -> Self {
    Self {
      key: key.to_string(),
      payload: RwLock::new(None),
      fail_writes: AtomicBool::new(false),
    }
  }

  /// Seed the store with a raw payload, valid or not
  pub fn with_payload(payload: impl Into<String>) -> Self {
    let store = Self::new();
    *store.payload.write() = Some(payload.into());
    store
  }

  /// Current raw payload, if anything was saved
  pub fn payload(&self) -> Option<String> {
    self.payload.read().clone()
  }

  /// Make subsequent saves fail, leaving the payload untouched
  pub fn fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

impl CatalogStore for MemoryStore {
  fn key(&self) -> &str {
    &self.key
  }

  fn read(&self) -> StoreResult<Option<Vec<Document>>> {
    match self.payload.read().as_deref() {
      Some(payload) => decode(payload).map(Some),
      None => Ok(None),
    }
  }

  fn save(&self, documents: &[Document]) -> StoreResult<()> {
    validate_key(&self.key)?;
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(StoreError::Unavailable("writes disabled".into()));
    }
    let payload = encode(documents)?;
    *self.payload.write() = Some(payload);
    Ok(())
  }
}
