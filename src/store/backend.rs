use thiserror::Error;

use crate::types::Document;

/// Maximum length for catalog keys
pub const MAX_KEY_LENGTH: usize = 128;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("SQLite error: {0}")]
  Sqlite(#[from] rusqlite::Error),
  #[error("Serialization error: {0}")]
  Serialize(#[source] serde_json::Error),
  #[error("Deserialization error: {0}")]
  Deserialize(#[source] serde_json::Error),
  #[error("Invalid catalog key '{0}'")]
  InvalidKey(String),
  #[error("Store unavailable: {0}")]
  Unavailable(String),
}

/// Persistence contract for the catalog.
///
/// `save` must replace the previous payload atomically: after a failed save,
/// `read` still returns the previous list.
pub trait CatalogStore: Send + Sync {
  /// Key the catalog payload lives under
  fn key(&self) -> &str;

  /// Read the saved list. `Ok(None)` when nothing was ever saved.
  fn read(&self) -> StoreResult<Option<Vec<Document>>>;

  /// Serialize and write the full list, replacing the previous payload
  fn save(&self, documents: &[Document]) -> StoreResult<()>;

  /// Fail-open read: any error degrades to an empty catalog.
  fn load(&self) -> Vec<Document> {
    match self.read() {
      Ok(Some(documents)) => {
        tracing::debug!("Loaded {} documents from '{}'", documents.len(), self.key());
        documents
      }
      Ok(None) => {
        tracing::debug!("No saved catalog under '{}'", self.key());
        Vec::new()
      }
      Err(e) => {
        tracing::warn!(
          "Could not load catalog '{}', starting empty: {}",
          self.key(),
          e
        );
        Vec::new()
      }
    }
  }
}

/// Serialize a document list to the stored payload format
pub fn encode(documents: &[Document]) -> StoreResult<String> {
  serde_json::to_string(documents).map_err(StoreError::Serialize)
}

/// Parse a stored payload
pub fn decode(payload: &str) -> StoreResult<Vec<Document>> {
  serde_json::from_str(payload).map_err(StoreError::Deserialize)
}

/// Catalog keys double as file names, so only a conservative character set
/// is accepted.
pub fn validate_key(key: &str) -> StoreResult<()> {
  if key.is_empty() || key.len() > MAX_KEY_LENGTH {
    return Err(StoreError::InvalidKey(key.to_string()));
  }

  let first_ok = key
    .chars()
    .next()
    .is_some_and(|c| c.is_ascii_alphanumeric());
  let rest_ok = key
    .chars()
    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');

  if !first_ok || !rest_ok || key.contains("..") {
    return Err(StoreError::InvalidKey(key.to_string()));
  }

  Ok(())
}
