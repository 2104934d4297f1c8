use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CatalogError {
  /// The store rejected a write; the in-memory catalog was left unchanged
  #[error("Failed to save catalog: {0}")]
  Store(#[from] StoreError),
  #[error("Document name must not be empty")]
  InvalidName,
}
