use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::backend::{decode, encode, validate_key, CatalogStore, StoreResult};
use crate::types::Document;

/// One JSON file per catalog key, `<dir>/<key>.json`.
///
/// Saves go to a sibling `.tmp` file which is synced and then renamed over
/// the target, so a reader sees either the old or the new payload.
pub struct JsonFileStore {
  key: String,
  path: PathBuf,
}

impl JsonFileStore {
  pub fn new(dir: impl AsRef<Path>, key: &str) -> StoreResult<Self> {
    validate_key(key)?;
    let path = dir.as_ref().join(format!("{}.json", key));
    Ok(Self {
      key: key.to_string(),
      path,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn temp_path(&self) -> PathBuf {
    let mut name = self.path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
  }

  fn write_temp(&self, temp: &Path, payload: &str) -> StoreResult<()> {
    let mut file = File::create(temp)?;
    file.write_all(payload.as_bytes())?;
    file.sync_all()?;
    Ok(())
  }
}

impl CatalogStore for JsonFileStore {
  fn key(&self) -> &str {
    &self.key
  }

  fn read(&self) -> StoreResult<Option<Vec<Document>>> {
    let payload = match fs::read_to_string(&self.path) {
      Ok(payload) => payload,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };
    decode(&payload).map(Some)
  }

  fn save(&self, documents: &[Document]) -> StoreResult<()> {
    let payload = encode(documents)?;

    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)?;
    }

    let temp = self.temp_path();
    if let Err(e) = self.write_temp(&temp, &payload) {
      let _ = fs::remove_file(&temp);
      return Err(e);
    }

    if let Err(e) = fs::rename(&temp, &self.path) {
      let _ = fs::remove_file(&temp);
      return Err(e.into());
    }

    tracing::debug!(
      "Catalog saved: {} documents to {}",
      documents.len(),
      self.path.display()
    );
    Ok(())
  }
}
