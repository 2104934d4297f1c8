use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::store::{CatalogStore, JsonFileStore, MemoryStore, SqliteStore, DEFAULT_CATALOG_KEY};

/// Expand environment variables in a string.
/// Supports $VAR_NAME and ${VAR_NAME} syntax.
fn expand_env_vars(input: &str) -> String {
  let mut result = String::with_capacity(input.len());
  let mut rest = input;

  while let Some(pos) = rest.find('$') {
    result.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];

    if let Some(braced) = after.strip_prefix('{') {
      if let Some(end) = braced.find('}') {
        result.push_str(&std::env::var(&braced[..end]).unwrap_or_default());
        rest = &braced[end + 1..];
        continue;
      }
      // Unterminated, keep the rest verbatim
      result.push_str(&rest[pos..]);
      return result;
    }

    let name_len = after
      .chars()
      .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
      .count();
    if name_len > 0 {
      result.push_str(&std::env::var(&after[..name_len]).unwrap_or_default());
    } else {
      result.push('$');
    }
    rest = &after[name_len..];
  }

  result.push_str(rest);
  result
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
  #[default]
  Sqlite,
  File,
  Memory,
}

impl std::str::FromStr for BackendType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "sqlite" => Ok(Self::Sqlite),
      "file" | "json" => Ok(Self::File),
      "memory" | "mem" => Ok(Self::Memory),
      _ => Err(format!("Unknown backend: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VaultConfig {
  #[serde(default)]
  pub storage: StorageSection,
  #[serde(default)]
  pub logging: LoggingSection,
}

/// Where the catalog lives.
///
/// `path` is the database file for `sqlite` and the directory holding
/// `<key>.json` for `file`. Unset, it falls back to a per-backend default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
  #[serde(default)]
  pub backend: BackendType,
  #[serde(default)]
  pub path: Option<String>,
  /// Key the catalog payload is stored under
  #[serde(default = "default_catalog_key")]
  pub key: String,
}

fn default_catalog_key() -> String {
  DEFAULT_CATALOG_KEY.into()
}

impl Default for StorageSection {
  fn default() -> Self {
    Self {
      backend: BackendType::default(),
      path: None,
      key: default_catalog_key(),
    }
  }
}

impl StorageSection {
  pub fn resolved_path(&self) -> &str {
    match (&self.path, self.backend) {
      (Some(path), _) => path.as_str(),
      (None, BackendType::Sqlite) => "jobvault.db",
      (None, BackendType::File) => "./data",
      (None, BackendType::Memory) => "",
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}
fn default_level() -> String {
  "warn".into()
}
impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

impl VaultConfig {
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
    let content = std::fs::read_to_string(&path)?;
    Self::from_yaml(&content)
  }

  pub fn from_yaml(content: &str) -> Result<Self, anyhow::Error> {
    let expanded = expand_env_vars(content);
    Ok(serde_yaml::from_str(&expanded)?)
  }

  pub fn find_and_load() -> Result<Option<Self>, anyhow::Error> {
    for p in ["jobvault.yaml", "jobvault.yml"] {
      if Path::new(p).exists() {
        tracing::info!("Loading config from {}", p);
        return Ok(Some(Self::from_file(p)?));
      }
    }
    Ok(None)
  }

  /// Build the configured store
  pub fn open_store(&self) -> Result<Arc<dyn CatalogStore>, anyhow::Error> {
    let storage = &self.storage;
    let path = storage.resolved_path();
    let store: Arc<dyn CatalogStore> = match storage.backend {
      BackendType::Sqlite => Arc::new(SqliteStore::open(path, &storage.key)?),
      BackendType::File => Arc::new(JsonFileStore::new(path, &storage.key)?),
      BackendType::Memory => Arc::new(MemoryStore::with_key(&storage.key)),
    };
    Ok(store)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_expand_env_vars() {
    std::env::set_var("JOBVAULT_TEST_DIR", "/srv/vault");
    assert_eq!(expand_env_vars("${JOBVAULT_TEST_DIR}/db"), "/srv/vault/db");
    assert_eq!(expand_env_vars("$JOBVAULT_TEST_DIR/db"), "/srv/vault/db");
    assert_eq!(expand_env_vars("cost: 5$"), "cost: 5$");
    assert_eq!(expand_env_vars("${UNTERMINATED"), "${UNTERMINATED");
    assert_eq!(expand_env_vars("$JOBVAULT_TEST_UNSET_VAR!"), "!");
    assert_eq!(expand_env_vars("plain"), "plain");
  }

  #[test]
  fn test_resolved_path_defaults_per_backend() {
    let mut storage = StorageSection::default();
    assert_eq!(storage.resolved_path(), "jobvault.db");
    storage.backend = BackendType::File;
    assert_eq!(storage.resolved_path(), "./data");
    storage.path = Some("/srv/vault".into());
    assert_eq!(storage.resolved_path(), "/srv/vault");
  }

  #[test]
  fn test_backend_parse() {
    assert_eq!("SQLite".parse::<BackendType>().unwrap(), BackendType::Sqlite);
    assert_eq!("json".parse::<BackendType>().unwrap(), BackendType::File);
    assert_eq!("memory".parse::<BackendType>().unwrap(), BackendType::Memory);
    assert!("postgres".parse::<BackendType>().is_err());
  }
}
