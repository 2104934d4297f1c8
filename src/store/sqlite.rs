use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};

use super::backend::{decode, encode, validate_key, CatalogStore, StoreResult};
use crate::types::Document;

const PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA temp_store = MEMORY;
"#;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS catalog (
    key TEXT PRIMARY KEY,
    payload TEXT NOT NULL,
    updated_at TEXT NOT NULL
) WITHOUT ROWID;
"#;

/// Key-value table in a SQLite file. Each save is a single upsert inside a
/// transaction, so a failed write leaves the previous row in place.
pub struct SqliteStore {
  key: String,
  conn: Mutex<Connection>,
}

impl SqliteStore {
  pub fn open(path: &str, key: &str) -> StoreResult<Self> {
    validate_key(key)?;

    let conn = if path == ":memory:" {
      Connection::open_in_memory()?
    } else {
      Connection::open(path)?
    };

    conn.execute_batch(PRAGMAS)?;
    conn.execute_batch(SCHEMA)?;
    tracing::info!("SQLite catalog store opened at {}", path);

    Ok(Self {
      key: key.to_string(),
      conn: Mutex::new(conn),
    })
  }

  pub fn in_memory(key: &str) -> StoreResult<Self> {
    Self::open(":memory:", key)
  }

  /// Remove the stored payload for this key
  pub fn clear(&self) -> StoreResult<bool> {
    let conn = self.conn.lock();
    let removed = conn.execute("DELETE FROM catalog WHERE key = ?1", params![self.key])?;
    Ok(removed > 0)
  }
}

impl CatalogStore for SqliteStore {
  fn key(&self) -> &str {
    &self.key
  }

  fn read(&self) -> StoreResult<Option<Vec<Document>>> {
    let payload: Option<String> = {
      let conn = self.conn.lock();
      let mut stmt = conn.prepare_cached("SELECT payload FROM catalog WHERE key = ?1")?;
      let payload = stmt
        .query_row(params![self.key], |row| row.get(0))
        .optional()?;
      payload
    };

    match payload {
      Some(payload) => decode(&payload).map(Some),
      None => Ok(None),
    }
  }

  fn save(&self, documents: &[Document]) -> StoreResult<()> {
    let payload = encode(documents)?;
    let now = Utc::now().to_rfc3339();

    let mut conn = self.conn.lock();
    let tx = conn.transaction()?;
    tx.execute(
      "INSERT INTO catalog (key, payload, updated_at) VALUES (?1, ?2, ?3)
       ON CONFLICT(key) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at",
      params![self.key, payload, now],
    )?;
    tx.commit()?;

    tracing::debug!("Catalog saved: {} documents under '{}'", documents.len(), self.key);
    Ok(())
  }
}
