use std::path::Path;

use crate::types::FileRef;

/// An uploaded file as handed to ingest: a display name, a byte length and,
/// optionally, the content itself.
#[derive(Debug, Clone)]
pub struct RawFile {
  pub name: String,
  pub len: u64,
  pub content: Option<FileRef>,
}

impl RawFile {
  pub fn new(name: impl Into<String>, len: u64) -> Self {
    Self {
      name: name.into(),
      len,
      content: None,
    }
  }

  pub fn with_content(name: impl Into<String>, bytes: Vec<u8>) -> Self {
    Self {
      name: name.into(),
      len: bytes.len() as u64,
      content: Some(FileRef::from(bytes)),
    }
  }

  /// Read a file from disk, named after its final path component
  pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
    let path = path.as_ref();
    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_default();
    let bytes = std::fs::read(path)?;
    Ok(Self::with_content(name, bytes))
  }
}
