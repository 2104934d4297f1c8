use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{DocumentKind, TypeDescriptor};

pub const DEFAULT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }
}

impl Default for DocumentId {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Display for DocumentId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::str::FromStr for DocumentId {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s.trim())
      .map(Self)
      .map_err(|e| format!("Invalid document id '{}': {}", s, e))
  }
}

/// Handle to the raw bytes of an uploaded file.
///
/// Lives only as long as the process; it is never written to the store.
#[derive(Clone)]
pub struct FileRef(Arc<[u8]>);

impl FileRef {
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl From<Vec<u8>> for FileRef {
  fn from(bytes: Vec<u8>) -> Self {
    Self(bytes.into())
  }
}

impl std::fmt::Debug for FileRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "FileRef({} bytes)", self.0.len())
  }
}

/// Metadata record for one stored artifact.
///
/// Equality compares the persisted fields only; the attached `file` handle is
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
  pub id: DocumentId,
  pub name: String,
  #[serde(rename = "type", default)]
  pub kind: DocumentKind,
  pub size: String,
  pub date_created: NaiveDate,
  pub date_modified: NaiveDate,
  #[serde(default = "default_version")]
  pub version: String,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub description: String,
  #[serde(skip)]
  pub file: Option<FileRef>,
}

fn default_version() -> String {
  DEFAULT_VERSION.to_string()
}

impl Document {
  /// A freshly ingested record: kind `other`, version "1.0", no tags, both
  /// dates set to `today`.
  pub fn new(
    id: DocumentId,
    name: impl Into<String>,
    size: impl Into<String>,
    today: NaiveDate,
  ) -> Self {
    Self {
      id,
      name: name.into(),
      kind: DocumentKind::Other,
      size: size.into(),
      date_created: today,
      date_modified: today,
      version: default_version(),
      tags: Vec::new(),
      description: String::new(),
      file: None,
    }
  }

  pub fn descriptor(&self) -> TypeDescriptor {
    self.kind.descriptor()
  }
}

impl PartialEq for Document {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
      && self.name == other.name
      && self.kind == other.kind
      && self.size == other.size
      && self.date_created == other.date_created
      && self.date_modified == other.date_modified
      && self.version == other.version
      && self.tags == other.tags
      && self.description == other.description
  }
}

impl Eq for Document {}

/// Metadata changes applied by an update. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, rename = "type")]
  pub kind: Option<DocumentKind>,
  #[serde(default)]
  pub version: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  /// Replaces the whole tag list (applied before `add_tags`/`remove_tags`)
  #[serde(default)]
  pub tags: Option<Vec<String>>,
  #[serde(default)]
  pub add_tags: Vec<String>,
  #[serde(default)]
  pub remove_tags: Vec<String>,
}

impl DocumentPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.kind.is_none()
      && self.version.is_none()
      && self.description.is_none()
      && self.tags.is_none()
      && self.add_tags.is_empty()
      && self.remove_tags.is_empty()
  }

  pub fn rename(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn kind(mut self, kind: DocumentKind) -> Self {
    self.kind = Some(kind);
    self
  }

  pub fn version(mut self, version: impl Into<String>) -> Self {
    self.version = Some(version.into());
    self
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
    self.add_tags.push(tag.into());
    self
  }

  pub fn remove_tag(mut self, tag: impl Into<String>) -> Self {
    self.remove_tags.push(tag.into());
    self
  }

  /// Apply to `doc`, returning whether any field actually changed.
  /// Dates are the caller's concern.
  pub fn apply(&self, doc: &mut Document) -> bool {
    let before = doc.clone();

    if let Some(name) = &self.name {
      doc.name = name.trim().to_string();
    }
    if let Some(kind) = &self.kind {
      doc.kind = kind.clone();
    }
    if let Some(version) = &self.version {
      doc.version = version.clone();
    }
    if let Some(description) = &self.description {
      doc.description = description.clone();
    }
    if let Some(tags) = &self.tags {
      doc.tags.clear();
      push_tags(&mut doc.tags, tags);
    }
    push_tags(&mut doc.tags, &self.add_tags);
    for tag in &self.remove_tags {
      let tag = tag.trim();
      doc.tags.retain(|t| t != tag);
    }

    *doc != before
  }
}

fn push_tags(tags: &mut Vec<String>, new: &[String]) {
  for tag in new {
    let tag = tag.trim();
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
      tags.push(tag.to_string());
    }
  }
}
