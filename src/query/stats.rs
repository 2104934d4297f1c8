use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{Document, DocumentKind};

/// Per-kind document counts for the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
  pub total: usize,
  pub by_type: BTreeMap<DocumentKind, usize>,
}

impl CatalogStats {
  pub fn count(&self, kind: &DocumentKind) -> usize {
    self.by_type.get(kind).copied().unwrap_or(0)
  }

  /// Counts for the six known kinds in display order, zeros included
  pub fn known_counts(&self) -> Vec<(DocumentKind, usize)> {
    DocumentKind::KNOWN
      .into_iter()
      .map(|kind| {
        let count = self.count(&kind);
        (kind, count)
      })
      .collect()
  }

  /// Documents whose stored kind is outside the known set
  pub fn unrecognized(&self) -> usize {
    self
      .by_type
      .iter()
      .filter(|(kind, _)| !kind.is_known())
      .map(|(_, count)| count)
      .sum()
  }
}

/// Partition the full catalog by kind. Independent of any active filter.
pub fn count_by_type(catalog: &[Document]) -> CatalogStats {
  let mut by_type = BTreeMap::new();
  for doc in catalog {
    *by_type.entry(doc.kind.clone()).or_insert(0) += 1;
  }
  CatalogStats {
    total: catalog.len(),
    by_type,
  }
}

/// Every tag in use, deduplicated case-insensitively (first spelling wins),
/// sorted case-insensitively.
pub fn distinct_tags(catalog: &[Document]) -> Vec<String> {
  let mut seen: BTreeMap<String, String> = BTreeMap::new();
  for tag in catalog.iter().flat_map(|doc| doc.tags.iter()) {
    seen
      .entry(tag.to_lowercase())
      .or_insert_with(|| tag.clone());
  }
  seen.into_values().collect()
}
