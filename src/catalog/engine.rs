use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::error::CatalogError;
use super::notify::{Notification, NotificationSink, TracingSink};
use super::raw::RawFile;
use crate::format::format_size;
use crate::query::{self, CatalogStats};
use crate::store::CatalogStore;
use crate::types::{Document, DocumentId, DocumentPatch, TypeFilter};

/// Owns the authoritative document list.
///
/// Mutations build the next list, write it through to the store, and only
/// then replace the in-memory catalog. A failed write leaves both the store
/// and the in-memory catalog as they were.
pub struct CatalogEngine {
  store: Arc<dyn CatalogStore>,
  clock: Arc<dyn Clock>,
  sink: Arc<dyn NotificationSink>,
  catalog: Vec<Document>,
  search_term: String,
  type_filter: TypeFilter,
}

impl CatalogEngine {
  /// Load the catalog from `store`. Unreadable payloads yield an empty catalog.
  pub fn open(
    store: Arc<dyn CatalogStore>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn NotificationSink>,
  ) -> Self {
    let catalog = repair(store.load());
    tracing::info!(
      "Catalog '{}' opened with {} documents",
      store.key(),
      catalog.len()
    );

    Self {
      store,
      clock,
      sink,
      catalog,
      search_term: String::new(),
      type_filter: TypeFilter::All,
    }
  }

  /// Open with the system clock and log-only notifications
  pub fn with_store(store: Arc<dyn CatalogStore>) -> Self {
    Self::open(store, Arc::new(SystemClock), Arc::new(TracingSink))
  }

  pub fn documents(&self) -> &[Document] {
    &self.catalog
  }

  pub fn len(&self) -> usize {
    self.catalog.len()
  }

  pub fn is_empty(&self) -> bool {
    self.catalog.is_empty()
  }

  pub fn get(&self, id: DocumentId) -> Option<&Document> {
    self.catalog.iter().find(|doc| doc.id == id)
  }

  pub fn search_term(&self) -> &str {
    &self.search_term
  }

  pub fn set_search_term(&mut self, term: impl Into<String>) {
    self.search_term = term.into();
  }

  pub fn type_filter(&self) -> &TypeFilter {
    &self.type_filter
  }

  pub fn set_type_filter(&mut self, filter: TypeFilter) {
    self.type_filter = filter;
  }

  /// Documents matching the current search term and type filter
  pub fn visible(&self) -> Vec<&Document> {
    query::query(&self.catalog, &self.search_term, &self.type_filter)
  }

  /// Counts over the whole catalog, regardless of the active filters
  pub fn stats(&self) -> CatalogStats {
    query::count_by_type(&self.catalog)
  }

  pub fn all_tags(&self) -> Vec<String> {
    query::distinct_tags(&self.catalog)
  }

  /// Re-read the catalog from the store, discarding the in-memory list
  pub fn reload(&mut self) -> usize {
    self.catalog = repair(self.store.load());
    self.catalog.len()
  }

  /// Add one document per raw file, in input order.
  ///
  /// Files that cannot become a document (blank name) are skipped; the rest
  /// are still ingested. Returns the number of documents added.
  pub fn ingest(&mut self, files: Vec<RawFile>) -> Result<usize, CatalogError> {
    if files.is_empty() {
      return Ok(0);
    }

    let today = self.clock.today();
    let mut next = self.catalog.clone();
    let mut added = 0;

    for file in files {
      if let Some(doc) = build_document(file, today, &next) {
        next.push(doc);
        added += 1;
      }
    }

    if added == 0 {
      return Ok(0);
    }

    self.commit(next)?;
    self.sink.notify(Notification::info(
      "Files uploaded",
      format!("{} file(s) uploaded successfully", added),
    ));
    Ok(added)
  }

  /// Remove a document. Deleting an id that is not present is a no-op and
  /// returns `Ok(false)`.
  pub fn delete(&mut self, id: DocumentId) -> Result<bool, CatalogError> {
    let Some(position) = self.position(id) else {
      tracing::debug!("Delete of absent document {} ignored", id);
      return Ok(false);
    };

    let mut next = self.catalog.clone();
    let removed = next.remove(position);
    self.commit(next)?;

    self.sink.notify(Notification::info(
      "Document deleted",
      format!("{} has been removed from your vault", removed.name),
    ));
    Ok(true)
  }

  /// Apply metadata changes to a document.
  ///
  /// Returns `Ok(None)` when the id is absent. A patch that changes nothing
  /// returns the document untouched without writing.
  pub fn update(
    &mut self,
    id: DocumentId,
    patch: DocumentPatch,
  ) -> Result<Option<Document>, CatalogError> {
    if patch.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
      return Err(CatalogError::InvalidName);
    }

    let Some(position) = self.position(id) else {
      return Ok(None);
    };

    let mut doc = self.catalog[position].clone();
    if !patch.apply(&mut doc) {
      return Ok(Some(doc));
    }
    doc.date_modified = self.clock.today().max(doc.date_created);

    let mut next = self.catalog.clone();
    next[position] = doc.clone();
    self.commit(next)?;

    self.sink.notify(Notification::info(
      "Document updated",
      format!("{} has been updated", doc.name),
    ));
    Ok(Some(doc))
  }

  fn position(&self, id: DocumentId) -> Option<usize> {
    self.catalog.iter().position(|doc| doc.id == id)
  }

  /// Persist `next`, then publish it
  fn commit(&mut self, next: Vec<Document>) -> Result<(), CatalogError> {
    if let Err(e) = self.store.save(&next) {
      tracing::error!("Failed to save catalog '{}': {}", self.store.key(), e);
      self.sink.notify(Notification::error(
        "Save failed",
        format!("Your changes could not be saved: {}", e),
      ));
      return Err(e.into());
    }

    self.catalog = next;
    Ok(())
  }
}

/// Restore catalog invariants on a loaded list: ids are unique (first
/// occurrence wins) and `date_modified` is never before `date_created`.
fn repair(documents: Vec<Document>) -> Vec<Document> {
  let mut seen = HashSet::with_capacity(documents.len());
  let mut repaired = Vec::with_capacity(documents.len());

  for mut doc in documents {
    if !seen.insert(doc.id) {
      tracing::warn!("Dropping duplicate document {} ({})", doc.id, doc.name);
      continue;
    }
    if doc.date_modified < doc.date_created {
      tracing::warn!(
        "Document {} modified {} before created {}, clamping",
        doc.id,
        doc.date_modified,
        doc.date_created
      );
      doc.date_modified = doc.date_created;
    }
    repaired.push(doc);
  }

  repaired
}

fn build_document(file: RawFile, today: NaiveDate, existing: &[Document]) -> Option<Document> {
  if file.name.trim().is_empty() {
    tracing::warn!("Skipping unnamed file ({} bytes)", file.len);
    return None;
  }

  let mut doc = Document::new(fresh_id(existing), file.name, format_size(file.len), today);
  doc.file = file.content;
  Some(doc)
}

fn fresh_id(existing: &[Document]) -> DocumentId {
  loop {
    let id = DocumentId::new();
    if !existing.iter().any(|doc| doc.id == id) {
      return id;
    }
  }
}
