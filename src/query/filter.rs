use crate::types::{Document, TypeFilter};

/// Compute the visible set for a search term and type filter.
///
/// A non-empty search term keeps documents whose name, description or any
/// tag contains it, case-insensitively. The type filter then keeps documents
/// of the selected kind. Catalog order is preserved.
pub fn query<'a>(
  catalog: &'a [Document],
  search_term: &str,
  type_filter: &TypeFilter,
) -> Vec<&'a Document> {
  let needle = search_term.to_lowercase();
  let visible: Vec<&Document> = catalog
    .iter()
    .filter(|doc| matches_search(doc, &needle))
    .filter(|doc| type_filter.matches(&doc.kind))
    .collect();

  tracing::debug!(
    "Query '{}' [{}]: {} of {} documents visible",
    search_term,
    type_filter,
    visible.len(),
    catalog.len()
  );
  visible
}

/// `needle` must already be lower-cased. An empty needle matches everything.
pub fn matches_search(doc: &Document, needle: &str) -> bool {
  if needle.is_empty() {
    return true;
  }

  doc.name.to_lowercase().contains(needle)
    || doc.description.to_lowercase().contains(needle)
    || doc.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Search step on its own
pub fn search<'a, I>(documents: I, search_term: &str) -> Vec<&'a Document>
where
  I: IntoIterator<Item = &'a Document>,
{
  let needle = search_term.to_lowercase();
  documents
    .into_iter()
    .filter(|doc| matches_search(doc, &needle))
    .collect()
}

/// Type step on its own
pub fn filter_by_type<'a, I>(documents: I, type_filter: &TypeFilter) -> Vec<&'a Document>
where
  I: IntoIterator<Item = &'a Document>,
{
  documents
    .into_iter()
    .filter(|doc| type_filter.matches(&doc.kind))
    .collect()
}
