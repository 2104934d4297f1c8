use chrono::NaiveDate;

use jobvault::query::{count_by_type, distinct_tags, filter_by_type, query, search};
use jobvault::types::{Document, DocumentId, DocumentKind, TypeFilter};

fn doc(name: &str, kind: DocumentKind, tags: &[&str], description: &str) -> Document {
  let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
  let mut doc = Document::new(DocumentId::new(), name, "1 KB", today);
  doc.kind = kind;
  doc.tags = tags.iter().map(|t| t.to_string()).collect();
  doc.description = description.to_string();
  doc
}

fn catalog() -> Vec<Document> {
  vec![
    doc("Resume_Final.pdf", DocumentKind::Resume, &["backend"], ""),
    doc("cover-acme.docx", DocumentKind::CoverLetter, &[], "Letter for ACME resume screen"),
    doc("aws-cert.pdf", DocumentKind::Certificate, &["Cloud", "AWS"], ""),
    doc("transcript.pdf", DocumentKind::Transcript, &[], "BSc transcript"),
    doc("site.zip", DocumentKind::Portfolio, &["frontend"], "Personal site"),
    doc("notes.txt", DocumentKind::Other, &["resume-tips"], ""),
    doc("ref.pdf", DocumentKind::Unrecognized("reference".into()), &[], ""),
  ]
}

fn names(docs: &[&Document]) -> Vec<String> {
  docs.iter().map(|d| d.name.clone()).collect()
}

#[test]
fn test_empty_query_returns_everything_in_order() {
  let catalog = catalog();
  let visible = query(&catalog, "", &TypeFilter::All);
  assert_eq!(visible.len(), catalog.len());
  for (got, want) in visible.iter().zip(catalog.iter()) {
    assert_eq!(got.id, want.id);
  }
}

#[test]
fn test_search_is_case_insensitive_substring() {
  let catalog = vec![doc("Resume_Final.pdf", DocumentKind::Other, &[], "")];
  for term in ["resume", "RESUME", "final", "Final.pdf", "e_f"] {
    assert_eq!(query(&catalog, term, &TypeFilter::All).len(), 1, "term {}", term);
  }
  assert!(query(&catalog, "resumes", &TypeFilter::All).is_empty());
}

#[test]
fn test_search_covers_name_description_and_tags() {
  let catalog = catalog();
  let visible = query(&catalog, "resume", &TypeFilter::All);
  assert_eq!(
    names(&visible),
    vec!["Resume_Final.pdf", "cover-acme.docx", "notes.txt"]
  );

  let visible = query(&catalog, "aws", &TypeFilter::All);
  assert_eq!(names(&visible), vec!["aws-cert.pdf"]);

  let visible = query(&catalog, "cloud", &TypeFilter::All);
  assert_eq!(names(&visible), vec!["aws-cert.pdf"]);
}

#[test]
fn test_type_filter() {
  let catalog = catalog();
  let visible = query(&catalog, "", &TypeFilter::Only(DocumentKind::Portfolio));
  assert_eq!(names(&visible), vec!["site.zip"]);

  // Unrecognized kinds only show up without a type filter
  let visible = query(&catalog, "ref", &TypeFilter::Only(DocumentKind::Other));
  assert!(visible.is_empty());
  let visible = query(&catalog, "ref", &TypeFilter::All);
  assert_eq!(names(&visible), vec!["ref.pdf"]);
}

#[test]
fn test_search_and_type_compose() {
  let catalog = catalog();
  let visible = query(&catalog, "resume", &TypeFilter::Only(DocumentKind::CoverLetter));
  assert_eq!(names(&visible), vec!["cover-acme.docx"]);
}

#[test]
fn test_composition_order_does_not_matter() {
  let catalog = catalog();
  let mut filters = vec![TypeFilter::All];
  filters.extend(DocumentKind::KNOWN.into_iter().map(TypeFilter::Only));
  filters.push(TypeFilter::Only(DocumentKind::Unrecognized("reference".into())));

  for term in ["", "resume", "PDF", "a", "zzz", "site", " "] {
    for filter in &filters {
      let search_first = filter_by_type(search(&catalog, term), filter);
      let type_first = search(filter_by_type(&catalog, filter), term);
      let combined = query(&catalog, term, filter);
      assert_eq!(names(&search_first), names(&type_first), "{} / {}", term, filter);
      assert_eq!(names(&search_first), names(&combined), "{} / {}", term, filter);
    }
  }
}

#[test]
fn test_visible_set_has_no_duplicates() {
  // Matches in several fields still yield the document once
  let catalog = vec![doc("resume.pdf", DocumentKind::Resume, &["resume"], "my resume")];
  assert_eq!(query(&catalog, "resume", &TypeFilter::All).len(), 1);
}

#[test]
fn test_count_by_type() {
  let catalog = catalog();
  let stats = count_by_type(&catalog);
  assert_eq!(stats.total, 7);
  assert_eq!(stats.count(&DocumentKind::Resume), 1);
  assert_eq!(stats.count(&DocumentKind::Other), 1);
  assert_eq!(stats.unrecognized(), 1);

  let known = stats.known_counts();
  assert_eq!(known.len(), 6);
  assert_eq!(known[0], (DocumentKind::Resume, 1));
  assert_eq!(known.iter().map(|(_, n)| n).sum::<usize>(), 6);
}

#[test]
fn test_count_by_type_empty() {
  let stats = count_by_type(&[]);
  assert_eq!(stats.total, 0);
  assert_eq!(stats.count(&DocumentKind::Resume), 0);
  assert!(stats.known_counts().iter().all(|(_, n)| *n == 0));
}

#[test]
fn test_distinct_tags() {
  let catalog = catalog();
  assert_eq!(
    distinct_tags(&catalog),
    vec!["AWS", "backend", "Cloud", "frontend", "resume-tips"]
  );
}
