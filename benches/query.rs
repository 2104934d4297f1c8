//! Query pipeline benchmarks.
//!
//! Run with: cargo bench --bench query

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jobvault::query::{count_by_type, query};
use jobvault::types::{Document, DocumentId, DocumentKind, TypeFilter};

fn build_catalog(size: usize) -> Vec<Document> {
  let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
  (0..size)
    .map(|i| {
      let mut doc = Document::new(
        DocumentId::new(),
        format!("Document_{:05}.pdf", i),
        "42 KB",
        today,
      );
      doc.kind = DocumentKind::KNOWN[i % DocumentKind::KNOWN.len()].clone();
      doc.tags = vec![format!("tag-{}", i % 17), "job-search".to_string()];
      doc.description = format!("Description for application number {}", i);
      doc
    })
    .collect()
}

fn bench_query(c: &mut Criterion) {
  let mut group = c.benchmark_group("query");

  for size in [100, 1_000, 10_000] {
    let catalog = build_catalog(size);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_with_input(BenchmarkId::new("all", size), &catalog, |b, catalog| {
      b.iter(|| black_box(query(catalog, "", &TypeFilter::All)));
    });

    group.bench_with_input(BenchmarkId::new("search", size), &catalog, |b, catalog| {
      b.iter(|| black_box(query(catalog, "TAG-3", &TypeFilter::All)));
    });

    let resumes = TypeFilter::Only(DocumentKind::Resume);
    group.bench_with_input(
      BenchmarkId::new("search_and_type", size),
      &catalog,
      |b, catalog| {
        b.iter(|| black_box(query(catalog, "application", &resumes)));
      },
    );

    group.bench_with_input(BenchmarkId::new("stats", size), &catalog, |b, catalog| {
      b.iter(|| black_box(count_by_type(catalog)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
