//! Criterion benchmarks for keyword search
//!
//! These benchmarks measure:
//! - Full search over the shipped index
//! - Quick-result truncation
//! - Result grouping
//! - Highlighting
//! - Search over a larger synthetic index

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use people_services_wiki::models::{ContentType, SearchableRecord};
use people_services_wiki::search::{
    highlight, ContentIndex, SearchConfig, SearchGroups, SearchService, CONTENT_INDEX,
};

fn synthetic_index(size: usize) -> ContentIndex {
    let records = (0..size)
        .map(|i| {
            let content_type = ContentType::ALL[i % ContentType::ALL.len()];
            SearchableRecord {
                id: format!("syn-{}", i),
                content_type,
                title: format!("Synthetic Record {}", i),
                category: format!("Category {}", i % 7),
                description: "Placeholder description used to size the index".to_string(),
                keywords: vec![format!("kw{}", i), "synthetic".to_string()],
                path: content_type.route().to_string(),
                content: None,
            }
        })
        .collect();
    ContentIndex::from_records(records).expect("synthetic ids are unique")
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for query in ["greeting", "jira", "e", "zzz-no-match"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| CONTENT_INDEX.search(black_box(q)));
        });
    }
    group.finish();
}

fn bench_quick_results(c: &mut Criterion) {
    let service = SearchService::global(SearchConfig::default());
    c.bench_function("quick_results", |b| {
        b.iter(|| service.quick_results(black_box("e")));
    });
}

fn bench_grouping(c: &mut Criterion) {
    let results = CONTENT_INDEX.search("e");
    c.bench_function("group_results", |b| {
        b.iter(|| SearchGroups::from_results(black_box(&results)));
    });
}

fn bench_highlight(c: &mut Criterion) {
    let text = "A service request or issue logged in a tracking system like JIRA \
                for resolution by the People Services team.";
    c.bench_function("highlight", |b| {
        b.iter(|| highlight(black_box(text), black_box("re")));
    });
}

fn bench_synthetic_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthetic_search");
    for size in [100usize, 1_000, 10_000] {
        let index = synthetic_index(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| index.search(black_box("kw42")));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_search,
    bench_quick_results,
    bench_grouping,
    bench_highlight,
    bench_synthetic_index
);
criterion_main!(benches);
