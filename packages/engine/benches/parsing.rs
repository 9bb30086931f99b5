//! Benchmarks for document parsing and library queries.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use gesetze_engine::{parser, Library, Settings};

/// Build a synthetic law document with the given number of provisions.
fn synthetic_law(code: &str, provisions: usize) -> String {
    let mut doc = format!("---\nTitle: Gesetz {code}\nJurabk: {code}\n---\n\n");
    for i in 1..=provisions {
        doc.push_str(&format!("# § {i} Abschnitt {i}\n"));
        doc.push_str("(1) Erster Absatz mit etwas Text zur Auffüllung.\n");
        doc.push_str("(2) Zweiter Absatz mit etwas mehr Text zur Auffüllung.\n");
        doc.push('\n');
    }
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = synthetic_law("BenchG", 200);
    c.bench_function("parse_200_provisions", |b| {
        b.iter(|| parser::parse(black_box(&doc)))
    });
}

fn bench_get(c: &mut Criterion) {
    let mut library = Library::with_settings(Settings { min_provisions: 1 });
    library
        .load_from_text(&synthetic_law("BenchG", 200))
        .unwrap();
    c.bench_function("get_provision_with_absatz", |b| {
        b.iter(|| library.get(black_box("benchg"), black_box("150"), Some("2")))
    });
}

fn bench_fuzzy_listing(c: &mut Criterion) {
    let mut library = Library::with_settings(Settings { min_provisions: 1 });
    for i in 0..500 {
        library
            .load_from_text(&synthetic_law(&format!("BenchG{i}"), 10))
            .unwrap();
    }
    c.bench_function("list_available_fuzzy_500_laws", |b| {
        b.iter(|| library.list_available(Some(black_box("benchg42"))))
    });
}

criterion_group!(benches, bench_parse, bench_get, bench_fuzzy_listing);
criterion_main!(benches);
