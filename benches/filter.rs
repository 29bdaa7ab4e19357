//! This bench measures filtering the bundled sheets, which runs on every
//! keystroke in an interactive viewer.

#![allow(missing_docs)]

use std::hint::black_box;

use cheatsheet::{Catalogue, Query, SheetKey, catalogue, filter_sheet};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const QUERIES: [&str; 4] = ["", "select", "users", "zzz_no_such_term"];

fn filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    for (key, sheet) in catalogue().sheets() {
        for query in QUERIES {
            group.bench_with_input(
                BenchmarkId::new(key.key(), format!("{query:?}")),
                &query,
                |b, query| b.iter(|| filter_sheet(black_box(sheet), black_box(query))),
            );
        }
    }
    group.finish();
}

fn parse_query(c: &mut Criterion) {
    c.bench_function("parse query", |b| {
        b.iter(|| Query::parse(black_box("  CREATE Index  ")));
    });
}

fn build_catalogue(c: &mut Criterion) {
    c.bench_function("build catalogue", |b| b.iter(Catalogue::builtin));
}

fn switch_sheet(c: &mut Criterion) {
    c.bench_function("switch sheet", |b| {
        let mut selector = cheatsheet::Selector::new(SheetKey::Mongo);
        b.iter(|| {
            for key in SheetKey::ALL {
                selector.switch_sheet(key);
                selector.set_query("user");
                black_box(selector.select(catalogue()));
            }
        });
    });
}

criterion_group!(benches, filter, parse_query, build_catalogue, switch_sheet);
criterion_main!(benches);
