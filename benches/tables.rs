//! Criterion benchmarks comparing runtime table construction against lookups
//! into the precomputed tables.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use distance_tables::coordinate::{mult_dist_between, Coordinate};
use distance_tables::LookupTable;

fn build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let _ = group.bench_function("h_dist", |b| b.iter(LookupTable::h_dist_table));
    let _ = group.bench_function("mult_dist", |b| b.iter(LookupTable::mult_dist_table));
    group.finish();
}

fn render(c: &mut Criterion) {
    let table = LookupTable::mult_dist_table();
    let _ = c.bench_function("render mult_dist", |b| b.iter(|| black_box(&table).to_string()));
}

fn lookup(c: &mut Criterion) {
    let squares: Vec<Coordinate> = (-1..=8)
        .flat_map(|file| (-1..=8).map(move |rank| (file, rank)))
        .map(|square| Coordinate::try_from(square).expect("squares are on the padded board"))
        .collect();
    let king = Coordinate::try_from("e1").expect("valid square");
    let _ = c.bench_function("mult_dist_between", |b| {
        b.iter(|| {
            squares
                .iter()
                .map(|&square| mult_dist_between(black_box(square), king))
                .sum::<f64>()
        });
    });
}

criterion_group!(tables, build, render, lookup);
criterion_main!(tables);
