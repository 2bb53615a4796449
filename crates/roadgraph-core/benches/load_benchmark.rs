//! Benchmark loading and rendering on both backends.
//!
//! Run with: `cargo bench --bench load_benchmark`

use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roadgraph_core::{render, BackendKind, DelimiterProfile, GraphLoader};

/// A ring of `places` places, each with roads to its next `fan_out` neighbours.
fn generate_network(places: usize, fan_out: usize) -> String {
    let mut text = String::new();
    for i in 0..places {
        let _ = write!(text, "city:P{i}");
        for step in 1..=fan_out {
            let dest = (i + step) % places;
            let _ = write!(text, "|road:{}:P{dest}", step * 10);
        }
        text.push('\n');
    }
    text
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let loader = GraphLoader::new(DelimiterProfile::pipe()).expect("valid profile");

    for places in &[16, 128, 512] {
        let text = generate_network(*places, 4);
        for kind in [BackendKind::List, BackendKind::Matrix] {
            group.bench_with_input(BenchmarkId::new(kind.to_string(), places), places, |bencher, _| {
                bencher.iter(|| loader.load_str(black_box(&text), kind).expect("load"));
            });
        }
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let loader = GraphLoader::new(DelimiterProfile::pipe()).expect("valid profile");

    for places in &[16, 128, 512] {
        let text = generate_network(*places, 4);
        for kind in [BackendKind::List, BackendKind::Matrix] {
            let graph = loader.load_str(&text, kind).expect("load");
            group.bench_with_input(BenchmarkId::new(kind.to_string(), places), places, |bencher, _| {
                bencher.iter(|| render(black_box(&graph)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_render);
criterion_main!(benches);
