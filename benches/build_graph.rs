//! Benchmarks for import graph construction
//!
//! Builds graphs from synthetic package lists shaped like a large
//! monorepo: layered packages, some vendored, each importing a handful
//! of siblings plus standard library noise.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use depcheck::export::{export_to_string, ExportFormat};
use depcheck::graph::build_graph;
use depcheck::parser::{Package, PackageList};

/// Create a package list with `total` packages, each importing up to `fan_out` others
fn create_package_list(total: usize, fan_out: usize) -> PackageList {
    let name = |i: usize| {
        if i % 10 == 0 {
            format!("github.com/bench/repo/vendor/github.com/dep{}/lib", i)
        } else {
            format!("github.com/bench/repo/pkg{}", i)
        }
    };

    (0..total)
        .map(|i| {
            let mut imports = vec!["fmt".to_string(), "encoding/json".to_string()];
            imports.extend((1..=fan_out).map(|k| name((i + k) % total)));
            Package::new(format!("/src/{}", i), name(i), imports)
        })
        .collect()
}

/// Benchmark graph construction
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");

    for size in [100, 1000, 5000].iter() {
        let pkgs = create_package_list(*size, 5);

        group.bench_with_input(BenchmarkId::new("packages", size), &pkgs, |b, pkgs| {
            b.iter(|| build_graph(black_box(pkgs), &[], &[]).unwrap());
        });
    }

    group.finish();
}

/// Benchmark construction with exclusions applied
fn bench_build_with_excludes(c: &mut Criterion) {
    let pkgs = create_package_list(1000, 5);
    let excludes: Vec<String> = (0..1000)
        .step_by(7)
        .map(|i| format!("github.com/bench/repo/pkg{}", i))
        .collect();
    let excludes: Vec<&str> = excludes.iter().map(String::as_str).collect();

    c.bench_function("build_graph_with_excludes", |b| {
        b.iter(|| build_graph(black_box(&pkgs), &[], black_box(&excludes)).unwrap());
    });
}

/// Benchmark DOT rendering of a built graph
fn bench_export_dot(c: &mut Criterion) {
    let graph = build_graph(&create_package_list(1000, 5), &[], &[]).unwrap();

    c.bench_function("export_dot", |b| {
        b.iter(|| export_to_string(ExportFormat::Dot, black_box(&graph)).unwrap());
    });
}

criterion_group!(benches, bench_build, bench_build_with_excludes, bench_export_dot);
criterion_main!(benches);
