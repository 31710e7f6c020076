//! Resolution benchmarks.
//!
//! Run with: `cargo bench -p rolodex-router`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rolodex_router::RouteTable;

fn build_table(num_routes: usize) -> RouteTable {
    let mut builder = RouteTable::builder().base_path("/app");

    for i in 0..num_routes / 2 {
        builder = builder.route(format!("section{i}-list"), format!("/section{i}"));
        builder = builder.route(
            format!("section{i}-detail"),
            format!("/section{i}/{{id}}"),
        );
    }

    builder
        .redirect("/", "section0-list")
        .build()
        .expect("bench table should build")
}

fn bench_static_resolve(c: &mut Criterion) {
    let table = build_table(100);

    c.bench_function("static_resolve", |b| {
        b.iter(|| {
            black_box(table.resolve("/app/section25"));
        });
    });
}

fn bench_param_resolve(c: &mut Criterion) {
    let table = build_table(100);

    c.bench_function("param_resolve", |b| {
        b.iter(|| {
            black_box(table.resolve("/app/section25/12345"));
        });
    });
}

fn bench_redirect_resolve(c: &mut Criterion) {
    let table = build_table(100);

    c.bench_function("redirect_resolve", |b| {
        b.iter(|| {
            black_box(table.resolve("/app/"));
        });
    });
}

fn bench_miss(c: &mut Criterion) {
    let table = build_table(100);

    c.bench_function("miss", |b| {
        b.iter(|| {
            black_box(table.resolve("/app/nonexistent/path"));
        });
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for num_routes in [10, 50, 100, 500] {
        let table = build_table(num_routes);

        group.bench_with_input(
            BenchmarkId::new("param_resolve", num_routes),
            &num_routes,
            |b, &n| {
                let path = format!("/app/section{}/12345", n / 4);
                b.iter(|| black_box(table.resolve(&path)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_static_resolve,
    bench_param_resolve,
    bench_redirect_resolve,
    bench_miss,
    bench_scaling
);
criterion_main!(benches);
