//! # Bridge Benchmarks
//!
//! Symbol mangling and diagnostic emission.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use particle_native::jni::bridge::func;
use particle_native::jni::symbol::{mangle_long_name, mangle_short_name, NATIVE_METHODS};
use particle_native::TARGET_CLASS;

fn bench_mangling(c: &mut Criterion) {
    let mut group = c.benchmark_group("mangling");

    group.bench_function("short_names", |b| {
        b.iter(|| {
            for method in NATIVE_METHODS {
                black_box(mangle_short_name(black_box(TARGET_CLASS), black_box(method.name)));
            }
        });
    });

    group.bench_function("long_names", |b| {
        b.iter(|| {
            for method in NATIVE_METHODS {
                black_box(mangle_long_name(TARGET_CLASS, method.name, black_box(method.signature)));
            }
        });
    });

    group.finish();
}

fn bench_func(c: &mut Criterion) {
    let mut out = Vec::with_capacity(1 << 20);

    c.bench_function("func_to_buffer", |b| {
        b.iter(|| {
            out.clear();
            func(black_box(&mut out));
        });
    });
}

criterion_group!(benches, bench_mangling, bench_func);
criterion_main!(benches);
