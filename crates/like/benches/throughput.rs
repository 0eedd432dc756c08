// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Throughput benchmarks for the common LIKE pattern shapes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use like_match::LikeMatcher;

fn bench_literal(c: &mut Criterion) {
    let m = LikeMatcher::new(b"hello world").expect("compiles");
    c.bench_function("literal_no_wildcard", |b| {
        b.iter(|| black_box(m.matches(black_box(b"hello world"))))
    });
}

fn bench_prefix(c: &mut Criterion) {
    let m = LikeMatcher::new(b"hello%").expect("compiles");
    let input = "hello ".to_string() + &"world ".repeat(64);
    c.bench_function("trailing_wildcard", |b| {
        b.iter(|| black_box(m.matches(black_box(input.as_bytes()))))
    });
}

fn bench_multi_segment(c: &mut Criterion) {
    let m = LikeMatcher::new(b"%aa%bb%cc%dd%").expect("compiles");
    let input = "xx".repeat(64) + "aabbccdd" + &"yy".repeat(64);
    c.bench_function("four_segment_wildcard_chain", |b| {
        b.iter(|| black_box(m.matches(black_box(input.as_bytes()))))
    });
}

fn bench_scaling_with_input_length(c: &mut Criterion) {
    let m = LikeMatcher::new(b"%needle%").expect("compiles");
    let mut group = c.benchmark_group("single_wildcard_chain_scaling");
    for len in [256usize, 4_096, 65_536] {
        let input = "x".repeat(len) + "needle" + &"x".repeat(len);
        group.bench_with_input(BenchmarkId::new("input_len", len), &input, |b, input| {
            b.iter(|| black_box(m.matches(black_box(input.as_bytes()))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_literal,
    bench_prefix,
    bench_multi_segment,
    bench_scaling_with_input_length
);
criterion_main!(benches);
