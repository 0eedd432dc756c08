// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Adversarial-pattern benchmarks asserting the linear-time guarantee called
//! out for the production DFA/NFA-style path: patterns like `%a%a%a%a%b`
//! against long runs of `a` must not exhibit the quadratic blowup a naive
//! backtracking matcher would show here.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use like_match::LikeMatcher;

fn bench_adversarial_near_miss(c: &mut Criterion) {
    let m = LikeMatcher::new(b"%a%a%a%a%b").expect("compiles");
    let mut group = c.benchmark_group("adversarial_near_miss_no_trailing_b");
    for len in [1_000usize, 10_000, 100_000] {
        let input = "a".repeat(len);
        group.bench_with_input(BenchmarkId::new("input_len", len), &input, |b, input| {
            b.iter(|| black_box(m.matches(black_box(input.as_bytes()))))
        });
    }
    group.finish();
}

fn bench_adversarial_underscore_chain(c: &mut Criterion) {
    let m = LikeMatcher::new(b"%_a_a_a_a_a%").expect("compiles");
    let mut group = c.benchmark_group("adversarial_underscore_chain");
    for len in [1_000usize, 10_000] {
        let input = "a".repeat(len);
        group.bench_with_input(BenchmarkId::new("input_len", len), &input, |b, input| {
            b.iter(|| black_box(m.matches(black_box(input.as_bytes()))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_adversarial_near_miss,
    bench_adversarial_underscore_chain
);
criterion_main!(benches);
