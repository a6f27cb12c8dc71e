// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use indexed_array::{ArrayStack, IndexedArray};

const SIZES: &[usize] = &[1024, 4096, 16384, 65536];

// Front insertion is quadratic, so it gets smaller inputs.
const SHIFT_SIZES: &[usize] = &[256, 1024, 4096];

fn append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                || Vec::with_capacity(1),
                |vec| {
                    for i in 0..size {
                        vec.push(i);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("indexed array", size), size, |b, &size| {
            b.iter_batched_ref(
                || IndexedArray::new(1).unwrap(),
                |array| {
                    for i in 0..size {
                        array.add(i);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert front");
    for size in SHIFT_SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                Vec::new,
                |vec| {
                    for i in 0..size {
                        vec.insert(0, i);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("indexed array", size), size, |b, &size| {
            b.iter_batched_ref(
                IndexedArray::default,
                |array| {
                    for i in 0..size {
                        array.insert(i, 0).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push pop");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                Vec::new,
                |vec| {
                    for i in 0..size {
                        vec.push(i);
                    }
                    while let Some(value) = vec.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("array stack", size), size, |b, &size| {
            b.iter_batched_ref(
                ArrayStack::new,
                |stack| {
                    for i in 0..size {
                        stack.push(i);
                    }
                    while let Ok(value) = stack.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(indexed_array, append, insert_front, push_pop);
criterion_main!(indexed_array);
