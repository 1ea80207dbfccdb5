use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use fixedarr::{FixedArray, Value, values};
use smallvec::SmallVec;
use arrayvec::ArrayVec;


pub fn structural(c: &mut Criterion) {

    let mut group = c.benchmark_group("Structural");
    group.sample_size(1000);
    group.bench_function(
        BenchmarkId::new("FixedArray", "push"),
        |b| b.iter_batched_ref(
            || FixedArray::<u8>::from([0, 1, 2, 3]),
            |arr| { black_box({ arr.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "push"),
        |b| b.iter_batched_ref(
            || vec![0u8, 1, 2, 3],
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "push"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3]),
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "push"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 16>::new(); (0..4).for_each(|v| vec.push(v)); vec },
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("FixedArray", "shift"),
        |b| b.iter_batched_ref(
            || FixedArray::<u8>::from([0, 1, 2, 3, 4, 5, 6, 7]),
            |arr| black_box({ let _ = arr.shift(); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "shift"),
        |b| b.iter_batched_ref(
            || vec![0u8, 1, 2, 3, 4, 5, 6, 7],
            |vec| black_box({ let _ = vec.remove(0); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "shift"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3, 4, 5, 6, 7]),
            |vec| black_box({ let _ = vec.remove(0); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "shift"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 16>::new(); (0..8).for_each(|v| vec.push(v)); vec },
            |vec| black_box({ let _ = vec.remove(0); }),
            BatchSize::SmallInput
        )
    );


    group.bench_function(
        BenchmarkId::new("FixedArray", "unshift"),
        |b| b.iter_batched_ref(
            || FixedArray::<u8>::from([0, 1, 2, 3, 4, 5, 6, 7]),
            |arr| black_box({ arr.unshift(black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "unshift"),
        |b| b.iter_batched_ref(
            || vec![0u8, 1, 2, 3, 4, 5, 6, 7],
            |vec| black_box({ vec.insert(0, black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "unshift"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::from_vec(vec![0, 1, 2, 3, 4, 5, 6, 7]),
            |vec| black_box({ vec.insert(0, black_box(128)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "unshift"),
        |b| b.iter_batched_ref(
            || { let mut vec = ArrayVec::<u8, 16>::new(); (0..8).for_each(|v| vec.push(v)); vec },
            |vec| black_box({ vec.insert(0, black_box(128)); }),
            BatchSize::SmallInput
        )
    );

    group.bench_function(
        "iter",
        |b| b.iter_batched_ref(
            || FixedArray::<u32>::from(black_box([32; 8])),
            |arr| black_box(for v in arr.iter() { black_box(v); }),
            BatchSize::SmallInput
        )
    );

    group.finish();

}

pub fn transforms(c: &mut Criterion) {

    let mut group = c.benchmark_group("Transforms");
    group.bench_function(
        "sort",
        |b| b.iter_batched_ref(
            || FixedArray::from_values((0..64u32).rev()),
            |arr| black_box(arr.sort()),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        "unique",
        |b| b.iter_batched_ref(
            || FixedArray::from_values((0..64u32).map(|v| v % 8)),
            |arr| black_box(arr.unique()),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        "chunk",
        |b| b.iter_batched_ref(
            || FixedArray::from_values(0..64u32),
            |arr| black_box(arr.chunk(5)),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        "flatten",
        |b| b.iter_batched_ref(
            || values![1, values![2, values![3, values![4, 5]]], "six", Value::Null],
            |arr| black_box(arr.flatten(None)),
            BatchSize::SmallInput
        )
    );

    group.finish();

}

criterion_group!(benches, structural, transforms);
criterion_main!(benches);
