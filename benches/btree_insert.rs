//! Micro benchmarks for the in-memory B-tree.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use arena_btree::{BTree, Key};

const INSERT_COUNT: i64 = 16_384;

fn shuffled_keys() -> Vec<Key> {
    let mut keys: Vec<Key> = (0..INSERT_COUNT).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(0xBEEF_F00D));
    keys
}

fn build(keys: &[Key]) -> BTree {
    let mut tree = BTree::new();
    for &k in keys {
        tree.insert(k);
    }
    tree
}

fn micro_btree(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro/btree");
    group.throughput(Throughput::Elements(INSERT_COUNT as u64));

    let sequential: Vec<Key> = (0..INSERT_COUNT).collect();
    group.bench_function("sequential_insert", |b| {
        b.iter(|| black_box(build(&sequential)).count());
    });

    let random = shuffled_keys();
    group.bench_function("random_insert", |b| {
        b.iter(|| black_box(build(&random)).count());
    });

    group.bench_function("duplicate_insert", |b| {
        b.iter_batched(
            || build(&random),
            |mut tree| {
                for &k in &random {
                    tree.insert(k);
                }
                black_box(tree.count())
            },
            BatchSize::LargeInput,
        );
    });

    let tree = build(&random);
    group.bench_function("lookup_hit_and_miss", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in -INSERT_COUNT / 2..INSERT_COUNT + INSERT_COUNT / 2 {
                if tree.lookup(black_box(k)) {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    group.finish();
}

criterion_group!(benches, micro_btree);
criterion_main!(benches);
