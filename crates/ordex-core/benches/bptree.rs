use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordex_core::BPlusTree;
use std::collections::BTreeMap;

const ORDER: usize = 32;

fn bptree_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("BPlusTree", size), &size, |b, &size| {
            b.iter(|| {
                let mut tree = BPlusTree::new(ORDER).unwrap();
                for i in 0..size {
                    tree.insert(black_box(i), black_box(i * 2));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
            });
        });
    }

    group.finish();
}

fn bptree_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let mut tree = BPlusTree::new(ORDER).unwrap();
        for i in 0..size {
            tree.insert(i, i * 2);
        }

        group.bench_with_input(BenchmarkId::new("BPlusTree", size), &size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    black_box(tree.get(&i));
                }
            });
        });

        let mut map = BTreeMap::new();
        for i in 0..size {
            map.insert(i, i * 2);
        }

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    black_box(map.get(&i));
                }
            });
        });
    }

    group.finish();
}

fn bptree_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in [100, 1000, 10000] {
        let mut tree = BPlusTree::new(ORDER).unwrap();
        for i in 0..size {
            tree.insert(i, i * 2);
        }

        group.bench_with_input(BenchmarkId::new("BPlusTree", size), &size, |b, _| {
            b.iter(|| {
                for item in tree.iter() {
                    black_box(item);
                }
            });
        });

        let mut map = BTreeMap::new();
        for i in 0..size {
            map.insert(i, i * 2);
        }

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |b, _| {
            b.iter(|| {
                for item in map.iter() {
                    black_box(item);
                }
            });
        });
    }

    group.finish();
}

fn bptree_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("BPlusTree", size), &size, |b, &size| {
            b.iter(|| {
                let mut tree = BPlusTree::new(ORDER).unwrap();
                for i in 0..size {
                    tree.insert(black_box(i), black_box(i * 2));
                }
                for i in 0..size {
                    black_box(tree.remove(&i));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                for i in 0..size {
                    black_box(map.remove(&i));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bptree_insert,
    bptree_get,
    bptree_iter,
    bptree_insert_remove
);
criterion_main!(benches);
