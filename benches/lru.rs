use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use structkit::ds::{BinarySearchTree, DirectedGraph};
use structkit::policy::lru::LruCache;

fn warm_cache(capacity: usize) -> LruCache<u64, u64> {
    let mut cache = LruCache::try_new(capacity).unwrap();
    for i in 0..capacity as u64 {
        cache.put(i, i);
    }
    cache
}

fn bench_lru_put_get(c: &mut Criterion) {
    c.bench_function("lru_put_get", |b| {
        b.iter_batched(
            || warm_cache(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(black_box(i + 10_000), i);
                    let _ = black_box(cache.get(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || warm_cache(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = black_box(cache.push(black_box(10_000 + i), i));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_touch_hotset(c: &mut Criterion) {
    c.bench_function("lru_touch_hotset", |b| {
        b.iter_batched(
            || warm_cache(4096),
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = black_box(cache.touch(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_resize");
    for target in [1usize, 512, 2048] {
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &target| {
            b.iter_batched(
                || warm_cache(4096),
                |mut cache| black_box(cache.resize(target)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_bst_insert_lookup(c: &mut Criterion) {
    // Multiplicative hashing spreads keys so the tree stays shallow.
    let keys: Vec<u64> = (0..4096u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect();
    c.bench_function("bst_insert_lookup", |b| {
        b.iter(|| {
            let mut tree = BinarySearchTree::new();
            for k in &keys {
                tree.insert(*k);
            }
            for k in &keys {
                black_box(tree.contains(k));
            }
        })
    });
}

fn bench_graph_topological_sort(c: &mut Criterion) {
    let mut graph = DirectedGraph::new();
    for i in 0..2048u32 {
        graph.add_edge(i, i + 1);
        graph.add_edge(i, (i * 7 + 3) % 2048 + i + 1);
    }
    c.bench_function("graph_topological_sort", |b| {
        b.iter(|| black_box(graph.topological_sort()))
    });
}

criterion_group!(
    benches,
    bench_lru_put_get,
    bench_lru_eviction_churn,
    bench_lru_touch_hotset,
    bench_lru_resize,
    bench_bst_insert_lookup,
    bench_graph_topological_sort
);
criterion_main!(benches);
