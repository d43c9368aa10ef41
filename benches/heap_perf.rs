//! Heap workload benchmarks
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # only the shortest-path workloads
//! cargo bench --bench heap_perf -- 'grid_dijkstra'
//! ```
//!
//! ## Workloads
//!
//! - `insert_pop`: n inserts of random keys followed by a full drain
//! - `decrease_key`: n inserts, n random decreases, full drain
//! - `union`: two heaps of n/2 built and merged, then drained
//! - `grid_dijkstra`: single-source shortest paths on a synthetic grid, once
//!   with decrease-key (`_opt`) and once with duplicate re-insertion (`_lazy`)

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fibheap::{CostKey, FibHandle, FibHeap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5eed_f1b0;
const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

fn random_keys(n: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn insert_pop(keys: &[u32]) -> u64 {
    let mut heap = FibHeap::with_capacity(keys.len());
    for (item, &key) in keys.iter().enumerate() {
        heap.insert(key, item);
    }
    let mut sum = 0u64;
    while let Some((key, _)) = heap.pop() {
        sum += u64::from(key);
    }
    sum
}

fn decrease_all(keys: &[u32]) -> u64 {
    let mut heap = FibHeap::with_capacity(keys.len());
    let handles: Vec<FibHandle> = keys
        .iter()
        .enumerate()
        .map(|(item, &key)| heap.insert(key + 1_000_000, item))
        .collect();
    // pop once so decreases hit real trees rather than a flat root ring
    let (_, popped) = heap.pop().unwrap_or((0, usize::MAX));
    for (item, handle) in handles.iter().enumerate() {
        if item != popped {
            let _ = heap.replace_key(handle, keys[item]);
        }
    }
    heap.drain().map(|(key, _)| u64::from(key)).sum()
}

fn union_halves(keys: &[u32]) -> u64 {
    let (left, right) = keys.split_at(keys.len() / 2);
    let mut a = FibHeap::new();
    let mut b = FibHeap::new();
    a.extend(left.iter().map(|&key| (key, ())));
    b.extend(right.iter().map(|&key| (key, ())));
    a.pop();
    b.pop();
    let mut merged = FibHeap::union(a, b);
    merged.drain().map(|(key, _)| u64::from(key)).sum()
}

fn bench_workloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_workloads");
    group.sample_size(20);

    for n in SIZES {
        let keys = random_keys(n);
        let label = format!("2^{}", n.trailing_zeros());

        group.bench_with_input(BenchmarkId::new("insert_pop", &label), &keys, |b, keys| {
            b.iter(|| black_box(insert_pop(keys)))
        });
        group.bench_with_input(BenchmarkId::new("decrease_key", &label), &keys, |b, keys| {
            b.iter(|| black_box(decrease_all(keys)))
        });
        group.bench_with_input(BenchmarkId::new("union", &label), &keys, |b, keys| {
            b.iter(|| black_box(union_halves(keys)))
        });
    }

    group.finish();
}

/// 4-connected grid with random edge weights
struct Grid {
    width: usize,
    height: usize,
    weights: Vec<[u32; 4]>,
}

impl Grid {
    fn synthetic(width: usize, height: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(SEED);
        let weights = (0..width * height)
            .map(|_| std::array::from_fn(|_| rng.gen_range(1..100)))
            .collect();
        Self {
            width,
            height,
            weights,
        }
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let (x, y) = (node % self.width, node / self.width);
        let candidates = [
            (x > 0).then(|| node - 1),
            (x + 1 < self.width).then(|| node + 1),
            (y > 0).then(|| node - self.width),
            (y + 1 < self.height).then(|| node + self.width),
        ];
        candidates
            .into_iter()
            .enumerate()
            .filter_map(move |(dir, next)| next.map(|next| (next, self.weights[node][dir])))
    }
}

fn dijkstra_opt(grid: &Grid) -> f64 {
    let n = grid.width * grid.height;
    let mut dist = vec![f64::INFINITY; n];
    let mut handles: Vec<Option<FibHandle>> = vec![None; n];
    let mut heap = FibHeap::with_capacity(n);

    dist[0] = 0.0;
    handles[0] = Some(heap.insert(CostKey::new(0.0, 0.0), 0));
    while let Some((cost, node)) = heap.pop() {
        handles[node] = None;
        for (next, weight) in grid.neighbors(node) {
            let candidate = cost.primary + f64::from(weight);
            if candidate < dist[next] {
                dist[next] = candidate;
                let key = CostKey::new(candidate, next as f64);
                match handles[next] {
                    Some(handle) => {
                        let _ = heap.replace_key(&handle, key);
                    }
                    None => handles[next] = Some(heap.insert(key, next)),
                }
            }
        }
    }
    dist[n - 1]
}

fn dijkstra_lazy(grid: &Grid) -> f64 {
    let n = grid.width * grid.height;
    let mut dist = vec![f64::INFINITY; n];
    let mut heap = FibHeap::with_capacity(n);

    dist[0] = 0.0;
    heap.insert(CostKey::new(0.0, 0.0), 0);
    while let Some((cost, node)) = heap.pop() {
        if cost.primary > dist[node] {
            continue;
        }
        for (next, weight) in grid.neighbors(node) {
            let candidate = cost.primary + f64::from(weight);
            if candidate < dist[next] {
                dist[next] = candidate;
                heap.insert(CostKey::new(candidate, next as f64), next);
            }
        }
    }
    dist[n - 1]
}

fn bench_grid_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_dijkstra");
    group.sample_size(10);

    for side in [64, 256, 512] {
        let grid = Grid::synthetic(side, side);
        let label = format!("{side}x{side}");

        group.bench_with_input(BenchmarkId::new("fibonacci_opt", &label), &grid, |b, grid| {
            b.iter(|| black_box(dijkstra_opt(grid)))
        });
        group.bench_with_input(BenchmarkId::new("fibonacci_lazy", &label), &grid, |b, grid| {
            b.iter(|| black_box(dijkstra_lazy(grid)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_workloads, bench_grid_dijkstra);
criterion_main!(benches);
