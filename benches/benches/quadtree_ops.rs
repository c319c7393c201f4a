// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use quadrat_index::Quadtree;
use quadrat_tree::NodeId;

const BOUNDS: Rect = Rect::new(0.0, 0.0, 1024.0, 1024.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_boxes(count: usize, size: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x0 = rng.next_f64() * (BOUNDS.width() - size);
        let y0 = rng.next_f64() * (BOUNDS.height() - size);
        out.push(Rect::new(x0, y0, x0 + size, y0 + size));
    }
    out
}

fn build(boxes: &[Rect]) -> Quadtree<u32> {
    let mut qt = Quadtree::new(BOUNDS, 0.0, 8).unwrap();
    for (i, r) in boxes.iter().enumerate() {
        qt.insert(i as u32, *r).unwrap();
    }
    qt
}

fn all_leaves(qt: &Quadtree<u32>) -> Vec<NodeId> {
    let tree = qt.tree();
    let mut leaves = Vec::new();
    let mut open = vec![tree.root()];
    while let Some(m) = open.pop() {
        match tree.children(m) {
            Some(children) => open.extend(children),
            None => leaves.push(m),
        }
    }
    leaves
}

fn bench_insert(c: &mut Criterion) {
    let boxes = gen_boxes(1024, 8.0);
    let mut group = c.benchmark_group("insert");
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("bulk_1024", |b| {
        b.iter_batched(
            || Quadtree::<u32>::new(BOUNDS, 0.0, 8).unwrap(),
            |mut qt| {
                for (i, r) in boxes.iter().enumerate() {
                    qt.insert(i as u32, *r).unwrap();
                }
                qt
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let boxes = gen_boxes(1024, 8.0);
    let mut group = c.benchmark_group("remove");
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("drain_1024", |b| {
        b.iter_batched(
            || build(&boxes),
            |mut qt| {
                for i in 0..boxes.len() as u32 {
                    qt.remove(i).unwrap();
                }
                qt
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let qt = build(&gen_boxes(1024, 8.0));
    let leaves = all_leaves(&qt);
    let mut group = c.benchmark_group("neighbors");
    group.throughput(Throughput::Elements(leaves.len() as u64));
    group.bench_function("all_leaves", |b| {
        b.iter(|| {
            let mut total = 0_usize;
            for &leaf in &leaves {
                total += qt.tree().neighbors(black_box(leaf)).len();
            }
            total
        });
    });
    group.finish();
}

fn bench_query_rect(c: &mut Criterion) {
    let qt = build(&gen_boxes(1024, 8.0));
    let viewport = Rect::new(256.0, 256.0, 512.0, 512.0);
    let mut group = c.benchmark_group("query_rect");
    group.bench_function("viewport_quarter", |b| {
        b.iter(|| qt.query_rect(black_box(viewport)).count());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_remove,
    bench_neighbors,
    bench_query_rect
);
criterion_main!(benches);
