// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_reorder::snapshot::SnapshotEntry;
use understory_reorder::{Hover, Snapshot, Surface, shuffle_offsets};
use understory_sortable::grid::{GridLayout, GridSurface};
use understory_sortable::{Sortable, SortableConfig};

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
}

// Grid cells in scrambled child-list order, as after many unrelated inserts.
fn gen_scrambled_grid(n: usize, columns: usize, cell: f64) -> Vec<SnapshotEntry<u32>> {
    let mut out: Vec<_> = (0..n)
        .map(|i| {
            let x0 = (i % columns) as f64 * cell;
            let y0 = (i / columns) as f64 * cell;
            SnapshotEntry {
                item: i as u32,
                bounds: Rect::new(x0, y0, x0 + cell, y0 + cell),
            }
        })
        .collect();
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    for i in (1..out.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }
    out
}

fn bench_snapshot_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_sort");
    for &n in &[16_usize, 256, 4096] {
        let entries = gen_scrambled_grid(n, 8, 32.0);
        group.bench_function(format!("n{}", n), |b| {
            b.iter_batched(
                || entries.clone(),
                |entries| black_box(Snapshot::from_entries(entries)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle_offsets");
    for &n in &[16_usize, 256, 4096] {
        let snapshot = Snapshot::from_entries(gen_scrambled_grid(n, 8, 32.0));
        group.bench_function(format!("first_to_last_n{}", n), |b| {
            b.iter(|| black_box(shuffle_offsets(&snapshot, 0, Hover::Slot(n - 1))))
        });
        group.bench_function(format!("hit_test_n{}", n), |b| {
            let last = snapshot.get(n - 1).map(|e| e.bounds.center()).unwrap();
            b.iter(|| black_box(snapshot.hit_test(last)))
        });
    }
    group.finish();
}

// One gesture: sweep the pointer across every slot, then drop.
fn bench_drag_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_sweep");
    for &n in &[16_usize, 128] {
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut grid = GridSurface::new(GridLayout::default());
                    let items: Vec<_> = (0..n).map(|_| grid.insert()).collect();
                    let (sortable, event) = Sortable::attach(SortableConfig::default(), &mut grid);
                    event.restore.apply(&mut grid);
                    let centers: Vec<Point> = items
                        .iter()
                        .map(|&id| grid.bounding_box(id).center())
                        .collect();
                    (grid, sortable, items[0], centers)
                },
                |(mut grid, mut sortable, first, centers)| {
                    let _ = sortable.drag_start(&grid, first, centers[0]);
                    for &p in &centers {
                        let _ = sortable.drag_over(&mut grid, p);
                    }
                    black_box(sortable.drag_end(&mut grid));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_snapshot_sort, bench_shuffle, bench_drag_sweep);
criterion_main!(benches);
