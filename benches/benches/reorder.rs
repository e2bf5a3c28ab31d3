// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use understory_reorder::hit::hit_test;
use understory_reorder::preview::{preview, source_index};
use understory_reorder::{
    Activation, Axis, BoundsIndex, PointerInput, PositioningSpace, Reorder, ReorderConfig,
};

const ROW: f64 = 24.0;

fn rows(len: usize) -> Vec<Rect> {
    (0..len)
        .map(|i| {
            let top = ROW * i as f64;
            Rect::new(0.0, top, 320.0, top + ROW)
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/hit_test");

    // Hit-testing is a linear scan; the worst case is a pointer over the last row.
    for len in [16usize, 128, 1_024, 8_192] {
        let bounds = BoundsIndex::measure(&rows(len)[..], PositioningSpace::Fixed);
        let last = Point::new(10.0, ROW * (len as f64 - 0.5));
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("last_row", len), &bounds, |b, bounds| {
            b.iter(|| black_box(hit_test(black_box(last), bounds, Axis::Vertical)));
        });

        group.bench_with_input(BenchmarkId::new("miss", len), &bounds, |b, bounds| {
            let below = Point::new(10.0, ROW * (len as f64 + 1.0));
            b.iter(|| black_box(hit_test(black_box(below), bounds, Axis::Vertical)));
        });
    }

    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/measure");

    for len in [128usize, 1_024, 8_192] {
        let rects = rows(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("rebuild", len), &rects, |b, rects| {
            let mut bounds = BoundsIndex::new();
            b.iter(|| {
                bounds.rebuild(&rects[..], PositioningSpace::Relative);
                black_box(bounds.len());
            });
        });
    }

    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/preview");

    // Hypothesis: materializing the preview costs a full clone, while mapping
    // display slots through `source_index` stays allocation-free.
    for len in [128usize, 1_024, 8_192] {
        let items: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("owned", len), &items, |b, items| {
            b.iter(|| black_box(preview(items, Some(0), Some(items.len() - 1))));
        });

        group.bench_with_input(BenchmarkId::new("source_index", len), &items, |b, items| {
            b.iter(|| {
                let n = items.len();
                let sum: u64 = (0..n)
                    .filter_map(|i| source_index(i, n, Some(0), Some(n - 1)))
                    .map(|i| items[i])
                    .sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/drag");

    for len in [16usize, 256] {
        let rects = rows(len);
        group.bench_with_input(BenchmarkId::new("sweep", len), &rects, |b, rects| {
            b.iter_batched(
                || {
                    let config = ReorderConfig::default().with_activation(Activation::Immediate);
                    let mut reorder = Reorder::new(config);
                    reorder.activate();
                    reorder.remeasure(&rects[..]);
                    reorder
                },
                |mut reorder| {
                    reorder.press(0, &PointerInput::Mouse(Point::new(10.0, ROW / 2.0)), 0);
                    for step in 0..len {
                        let y = ROW * step as f64 + ROW / 2.0;
                        black_box(reorder.pointer_move(&PointerInput::Mouse(Point::new(10.0, y))));
                    }
                    black_box(reorder.release());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hit_test,
    bench_measure,
    bench_preview,
    bench_drag_session
);
criterion_main!(benches);
