// Copyright 2025 the Signet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use signet_mapper::CoordinateMapper;
use signet_session::PlacementSession;

fn bench_compute_physical_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper/compute_physical_placement");

    let mut mapper = CoordinateMapper::new();
    mapper.on_page_rendered(Size::new(816.0, 1056.0), Size::new(612.0, 792.0));
    mapper.on_drag(Vec2::new(120.0, 340.0));

    group.bench_function("stretched", |b| {
        b.iter(|| black_box(black_box(&mapper).compute_physical_placement()));
    });

    let unrendered = CoordinateMapper::new();
    group.bench_function("unavailable", |b| {
        b.iter(|| black_box(black_box(&unrendered).compute_physical_placement()));
    });

    group.finish();
}

fn bench_live_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/live_drag");

    // Each tick applies a delta and recomputes the placement, as a live read-out would.
    for ticks in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(ticks as u64));
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &ticks, |b, &ticks| {
            b.iter(|| {
                let mut session = PlacementSession::new();
                session.open_document();
                session.on_document_loaded(1);
                session.on_page_rendered(1, Size::new(816.0, 1056.0), Size::new(612.0, 792.0));
                session.begin_pointer_drag(Point::ORIGIN);
                for i in 0..ticks {
                    let t = i as f64;
                    black_box(session.pointer_moved(Point::new(t * 0.5, t * 0.25)));
                }
                black_box(session.end_pointer_drag())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_physical_placement, bench_live_drag);
criterion_main!(benches);
