// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for per-event and per-frame work in `pinchpan_gesture`.

use core::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use pinchpan_gesture::gesture::{GestureEvent, MoveEvent, MoveStep, PinchStep, propose_move};
use pinchpan_gesture::{TransformerConfig, ViewTransformer, bounce_target};
use pinchpan_view::{TransformState, ViewportState, bounce_back_rect, get_transform};

const FRAME: Duration = Duration::from_millis(16);

fn bench_geometry(c: &mut Criterion) {
    let viewport = Rect::new(0.0, 0.0, 1080.0, 1920.0);
    let mut group = c.benchmark_group("view/geometry");

    group.bench_function("get_transform", |b| {
        let to = Rect::new(-120.5, -80.25, 1310.0, 2460.75);
        b.iter(|| black_box(get_transform(black_box(viewport), black_box(to))));
    });

    group.bench_function("bounce_back_rect", |b| {
        let r = Rect::new(37.5, -12.25, 1421.5, 2563.75);
        b.iter(|| black_box(bounce_back_rect(black_box(r), viewport)));
    });

    group.finish();
}

fn bench_gesture(c: &mut Criterion) {
    let config = TransformerConfig::default().with_resistance(true);
    let geometry = config.geometry(ViewportState::new(1080.0, 1920.0, 0.0, 0.0));
    let current = TransformState::new(1.1, 40.0, -12.0);
    let mut group = c.benchmark_group("gesture/propose_move");

    group.bench_function("pan", |b| {
        let step = MoveStep {
            delta: Vec2::new(6.0, -3.0),
            pinch: None,
        };
        b.iter(|| black_box(propose_move(&config, &geometry, black_box(current), &step)));
    });

    group.bench_function("pinch", |b| {
        let step = MoveStep {
            delta: Vec2::new(1.0, 0.5),
            pinch: Some(PinchStep {
                previous_distance: 300.0,
                distance: 306.0,
                center: Point::new(540.0, 960.0),
            }),
        };
        b.iter(|| black_box(propose_move(&config, &geometry, black_box(current), &step)));
    });

    group.bench_function("bounce_target", |b| {
        let overscaled = TransformState::new(2.5, 300.0, 0.0);
        b.iter(|| black_box(bounce_target(&config, &geometry, black_box(overscaled))));
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");

    for moves in [16_usize, 128] {
        group.bench_with_input(BenchmarkId::new("drag", moves), &moves, |b, &moves| {
            b.iter_batched(
                || {
                    let mut view = ViewTransformer::new(TransformerConfig::default())
                        .expect("default config is valid");
                    view.set_viewport(ViewportState::new(1080.0, 1920.0, 0.0, 0.0));
                    view
                },
                |mut view| {
                    view.handle_event(
                        GestureEvent::Grant {
                            position: Point::new(500.0, 500.0),
                        },
                        &mut (),
                    );
                    for i in 0..moves {
                        let x = 500.0 + i as f64 * 2.0;
                        view.handle_event(
                            GestureEvent::Move(MoveEvent::single(Point::new(x, 500.0))),
                            &mut (),
                        );
                    }
                    black_box(view.transform());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("settle_animation", |b| {
        b.iter_batched(
            || {
                let config = TransformerConfig::default()
                    .with_initial_transform(TransformState::new(2.0, 200.0, 0.0));
                let mut view = ViewTransformer::new(config).expect("config is valid");
                view.set_viewport(ViewportState::new(1080.0, 1920.0, 0.0, 0.0));
                view
            },
            |mut view| {
                view.animate_bounce();
                while view.tick(FRAME, &mut ()) {}
                black_box(view.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_gesture, bench_controller);
criterion_main!(benches);
