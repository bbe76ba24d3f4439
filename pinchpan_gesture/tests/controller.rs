// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture sequences through `ViewTransformer`.

use core::time::Duration;

use kurbo::{Point, Rect, Vec2};
use pinchpan_gesture::gesture::{GestureEvent, MoveEvent, ReleaseEvent};
use pinchpan_gesture::{
    FlingBounds, MotionKind, ScrollStep, Scroller, TransformListener, TransformerConfig,
    ViewTransformer,
};
use pinchpan_view::{TransformState, ViewportState};

const FRAME: Duration = Duration::from_millis(16);
const EPS: f64 = 1e-9;

#[derive(Default)]
struct Recorder {
    started: usize,
    released: usize,
    single_taps: usize,
    claim_release: bool,
    changes: Vec<TransformState>,
}

impl TransformListener for Recorder {
    fn transform_started(&mut self) {
        self.started += 1;
    }

    fn transform_changed(&mut self, transform: TransformState) {
        self.changes.push(transform);
    }

    fn gesture_released(&mut self, _transform: TransformState) -> bool {
        self.released += 1;
        self.claim_release
    }

    fn single_tap_confirmed(&mut self) {
        self.single_taps += 1;
    }
}

fn view_with<S: Scroller>(mut view: ViewTransformer<S>) -> ViewTransformer<S> {
    view.set_viewport(ViewportState::new(100.0, 100.0, 10.0, 20.0));
    view
}

fn view(config: TransformerConfig) -> ViewTransformer {
    view_with(ViewTransformer::new(config).unwrap())
}

fn grant(view: &mut ViewTransformer<impl Scroller>, at: Point, l: &mut dyn TransformListener) {
    view.handle_event(GestureEvent::Grant { position: at }, l);
}

fn drag_to(view: &mut ViewTransformer<impl Scroller>, to: Point, l: &mut dyn TransformListener) {
    view.handle_event(GestureEvent::Move(MoveEvent::single(to)), l);
}

fn settle(view: &mut ViewTransformer<impl Scroller>, l: &mut dyn TransformListener) {
    let mut frames = 0;
    while view.tick(FRAME, l) {
        frames += 1;
        assert!(frames < 1_000, "motion never settled");
    }
}

fn double_tap(view: &mut ViewTransformer, at: Point, l: &mut dyn TransformListener) {
    grant(view, at, l);
    let release = ReleaseEvent::at(at).with_double_tap(true);
    view.handle_event(GestureEvent::Release(release), l);
    assert_eq!(view.motion(), MotionKind::Animating);
    settle(view, l);
}

#[test]
fn double_tap_toggles_between_one_and_max_scale() {
    let mut view = view(TransformerConfig::default());
    let mut rec = Recorder::default();
    // Page (60, 70) is the viewport centre.
    let centre = Point::new(60.0, 70.0);

    double_tap(&mut view, centre, &mut rec);
    let zoomed = view.transform();
    assert!((zoomed.scale - 1.2).abs() < EPS);
    assert!(zoomed.translate_x().abs() < EPS);
    assert!(zoomed.translate_y().abs() < EPS);

    double_tap(&mut view, centre, &mut rec);
    let restored = view.transform();
    assert!((restored.scale - 1.0).abs() < EPS);
    assert!(restored.translate_x().abs() < EPS);
    assert!(restored.translate_y().abs() < EPS);
    assert_eq!(rec.started, 2);
    assert_eq!(rec.released, 2);
}

#[test]
fn pinch_lands_exactly_on_max_scale_without_overscale() {
    let config = TransformerConfig::default().with_overscale(false);
    let mut view = view(config);
    let mut rec = Recorder::default();
    grant(&mut view, Point::new(60.0, 70.0), &mut rec);

    let pinch = |half: f64| {
        GestureEvent::Move(MoveEvent::pinch(
            Point::new(60.0 - half, 70.0),
            Point::new(60.0 + half, 70.0),
        ))
    };
    view.handle_event(pinch(10.0), &mut rec);
    assert!(rec.changes.is_empty());
    view.handle_event(pinch(30.0), &mut rec);
    assert_eq!(view.transform().scale, 1.2);
}

#[test]
fn overscale_is_corrected_on_release() {
    let mut view = view(TransformerConfig::default());
    let mut rec = Recorder::default();
    let centre = Point::new(60.0, 70.0);
    grant(&mut view, centre, &mut rec);
    view.handle_event(
        GestureEvent::Move(MoveEvent::pinch(
            Point::new(50.0, 70.0),
            Point::new(70.0, 70.0),
        )),
        &mut rec,
    );
    view.handle_event(
        GestureEvent::Move(MoveEvent::pinch(
            Point::new(30.0, 70.0),
            Point::new(90.0, 70.0),
        )),
        &mut rec,
    );
    assert!((view.transform().scale - 3.0).abs() < EPS);

    view.handle_event(GestureEvent::Release(ReleaseEvent::at(centre)), &mut rec);
    settle(&mut view, &mut rec);
    assert!((view.transform().scale - 1.2).abs() < EPS);
    assert!(view.transform().translate_x().abs() < EPS);
}

#[test]
fn resistance_damps_only_outward_drags() {
    // Scale 2 panned so the content's left edge sits 30 units inside the
    // viewport.
    let config = TransformerConfig::default()
        .with_resistance(true)
        .with_initial_transform(TransformState::new(2.0, 40.0, 0.0));
    let mut view = view(config);
    let mut rec = Recorder::default();
    assert!(view.available_translate_space().left < 0.0);

    grant(&mut view, Point::new(50.0, 50.0), &mut rec);
    drag_to(&mut view, Point::new(80.0, 50.0), &mut rec);
    // 30 units outward become 10, i.e. 5 content units at scale 2.
    assert_eq!(view.transform().translate_x(), 45.0);

    drag_to(&mut view, Point::new(50.0, 50.0), &mut rec);
    // Back towards bounds: undamped.
    assert_eq!(view.transform().translate_x(), 30.0);
}

#[test]
fn fling_overscrolls_then_bounces_back() {
    let config = TransformerConfig::default()
        .with_scale_limits(0.5, 2.0)
        .with_initial_transform(TransformState::new(2.0, 0.0, 0.0));
    let mut view = view(config);
    let mut rec = Recorder::default();

    grant(&mut view, Point::new(60.0, 70.0), &mut rec);
    let release = ReleaseEvent::at(Point::new(60.0, 70.0)).with_velocity(Vec2::new(1.0, 0.0));
    view.handle_event(GestureEvent::Release(release), &mut rec);
    assert_eq!(view.motion(), MotionKind::Flinging);

    let mut furthest_left_edge = f64::NEG_INFINITY;
    let mut saw_bounce = false;
    let mut frames = 0;
    while view.tick(FRAME, &mut rec) {
        let shown = view.debug_info().transformed_content_rect;
        furthest_left_edge = furthest_left_edge.max(shown.x0);
        saw_bounce |= view.motion() == MotionKind::Animating;
        frames += 1;
        assert!(frames < 1_000, "motion never settled");
    }

    // 50 units of room plus 20 of over-scroll.
    assert!((furthest_left_edge - 20.0).abs() < EPS);
    assert!(saw_bounce);
    let shown = view.debug_info().transformed_content_rect;
    assert!(shown.x0.abs() < EPS);
    assert!((view.transform().translate_x() - 25.0).abs() < EPS);
    assert!((view.transform().scale - 2.0).abs() < EPS);
}

#[test]
fn terminate_settles_like_release() {
    let mut view = view(TransformerConfig::default());
    let mut rec = Recorder::default();
    grant(&mut view, Point::new(20.0, 20.0), &mut rec);
    drag_to(&mut view, Point::new(50.0, 20.0), &mut rec);
    assert_eq!(view.transform(), TransformState::new(1.0, 30.0, 0.0));

    view.handle_event(
        GestureEvent::Terminate(ReleaseEvent::at(Point::new(50.0, 20.0))),
        &mut rec,
    );
    assert!(!view.is_gesture_active());
    settle(&mut view, &mut rec);
    assert_eq!(view.transform(), TransformState::IDENTITY);
    assert_eq!(rec.released, 1);
}

#[test]
fn claimed_release_skips_settling() {
    let mut view = view(TransformerConfig::default());
    let mut rec = Recorder {
        claim_release: true,
        ..Recorder::default()
    };
    grant(&mut view, Point::new(20.0, 20.0), &mut rec);
    drag_to(&mut view, Point::new(50.0, 20.0), &mut rec);
    view.handle_event(
        GestureEvent::Release(ReleaseEvent::at(Point::new(50.0, 20.0))),
        &mut rec,
    );
    assert_eq!(view.motion(), MotionKind::Idle);
    assert_eq!(view.transform(), TransformState::new(1.0, 30.0, 0.0));
}

#[test]
fn disabled_transform_ignores_everything() {
    let mut view = view(TransformerConfig::default().with_transform(false));
    let mut rec = Recorder::default();
    grant(&mut view, Point::new(20.0, 20.0), &mut rec);
    drag_to(&mut view, Point::new(50.0, 20.0), &mut rec);
    view.handle_event(GestureEvent::SingleTapConfirmed, &mut rec);
    view.handle_event(
        GestureEvent::Release(ReleaseEvent::at(Point::new(50.0, 20.0))),
        &mut rec,
    );
    assert_eq!(rec.started, 0);
    assert_eq!(rec.released, 0);
    assert_eq!(rec.single_taps, 0);
    assert!(rec.changes.is_empty());
    assert_eq!(view.transform(), TransformState::IDENTITY);
}

#[test]
fn disabling_transform_mid_gesture_ends_the_session() {
    let mut view = view(TransformerConfig::default());
    let mut rec = Recorder::default();
    grant(&mut view, Point::new(20.0, 20.0), &mut rec);
    drag_to(&mut view, Point::new(50.0, 20.0), &mut rec);
    assert!(view.is_gesture_active());

    view.set_config(TransformerConfig::default().with_transform(false)).unwrap();
    assert!(!view.is_gesture_active());
    view.handle_event(
        GestureEvent::Release(ReleaseEvent::at(Point::new(50.0, 20.0))),
        &mut rec,
    );
    assert_eq!(rec.released, 0);

    // Re-enabled, the next gesture starts cleanly and settles.
    view.set_config(TransformerConfig::default()).unwrap();
    grant(&mut view, Point::new(50.0, 20.0), &mut rec);
    view.handle_event(
        GestureEvent::Release(ReleaseEvent::at(Point::new(50.0, 20.0))),
        &mut rec,
    );
    settle(&mut view, &mut rec);
    assert_eq!(view.transform(), TransformState::IDENTITY);
}

#[test]
fn pinch_before_first_layout_scales_from_current() {
    let config = TransformerConfig::default()
        .with_initial_transform(TransformState::new(1.1, 0.0, 0.0));
    let mut view = ViewTransformer::new(config).unwrap();
    let mut rec = Recorder::default();
    grant(&mut view, Point::new(30.0, 30.0), &mut rec);
    let pinch = |half: f64| {
        GestureEvent::Move(MoveEvent::pinch(
            Point::new(30.0 - half, 30.0),
            Point::new(30.0 + half, 30.0),
        ))
    };
    view.handle_event(pinch(10.0), &mut rec);
    view.handle_event(pinch(20.0), &mut rec);
    assert_eq!(view.transform().scale, 2.2);
    assert_eq!(view.transform().translation, Vec2::ZERO);
}

#[test]
fn single_tap_is_forwarded() {
    let mut view = view(TransformerConfig::default());
    let mut rec = Recorder::default();
    view.handle_event(GestureEvent::SingleTapConfirmed, &mut rec);
    assert_eq!(rec.single_taps, 1);
}

#[test]
fn double_tap_with_scaling_disabled_only_bounces() {
    let mut view = view(TransformerConfig::default().with_scale(false));
    let mut rec = Recorder::default();
    grant(&mut view, Point::new(60.0, 70.0), &mut rec);
    let release = ReleaseEvent::at(Point::new(60.0, 70.0)).with_double_tap(true);
    view.handle_event(GestureEvent::Release(release), &mut rec);
    assert_eq!(view.motion(), MotionKind::Idle);
    assert_eq!(view.transform(), TransformState::IDENTITY);
}

/// Moves straight to the clamped rest point in a single step.
#[derive(Debug, Default)]
struct SnapScroller {
    pending: Option<Vec2>,
}

impl Scroller for SnapScroller {
    fn fling(&mut self, start: Point, velocity: Vec2, bounds: FlingBounds) {
        let rest = bounds.clamp(start + velocity);
        self.pending = (rest != start).then(|| rest - start);
    }

    fn force_finished(&mut self, finished: bool) {
        if finished {
            self.pending = None;
        }
    }

    fn is_finished(&self) -> bool {
        self.pending.is_none()
    }

    fn step(&mut self, _dt: Duration) -> ScrollStep {
        ScrollStep {
            delta: self.pending.take().unwrap_or(Vec2::ZERO),
            finished: true,
        }
    }
}

#[test]
fn custom_scroller_drives_the_fling() {
    let config = TransformerConfig::default()
        .with_scale_limits(0.5, 2.0)
        .with_initial_transform(TransformState::new(2.0, 0.0, 0.0));
    let mut view = view_with(ViewTransformer::with_scroller(config, SnapScroller::default()).unwrap());
    let mut rec = Recorder::default();

    grant(&mut view, Point::new(60.0, 70.0), &mut rec);
    // -0.03 units/ms is -30 units/s: well inside the 50 units of room.
    let release = ReleaseEvent::at(Point::new(60.0, 70.0)).with_velocity(Vec2::new(-0.03, 0.0));
    view.handle_event(GestureEvent::Release(release), &mut rec);
    assert_eq!(view.motion(), MotionKind::Flinging);

    // The single step lands in bounds, so no bounce follows.
    assert!(!view.tick(FRAME, &mut rec));
    assert!((view.transform().translate_x() + 15.0).abs() < EPS);
    assert_eq!(
        view.debug_info().view_port_rect,
        Rect::new(0.0, 0.0, 100.0, 100.0)
    );
}
