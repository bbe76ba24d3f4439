// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Algebraic properties of the `pinchpan_view` rect and transform helpers.
//!
//! Each test sweeps a small hand-picked set of rects, including awkward
//! fractional and off-origin ones, rather than a single happy path.

use kurbo::{Point, Rect, Vec2};
use pinchpan_view::{
    Transform, TransformState, ViewGeometry, ViewportState, bounce_back_rect, fit_center_rect,
    get_transform, transformed_rect,
};

const EPS: f64 = 1e-9;

const RECTS: [Rect; 5] = [
    Rect::new(0.0, 0.0, 100.0, 100.0),
    Rect::new(-35.5, 12.25, 64.5, 212.25),
    Rect::new(0.1, 0.2, 0.7, 1.9),
    Rect::new(1_000.0, -2_000.0, 1_320.0, -1_520.0),
    Rect::new(3.0, 3.0, 3.0, 3.0),
];

fn assert_rect_close(a: Rect, b: Rect) {
    for (x, y) in [(a.x0, b.x0), (a.y0, b.y0), (a.x1, b.x1), (a.y1, b.y1)] {
        assert!((x - y).abs() < EPS, "{a:?} != {b:?}");
    }
}

#[test]
fn identity_transform_returns_an_equal_rect() {
    for r in RECTS {
        assert_eq!(transformed_rect(r, &Transform::IDENTITY), r);
        assert_eq!(transformed_rect(r, &TransformState::IDENTITY.transform()), r);
    }
}

#[test]
fn get_transform_round_trips_same_aspect_rects() {
    for from in RECTS.into_iter().filter(|r| r.width() > 0.0) {
        for (scale, offset) in [
            (2.0, Vec2::new(10.0, -4.0)),
            (0.37, Vec2::new(-250.0, 3.5)),
            (1.0, Vec2::new(0.25, 0.5)),
        ] {
            let to = Rect::from_center_size(from.center() + offset, from.size() * scale);
            let t = get_transform(from, to);
            assert!(t.scale > 0.0);
            assert_rect_close(transformed_rect(from, &t), to);
        }
    }
}

#[test]
fn pivoted_then_recovered_transform_agrees() {
    let content = Rect::new(0.0, 0.0, 375.0, 667.0);
    let current = TransformState::new(1.5, -20.0, 40.0);
    let shown = transformed_rect(content, &current.transform());

    let pinch = Transform::pivoted(1.25, Vec2::new(3.0, -7.0), Point::new(120.0, 300.0));
    let target = transformed_rect(shown, &pinch);

    let next = get_transform(content, target);
    assert!((next.scale - 1.5 * 1.25).abs() < EPS);
    assert_rect_close(transformed_rect(content, &next), target);
}

#[test]
fn fit_center_is_centred_with_requested_aspect() {
    for rect in RECTS.into_iter().filter(|r| r.area() > 0.0) {
        for ratio in [0.5, 1.0, 4.0 / 3.0, 16.0 / 9.0, 3.0] {
            let fitted = fit_center_rect(ratio, rect);
            assert!((fitted.center().x - rect.center().x).abs() < EPS);
            assert!((fitted.center().y - rect.center().y).abs() < EPS);
            assert!((fitted.width() / fitted.height() - ratio).abs() < EPS);
            assert!(fitted.width() <= rect.width() + EPS);
            assert!(fitted.height() <= rect.height() + EPS);
        }
    }
}

#[test]
fn bounce_back_rect_is_idempotent_for_zoomed_states() {
    let geometry = ViewGeometry::new(ViewportState::new(360.0, 640.0, 0.0, 0.0));
    let viewport = geometry.view_port_rect();
    for scale in [0.5, 0.8, 1.0, 1.2, 3.0] {
        for (tx, ty) in [(0.0, 0.0), (80.0, -40.0), (-500.0, 500.0)] {
            let state = TransformState::new(scale, tx, ty);
            let shown = geometry.transformed_content_rect(state);
            let once = bounce_back_rect(shown, viewport);
            assert_eq!(bounce_back_rect(once, viewport), once);
            assert!((once.width() - shown.width()).abs() < EPS);
        }
    }
}
