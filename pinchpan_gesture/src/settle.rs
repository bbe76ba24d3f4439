// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target rects for post-gesture animations.
//!
//! Both targets are expressed as the content rect the view should end up
//! showing; the animation then interpolates towards them and converts each
//! frame back into a transform.

use kurbo::{Point, Rect, Vec2};
use pinchpan_view::{Transform, TransformState, ViewGeometry, bounce_back_rect, transformed_rect};

use crate::config::TransformerConfig;

/// Where a double tap at `pivot` (viewport-local) should take the view.
///
/// Above the midpoint between `1` and `max_scale` the view zooms back out to
/// `1`; otherwise it zooms in to `max_scale`. The zoomed rect is then
/// bounced back so zooming out around an off-centre pivot cannot leave a gap.
#[must_use]
pub fn double_tap_target(
    config: &TransformerConfig,
    geometry: &ViewGeometry,
    current: TransformState,
    pivot: Point,
) -> Rect {
    let scale_by = if current.scale > config.double_tap_threshold() {
        1.0 / current.scale
    } else {
        config.max_scale / current.scale
    };
    let shown = geometry.transformed_content_rect(current);
    let zoomed = transformed_rect(shown, &Transform::pivoted(scale_by, Vec2::ZERO, pivot));
    bounce_back_rect(zoomed, geometry.view_port_rect())
}

/// Where the view should settle after a gesture or fling.
///
/// The scale is pulled back within the limits about the viewport centre and
/// the result is bounced back into the viewport.
#[must_use]
pub fn bounce_target(
    config: &TransformerConfig,
    geometry: &ViewGeometry,
    current: TransformState,
) -> Rect {
    let viewport = geometry.view_port_rect();
    let scale_by = config.settle_scale_by(current.scale);
    let shown = geometry.transformed_content_rect(current);
    let settled = transformed_rect(
        shown,
        &Transform::pivoted(scale_by, Vec2::ZERO, viewport.center()),
    );
    bounce_back_rect(settled, viewport)
}
