// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchpan View: rect and transform geometry for pan/pinch-zoom views.
//!
//! This crate is the pure half of a pan/zoom engine. It provides:
//! - [`Transform`] / [`TransformState`]: a uniform scale plus translation,
//!   optionally anchored at a pivot, and the live view state built from it.
//! - Rect algebra on [`kurbo::Rect`]: [`transformed_rect`],
//!   [`fit_center_rect`], [`aligned_rect`], [`lerp_rect`] and
//!   [`get_transform`], which solves for the transform mapping one rect onto
//!   another.
//! - [`ViewGeometry`]: the rectangles a view derives from its viewport,
//!   content aspect ratio and current transform.
//! - Boundary helpers: [`available_translate_space`],
//!   [`available_fling_space`], [`leaves_boundaries`] and
//!   [`bounce_back_rect`].
//!
//! Nothing here holds state. Every function takes the current transform by
//! value and returns a new value; gesture interpretation and animation live
//! in `pinchpan_gesture`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use pinchpan_view::{Transform, get_transform, transformed_rect};
//!
//! let content = Rect::new(0.0, 0.0, 400.0, 300.0);
//!
//! // Zoom 2x around a pinch midpoint.
//! let pinch = Transform::pivoted(2.0, Vec2::ZERO, Point::new(100.0, 100.0));
//! let zoomed = transformed_rect(content, &pinch);
//!
//! // Recover the view transform that displays `content` as `zoomed`.
//! let view = get_transform(content, zoomed);
//! assert_eq!(view.scale, 2.0);
//! assert_eq!(transformed_rect(content, &view), zoomed);
//! ```
//!
//! ## Boundaries
//!
//! ```rust
//! use pinchpan_view::{TransformState, ViewGeometry, ViewportState, leaves_boundaries};
//!
//! let geometry = ViewGeometry::new(ViewportState::new(320.0, 480.0, 0.0, 0.0));
//!
//! // Zoomed in and centred: content covers the viewport.
//! let state = TransformState::new(2.0, 0.0, 0.0);
//! let visible = geometry.visible_view_port_rect(state);
//! assert!(!leaves_boundaries(visible, geometry.scaled_content_rect(state)));
//!
//! // Dragged far to the right: the left edge is now over-scrolled.
//! let state = TransformState::new(2.0, 200.0, 0.0);
//! let visible = geometry.visible_view_port_rect(state);
//! assert!(leaves_boundaries(visible, geometry.scaled_content_rect(state)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod geometry;
mod rect;
mod transform;

pub use bounds::{
    EdgeSpace, available_fling_space, available_translate_space, bounce_back_rect,
    leaves_boundaries,
};
pub use geometry::{ViewGeometry, ViewportState};
pub use rect::{aligned_rect, fit_center_rect, lerp_rect, transformed_rect};
pub use transform::{MIN_SCALE, Transform, TransformState, get_transform, positive_scale};
