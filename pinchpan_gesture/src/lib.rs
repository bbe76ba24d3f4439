// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchpan Gesture: drag, pinch, fling and double-tap handling for
//! pan/zoom views.
//!
//! This crate turns a stream of normalized pointer events into view
//! transforms, on top of the geometry in `pinchpan_view`. It provides:
//! - [`TransformerConfig`]: behaviour switches and scale limits, validated
//!   into a [`ConfigError`] when inconsistent.
//! - [`gesture`]: the grant/move/release session, the transform a move
//!   proposes, and what a release should do next.
//! - Settling: [`fling_bounds`] with the [`Scroller`] trait and its
//!   [`DecelerationScroller`], plus [`double_tap_target`] and
//!   [`bounce_target`] animated through [`RectAnimation`].
//! - [`ViewTransformer`]: a controller that owns the live transform,
//!   sequences gestures, flings and animations, and reports to a
//!   [`TransformListener`].
//!
//! The crate owns no event loop or clock. Hosts feed events through
//! [`ViewTransformer::handle_event`] and advance motion with
//! [`ViewTransformer::tick`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::Point;
//! use pinchpan_gesture::gesture::{GestureEvent, ReleaseEvent};
//! use pinchpan_gesture::{TransformerConfig, ViewTransformer};
//! use pinchpan_view::ViewportState;
//!
//! let mut view = ViewTransformer::new(TransformerConfig::default()).unwrap();
//! view.set_viewport(ViewportState::new(320.0, 480.0, 0.0, 0.0));
//!
//! // A double tap in the middle zooms in to the maximum scale.
//! let tap = Point::new(160.0, 240.0);
//! view.handle_event(GestureEvent::Grant { position: tap }, &mut ());
//! let release = ReleaseEvent::at(tap).with_double_tap(true);
//! view.handle_event(GestureEvent::Release(release), &mut ());
//!
//! while view.tick(Duration::from_millis(16), &mut ()) {}
//! assert!((view.transform().scale - 1.2).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds.
//! - `tracing`: emits `tracing` events for gesture decisions, flings,
//!   animations and rejected configurations.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod config;
mod controller;
mod fling;
pub mod gesture;
mod listener;
mod settle;

pub use animation::{Easing, RectAnimation};
pub use config::{
    ConfigError, DEFAULT_ANIMATION_DURATION, DEFAULT_MAX_OVER_SCROLL_DISTANCE, TransformerConfig,
};
pub use controller::{MotionKind, ViewTransformer, ViewTransformerDebugInfo};
pub use fling::{
    DEFAULT_DECELERATION, DecelerationScroller, FlingBounds, ScrollStep, Scroller,
    VELOCITY_UNITS_PER_SECOND, fling_bounds,
};
pub use listener::TransformListener;
pub use settle::{bounce_target, double_tap_target};
