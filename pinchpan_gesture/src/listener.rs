// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound notifications from a [`ViewTransformer`](crate::ViewTransformer).

use pinchpan_view::TransformState;

/// Receives notifications from a [`ViewTransformer`](crate::ViewTransformer).
///
/// Every method has a no-op default, so implementors only override what they
/// care about. `()` is the do-nothing listener.
pub trait TransformListener {
    /// A gesture was granted to the view.
    fn transform_started(&mut self) {}

    /// The published transform changed.
    ///
    /// Called once per mutation; unchanged values are not reported.
    fn transform_changed(&mut self, _transform: TransformState) {}

    /// A gesture was released or terminated.
    ///
    /// Return `true` to claim the release; the view then skips its own
    /// double-tap, fling and bounce handling.
    fn gesture_released(&mut self, _transform: TransformState) -> bool {
        false
    }

    /// A single tap was confirmed.
    fn single_tap_confirmed(&mut self) {}
}

impl TransformListener for () {}
