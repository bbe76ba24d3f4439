// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture interpretation: pointer events in, proposed transforms out.
//!
//! ## Usage
//!
//! 1) On grant, call [`GestureTracker::grant`] with the pointer position.
//! 2) On each move, [`GestureTracker::update`] yields a [`MoveStep`] (the
//!    delta since the previous event plus a pinch pair, if any), which
//!    [`propose_move`] turns into the next [`TransformState`].
//! 3) On release, [`GestureTracker::end`] returns the finished session and
//!    [`release_action`] decides what happens next.
//!
//! ```
//! use kurbo::Point;
//! use pinchpan_gesture::gesture::{GestureTracker, MoveEvent, propose_move};
//! use pinchpan_gesture::TransformerConfig;
//! use pinchpan_view::{TransformState, ViewportState};
//!
//! let config = TransformerConfig::default();
//! let geometry = config.geometry(ViewportState::new(320.0, 480.0, 0.0, 0.0));
//!
//! let mut tracker = GestureTracker::default();
//! tracker.grant(Point::new(100.0, 100.0));
//! let step = tracker.update(&MoveEvent::single(Point::new(110.0, 96.0))).unwrap();
//!
//! let next = propose_move(&config, &geometry, TransformState::new(2.0, 0.0, 0.0), &step);
//! // Screen deltas are converted to content units.
//! assert_eq!(next.translate_x(), 5.0);
//! assert_eq!(next.translate_y(), -2.0);
//! ```

use kurbo::{Point, Vec2};
use pinchpan_view::{
    EdgeSpace, Transform, TransformState, ViewGeometry, ViewportState, available_translate_space,
    get_transform, leaves_boundaries, positive_scale, transformed_rect,
};

use crate::config::TransformerConfig;

/// Divisor applied to a drag that pulls content further out of bounds.
pub const RESISTANCE_FACTOR: f64 = 3.0;

/// A normalized pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The view became the gesture responder.
    Grant {
        /// Page position of the pointer (or pinch midpoint).
        position: Point,
    },
    /// A pointer moved.
    Move(MoveEvent),
    /// The gesture ended normally.
    Release(ReleaseEvent),
    /// The gesture was taken away; handled like a release.
    Terminate(ReleaseEvent),
    /// A single tap was confirmed (no second tap followed).
    SingleTapConfirmed,
}

/// Pointer state reported on a move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveEvent {
    /// Page position of the pointer, or the midpoint of two pointers.
    pub position: Point,
    /// Distance between the two pointers of a pinch.
    pub pinch_distance: Option<f64>,
}

impl MoveEvent {
    /// A single-pointer move.
    #[must_use]
    pub fn single(position: Point) -> Self {
        Self {
            position,
            pinch_distance: None,
        }
    }

    /// A two-pointer move, reported at the midpoint of `a` and `b`.
    #[must_use]
    pub fn pinch(a: Point, b: Point) -> Self {
        Self {
            position: a.midpoint(b),
            pinch_distance: Some(a.distance(b)),
        }
    }
}

/// Pointer state reported on release or termination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseEvent {
    /// Final page position of the pointer.
    pub position: Point,
    /// Release velocity in units per millisecond.
    pub velocity: Vec2,
    /// Whether this release completes a double tap.
    pub double_tap: bool,
}

impl ReleaseEvent {
    /// A release at `position` with no velocity.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            double_tap: false,
        }
    }

    /// Sets the release velocity (units per millisecond).
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Marks the release as the second tap of a double tap.
    #[must_use]
    pub fn with_double_tap(mut self, double_tap: bool) -> Self {
        self.double_tap = double_tap;
        self
    }
}

/// Data kept between grant and release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Page position at grant.
    pub start_pos: Point,
    /// Page position at the previous event.
    pub last_pos: Point,
    /// Pinch distance at the previous event.
    pub last_pinch: Option<f64>,
    /// Accumulated pointer travel since grant.
    pub travel: Vec2,
}

impl GestureSession {
    /// Returns `true` if the pointer moved at all during the gesture.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.travel != Vec2::ZERO
    }
}

/// One pinch step: the distance before and after, and where it happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Pointer distance at the previous event.
    pub previous_distance: f64,
    /// Pointer distance now.
    pub distance: f64,
    /// Page position of the pinch midpoint.
    pub center: Point,
}

impl PinchStep {
    /// Ratio of the current distance to the previous one.
    #[must_use]
    pub fn scale_by(&self) -> f64 {
        if self.previous_distance > 0.0 {
            self.distance / self.previous_distance
        } else {
            1.0
        }
    }
}

/// Raw movement between two consecutive events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveStep {
    /// Screen-space movement since the previous event.
    pub delta: Vec2,
    /// Present when both this and the previous event were pinches.
    pub pinch: Option<PinchStep>,
}

/// Idle/active state machine over a stream of [`GestureEvent`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    session: Option<GestureSession>,
}

impl GestureTracker {
    /// Starts a session at `position`, replacing any previous one.
    pub fn grant(&mut self, position: Point) {
        self.session = Some(GestureSession {
            start_pos: position,
            last_pos: position,
            last_pinch: None,
            travel: Vec2::ZERO,
        });
    }

    /// Records a move, returning the step since the previous event.
    ///
    /// Returns `None` when no session is active. When the number of pointers
    /// changes the reported position jumps between a finger and a midpoint;
    /// that event re-anchors the session and reports a zero delta.
    pub fn update(&mut self, event: &MoveEvent) -> Option<MoveStep> {
        let session = self.session.as_mut()?;
        let pointers_changed = session.last_pinch.is_some() != event.pinch_distance.is_some();
        let delta = if pointers_changed {
            Vec2::ZERO
        } else {
            event.position - session.last_pos
        };
        let pinch = match (session.last_pinch, event.pinch_distance) {
            (Some(previous_distance), Some(distance)) => Some(PinchStep {
                previous_distance,
                distance,
                center: event.position,
            }),
            _ => None,
        };
        session.last_pos = event.position;
        session.last_pinch = event.pinch_distance;
        session.travel += delta;
        Some(MoveStep { delta, pinch })
    }

    /// Ends the session, returning it if one was active.
    pub fn end(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// Returns `true` between grant and release.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }
}

/// Damps `delta` on each axis that moves further into an over-scrolled edge.
///
/// Moving back towards valid bounds is never damped.
#[must_use]
pub fn apply_resistance(delta: Vec2, space: EdgeSpace) -> Vec2 {
    let mut out = delta;
    if (delta.x > 0.0 && space.left < 0.0) || (delta.x < 0.0 && space.right < 0.0) {
        out.x /= RESISTANCE_FACTOR;
    }
    if (delta.y > 0.0 && space.top < 0.0) || (delta.y < 0.0 && space.bottom < 0.0) {
        out.y /= RESISTANCE_FACTOR;
    }
    out
}

/// Computes the transform a move step proposes from `current`.
///
/// Resistance and the translation switch shape the delta first. A pinch
/// (with scaling enabled) then scales about its midpoint, clamped to the
/// limits unless over-scaling is allowed, and also carries the delta;
/// otherwise the delta pans the content. Before the first layout the content
/// rect is empty, so a pinch only multiplies the scale.
#[must_use]
pub fn propose_move(
    config: &TransformerConfig,
    geometry: &ViewGeometry,
    current: TransformState,
    step: &MoveStep,
) -> TransformState {
    let mut delta = step.delta;
    if config.enable_resistance {
        let visible = geometry.visible_view_port_rect(current);
        let content = geometry.scaled_content_rect(current);
        if leaves_boundaries(visible, content) {
            delta = apply_resistance(delta, available_translate_space(visible, content));
        }
    }
    if !config.enable_translate {
        delta = Vec2::ZERO;
    }

    match step.pinch {
        Some(pinch) if config.enable_scale => {
            let (scale_by, bound) = config.clamp_scale_by(current.scale, pinch.scale_by());
            let content = geometry.content_rect();
            if content.area() <= 0.0 {
                // No layout yet: there is no pivot to scale about.
                let mut next = current.panned_by(delta);
                next.scale = positive_scale(bound.unwrap_or(current.scale * scale_by));
                return next;
            }
            let pivot = geometry.to_local(pinch.center);
            let shown = transformed_rect(content, &current.transform());
            let target = transformed_rect(shown, &Transform::pivoted(scale_by, delta, pivot));
            let mut next = get_transform(content, target).to_state();
            if let Some(bound) = bound {
                next.scale = bound;
            }
            next
        }
        _ => current.panned_by(delta),
    }
}

/// What to do once a gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseAction {
    /// The consumer handled the release; do nothing.
    Handled,
    /// Toggle zoom around `pivot` (viewport-local).
    DoubleTap {
        /// Zoom anchor in viewport-local coordinates.
        pivot: Point,
    },
    /// Start an inertial fling.
    Fling {
        /// Release velocity in units per millisecond.
        velocity: Vec2,
    },
    /// Animate back into bounds and scale limits.
    Bounce,
}

/// Decides how a released gesture settles.
///
/// `handled` is the consumer's answer to the release notification. A double
/// tap anchors at the final pointer position if the gesture moved, else at
/// its start position.
#[must_use]
pub fn release_action(
    config: &TransformerConfig,
    handled: bool,
    event: &ReleaseEvent,
    session: Option<&GestureSession>,
    viewport: &ViewportState,
) -> ReleaseAction {
    if handled {
        return ReleaseAction::Handled;
    }
    if event.double_tap {
        if !config.enable_scale {
            return ReleaseAction::Bounce;
        }
        let anchor = match session {
            Some(s) if !s.has_moved() => s.start_pos,
            _ => event.position,
        };
        return ReleaseAction::DoubleTap {
            pivot: viewport.to_local(anchor),
        };
    }
    if config.enable_translate {
        ReleaseAction::Fling {
            velocity: event.velocity,
        }
    } else {
        ReleaseAction::Bounce
    }
}
