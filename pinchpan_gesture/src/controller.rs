// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful pan/zoom controller.

use core::time::Duration;

use kurbo::{Point, Rect, Vec2};
use pinchpan_view::{
    EdgeSpace, TransformState, ViewGeometry, ViewportState, available_fling_space,
    available_translate_space, get_transform,
};

use crate::animation::{Easing, RectAnimation};
use crate::config::{ConfigError, TransformerConfig};
use crate::fling::{DecelerationScroller, Scroller, VELOCITY_UNITS_PER_SECOND, fling_bounds};
use crate::gesture::{
    GestureEvent, GestureTracker, ReleaseAction, ReleaseEvent, propose_move, release_action,
};
use crate::listener::TransformListener;
use crate::settle::{bounce_target, double_tap_target};

/// What is currently driving the transform besides direct gestures.
#[derive(Clone, Copy, Debug)]
enum Motion {
    Idle,
    Animating(RectAnimation),
    Flinging,
}

/// Public view of the controller's motion state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionKind {
    /// Nothing is running.
    Idle,
    /// A settle or double-tap animation is running.
    Animating,
    /// An inertial fling is running.
    Flinging,
}

/// Pan/zoom state for one view, driven by gesture events and a frame clock.
///
/// The controller owns the current [`TransformState`] and publishes every
/// change to a [`TransformListener`]. At most one motion (a fling or a rect
/// animation) runs at a time; granting or moving a gesture stops it, and a
/// new animation replaces the previous one.
///
/// The host forwards layout through [`ViewTransformer::set_viewport`],
/// pointer events through [`ViewTransformer::handle_event`], and calls
/// [`ViewTransformer::tick`] on each animation frame while
/// [`ViewTransformer::motion`] is not [`MotionKind::Idle`].
#[derive(Clone, Debug)]
pub struct ViewTransformer<S = DecelerationScroller> {
    config: TransformerConfig,
    viewport: ViewportState,
    transform: TransformState,
    tracker: GestureTracker,
    scroller: S,
    easing: Easing,
    motion: Motion,
}

impl ViewTransformer<DecelerationScroller> {
    /// Creates a controller using the default [`DecelerationScroller`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn new(config: TransformerConfig) -> Result<Self, ConfigError> {
        Self::with_scroller(config, DecelerationScroller::default())
    }
}

impl<S: Scroller> ViewTransformer<S> {
    /// Creates a controller with a custom fling simulation.
    ///
    /// The view starts at `config.initial_transform` with an empty viewport.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn with_scroller(config: TransformerConfig, scroller: S) -> Result<Self, ConfigError> {
        check_config(&config)?;
        Ok(Self {
            config,
            viewport: ViewportState::default(),
            transform: config.initial_transform,
            tracker: GestureTracker::default(),
            scroller,
            easing: Easing::default(),
            motion: Motion::Idle,
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The current transform is kept; the new limits apply from the next
    /// gesture or settle. Turning `enable_transform` off drops the gesture
    /// in progress, since its release will be ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] and keeps the previous configuration if
    /// `config` fails validation.
    pub fn set_config(&mut self, config: TransformerConfig) -> Result<(), ConfigError> {
        check_config(&config)?;
        if !config.enable_transform {
            self.tracker.end();
        }
        self.config = config;
        Ok(())
    }

    /// Easing curve used by new animations.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Sets the easing curve for animations started from now on.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Records a new layout measurement.
    pub fn set_viewport(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
    }

    /// The published transform.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.transform
    }

    /// Geometry for the current viewport and configuration.
    #[must_use]
    pub fn geometry(&self) -> ViewGeometry {
        self.config.geometry(self.viewport)
    }

    /// What is driving the transform right now.
    #[must_use]
    pub fn motion(&self) -> MotionKind {
        match self.motion {
            Motion::Idle => MotionKind::Idle,
            Motion::Animating(_) => MotionKind::Animating,
            Motion::Flinging => MotionKind::Flinging,
        }
    }

    /// Returns `true` between a grant and its release.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.tracker.is_active()
    }

    /// Feeds one pointer event into the controller.
    ///
    /// Every event is ignored while `enable_transform` is off.
    pub fn handle_event(&mut self, event: GestureEvent, listener: &mut dyn TransformListener) {
        if !self.config.enable_transform {
            return;
        }
        match event {
            GestureEvent::Grant { position } => {
                self.stop_motion();
                self.tracker.grant(position);
                #[cfg(feature = "tracing")]
                tracing::debug!(x = position.x, y = position.y, "gesture granted");
                listener.transform_started();
            }
            GestureEvent::Move(event) => {
                let Some(step) = self.tracker.update(&event) else {
                    return;
                };
                self.stop_motion();
                let next = propose_move(&self.config, &self.geometry(), self.transform, &step);
                self.update_transform(next, listener);
            }
            GestureEvent::Release(event) | GestureEvent::Terminate(event) => {
                self.release(&event, listener);
            }
            GestureEvent::SingleTapConfirmed => listener.single_tap_confirmed(),
        }
    }

    /// Advances the running fling or animation by `dt`.
    ///
    /// Returns `true` while motion remains, so hosts can keep requesting
    /// frames. A fling that comes to rest hands over to a bounce animation.
    pub fn tick(&mut self, dt: Duration, listener: &mut dyn TransformListener) -> bool {
        match self.motion {
            Motion::Idle => false,
            Motion::Flinging => {
                let step = self.scroller.step(dt);
                if step.delta != Vec2::ZERO {
                    let next = self.transform.panned_by(step.delta);
                    self.update_transform(next, listener);
                }
                if step.finished {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("fling finished");
                    self.motion = Motion::Idle;
                    self.animate_bounce();
                }
                !matches!(self.motion, Motion::Idle)
            }
            Motion::Animating(mut animation) => {
                let rect = animation.advance(dt);
                let next = get_transform(self.geometry().content_rect(), rect).to_state();
                let finished = animation.is_finished();
                self.motion = if finished {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(scale = next.scale, "animation finished");
                    Motion::Idle
                } else {
                    Motion::Animating(animation)
                };
                self.update_transform(next, listener);
                !finished
            }
        }
    }

    /// Animates the displayed content towards `target` over the configured
    /// duration.
    ///
    /// See [`Self::animate_with_duration`].
    pub fn animate(&mut self, target: Rect) -> bool {
        self.animate_with_duration(target, self.config.animation_duration)
    }

    /// Animates the displayed content rect towards `target`.
    ///
    /// Returns `false` without touching any running motion when `target` is
    /// already displayed. Otherwise the running motion is replaced and
    /// `true` is returned.
    pub fn animate_with_duration(&mut self, target: Rect, duration: Duration) -> bool {
        let from = self.geometry().transformed_content_rect(self.transform);
        if from == target {
            #[cfg(feature = "tracing")]
            tracing::trace!("animation skipped, already at target");
            return false;
        }
        self.stop_motion();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            x0 = target.x0,
            y0 = target.y0,
            x1 = target.x1,
            y1 = target.y1,
            "animation started"
        );
        self.motion =
            Motion::Animating(RectAnimation::new(from, target, duration).with_easing(self.easing));
        true
    }

    /// Animates back within the scale limits and content bounds.
    ///
    /// Returns `false` when nothing needs to move.
    pub fn animate_bounce(&mut self) -> bool {
        let target = bounce_target(&self.config, &self.geometry(), self.transform);
        self.animate(target)
    }

    /// Stops any fling or animation, leaving the last published transform.
    pub fn cancel_animation(&mut self) {
        self.stop_motion();
    }

    /// Replaces the transform directly, bypassing gestures and limits.
    ///
    /// Running motion is not stopped and continues from the new value.
    pub fn force_update_transform(
        &mut self,
        transform: TransformState,
        listener: &mut dyn TransformListener,
    ) {
        self.update_transform(transform, listener);
    }

    /// Room left on each edge before the content stops covering the viewport.
    ///
    /// See [`available_translate_space`].
    #[must_use]
    pub fn available_translate_space(&self) -> EdgeSpace {
        let geometry = self.geometry();
        available_translate_space(
            geometry.visible_view_port_rect(self.transform),
            geometry.scaled_content_rect(self.transform),
        )
    }

    /// Returns a snapshot of the controller state for debugging.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformerDebugInfo {
        let geometry = self.geometry();
        ViewTransformerDebugInfo {
            transform: self.transform,
            view_port_rect: geometry.view_port_rect(),
            content_rect: geometry.content_rect(),
            transformed_content_rect: geometry.transformed_content_rect(self.transform),
            visible_view_port_rect: geometry.visible_view_port_rect(self.transform),
            translate_space: self.available_translate_space(),
            motion: self.motion(),
            gesture_active: self.tracker.is_active(),
        }
    }

    fn release(&mut self, event: &ReleaseEvent, listener: &mut dyn TransformListener) {
        let session = self.tracker.end();
        let handled = listener.gesture_released(self.transform);
        let action = release_action(
            &self.config,
            handled,
            event,
            session.as_ref(),
            &self.viewport,
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(?action, "gesture released");
        match action {
            ReleaseAction::Handled => {}
            ReleaseAction::DoubleTap { pivot } => {
                let target = double_tap_target(&self.config, &self.geometry(), self.transform, pivot);
                self.animate(target);
            }
            ReleaseAction::Fling { velocity } => self.start_fling(velocity),
            ReleaseAction::Bounce => {
                self.animate_bounce();
            }
        }
    }

    /// Starts a fling from a release velocity in units per millisecond.
    fn start_fling(&mut self, velocity: Vec2) {
        self.stop_motion();
        let geometry = self.geometry();
        let space = available_fling_space(
            geometry.visible_view_port_rect(self.transform),
            geometry.scaled_content_rect(self.transform),
        );
        let bounds = fling_bounds(velocity, space, self.config.max_over_scroll_distance);
        self.scroller
            .fling(Point::ZERO, velocity * VELOCITY_UNITS_PER_SECOND, bounds);
        if self.scroller.is_finished() {
            self.animate_bounce();
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(vx = velocity.x, vy = velocity.y, "fling started");
            self.motion = Motion::Flinging;
        }
    }

    fn stop_motion(&mut self) {
        if matches!(self.motion, Motion::Flinging) {
            self.scroller.force_finished(true);
        }
        self.motion = Motion::Idle;
    }

    fn update_transform(&mut self, next: TransformState, listener: &mut dyn TransformListener) {
        if next != self.transform {
            self.transform = next;
            listener.transform_changed(next);
        }
    }
}

fn check_config(config: &TransformerConfig) -> Result<(), ConfigError> {
    config.validate().inspect_err(|_err| {
        #[cfg(feature = "tracing")]
        tracing::warn!(err = %_err, "rejected transformer config");
    })
}

/// Debug snapshot of a [`ViewTransformer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransformerDebugInfo {
    /// Published transform.
    pub transform: TransformState,
    /// Viewport in its own coordinates.
    pub view_port_rect: Rect,
    /// Untransformed content rect.
    pub content_rect: Rect,
    /// Content rect as currently displayed.
    pub transformed_content_rect: Rect,
    /// Visible viewport in scaled content coordinates.
    pub visible_view_port_rect: Rect,
    /// Remaining travel per edge.
    pub translate_space: EdgeSpace,
    /// Running motion.
    pub motion: MotionKind,
    /// Whether a gesture is in progress.
    pub gesture_active: bool,
}
