// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Rect;
use pinchpan_view::lerp_rect;

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    EaseOut,
    /// Cubic acceleration then deceleration.
    #[default]
    EaseInOut,
    /// A caller-provided curve. It should map `0` to `0` and `1` to `1`.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Applies the curve to `t`, which is clamped to `[0, 1]` first.
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::Custom(f) => f(t),
        }
    }
}

/// Edge-wise interpolation between two rects over a fixed duration.
///
/// The animation owns its clock: [`RectAnimation::advance`] moves it forward
/// and returns the rect for the eased progress. Dropping it mid-flight is a
/// valid way to cancel; nothing snaps to the end.
#[derive(Clone, Copy, Debug)]
pub struct RectAnimation {
    from: Rect,
    to: Rect,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl RectAnimation {
    /// Creates an animation from `from` to `to` with ease-in-out timing.
    #[must_use]
    pub fn new(from: Rect, to: Rect, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Replaces the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Starting rect.
    #[must_use]
    pub fn start_rect(&self) -> Rect {
        self.from
    }

    /// Target rect.
    #[must_use]
    pub fn target_rect(&self) -> Rect {
        self.to
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        }
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The rect at an already-eased `progress`.
    #[must_use]
    pub fn rect_at(&self, progress: f64) -> Rect {
        lerp_rect(self.from, self.to, progress)
    }

    /// Advances the clock by `dt` and returns the current rect.
    ///
    /// The final step always returns the target exactly.
    pub fn advance(&mut self, dt: Duration) -> Rect {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        if self.is_finished() {
            self.to
        } else {
            self.rect_at(self.easing.ease(self.progress()))
        }
    }
}
