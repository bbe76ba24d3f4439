// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertial flings after a release.
//!
//! A fling runs in its own scroll coordinates starting at the origin. The
//! [`FlingBounds`] limit how far it may travel on each axis, and every
//! [`Scroller::step`] reports the movement since the previous step, which the
//! caller applies to the view as a pan.

use core::time::Duration;

use kurbo::{Point, Vec2};
use pinchpan_view::EdgeSpace;

/// Converts release velocities from units per millisecond to units per
/// second.
pub const VELOCITY_UNITS_PER_SECOND: f64 = 1000.0;

/// Default deceleration of [`DecelerationScroller`], in units per second².
pub const DEFAULT_DECELERATION: f64 = 3000.0;

/// Scroll extents for a fling, relative to its start.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlingBounds {
    /// Smallest horizontal offset.
    pub min_x: f64,
    /// Largest horizontal offset.
    pub max_x: f64,
    /// Smallest vertical offset.
    pub min_y: f64,
    /// Largest vertical offset.
    pub max_y: f64,
}

impl FlingBounds {
    /// Clamps `p` into the bounds.
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.max(self.min_x).min(self.max_x),
            p.y.max(self.min_y).min(self.max_y),
        )
    }
}

/// Computes fling extents from the release velocity and the available fling
/// space (see [`available_fling_space`](pinchpan_view::available_fling_space)).
///
/// On each axis the direction of travel gets the open space plus
/// `max_over_scroll`, or nothing when there is no open space; the opposite
/// direction gets nothing.
#[must_use]
pub fn fling_bounds(velocity: Vec2, space: EdgeSpace, max_over_scroll: f64) -> FlingBounds {
    let (min_x, max_x) = axis_bounds(velocity.x, space.left, space.right, max_over_scroll);
    let (min_y, max_y) = axis_bounds(velocity.y, space.top, space.bottom, max_over_scroll);
    FlingBounds {
        min_x,
        max_x,
        min_y,
        max_y,
    }
}

fn axis_bounds(velocity: f64, leading: f64, trailing: f64, over: f64) -> (f64, f64) {
    if velocity > 0.0 {
        let max = if leading > 0.0 { leading + over } else { 0.0 };
        (0.0, max)
    } else {
        let min = if trailing < 0.0 { trailing - over } else { 0.0 };
        (min, 0.0)
    }
}

/// Output of one [`Scroller::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    /// Movement since the previous step.
    pub delta: Vec2,
    /// Whether the fling has come to rest.
    pub finished: bool,
}

/// A decelerating scroll simulation.
///
/// Implementations own the deceleration curve; the view only consumes
/// per-step deltas and the finished flag.
pub trait Scroller {
    /// Starts a fling at `start` with `velocity` (units per second), confined
    /// to `bounds`.
    fn fling(&mut self, start: Point, velocity: Vec2, bounds: FlingBounds);

    /// Stops (`true`) or resumes (`false`) the current fling.
    fn force_finished(&mut self, finished: bool);

    /// Returns `true` once the fling has come to rest or was stopped.
    fn is_finished(&self) -> bool;

    /// Advances the simulation by `dt`.
    ///
    /// A finished scroller reports a zero delta.
    fn step(&mut self, dt: Duration) -> ScrollStep;
}

/// A [`Scroller`] with constant deceleration along the fling direction.
///
/// The position is clamped into the fling bounds; the fling ends when the
/// velocity reaches zero or every moving axis is pinned against a bound.
#[derive(Clone, Copy, Debug)]
pub struct DecelerationScroller {
    deceleration: f64,
    start: Point,
    velocity: Vec2,
    bounds: FlingBounds,
    position: Point,
    elapsed: f64,
    duration: f64,
    finished: bool,
}

impl DecelerationScroller {
    /// Creates a scroller decelerating at `deceleration` units per second².
    ///
    /// Non-positive values fall back to [`DEFAULT_DECELERATION`].
    #[must_use]
    pub fn new(deceleration: f64) -> Self {
        let deceleration = if deceleration > 0.0 {
            deceleration
        } else {
            DEFAULT_DECELERATION
        };
        Self {
            deceleration,
            start: Point::ZERO,
            velocity: Vec2::ZERO,
            bounds: FlingBounds::default(),
            position: Point::ZERO,
            elapsed: 0.0,
            duration: 0.0,
            finished: true,
        }
    }

    /// Current scroll position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Total flight time of the current fling, ignoring bounds.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::MAX)
    }

    fn position_at(&self, t: f64) -> Point {
        let t = t.min(self.duration);
        let speed = self.velocity.length();
        let travelled = if speed > 0.0 {
            let decay = 1.0 - 0.5 * self.deceleration * t / speed;
            self.velocity * (t * decay)
        } else {
            Vec2::ZERO
        };
        self.bounds.clamp(self.start + travelled)
    }

    fn pinned(&self, p: Point) -> bool {
        let b = &self.bounds;
        let x_done = self.velocity.x == 0.0 || p.x <= b.min_x || p.x >= b.max_x;
        let y_done = self.velocity.y == 0.0 || p.y <= b.min_y || p.y >= b.max_y;
        x_done && y_done
    }
}

impl Default for DecelerationScroller {
    fn default() -> Self {
        Self::new(DEFAULT_DECELERATION)
    }
}

impl Scroller for DecelerationScroller {
    fn fling(&mut self, start: Point, velocity: Vec2, bounds: FlingBounds) {
        self.start = start;
        self.velocity = velocity;
        self.bounds = bounds;
        self.position = start;
        self.elapsed = 0.0;
        self.duration = velocity.length() / self.deceleration;
        let moving = self.duration > 0.0;
        self.finished = !moving;
    }

    fn force_finished(&mut self, finished: bool) {
        self.finished = finished;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn step(&mut self, dt: Duration) -> ScrollStep {
        if self.finished {
            return ScrollStep {
                delta: Vec2::ZERO,
                finished: true,
            };
        }
        self.elapsed += dt.as_secs_f64();
        let next = self.position_at(self.elapsed);
        let delta = next - self.position;
        self.position = next;
        self.finished = self.elapsed >= self.duration || self.pinned(next);
        ScrollStep {
            delta,
            finished: self.finished,
        }
    }
}
