// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Smallest scale a [`Transform`] will ever carry.
///
/// Scales are divided by when converting screen deltas into content space,
/// so anything at or below zero is clamped up to this value.
pub const MIN_SCALE: f64 = 1e-6;

/// Clamps `scale` to be strictly positive.
///
/// `NaN` and non-positive inputs map to [`MIN_SCALE`].
#[must_use]
pub fn positive_scale(scale: f64) -> f64 {
    if scale > MIN_SCALE { scale } else { MIN_SCALE }
}

/// Uniform scale plus translation, optionally anchored at a pivot.
///
/// The two flavours map a rectangle differently:
/// - With a pivot, every point is mapped as
///   `pivot + (p - pivot) * scale + translation`. The pivot is the fixed
///   point of the scaling and the translation is in screen units.
/// - Without a pivot, scaling happens about the centre of the rectangle being
///   mapped and the translation is in content units, so the centre moves by
///   `translation * scale`. This matches a view rendered with "scale, then
///   translate" and is the form used for the live view transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor, always `> 0`.
    pub scale: f64,
    /// Translation; see the type docs for its units.
    pub translation: Vec2,
    /// Fixed point of the scaling, if any.
    pub pivot: Option<Point>,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
        pivot: None,
    };

    /// Creates an unpivoted transform.
    ///
    /// `scale` is clamped with [`positive_scale`].
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        Self {
            scale: positive_scale(scale),
            translation,
            pivot: None,
        }
    }

    /// Creates a transform that scales about `pivot` and then translates by
    /// `translation` in screen units.
    #[must_use]
    pub fn pivoted(scale: f64, translation: Vec2, pivot: Point) -> Self {
        Self {
            scale: positive_scale(scale),
            translation,
            pivot: Some(pivot),
        }
    }

    /// Returns `true` if this transform maps every rect onto itself.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translation == Vec2::ZERO
    }

    /// Drops the pivot and returns the scale/translation pair.
    #[must_use]
    pub fn to_state(self) -> TransformState {
        TransformState {
            scale: self.scale,
            translation: self.translation,
        }
    }

    /// Returns the affine map this transform applies to points of `rect`.
    ///
    /// For pivoted transforms `rect` is ignored.
    #[must_use]
    pub fn to_affine(self, rect: Rect) -> Affine {
        let (anchor, offset) = match self.pivot {
            Some(pivot) => (pivot.to_vec2(), self.translation),
            None => (rect.center().to_vec2(), self.translation * self.scale),
        };
        Affine::translate(anchor + offset) * Affine::scale(self.scale) * Affine::translate(-anchor)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The live view transform: a scale and a content-space translation.
///
/// This is the only mutable state of a pan/zoom view. The geometry functions
/// in this crate take it by value and never store it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Current scale, always `> 0`.
    pub scale: f64,
    /// Current translation in content units.
    pub translation: Vec2,
}

impl TransformState {
    /// Scale `1` with no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a state from its scalar parts.
    #[must_use]
    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale: positive_scale(scale),
            translation: Vec2::new(translate_x, translate_y),
        }
    }

    /// Horizontal translation in content units.
    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.translation.x
    }

    /// Vertical translation in content units.
    #[must_use]
    pub fn translate_y(&self) -> f64 {
        self.translation.y
    }

    /// Returns this state as an unpivoted [`Transform`].
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.scale, self.translation)
    }

    /// Returns a copy translated by a screen-space `delta`.
    ///
    /// The delta is converted to content units by dividing by the current
    /// scale.
    #[must_use]
    pub fn panned_by(self, delta: Vec2) -> Self {
        Self {
            scale: self.scale,
            translation: self.translation + delta / positive_scale(self.scale),
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Transform> for TransformState {
    fn from(transform: Transform) -> Self {
        transform.to_state()
    }
}

/// Solves for the unpivoted transform mapping `from` onto `to`.
///
/// The two rects are expected to share an aspect ratio. The scale is the
/// width ratio (the height ratio when `from` has zero width) and the
/// translation moves the centre of `from` onto the centre of `to`, so that
/// `transformed_rect(from, &get_transform(from, to))` reproduces `to`.
///
/// Degenerate inputs never produce a non-positive scale.
#[must_use]
pub fn get_transform(from: Rect, to: Rect) -> Transform {
    let scale = if from.width() > 0.0 {
        to.width() / from.width()
    } else if from.height() > 0.0 {
        to.height() / from.height()
    } else {
        1.0
    };
    let scale = positive_scale(scale);
    let translation = (to.center() - from.center()) / scale;
    Transform::new(scale, translation)
}
