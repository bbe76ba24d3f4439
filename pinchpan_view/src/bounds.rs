// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary tests, remaining travel per edge, and bounce-back targets.
//!
//! The space functions take the visible viewport expressed in scaled content
//! coordinates (see [`ViewGeometry::visible_view_port_rect`]) and the full
//! scaled content extent (see [`ViewGeometry::scaled_content_rect`]).
//!
//! [`ViewGeometry::visible_view_port_rect`]: crate::ViewGeometry::visible_view_port_rect
//! [`ViewGeometry::scaled_content_rect`]: crate::ViewGeometry::scaled_content_rect

use kurbo::Rect;

use crate::rect::contain_axis;

/// A signed distance for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeSpace {
    /// Distance associated with the left edge.
    pub left: f64,
    /// Distance associated with the top edge.
    pub top: f64,
    /// Distance associated with the right edge.
    pub right: f64,
    /// Distance associated with the bottom edge.
    pub bottom: f64,
}

impl EdgeSpace {
    /// Returns `true` if any edge carries a negative distance.
    #[must_use]
    pub fn any_negative(&self) -> bool {
        self.left < 0.0 || self.top < 0.0 || self.right < 0.0 || self.bottom < 0.0
    }
}

/// Remaining travel before each edge of `content` reaches the matching edge
/// of `visible`.
///
/// Every value is positive while content may keep moving in that direction
/// and negative once content is over-scrolled past that edge. `left` is the
/// room for content to move right (its left edge lies that far beyond the
/// visible left edge), `right` is the room to move left, and likewise
/// vertically.
#[must_use]
pub fn available_translate_space(visible: Rect, content: Rect) -> EdgeSpace {
    EdgeSpace {
        left: visible.x0 - content.x0,
        top: visible.y0 - content.y0,
        right: content.x1 - visible.x1,
        bottom: content.y1 - visible.y1,
    }
}

/// The same margins as [`available_translate_space`], expressed as signed
/// scroller offsets.
///
/// `left`/`top` are the largest positive offsets a fling may travel and
/// `right`/`bottom` the most negative ones; a `right` of `-40` means content
/// can move 40 units left before its right edge meets the visible edge.
/// Callers take this once at the start of a fling.
#[must_use]
pub fn available_fling_space(visible: Rect, content: Rect) -> EdgeSpace {
    EdgeSpace {
        left: visible.x0 - content.x0,
        top: visible.y0 - content.y0,
        right: visible.x1 - content.x1,
        bottom: visible.y1 - content.y1,
    }
}

/// Returns `true` when `content` fails to cover `visible` on some edge.
#[must_use]
pub fn leaves_boundaries(visible: Rect, content: Rect) -> bool {
    available_translate_space(visible, content).any_negative()
}

/// Moves a candidate content rect back into valid bounds relative to
/// `viewport`.
///
/// Axes are corrected independently and only when out of bounds:
/// - If the rect spans at least the viewport on an axis, an edge that left a
///   gap inside the viewport is pulled back flush.
/// - If it is smaller, it is kept inside the viewport with the
///   [`aligned_rect`](crate::aligned_rect) rule.
///
/// The size of `rect` never changes, and applying this twice gives the same
/// result as applying it once.
#[must_use]
pub fn bounce_back_rect(rect: Rect, viewport: Rect) -> Rect {
    let (x0, x1) = bounce_axis(rect.x0, rect.x1, viewport.x0, viewport.x1);
    let (y0, y1) = bounce_axis(rect.y0, rect.y1, viewport.y0, viewport.y1);
    Rect::new(x0, y0, x1, y1)
}

fn bounce_axis(min: f64, max: f64, lo: f64, hi: f64) -> (f64, f64) {
    let len = max - min;
    if len >= hi - lo {
        if min > lo {
            (lo, lo + len)
        } else if max < hi {
            (hi - len, hi)
        } else {
            (min, max)
        }
    } else {
        contain_axis(min, max, lo, hi)
    }
}
