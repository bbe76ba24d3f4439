// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle algebra on [`kurbo::Rect`].
//!
//! `Rect` already provides the value semantics these helpers need: it is
//! `Copy`, compares exactly with `==`, and exposes `width`, `height` and
//! `center`. The functions here add the mapping, fitting and alignment rules
//! a pan/zoom view is built from.

use kurbo::{Rect, Size};

use crate::transform::Transform;

/// Maps the corners of `rect` through `transform`.
///
/// A pivoted transform keeps its pivot fixed; an unpivoted one scales about
/// the centre of `rect` (see [`Transform`]). The identity transform returns
/// `rect` unchanged, bit for bit.
#[must_use]
pub fn transformed_rect(rect: Rect, transform: &Transform) -> Rect {
    let s = transform.scale;
    let t = transform.translation;
    if s == 1.0 {
        // Pure translation in both flavours; adding avoids re-deriving edges
        // from the centre, which is not exact in floating point.
        return rect + t;
    }
    match transform.pivot {
        Some(p) => Rect::new(
            p.x + (rect.x0 - p.x) * s + t.x,
            p.y + (rect.y0 - p.y) * s + t.y,
            p.x + (rect.x1 - p.x) * s + t.x,
            p.y + (rect.y1 - p.y) * s + t.y,
        ),
        None => {
            let center = rect.center() + t * s;
            Rect::from_center_size(center, rect.size() * s)
        }
    }
}

/// Shrinks `rect` to the largest centred sub-rect with the given
/// width / height `aspect_ratio`.
///
/// A rect wider than the target keeps its height (pillarbox); a taller one
/// keeps its width (letterbox). Non-positive ratios and empty rects are
/// returned unchanged.
#[must_use]
pub fn fit_center_rect(aspect_ratio: f64, rect: Rect) -> Rect {
    let (w, h) = (rect.width(), rect.height());
    if aspect_ratio > 0.0 && w > 0.0 && h > 0.0 {
        let size = if w / h > aspect_ratio {
            Size::new(h * aspect_ratio, h)
        } else {
            Size::new(w, w / aspect_ratio)
        };
        Rect::from_center_size(rect.center(), size)
    } else {
        rect
    }
}

/// Translates `rect` so that an edge sticking out of `bounds` sits flush with
/// it. Each axis is handled independently and the size never changes.
///
/// When `rect` is larger than `bounds` on an axis the leading (left/top) edge
/// wins.
#[must_use]
pub fn aligned_rect(rect: Rect, bounds: Rect) -> Rect {
    let (x0, x1) = contain_axis(rect.x0, rect.x1, bounds.x0, bounds.x1);
    let (y0, y1) = contain_axis(rect.y0, rect.y1, bounds.y0, bounds.y1);
    Rect::new(x0, y0, x1, y1)
}

/// Interpolates each edge of `from` towards `to` by `t`.
///
/// `t == 0` yields `from`; `t >= 1` yields `to` exactly.
#[must_use]
pub fn lerp_rect(from: Rect, to: Rect, t: f64) -> Rect {
    if t >= 1.0 {
        return to;
    }
    let lerp = |a: f64, b: f64| a + (b - a) * t;
    Rect::new(
        lerp(from.x0, to.x0),
        lerp(from.y0, to.y0),
        lerp(from.x1, to.x1),
        lerp(from.y1, to.y1),
    )
}

/// Pulls an out-of-range edge of `min..max` back inside `lo..hi`.
pub(crate) fn contain_axis(min: f64, max: f64, lo: f64, hi: f64) -> (f64, f64) {
    let len = max - min;
    if min < lo {
        (lo, lo + len)
    } else if max > hi {
        (hi - len, hi)
    } else {
        (min, max)
    }
}
