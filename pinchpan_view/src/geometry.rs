// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::rect::{fit_center_rect, transformed_rect};
use crate::transform::TransformState;

/// Viewport size and its absolute offset on screen.
///
/// Supplied by the host's layout pass; pointer positions arrive in page
/// coordinates and are made viewport-local with [`ViewportState::to_local`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    /// Measured viewport size.
    pub size: Size,
    /// Page (screen) position of the viewport's top-left corner.
    pub page_offset: Vec2,
}

impl ViewportState {
    /// Creates a viewport state from its scalar parts.
    #[must_use]
    pub fn new(width: f64, height: f64, page_x: f64, page_y: f64) -> Self {
        Self {
            size: Size::new(width, height),
            page_offset: Vec2::new(page_x, page_y),
        }
    }

    /// The viewport in its own coordinates: `(0, 0, width, height)`.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.size.to_rect()
    }

    /// Converts a page-space point into viewport-local coordinates.
    #[must_use]
    pub fn to_local(&self, page_point: Point) -> Point {
        page_point - self.page_offset
    }
}

/// The rectangles a pan/zoom view derives from its inputs.
///
/// `ViewGeometry` is a plain value: it combines the measured viewport with
/// the content's aspect ratio and the size used for boundary tests, and every
/// accessor takes the current [`TransformState`] explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewGeometry {
    /// Measured viewport.
    pub viewport: ViewportState,
    /// Width / height ratio of the content, if it is letterboxed.
    pub content_aspect_ratio: Option<f64>,
    /// Viewport size used for boundary tests, when it differs from the
    /// measured one.
    pub visible_size: Option<Size>,
}

impl ViewGeometry {
    /// Creates a geometry over `viewport` with no aspect fitting.
    #[must_use]
    pub fn new(viewport: ViewportState) -> Self {
        Self {
            viewport,
            content_aspect_ratio: None,
            visible_size: None,
        }
    }

    /// Sets the content aspect ratio; `None` or non-positive disables fitting.
    #[must_use]
    pub fn with_content_aspect_ratio(mut self, ratio: Option<f64>) -> Self {
        self.content_aspect_ratio = ratio;
        self
    }

    /// Overrides the viewport size used by [`Self::visible_view_port_rect`].
    #[must_use]
    pub fn with_visible_size(mut self, size: Option<Size>) -> Self {
        self.visible_size = size;
        self
    }

    /// `(0, 0, width, height)` of the measured viewport.
    #[must_use]
    pub fn view_port_rect(&self) -> Rect {
        self.viewport.rect()
    }

    /// The untransformed content rect in viewport-local coordinates.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.fit(self.view_port_rect())
    }

    /// The content rect as currently displayed under `state`.
    #[must_use]
    pub fn transformed_content_rect(&self, state: TransformState) -> Rect {
        self.fit(transformed_rect(self.view_port_rect(), &state.transform()))
    }

    /// The viewport scaled by `state.scale` about the origin, ignoring
    /// translation. This is the full content extent boundary math compares
    /// against.
    #[must_use]
    pub fn scaled_content_rect(&self, state: TransformState) -> Rect {
        let r = self.view_port_rect();
        let s = state.scale;
        Rect::new(r.x0 * s, r.y0 * s, r.x1 * s, r.y1 * s)
    }

    /// The viewport expressed in the coordinate space of
    /// [`Self::scaled_content_rect`].
    #[must_use]
    pub fn visible_view_port_rect(&self, state: TransformState) -> Rect {
        let shown = self.transformed_content_rect(state);
        let size = self.visible_size.unwrap_or(self.viewport.size);
        Rect::from_origin_size(Point::new(-shown.x0, -shown.y0), size)
    }

    /// Converts a page-space point into viewport-local coordinates.
    #[must_use]
    pub fn to_local(&self, page_point: Point) -> Point {
        self.viewport.to_local(page_point)
    }

    fn fit(&self, rect: Rect) -> Rect {
        match self.content_aspect_ratio {
            Some(ratio) if ratio > 0.0 => fit_center_rect(ratio, rect),
            _ => rect,
        }
    }
}
