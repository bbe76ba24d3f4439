// Copyright 2025 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

use kurbo::Size;
use pinchpan_view::{TransformState, ViewGeometry, ViewportState};

/// Default duration of settle and double-tap animations.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Default distance a fling may travel past a content edge before bouncing.
pub const DEFAULT_MAX_OVER_SCROLL_DISTANCE: f64 = 20.0;

/// Behaviour switches and limits for a pan/zoom view.
///
/// The defaults allow panning and zooming between `0.8` and `1.2`, permit
/// over-scaling during a pinch (corrected on release), and leave resistance
/// off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformerConfig {
    /// Master switch; when `false` every gesture event is ignored.
    pub enable_transform: bool,
    /// Allow pinch and double-tap zoom.
    pub enable_scale: bool,
    /// Allow panning and flings.
    pub enable_translate: bool,
    /// Damp drags that pull content further out of bounds.
    pub enable_resistance: bool,
    /// Let a pinch go past `min_scale`/`max_scale` until release.
    pub allow_overscale: bool,
    /// Lower scale limit, `> 0`.
    pub min_scale: f64,
    /// Upper scale limit, `>= min_scale`.
    pub max_scale: f64,
    /// How far a fling may run past an edge, in screen units.
    pub max_over_scroll_distance: f64,
    /// Width / height ratio of the content, if it is letterboxed.
    pub content_aspect_ratio: Option<f64>,
    /// Viewport size used for boundary tests when it differs from the
    /// measured layout size.
    pub view_port_size: Option<Size>,
    /// Transform the view starts with.
    pub initial_transform: TransformState,
    /// Duration of settle and double-tap animations.
    pub animation_duration: Duration,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            enable_transform: true,
            enable_scale: true,
            enable_translate: true,
            enable_resistance: false,
            allow_overscale: true,
            min_scale: 0.8,
            max_scale: 1.2,
            max_over_scroll_distance: DEFAULT_MAX_OVER_SCROLL_DISTANCE,
            content_aspect_ratio: None,
            view_port_size: None,
            initial_transform: TransformState::IDENTITY,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl TransformerConfig {
    /// Checks the limits for consistency.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("max_over_scroll_distance", self.max_over_scroll_distance),
            ("initial_transform.scale", self.initial_transform.scale),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field });
            }
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveMinScale {
                min_scale: self.min_scale,
            });
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleLimits {
                min_scale: self.min_scale,
                max_scale: self.max_scale,
            });
        }
        if self.initial_transform.scale <= 0.0 {
            return Err(ConfigError::NonPositiveInitialScale {
                scale: self.initial_transform.scale,
            });
        }
        if self.max_over_scroll_distance < 0.0 {
            return Err(ConfigError::NegativeOverScroll {
                distance: self.max_over_scroll_distance,
            });
        }
        if let Some(ratio) = self.content_aspect_ratio
            && (!ratio.is_finite() || ratio <= 0.0)
        {
            return Err(ConfigError::InvalidAspectRatio { ratio });
        }
        Ok(())
    }

    /// Sets the scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets whether a pinch may exceed the scale limits until release.
    #[must_use]
    pub fn with_overscale(mut self, allow: bool) -> Self {
        self.allow_overscale = allow;
        self
    }

    /// Sets whether out-of-bounds drags are damped.
    #[must_use]
    pub fn with_resistance(mut self, enable: bool) -> Self {
        self.enable_resistance = enable;
        self
    }

    /// Enables or disables scaling.
    #[must_use]
    pub fn with_scale(mut self, enable: bool) -> Self {
        self.enable_scale = enable;
        self
    }

    /// Enables or disables translation.
    #[must_use]
    pub fn with_translate(mut self, enable: bool) -> Self {
        self.enable_translate = enable;
        self
    }

    /// Enables or disables gesture handling altogether.
    #[must_use]
    pub fn with_transform(mut self, enable: bool) -> Self {
        self.enable_transform = enable;
        self
    }

    /// Sets the fling over-scroll allowance.
    #[must_use]
    pub fn with_max_over_scroll_distance(mut self, distance: f64) -> Self {
        self.max_over_scroll_distance = distance;
        self
    }

    /// Sets the content aspect ratio.
    #[must_use]
    pub fn with_content_aspect_ratio(mut self, ratio: Option<f64>) -> Self {
        self.content_aspect_ratio = ratio;
        self
    }

    /// Sets the viewport size used for boundary tests.
    #[must_use]
    pub fn with_view_port_size(mut self, size: Option<Size>) -> Self {
        self.view_port_size = size;
        self
    }

    /// Sets the starting transform.
    #[must_use]
    pub fn with_initial_transform(mut self, transform: TransformState) -> Self {
        self.initial_transform = transform;
        self
    }

    /// Sets the settle animation duration.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Builds the [`ViewGeometry`] for `viewport` under this configuration.
    #[must_use]
    pub fn geometry(&self, viewport: ViewportState) -> ViewGeometry {
        ViewGeometry::new(viewport)
            .with_content_aspect_ratio(self.content_aspect_ratio)
            .with_visible_size(self.view_port_size)
    }

    /// Scale above which a double tap zooms back out to `1`.
    #[must_use]
    pub fn double_tap_threshold(&self) -> f64 {
        (1.0 + self.max_scale) / 2.0
    }

    /// Adjusts a pinch factor so `scale * scale_by` stays within the limits.
    ///
    /// Returns the factor to apply and, when it was clamped, the exact bound
    /// the result lands on. With `allow_overscale` the factor is returned
    /// unchanged.
    #[must_use]
    pub fn clamp_scale_by(&self, scale: f64, scale_by: f64) -> (f64, Option<f64>) {
        if self.allow_overscale {
            return (scale_by, None);
        }
        let next = scale * scale_by;
        if next <= self.min_scale {
            (self.min_scale / scale, Some(self.min_scale))
        } else if next >= self.max_scale {
            (self.max_scale / scale, Some(self.max_scale))
        } else {
            (scale_by, None)
        }
    }

    /// Factor that brings `scale` back within the limits (`1` when it
    /// already is).
    #[must_use]
    pub fn settle_scale_by(&self, scale: f64) -> f64 {
        if scale > self.max_scale {
            self.max_scale / scale
        } else if scale < self.min_scale {
            self.min_scale / scale
        } else {
            1.0
        }
    }
}

/// A [`TransformerConfig`] that cannot be used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A numeric field is `NaN` or infinite.
    NonFiniteValue {
        /// Name of the offending field.
        field: &'static str,
    },
    /// `min_scale` is zero or negative.
    NonPositiveMinScale {
        /// The configured minimum.
        min_scale: f64,
    },
    /// `min_scale` is greater than `max_scale`.
    InvertedScaleLimits {
        /// The configured minimum.
        min_scale: f64,
        /// The configured maximum.
        max_scale: f64,
    },
    /// The initial transform has a zero or negative scale.
    NonPositiveInitialScale {
        /// The configured initial scale.
        scale: f64,
    },
    /// `max_over_scroll_distance` is negative.
    NegativeOverScroll {
        /// The configured distance.
        distance: f64,
    },
    /// `content_aspect_ratio` is not a positive finite number.
    InvalidAspectRatio {
        /// The configured ratio.
        ratio: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue { field } => write!(f, "`{field}` must be finite"),
            Self::NonPositiveMinScale { min_scale } => {
                write!(f, "minimum scale must be positive, got {min_scale}")
            }
            Self::InvertedScaleLimits {
                min_scale,
                max_scale,
            } => write!(
                f,
                "minimum scale {min_scale} is greater than maximum scale {max_scale}"
            ),
            Self::NonPositiveInitialScale { scale } => {
                write!(f, "initial scale must be positive, got {scale}")
            }
            Self::NegativeOverScroll { distance } => {
                write!(f, "over-scroll distance must not be negative, got {distance}")
            }
            Self::InvalidAspectRatio { ratio } => {
                write!(f, "content aspect ratio must be positive, got {ratio}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TransformerConfig};

    #[test]
    fn defaults_are_valid() {
        let config = TransformerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.min_scale, 0.8);
        assert_eq!(config.max_scale, 1.2);
        assert_eq!(config.max_over_scroll_distance, 20.0);
        assert!(config.allow_overscale);
        assert!(!config.enable_resistance);
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let config = TransformerConfig::default().with_scale_limits(2.0, 1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedScaleLimits {
                min_scale: 2.0,
                max_scale: 1.0,
            })
        );
    }

    #[test]
    fn non_positive_and_non_finite_values_are_rejected() {
        let config = TransformerConfig::default().with_scale_limits(0.0, 1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMinScale { .. })
        ));

        let config = TransformerConfig::default().with_scale_limits(0.5, f64::INFINITY);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteValue { field: "max_scale" })
        );

        let config = TransformerConfig::default().with_content_aspect_ratio(Some(0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAspectRatio { .. })
        ));

        let config = TransformerConfig::default().with_max_over_scroll_distance(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeOverScroll { .. })
        ));
    }

    #[test]
    fn clamp_scale_by_lands_on_bounds() {
        let config = TransformerConfig::default().with_overscale(false);
        assert_eq!(config.clamp_scale_by(1.0, 3.0), (1.2, Some(1.2)));
        assert_eq!(config.clamp_scale_by(1.0, 0.5), (0.8, Some(0.8)));
        assert_eq!(config.clamp_scale_by(1.0, 1.1), (1.1, None));

        let free = TransformerConfig::default();
        assert_eq!(free.clamp_scale_by(1.0, 3.0), (3.0, None));
    }

    #[test]
    fn settle_scale_by_returns_to_limits() {
        let config = TransformerConfig::default();
        assert_eq!(config.settle_scale_by(1.0), 1.0);
        assert_eq!(config.settle_scale_by(2.4), 0.5);
        assert_eq!(config.settle_scale_by(0.4), 2.0);
        assert!((config.double_tap_threshold() - 1.1).abs() < 1e-12);
    }
}
