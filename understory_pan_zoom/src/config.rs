// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for [`crate::PanZoom`].

use core::fmt;

/// How the minimum scale is derived when the container or content is resized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MinScaleMode {
    /// Use the configured minimum scale as is.
    #[default]
    Fixed,
    /// Allow shrinking until the content fits inside the container on its
    /// most constraining axis.
    ///
    /// The minimum scale becomes `min(container.w / content.w, container.h / content.h)`.
    FitContainer,
    /// Never shrink the content below covering the whole container.
    ///
    /// The minimum scale becomes `max(container.w / content.w, container.h / content.h)`.
    CoverContainer,
}

/// Configuration for a [`crate::PanZoom`] controller.
///
/// All values are fixed once the controller is constructed.
///
/// ```rust
/// use understory_pan_zoom::{MinScaleMode, PanZoomConfig};
///
/// let config = PanZoomConfig::new()
///     .with_scale_limits(0.5, 4.0)
///     .with_zoom_factor(0.2)
///     .limit_zoom_to_content();
///
/// assert_eq!(config.min_scale_mode, MinScaleMode::CoverContainer);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomConfig {
    /// Lower scale bound, before any [`MinScaleMode`] derivation.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Fractional scale change per wheel notch or zoom step.
    pub zoom_factor: f64,
    /// How the minimum scale follows the container and content sizes.
    pub min_scale_mode: MinScaleMode,
}

impl PanZoomConfig {
    /// Default lower scale bound.
    pub const DEFAULT_MIN_SCALE: f64 = 0.1;
    /// Default upper scale bound.
    pub const DEFAULT_MAX_SCALE: f64 = 10.0;
    /// Default scale change per step.
    pub const DEFAULT_ZOOM_FACTOR: f64 = 0.1;

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            zoom_factor: Self::DEFAULT_ZOOM_FACTOR,
            min_scale_mode: MinScaleMode::Fixed,
        }
    }

    /// Sets both scale bounds.
    ///
    /// The pair is normalized so that `min_scale <= max_scale`.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the fractional scale change per wheel notch or zoom step.
    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    /// Sets how the minimum scale is derived on resize.
    #[must_use]
    pub fn with_min_scale_mode(mut self, mode: MinScaleMode) -> Self {
        self.min_scale_mode = mode;
        self
    }

    /// Lets the content shrink until it fits inside the container.
    ///
    /// Has no effect if [`PanZoomConfig::limit_zoom_to_content`] was already
    /// requested; covering the container takes precedence.
    #[must_use]
    pub fn limit_zoom_to_container(mut self) -> Self {
        if self.min_scale_mode != MinScaleMode::CoverContainer {
            self.min_scale_mode = MinScaleMode::FitContainer;
        }
        self
    }

    /// Keeps the content large enough to always cover the container.
    #[must_use]
    pub fn limit_zoom_to_content(mut self) -> Self {
        self.min_scale_mode = MinScaleMode::CoverContainer;
        self
    }

    /// Checks that the scale bounds and zoom factor are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.min_scale) {
            return Err(ConfigError::InvalidMinScale(self.min_scale));
        }
        if !is_positive(self.max_scale) {
            return Err(ConfigError::InvalidMaxScale(self.max_scale));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleLimits {
                min_scale: self.min_scale,
                max_scale: self.max_scale,
            });
        }
        if !is_positive(self.zoom_factor) {
            return Err(ConfigError::InvalidZoomFactor(self.zoom_factor));
        }
        Ok(())
    }
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Error returned when a [`PanZoomConfig`] cannot drive a controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The minimum scale is not a finite, strictly positive number.
    InvalidMinScale(f64),
    /// The maximum scale is not a finite, strictly positive number.
    InvalidMaxScale(f64),
    /// The minimum scale is larger than the maximum scale.
    InvertedScaleLimits {
        /// Configured minimum scale.
        min_scale: f64,
        /// Configured maximum scale.
        max_scale: f64,
    },
    /// The zoom factor is not a finite, strictly positive number.
    InvalidZoomFactor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMinScale(v) => write!(f, "minimum scale {v} must be finite and positive"),
            Self::InvalidMaxScale(v) => write!(f, "maximum scale {v} must be finite and positive"),
            Self::InvertedScaleLimits {
                min_scale,
                max_scale,
            } => write!(
                f,
                "minimum scale {min_scale} is larger than maximum scale {max_scale}"
            ),
            Self::InvalidZoomFactor(v) => write!(f, "zoom factor {v} must be finite and positive"),
        }
    }
}

impl core::error::Error for ConfigError {}
