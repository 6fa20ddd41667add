// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel delta conventions.

/// A raw wheel delta as reported by an input source.
///
/// Input devices report wildly different magnitudes (pixels, lines, notches),
/// so only the direction is used: see [`WheelDelta::normalized`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Positive values scroll "up" (away from the user) and zoom in.
    ///
    /// This covers pixel, line and page deltas once projected onto the
    /// vertical axis.
    Wheel(f64),
    /// Legacy "detail" convention where positive values scroll "down" and
    /// zoom out.
    Detail(f64),
}

impl WheelDelta {
    /// Returns the zoom direction: `1.0` to zoom in, `-1.0` to zoom out, or
    /// `0.0` when the delta carries no direction.
    ///
    /// ```rust
    /// use understory_pan_zoom::WheelDelta;
    ///
    /// assert_eq!(WheelDelta::Wheel(120.0).normalized(), 1.0);
    /// assert_eq!(WheelDelta::Detail(3.0).normalized(), -1.0);
    /// assert_eq!(WheelDelta::Wheel(0.0).normalized(), 0.0);
    /// ```
    #[must_use]
    pub fn normalized(self) -> f64 {
        let raw = match self {
            Self::Wheel(v) => v,
            Self::Detail(v) => -v,
        };
        if raw > 0.0 {
            1.0
        } else if raw < 0.0 {
            -1.0
        } else {
            // Also covers NaN.
            0.0
        }
    }
}
