// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan Zoom: interactive pan and zoom for one content element.
//!
//! This crate provides a small, headless controller that turns pointer drags,
//! wheel notches, and one- or two-finger touch gestures into a uniform
//! translate + scale transform for a content element shown inside a fixed
//! container. It focuses on:
//! - Drag panning with the mouse or a single finger.
//! - Wheel and step zoom that keeps the point under the anchor fixed.
//! - Pinch zoom about the midpoint of two fingers.
//! - Scale bounds, optionally derived so the content fits or covers the
//!   container.
//! - Edge clamping so the content never leaves a gap inside the container.
//!
//! It does **not** render anything. Callers are expected to:
//! - Provide container and content dimensions through a [`Geometry`].
//! - Apply the emitted [`PanZoomTransform`] (translation, then scale, about
//!   the content's origin corner) in a [`TransformSink`].
//! - Forward raw input to the handlers, either directly or through the
//!   [`PointerAdapter`] for `ui-events` sources.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_pan_zoom::{PanZoom, PanZoomConfig, StaticGeometry, WheelDelta};
//!
//! // 400x300 viewport on the page, showing an 800x600 image.
//! let geometry = StaticGeometry::new(
//!     Rect::new(0.0, 0.0, 400.0, 300.0),
//!     Size::new(800.0, 600.0),
//! );
//! let config = PanZoomConfig::new().limit_zoom_to_content();
//! let mut pan_zoom = PanZoom::new(geometry, (), config)?;
//! pan_zoom.initialize();
//! assert_eq!(pan_zoom.scale(), 0.5);
//!
//! // Zoom in about the pointer, then drag.
//! pan_zoom.wheel(Point::new(100.0, 100.0), WheelDelta::Wheel(120.0));
//! pan_zoom.pointer_down(Point::new(100.0, 100.0));
//! pan_zoom.pointer_move(Point::new(90.0, 95.0));
//! pan_zoom.pointer_up();
//!
//! let affine = pan_zoom.transform().to_affine();
//! # let _ = affine;
//! # Ok::<(), understory_pan_zoom::ConfigError>(())
//! ```
//!
//! ## Design notes
//!
//! - Gestures form an explicit state machine; only one is active at a time,
//!   and per-gesture anchors are dropped when it ends.
//! - Every move event recomputes and emits a full transform; events are
//!   neither reordered nor coalesced.
//! - Content smaller than the container is pinned to the container's
//!   top-left edge rather than centered.
//! - Diagnostics go through the `log` facade.
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`PointerAdapter`] for `ui-events`.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod geometry;
mod gesture;
#[cfg(feature = "ui_events_adapter")]
mod input;
mod touch;
mod wheel;

pub use config::{ConfigError, MinScaleMode, PanZoomConfig};
pub use controller::{PanZoom, PanZoomDebugInfo};
pub use geometry::{Geometry, PanZoomTransform, StaticGeometry, TransformSink};
pub use gesture::GestureKind;
#[cfg(feature = "ui_events_adapter")]
pub use input::PointerAdapter;
pub use touch::TouchTracker;
pub use wheel::WheelDelta;
