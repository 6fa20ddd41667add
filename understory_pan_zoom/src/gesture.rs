// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine.
//!
//! At most one gesture is active at a time. Per-gesture data (drag origin,
//! pinch anchor) lives in the active variant and is dropped when the gesture
//! ends.

use kurbo::{Point, Vec2};

/// The active gesture of a [`crate::PanZoom`] controller.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub(crate) enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Mouse (or pen) drag between pointer-down and pointer-up.
    MousePan(PanAnchor),
    /// At least one touch point is down.
    Touch(TouchGesture),
}

/// Touch sub-state. Anchors are captured lazily on the first move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum TouchGesture {
    /// Single-finger pan.
    Pan(Option<PanAnchor>),
    /// Two-finger pinch zoom.
    Pinch(Option<PinchAnchor>),
}

impl TouchGesture {
    /// Picks the sub-state for a touch-start with `count` active touches.
    ///
    /// An ongoing gesture of the same kind keeps its anchor.
    pub(crate) fn for_touch_count(current: Option<Self>, count: usize) -> Self {
        match (current, count > 1) {
            (Some(pinch @ Self::Pinch(_)), true) => pinch,
            (Some(pan @ Self::Pan(_)), false) => pan,
            (_, true) => Self::Pinch(None),
            (_, false) => Self::Pan(None),
        }
    }
}

/// Origin of a drag pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PanAnchor {
    /// Pointer position in page coordinates when the drag started.
    pub(crate) start_page: Point,
    /// Translation when the drag started.
    pub(crate) start_translation: Vec2,
}

impl PanAnchor {
    /// Translation for the pointer now at `page`.
    pub(crate) fn translation_at(&self, page: Point) -> Vec2 {
        self.start_translation + (page - self.start_page)
    }
}

/// Snapshot taken when a pinch starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PinchAnchor {
    /// Finger separation at gesture start.
    pub(crate) initial_distance: f64,
    /// Scale at gesture start.
    pub(crate) initial_scale: f64,
    /// Finger midpoint in container-local coordinates.
    pub(crate) zoom_point: Point,
    /// Content-local point under `zoom_point` at gesture start.
    pub(crate) zoom_target: Point,
}

/// Public view of the active gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// No gesture in progress.
    Idle,
    /// Mouse drag pan.
    MousePan,
    /// Single-finger touch pan.
    TouchPan,
    /// Two-finger pinch zoom.
    TouchPinch,
}

impl Gesture {
    /// Returns the public kind of this gesture.
    pub(crate) fn kind(&self) -> GestureKind {
        match self {
            Self::Idle => GestureKind::Idle,
            Self::MousePan(_) => GestureKind::MousePan,
            Self::Touch(TouchGesture::Pan(_)) => GestureKind::TouchPan,
            Self::Touch(TouchGesture::Pinch(_)) => GestureKind::TouchPinch,
        }
    }
}
