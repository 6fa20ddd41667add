// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui-events` pointer events to [`PanZoom`] handlers.
//!
//! `ui-events` reports one event per pointer, so touch contacts are collected
//! in a [`TouchTracker`] and forwarded as a full touch list. Mouse and pen
//! pointers drive the drag handlers; scroll events drive wheel zoom.
//!
//! ```rust,no_run
//! use kurbo::{Rect, Size};
//! use understory_pan_zoom::{PanZoom, PanZoomConfig, PointerAdapter, StaticGeometry};
//! use ui_events::pointer::PointerEvent;
//!
//! let geometry = StaticGeometry::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Size::new(1600.0, 1200.0),
//! );
//! let mut pan_zoom = PanZoom::new(geometry, kurbo::Affine::IDENTITY, PanZoomConfig::new())?;
//! pan_zoom.initialize();
//!
//! let mut adapter = PointerAdapter::new();
//! # fn next_event() -> Option<PointerEvent> { None }
//! while let Some(event) = next_event() {
//!     adapter.handle(&event, &mut pan_zoom);
//! }
//! # Ok::<(), understory_pan_zoom::ConfigError>(())
//! ```

use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerId, PointerInfo, PointerType};

use crate::controller::PanZoom;
use crate::geometry::{Geometry, TransformSink};
use crate::touch::TouchTracker;
use crate::wheel::WheelDelta;

/// Routes `ui-events` pointer events into a [`PanZoom`].
#[derive(Clone, Debug, Default)]
pub struct PointerAdapter {
    touches: TouchTracker<Option<PointerId>>,
}

impl PointerAdapter {
    /// Creates an adapter with no active touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of touch contacts currently down.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// Forwards `event` to the matching handler.
    ///
    /// Returns `true` if the transform changed.
    pub fn handle<G: Geometry, S: TransformSink>(
        &mut self,
        event: &PointerEvent,
        pan_zoom: &mut PanZoom<G, S>,
    ) -> bool {
        match event {
            PointerEvent::Down(e) => {
                let pos = e.state.logical_point();
                if is_touch(&e.pointer) {
                    self.touches.press(e.pointer.pointer_id, pos);
                    pan_zoom.touch_start(&self.touches.points());
                } else {
                    pan_zoom.pointer_down(pos);
                }
                false
            }
            PointerEvent::Move(e) => {
                let pos = e.current.logical_point();
                if is_touch(&e.pointer) {
                    if !self.touches.moved(e.pointer.pointer_id, pos) {
                        return false;
                    }
                    pan_zoom.touch_move(&self.touches.points())
                } else {
                    pan_zoom.pointer_move(pos)
                }
            }
            PointerEvent::Up(e) => {
                self.release(&e.pointer, pan_zoom);
                false
            }
            PointerEvent::Cancel(info) => {
                self.release(info, pan_zoom);
                false
            }
            PointerEvent::Scroll(e) => {
                pan_zoom.wheel(e.state.logical_point(), wheel_delta(&e.delta))
            }
            _ => false,
        }
    }

    fn release<G: Geometry, S: TransformSink>(
        &mut self,
        pointer: &PointerInfo,
        pan_zoom: &mut PanZoom<G, S>,
    ) {
        if is_touch(pointer) {
            if self.touches.release(pointer.pointer_id) {
                pan_zoom.touch_end(&self.touches.points());
            }
        } else {
            pan_zoom.pointer_up();
        }
    }
}

fn is_touch(pointer: &PointerInfo) -> bool {
    pointer.pointer_type == PointerType::Touch
}

/// Projects a scroll delta onto the vertical wheel convention.
fn wheel_delta(delta: &ScrollDelta) -> WheelDelta {
    match delta {
        ScrollDelta::PixelDelta(pos) => WheelDelta::Wheel(pos.y),
        ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => {
            WheelDelta::Wheel(f64::from(*y))
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size, Vec2};
    use ui_events::ScrollDelta;
    use ui_events::pointer::{
        PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo,
        PointerScrollEvent, PointerState, PointerType, PointerUpdate,
    };

    use super::{PointerAdapter, wheel_delta};
    use crate::{GestureKind, PanZoom, PanZoomConfig, StaticGeometry, WheelDelta};

    const EPS: f64 = 1e-9;

    fn pan_zoom() -> PanZoom<StaticGeometry, ()> {
        let mut pz = PanZoom::new(
            StaticGeometry::new(
                Rect::new(0.0, 0.0, 500.0, 500.0),
                Size::new(1000.0, 1000.0),
            ),
            (),
            PanZoomConfig::new().with_scale_limits(1.0, 10.0),
        )
        .unwrap();
        pz.initialize();
        pz
    }

    fn pointer(id: u64, pointer_type: PointerType) -> PointerInfo {
        PointerInfo {
            pointer_id: PointerId::new(id),
            persistent_device_id: None,
            pointer_type,
        }
    }

    fn mouse() -> PointerInfo {
        pointer(1, PointerType::Mouse)
    }

    fn finger(id: u64) -> PointerInfo {
        pointer(id, PointerType::Touch)
    }

    fn state_at(x: f64, y: f64) -> PointerState {
        let mut state = PointerState::default();
        state.position.x = x;
        state.position.y = y;
        state
    }

    fn down(pointer: PointerInfo, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer,
            state: state_at(x, y),
        })
    }

    fn up(pointer: PointerInfo, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up(PointerButtonEvent {
            button: Some(PointerButton::Primary),
            pointer,
            state: state_at(x, y),
        })
    }

    fn move_to(pointer: PointerInfo, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move(PointerUpdate {
            pointer,
            current: state_at(x, y),
            coalesced: Vec::new(),
            predicted: Vec::new(),
        })
    }

    #[test]
    fn mouse_drag_pans() {
        let mut pz = pan_zoom();
        let mut adapter = PointerAdapter::new();
        let before = pz.translation();

        assert!(!adapter.handle(&down(mouse(), 50.0, 50.0), &mut pz));
        assert_eq!(pz.gesture(), GestureKind::MousePan);
        assert!(adapter.handle(&move_to(mouse(), 150.0, 20.0), &mut pz));
        assert_eq!(pz.translation(), before + Vec2::new(100.0, -30.0));

        adapter.handle(&up(mouse(), 150.0, 20.0), &mut pz);
        assert_eq!(pz.gesture(), GestureKind::Idle);
        assert!(!adapter.handle(&move_to(mouse(), 0.0, 0.0), &mut pz));
        assert_eq!(adapter.active_touches(), 0);
    }

    #[test]
    fn two_fingers_pinch_and_release_in_order() {
        let mut pz = pan_zoom();
        let mut adapter = PointerAdapter::new();

        adapter.handle(&down(finger(2), 100.0, 100.0), &mut pz);
        assert_eq!(pz.gesture(), GestureKind::TouchPan);
        adapter.handle(&down(finger(3), 200.0, 100.0), &mut pz);
        assert_eq!(pz.gesture(), GestureKind::TouchPinch);
        assert_eq!(adapter.active_touches(), 2);

        // First move captures the pinch anchor.
        assert!(!adapter.handle(&move_to(finger(3), 200.0, 100.0), &mut pz));
        assert!(adapter.handle(&move_to(finger(2), 0.0, 100.0), &mut pz));
        assert!((pz.scale() - 2.0).abs() < EPS);

        adapter.handle(&up(finger(2), 0.0, 100.0), &mut pz);
        assert_eq!(adapter.active_touches(), 1);
        assert_eq!(pz.gesture(), GestureKind::TouchPan);

        // The remaining finger pans from where it is.
        let after_pinch = pz.translation();
        assert!(adapter.handle(&move_to(finger(3), 200.0, 100.0), &mut pz));
        assert!(adapter.handle(&move_to(finger(3), 210.0, 90.0), &mut pz));
        assert_eq!(pz.translation(), after_pinch + Vec2::new(10.0, -10.0));

        adapter.handle(&PointerEvent::Cancel(finger(3)), &mut pz);
        assert_eq!(adapter.active_touches(), 0);
        assert_eq!(pz.gesture(), GestureKind::Idle);
    }

    #[test]
    fn unknown_touch_moves_are_dropped() {
        let mut pz = pan_zoom();
        let mut adapter = PointerAdapter::new();
        let before = pz.transform();

        assert!(!adapter.handle(&move_to(finger(5), 10.0, 10.0), &mut pz));
        adapter.handle(&up(finger(5), 10.0, 10.0), &mut pz);
        assert_eq!(pz.transform(), before);
        assert_eq!(pz.gesture(), GestureKind::Idle);
    }

    #[test]
    fn scroll_zooms_about_pointer() {
        let mut pz = pan_zoom();
        let mut adapter = PointerAdapter::new();
        let anchor = Point::new(120.0, 300.0);
        let target = pz.container_to_content_point(anchor);

        let scroll = PointerEvent::Scroll(PointerScrollEvent {
            pointer: mouse(),
            delta: ScrollDelta::LineDelta(0.0, 3.0),
            state: state_at(anchor.x, anchor.y),
        });
        assert!(adapter.handle(&scroll, &mut pz));
        assert!((pz.scale() - 1.1).abs() < EPS);
        let after = pz.content_to_container_point(target);
        assert!((after.x - anchor.x).abs() < EPS);
        assert!((after.y - anchor.y).abs() < EPS);
    }

    #[test]
    fn line_and_page_deltas_use_vertical_axis() {
        assert_eq!(
            wheel_delta(&ScrollDelta::LineDelta(5.0, -3.0)),
            WheelDelta::Wheel(-3.0)
        );
        assert_eq!(
            wheel_delta(&ScrollDelta::PageDelta(0.0, 1.0)).normalized(),
            1.0
        );
    }

    #[test]
    fn new_adapter_has_no_touches() {
        assert_eq!(PointerAdapter::new().active_touches(), 0);
    }
}
