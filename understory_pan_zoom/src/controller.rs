// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, trace, warn};

use crate::config::{ConfigError, MinScaleMode, PanZoomConfig};
use crate::geometry::{Geometry, PanZoomTransform, TransformSink};
use crate::gesture::{Gesture, GestureKind, PanAnchor, PinchAnchor, TouchGesture};
use crate::wheel::WheelDelta;

/// Pan and zoom controller for one content element inside one container.
///
/// `PanZoom` owns the current scale and translation and turns raw pointer,
/// wheel and touch input into a new [`PanZoomTransform`] after every event.
/// Each update is clamped so that:
/// - `min_scale <= scale <= max_scale`;
/// - content larger than the container leaves no gap at either edge;
/// - content smaller than the container is pinned to the near edge.
///
/// Container and content sizes come from a [`Geometry`]; every update is
/// pushed into a [`TransformSink`].
///
/// Handlers return `true` when they changed the transform (and notified the
/// sink). Events delivered outside their gesture, such as a pointer-move with
/// no button down, are ignored.
#[derive(Clone, Debug)]
pub struct PanZoom<G, S> {
    geometry: G,
    sink: S,
    config: PanZoomConfig,
    min_scale: f64,
    max_scale: f64,
    container: Rect,
    content: Size,
    scale: f64,
    translation: Vec2,
    gesture: Gesture,
}

impl<G: Geometry, S: TransformSink> PanZoom<G, S> {
    /// Creates a controller. Call [`PanZoom::initialize`] before feeding input.
    ///
    /// Scale is unset until the first resize, which sets it to the minimum
    /// scale.
    pub fn new(geometry: G, sink: S, config: PanZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let container = geometry.container_rect();
        let content = geometry.content_size();
        Ok(Self {
            geometry,
            sink,
            config,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            container,
            content,
            scale: 0.0,
            translation: Vec2::ZERO,
            gesture: Gesture::Idle,
        })
    }

    /// Reads the geometry, derives the scale bounds, and centers the content.
    pub fn initialize(&mut self) {
        debug!(
            "pan_zoom: init min_scale={} max_scale={} zoom_factor={} mode={:?}",
            self.config.min_scale,
            self.config.max_scale,
            self.config.zoom_factor,
            self.config.min_scale_mode
        );
        self.resize();
        self.recenter();
    }

    /// Re-reads container and content dimensions.
    ///
    /// Derives the minimum scale for [`MinScaleMode::FitContainer`] and
    /// [`MinScaleMode::CoverContainer`], raises the scale to the minimum if it
    /// is unset or too small, then clamps and notifies. Must be called
    /// whenever the container or content changes size.
    pub fn resize(&mut self) {
        self.container = self.geometry.container_rect();
        self.content = self.geometry.content_size();
        self.min_scale = self.config.min_scale;
        self.max_scale = self.config.max_scale;

        if self.config.min_scale_mode != MinScaleMode::Fixed {
            if let Some((min_zoom_w, min_zoom_h)) = self.fit_ratios() {
                self.min_scale = match self.config.min_scale_mode {
                    MinScaleMode::FitContainer => min_zoom_w.min(min_zoom_h),
                    MinScaleMode::CoverContainer => min_zoom_w.max(min_zoom_h),
                    MinScaleMode::Fixed => self.min_scale,
                };
                if self.min_scale > self.max_scale {
                    debug!(
                        "pan_zoom: derived min_scale {} exceeds max_scale {}; raising max",
                        self.min_scale, self.max_scale
                    );
                    self.max_scale = self.min_scale;
                }
            } else {
                warn!(
                    "pan_zoom: cannot derive min_scale from content size {:?}",
                    self.content
                );
            }
        }
        debug!("pan_zoom: min_scale={}", self.min_scale);

        if self.scale <= 0.0 || self.scale < self.min_scale {
            self.scale = self.min_scale;
        }
        self.scale = self.clamp_scale(self.scale);
        self.commit();
    }

    /// Centers the content in the container at the current scale.
    pub fn recenter(&mut self) {
        let container = self.container.size();
        self.translation = Vec2::new(
            -(self.content.width * self.scale - container.width) / 2.0,
            -(self.content.height * self.scale - container.height) / 2.0,
        );
        self.commit();
    }

    /// Starts a mouse drag at `page`.
    ///
    /// Ignored while a touch gesture is active.
    pub fn pointer_down(&mut self, page: Point) {
        if matches!(self.gesture, Gesture::Touch(_)) {
            trace!("pan_zoom: pointer down ignored during touch");
            return;
        }
        self.gesture = Gesture::MousePan(self.pan_anchor(page));
        debug!("pan_zoom: mouse pan start at {page:?}");
    }

    /// Pans by the pointer travel since [`PanZoom::pointer_down`].
    pub fn pointer_move(&mut self, page: Point) -> bool {
        let Gesture::MousePan(anchor) = self.gesture else {
            return false;
        };
        self.translation = anchor.translation_at(page);
        self.commit();
        true
    }

    /// Ends a mouse drag.
    pub fn pointer_up(&mut self) {
        if matches!(self.gesture, Gesture::MousePan(_)) {
            debug!("pan_zoom: mouse pan end");
            self.gesture = Gesture::Idle;
        }
    }

    /// Zooms one step about the pointer at `page`.
    pub fn wheel(&mut self, page: Point, delta: WheelDelta) -> bool {
        let origin = self.geometry.container_rect().origin();
        let zoom_point = Point::new(page.x - origin.x, page.y - origin.y);
        self.zoom_about(zoom_point, delta.normalized())
    }

    /// Zooms in one step about the container center.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_about(self.container_center(), 1.0)
    }

    /// Zooms out one step about the container center.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_about(self.container_center(), -1.0)
    }

    /// Changes the scale by `delta` steps, keeping `zoom_point` fixed.
    ///
    /// `zoom_point` is in container-local coordinates. Each step scales by
    /// `1 + zoom_factor` relative to the current scale (additively, so a
    /// step in and a step out do not cancel exactly).
    pub fn zoom_about(&mut self, zoom_point: Point, delta: f64) -> bool {
        if self.scale <= 0.0 {
            return false;
        }
        let zoom_target = self.transform().container_to_content(zoom_point);
        self.scale =
            self.clamp_scale(self.scale + delta * self.config.zoom_factor * self.scale);
        self.translation = anchored_translation(zoom_target, zoom_point, self.scale);
        self.commit();
        true
    }

    /// Handles touch contact with the active touches in contact order.
    pub fn touch_start(&mut self, touches: &[Point]) {
        if touches.is_empty() {
            warn!("pan_zoom: touch start without touches");
            return;
        }
        let current = match self.gesture {
            Gesture::Touch(touch) => Some(touch),
            _ => None,
        };
        let next = TouchGesture::for_touch_count(current, touches.len());
        if current != Some(next) {
            debug!("pan_zoom: touch gesture {:?}", Gesture::Touch(next).kind());
        }
        self.gesture = Gesture::Touch(next);
    }

    /// Pans with the first touch or pinches with the first two.
    pub fn touch_move(&mut self, touches: &[Point]) -> bool {
        if touches.is_empty() {
            warn!("pan_zoom: touch move without touches");
            return false;
        }
        if !matches!(self.gesture, Gesture::Touch(_)) {
            self.touch_start(touches);
        }
        match self.gesture {
            Gesture::Touch(TouchGesture::Pinch(anchor)) => match touches {
                [first, second, ..] => self.touch_pinch(anchor, *first, *second),
                // Lifted to one finger; wait for the touch end.
                _ => false,
            },
            Gesture::Touch(TouchGesture::Pan(anchor)) => self.touch_pan(anchor, touches[0]),
            _ => false,
        }
    }

    /// Handles touch release with the touches that remain down.
    pub fn touch_end(&mut self, remaining: &[Point]) {
        let Gesture::Touch(touch) = self.gesture else {
            return;
        };
        if remaining.is_empty() {
            debug!("pan_zoom: touch end");
            self.gesture = Gesture::Idle;
        } else if matches!(touch, TouchGesture::Pinch(_)) && remaining.len() < 2 {
            debug!("pan_zoom: pinch end, {} touch remaining", remaining.len());
            self.gesture = Gesture::Touch(TouchGesture::Pan(None));
        }
    }

    fn touch_pan(&mut self, anchor: Option<PanAnchor>, page: Point) -> bool {
        let anchor = match anchor {
            Some(anchor) => anchor,
            None => {
                let anchor = self.pan_anchor(page);
                self.gesture = Gesture::Touch(TouchGesture::Pan(Some(anchor)));
                anchor
            }
        };
        self.translation = anchor.translation_at(page);
        self.commit();
        true
    }

    fn touch_pinch(&mut self, anchor: Option<PinchAnchor>, first: Point, second: Point) -> bool {
        if self.scale <= 0.0 {
            return false;
        }
        let distance = first.distance(second);
        let Some(anchor) = anchor else {
            if distance <= 0.0 {
                warn!("pan_zoom: pinch with coincident touches, deferring start");
                return false;
            }
            let origin = self.geometry.container_rect().origin();
            let midpoint = first.midpoint(second);
            let zoom_point = Point::new(midpoint.x - origin.x, midpoint.y - origin.y);
            let anchor = PinchAnchor {
                initial_distance: distance,
                initial_scale: self.scale,
                zoom_point,
                zoom_target: self.transform().container_to_content(zoom_point),
            };
            debug!("pan_zoom: pinch start {anchor:?}");
            self.gesture = Gesture::Touch(TouchGesture::Pinch(Some(anchor)));
            return false;
        };
        let ratio = distance / anchor.initial_distance;
        self.scale = self.clamp_scale(anchor.initial_scale * ratio);
        self.translation = anchored_translation(anchor.zoom_target, anchor.zoom_point, self.scale);
        self.commit();
        true
    }

    fn pan_anchor(&self, page: Point) -> PanAnchor {
        PanAnchor {
            start_page: page,
            start_translation: self.translation,
        }
    }

    fn container_center(&self) -> Point {
        let size = self.container.size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        self.min_scale.max(self.max_scale.min(scale))
    }

    /// Clamps the translation, then notifies the sink.
    fn commit(&mut self) {
        let container = self.container.size();
        self.translation = Vec2::new(
            clamp_axis(
                self.translation.x,
                self.scale * self.content.width,
                container.width,
            ),
            clamp_axis(
                self.translation.y,
                self.scale * self.content.height,
                container.height,
            ),
        );
        let transform = self.transform();
        trace!(
            "pan_zoom: update {:.6}, {:.6} scale {:.3}",
            transform.translation.x, transform.translation.y, transform.scale
        );
        self.sink.update(transform);
    }
}

impl<G, S> PanZoom<G, S> {
    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> PanZoomTransform {
        PanZoomTransform {
            translation: self.translation,
            scale: self.scale,
        }
    }

    /// Returns the current scale, or `0.0` before the first resize.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current translation of the content origin.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns the effective minimum scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the effective maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns the configuration the controller was built with.
    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    /// Returns the kind of gesture in progress.
    #[must_use]
    pub fn gesture(&self) -> GestureKind {
        self.gesture.kind()
    }

    /// Maps a container-local point into content-local coordinates.
    #[must_use]
    pub fn container_to_content_point(&self, pt: Point) -> Point {
        self.transform().container_to_content(pt)
    }

    /// Maps a content-local point into container-local coordinates.
    #[must_use]
    pub fn content_to_container_point(&self, pt: Point) -> Point {
        self.transform().content_to_container(pt)
    }

    /// Returns the geometry provider.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Returns the geometry provider for updates; call
    /// [`PanZoom::resize`] afterwards.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Returns the transform sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the transform sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the controller, returning the geometry and sink.
    pub fn into_parts(self) -> (G, S) {
        (self.geometry, self.sink)
    }

    /// Container/content size ratios per axis, if the content has an area.
    fn fit_ratios(&self) -> Option<(f64, f64)> {
        if self.content.width > 0.0 && self.content.height > 0.0 {
            let container = self.container.size();
            Some((
                container.width / self.content.width,
                container.height / self.content.height,
            ))
        } else {
            None
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanZoomDebugInfo {
        PanZoomDebugInfo {
            container: self.container,
            content: self.content,
            scale: self.scale,
            translation: self.translation,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            zoom_factor: self.config.zoom_factor,
            min_scale_mode: self.config.min_scale_mode,
            fit_ratios: self.fit_ratios(),
            gesture: self.gesture(),
        }
    }
}

/// Debug snapshot of a [`PanZoom`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomDebugInfo {
    /// Container bounds in page coordinates, as of the last resize.
    pub container: Rect,
    /// Natural content size, as of the last resize.
    pub content: Size,
    /// Current scale.
    pub scale: f64,
    /// Current translation.
    pub translation: Vec2,
    /// Effective minimum scale.
    pub min_scale: f64,
    /// Effective maximum scale.
    pub max_scale: f64,
    /// Scale change per step.
    pub zoom_factor: f64,
    /// Minimum scale derivation mode.
    pub min_scale_mode: MinScaleMode,
    /// Width and height ratios of container to content, the inputs to the
    /// fit and cover minimum scales. `None` when the content has no area.
    pub fit_ratios: Option<(f64, f64)>,
    /// Gesture in progress.
    pub gesture: GestureKind,
}

/// Translation that puts content point `zoom_target` under `zoom_point`.
fn anchored_translation(zoom_target: Point, zoom_point: Point, scale: f64) -> Vec2 {
    Vec2::new(
        -zoom_target.x * scale + zoom_point.x,
        -zoom_target.y * scale + zoom_point.y,
    )
}

/// Clamps one axis of the translation.
///
/// A gap past the far edge snaps the content to the far edge; a gap before
/// the near edge then snaps it to the near edge. Content smaller than the
/// container therefore ends up at `0`.
fn clamp_axis(translation: f64, scaled_content: f64, container: f64) -> f64 {
    let mut translation = translation;
    if translation + scaled_content < container {
        translation = container - scaled_content;
    }
    if translation > 0.0 {
        translation = 0.0;
    }
    translation
}
