// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing geometry: where the container is, how big the content is, and
//! where the resulting transform goes.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Supplies container and content dimensions to a [`crate::PanZoom`].
///
/// Implementations typically query a UI toolkit's layout. The controller reads
/// these values on [`crate::PanZoom::resize`], at the start of each gesture,
/// and for every wheel event; offsets captured when a gesture starts are
/// reused until it ends.
pub trait Geometry {
    /// Returns the container bounds in page coordinates.
    ///
    /// The rect origin is the container offset on the page; its size is the
    /// visible viewport size.
    fn container_rect(&self) -> Rect;

    /// Returns the natural size of the content at scale `1.0`.
    fn content_size(&self) -> Size;
}

/// A [`Geometry`] backed by plain values.
///
/// Useful for headless hosts and tests, or for toolkits that push layout
/// results instead of answering queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticGeometry {
    /// Container bounds in page coordinates.
    pub container: Rect,
    /// Natural content size.
    pub content: Size,
}

impl StaticGeometry {
    /// Creates a geometry from a page-space container rect and a content size.
    #[must_use]
    pub fn new(container: Rect, content: Size) -> Self {
        Self { container, content }
    }

    /// Replaces the container bounds.
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    /// Replaces the natural content size.
    pub fn set_content(&mut self, content: Size) {
        self.content = content;
    }
}

impl Geometry for StaticGeometry {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn content_size(&self) -> Size {
        self.content
    }
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn container_rect(&self) -> Rect {
        (**self).container_rect()
    }

    fn content_size(&self) -> Size {
        (**self).content_size()
    }
}

/// The transform emitted after every update.
///
/// Content-local points map to container-local points as
/// `p * scale + translation`, with the content origin corner as the anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomTransform {
    /// Offset of the content origin inside the container.
    pub translation: Vec2,
    /// Uniform content scale.
    pub scale: f64,
}

impl PanZoomTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Returns the equivalent affine transform (translate after scale).
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Maps a content-local point into container-local coordinates.
    #[must_use]
    pub fn content_to_container(self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.translation.x,
            pt.y * self.scale + self.translation.y,
        )
    }

    /// Maps a container-local point into content-local coordinates.
    #[must_use]
    pub fn container_to_content(self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translation.x) / self.scale,
            (pt.y - self.translation.y) / self.scale,
        )
    }
}

impl Default for PanZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Receives every transform the controller computes.
///
/// This is the renderer seam: a host applies the translation and scale to its
/// visual surface, anchored at the content's origin corner.
pub trait TransformSink {
    /// Called after each clamped transform update.
    fn update(&mut self, transform: PanZoomTransform);
}

/// Discards updates; the host polls [`crate::PanZoom::transform`] instead.
impl TransformSink for () {
    fn update(&mut self, _transform: PanZoomTransform) {}
}

/// Keeps the latest transform as an [`Affine`].
impl TransformSink for Affine {
    fn update(&mut self, transform: PanZoomTransform) {
        *self = transform.to_affine();
    }
}

/// Keeps the latest transform.
impl TransformSink for Option<PanZoomTransform> {
    fn update(&mut self, transform: PanZoomTransform) {
        *self = Some(transform);
    }
}

impl<S: TransformSink + ?Sized> TransformSink for &mut S {
    fn update(&mut self, transform: PanZoomTransform) {
        (**self).update(transform);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size, Vec2};

    use super::{Geometry, PanZoomTransform, StaticGeometry, TransformSink};

    #[test]
    fn affine_matches_point_mapping() {
        let t = PanZoomTransform {
            translation: Vec2::new(-30.0, 12.5),
            scale: 2.5,
        };
        let pt = Point::new(4.0, -8.0);
        let via_affine = t.to_affine() * pt;
        let direct = t.content_to_container(pt);
        assert!((via_affine.x - direct.x).abs() < 1e-9);
        assert!((via_affine.y - direct.y).abs() < 1e-9);

        let back = t.container_to_content(direct);
        assert!((back.x - pt.x).abs() < 1e-9);
        assert!((back.y - pt.y).abs() < 1e-9);
    }

    #[test]
    fn affine_sink_tracks_latest_update() {
        let mut sink = Affine::IDENTITY;
        let t = PanZoomTransform {
            translation: Vec2::new(10.0, 20.0),
            scale: 3.0,
        };
        sink.update(t);
        assert_eq!(sink, Affine::translate((10.0, 20.0)) * Affine::scale(3.0));

        let mut latest: Option<PanZoomTransform> = None;
        (&mut latest).update(t);
        assert_eq!(latest, Some(t));
    }

    #[test]
    fn static_geometry_setters() {
        let mut geometry = StaticGeometry::new(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Size::new(200.0, 100.0),
        );
        geometry.set_container(Rect::new(10.0, 10.0, 60.0, 60.0));
        geometry.set_content(Size::new(5.0, 5.0));
        let by_ref = &geometry;
        assert_eq!(by_ref.container_rect(), Rect::new(10.0, 10.0, 60.0, 60.0));
        assert_eq!(by_ref.content_size(), Size::new(5.0, 5.0));
    }
}
