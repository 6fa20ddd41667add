// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active touch bookkeeping for per-pointer event sources.
//!
//! Toolkits that deliver one event per touch point (rather than a full touch
//! list per event) can use [`TouchTracker`] to rebuild the ordered list of
//! active touches that [`crate::PanZoom`]'s touch handlers expect.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_pan_zoom::TouchTracker;
//!
//! let mut touches = TouchTracker::new();
//! touches.press(7_u32, Point::new(10.0, 10.0));
//! touches.press(9_u32, Point::new(30.0, 10.0));
//! assert!(touches.moved(9, Point::new(40.0, 10.0)));
//!
//! // Contact order is preserved.
//! assert_eq!(touches.points().as_slice(), &[Point::new(10.0, 10.0), Point::new(40.0, 10.0)]);
//!
//! touches.release(7);
//! assert_eq!(touches.points().as_slice(), &[Point::new(40.0, 10.0)]);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Inline capacity before the tracker spills to the heap.
const INLINE_TOUCHES: usize = 4;

/// Ordered list of active touch points keyed by a host pointer id.
#[derive(Clone, Debug)]
pub struct TouchTracker<K> {
    active: SmallVec<[(K, Point); INLINE_TOUCHES]>,
}

impl<K: Copy + Eq> TouchTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: SmallVec::new(),
        }
    }

    /// Records a new contact, or moves an existing one with the same id.
    pub fn press(&mut self, id: K, pos: Point) {
        if !self.moved(id, pos) {
            self.active.push((id, pos));
        }
    }

    /// Updates the position of a known contact.
    ///
    /// Returns `false` if `id` is not currently down.
    pub fn moved(&mut self, id: K, pos: Point) -> bool {
        match self.active.iter_mut().find(|(k, _)| *k == id) {
            Some(entry) => {
                entry.1 = pos;
                true
            }
            None => false,
        }
    }

    /// Removes a contact. Returns `false` if `id` was not down.
    pub fn release(&mut self, id: K) -> bool {
        match self.active.iter().position(|(k, _)| *k == id) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `id` is currently down.
    #[must_use]
    pub fn contains(&self, id: K) -> bool {
        self.active.iter().any(|(k, _)| *k == id)
    }

    /// Drops every contact.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Number of active contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` when no contact is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Positions of the active contacts, in contact order.
    #[must_use]
    pub fn points(&self) -> SmallVec<[Point; INLINE_TOUCHES]> {
        self.active.iter().map(|(_, p)| *p).collect()
    }
}

impl<K: Copy + Eq> Default for TouchTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
