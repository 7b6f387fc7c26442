//! Imperative scroll capability for a list whose built-in scrolling is off.
//!
//! The list reads [`ScrollController::offset`] on every render and writes
//! its viewport size back with [`ScrollController::set_visible_rows`]. Row
//! focus handlers issue [`ScrollToIndex::scroll_to_index`] requests. All of
//! this happens on the UI thread, so plain `Cell`s are enough.

use std::cell::Cell;
use tracing::{debug, warn};

/// How a scroll request positions its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    /// Move one row per tick instead of jumping
    pub animated: bool,
    /// Where the target lands in the viewport: 0.0 top, 0.5 middle, 1.0 bottom
    pub view_position: f32,
}

impl ScrollOptions {
    /// Animated, target row centered
    pub const CENTERED: Self = Self {
        animated: true,
        view_position: 0.5,
    };
}

/// A recorded scroll request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub index: usize,
    pub options: ScrollOptions,
}

/// Capability to bring a list row into view
pub trait ScrollToIndex {
    fn scroll_to_index(&self, index: usize, options: ScrollOptions);
}

/// Row-granular scroll position for a list of fixed length
#[derive(Debug)]
pub struct ScrollController {
    len: usize,
    visible_rows: Cell<usize>,
    offset: Cell<usize>,
    target: Cell<usize>,
    last_request: Cell<Option<ScrollRequest>>,
    request_count: Cell<usize>,
}

impl ScrollController {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            visible_rows: Cell::new(0),
            offset: Cell::new(0),
            target: Cell::new(0),
            last_request: Cell::new(None),
            request_count: Cell::new(0),
        }
    }

    /// First row currently shown
    pub fn offset(&self) -> usize {
        self.offset.get()
    }

    /// Row the controller is scrolling toward
    pub fn target(&self) -> usize {
        self.target.get()
    }

    pub fn is_animating(&self) -> bool {
        self.offset.get() != self.target.get()
    }

    pub fn last_request(&self) -> Option<ScrollRequest> {
        self.last_request.get()
    }

    /// Total requests issued since creation
    pub fn request_count(&self) -> usize {
        self.request_count.get()
    }

    /// Record how many rows fit in the viewport; called by the list on render
    pub fn set_visible_rows(&self, rows: usize) {
        if rows == self.visible_rows.get() {
            return;
        }
        self.visible_rows.set(rows);
        let max = self.max_offset();
        self.offset.set(self.offset.get().min(max));
        self.target.set(self.target.get().min(max));
    }

    /// Advance an animated scroll by one row
    ///
    /// Returns true if the offset moved.
    pub fn tick(&self) -> bool {
        let offset = self.offset.get();
        let target = self.target.get();
        if offset == target {
            return false;
        }
        let next = if offset < target { offset + 1 } else { offset - 1 };
        self.offset.set(next);
        true
    }

    fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.visible_rows.get().max(1))
    }

    fn offset_for(&self, index: usize, view_position: f32) -> usize {
        let visible = self.visible_rows.get().max(1);
        let lead = ((visible - 1) as f32 * view_position.clamp(0.0, 1.0)).round() as usize;
        index.saturating_sub(lead).min(self.max_offset())
    }
}

impl ScrollToIndex for ScrollController {
    fn scroll_to_index(&self, index: usize, options: ScrollOptions) {
        if index >= self.len {
            warn!("scroll_to_index({}) is out of range for {} rows", index, self.len);
        }

        self.request_count.set(self.request_count.get() + 1);
        self.last_request.set(Some(ScrollRequest { index, options }));

        let target = self.offset_for(index, options.view_position);
        self.target.set(target);
        if !options.animated {
            self.offset.set(target);
        }
        debug!(
            "Scroll to index {} -> offset {} (animated: {})",
            index, target, options.animated
        );
    }
}
