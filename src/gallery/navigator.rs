// SPDX-License-Identifier: MPL-2.0
//! Navigation state over the scanned gallery item list.
//!
//! The navigator owns the fixed item list and the selected index, providing
//! a single source of truth shared between the thumbnail grid and the
//! lightbox overlay. Navigation wraps around in both directions, so the
//! selected index is always within bounds of the item list.

use super::GalleryItem;

/// Manages navigation through the gallery item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    items: Vec<GalleryItem>,
    current: usize,
}

impl GalleryNavigator {
    /// Creates a navigator over the scanned item list, selecting the first
    /// item when the list is non-empty.
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items, current: 0 }
    }

    /// Returns the total number of gallery items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the gallery is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the scanned items in document order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Returns the item at `index`, if within bounds.
    pub fn item(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Returns the currently selected item, if the gallery is non-empty.
    pub fn current(&self) -> Option<&GalleryItem> {
        self.items.get(self.current)
    }

    /// Returns the selected index, if the gallery is non-empty.
    pub fn current_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Selects `index`, reduced modulo the item count.
    ///
    /// Returns the selected index, or `None` for an empty gallery.
    pub fn set_current(&mut self, index: usize) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        self.current = index % self.items.len();
        Some(self.current)
    }

    /// Advances to the next item, wrapping to the first after the last.
    ///
    /// Returns the new index, or `None` for an empty gallery.
    pub fn next(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.items.len();
        Some(self.current)
    }

    /// Steps back to the previous item, wrapping to the last before the first.
    ///
    /// Returns the new index, or `None` for an empty gallery.
    pub fn previous(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        self.current = (self.current + self.items.len() - 1) % self.items.len();
        Some(self.current)
    }
}

impl Default for GalleryNavigator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
