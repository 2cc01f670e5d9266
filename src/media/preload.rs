// SPDX-License-Identifier: MPL-2.0
//! Image preload cache for the gallery and lightbox.
//!
//! Whenever the active lightbox item changes, a preload is issued for the
//! target independently of the visible image widget, so navigating back to
//! a warm entry shows no flash. The cache is LRU-evicted and bounded both
//! by entry count and total decoded bytes.

use super::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default preload cache size in bytes (32 MB).
pub const DEFAULT_PRELOAD_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Minimum preload cache size in bytes (8 MB).
pub const MIN_PRELOAD_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum preload cache size in bytes (128 MB).
pub const MAX_PRELOAD_CACHE_BYTES: usize = 128 * 1024 * 1024;

/// Default maximum number of cached images.
pub const DEFAULT_MAX_ENTRIES: usize = 32;

/// Configuration for the preload cache.
#[derive(Debug, Clone, Copy)]
pub struct PreloadConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,
    /// Maximum number of cached images.
    pub max_entries: usize,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PRELOAD_CACHE_BYTES,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// LRU cache of decoded images keyed by their gallery link target.
pub struct PreloadCache {
    cache: LruCache<String, ImageData>,
    config: PreloadConfig,
    current_bytes: usize,
}

impl PreloadCache {
    /// Creates a preload cache with the given configuration.
    pub fn new(config: PreloadConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_ENTRIES).expect("DEFAULT_MAX_ENTRIES must be non-zero"),
        );
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
        }
    }

    /// Creates a preload cache with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PreloadConfig::default())
    }

    /// Inserts a decoded image, evicting least recently used entries until
    /// the byte budget holds.
    ///
    /// Returns `false` when the image alone exceeds half the byte budget
    /// and is therefore not cached.
    pub fn insert(&mut self, target: String, image: ImageData) -> bool {
        let image_size = image.size_bytes();
        if image_size > self.config.max_bytes / 2 {
            return false;
        }

        while self.current_bytes + image_size > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            }
        }

        if let Some(existing) = self.cache.pop(&target) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        self.current_bytes += image_size;
        self.cache.put(target, image);
        true
    }

    /// Gets a cached image, updating LRU order.
    pub fn get(&mut self, target: &str) -> Option<ImageData> {
        self.cache.get(target).cloned()
    }

    /// Looks up a cached image without updating LRU order. Used by the view,
    /// which must not reorder the cache while rendering.
    pub fn peek(&self, target: &str) -> Option<&ImageData> {
        self.cache.peek(target)
    }

    /// Checks for a cached image without updating LRU order.
    pub fn contains(&self, target: &str) -> bool {
        self.cache.contains(target)
    }

    /// Returns the current number of cached images.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the current memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    /// Clears all cached images.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }
}

impl std::fmt::Debug for PreloadCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreloadCache")
            .field("entries", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_entries", &self.config.max_entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> ImageData {
        let pixels = vec![0u8; (width * height * 4) as usize];
        ImageData::from_rgba(width, height, pixels)
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = PreloadCache::with_defaults();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }

    #[test]
    fn insert_and_get_image() {
        let mut cache = PreloadCache::with_defaults();
        assert!(cache.insert("a.jpg".into(), test_image(100, 100)));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("a.jpg"));

        let image = cache.get("a.jpg").expect("cached image expected");
        assert_eq!(image.width, 100);
    }

    #[test]
    fn peek_does_not_change_lru_order() {
        let config = PreloadConfig {
            max_bytes: MIN_PRELOAD_CACHE_BYTES,
            max_entries: 2,
        };
        let mut cache = PreloadCache::new(config);
        cache.insert("a.jpg".into(), test_image(10, 10));
        cache.insert("b.jpg".into(), test_image(10, 10));

        // Peeking "a" must not protect it from eviction.
        assert!(cache.peek("a.jpg").is_some());
        cache.insert("c.jpg".into(), test_image(10, 10));
        assert!(!cache.contains("a.jpg"));
        assert!(cache.contains("b.jpg"));
    }

    #[test]
    fn eviction_respects_byte_budget() {
        let config = PreloadConfig {
            max_bytes: MIN_PRELOAD_CACHE_BYTES,
            max_entries: 100,
        };
        let mut cache = PreloadCache::new(config);

        // 512x512 RGBA is 1 MB; inserting 12 exceeds the 8 MB budget.
        for i in 0..12 {
            cache.insert(format!("img{i}.jpg"), test_image(512, 512));
        }

        assert!(cache.memory_usage() <= MIN_PRELOAD_CACHE_BYTES);
        assert!(cache.len() < 12);
    }

    #[test]
    fn oversized_image_is_not_cached() {
        let config = PreloadConfig {
            max_bytes: MIN_PRELOAD_CACHE_BYTES,
            max_entries: 100,
        };
        let mut cache = PreloadCache::new(config);

        // 2000x2000 RGBA is 16 MB, more than half the 8 MB budget.
        assert!(!cache.insert("big.jpg".into(), test_image(2000, 2000)));
        assert!(cache.is_empty());
    }

    #[test]
    fn duplicate_target_replaces_entry() {
        let mut cache = PreloadCache::with_defaults();
        cache.insert("a.jpg".into(), test_image(100, 100));
        let initial = cache.memory_usage();

        cache.insert("a.jpg".into(), test_image(200, 200));
        assert_eq!(cache.len(), 1);
        assert!(cache.memory_usage() > initial);
        assert_eq!(cache.get("a.jpg").expect("entry expected").width, 200);
    }

    #[test]
    fn clear_removes_all_entries() {
        let mut cache = PreloadCache::with_defaults();
        cache.insert("a.jpg".into(), test_image(50, 50));
        cache.insert("b.jpg".into(), test_image(50, 50));

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.memory_usage(), 0);
    }
}
