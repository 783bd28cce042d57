//! Process-lifetime QR markup cache.
//!
//! # Design Decisions
//! - Keyed by `(text, size)`, unbounded: the input domain is a handful of
//!   fixed destination URLs known at deploy time
//! - Concurrent misses may recompute the same value; rendering is pure and
//!   idempotent, so last write wins without corruption
//! - Explicit object passed through application state, not a global

use std::sync::Arc;

use dashmap::DashMap;

use crate::qr::svg::render_svg;

/// A thread-safe memoization layer over [`render_svg`].
#[derive(Clone, Default)]
pub struct QrCache {
    inner: Arc<DashMap<(String, u32), String>>,
}

impl QrCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `text` at `size`, returning the cached markup on repeat calls.
    pub fn svg(&self, text: &str, size: u32) -> String {
        let key = (text.to_string(), size);
        if let Some(hit) = self.inner.get(&key) {
            tracing::debug!(text = %text, "QR cache hit");
            return hit.value().clone();
        }

        let svg = render_svg(text, size);
        self.inner.insert(key, svg.clone());
        svg
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::svg::render_svg;

    #[test]
    fn test_repeat_calls_are_identical() {
        let cache = QrCache::new();
        let a = cache.svg("https://example.com", 164);
        let b = cache.svg("https://example.com", 164);
        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_matches_pure_render() {
        let cache = QrCache::new();
        let cached = cache.svg("https://example.com", 164);
        assert_eq!(cached, render_svg("https://example.com", 164));
    }

    #[test]
    fn test_size_is_part_of_the_key() {
        let cache = QrCache::new();
        let small = cache.svg("https://example.com", 100);
        let large = cache.svg("https://example.com", 200);
        assert_ne!(small, large);
        assert_eq!(cache.len(), 2);
    }
}
