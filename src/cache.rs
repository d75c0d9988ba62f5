//! Content-addressed LRU caches for extraction and ranking results.
//!
//! Extraction and ranking are pure functions of their inputs, so results
//! are keyed by a SHA-256 digest of the exact input:
//! - PDF bytes for extracted text
//! - job description plus the ordered resume texts for scores
//!
//! Keys are derived from content, so entries never go stale and no
//! invalidation is needed. A capacity of zero disables a cache entirely.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use sha2::{Digest, Sha256};

/// Default number of entries kept per cache.
pub const DEFAULT_CACHE_SIZE: usize = 64;

/// SHA-256 digest identifying a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Hash raw bytes (e.g. a PDF file).
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Hash a ranking request: the job description and the ordered resume texts.
    ///
    /// Every part is length-prefixed so that different splits of the same
    /// characters produce different keys.
    pub fn of_ranking<S: AsRef<str>>(job_description: &str, resumes: &[S]) -> Self {
        let mut hasher = Sha256::new();
        update_framed(&mut hasher, job_description.as_bytes());
        hasher.update((resumes.len() as u64).to_le_bytes());
        for text in resumes {
            update_framed(&mut hasher, text.as_ref().as_bytes());
        }
        Self(hasher.finalize().into())
    }
}

fn update_framed(hasher: &mut Sha256, part: &[u8]) {
    hasher.update((part.len() as u64).to_le_bytes());
    hasher.update(part);
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Hit and miss counters for a cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to compute the value
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct Inner<V> {
    entries: Option<LruCache<ContentHash, V>>,
    stats: CacheStats,
}

/// Thread-safe bounded cache keyed by [`ContentHash`].
///
/// The cache is advisory: a poisoned lock degrades to recomputation.
pub struct ContentCache<V> {
    inner: Mutex<Inner<V>>,
}

impl<V: Clone> ContentCache<V> {
    /// Create a cache holding at most `capacity` entries (0 disables it).
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: NonZeroUsize::new(capacity).map(LruCache::new),
                stats: CacheStats::default(),
            }),
        }
    }

    /// Whether the cache stores anything at all.
    pub fn is_enabled(&self) -> bool {
        self.inner
            .lock()
            .map(|inner| inner.entries.is_some())
            .unwrap_or(false)
    }

    /// Look up a value, counting the hit or miss.
    pub fn get(&self, key: &ContentHash) -> Option<V> {
        let mut inner = self.inner.lock().ok()?;
        let found = inner.entries.as_mut().and_then(|e| e.get(key).cloned());
        if found.is_some() {
            inner.stats.hits += 1;
        } else {
            inner.stats.misses += 1;
        }
        found
    }

    /// Store a value.
    pub fn put(&self, key: ContentHash, value: V) {
        if let Ok(mut inner) = self.inner.lock() {
            if let Some(entries) = inner.entries.as_mut() {
                entries.put(key, value);
            }
        }
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// Errors from `compute` are returned as-is and never cached.
    pub fn get_or_try_insert_with<E, F>(&self, key: ContentHash, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            log::debug!("cache hit for {}", key);
            return Ok(value);
        }

        let value = compute()?;
        self.put(key, value.clone());
        Ok(value)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.entries.as_ref().map(LruCache::len))
            .unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.inner
            .lock()
            .map(|inner| inner.stats)
            .unwrap_or_default()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            if let Some(entries) = inner.entries.as_mut() {
                entries.clear();
            }
            inner.stats = CacheStats::default();
        }
    }
}

impl<V: Clone> Default for ContentCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}

impl<V> fmt::Debug for ContentCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ContentCache");
        if let Ok(inner) = self.inner.lock() {
            s.field("len", &inner.entries.as_ref().map(LruCache::len));
            s.field("stats", &inner.stats);
        }
        s.finish()
    }
}
