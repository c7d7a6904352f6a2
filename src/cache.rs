//! Format pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::ast::Pattern;
use crate::error::PatternError;

/// Global cache for parsed format patterns.
static CACHE: Mutex<Option<LruCache<String, Pattern>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a format pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> Result<Pattern, PatternError> {
    // A poisoned cache still holds only fully parsed patterns
    let mut cache_guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(pattern) {
        return Ok(parsed.clone());
    }

    tracing::trace!(pattern, "format pattern cache miss");
    let parsed = Pattern::parse(pattern)?;
    cache.put(pattern.to_string(), parsed.clone());
    Ok(parsed)
}
