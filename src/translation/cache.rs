/*!
 * Translation caching functionality.
 *
 * Process-lifetime cache mapping exact payload strings to their accepted
 * translations. Keys are the raw inner payload, never a normalized or
 * hashed form: two distinct original payloads are never merged, even when
 * semantically identical, so a context-dependent mistranslation cannot
 * bleed across unrelated strings. Nothing is persisted between runs.
 *
 * Concurrency contract: reads and inserts are safe from any number of
 * workers. Two workers that miss on the same unseen payload at the same
 * time may both reach the backend; that is accepted duplicate work, not a
 * correctness violation (results for identical input are equivalent, last
 * write wins).
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

/// Shared in-memory translation cache
pub struct TranslationCache {
    cache: Arc<RwLock<HashMap<String, String>>>,
    hits: Arc<RwLock<usize>>,
    misses: Arc<RwLock<usize>>,
}

impl TranslationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
        }
    }

    /// Look up the translation for an exact payload
    pub fn get(&self, payload: &str) -> Option<String> {
        let cache = self.cache.read();
        match cache.get(payload) {
            Some(translation) => {
                *self.hits.write() += 1;
                debug!("Cache hit for '{}'", truncate_text(payload, 30));
                Some(translation.clone())
            }
            None => {
                *self.misses.write() += 1;
                None
            }
        }
    }

    /// Store an accepted translation (or an identity mapping) for a payload
    pub fn store(&self, payload: &str, translation: &str) {
        let mut cache = self.cache.write();
        cache.insert(payload.to_string(), translation.to_string());
        debug!("Cached translation for '{}'", truncate_text(payload, 30));
    }

    /// Hit count, miss count, and hit rate
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        (hits, misses, hit_rate)
    }

    /// Number of cached payloads
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TranslationCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
        }
    }
}

/// Truncate text to a maximum length with ellipsis, respecting char boundaries
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars).collect();
        format!("{}...", prefix)
    }
}
