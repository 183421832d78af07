/*!
 * Run statistics shared across translation workers.
 *
 * One `RunStats` is created per run, shared via `Arc`, mutated by every
 * worker, and read once at the end for the summary. Counters are plain
 * atomics so per-field updates are linearizable; the error list is the only
 * field behind a lock.
 */

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

/// Monotonically increasing counters for one translation run
#[derive(Debug, Default)]
pub struct RunStats {
    total_files: AtomicU64,
    translated_files: AtomicU64,
    skipped_files: AtomicU64,
    error_files: AtomicU64,

    input_chars: AtomicU64,
    output_chars: AtomicU64,
    words: AtomicU64,
    backend_time_ms: AtomicU64,
    cache_hits: AtomicU64,

    errors: Mutex<Vec<String>>,
}

/// Point-in-time copy of the counters, used for the end-of-run summary
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub total_files: u64,
    pub translated_files: u64,
    pub skipped_files: u64,
    pub error_files: u64,
    pub input_chars: u64,
    pub output_chars: u64,
    pub words: u64,
    pub backend_time: Duration,
    pub cache_hits: u64,
    pub errors: Vec<String>,
}

impl RunStats {
    /// Create a fresh statistics block
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file seen by the coordinator
    pub fn add_file_seen(&self) {
        self.total_files.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a fully translated file
    pub fn add_file_translated(&self) {
        self.translated_files.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a file skipped (already present at destination, or copied as-is)
    pub fn add_file_skipped(&self) {
        self.skipped_files.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed file together with its human-readable message
    pub fn add_file_error(&self, message: impl Into<String>) {
        self.error_files.fetch_add(1, Ordering::Relaxed);
        self.errors.lock().push(message.into());
    }

    /// Record one successful backend call for a payload
    pub fn add_backend_call(&self, input_chars: usize, output_chars: usize, words: usize, elapsed: Duration) {
        self.input_chars.fetch_add(input_chars as u64, Ordering::Relaxed);
        self.output_chars.fetch_add(output_chars as u64, Ordering::Relaxed);
        self.words.fetch_add(words as u64, Ordering::Relaxed);
        self.backend_time_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a translation served from the cache
    pub fn add_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a consistent-enough copy of all counters for reporting
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_files: self.total_files.load(Ordering::Relaxed),
            translated_files: self.translated_files.load(Ordering::Relaxed),
            skipped_files: self.skipped_files.load(Ordering::Relaxed),
            error_files: self.error_files.load(Ordering::Relaxed),
            input_chars: self.input_chars.load(Ordering::Relaxed),
            output_chars: self.output_chars.load(Ordering::Relaxed),
            words: self.words.load(Ordering::Relaxed),
            backend_time: Duration::from_millis(self.backend_time_ms.load(Ordering::Relaxed)),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            errors: self.errors.lock().clone(),
        }
    }
}

impl StatsSnapshot {
    /// Words per second of backend time, guarding against a zero duration
    pub fn words_per_second(&self) -> f64 {
        let secs = self.backend_time.as_secs_f64().max(1e-9);
        self.words as f64 / secs
    }
}
