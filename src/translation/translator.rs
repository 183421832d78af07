/*!
 * Per-payload translation pipeline.
 *
 * One `PayloadTranslator` is shared by every worker in a run. For each
 * payload it consults the cache, applies the worth-translating filter,
 * masks placeholders, calls the backend, post-processes the reply, and
 * accounts the call in the run statistics and the glossary.
 */

use std::sync::Arc;

use log::warn;

use crate::errors::TranslationError;
use crate::glossary::GlossaryWriter;
use crate::providers::TranslationBackend;
use crate::stats::RunStats;
use crate::translation::cache::TranslationCache;
use crate::translation::{filter, placeholders, prompts};

/// Orchestrates cache, filter, backend, statistics, and glossary for one
/// payload at a time
pub struct PayloadTranslator {
    backend: Arc<dyn TranslationBackend>,
    cache: TranslationCache,
    stats: Arc<RunStats>,
    glossary: Option<Arc<GlossaryWriter>>,
    system_prompt: String,
    source_language: String,
    target_language: String,
}

impl PayloadTranslator {
    /// Create a translator for one run's language pair
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        stats: Arc<RunStats>,
        glossary: Option<Arc<GlossaryWriter>>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        let source_language = source_language.into();
        let target_language = target_language.into();
        Self {
            backend,
            cache: TranslationCache::new(),
            stats,
            glossary,
            system_prompt: prompts::system_prompt(&source_language, &target_language),
            source_language,
            target_language,
        }
    }

    /// The shared cache, exposed for end-of-run reporting
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Translate a single payload.
    ///
    /// Unchanged output is only ever the deliberate result of a cache hit or
    /// a filter rejection; a backend failure propagates instead of falling
    /// back to identity.
    pub async fn translate_payload(&self, payload: &str) -> Result<String, TranslationError> {
        if let Some(cached) = self.cache.get(payload) {
            self.stats.add_cache_hit();
            return Ok(cached);
        }

        if !filter::is_worth_translating(payload) {
            // Identity entry keeps repeated runs over the same content
            // idempotent without a backend call.
            self.cache.store(payload, payload);
            return Ok(payload.to_string());
        }

        let (masked, mapping) = placeholders::mask(payload);
        let user_prompt = prompts::user_prompt(&masked, &self.source_language, &self.target_language);
        let reply = self.backend.translate(&self.system_prompt, &user_prompt).await?;

        self.stats.add_backend_call(
            payload.chars().count(),
            reply.text.chars().count(),
            reply.text.split_whitespace().count(),
            reply.elapsed,
        );

        // Models tend to trim and sometimes quote their answer. Strip one
        // wrapping layer, then re-attach the payload's own edge whitespace so
        // comment padding survives and an echoed payload reassembles
        // byte-identically.
        let core = placeholders::unmask(&strip_wrapping_quotes(&reply.text), &mapping);
        let leading = &payload[..payload.len() - payload.trim_start().len()];
        let trailing = &payload[payload.trim_end().len()..];
        let translated = format!("{leading}{core}{trailing}");

        self.cache.store(payload, &translated);
        if let Some(glossary) = &self.glossary {
            // The glossary is advisory output; a failed append is logged and
            // must not fail the payload.
            if let Err(e) = glossary.append(payload, &translated) {
                warn!("Glossary append failed: {}", e);
            }
        }

        Ok(translated)
    }
}

/// Trim one layer of quotes the model sometimes wraps its answer in.
///
/// Only a matching pair on both ends is removed, and only once.
fn strip_wrapping_quotes(text: &str) -> String {
    let trimmed = text.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].trim().to_string();
        }
    }
    trimmed.to_string()
}
