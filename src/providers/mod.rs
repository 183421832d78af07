/*!
 * Backend implementations for the translation capability.
 *
 * This module contains the transport clients the payload translator can
 * call into:
 * - `llama_cpp`: llama.cpp server with an OpenAI-compatible chat endpoint
 * - `ollama`: Ollama `/api/generate` endpoint
 * - `mock`: deterministic in-process backend for tests
 */

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::ProviderError;

/// Result of one successful backend call
#[derive(Debug, Clone)]
pub struct BackendReply {
    /// Raw text returned by the model
    pub text: String,
    /// Wall-clock duration of the HTTP round-trip
    pub elapsed: Duration,
}

/// The translation capability every transport must provide.
///
/// Exactly one method does the work; the pipeline never branches on which
/// concrete transport is behind the trait object.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Send one translation request and return the model output with latency
    async fn translate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<BackendReply, ProviderError>;

    /// Verify the backend is reachable
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod llama_cpp;
pub mod mock;
pub mod ollama;
