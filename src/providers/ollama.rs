/*!
 * Ollama client for the `/api/generate` endpoint.
 *
 * Unlike the chat transport, Ollama takes a single prompt string, so the
 * system and user prompts are folded into one annotated prompt.
 */

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ProviderError;
use crate::providers::{BackendReply, TranslationBackend};

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
struct GenerationRequest {
    model: String,
    prompt: String,
    options: Map<String, Value>,
    stream: bool,
}

/// Generate response from the Ollama API
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    response: String,
}

/// Client for an Ollama server
#[derive(Debug)]
pub struct Ollama {
    /// Full generate URL, e.g. `http://localhost:11434/api/generate`
    endpoint: String,
    /// Model tag, e.g. `llama3.2:3b`
    model: String,
    /// Extra model options merged over the defaults (temperature 0)
    options: Map<String, Value>,
    client: Client,
}

impl Ollama {
    /// Create a new client for the given endpoint and model tag
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            options: Map::new(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Merge extra Ollama options (e.g. `num_ctx`) into every request
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = options;
        self
    }

    fn build_prompt(system_prompt: &str, user_prompt: &str) -> String {
        format!("System:\n{system_prompt}\n\nUser:\n{user_prompt}\n\nAssistant:")
    }

    fn build_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert("temperature".to_string(), Value::from(0.0));
        for (key, value) in &self.options {
            options.insert(key.clone(), value.clone());
        }
        options
    }
}

#[async_trait]
impl TranslationBackend for Ollama {
    async fn translate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<BackendReply, ProviderError> {
        let request = GenerationRequest {
            model: self.model.clone(),
            prompt: Self::build_prompt(system_prompt, user_prompt),
            options: self.build_options(),
            stream: false,
        };

        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Ollama request failed: {}", e)))?;
        let elapsed = started.elapsed();

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Ollama response read failed: {}", e)))?;

        if !status.is_success() {
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: body.chars().take(400).collect(),
            });
        }

        let parsed: GenerationResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::ParseError(format!("unexpected Ollama response: {}", e)))?;

        Ok(BackendReply {
            text: parsed.response,
            elapsed,
        })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // /api/version is the cheapest liveness probe Ollama offers
        let version_url = self
            .endpoint
            .trim_end_matches("/api/generate")
            .to_string()
            + "/api/version";
        let response = self
            .client
            .get(&version_url)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Ollama unreachable: {}", e)))?;
        if !response.status().is_success() {
            return Err(ProviderError::ApiError {
                status_code: response.status().as_u16(),
                message: "Ollama version probe failed".to_string(),
            });
        }
        Ok(())
    }
}
