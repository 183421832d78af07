/*!
 * llama.cpp server client (OpenAI-compatible `/v1/chat/completions`).
 */

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{BackendReply, TranslationBackend};

// llama-server reports these markers in a 400 body when the prompt does not
// fit the loaded context window.
const CONTEXT_OVERFLOW_MARKERS: [&str; 2] = [
    "exceed_context_size_error",
    "exceeds the available context size",
];

/// Chat message object in the OpenAI wire shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

/// Chat completion request
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

/// Client for a llama.cpp server exposing chat completions
#[derive(Debug)]
pub struct LlamaCpp {
    /// Full chat completions URL, e.g. `http://localhost:8080/v1/chat/completions`
    endpoint: String,
    /// Model name or alias registered with llama-server
    model: String,
    client: Client,
}

impl LlamaCpp {
    /// Create a new client for the given endpoint and model alias
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    fn is_context_overflow(status: u16, body: &str) -> bool {
        status == 400 && CONTEXT_OVERFLOW_MARKERS.iter().any(|m| body.contains(m))
    }
}

#[async_trait]
impl TranslationBackend for LlamaCpp {
    async fn translate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<BackendReply, ProviderError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: 0.0,
        };

        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("llama.cpp request failed: {}", e)))?;
        let elapsed = started.elapsed();

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("llama.cpp response read failed: {}", e)))?;

        if Self::is_context_overflow(status.as_u16(), &body) {
            return Err(ProviderError::ContextOverflow(truncate(&body, 400)));
        }
        if !status.is_success() {
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: truncate(&body, 400),
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::ParseError(format!("unexpected llama.cpp response: {}", e)))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ProviderError::ParseError("llama.cpp response had no choices".to_string()))?;

        Ok(BackendReply {
            text: content,
            elapsed,
        })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let reply = self.translate("Reply with OK.", "ping").await?;
        if reply.text.trim().is_empty() {
            return Err(ProviderError::ParseError(
                "llama.cpp connection test returned empty output".to_string(),
            ));
        }
        Ok(())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
