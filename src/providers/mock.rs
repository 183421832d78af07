/*!
 * Mock backend implementations for testing.
 *
 * - `MockBackend::working()` - succeeds with a tagged translation
 * - `MockBackend::failing()` - always fails with an API error
 * - `MockBackend::overflowing()` - always reports a context overflow
 * - `with_mapping` / `with_custom_response` - scripted outputs
 */

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::errors::ProviderError;
use crate::providers::{BackendReply, TranslationBackend};

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Succeed, returning the mapped or tagged payload
    Working,
    /// Always fail with a 500 API error
    Failing,
    /// Always fail with a context overflow
    Overflowing,
}

/// In-process backend with scripted behavior for tests
#[derive(Debug)]
pub struct MockBackend {
    behavior: MockBehavior,
    /// Exact payload -> reply overrides (keyed by the user prompt suffix)
    mapping: Arc<RwLock<HashMap<String, String>>>,
    /// Total number of translate calls observed
    call_count: Arc<AtomicUsize>,
    custom_response: Option<fn(&str) -> String>,
    /// Payload substring that triggers a simulated API error
    fail_on: Option<String>,
    latency: Duration,
}

impl MockBackend {
    /// Create a mock with the given behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            mapping: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
            fail_on: None,
            latency: Duration::from_millis(1),
        }
    }

    /// A backend that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// A backend that always fails with an API error
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// A backend that always reports a context overflow
    pub fn overflowing() -> Self {
        Self::new(MockBehavior::Overflowing)
    }

    /// Script an exact payload -> translation pair
    pub fn with_mapping(self, payload: &str, translation: &str) -> Self {
        self.mapping
            .write()
            .insert(payload.to_string(), translation.to_string());
        self
    }

    /// Compute replies from the payload instead of the default tag
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Fail with an API error whenever the payload contains `marker`
    pub fn with_failure_on(mut self, marker: &str) -> Self {
        self.fail_on = Some(marker.to_string());
        self
    }

    /// Simulated backend latency reported in every reply
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of translate calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The payload is everything after the first blank line of the user
    /// prompt; the payload itself may contain blank lines.
    fn extract_payload(user_prompt: &str) -> &str {
        match user_prompt.split_once("\n\n") {
            Some((_, payload)) => payload,
            None => user_prompt,
        }
    }
}

impl Clone for MockBackend {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            mapping: Arc::clone(&self.mapping),
            call_count: Arc::clone(&self.call_count),
            custom_response: self.custom_response,
            fail_on: self.fail_on.clone(),
            latency: self.latency,
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<BackendReply, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                let payload = Self::extract_payload(user_prompt);
                if let Some(marker) = &self.fail_on {
                    if payload.contains(marker.as_str()) {
                        return Err(ProviderError::ApiError {
                            status_code: 500,
                            message: format!("Simulated failure on payload containing {:?}", marker),
                        });
                    }
                }
                let text = if let Some(mapped) = self.mapping.read().get(payload) {
                    mapped.clone()
                } else if let Some(generator) = self.custom_response {
                    generator(payload)
                } else {
                    format!("[TRANSLATED] {}", payload)
                };
                Ok(BackendReply {
                    text,
                    elapsed: self.latency,
                })
            }
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated backend failure".to_string(),
            }),
            MockBehavior::Overflowing => Err(ProviderError::ContextOverflow(
                "Simulated context overflow".to_string(),
            )),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
