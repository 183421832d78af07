/*!
 * Application configuration management.
 *
 * Configuration lives in a JSON file (`conf.json` by default); a default
 * one is created on first run. CLI flags override individual fields after
 * loading.
 */

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::language_utils;

/// Which backend transport translates payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// llama.cpp server with OpenAI-compatible chat completions
    #[default]
    LlamaCpp,
    /// Ollama generate endpoint
    Ollama,
}

impl TranslationProvider {
    /// Lowercase identifier used in config files and logs
    pub fn to_lowercase_string(&self) -> &'static str {
        match self {
            Self::LlamaCpp => "llamacpp",
            Self::Ollama => "ollama",
        }
    }
}

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Connection settings for one backend transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Matches `TranslationProvider::to_lowercase_string`
    pub provider_type: String,
    /// Full request URL for the transport
    pub endpoint: String,
    /// Model name, alias, or tag
    pub model: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Extra model options passed through verbatim (Ollama only)
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Translation backend selection plus per-provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Active provider
    pub provider: TranslationProvider,
    /// Settings for every known provider; the active one is looked up here
    pub available_providers: Vec<ProviderConfig>,
}

impl TranslationConfig {
    /// Settings of the currently selected provider
    pub fn active_provider_config(&self) -> Result<&ProviderConfig> {
        let wanted = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == wanted)
            .ok_or_else(|| anyhow!("No configuration found for provider '{}'", wanted))
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source language code (e.g. `ru`)
    pub source_language: String,
    /// Target language code (e.g. `en`)
    pub target_language: String,
    /// Number of parallel file workers
    pub workers: usize,
    /// Logging verbosity
    #[serde(default)]
    pub log_level: LogLevel,
    /// Backend settings
    pub translation: TranslationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: "ru".to_string(),
            target_language: "en".to_string(),
            workers: 4,
            log_level: LogLevel::Info,
            translation: TranslationConfig {
                provider: TranslationProvider::LlamaCpp,
                available_providers: vec![
                    ProviderConfig {
                        provider_type: "llamacpp".to_string(),
                        endpoint: "http://localhost:8080/v1/chat/completions".to_string(),
                        model: "gemma-3-4b-it".to_string(),
                        timeout_secs: 600,
                        options: Map::new(),
                    },
                    ProviderConfig {
                        provider_type: "ollama".to_string(),
                        endpoint: "http://localhost:11434/api/generate".to_string(),
                        model: "llama3.2:3b".to_string(),
                        timeout_secs: 600,
                        options: Map::new(),
                    },
                ],
            },
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to open config file: {:?}", path.as_ref()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }

    /// Write configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Check the configuration is usable before starting a run
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_code(&self.source_language)
            .context("Invalid source language")?;
        language_utils::validate_language_code(&self.target_language)
            .context("Invalid target language")?;

        if self.source_language.eq_ignore_ascii_case(&self.target_language) {
            return Err(anyhow!("Source and target languages must differ"));
        }
        if self.workers == 0 {
            return Err(anyhow!("workers must be at least 1"));
        }

        let provider = self.translation.active_provider_config()?;
        if provider.endpoint.is_empty() {
            return Err(anyhow!("Provider endpoint must not be empty"));
        }
        if provider.model.is_empty() {
            return Err(anyhow!("Provider model must not be empty"));
        }
        if provider.timeout_secs == 0 {
            return Err(anyhow!("Provider timeout must be at least 1 second"));
        }

        Ok(())
    }
}
