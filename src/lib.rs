/*!
 * # srclate - source-code translation with a local LLM
 *
 * A Rust library and CLI that translates the human-readable text embedded in
 * source files (string literals, line/block/doc comments) while leaving all
 * code structure, identifiers, and char literals byte-for-byte unchanged.
 *
 * ## Features
 *
 * - Single-pass lexical zone scanner with a lossless-partition guarantee
 * - Pluggable translation backends:
 *   - llama.cpp server (OpenAI-compatible chat completions)
 *   - Ollama (`/api/generate`)
 * - Worth-translating filter for identifiers, keys, and paths
 * - Process-lifetime translation cache and placeholder masking
 * - Parallel per-file workers with resume-by-destination-check
 * - Append-only glossary of accepted translations
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `scanner`: lexical zone scanner (opaque vs translatable spans)
 * - `transform`: per-file reassembly around the payload translator
 * - `translation`: payload pipeline (filter, placeholders, prompts, cache)
 * - `providers`: backend transports behind the `TranslationBackend` trait
 * - `qa`: post-translation structure and chatter checks
 * - `stats`: shared run statistics
 * - `glossary`: append-only TSV sink
 * - `app_config`: configuration management
 * - `app_controller`: run coordinator (worker pool, resume, summary)
 * - `file_utils` / `language_utils`: support utilities
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod glossary;
pub mod language_utils;
pub mod providers;
pub mod qa;
pub mod scanner;
pub mod stats;
pub mod transform;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ProviderError, TranslationError};
pub use scanner::{skeleton, DelimiterKind, Zone, ZoneScanner};
pub use stats::{RunStats, StatsSnapshot};
pub use translation::{PayloadTranslator, TranslationCache};
