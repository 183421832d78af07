/*!
 * Translation pipeline for extracted source-code payloads.
 *
 * Submodules:
 * - `filter`: is-this-worth-translating heuristic
 * - `placeholders`: masking of format specifiers and escapes
 * - `prompts`: system/user prompt builders
 * - `cache`: process-lifetime translation cache
 * - `translator`: the per-payload pipeline tying it all together
 */

// Re-export main types for easier usage
pub use self::cache::TranslationCache;
pub use self::filter::is_worth_translating;
pub use self::translator::PayloadTranslator;

// Submodules
pub mod cache;
pub mod filter;
pub mod placeholders;
pub mod prompts;
pub mod translator;
