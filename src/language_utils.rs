use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Provides validation and name lookup for the ISO 639-1 (2-letter) and
/// ISO 639-3 (3-letter) codes the prompts and the CLI accept.

/// Validate that a code is a known ISO 639-1 or ISO 639-3 language code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized = code.trim().to_lowercase();

    let known = match normalized.len() {
        2 => Language::from_639_1(&normalized).is_some(),
        3 => Language::from_639_3(&normalized).is_some(),
        _ => false,
    };

    if known {
        Ok(())
    } else {
        Err(anyhow!("Invalid language code: {}", code))
    }
}

/// English name of the language behind a code, e.g. `ru` -> `Russian`
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    let lang = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}
