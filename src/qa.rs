/*!
 * Post-translation quality checks.
 *
 * Cheap heuristics run after a file is translated: a structural check
 * comparing source and output skeletons, and a scan for model chatter that
 * should never appear in a translation. Failures are reported, not fatal.
 */

use crate::scanner::skeleton;

/// Substrings that indicate the model answered with commentary instead of a
/// translation.
const BANNED_SUBSTRINGS: [&str; 6] = [
    "Key improvements",
    "The code now",
    "Error generating text",
    "In this example",
    "Below is",
    "As an AI",
];

/// True when the translated text has exactly the source's code skeleton.
///
/// A mismatch means a translated payload introduced or destroyed delimiters
/// (for example a `*/` inside a block comment) and the file needs review.
pub fn structure_preserved(source: &str, translated: &str) -> bool {
    skeleton(source) == skeleton(translated)
}

/// Banned tokens found in the translated text, in scan order
pub fn find_banned_tokens(translated: &str) -> Vec<&'static str> {
    BANNED_SUBSTRINGS
        .iter()
        .copied()
        .filter(|token| translated.contains(token))
        .collect()
}
