/*!
 * Placeholder masking for translation payloads.
 *
 * Format specifiers, interpolation markers, and escape sequences are
 * replaced with opaque `__PH_i__` tokens before the backend call and
 * restored afterwards, so the model cannot reorder or corrupt them.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// %s, %d, %1$s, %02d and friends; {0}-style indices; ${var} interpolations;
// the escape sequences the model is most likely to mangle.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"%(\d+\$)?[0-9.\-+]*[sdfx]",
        r"|\{[0-9]+\}",
        r"|\$\{[^}]+\}",
        r#"|\\[ntr"']"#,
    ))
    .expect("placeholder pattern is valid")
});

/// Mapping from mask token back to the original placeholder text
pub type PlaceholderMap = Vec<(String, String)>;

/// Replace every placeholder with a `__PH_i__` token.
///
/// Returns the masked text and the mapping needed to undo the substitution.
pub fn mask(text: &str) -> (String, PlaceholderMap) {
    let mut mapping = PlaceholderMap::new();
    let masked = PLACEHOLDER_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        let token = format!("__PH_{}__", mapping.len());
        mapping.push((token.clone(), caps[0].to_string()));
        token
    });
    (masked.into_owned(), mapping)
}

/// Restore the original placeholders in the translated text
pub fn unmask(text: &str, mapping: &PlaceholderMap) -> String {
    let mut result = text.to_string();
    for (token, original) in mapping {
        result = result.replace(token.as_str(), original);
    }
    result
}
