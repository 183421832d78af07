/*!
 * Payload filter deciding whether a piece of extracted text is worth
 * sending to the backend.
 *
 * This is a heuristic boundary, not a grammar: false positives and false
 * negatives are acceptable. The only hard guarantee is determinism, so the
 * cache and the tests stay stable.
 */

/// True when the payload looks like human-visible text worth translating.
///
/// Rejects empty/whitespace-only payloads, identifier- or i18n-key-like
/// tokens, and path-like tokens. Everything else, including single words,
/// is accepted.
pub fn is_worth_translating(payload: &str) -> bool {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return false;
    }
    if is_identifier_like(trimmed) {
        return false;
    }
    if is_path_like(trimmed) {
        return false;
    }
    true
}

/// Token made only of ASCII alphanumerics and `.`/`_`/`-`, with no spaces.
///
/// Matches property keys, enum constants, i18n keys like `menu.file.open`.
fn is_identifier_like(token: &str) -> bool {
    if token.contains(' ') {
        return false;
    }
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Token containing a slash or backslash and no spaces, e.g. a file path
/// or a URL fragment.
fn is_path_like(token: &str) -> bool {
    (token.contains('/') || token.contains('\\')) && !token.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_withEmptyOrWhitespace_shouldReject() {
        assert!(!is_worth_translating(""));
        assert!(!is_worth_translating("   "));
        assert!(!is_worth_translating("\t\n"));
    }

    #[test]
    fn test_filter_withIdentifierLikeTokens_shouldReject() {
        assert!(!is_worth_translating("user_name"));
        assert!(!is_worth_translating("menu.file.open"));
        assert!(!is_worth_translating("some-config-key"));
        assert!(!is_worth_translating("UTF-8"));
        assert!(!is_worth_translating("42"));
    }

    #[test]
    fn test_filter_withPathLikeTokens_shouldReject() {
        assert!(!is_worth_translating("/etc/hosts"));
        assert!(!is_worth_translating("C:\\Users\\admin"));
        assert!(!is_worth_translating("http://localhost:8080/api"));
    }

    #[test]
    fn test_filter_withSentences_shouldAccept() {
        assert!(is_worth_translating("Hello, world!"));
        assert!(is_worth_translating("Не удалось сохранить файл"));
        assert!(is_worth_translating("Saved to / restored from disk"));
    }

    #[test]
    fn test_filter_withSingleHumanWord_shouldAccept() {
        // A lone word like "Ошибка" is still human-facing text
        assert!(is_worth_translating("Ошибка"));
        assert!(is_worth_translating("Done."));
    }

    #[test]
    fn test_filter_withSameInputTwice_shouldBeDeterministic() {
        for payload in ["Hello", "a.b.c", "/tmp/x", "  ", "Привет, мир"] {
            assert_eq!(is_worth_translating(payload), is_worth_translating(payload));
        }
    }
}
