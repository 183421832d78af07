/*!
 * Prompt builders for source-code translation.
 *
 * The prompts are deliberately strict and dry: the model must return only
 * the translation, preserve escapes and placeholder tokens, and never touch
 * code syntax.
 */

use crate::language_utils;

/// Human-readable language name for a code, falling back to the code itself
fn language_name(code: &str) -> String {
    language_utils::get_language_name(code).unwrap_or_else(|_| code.to_string())
}

/// System prompt shared by every payload request in a run
pub fn system_prompt(source_language: &str, target_language: &str) -> String {
    let src = language_name(source_language);
    let tgt = language_name(target_language);
    format!(
        "ROLE:\n\
         You are a strict technical translator for source code.\n\
         Task: Translate text from {src} to {tgt}.\n\n\
         RULES:\n\
         1. Answer ONLY with the translation - NOTHING ELSE.\n\
         2. NO explanations, NO comments, NO repetition of the source.\n\
         3. PRESERVE all backslashes and escape sequences exactly.\n\
         4. PRESERVE formatting, line breaks and indentation.\n\
         5. PRESERVE tokens of the form __PH_0__, __PH_1__ exactly as written.\n\
         6. Do NOT change code syntax, only natural-language text.\n"
    )
}

/// User prompt wrapping one (already masked) payload
pub fn user_prompt(payload: &str, source_language: &str, target_language: &str) -> String {
    let src = language_name(source_language);
    let tgt = language_name(target_language);
    format!(
        "Translate the following string from {src} to {tgt}. \
         Return ONLY the translated string, without quotes, comments or explanations. \
         Do not add any extra sentences, just a direct translation:\n\n{payload}"
    )
}
