/*!
 * Whole-file transform: scanner output in, translated source out.
 *
 * Opaque zones are copied verbatim; translatable payloads go through the
 * payload translator and are re-wrapped with their original delimiter kind.
 * With an identity translator the output is byte-identical to the input.
 */

use crate::errors::TranslationError;
use crate::scanner::{Zone, ZoneScanner};
use crate::translation::PayloadTranslator;

/// Translate one source file's text.
///
/// Errors from the payload translator propagate to the caller; a partially
/// built output is discarded, never written.
pub async fn translate_source(
    text: &str,
    translator: &PayloadTranslator,
) -> Result<String, TranslationError> {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for zone in ZoneScanner::new(text) {
        match zone {
            Zone::Opaque(raw) => out.push_str(raw),
            Zone::Translatable { kind, payload, .. } => {
                let translated = translator.translate_payload(payload).await?;
                out.push_str(kind.opener());
                out.push_str(&translated);
                out.push_str(kind.closer());
            }
        }
    }
    Ok(out)
}
