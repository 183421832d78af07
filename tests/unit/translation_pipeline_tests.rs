/*!
 * Unit tests for the payload pipeline: cache reuse, filter short-circuit,
 * placeholder protection, statistics, and glossary output
 */

use std::sync::Arc;

use srclate::glossary::GlossaryWriter;
use srclate::providers::mock::MockBackend;
use srclate::stats::RunStats;
use srclate::translation::PayloadTranslator;

use crate::common;

fn translator_with(backend: MockBackend, stats: Arc<RunStats>) -> PayloadTranslator {
    PayloadTranslator::new(Arc::new(backend), stats, None, "ru", "en")
}

#[tokio::test]
async fn test_translatePayload_withRepeatedPayload_shouldHitBackendOnce() {
    let backend = MockBackend::working().with_mapping("Привет", "Hello");
    let probe = backend.clone();
    let stats = Arc::new(RunStats::new());
    let translator = translator_with(backend, Arc::clone(&stats));

    assert_eq!(translator.translate_payload("Привет").await.unwrap(), "Hello");
    assert_eq!(translator.translate_payload("Привет").await.unwrap(), "Hello");
    assert_eq!(probe.call_count(), 1);
    assert_eq!(stats.snapshot().cache_hits, 1);
}

#[tokio::test]
async fn test_translatePayload_withFilteredPayload_shouldReturnItUnchanged() {
    let backend = MockBackend::working();
    let probe = backend.clone();
    let stats = Arc::new(RunStats::new());
    let translator = translator_with(backend, stats);

    for payload in ["menu.file.open", "/etc/hosts", "   ", "UTF-8"] {
        assert_eq!(translator.translate_payload(payload).await.unwrap(), payload);
    }
    assert_eq!(probe.call_count(), 0);
}

#[tokio::test]
async fn test_translatePayload_withFilteredPayloadTwice_shouldServeIdentityFromCache() {
    let stats = Arc::new(RunStats::new());
    let translator = translator_with(MockBackend::working(), Arc::clone(&stats));

    assert_eq!(translator.translate_payload("user_name").await.unwrap(), "user_name");
    // The identity entry makes the second lookup a plain cache hit
    assert_eq!(translator.translate_payload("user_name").await.unwrap(), "user_name");
    assert_eq!(stats.snapshot().cache_hits, 1);
    assert_eq!(translator.cache().len(), 1);
}

#[tokio::test]
async fn test_translatePayload_withFormatSpecifiers_shouldRestoreThemVerbatim() {
    // The backend only ever sees the masked form of the payload
    let backend = MockBackend::working()
        .with_mapping("Сохранено __PH_0__ из __PH_1__", "Saved __PH_0__ of __PH_1__");
    let stats = Arc::new(RunStats::new());
    let translator = translator_with(backend, stats);

    let out = translator.translate_payload("Сохранено %d из %s").await.unwrap();
    assert_eq!(out, "Saved %d of %s");
}

#[tokio::test]
async fn test_translatePayload_withPaddedCommentText_shouldKeepEdgeWhitespace() {
    let backend = MockBackend::working().with_mapping(" точка входа", "entry point");
    let stats = Arc::new(RunStats::new());
    let translator = translator_with(backend, stats);

    let out = translator.translate_payload(" точка входа").await.unwrap();
    assert_eq!(out, " entry point");
}

#[tokio::test]
async fn test_translatePayload_withQuotedReply_shouldStripOneLayer() {
    let backend = MockBackend::working().with_mapping("Привет", "\"Hello\"");
    let stats = Arc::new(RunStats::new());
    let translator = translator_with(backend, stats);

    assert_eq!(translator.translate_payload("Привет").await.unwrap(), "Hello");
}

#[tokio::test]
async fn test_translatePayload_withBackendReply_shouldAccountCharsAndWords() {
    let backend = MockBackend::working().with_mapping("Привет, мир", "Hello there world");
    let stats = Arc::new(RunStats::new());
    let translator = translator_with(backend, Arc::clone(&stats));

    translator.translate_payload("Привет, мир").await.unwrap();

    let snap = stats.snapshot();
    assert_eq!(snap.input_chars, 11);
    assert_eq!(snap.output_chars, 17);
    assert_eq!(snap.words, 3);
}

#[tokio::test]
async fn test_translatePayload_withOverflowingBackend_shouldPropagateOverflow() {
    let stats = Arc::new(RunStats::new());
    let translator = translator_with(MockBackend::overflowing(), stats);

    let err = translator.translate_payload("Очень длинный текст").await.unwrap_err();
    assert!(err.is_context_overflow());
}

#[tokio::test]
async fn test_translatePayload_withGlossary_shouldRecordAcceptedPairsOnly() {
    let dir = common::create_temp_dir().unwrap();
    let glossary_path = dir.path().join("glossary.tsv");
    let glossary = Arc::new(GlossaryWriter::create(&glossary_path).unwrap());

    let backend = MockBackend::working().with_mapping("Привет", "Hello");
    let stats = Arc::new(RunStats::new());
    let translator =
        PayloadTranslator::new(Arc::new(backend), stats, Some(glossary), "ru", "en");

    translator.translate_payload("Привет").await.unwrap();
    // Filtered and cached payloads never reach the glossary
    translator.translate_payload("menu.file.open").await.unwrap();
    translator.translate_payload("Привет").await.unwrap();

    let content = std::fs::read_to_string(&glossary_path).unwrap();
    assert_eq!(content, "# original\ttranslation\nПривет\tHello\n");
}
