/*!
 * End-to-end translation runs over a project directory with a mock backend
 */

use std::sync::Arc;

use srclate::app_config::Config;
use srclate::app_controller::Controller;
use srclate::providers::mock::MockBackend;
use tokio_test;

use crate::common;

fn controller() -> Controller {
    Controller::with_config(Config::default()).unwrap()
}

fn scripted_backend() -> MockBackend {
    MockBackend::working()
        .with_mapping(" Сервис приветствия. ", " Greeting service. ")
        .with_mapping(" точка входа", " entry point")
        .with_mapping("Привет, мир", "Hello, world")
}

#[tokio::test]
async fn test_run_withJavaAndPlainFiles_shouldTranslateAndCopy() {
    let input = common::create_temp_dir().unwrap();
    let output = common::create_temp_dir().unwrap();
    common::create_test_file(input.path(), "src/Main.java", common::sample_java_source()).unwrap();
    common::create_test_file(input.path(), "README.md", "# demo project\n").unwrap();

    let snapshot = controller()
        .run_with_backend(
            input.path().to_path_buf(),
            output.path().to_path_buf(),
            Arc::new(scripted_backend()),
        )
        .await
        .unwrap();

    assert_eq!(snapshot.total_files, 2);
    assert_eq!(snapshot.translated_files, 1);
    assert_eq!(snapshot.skipped_files, 1);
    assert_eq!(snapshot.error_files, 0);

    let translated = std::fs::read_to_string(output.path().join("src/Main.java")).unwrap();
    assert_eq!(translated, common::sample_java_translated());

    let copied = std::fs::read_to_string(output.path().join("README.md")).unwrap();
    assert_eq!(copied, "# demo project\n");
}

#[tokio::test]
async fn test_run_withAcceptedTranslations_shouldWriteGlossary() {
    let input = common::create_temp_dir().unwrap();
    let output = common::create_temp_dir().unwrap();
    common::create_test_file(input.path(), "Main.java", common::sample_java_source()).unwrap();

    controller()
        .run_with_backend(
            input.path().to_path_buf(),
            output.path().to_path_buf(),
            Arc::new(scripted_backend()),
        )
        .await
        .unwrap();

    let glossary_path = output
        .path()
        .join("_translation_logs")
        .join("glossary_suggestions.tsv");
    let content = std::fs::read_to_string(glossary_path).unwrap();
    assert!(content.starts_with("# original\ttranslation\n"));
    assert!(content.contains("Привет, мир\tHello, world"));
    assert_eq!(content.lines().count(), 4);
}

#[tokio::test]
async fn test_run_withExistingOutputs_shouldResumeWithoutBackendCalls() {
    let input = common::create_temp_dir().unwrap();
    let output = common::create_temp_dir().unwrap();
    common::create_test_file(input.path(), "Main.java", common::sample_java_source()).unwrap();
    common::create_test_file(input.path(), "notes.txt", "опубликовать позже\n").unwrap();

    controller()
        .run_with_backend(
            input.path().to_path_buf(),
            output.path().to_path_buf(),
            Arc::new(scripted_backend()),
        )
        .await
        .unwrap();

    let probe = MockBackend::working();
    let backend = probe.clone();
    let snapshot = controller()
        .run_with_backend(
            input.path().to_path_buf(),
            output.path().to_path_buf(),
            Arc::new(backend),
        )
        .await
        .unwrap();

    assert_eq!(snapshot.total_files, 2);
    assert_eq!(snapshot.skipped_files, 2);
    assert_eq!(snapshot.translated_files, 0);
    assert_eq!(probe.call_count(), 0);
}

#[tokio::test]
async fn test_run_withOneFailingFile_shouldRecordErrorAndContinue() {
    let input = common::create_temp_dir().unwrap();
    let output = common::create_temp_dir().unwrap();
    common::create_test_file(input.path(), "Ok.java", "x = \"Привет, мир\";\n").unwrap();
    common::create_test_file(input.path(), "Bad.java", "y = \"сбой при переводе\";\n").unwrap();

    let backend = MockBackend::working()
        .with_mapping("Привет, мир", "Hello, world")
        .with_failure_on("сбой");
    let snapshot = controller()
        .run_with_backend(
            input.path().to_path_buf(),
            output.path().to_path_buf(),
            Arc::new(backend),
        )
        .await
        .unwrap();

    assert_eq!(snapshot.total_files, 2);
    assert_eq!(snapshot.translated_files, 1);
    assert_eq!(snapshot.error_files, 1);
    assert_eq!(snapshot.errors.len(), 1);
    assert!(snapshot.errors[0].contains("Bad.java"));

    assert!(output.path().join("Ok.java").exists());
    // A failed file is never half-written; a rerun picks it up again
    assert!(!output.path().join("Bad.java").exists());
}

#[test]
fn test_run_withMissingInputDirectory_shouldFail() {
    let output = common::create_temp_dir().unwrap();
    let result = tokio_test::block_on(async {
        controller()
            .run_with_backend(
                std::path::PathBuf::from("/nonexistent/input/dir"),
                output.path().to_path_buf(),
                Arc::new(MockBackend::working()),
            )
            .await
    });
    assert!(result.is_err());
}
