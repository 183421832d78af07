/*!
 * Common test utilities for the srclate test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content, creating parent directories
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small Java source with one payload of every translatable kind
pub fn sample_java_source() -> &'static str {
    r#"package demo;

/** Сервис приветствия. */
public class Main {
    // точка входа
    public static void main(String[] args) {
        System.out.println("Привет, мир");
    }
}
"#
}

/// The same source after translating its three payloads to English
pub fn sample_java_translated() -> &'static str {
    r#"package demo;

/** Greeting service. */
public class Main {
    // entry point
    public static void main(String[] args) {
        System.out.println("Hello, world");
    }
}
"#
}
