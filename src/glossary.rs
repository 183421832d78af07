/*!
 * Append-only glossary sink.
 *
 * Every accepted translation is persisted as one tab-separated
 * `original<TAB>translated` line for later human curation. The file is never
 * read back by the running process, and a failed append must not break the
 * translation pipeline.
 */

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::Mutex;

const GLOSSARY_HEADER: &str = "# original\ttranslation\n";

/// Line-oriented TSV writer shared by all workers
pub struct GlossaryWriter {
    path: PathBuf,
    file: Mutex<File>,
}

impl GlossaryWriter {
    /// Open (or create) the glossary file, writing the header when new
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create glossary directory: {:?}", parent))?;
        }

        let is_new = !path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open glossary file: {:?}", path))?;
        if is_new {
            file.write_all(GLOSSARY_HEADER.as_bytes())
                .with_context(|| format!("Failed to write glossary header: {:?}", path))?;
        }

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Append one (original, translated) pair as a single line.
    ///
    /// Embedded newlines are escaped so each record stays on one line.
    pub fn append(&self, original: &str, translated: &str) -> Result<()> {
        let line = format!("{}\t{}\n", escape_field(original), escape_field(translated));
        let mut file = self.file.lock();
        file.write_all(line.as_bytes())
            .with_context(|| format!("Failed to append to glossary file: {:?}", self.path))?;
        Ok(())
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn escape_field(text: &str) -> String {
    text.replace('\n', "\\n").replace('\r', "\\r").replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_withNewFile_shouldWriteHeaderOnce() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("glossary.tsv");

        {
            let writer = GlossaryWriter::create(&path).unwrap();
            writer.append("Привет", "Hello").unwrap();
        }
        {
            let writer = GlossaryWriter::create(&path).unwrap();
            writer.append("Мир", "World").unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "# original\ttranslation\nПривет\tHello\nМир\tWorld\n"
        );
    }

    #[test]
    fn test_append_withMultilinePayload_shouldKeepOneRecordPerLine() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("glossary.tsv");
        let writer = GlossaryWriter::create(&path).unwrap();
        writer.append("line one\nline two", "ligne un\nligne deux").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<&str> = content.lines().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], "line one\\nline two\tligne un\\nligne deux");
    }
}
