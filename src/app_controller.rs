use anyhow::{anyhow, Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::{Config, TranslationProvider};
use crate::file_utils::FileManager;
use crate::glossary::GlossaryWriter;
use crate::providers::llama_cpp::LlamaCpp;
use crate::providers::ollama::Ollama;
use crate::providers::TranslationBackend;
use crate::qa;
use crate::stats::{RunStats, StatsSnapshot};
use crate::transform;
use crate::translation::PayloadTranslator;

// @module: Application controller for project translation

/// Directory under the output root holding run logs and the glossary
const LOG_DIR_NAME: &str = "_translation_logs";

/// File extensions routed through the zone scanner; everything else is
/// copied verbatim.
const TRANSLATABLE_EXTENSIONS: [&str; 1] = ["java"];

/// Main application controller driving one translation run
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Build the backend transport selected by the configuration
    fn build_backend(&self) -> Result<Arc<dyn TranslationBackend>> {
        let provider = self.config.translation.active_provider_config()?;
        let timeout = Duration::from_secs(provider.timeout_secs);
        let backend: Arc<dyn TranslationBackend> = match self.config.translation.provider {
            TranslationProvider::LlamaCpp => {
                Arc::new(LlamaCpp::new(&provider.endpoint, &provider.model, timeout))
            }
            TranslationProvider::Ollama => Arc::new(
                Ollama::new(&provider.endpoint, &provider.model, timeout)
                    .with_options(provider.options.clone()),
            ),
        };
        Ok(backend)
    }

    /// Translate a whole project directory into `output_dir`.
    ///
    /// Files are independent units of work: a failed file is recorded in the
    /// statistics and the run continues. Files already present at the
    /// destination are skipped, which makes an interrupted run resumable.
    pub async fn run(&self, input_dir: PathBuf, output_dir: PathBuf) -> Result<StatsSnapshot> {
        let backend = self.build_backend()?;
        self.run_with_backend(input_dir, output_dir, backend).await
    }

    /// Like [`run`](Self::run), but with an explicit backend transport
    pub async fn run_with_backend(
        &self,
        input_dir: PathBuf,
        output_dir: PathBuf,
        backend: Arc<dyn TranslationBackend>,
    ) -> Result<StatsSnapshot> {
        let started = std::time::Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }
        FileManager::ensure_dir(&output_dir)?;

        let provider_config = self.config.translation.active_provider_config()?;
        info!("Input:   {:?}", input_dir);
        info!("Output:  {:?}", output_dir);
        info!(
            "Backend: {} ({})",
            self.config.translation.provider.to_lowercase_string(),
            provider_config.endpoint
        );
        info!("Model:   {}", provider_config.model);
        info!("Workers: {}", self.config.workers);
        info!(
            "Lang:    {} -> {}",
            self.config.source_language, self.config.target_language
        );

        if let Err(e) = backend.test_connection().await {
            // The run proceeds; individual files will fail with the real error
            warn!("Backend connection test failed: {}", e);
        }

        let log_dir = output_dir.join(LOG_DIR_NAME);
        let glossary = GlossaryWriter::create(log_dir.join("glossary_suggestions.tsv"))
            .context("Failed to open glossary sink")?;

        let stats = Arc::new(RunStats::new());
        let translator = Arc::new(PayloadTranslator::new(
            backend,
            Arc::clone(&stats),
            Some(Arc::new(glossary)),
            self.config.source_language.clone(),
            self.config.target_language.clone(),
        ));

        let files = FileManager::list_project_files(&input_dir)?;
        info!("Discovered {} files to process", files.len());

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let workers = self.config.workers.max(1);
        stream::iter(files)
            .map(|rel_path| {
                let input_dir = input_dir.clone();
                let output_dir = output_dir.clone();
                let translator = Arc::clone(&translator);
                let stats = Arc::clone(&stats);
                let progress = progress.clone();
                async move {
                    process_file(&input_dir, &output_dir, &rel_path, &translator, &stats).await;
                    progress.inc(1);
                }
            })
            .buffer_unordered(workers)
            .collect::<Vec<()>>()
            .await;
        progress.finish_and_clear();

        let snapshot = stats.snapshot();
        let (cache_hits, cache_misses, hit_rate) = translator.cache().stats();
        let wall_time = started.elapsed();

        info!("-------------- TRANSLATION SUMMARY --------------");
        info!("Total files:          {}", snapshot.total_files);
        info!("Translated files:     {}", snapshot.translated_files);
        info!("Skipped (copied/res): {}", snapshot.skipped_files);
        info!("Files with errors:    {}", snapshot.error_files);
        info!("Total input chars:    {}", snapshot.input_chars);
        info!("Total output chars:   {}", snapshot.output_chars);
        info!("Total words (approx): {}", snapshot.words);
        info!(
            "Cache:                {} hits / {} misses ({:.0}% hit rate)",
            cache_hits,
            cache_misses,
            hit_rate * 100.0
        );
        info!("Backend time (s):     {:.2}", snapshot.backend_time.as_secs_f64());
        info!("Wall time (s):        {:.2}", wall_time.as_secs_f64());
        info!("Throughput:           {:.2} words/sec (backend time)", snapshot.words_per_second());

        if !snapshot.errors.is_empty() {
            info!("Errors encountered:");
            for message in &snapshot.errors {
                info!("  {}", message);
            }
        }

        let log_file = log_dir.join("translation.log");
        let summary = format!(
            "run finished: {} files, {} translated, {} skipped, {} errors, {:.2}s wall time",
            snapshot.total_files,
            snapshot.translated_files,
            snapshot.skipped_files,
            snapshot.error_files,
            wall_time.as_secs_f64()
        );
        if let Err(e) = FileManager::append_to_log_file(&log_file, &summary) {
            warn!("Failed to append run summary to {:?}: {}", log_file, e);
        }

        Ok(snapshot)
    }
}

/// True if a file should be routed through the zone scanner
fn is_translatable_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            TRANSLATABLE_EXTENSIONS
                .iter()
                .any(|known| ext.to_string_lossy().eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Process one file end to end: resume check, translate or copy, record stats.
///
/// Never returns an error; failures are recorded so the run continues.
async fn process_file(
    input_dir: &Path,
    output_dir: &Path,
    rel_path: &Path,
    translator: &PayloadTranslator,
    stats: &RunStats,
) {
    let src_path = input_dir.join(rel_path);
    let dst_path = output_dir.join(rel_path);

    stats.add_file_seen();

    // Resume: a file already present at the destination is finished work
    if dst_path.exists() {
        debug!("Skipping already processed file: {:?}", rel_path);
        stats.add_file_skipped();
        return;
    }

    if !is_translatable_file(&src_path) {
        match FileManager::copy_file(&src_path, &dst_path) {
            Ok(()) => stats.add_file_skipped(),
            Err(e) => {
                let message = format!("Copy {:?}: {}", src_path, e);
                error!("{}", message);
                stats.add_file_error(message);
            }
        }
        return;
    }

    debug!("Translating: {:?}", rel_path);
    let text = match FileManager::read_to_string(&src_path) {
        Ok(text) => text,
        Err(e) => {
            let message = format!("Read {:?}: {}", src_path, e);
            error!("{}", message);
            stats.add_file_error(message);
            return;
        }
    };

    let translated = match transform::translate_source(&text, translator).await {
        Ok(translated) => translated,
        Err(e) => {
            let message = if e.is_context_overflow() {
                format!("Context overflow in {:?}: {}", rel_path, e)
            } else {
                format!("Translate {:?}: {}", rel_path, e)
            };
            error!("{}", message);
            stats.add_file_error(message);
            return;
        }
    };

    if !qa::structure_preserved(&text, &translated) {
        warn!("Structure check failed for {:?}; output needs review", rel_path);
    }
    let banned = qa::find_banned_tokens(&translated);
    if !banned.is_empty() {
        warn!("Model chatter detected in {:?}: {:?}", rel_path, banned);
    }

    match FileManager::write_to_file(&dst_path, &translated) {
        Ok(()) => stats.add_file_translated(),
        Err(e) => {
            let message = format!("Write {:?}: {}", dst_path, e);
            error!("{}", message);
            stats.add_file_error(message);
        }
    }
}
