//! リネーム処理パイプライン
//!
//! 設定読み込み → スキャン → 1ファイルずつ
//! エンコード → 送信 → 解釈 → リネーム。
//! 致命的エラーは `Result` で呼び出し元へ返し、ファイル単位のエラーはログに残して次へ進む。

use crate::client::ChatBackend;
use crate::config::Config;
use crate::encoder::encode_image;
use crate::error::{Result, TcgError};
use crate::identify::interpret_response;
use crate::logger::RunLog;
use crate::renamer::{rename_in_place, target_file_name, target_path};
use crate::scanner::{scan_non_empty, ImageFile};
use std::collections::HashSet;
use std::path::PathBuf;
use tcg_renamer_common::ChatRequest;

const PREVIEW_CHARS: usize = 300;

/// CLIから渡される実行オプション
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub input_dir: PathBuf,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub max_tokens: Option<u32>,
    pub dry_run: bool,
    pub verbose: bool,
}

/// 1ファイルの処理結果
#[derive(Debug)]
pub enum FileOutcome {
    Renamed { from: String, to: String },
    DryRun { from: String, to: String },
    /// 今回の実行で別ファイルのリネーム先として上書きされた
    AlreadyRenamed { file: String },
    Skipped(TcgError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub renamed: usize,
    pub would_rename: usize,
    pub skipped: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        self.processed += 1;
        match outcome {
            FileOutcome::Renamed { .. } => self.renamed += 1,
            FileOutcome::DryRun { .. } => self.would_rename += 1,
            FileOutcome::AlreadyRenamed { .. } | FileOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

/// 起動時チェック: 設定 → 入力フォルダの順で検証する
pub fn prepare(options: &RunOptions) -> Result<(Config, Vec<ImageFile>)> {
    let config = Config::load(&options.config_path)?.with_overrides(
        options.model.clone(),
        options.endpoint.clone(),
        options.max_tokens,
    );
    let files = scan_non_empty(&options.input_dir)?;
    Ok((config, files))
}

/// 設定読み込みから全ファイル処理までを実行
pub async fn run<B: ChatBackend>(
    options: &RunOptions,
    backend_for: impl FnOnce(&Config) -> B,
    log: &mut RunLog,
) -> Result<RunSummary> {
    let (config, files) = prepare(options)?;
    log.log(format!(
        "Found {} file(s) in '{}' (model: {})",
        files.len(),
        options.input_dir.display(),
        config.model
    ));

    let backend = backend_for(&config);
    let renamer = Renamer {
        config: &config,
        backend: &backend,
        dry_run: options.dry_run,
        verbose: options.verbose,
    };

    Ok(renamer.process_all(&files, log).await)
}

/// 1ファイルずつ順番に処理する
pub struct Renamer<'a, B> {
    pub config: &'a Config,
    pub backend: &'a B,
    pub dry_run: bool,
    pub verbose: bool,
}

impl<B: ChatBackend> Renamer<'_, B> {
    /// スキャン済みの一覧を順に処理する
    ///
    /// リネーム先のパスを記録し、一覧の後ろにある同名エントリ
    /// （中身は上書きした側のファイル）は再処理しない。
    pub async fn process_all(&self, files: &[ImageFile], log: &mut RunLog) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut rename_targets: HashSet<PathBuf> = HashSet::new();

        for file in files {
            let outcome = if rename_targets.contains(&file.path) {
                log.log(format!(
                    "Skipping '{}': already renamed in this run",
                    file.file_name
                ));
                FileOutcome::AlreadyRenamed {
                    file: file.file_name.clone(),
                }
            } else {
                self.process_file(file, log).await
            };

            if let FileOutcome::Renamed { to, .. } = &outcome {
                rename_targets.insert(target_path(&file.path, to));
            }
            summary.record(&outcome);
        }
        summary
    }

    pub async fn process_file(&self, file: &ImageFile, log: &mut RunLog) -> FileOutcome {
        match self.try_process_file(file, log).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log.log(e.to_string());
                FileOutcome::Skipped(e)
            }
        }
    }

    async fn try_process_file(&self, file: &ImageFile, log: &mut RunLog) -> Result<FileOutcome> {
        let image = encode_image(&file.path)?;

        let request =
            ChatRequest::card_identification(&self.config.model, self.config.max_tokens, image.data_url());

        log.log(format!("Submitting '{}' for review...", file.file_name));
        if self.verbose {
            log.log(format!("  {} ({} base64 chars)", image.mime_type, image.base64.len()));
        }

        let response = self.backend.send(&request).await?;

        if self.verbose {
            let preview: String = response.body.chars().take(PREVIEW_CHARS).collect();
            log.log(format!("  HTTP {}: {}", response.status, preview));
        }

        let card = interpret_response(&response)?;
        let new_name = target_file_name(&card);

        if self.dry_run {
            log.log(format!("Would rename '{}' to '{}'", file.file_name, new_name));
            return Ok(FileOutcome::DryRun {
                from: file.file_name.clone(),
                to: new_name,
            });
        }

        rename_in_place(&file.path, &new_name)?;
        log.log(format!("Renamed '{}' to '{}'", file.file_name, new_name));

        Ok(FileOutcome::Renamed {
            from: file.file_name.clone(),
            to: new_name,
        })
    }
}
