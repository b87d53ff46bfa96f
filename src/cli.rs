use crate::config::DEFAULT_CONFIG_FILE;
use crate::logger::DEFAULT_LOG_FILE;
use crate::pipeline::RunOptions;
use clap::Parser;
use dialoguer::Input;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "Import";

#[derive(Parser, Debug)]
#[command(name = "tcg-renamer")]
#[command(about = "トレーディングカード画像をAIで識別してリネーム", long_about = None)]
pub struct Cli {
    /// 設定ファイル（api_key = ...）
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// カード画像フォルダ
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// ログファイル（追記）
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// モデル（設定ファイルより優先）
    #[arg(long)]
    pub model: Option<String>,

    /// エンドポイントURL（設定ファイルより優先）
    #[arg(long)]
    pub endpoint: Option<String>,

    /// 最大出力トークン（設定ファイルより優先）
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// リネームせず結果だけ表示
    #[arg(long)]
    pub dry_run: bool,

    /// 終了前の「Enterで終了」を出さない
    #[arg(long)]
    pub no_pause: bool,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            config_path: self.config.clone(),
            input_dir: self.input.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            max_tokens: self.max_tokens,
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

/// Enterが押されるまで待つ（端末でない場合は何もしない）
pub fn pause_before_exit() {
    let _ = Input::<String>::new()
        .with_prompt("Press Enter to exit...")
        .allow_empty(true)
        .interact_text();
}
