//! 設定ファイル読み込み
//!
//! `key = value` 形式のプレーンテキスト。`api_key` は必須、
//! `model` / `endpoint` / `max_tokens` は任意。

use crate::error::{Result, TcgError};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "tcg.cfg";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MAX_TOKENS: u32 = 300;

const API_KEY: &str = "api_key";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub max_tokens: u32,
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// ファイルが無い場合は `ConfigNotFound`、`api_key` 行が無い場合は `MissingApiKey`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TcgError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            TcgError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// 設定テキストをパース（`source` はエラーメッセージ用）
    pub fn parse(content: &str, source: &str) -> Result<Self> {
        let mut api_key = None;
        let mut model = None;
        let mut endpoint = None;
        let mut max_tokens = None;

        for (key, value) in content.lines().filter_map(split_entry) {
            match key {
                API_KEY => {
                    // 最初に見つかった行を採用
                    if api_key.is_none() {
                        api_key = Some(value);
                    }
                }
                "model" => model = Some(value),
                "endpoint" => endpoint = Some(value),
                "max_tokens" => {
                    let parsed = value.parse::<u32>().map_err(|_| {
                        TcgError::Config(format!("max_tokens must be a positive integer, got '{}'", value))
                    })?;
                    max_tokens = Some(parsed);
                }
                _ => {}
            }
        }

        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| TcgError::MissingApiKey(source.to_string()))?;

        Ok(Self {
            api_key: api_key.to_string(),
            model: model.filter(|m| !m.is_empty()).unwrap_or(DEFAULT_MODEL).to_string(),
            endpoint: endpoint.filter(|e| !e.is_empty()).unwrap_or(DEFAULT_ENDPOINT).to_string(),
            max_tokens: max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        })
    }

    /// CLIで指定された値で上書き
    pub fn with_overrides(
        mut self,
        model: Option<String>,
        endpoint: Option<String>,
        max_tokens: Option<u32>,
    ) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(max_tokens) = max_tokens {
            self.max_tokens = max_tokens;
        }
        self
    }
}

/// `key = value` 行を分解。コメント行と `=` の無い行は無視
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}
