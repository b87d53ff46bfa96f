//! 推論APIクライアント
//!
//! 1画像につき1回だけPOSTする（リトライ・タイムアウト指定なし）。
//! ステータスとボディをそのまま返し、解釈は `identify` 側で行う。

use crate::config::Config;
use crate::error::{Result, TcgError};
use tcg_renamer_common::ChatRequest;

/// HTTPレスポンスの生データ
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// リクエスト送信の抽象（テストではスクリプト化したバックエンドに差し替える）
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<RawResponse>;
}

/// OpenAI互換 Chat Completions クライアント
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl ChatBackend for OpenAiClient {
    async fn send(&self, request: &ChatRequest) -> Result<RawResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| TcgError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TcgError::Request(format!("レスポンス読み込みエラー: {}", e)))?;

        Ok(RawResponse { status, body })
    }
}
