//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// name/series のどちらかが空
    #[error("Failed to parse the response.")]
    Incomplete,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
