//! 画像エンコード
//!
//! ファイルを丸ごと読み込み、Base64に変換する。
//! MIMEタイプは先頭バイトから判定し、不明ならJPEG扱い。

use crate::error::{Result, TcgError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

const FALLBACK_MIME: &str = "image/jpeg";

#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub mime_type: String,
    pub base64: String,
}

impl EncodedImage {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            mime_type: detect_mime_type(bytes).to_string(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// `data:<mime>;base64,<data>` 形式
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

pub fn encode_image(path: &Path) -> Result<EncodedImage> {
    let bytes = std::fs::read(path).map_err(|source| TcgError::ReadImage {
        path: path.display().to_string(),
        source,
    })?;
    Ok(EncodedImage::from_bytes(&bytes))
}

fn detect_mime_type(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}
