//! 識別結果の型定義

use serde::Deserialize;

/// 新しいファイル名の拡張子（元ファイルの形式に関係なく固定）
pub const RENAMED_EXTENSION: &str = "jpg";

/// AIが返すカード識別結果
///
/// モデルの出力JSONに `name` / `series` が無い場合は空文字になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CardIdentification {
    pub name: String,
    pub series: String,
}

impl CardIdentification {
    pub fn new(name: impl Into<String>, series: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            series: series.into(),
        }
    }

    /// name と series が両方とも空でないか
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.series.is_empty()
    }

    /// サニタイズ前の表示用ファイル名 `"{name} - {series}.jpg"`
    pub fn display_file_name(&self) -> String {
        format!("{} - {}.{}", self.name, self.series, RENAMED_EXTENSION)
    }
}
