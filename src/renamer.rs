//! 同一フォルダ内でのリネーム

use crate::error::{Result, TcgError};
use std::path::{Path, PathBuf};
use tcg_renamer_common::{sanitize_filename, CardIdentification};

/// 識別結果からサニタイズ済みファイル名を生成
pub fn target_file_name(card: &CardIdentification) -> String {
    sanitize_filename(&card.display_file_name())
}

/// 同じフォルダ内の新しいパス
pub fn target_path(original: &Path, new_file_name: &str) -> PathBuf {
    original
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(new_file_name)
}

/// ファイルをリネームし、新しいパスを返す
///
/// 移動先に同名ファイルがある場合の挙動はプラットフォーム依存（Unixでは上書き）
pub fn rename_in_place(original: &Path, new_file_name: &str) -> Result<PathBuf> {
    let new_path = target_path(original, new_file_name);
    std::fs::rename(original, &new_path).map_err(|source| TcgError::Rename {
        from: original.display().to_string(),
        to: new_file_name.to_string(),
        source,
    })?;
    Ok(new_path)
}
