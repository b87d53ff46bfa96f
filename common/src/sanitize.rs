//! ファイル名サニタイズ

use regex::Regex;

lazy_static::lazy_static! {
    /// 許可文字: 英数字・空白・ハイフン・アンダースコア・ピリオド
    static ref DISALLOWED_RE: Regex = Regex::new(r"[^a-zA-Z0-9 \-_.]").unwrap();
}

/// ファイル名として安全な文字列に変換
///
/// `&` を `and` に置換した後、許可文字以外をすべて `_` に置換する。
///
/// # Examples
/// ```
/// use tcg_renamer_common::sanitize_filename;
///
/// assert_eq!(
///     sanitize_filename("Charizard & Friends - XY.jpg"),
///     "Charizard and Friends - XY.jpg"
/// );
/// ```
pub fn sanitize_filename(filename: &str) -> String {
    let replaced = filename.replace('&', "and");
    DISALLOWED_RE.replace_all(&replaced, "_").into_owned()
}
