//! APIレスポンスパーサー
//!
//! Chat Completions のエンベロープから content を取り出し、
//! モデルが返したJSON（name / series）をパースする

use crate::error::{Error, Result};
use crate::types::CardIdentification;
use serde_json::Value;

const FENCE: &str = "```";

/// エンベロープから `choices[0].message.content` を取得
///
/// フィールドが欠けているか文字列でない場合は `None`
pub fn extract_content(envelope: &Value) -> Option<&str> {
    envelope
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}

/// コードフェンスを除去（ベストエフォート）
///
/// 先頭の ```` ``` ````（`json` タグ付き可）と末尾の ```` ``` ```` を
/// それぞれ独立に取り除く。片方だけの場合もその片方だけ除去する。
///
/// # Examples
/// ```
/// use tcg_renamer_common::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
/// assert_eq!(strip_code_fence("{}"), "{}");
/// ```
pub fn strip_code_fence(content: &str) -> &str {
    let mut s = content.trim();

    if let Some(rest) = s.strip_prefix(FENCE) {
        s = rest;
        if s.get(..4).is_some_and(|tag| tag.eq_ignore_ascii_case("json")) {
            s = &s[4..];
        }
        s = s.trim_start();
    }

    if let Some(rest) = s.strip_suffix(FENCE) {
        s = rest.trim_end();
    }

    s
}

/// content文字列からカード識別結果をパース
///
/// まずそのままJSONとして解釈し、失敗した場合のみフェンス除去後に再試行する。
///
/// # Returns
/// * `Ok(CardIdentification)` - name と series が両方とも空でない
/// * `Err(Error::Json)` - フェンス除去後もJSONとして不正
/// * `Err(Error::Incomplete)` - JSONだが name / series が欠けている
pub fn parse_identification(content: &str) -> Result<CardIdentification> {
    let trimmed = content.trim();

    let value: Value = match serde_json::from_str(trimmed) {
        Ok(v) => v,
        Err(direct_err) => {
            let stripped = strip_code_fence(trimmed);
            if stripped.len() == trimmed.len() {
                return Err(Error::Json(direct_err));
            }
            serde_json::from_str(stripped)?
        }
    };

    let card = identification_from_value(&value);
    if card.is_complete() {
        Ok(card)
    } else {
        Err(Error::Incomplete)
    }
}

/// 文字列以外の値は空として扱う
fn identification_from_value(value: &Value) -> CardIdentification {
    let field = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    CardIdentification {
        name: field("name"),
        series: field("series"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =============================================
    // extract_content テスト
    // =============================================

    #[test]
    fn test_extract_content() {
        let envelope = json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "{\"name\": \"Pikachu\"}" } }
            ]
        });
        assert_eq!(extract_content(&envelope), Some("{\"name\": \"Pikachu\"}"));
    }

    #[test]
    fn test_extract_content_missing_choices() {
        let envelope = json!({ "error": { "message": "quota exceeded" } });
        assert_eq!(extract_content(&envelope), None);
    }

    #[test]
    fn test_extract_content_empty_choices() {
        let envelope = json!({ "choices": [] });
        assert_eq!(extract_content(&envelope), None);
    }

    #[test]
    fn test_extract_content_null_content() {
        let envelope = json!({ "choices": [ { "message": { "content": null } } ] });
        assert_eq!(extract_content(&envelope), None);
    }

    // =============================================
    // strip_code_fence テスト
    // =============================================

    #[test]
    fn test_strip_json_fence() {
        let content = "```json\n{\"name\": \"Mew\"}\n```";
        assert_eq!(strip_code_fence(content), "{\"name\": \"Mew\"}");
    }

    #[test]
    fn test_strip_plain_fence() {
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
    }

    #[test]
    fn test_strip_leading_fence_only() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_trailing_fence_only() {
        assert_eq!(strip_code_fence("{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_uppercase_tag() {
        assert_eq!(strip_code_fence("```JSON {} ```"), "{}");
    }

    #[test]
    fn test_strip_no_fence_unchanged() {
        assert_eq!(strip_code_fence("  plain text  "), "plain text");
    }

    // =============================================
    // parse_identification テスト
    // =============================================

    #[test]
    fn test_parse_raw_json() {
        let card = parse_identification(r#"{"name": "Pikachu", "series": "Base Set"}"#).unwrap();
        assert_eq!(card, CardIdentification::new("Pikachu", "Base Set"));
    }

    #[test]
    fn test_parse_fenced_json() {
        let content = "```json\n{\n  \"name\": \"Charizard\",\n  \"series\": \"XY\"\n}\n```";
        let card = parse_identification(content).unwrap();
        assert_eq!(card.name, "Charizard");
        assert_eq!(card.series, "XY");
    }

    #[test]
    fn test_parse_leading_fence_only() {
        let content = "```json\n{\"name\": \"Eevee\", \"series\": \"Jungle\"}";
        let card = parse_identification(content).unwrap();
        assert_eq!(card, CardIdentification::new("Eevee", "Jungle"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_identification("This card is Pikachu from Base Set.");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_invalid_json_inside_fence() {
        let result = parse_identification("```json\nname: Pikachu\n```");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_missing_series() {
        let result = parse_identification(r#"{"name": "Pikachu"}"#);
        assert!(matches!(result, Err(Error::Incomplete)));
    }

    #[test]
    fn test_parse_empty_name() {
        let result = parse_identification(r#"{"name": "", "series": "Base Set"}"#);
        assert!(matches!(result, Err(Error::Incomplete)));
    }

    #[test]
    fn test_parse_whitespace_only_name() {
        let result = parse_identification(r#"{"name": "   ", "series": "Base Set"}"#);
        assert!(matches!(result, Err(Error::Incomplete)));
    }

    #[test]
    fn test_parse_non_string_fields() {
        let result = parse_identification(r#"{"name": 25, "series": ["Base"]}"#);
        assert!(matches!(result, Err(Error::Incomplete)));
    }

    #[test]
    fn test_parse_array_is_incomplete() {
        let result = parse_identification(r#"[{"name": "Pikachu", "series": "Base Set"}]"#);
        assert!(matches!(result, Err(Error::Incomplete)));
    }

    #[test]
    fn test_parse_trims_values() {
        let card = parse_identification(r#"{"name": " Mew ", "series": "Promo\n"}"#).unwrap();
        assert_eq!(card, CardIdentification::new("Mew", "Promo"));
    }
}
