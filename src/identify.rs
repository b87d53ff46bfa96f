//! レスポンス解釈
//!
//! ステータス → エンベロープ → content → name/series の順に検証する。

use crate::client::RawResponse;
use crate::error::{Result, TcgError};
use serde_json::Value;
use tcg_renamer_common::{extract_content, parse_identification, CardIdentification};

pub fn interpret_response(response: &RawResponse) -> Result<CardIdentification> {
    if response.status != 200 {
        return Err(TcgError::Status(response.status));
    }

    let envelope: Value = serde_json::from_str(&response.body)
        .map_err(|_| TcgError::UnexpectedFormat(response.body.clone()))?;

    let content = extract_content(&envelope)
        .ok_or_else(|| TcgError::UnexpectedFormat(envelope.to_string()))?;

    Ok(parse_identification(content)?)
}
