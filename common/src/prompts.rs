//! プロンプト定数
//!
//! システムプロンプトでJSON応答を要求し、ユーザープロンプトで
//! カード名とシリーズのみを返すよう指示する。

/// システムロール（ペルソナと応答形式）
pub const SYSTEM_PROMPT: &str =
    "You are a Pokemon trading card game expert that responds in JSON.";

/// ユーザー指示
pub const USER_PROMPT: &str =
    "Please identify this card. Only return the name of the card, and the series its from.";
