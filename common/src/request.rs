//! Chat Completions リクエスト型
//!
//! OpenAI互換エンドポイントに送るJSONボディ:
//! `{ model, messages: [system, user(text + image_url)], max_tokens }`

use crate::prompts::{SYSTEM_PROMPT, USER_PROMPT};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

/// テキストのみ、またはパーツ配列
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ChatRequest {
    /// カード識別リクエストを構築
    ///
    /// # Arguments
    /// * `model` - モデル識別子（例: "gpt-4o"）
    /// * `max_tokens` - 出力トークン上限
    /// * `image_data_url` - `data:image/jpeg;base64,...` 形式の画像
    pub fn card_identification(model: &str, max_tokens: u32, image_data_url: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: MessageContent::Text(SYSTEM_PROMPT.into()),
                },
                ChatMessage {
                    role: "user".into(),
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: USER_PROMPT.into(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl { url: image_data_url },
                        },
                    ]),
                },
            ],
            max_tokens,
        }
    }
}
