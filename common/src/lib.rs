//! TCG Renamer Common Library
//!
//! CLIから利用される純粋ロジック（I/Oなし）:
//! プロンプト、リクエスト型、レスポンスパーサー、ファイル名サニタイズ

pub mod error;
pub mod parser;
pub mod prompts;
pub mod request;
pub mod sanitize;
pub mod types;

pub use error::{Error, Result};
pub use parser::{extract_content, parse_identification, strip_code_fence};
pub use prompts::{SYSTEM_PROMPT, USER_PROMPT};
pub use request::{ChatMessage, ChatRequest, ContentPart, ImageUrl, MessageContent};
pub use sanitize::sanitize_filename;
pub use types::CardIdentification;
