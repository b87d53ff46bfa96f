use thiserror::Error;

#[derive(Error, Debug)]
pub enum TcgError {
    // ---- 起動時（致命的） ----
    #[error("Error: Configuration file '{0}' not found. Exiting...")]
    ConfigNotFound(String),

    #[error("Error: API key not found in '{0}'. Exiting...")]
    MissingApiKey(String),

    #[error("Error: Invalid configuration: {0}")]
    Config(String),

    #[error("Error: '{0}' folder not found. Exiting...")]
    FolderNotFound(String),

    #[error("No image files found in '{0}' folder. Exiting...")]
    NoFilesFound(String),

    #[error("Error: Cannot open log file '{path}': {source}")]
    LogOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ---- ファイル単位（継続可能） ----
    #[error("Failed to read '{path}': {source}")]
    ReadImage {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Unexpected response format: {0}")]
    UnexpectedFormat(String),

    #[error("Failed to decode the JSON response.")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to parse the response.")]
    Incomplete,
}

impl TcgError {
    /// 実行全体を中断すべきエラーか
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TcgError::ConfigNotFound(_)
                | TcgError::MissingApiKey(_)
                | TcgError::Config(_)
                | TcgError::FolderNotFound(_)
                | TcgError::NoFilesFound(_)
                | TcgError::LogOpen { .. }
        )
    }
}

impl From<tcg_renamer_common::Error> for TcgError {
    fn from(err: tcg_renamer_common::Error) -> Self {
        match err {
            tcg_renamer_common::Error::Json(e) => TcgError::Decode(e),
            tcg_renamer_common::Error::Incomplete => TcgError::Incomplete,
        }
    }
}

pub type Result<T> = std::result::Result<T, TcgError>;
