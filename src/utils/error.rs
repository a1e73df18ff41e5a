use crate::domain::model::Payload;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request rejected with status {status}: {payload}")]
    Rejected { status: u16, payload: Payload },

    #[error("Response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FetchError {
    /// CLI 退出碼: 1 = 被拒絕, 2 = 傳輸/配置錯誤, 3 = 解碼錯誤
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchError::Rejected { .. } => 1,
            FetchError::Decode(_) => 3,
            _ => 2,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, FetchError::Rejected { .. })
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
