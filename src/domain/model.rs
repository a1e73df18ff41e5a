use serde::de::DeserializeOwned;
use std::fmt;

/// Transport output once the whole body has been received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decoded response body: structured JSON or the raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
}

impl Payload {
    /// 將 JSON payload 轉換為呼叫端指定的型別
    ///
    /// A text payload is treated as a JSON string value.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> serde_json::Result<T> {
        match self {
            Payload::Json(value) => serde_json::from_value(value),
            Payload::Text(text) => serde_json::from_value(serde_json::Value::String(text)),
        }
    }

    pub fn to_pretty_string(&self) -> String {
        match self {
            Payload::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Payload::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Json(value) => write!(f, "{}", value),
            Payload::Text(text) => f.write_str(text),
        }
    }
}
