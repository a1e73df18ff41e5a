use crate::domain::model::{Payload, RawResponse};
use crate::utils::error::{FetchError, Result};

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Content-type sniffing: substring match, not a parsed media type.
pub fn is_json_content(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains(JSON_MEDIA_TYPE))
}

/// Decode a body according to its declared content type.
///
/// A malformed JSON body is returned as `FetchError::Decode`.
pub fn decode_body(content_type: Option<&str>, body: String) -> Result<Payload> {
    if is_json_content(content_type) {
        let value = serde_json::from_str(&body)?;
        Ok(Payload::Json(value))
    } else {
        Ok(Payload::Text(body))
    }
}

/// Settle a completed response: resolve on 2xx, reject otherwise.
///
/// The payload is decoded the same way in both cases.
pub fn settle(response: RawResponse) -> Result<Payload> {
    let status = response.status;
    let success = response.is_success();
    let payload = decode_body(response.content_type.as_deref(), response.body)?;

    if success {
        Ok(payload)
    } else {
        Err(FetchError::Rejected { status, payload })
    }
}
