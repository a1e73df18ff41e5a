//! Reqwest-backed implementation of the `HttpTransport` port.
use crate::domain::model::RawResponse;
use crate::domain::ports::HttpTransport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{header, Client};

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Header bytes outside visible ASCII are decoded lossily so the
    /// substring match still sees the media type.
    fn content_type(headers: &header::HeaderMap) -> Option<String> {
        headers
            .get(header::CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, uri: &str) -> Result<RawResponse> {
        tracing::debug!(uri, "HTTP GET start");
        let response = self.client.get(uri).send().await?;

        let status = response.status().as_u16();
        let content_type = Self::content_type(response.headers());
        if response.url().as_str() != uri {
            tracing::debug!(uri, final_url = %response.url(), "followed redirect");
        }

        // 等待完整 body 讀取完成後才回傳
        let body = response.text().await?;
        tracing::debug!(uri, status, bytes = body.len(), "HTTP GET complete");

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decode::is_json_content;
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_content_type_with_obs_text_keeps_media_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_bytes(b"application/json; x=\xe9t\xe9").unwrap(),
        );

        let ct = ReqwestTransport::content_type(&headers);
        assert!(ct.as_deref().unwrap().starts_with("application/json; x="));
        assert!(is_json_content(ct.as_deref()));
    }

    #[test]
    fn test_content_type_absent() {
        assert_eq!(ReqwestTransport::content_type(&HeaderMap::new()), None);
    }
}
