use crate::domain::model::RawResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// HTTP client collaborator used by the fetcher.
///
/// Implementations must resolve only after the full response body is
/// available, never on headers alone.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, uri: &str) -> Result<RawResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn uris(&self) -> &[String];
    fn pretty(&self) -> bool;
}
