use crate::adapters::http::ReqwestTransport;
use crate::core::decode::settle;
use crate::domain::model::Payload;
use crate::domain::ports::HttpTransport;
use crate::utils::error::Result;

pub struct Fetcher<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Issue one GET and settle it once the full response has arrived.
    ///
    /// 2xx resolves with the decoded payload. Any other status becomes
    /// `FetchError::Rejected` carrying the payload decoded by the same rule.
    pub async fn get(&self, uri: &str) -> Result<Payload> {
        let response = self.transport.get(uri).await?;
        tracing::trace!(uri, status = response.status, "settling response");
        settle(response)
    }
}

impl Default for Fetcher<ReqwestTransport> {
    fn default() -> Self {
        Self::new(ReqwestTransport::new())
    }
}

/// GET `uri` with a fresh reqwest client.
pub async fn fetch_get(uri: &str) -> Result<Payload> {
    Fetcher::default().get(uri).await
}
