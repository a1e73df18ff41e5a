use crate::core::fetcher::Fetcher;
use crate::domain::model::Payload;
use crate::domain::ports::HttpTransport;
use crate::utils::error::{FetchError, Result};

/// Fetch each URI in order; every call settles on its own.
pub async fn fetch_all<T: HttpTransport>(
    fetcher: &Fetcher<T>,
    uris: &[String],
) -> Vec<(String, Result<Payload>)> {
    let mut results = Vec::with_capacity(uris.len());
    for uri in uris {
        let result = fetcher.get(uri).await;
        results.push((uri.clone(), result));
    }
    results
}

/// Highest exit code among the failures, 0 when everything resolved.
pub fn exit_code(results: &[(String, Result<Payload>)]) -> i32 {
    results
        .iter()
        .filter_map(|(_, result)| result.as_ref().err())
        .map(FetchError::exit_code)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawResponse;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StubTransport {
        routes: HashMap<String, RawResponse>,
    }

    impl StubTransport {
        fn new(routes: &[(&str, RawResponse)]) -> Self {
            Self {
                routes: routes
                    .iter()
                    .map(|(uri, resp)| (uri.to_string(), resp.clone()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, uri: &str) -> Result<RawResponse> {
            self.routes
                .get(uri)
                .cloned()
                .ok_or_else(|| FetchError::ConfigError {
                    message: format!("unreachable {}", uri),
                })
        }
    }

    fn fetcher() -> Fetcher<StubTransport> {
        Fetcher::new(StubTransport::new(&[
            ("/ok", RawResponse::new(200, Some("text/plain"), "fine")),
            ("/gone", RawResponse::new(410, Some("text/plain"), "gone")),
            ("/bad-json", RawResponse::new(200, Some("application/json"), "{")),
        ]))
    }

    fn uris(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_results_keep_input_order() {
        let results = fetch_all(&fetcher(), &uris(&["/gone", "/ok"])).await;
        assert_eq!(results[0].0, "/gone");
        assert!(matches!(results[0].1, Err(FetchError::Rejected { status: 410, .. })));
        assert_eq!(results[1].0, "/ok");
        assert_eq!(results[1].1.as_ref().unwrap(), &Payload::Text("fine".to_string()));
    }

    #[tokio::test]
    async fn test_all_resolved_exits_zero() {
        let results = fetch_all(&fetcher(), &uris(&["/ok", "/ok"])).await;
        assert_eq!(exit_code(&results), 0);
    }

    #[tokio::test]
    async fn test_highest_exit_code_wins() {
        let results = fetch_all(&fetcher(), &uris(&["/ok", "/gone"])).await;
        assert_eq!(exit_code(&results), 1);

        let results = fetch_all(&fetcher(), &uris(&["/gone", "/missing", "/ok"])).await;
        assert_eq!(exit_code(&results), 2);

        // 解碼錯誤 (3) 高於傳輸錯誤 (2) 與拒絕 (1)
        let results = fetch_all(&fetcher(), &uris(&["/bad-json", "/missing", "/gone"])).await;
        assert_eq!(exit_code(&results), 3);
    }
}
