use crate::error::BoardResult;

/// HTTP client abstraction for dependency injection.
///
/// The submitter only needs one operation: POST a form-encoded body and read
/// the response text. Tests supply their own implementation; production code
/// uses [`ReqwestClient`] behind the `http-client` feature.
pub trait HttpClient {
    fn post_form(&self, url: &str, fields: &[(String, String)]) -> BoardResult<String>;
}

#[cfg(feature = "http-client")]
pub use reqwest_client::ReqwestClient;

#[cfg(feature = "http-client")]
mod reqwest_client {
    use std::time::Duration;

    use super::HttpClient;
    use crate::error::{BoardError, BoardResult};

    const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Production HTTP client using blocking reqwest.
    #[derive(Debug, Default)]
    pub struct ReqwestClient;

    impl HttpClient for ReqwestClient {
        fn post_form(&self, url: &str, fields: &[(String, String)]) -> BoardResult<String> {
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .map_err(|e| BoardError::Permalink(format!("failed to build http client: {e}")))?;

            let response = client.post(url).form(fields).send().map_err(|e| {
                if e.is_timeout() {
                    BoardError::Permalink(format!("request timed out: {url}"))
                } else if e.is_connect() {
                    BoardError::Permalink(format!("failed to connect: {url}"))
                } else {
                    BoardError::Permalink(format!("request to {url} failed: {e}"))
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(BoardError::Permalink(format!(
                    "endpoint {url} returned HTTP {status}"
                )));
            }

            response
                .text()
                .map_err(|e| BoardError::Permalink(format!("failed to read response body: {e}")))
        }
    }
}
