//! HTTP transport backed by reqwest.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::errors::FetchError;
use crate::domain::ports::{HttpResponse, HttpTransportPort};
use crate::infrastructure::config::HttpConfig;

/// Issues plain GET requests. No retries, no custom redirect policy.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates transport from HTTP settings.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransportPort for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            debug!(url = %url, error = %e, "Image request failed");
            if e.is_timeout() {
                FetchError::transport("request timed out")
            } else if e.is_connect() {
                let host = url.host_str().unwrap_or("host");
                FetchError::transport(format!("failed to connect to {host}"))
            } else {
                FetchError::transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(format!("failed to read body: {e}")))?;

        debug!(url = %url, status, bytes = body.len(), "Image response received");

        Ok(HttpResponse { status, body })
    }
}
