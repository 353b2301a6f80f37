use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::errors::{TimeClientError, TimeClientResult};
use crate::http_client::build_client;
use crate::models::TimeEndpointResponse;

pub const DEFAULT_TIME_SERVER_URL: &str =
    "https://mcp-time-server-online-production.up.railway.app/time";

/// Fetches the current time text from a remote time server
#[derive(Debug, Clone)]
pub struct RemoteTimeService {
    client: Client,
    url: Url,
}

impl RemoteTimeService {
    pub fn new(url: Url, timeout: Duration) -> TimeClientResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// GET the endpoint and return the first text content verbatim
    pub async fn fetch_time(&self) -> TimeClientResult<String> {
        let request_error = |e: reqwest::Error| TimeClientError::Request {
            url: self.url.to_string(),
            message: e.to_string(),
        };

        tracing::debug!(url = %self.url, "fetching remote time");
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(request_error)?;

        // The server answers 200 with a JSON body even for its own errors, so
        // the body shape decides, not the status code.
        let body: TimeEndpointResponse = response.json().await.map_err(|e| {
            tracing::warn!("time server returned an unreadable body: {}", e);
            TimeClientError::InvalidResponse
        })?;

        body.first_text()
            .map(str::to_string)
            .ok_or(TimeClientError::InvalidResponse)
    }
}
