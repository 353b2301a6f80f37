use reqwest::Client;
use std::time::Duration;

use crate::errors::{TimeClientError, TimeClientResult};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a reqwest client with the given request timeout
pub fn build_client(timeout: Duration) -> TimeClientResult<Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| TimeClientError::Client {
            message: e.to_string(),
        })
}
