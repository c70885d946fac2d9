//! Blocking reqwest client with size-limited downloads.

use reqwest::blocking::{Client, Response};
use std::io::Read;
use std::time::Duration;

use super::HttpGet;
use crate::config::{default_user_agent, HttpConfig, DEFAULT_MAX_INDEX_BYTES};
use crate::error::KegError;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    max_bytes: u64,
}

impl HttpClient {
    /// A client without timeouts.
    pub fn new() -> Result<Self, KegError> {
        let client = Client::builder()
            .timeout(None)
            .user_agent(default_user_agent())
            .build()?;
        Ok(Self {
            client,
            max_bytes: DEFAULT_MAX_INDEX_BYTES,
        })
    }

    /// A client with the configured timeouts, user agent and size cap.
    /// - connect_timeout: maximum time to establish a TCP connection
    /// - timeout: maximum time for the entire request, body included
    pub fn from_config(config: &HttpConfig) -> Result<Self, KegError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            max_bytes: config.max_index_bytes,
        })
    }
}

impl HttpGet for HttpClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, KegError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send()?;
        validate_response_status(&response, url)?;
        download_with_limit(response, self.max_bytes, url)
    }
}

fn validate_response_status(response: &Response, url: &str) -> Result<(), KegError> {
    let status = response.status();
    if !status.is_success() {
        return Err(KegError::FetchFailed {
            url: url.to_string(),
            status: status.to_string(),
        });
    }
    Ok(())
}

/// Read the body, refusing more than `max_size` bytes. Checks
/// Content-Length first, then counts while streaming.
fn download_with_limit(response: Response, max_size: u64, url: &str) -> Result<Vec<u8>, KegError> {
    let too_large = || KegError::TooLarge {
        url: url.to_string(),
        limit: max_size,
    };

    if response.content_length().is_some_and(|len| len > max_size) {
        return Err(too_large());
    }

    let mut bytes = Vec::new();
    response
        .take(max_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|source| KegError::Body {
            url: url.to_string(),
            source,
        })?;

    if bytes.len() as u64 > max_size {
        return Err(too_large());
    }
    Ok(bytes)
}
