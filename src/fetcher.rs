use crate::config::ArchiverConfig;
use crate::error::{ArchiveError, Result};
use reqwest::{Client, Response};
use reqwest::header::USER_AGENT;
use std::time::Duration;

/// HTTP client that sends a browser-identifying user agent on every request
///
/// No retries are attempted. Redirects follow the client defaults.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    user_agent: String,
}

impl Fetcher {
    /// Creates a fetcher from the archiver configuration
    pub fn new(config: &ArchiverConfig) -> Result<Self> {
        Self::build(
            &config.user_agent,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Creates a fetcher with an explicit user agent and optional request timeout
    pub fn build(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().gzip(true).brotli(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// Fetches a page and decodes it using the charset declared in its `Content-Type`
    ///
    /// Falls back to UTF-8 when no charset is declared.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send(url).await?;
        let text = response.text().await?;
        ::log::debug!("Fetched {} characters from {}", text.len(), url);
        Ok(text)
    }

    /// Fetches an asset as raw bytes
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(url).await?;
        let body = response.bytes().await?.to_vec();
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Performs a single GET against an absolute URL
    ///
    /// Connection failures and non-2xx statuses are both returned as errors.
    async fn send(&self, url: &str) -> Result<Response> {
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ArchiveError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}
