use std::io::Write;

use anyhow::Result;
use reqwest::Client;

use crate::constants::USER_AGENT;
use crate::error::FetchError;

/// Sends the observation request and hands back the body untouched
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with the crate's user agent and no timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Makes one HTTP GET request and returns the raw response body.
    ///
    /// The response is owned by this call and released on every return path.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Connect)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        tracing::debug!(status = %status, bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }

    /// Fetches `url` and writes the body to `out`; nothing is written on failure
    pub async fn fetch_to<W: Write>(&self, url: &str, out: &mut W) -> Result<usize> {
        let body = self.fetch(url).await?;
        out.write_all(&body)?;
        out.flush()?;
        Ok(body.len())
    }
}
