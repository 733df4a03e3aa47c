// src/core/net.rs
// Blocking HTTP GET against the portal. One request at a time, fixed timeout, no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

pub struct Http {
    client: Client,
    base: String,
}

impl Http {
    /// `base_url` is the Publicview prefix; a trailing `/` is added if missing.
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let base = if base_url.ends_with('/') { s!(base_url) } else { join!(base_url, "/") };
        Ok(Self { client, base })
    }

    pub fn url(&self, path: &str) -> String {
        join!(&self.base, path.trim_start_matches('/'))
    }

    /// GET `path` relative to the base; non-2xx is an error.
    pub fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url(path);
        debug!(%url, "GET");

        let resp = self.client.get(&url).send().map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }
        resp.text().map_err(|source| FetchError::Transport { url, source })
    }
}
