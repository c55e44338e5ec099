//! Client for the gitignore.io template API.

use anyhow::{Context, Result, bail};

use crate::config::Config;

pub struct Client {
    agent: ureq::Agent,
    base_url: String,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::config::Config::builder()
                .http_status_as_error(false)
                .timeout_global(Some(config.timeout))
                .build(),
        );

        Self { agent, base_url: config.api_url.clone() }
    }

    /// Fetches the combined template for a comma-joined target list.
    ///
    /// Each target is percent-encoded so `#`, `?` or `/` stay inside the path.
    pub fn fetch(&self, options: &str) -> Result<Vec<u8>> {
        self.get(&encode_options(options))
    }

    /// Fetches the list of targets the API accepts.
    pub fn list(&self) -> Result<Vec<u8>> {
        self.get("list")
    }

    fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(%url, "GET");

        let mut response =
            self.agent.get(&url).call().with_context(|| format!("request to {url} failed"))?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_vec()
            .with_context(|| format!("failed to read response from {url}"))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            bail!("gitignore API error (HTTP {status}): {}", text.trim());
        }

        Ok(body)
    }
}

fn encode_options(options: &str) -> String {
    options.split(',').map(urlencoding::encode).collect::<Vec<_>>().join(",")
}

/// Appends each extra entry as `\n<entry>/\n` after the fetched template.
pub fn ignore_document<S: AsRef<str>>(mut body: Vec<u8>, extras: &[S]) -> Vec<u8> {
    for extra in extras {
        body.extend_from_slice(format!("\n{}/\n", extra.as_ref()).as_bytes());
    }
    body
}
