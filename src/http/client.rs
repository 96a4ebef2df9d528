use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

use crate::config::settings::HttpSettings;
use crate::errors::with_fetch_context;

/// Bodies shorter than this are consent walls or error stubs, not content pages
const MIN_BODY_LEN: usize = 100;

/// HTTP session bound to one external site, with its own cookie jar
pub struct SiteSession {
    client: Client,
    base_url: String,
}

impl SiteSession {
    pub fn new(base_url: &str, settings: &HttpSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a site-relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit the cookie consent form so content pages are served.
    pub async fn accept_consent(&self, return_url: &str) -> Result<()> {
        info!("Accepting cookies for {}...", self.base_url);

        let url = self.url("/cookiewall/Save");
        let form = [
            ("ReturnUrl", return_url),
            ("CookiePurposes", "1"),
            ("SettingsOpen", "false"),
        ];

        let response = with_fetch_context(self.client.post(&url).form(&form).send().await, &url)?;
        self.check_response_status(&response)?;
        Ok(())
    }

    /// GET a page, rejecting error statuses and suspiciously short bodies.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = with_fetch_context(self.client.get(url).send().await, url)?;
        self.check_response_status(&response)?;

        let text = self.extract_text(response).await?;
        if text.len() < MIN_BODY_LEN {
            anyhow::bail!("Empty or invalid response from {}", url);
        }
        Ok(text)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")
    }

    fn check_response_status(&self, response: &reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {} ({})", response.status(), response.url());
        }
        Ok(())
    }

    async fn extract_text(&self, response: reqwest::Response) -> Result<String> {
        response.text().await.context("Failed to read response body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let session = SiteSession::new("https://dbv.turnier.de/", &HttpSettings::default()).unwrap();
        assert_eq!(session.base_url(), "https://dbv.turnier.de");
        assert_eq!(
            session.url("/player-profile/abc/tournaments/2024"),
            "https://dbv.turnier.de/player-profile/abc/tournaments/2024"
        );
    }
}
