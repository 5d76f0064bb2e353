// src/instagram/client.rs
use crate::instagram::models::Username;
use crate::utils::error::FetchError;
use reqwest::header;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.instagram.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the single page fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Creates a reqwest client configured for profile page requests.
fn build_client(options: &FetchOptions) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout)
        .build()
}

/// Downloads the profile page for `username` and returns its markup.
/// No retries: one request per lookup.
pub async fn fetch_profile_page(username: &Username, options: &FetchOptions) -> Result<String, FetchError> {
    let client = build_client(options)?; // Propagate client build error if any
    let url = username.profile_url(&options.base_url);

    tracing::info!("Fetching profile page: {}", url);
    tracing::debug!("Using User-Agent: {}", options.user_agent);

    let response = client.get(&url)
        .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*")
        .send()
        .await?; // Propagates reqwest::Error as FetchError::Network

    // Check if the request was successful (status code 2xx)
    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS || status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!("Received {} - the platform is likely throttling this client.", status);
            return Err(FetchError::RateLimited);
        }
        return Err(FetchError::Http(status));
    }

    let body = response.text().await?;
    tracing::debug!("Downloaded {} bytes from {}", body.len(), url);

    Ok(body)
}
