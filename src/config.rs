//! Immutable client configuration: endpoint base URLs and the browser-like
//! user agent steamdb.info insists on.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{Error, Result};

/// Base of the GitHub-hosted `remote/` directory holding `patches.json` and file lists.
pub const DEFAULT_REMOTE_BASE_URL: &str =
    "https://raw.githubusercontent.com/DJSchaffner/AoE2PatchReverter/master/remote/";
pub const DEFAULT_STEAMDB_BASE_URL: &str = "https://steamdb.info/";
pub const DEFAULT_NEWS_API_URL: &str = "https://api.steampowered.com/ISteamNews/GetNewsForApp/v1";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:78.0) Gecko/20100101 Firefox/78.0";
/// Number of news items requested per app, large enough to cover the whole feed.
pub const DEFAULT_NEWS_COUNT: u32 = 999_999;

/// Endpoints and request settings for a [`crate::PatchClient`].
///
/// The default value points at the production services. Tests and the CLI
/// override individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub remote_base_url: String,
    pub steamdb_base_url: String,
    pub news_api_url: String,
    pub user_agent: String,
    pub news_count: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            remote_base_url: DEFAULT_REMOTE_BASE_URL.to_string(),
            steamdb_base_url: DEFAULT_STEAMDB_BASE_URL.to_string(),
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            news_count: DEFAULT_NEWS_COUNT,
        }
    }
}

impl ClientConfig {
    /// Returns a copy with both base URLs ending in a trailing slash, so paths
    /// can be appended with plain formatting.
    pub fn normalized(mut self) -> Self {
        self.remote_base_url = normalize_url(&self.remote_base_url);
        self.steamdb_base_url = normalize_url(&self.steamdb_base_url);
        self
    }

    /// Builds the header map sent with every steamdb.info request.
    ///
    /// # Returns
    ///
    /// * `Ok(HeaderMap)` - A map containing only the `User-Agent` header.
    /// * `Err(Error::InvalidHeader)` - The configured user agent is not a valid header value.
    pub fn browser_headers(&self) -> Result<HeaderMap> {
        let value = HeaderValue::from_str(&self.user_agent).map_err(|_| Error::InvalidHeader {
            name: "User-Agent",
            value: self.user_agent.clone(),
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, value);
        Ok(headers)
    }
}

/// Normalizes a base URL by ensuring it ends with a trailing slash.
pub fn normalize_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com/");
        assert_eq!(normalize_url("https://example.com/"), "https://example.com/");
    }

    #[test]
    fn test_normalized_leaves_news_url_alone() {
        let config = ClientConfig {
            remote_base_url: "http://127.0.0.1:1/remote".to_string(),
            steamdb_base_url: "http://127.0.0.1:2".to_string(),
            ..ClientConfig::default()
        }
        .normalized();

        assert_eq!(config.remote_base_url, "http://127.0.0.1:1/remote/");
        assert_eq!(config.steamdb_base_url, "http://127.0.0.1:2/");
        assert_eq!(config.news_api_url, DEFAULT_NEWS_API_URL);
    }

    #[test]
    fn test_browser_headers() {
        let headers = ClientConfig::default().browser_headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[USER_AGENT], DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_browser_headers_rejects_control_characters() {
        let config = ClientConfig {
            user_agent: "bad\nagent".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            config.browser_headers(),
            Err(Error::InvalidHeader { name: "User-Agent", .. })
        ));
    }
}
