use crate::config::ClientConfig;
use crate::error::Result;
use crate::fetch::{is_response_successful, read_text, read_utf8, Fetcher};
use crate::parse::{parse_manifests, parse_patch_changes, parse_patch_list, ManifestRecord, PatchRecord};
use chrono::{DateTime, Local};
use log::{debug, info};
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Client for the patch, manifest, news and file list endpoints.
///
/// Every query performs exactly one request and returns freshly built records.
/// The client holds only immutable configuration, so it can be shared by
/// reference between callers.
#[derive(Debug, Clone)]
pub struct PatchClient {
    fetcher: Fetcher,
    config: ClientConfig,
    browser_headers: HeaderMap,
}

impl PatchClient {
    /// Creates a client for the production endpoints.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from a custom configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(PatchClient)` - The client, with base URLs normalized.
    /// * `Err(Error::InvalidHeader)` - The configured user agent is not a valid header value.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_fetcher(Fetcher::new(), config)
    }

    /// Creates a client that sends its requests through `fetcher`.
    pub fn with_fetcher(fetcher: Fetcher, config: ClientConfig) -> Result<Self> {
        let config = config.normalized();
        let browser_headers = config.browser_headers()?;
        Ok(Self {
            fetcher,
            config,
            browser_headers,
        })
    }

    /// The normalized configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Queries the list of changed depots for all known patches.
    ///
    /// Fetches `patches.json` from the remote repository and returns the value of
    /// its `patches` key unmodified.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The `patches` value exactly as decoded.
    /// * `Err(Error::HttpStatus)` - The document could not be fetched with status 200.
    /// * `Err(Error::Malformed | Error::MissingKey)` - The body is not JSON or lacks `patches`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use depot_patch_tracker::PatchClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> depot_patch_tracker::Result<()> {
    ///     let client = PatchClient::new()?;
    ///     let patches = client.query_patch_change_list().await?;
    ///     println!("{}", patches);
    ///     Ok(())
    /// }
    /// ```
    pub async fn query_patch_change_list(&self) -> Result<Value> {
        let url = format!("{}patches.json", self.config.remote_base_url);
        let response = self.fetcher.fetch(&url, None, false).await?;
        let body = read_text(&url, response).await?;
        let patches = parse_patch_changes(&url, &body)?;
        info!("Fetched patch change list from {}", url);
        Ok(patches)
    }

    /// Queries steamdb.info for the manifest history of a depot.
    ///
    /// The request carries the configured browser user agent. A depot without
    /// history yields an empty vector.
    ///
    /// # Arguments
    ///
    /// * `depot_id` - The depot to look up.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ManifestRecord>)` - Manifests in page order.
    /// * `Err(Error::HttpStatus)` - The page could not be fetched with status 200.
    /// * `Err(Error)` - The page did not have the expected structure.
    pub async fn query_manifests(&self, depot_id: u64) -> Result<Vec<ManifestRecord>> {
        let url = format!("{}depot/{}/manifests/", self.config.steamdb_base_url, depot_id);
        let response = self
            .fetcher
            .fetch(&url, Some(&self.browser_headers), false)
            .await?;
        let html = read_text(&url, response).await?;
        let manifests = parse_manifests(&html)?;
        info!("Found {} manifest(s) for depot {}", manifests.len(), depot_id);
        Ok(manifests)
    }

    /// Queries the Steam news feed for patches released after `from_date`.
    ///
    /// News items count as patches when their title ends in a space followed by
    /// a build number of five or more digits. Only patches dated strictly after
    /// `from_date` are returned, in feed order.
    ///
    /// # Arguments
    ///
    /// * `app_id` - The Steam application id.
    /// * `from_date` - Exclusive lower bound on the patch date.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PatchRecord>)` - The patches found.
    /// * `Err(Error::HttpStatus)` - The news API did not answer with status 200.
    /// * `Err(Error::Malformed)` - The response lacks `appnews.newsitems.newsitem`.
    pub async fn query_patch_list(
        &self,
        app_id: u32,
        from_date: DateTime<Local>,
    ) -> Result<Vec<PatchRecord>> {
        let url = format!(
            "{}?appid={}&count={}&format=json",
            self.config.news_api_url, app_id, self.config.news_count
        );
        let response = self.fetcher.fetch(&url, None, false).await?;
        let body = read_text(&url, response).await?;
        let patches = parse_patch_list(&url, &body, from_date)?;
        info!(
            "Found {} patch(es) for app {} since {}",
            patches.len(),
            app_id,
            from_date
        );
        Ok(patches)
    }

    /// Queries the file list of a depot at a given patch version.
    ///
    /// # Arguments
    ///
    /// * `version` - The patch version.
    /// * `depot_id` - The depot.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - The file content, on HTTP 200.
    /// * `Ok(None)` - The file does not exist (any other status).
    /// * `Err(Error)` - The request failed outright or the body is not UTF-8.
    pub async fn query_filelist(&self, version: u64, depot_id: u64) -> Result<Option<String>> {
        let url = format!("{}{}/{}.txt", self.config.remote_base_url, version, depot_id);
        let response = self.fetcher.fetch(&url, None, true).await?;

        if !is_response_successful(&response) {
            debug!("No file list at {} (status {})", url, response.status());
            return Ok(None);
        }

        let content = read_utf8(&url, response).await?;
        Ok(Some(content))
    }
}
