use crate::error::{Error, Result};
use log::{debug, error};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};

/// Issues the GET requests behind every query.
///
/// The fetcher wraps a `reqwest::Client` with library defaults: no timeout,
/// no retry and the default redirect policy. It holds no other state.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with reqwest's default `Client` config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fetcher around a `Client` configured by the caller.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a single URL.
    ///
    /// Success is defined solely as HTTP 200. With `ignore_success` unset, any
    /// other status is logged and returned as [`Error::HttpStatus`]. With it set,
    /// the response is handed back untouched and the caller checks the status
    /// with [`is_response_successful`].
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL to GET.
    /// * `headers` - Extra request headers, if any.
    /// * `ignore_success` - Return non-200 responses instead of failing.
    ///
    /// # Returns
    ///
    /// * `Ok(Response)` - The response, with its body still unread.
    /// * `Err(Error::HttpStatus)` - A non-200 status while `ignore_success` is false.
    /// * `Err(Error::Transport)` - The request could not be sent.
    pub async fn fetch(
        &self,
        url: &str,
        headers: Option<&HeaderMap>,
        ignore_success: bool,
    ) -> Result<Response> {
        let mut request = self.client.get(url);
        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }

        debug!("GET {}", url);
        let response = request.send().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        if !ignore_success && !is_response_successful(&response) {
            let code = response.status().as_u16();
            error!("Error in HTTP request: {} ({})", code, url);
            return Err(Error::HttpStatus {
                url: url.to_string(),
                code,
            });
        }

        Ok(response)
    }
}

/// Checks if a response returned successfully (status 200 exactly).
pub fn is_response_successful(response: &Response) -> bool {
    response.status() == StatusCode::OK
}

/// Reads the body of a response as text.
pub(crate) async fn read_text(url: &str, response: Response) -> Result<String> {
    response.text().await.map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })
}

/// Reads the body of a response and decodes it strictly as UTF-8.
pub(crate) async fn read_utf8(url: &str, response: Response) -> Result<String> {
    let bytes = response.bytes().await.map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })?;
    String::from_utf8(bytes.to_vec()).map_err(|source| Error::Utf8 {
        url: url.to_string(),
        source,
    })
}
