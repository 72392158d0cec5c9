//! Error type shared by the fetcher, the parsers and the query client.

use thiserror::Error;

/// Everything that can go wrong while querying or parsing a remote resource.
#[derive(Debug, Error)]
pub enum Error {
    /// A required request did not answer with HTTP 200.
    #[error("Error in HTTP request: {code} ({url})")]
    HttpStatus { url: String, code: u16 },

    /// The request never produced a response (DNS, connection, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid header value for {name}: {value:?}")]
    InvalidHeader { name: &'static str, value: String },

    /// The body did not have the JSON shape we expect.
    #[error("unexpected response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("key `{key}` missing in response from {url}")]
    MissingKey { url: String, key: &'static str },

    #[error("element `{selector}` not found in page")]
    MissingElement { selector: &'static str },

    #[error("manifest row {row} has {cells} cell(s), expected at least 3")]
    MalformedRow { row: usize, cells: usize },

    #[error("could not extract a date from {0:?}")]
    InvalidDate(String),

    #[error("news item timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("patch version {0:?} does not fit in a u64")]
    InvalidVersion(String),

    #[error("response body from {url} is not valid UTF-8")]
    Utf8 {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl Error {
    /// The HTTP status code, when the error is a non-200 response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
