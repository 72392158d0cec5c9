//! # Fetching Remote Resources
//!
//! This module holds the low-level HTTP fetcher every query goes through. It
//! issues one GET per call and defines success as HTTP 200. A non-200 status is
//! either reported as an error or, in ignore-success mode, handed back for the
//! caller to inspect.
//!
//! ## Submodules
//!
//! - **fetcher**: The `Fetcher` type and response helpers.

mod fetcher;

pub use fetcher::{is_response_successful, Fetcher};
pub(crate) use fetcher::{read_text, read_utf8};
