//! Depot Patch Tracker Library
//!
//! This library detects game patches and retrieves their metadata: the changed
//! depots per patch (GitHub-hosted JSON), depot manifest histories (scraped
//! from steamdb.info), patch releases (Steam news API) and per-version file
//! lists.
//!

pub mod config;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod query;
pub mod utils;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use parse::{ManifestRecord, PatchRecord};
pub use query::PatchClient;
