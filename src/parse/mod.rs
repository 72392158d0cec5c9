//! # Parsing Fetched Responses into Records
//!
//! This module turns the raw bodies returned by the fetcher into records. It
//! does no I/O, so every parser can be exercised on fixed input.
//!
//! ## Submodules
//!
//! - **patches**: Extracts the `patches` list from `patches.json`.
//! - **manifests**: Scrapes the steamdb.info depot manifest table.
//! - **news**: Detects patch announcements in the Steam news feed.
//! - **types**: Defines the records and the news API response shape.

mod manifests;
mod news;
mod patches;
mod types;

pub use manifests::parse_manifests;
pub use news::{local_time, parse_patch_list, patch_version, patches_since};
pub use patches::{extract_patch_changes, parse_patch_changes};
pub use types::{AppNews, ManifestRecord, NewsItem, NewsItems, NewsResponse, PatchRecord};
