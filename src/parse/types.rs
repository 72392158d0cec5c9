use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of a depot's manifest history as listed on steamdb.info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRecord {
    /// The day the manifest was published.
    pub date: NaiveDate,
    /// The manifest id, taken verbatim from the table cell.
    pub id: String,
}

/// A released patch detected in the news feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchRecord {
    /// The numeric build version from the end of the news title.
    pub version: u64,
    /// The news item's publication time, in local time.
    pub date: DateTime<Local>,
}

/// Top level of the `GetNewsForApp/v1` JSON response.
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    pub appnews: AppNews,
}

#[derive(Debug, Deserialize)]
pub struct AppNews {
    pub newsitems: NewsItems,
}

#[derive(Debug, Deserialize)]
pub struct NewsItems {
    pub newsitem: Vec<NewsItem>,
}

/// A single news item. Only the fields used for patch detection are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub title: String,
    /// Unix timestamp in seconds.
    pub date: i64,
}
