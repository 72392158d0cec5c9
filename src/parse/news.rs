use super::types::{NewsItem, NewsResponse, PatchRecord};
use crate::error::{Error, Result};
use chrono::{DateTime, Local, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

// Patch announcements end their title with the build number, e.g. "Update 47820".
// ASCII digits only, since `u64::from_str` rejects other Unicode digits. A single
// trailing newline is tolerated.
static PATCH_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.* ([0-9]{5,})\n?$").unwrap());

/// Returns the patch version at the end of a news title, if it has one.
///
/// A title qualifies when it ends with a space followed by five or more ASCII
/// digits, optionally followed by one newline.
///
/// # Returns
///
/// * `Ok(Some(u64))` - The version.
/// * `Ok(None)` - The title is not a patch announcement.
/// * `Err(Error::InvalidVersion)` - The digit run does not fit in a `u64`.
pub fn patch_version(title: &str) -> Result<Option<u64>> {
    let caps = match PATCH_TITLE.captures(title) {
        Some(caps) => caps,
        None => return Ok(None),
    };
    let digits = &caps[1];
    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| Error::InvalidVersion(digits.to_string()))
}

/// Converts a Unix timestamp in seconds to local time.
pub fn local_time(timestamp: i64) -> Result<DateTime<Local>> {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or(Error::InvalidTimestamp(timestamp))
}

/// Extracts patches released after `from_date` from a list of news items.
///
/// Items whose title is not a patch announcement are skipped. Of the rest,
/// only those dated strictly after `from_date` are kept. The order of `items`
/// is preserved.
///
/// # Arguments
///
/// * `items` - News items in API order.
/// * `from_date` - Exclusive lower bound on the patch date.
///
/// # Returns
///
/// * `Ok(Vec<PatchRecord>)` - The matching patches.
/// * `Err(Error)` - A version overflowed or a timestamp was out of range.
pub fn patches_since(items: &[NewsItem], from_date: DateTime<Local>) -> Result<Vec<PatchRecord>> {
    let mut patches = Vec::new();

    for item in items {
        let version = match patch_version(&item.title)? {
            Some(version) => version,
            None => continue,
        };
        let date = local_time(item.date)?;

        if date > from_date {
            patches.push(PatchRecord { version, date });
        }
    }

    Ok(patches)
}

/// Decodes a `GetNewsForApp` response body and extracts the patches released
/// after `from_date`.
///
/// A body lacking `appnews.newsitems.newsitem`, or whose items lack a `title`
/// or `date`, is reported as [`Error::Malformed`].
pub fn parse_patch_list(url: &str, body: &str, from_date: DateTime<Local>) -> Result<Vec<PatchRecord>> {
    let response: NewsResponse = serde_json::from_str(body).map_err(|source| Error::Malformed {
        url: url.to_string(),
        source,
    })?;
    patches_since(&response.appnews.newsitems.newsitem, from_date)
}
