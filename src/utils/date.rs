use crate::error::{Error, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// "5 February 2021 – 18:43:39 UTC" as rendered by steamdb.info
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\s+([A-Za-z]{3,9})\.?\s+(\d{4})\b").unwrap());
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

/// Extracts a calendar date from free text such as a manifest table cell.
///
/// Recognises `D Month YYYY` (full or abbreviated month name) anywhere in the
/// text, falling back to an ISO `YYYY-MM-DD` date. Any time of day or zone
/// suffix is ignored.
///
/// # Arguments
///
/// * `text` - The text to search.
///
/// # Returns
///
/// * `Ok(NaiveDate)` - The first date found.
/// * `Err(Error::InvalidDate)` - No valid date could be extracted.
pub fn extract_date(text: &str) -> Result<NaiveDate> {
    if let Some(caps) = DAY_MONTH_YEAR.captures(text) {
        let candidate = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
        if let Ok(date) = NaiveDate::parse_from_str(&candidate, "%d %B %Y") {
            return Ok(date);
        }
    }

    if let Some(caps) = ISO_DATE.captures(text) {
        let candidate = format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]);
        if let Ok(date) = NaiveDate::parse_from_str(&candidate, "%Y-%m-%d") {
            return Ok(date);
        }
    }

    Err(Error::InvalidDate(text.trim().to_string()))
}
