use super::types::ManifestRecord;
use crate::error::{Error, Result};
use crate::utils::extract_date;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const CONTAINER: &str = "div#manifests";

static CONTAINER_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(CONTAINER).unwrap());
static TBODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").unwrap());
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

// html5ever inserts a tbody into any table with bare rows, so the parsed tree
// alone cannot tell whether the page actually shipped one.
static SOURCE_TBODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<div\b[^>]*\bid\s*=\s*["']?manifests\b.*?<tbody\b"#).unwrap()
});

/// Parses a steamdb.info depot manifests page into manifest records.
///
/// The page is expected to hold a `div#manifests` container with a table
/// inside it. Each table body row contributes one record: the first cell is
/// the date, the third the manifest id, and the second is ignored. Records are
/// returned in document order.
///
/// A container without a table body in the page source means the depot has
/// no manifest history and yields an empty vector. Rows without `td` cells
/// (header rows) are skipped.
///
/// # Arguments
///
/// * `html` - The raw HTML of the page.
///
/// # Returns
///
/// * `Ok(Vec<ManifestRecord>)` - The manifests listed on the page, possibly none.
/// * `Err(Error::MissingElement)` - The page has no `div#manifests` container.
/// * `Err(Error::MalformedRow)` - A row has fewer than three cells.
/// * `Err(Error::InvalidDate)` - A date cell could not be parsed.
pub fn parse_manifests(html: &str) -> Result<Vec<ManifestRecord>> {
    let document = Html::parse_document(html);
    let container = document
        .select(&CONTAINER_SELECTOR)
        .next()
        .ok_or(Error::MissingElement { selector: CONTAINER })?;

    let tbody = match container.select(&TBODY_SELECTOR).next() {
        Some(tbody) if SOURCE_TBODY.is_match(html) => tbody,
        _ => return Ok(Vec::new()),
    };

    let mut manifests = Vec::new();
    for (row, tr) in tbody.select(&ROW_SELECTOR).enumerate() {
        if let Some(manifest) = parse_manifest_row(row, tr)? {
            manifests.push(manifest);
        }
    }
    Ok(manifests)
}

fn parse_manifest_row(row: usize, tr: ElementRef<'_>) -> Result<Option<ManifestRecord>> {
    let cells: Vec<String> = tr
        .select(&CELL_SELECTOR)
        .map(|td| td.text().collect::<String>())
        .collect();

    if cells.is_empty() {
        return Ok(None);
    }
    if cells.len() < 3 {
        return Err(Error::MalformedRow {
            row,
            cells: cells.len(),
        });
    }

    Ok(Some(ManifestRecord {
        date: extract_date(&cells[0])?,
        id: cells[2].clone(),
    }))
}
