//! # Utility Functions
//!
//! General helpers used by the parsers.
//!
//! ## Submodules
//!
//! - **date**: Extracts calendar dates from scraped text.

mod date;

pub use date::extract_date;
