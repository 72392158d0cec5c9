//! # Querying Patch Metadata
//!
//! `PatchClient` exposes the four queries: the patch change list, depot
//! manifests, the patch list from the news feed, and per-version file lists.
//! Each query fetches once through the shared `Fetcher` and hands the body to
//! the matching parser.

mod client;
#[cfg(test)]
mod tests;

pub use client::PatchClient;
