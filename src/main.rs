//! Depot Patch Tracker: query patches, manifests and file lists from the command line.
//!
//! A thin caller around [`depot_patch_tracker::PatchClient`]. Each subcommand runs
//! one query and prints its result as JSON on stdout.
//!
//! ## Usage
//! ```sh
//! depot-patch-tracker patches
//! depot-patch-tracker manifests --depot-id 813781
//! depot-patch-tracker patch-list --app-id 813780 --since 2021-01-01
//! depot-patch-tracker filelist --version 47820 --depot-id 813781
//! ```
//!
//! Endpoints can be overridden with flags or the `PATCH_REMOTE_URL`, `STEAMDB_URL`,
//! `STEAM_NEWS_URL` and `STEAMDB_USER_AGENT` environment variables. Logs go to
//! stderr, controlled by `RUST_LOG`.
//!
//! ## Notes
//! - Any failed query is fatal: the error (including the HTTP status code, when
//!   there is one) is printed and the process exits with status 1.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use clap::{Parser, Subcommand};
use depot_patch_tracker::config::{
  ClientConfig, DEFAULT_NEWS_API_URL, DEFAULT_NEWS_COUNT, DEFAULT_REMOTE_BASE_URL, DEFAULT_STEAMDB_BASE_URL,
  DEFAULT_USER_AGENT,
};
use depot_patch_tracker::PatchClient;
use log::{error, info};
use serde::Serialize;

/// Age of Empires II: Definitive Edition
const DEFAULT_APP_ID: u32 = 813780;

/// Command-line arguments for the Depot Patch Tracker.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Base URL of the remote directory holding patches.json and file lists.
  #[clap(long, env = "PATCH_REMOTE_URL", default_value = DEFAULT_REMOTE_BASE_URL, global = true)]
  remote_url: String,

  /// Base URL of steamdb.info.
  #[clap(long, env = "STEAMDB_URL", default_value = DEFAULT_STEAMDB_BASE_URL, global = true)]
  steamdb_url: String,

  /// URL of the Steam GetNewsForApp endpoint.
  #[clap(long, env = "STEAM_NEWS_URL", default_value = DEFAULT_NEWS_API_URL, global = true)]
  news_url: String,

  /// User agent sent to steamdb.info.
  #[clap(long, env = "STEAMDB_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
  user_agent: String,

  #[clap(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List the changed depots of every known patch.
  Patches,
  /// List the manifest history of a depot.
  Manifests {
    #[clap(long)]
    depot_id: u64,
  },
  /// List patches announced in the news feed after a date.
  PatchList {
    #[clap(long, default_value_t = DEFAULT_APP_ID)]
    app_id: u32,
    /// Only patches strictly after this local date (YYYY-MM-DD). Defaults to all.
    #[clap(long)]
    since: Option<NaiveDate>,
  },
  /// Print the file list of a depot at a patch version, or null if there is none.
  Filelist {
    #[clap(long)]
    version: u64,
    #[clap(long)]
    depot_id: u64,
  },
}

impl Args {
  fn client_config(&self) -> ClientConfig {
    ClientConfig {
      remote_base_url: self.remote_url.clone(),
      steamdb_base_url: self.steamdb_url.clone(),
      news_api_url: self.news_url.clone(),
      user_agent: self.user_agent.clone(),
      news_count: DEFAULT_NEWS_COUNT,
    }
  }
}

#[tokio::main]
async fn main() {
  // Initialize logging
  env_logger::init();

  let args = Args::parse();

  if let Err(e) = run(args).await {
    error!("{:#}", e);
    eprintln!("{:#}", e);
    std::process::exit(1);
  }
}

async fn run(args: Args) -> Result<()> {
  let client = PatchClient::with_config(args.client_config()).context("Failed to build client")?;
  info!("Starting Depot Patch Tracker with config: {:?}", client.config());

  match args.command {
    Command::Patches => {
      let patches = client
        .query_patch_change_list()
        .await
        .context("Failed to query patch change list")?;
      print_json(&patches)
    }
    Command::Manifests { depot_id } => {
      let manifests = client
        .query_manifests(depot_id)
        .await
        .with_context(|| format!("Failed to query manifests for depot {}", depot_id))?;
      print_json(&manifests)
    }
    Command::PatchList { app_id, since } => {
      let from_date = cutoff(since)?;
      let patches = client
        .query_patch_list(app_id, from_date)
        .await
        .with_context(|| format!("Failed to query patch list for app {}", app_id))?;
      print_json(&patches)
    }
    Command::Filelist { version, depot_id } => {
      let filelist = client
        .query_filelist(version, depot_id)
        .await
        .with_context(|| format!("Failed to query file list for {}/{}", version, depot_id))?;
      print_json(&filelist)
    }
  }
}

/// Local midnight of `since`, or the Unix epoch when no date is given.
fn cutoff(since: Option<NaiveDate>) -> Result<DateTime<Local>> {
  let naive = match since {
    Some(date) => date.and_hms_opt(0, 0, 0).context("Invalid --since date")?,
    None => return Local.timestamp_opt(0, 0).single().context("Invalid epoch"),
  };
  Local
    .from_local_datetime(&naive)
    .earliest()
    .with_context(|| format!("{} does not exist in the local time zone", naive))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
  println!("{}", json);
  Ok(())
}
