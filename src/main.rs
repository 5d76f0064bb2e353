// src/main.rs
mod utils;
mod instagram;
mod extractors;
mod report;
mod storage;

use std::time::Duration;

use clap::Parser;
use utils::AppError;
use instagram::{client, FetchOptions, Username};
use extractors::{LookupOutcome, ProfileAssembler};
use storage::StorageManager;

/// Command Line Interface for a single public profile lookup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Username to look up (with or without @)
    username: String,

    /// Directory where the raw page is saved as <username>.log
    #[arg(long, default_value = "./logs")]
    logs_dir: String,

    /// Do not save the raw page
    #[arg(long)]
    no_raw_log: bool,

    /// Also save the extracted record as <username>.json in the logs directory
    #[arg(long)]
    save_record: bool,

    /// Base URL of the profile site
    #[arg(long, default_value = client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Override the User-Agent header
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = client::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Debug-level logging unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(if args.verbose { "debug" } else { "info" });
    tracing::debug!("Starting lookup for args: {:?}", args);

    if args.timeout_secs == 0 {
        return Err(AppError::Config("--timeout-secs must be greater than zero".to_string()));
    }

    let username = Username::parse(&args.username)?;
    let options = FetchOptions {
        base_url: args.base_url.clone(),
        user_agent: args.user_agent.clone().unwrap_or_else(|| client::DEFAULT_USER_AGENT.to_string()),
        timeout: Duration::from_secs(args.timeout_secs),
    };

    // 3. Fetch the profile page
    let html = match client::fetch_profile_page(&username, &options).await {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", username, e);
            return Err(e.into());
        }
    };

    // 4. Persist the raw page
    let storage = if args.no_raw_log && !args.save_record {
        None
    } else {
        Some(StorageManager::new(&args.logs_dir)?)
    };
    if let Some(storage) = &storage {
        if !args.no_raw_log {
            storage.save_raw_page(&username, &html)?;
        }
    }

    // 5. Extract
    let outcome = ProfileAssembler::new().assemble(&html, username.as_str());

    if let (Some(storage), LookupOutcome::Found(record)) = (&storage, &outcome) {
        if args.save_record {
            storage.save_record(record)?;
        }
    }

    // 6. Report
    let rendered = if args.json {
        report::render_json(&outcome)?
    } else {
        report::render_text(&outcome)
    };
    println!("{}", rendered);

    Ok(())
}
