use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use tokfollowers::commands::export_followers;
use tokfollowers::storage::DEFAULT_OUTPUT_FILE;
use tokfollowers::tiktok::{
    ApiConfig, FollowersQuery, TikTokClient, DEFAULT_API_BASE, DEFAULT_API_HOST, DEFAULT_COUNT,
    DEFAULT_TIME, DEFAULT_USER_ID,
};

#[derive(Parser, Debug)]
#[command(
    name = "tokfollowers",
    version,
    about = "Export a TikTok user's followers as profile URLs",
    long_about = "Fetches one page of a TikTok user's followers through the RapidAPI \
                  TikTok scraper and writes one profile URL per line to a text file"
)]
struct Cli {
    /// RapidAPI key used to authenticate with the gateway
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// RapidAPI host identifier of the TikTok scraper
    #[arg(long, env = "RAPIDAPI_HOST", default_value = DEFAULT_API_HOST)]
    api_host: String,

    /// Base URL of the TikTok scraper API
    #[arg(long, env = "TOKFOLLOWERS_BASE_URL", default_value = DEFAULT_API_BASE)]
    base_url: String,

    /// Numeric TikTok account id whose followers are exported
    #[arg(long, env = "TOKFOLLOWERS_USER_ID", default_value = DEFAULT_USER_ID)]
    user_id: String,

    /// Number of followers to request
    #[arg(long, env = "TOKFOLLOWERS_COUNT", default_value_t = DEFAULT_COUNT)]
    count: u32,

    /// Pagination cursor sent as the `time` parameter
    #[arg(long, env = "TOKFOLLOWERS_TIME", default_value_t = DEFAULT_TIME)]
    time: u64,

    /// File to write the profile URLs to (overwritten on each run)
    #[arg(short, long, env = "TOKFOLLOWERS_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Cli::parse();

    // Initialize logging
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if args.verbose {
        debug!("Verbose mode enabled");
    }

    let api_key = args.api_key.context(
        "RapidAPI key not specified. Please set --api-key or RAPIDAPI_KEY environment variable",
    )?;

    let client = TikTokClient::new(ApiConfig {
        base_url: args.base_url,
        api_host: args.api_host,
        api_key,
    })
    .context("Failed to initialize TikTok client")?;

    let query = FollowersQuery {
        user_id: args.user_id,
        count: args.count,
        time: args.time,
    };

    let summary = export_followers::execute(&client, &query, &args.output).await?;
    println!("{}", summary.summary_line());

    Ok(())
}
