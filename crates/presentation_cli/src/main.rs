//! GitHub profile lookup CLI
//!
//! Looks up a GitHub account's public profile, most recent commit-author
//! email, and most recently updated repository, and renders the result as
//! colorized terminal text. With no argument it prompts interactively.

#![allow(clippy::print_stdout)]

mod datetime;
mod render;
mod session;

use clap::Parser;
use integration_github::{GitHubConfig, GitHubLookup, GitHubRestClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// GitHub profile lookup
#[derive(Parser)]
#[command(name = "gh-lookup")]
#[command(version, about = "Look up public GitHub profile information", long_about = None)]
struct Cli {
    /// GitHub account name; prompts interactively when omitted
    username: Option<String>,

    /// Extra positional arguments, accepted and ignored
    #[arg(hide = true)]
    rest: Vec<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// GitHub API base URL
    #[arg(long, default_value = "https://api.github.com")]
    api_url: String,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Quiet by default so log lines never interleave with the report
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GitHubConfig {
        base_url: cli.api_url,
        ..GitHubConfig::default()
    };
    let lookup = GitHubLookup::new(GitHubRestClient::new(config)?);

    match cli.username {
        Some(username) => session::run_single(&lookup, &username).await,
        None => session::run_interactive(&lookup).await,
    }

    Ok(())
}
