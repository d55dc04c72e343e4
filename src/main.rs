//! robotxt main entry point
//!
//! This is the command-line interface for the robotxt robots.txt checker.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use robotxt::client::RobotsClient;
use robotxt::config::{load_config_with_hash, Config};
use robotxt::output::{
    format_crawl_delay, format_decision, format_explanation, format_rules, format_sitemaps,
    generate_markdown_report,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// robotxt: a robots.txt parser and analyzer
///
/// Fetches a site's robots.txt and answers whether a user-agent may crawl a
/// path, which crawl-delay applies, and which sitemaps are declared.
#[derive(Parser, Debug)]
#[command(name = "robotxt")]
#[command(version)]
#[command(about = "A robots.txt parser and analyzer", long_about = None)]
struct Cli {
    /// Site URL or domain to analyze
    #[arg(value_name = "URL")]
    url: String,

    /// User agent to check rules for
    #[arg(short, long, default_value = "*")]
    user_agent: String,

    /// Path to check access for
    #[arg(short, long, default_value = "/")]
    path: String,

    /// Action to perform
    #[arg(short, long, value_enum, default_value_t = Action::Check)]
    action: Action,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Show which rule decided the outcome (check action)
    #[arg(long)]
    explain: bool,

    /// Write a markdown report of the parsed robots.txt to this file
    #[arg(long, value_name = "FILE")]
    export_markdown: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    /// Check whether the path is allowed
    Check,
    /// Show the crawl delay
    CrawlDelay,
    /// List declared sitemaps
    Sitemaps,
    /// List all user-agent groups and their rules
    Rules,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load(&cli)?;

    let mut client = RobotsClient::from_config(&config).context("Failed to build HTTP client")?;
    client
        .bind(&cli.url)
        .await
        .with_context(|| format!("Cannot analyze '{}'", cli.url))?;

    match cli.action {
        Action::Check => {
            let result = client.check(&cli.user_agent, &cli.path);
            println!("{}", format_decision(&result));
            if cli.explain {
                println!("{}", format_explanation(&result));
            }
        }
        Action::CrawlDelay => {
            let delay = client.crawl_delay(&cli.user_agent);
            println!("{}", format_crawl_delay(&cli.user_agent, delay));
        }
        Action::Sitemaps => {
            print!("{}", format_sitemaps(&client.sitemaps()));
        }
        Action::Rules => {
            print!("{}", format_rules(&client.rules()));
        }
    }

    if let Some(path) = &cli.export_markdown {
        let snapshot = client.snapshot();
        generate_markdown_report(client.parser().document(), snapshot.as_deref(), path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("Report written to: {}", path.display());
    }

    Ok(())
}

/// Loads the configuration file if one was given
fn load(cli: &Cli) -> anyhow::Result<Config> {
    let Some(path) = &cli.config else {
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    match load_config_with_hash(path) {
        Ok((config, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robotxt=info,warn"),
            1 => EnvFilter::new("robotxt=debug,info"),
            2 => EnvFilter::new("robotxt=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
