//! price-scout - Search Amazon India and Snapdeal and list the results by price

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use price_scout::commands::SearchCommand;
use price_scout::config::{Config, OutputFormat};
use price_scout::sources::Source;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Please enter the product you want to purchase: ";

#[derive(Parser)]
#[command(
    name = "price-scout",
    version,
    about = "Search Amazon India and Snapdeal and list the results by price",
    long_about = "Searches each shopping site for a product, merges the listings and prints them \
                  from cheapest to most expensive. Run without a subcommand to be prompted for \
                  the product."
)]
struct Cli {
    /// Sites to search (comma-separated)
    #[arg(short, long, global = true, value_delimiter = ',')]
    source: Option<Vec<Source>>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "SCOUT_PROXY")]
    proxy: Option<String>,

    /// Attempts per page before giving up on a site
    #[arg(long, global = true)]
    retries: Option<u32>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a product
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        max: Option<usize>,

        /// Minimum price filter
        #[arg(long)]
        min_price: Option<u64>,

        /// Maximum price filter
        #[arg(long)]
        max_price: Option<u64>,

        /// Required keywords in name (comma-separated)
        #[arg(long, value_delimiter = ',')]
        keywords: Option<Vec<String>>,

        /// Excluded keywords from name (comma-separated)
        #[arg(long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,
    },

    /// List supported sites
    Sources,
}

/// Asks for the query on stdout and reads one line from stdin.
fn prompt_query() -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).context("Failed to read query")?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(sources) = cli.source {
        config.sources = sources;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(retries) = cli.retries {
        config.retry.max_attempts = retries;
    }

    let query = match cli.command {
        Some(Commands::Sources) => {
            println!("Supported sources:\n");
            println!("{:<10} {:<10} {}", "Code", "Label", "Search URL");
            println!("{:-<10} {:-<10} {:-<40}", "", "", "");

            for source in Source::all() {
                println!("{:<10} {:<10} {}", source.to_string(), source.label(), source.url_prefix());
            }
            return Ok(());
        }

        Some(Commands::Search { query, max, min_price, max_price, keywords, exclude }) => {
            // Apply search-specific config
            if max.is_some() {
                config.max_results = max;
            }
            if min_price.is_some() {
                config.min_price = min_price;
            }
            if max_price.is_some() {
                config.max_price = max_price;
            }
            if let Some(kw) = keywords {
                config.keywords = kw;
            }
            if let Some(ex) = exclude {
                config.exclude_keywords = ex;
            }
            query
        }

        None => prompt_query()?,
    };

    let cmd = SearchCommand::new(config);
    let output = cmd.execute(&query).await?;
    println!("{}", output);

    Ok(())
}
