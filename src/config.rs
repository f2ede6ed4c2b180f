//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::fetch::RetryPolicy;
use crate::sources::Source;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sites to search, in order
    #[serde(default = "default_sources")]
    pub sources: Vec<Source>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept-Language header sent with every request
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Maximum number of results to print (all when unset)
    #[serde(default)]
    pub max_results: Option<usize>,

    /// Filter: minimum normalized price
    #[serde(default)]
    pub min_price: Option<u64>,

    /// Filter: maximum normalized price
    #[serde(default)]
    pub max_price: Option<u64>,

    /// Filter: keywords that must appear in the name
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Filter: keywords that must NOT appear in the name
    #[serde(default)]
    pub exclude_keywords: Vec<String>,

    /// Retry policy for fetches
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_sources() -> Vec<Source> {
    Source::all().to_vec()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/118.0.0.0 Safari/537.36"
        .to_string()
}

fn default_accept_language() -> String {
    "en-IN,en;q=0.9,hi;q=0.8".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            format: OutputFormat::Table,
            proxy: None,
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            max_results: None,
            min_price: None,
            max_price: None,
            keywords: Vec::new(),
            exclude_keywords: Vec::new(),
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("price-scout").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(proxy) = std::env::var("SCOUT_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(user_agent) = std::env::var("SCOUT_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                self.user_agent = user_agent;
            }
        }

        if let Ok(attempts) = std::env::var("SCOUT_MAX_ATTEMPTS") {
            if let Ok(n) = attempts.parse() {
                self.retry.max_attempts = n;
            }
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
