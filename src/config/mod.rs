pub mod failure_policy;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use dotenv::dotenv;
use std::{path::PathBuf, time::Duration};
use tokio::sync::Semaphore;

pub use failure_policy::FailurePolicy;

pub const DEFAULT_API_URL: &str = "https://api.notion.com/v1";

#[derive(Debug, Clone, Parser, Default)]
pub struct Config {
    /// Notion integration token
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    token: String,
    /// Id of the database holding the posts
    #[arg(long, env = "NOTION_DATABASE_ID", default_value = "")]
    database_id: String,
    /// Base url of the Notion API
    #[arg(long, env = "NOTION_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Write the posts to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Limit request concurrency
    #[arg(long, default_value = "5")]
    limit: usize,
    /// Request timeout in seconds, 0 disables it
    #[arg(long, default_value = "30")]
    timeout: u64,
    /// What to do when the blocks of a single page cannot be fetched
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    on_block_error: FailurePolicy,
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Config {
    /// Parse the configuration from the environment and command line arguments
    pub fn parse() -> Self {
        dotenv().ok();
        <Self as Parser>::parse()
    }
    /// Create a logger with the configured verbosity level
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.verbose.log_level_filter())
            .format_target(false)
            .init();
    }
    /// Get the `Authorization` header value
    pub fn bearer(&self) -> String {
        if self.token.starts_with("Bearer ") {
            self.token.clone()
        } else {
            format!("Bearer {}", self.token)
        }
    }
    pub fn database_id(&self) -> &str {
        &self.database_id
    }
    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
    pub const fn output(&self) -> Option<&PathBuf> {
        self.output.as_ref()
    }
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, Semaphore::MAX_PERMITS)
    }
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
    pub const fn on_block_error(&self) -> FailurePolicy {
        self.on_block_error
    }
}
