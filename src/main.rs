#[macro_use]
mod utils;

mod api;
mod config;
mod notion;
mod post;

use std::error::Error;

use api::notion::NotionClient;
use config::Config;
use log::{info, warn};
use post::{display_posts, fetch_posts, write_posts};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    config.init_logger();
    info!("# Notion Blog #");
    info!("");

    if config.database_id().is_empty() {
        warn!("No database id given (NOTION_DATABASE_ID)");
    }
    info!("Block errors: {}", config.on_block_error());
    info!("");

    let client = NotionClient::new(&config)?;
    let posts = stage!(
        "Fetching posts",
        fetch_posts(&client, config.on_block_error()).await?
    );
    display_posts(&posts);

    stage!("Writing posts", write_posts(&config, &posts)?);

    info!("All done!");
    Ok(())
}
