pub mod content;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use chrono::{DateTime, Utc};
use futures::future::{join_all, try_join_all};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    api::{Error, NotionSource},
    config::{Config, FailurePolicy},
    notion::{Block, Page},
};

pub use content::Content;

/// A normalized page, ready for rendering.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub create_ts: Option<String>,
    pub last_edited_ts: Option<String>,
    pub contents: Vec<Content>,
}

impl Post {
    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.create_ts.as_deref()?)
    }
    pub fn last_edited(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.last_edited_ts.as_deref()?)
    }
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|time| time.to_utc())
}

/// Build a post from a page and its blocks.
///
/// Entries without properties (database rows, partial objects) keep only
/// their id.
pub fn assemble(page: &Page, blocks: &[Block]) -> Post {
    if page.properties.is_none() {
        return Post {
            id: page.id.clone(),
            ..Default::default()
        };
    }

    Post {
        id: page.id.clone(),
        title: page.title(),
        slug: page.slug(),
        create_ts: page.created_time.clone(),
        last_edited_ts: page.last_edited_time.clone(),
        contents: blocks.iter().filter_map(Content::from_block).collect(),
    }
}

/// Query published pages and assemble them with their blocks.
///
/// Block lists are requested for every page at once and matched back by
/// position, so the output keeps the query order.
pub async fn fetch_posts<S: NotionSource>(
    source: &S,
    policy: FailurePolicy,
) -> Result<Vec<Post>, Error> {
    let pages = source.query_published().await?;
    if pages.is_empty() {
        info!("No published pages");
        return Ok(vec![]);
    }
    info!("{} published pages", pages.len());

    let requests = pages.iter().map(|page| source.list_blocks(page.id()));
    let blocks: Vec<Vec<Block>> = match policy {
        FailurePolicy::Abort => try_join_all(requests).await?,
        FailurePolicy::Skip => join_all(requests)
            .await
            .into_iter()
            .zip(&pages)
            .map(|(result, page)| {
                result.unwrap_or_else(|error| {
                    warn!("Failed to load blocks of {}: {}", page.id(), error);
                    vec![]
                })
            })
            .collect(),
    };

    Ok(pages
        .iter()
        .zip(&blocks)
        .map(|(page, blocks)| assemble(page, blocks))
        .collect())
}

pub fn display_posts(posts: &[Post]) {
    if log::log_enabled!(log::Level::Info) {
        fn timestamp(time: Option<DateTime<Utc>>) -> String {
            time.map(|time| time.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default()
        }

        let (mut id_width, mut slug_width) = (4_usize, 6_usize);
        for post in posts.iter() {
            id_width = post.id.len().max(id_width);
            slug_width = post.slug.as_deref().unwrap_or_default().len().max(slug_width);
        }

        info!(
            "+-{:-<id_width$}-+-{:-<16}-+-{:-<16}-+-{:-<slug_width$}-+-{}------- - -",
            " Id ", " Created ", " Edited ", " Slug ", " Title "
        );
        for post in posts.iter() {
            info!(
                "| {:id_width$} | {:16} | {:16} | {:slug_width$} | {} ({} blocks)",
                post.id,
                timestamp(post.created()),
                timestamp(post.last_edited()),
                post.slug.as_deref().unwrap_or_default(),
                post.title.as_deref().unwrap_or_default(),
                post.contents.len()
            );
        }
        info!(
            "+-{}-+-{}-+-{}-+-{}-+------------ - -",
            "-".repeat(id_width),
            "-".repeat(16),
            "-".repeat(16),
            "-".repeat(slug_width)
        );
        info!("");
    }
}

/// Write posts as JSON to the configured file, or stdout.
pub fn write_posts(config: &Config, posts: &[Post]) -> io::Result<()> {
    match config.output() {
        Some(path) => {
            info!("Writing {} posts to {}", posts.len(), path.display());
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, posts)?;
            writer.flush()
        }
        None => {
            let mut writer = io::stdout().lock();
            serde_json::to_writer_pretty(&mut writer, posts)?;
            writeln!(writer)
        }
    }
}
