pub mod notion;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use std::{future::Future, sync::Arc};
use tokio::sync::{AcquireError, Semaphore, SemaphorePermit};

use crate::{
    config::Config,
    notion::{Block, Page},
};

const RETRY_LIMIT: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("notion returned {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request limiter closed")]
    Closed(#[from] AcquireError),
}

/// Where posts come from.
pub trait NotionSource {
    /// Published pages of the configured database, newest first
    fn query_published(&self) -> impl Future<Output = Result<Vec<Page>, Error>> + Send;
    /// Direct children of a page
    fn list_blocks(&self, page_id: &str) -> impl Future<Output = Result<Vec<Block>, Error>> + Send;
}

/// Shared http client; every request holds a permit while in flight.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: ClientWithMiddleware,
    semaphore: Arc<Semaphore>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(RETRY_LIMIT);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            semaphore: Arc::new(Semaphore::new(config.limit())),
        })
    }

    pub async fn client(&self) -> Result<(&ClientWithMiddleware, SemaphorePermit<'_>), Error> {
        let permit = self.semaphore.acquire().await?;
        Ok((&self.client, permit))
    }
}
