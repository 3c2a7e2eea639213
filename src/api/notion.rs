use log::{debug, log_enabled, trace, warn};
use reqwest::{header, Method};
use reqwest_middleware::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

use crate::{
    config::Config,
    notion::{Block, List, Page, PUBLISHED_PROPERTY},
};

use super::{ApiClient, Error, NotionSource};

pub const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Clone)]
pub struct NotionClient {
    inner: ApiClient,
    api_url: String,
    bearer: String,
    database_id: String,
}

impl NotionClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            inner: ApiClient::new(config)?,
            api_url: config.api_url().to_string(),
            bearer: config.bearer(),
            database_id: config.database_id().to_string(),
        })
    }

    fn wrap_request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(header::AUTHORIZATION, &self.bearer)
            .header("Notion-Version", NOTION_VERSION)
    }

    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<T, Error> {
        let (client, _permit) = self.inner.client().await?;
        let mut request = self.wrap_request(client.request(method.clone(), url));
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!("{} {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if log_enabled!(log::Level::Trace) {
            trace!("{}", String::from_utf8_lossy(&bytes));
        }

        if !status.is_success() {
            let error = match serde_json::from_slice::<NotionErrorBody>(&bytes) {
                Ok(body) => Error::Api {
                    status: status.as_u16(),
                    code: body.code,
                    message: body.message,
                },
                Err(_) => Error::Api {
                    status: status.as_u16(),
                    code: "unknown".to_string(),
                    message: String::from_utf8_lossy(&bytes).into_owned(),
                },
            };
            if status == reqwest::StatusCode::UNAUTHORIZED {
                warn!("The token is invalid or the integration has no access");
            }
            return Err(error);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Query the database, first page of results only
    pub async fn query_database(&self, query: &Value) -> Result<Vec<Page>, Error> {
        let url = format!("{}/databases/{}/query", self.api_url, self.database_id);
        let list: List<Page> = self.fetch(Method::POST, &url, Some(query)).await?;
        if list.has_more {
            debug!("More pages available after {:?}, ignored", list.next_cursor);
        }
        Ok(list.results)
    }

    /// Children of a block, first page of results only
    pub async fn get_block_children(&self, block_id: &str) -> Result<Vec<Block>, Error> {
        let url = format!("{}/blocks/{}/children", self.api_url, block_id);
        let list: List<Block> = self.fetch(Method::GET, &url, None).await?;
        if list.has_more {
            debug!("More blocks available in {}, ignored", block_id);
        }
        Ok(list.results)
    }
}

impl NotionSource for NotionClient {
    async fn query_published(&self) -> Result<Vec<Page>, Error> {
        self.query_database(&published_query()).await
    }

    async fn list_blocks(&self, page_id: &str) -> Result<Vec<Block>, Error> {
        self.get_block_children(page_id).await
    }
}

/// Published pages, newest first
pub fn published_query() -> Value {
    json!({
        "filter": {
            "and": [
                { "property": PUBLISHED_PROPERTY, "checkbox": { "equals": true } }
            ]
        },
        "sorts": [
            { "timestamp": "created_time", "direction": "descending" }
        ]
    })
}

#[derive(Deserialize, Debug, Clone)]
struct NotionErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}
