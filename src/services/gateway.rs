use crate::config::Config;
use crate::models::book::SearchResultPage;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Number of books requested per page.
pub const PAGE_SIZE: u32 = 20;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to fetch books: {0}")]
    Response(StatusCode),
    #[error("Unexpected response from the catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches one page of title search results. Implementations must not retry
/// or cache.
#[async_trait]
pub trait SearchGateway {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, GatewayError>;
}

pub struct OpenLibraryGateway {
    base_url: String,
    client: Client,
}

impl OpenLibraryGateway {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.api_url.clone(),
            client: builder.build()?,
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/search.json", self.base_url)
    }
}

#[async_trait]
impl SearchGateway for OpenLibraryGateway {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, GatewayError> {
        let url = self.search_url();
        let page_param = page.to_string();
        let limit_param = PAGE_SIZE.to_string();

        debug!("Requesting page {} for '{}' from {}", page, query, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("title", query),
                ("page", page_param.as_str()),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Search request for '{}' failed: {}", query, e);
                GatewayError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog responded with status {} for '{}'", status, query);
            return Err(GatewayError::Response(status));
        }

        let body = response.text().await?;
        let result_page: SearchResultPage = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse catalog response for '{}': {}", query, e);
            GatewayError::Parse(e)
        })?;

        debug!(
            "Page {} for '{}': {} docs of {}",
            page,
            query,
            result_page.docs.len(),
            result_page.num_found
        );

        Ok(result_page)
    }
}
