//! Contract metadata retrieval from a chain-scoped metadata repository

use std::time::Duration;

use alloy_primitives::Address;
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::ResolverConfig;
use crate::domain::{ChainId, FetchOutcome, MetadataDocument, MetadataSource};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{code} {reason}")]
    Status { code: u16, reason: String },
    #[error("no metadata repository configured")]
    NoRepository,
}

/// HTTP metadata fetcher
///
/// Requests `{base}{chain}/{checksummed address}/metadata.json` from the first
/// configured repository. Further repository URLs are accepted but not consulted.
/// Every call issues exactly one request; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct MetadataFetcher {
    http: reqwest::Client,
    repo_urls: Vec<String>,
}

impl MetadataFetcher {
    /// Fetcher with a default client and the default repository
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), ResolverConfig::default().metadata_repo_urls)
    }

    /// Build the HTTP client from configuration (timeout, user agent)
    pub fn from_config(config: &ResolverConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::with_client(http, config.metadata_repo_urls.clone()))
    }

    /// Use a caller-owned client, e.g. one shared across resolvers
    pub fn with_client(http: reqwest::Client, repo_urls: Vec<String>) -> Self {
        Self { http, repo_urls }
    }

    /// Lookup URL for a contract, or `None` when no repository is configured
    pub fn metadata_url(&self, chain: ChainId, address: Address) -> Option<String> {
        let base = self.repo_urls.first()?;
        Some(format!(
            "{}{}/{}/metadata.json",
            base,
            chain,
            address.to_checksum(None)
        ))
    }

    /// Raw body for a contract; `Ok(None)` when the repository answers 404
    pub async fn fetch_body(&self, chain: ChainId, address: Address) -> Result<Option<String>, FetchError> {
        let url = self.metadata_url(chain, address).ok_or(FetchError::NoRepository)?;
        tracing::debug!(%url, "fetching contract metadata");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "metadata response");

        match status {
            StatusCode::OK => Ok(Some(response.text().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            other => Err(FetchError::Status {
                code: other.as_u16(),
                reason: other.canonical_reason().unwrap_or_default().to_string(),
            }),
        }
    }
}

impl Default for MetadataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataSource for MetadataFetcher {
    async fn fetch(&self, chain: ChainId, address: Address) -> FetchOutcome {
        match self.fetch_body(chain, address).await {
            Ok(Some(body)) => match MetadataDocument::parse(&body) {
                Ok(document) => FetchOutcome::Found(document),
                Err(err) => {
                    tracing::warn!(%chain, %address, error = %err, "unparseable metadata document");
                    FetchOutcome::Malformed(err.to_string())
                }
            },
            Ok(None) => FetchOutcome::NotFound,
            Err(err) => {
                tracing::warn!(%chain, %address, error = %err, "metadata fetch failed");
                FetchOutcome::TransportError(format!("Error: {}", err))
            }
        }
    }
}
