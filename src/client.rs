use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::config::RewardsConfig;
use crate::error::Error;
use crate::types::{Portfolio, Position, RewardsStats, WalletMetadata, WalletSnapshot};

/// Source of wallet rewards data
#[async_trait]
pub trait RewardsSource: Send + Sync {
    /// Resolve an address or domain, `None` if it is not a known wallet
    async fn resolve_wallet(&self, account: &str) -> Result<Option<WalletMetadata>, Error>;

    /// Rewards statistics of a resolved address
    async fn rewards_stats(&self, address: &str) -> Result<RewardsStats, Error>;

    /// Portfolio totals of a resolved address
    async fn portfolio(&self, address: &str) -> Result<Portfolio, Error>;

    /// Positions of a resolved address
    async fn positions(&self, address: &str) -> Result<Vec<Position>, Error>;
}

/// JSON envelope used by every rewards API response
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    data: T,
}

/// HTTP client for the rewards API
pub struct RewardsClient {
    http: reqwest::Client,
    config: RewardsConfig,
}

impl RewardsClient {
    /// Create a new client with the given configuration
    pub fn new(config: RewardsConfig) -> Result<Self, Error> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(api_key) = &config.api_key {
            let value = header::HeaderValue::from_str(api_key)
                .map_err(|e| Error::Config(format!("Invalid API key: {}", e)))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &RewardsConfig {
        &self.config
    }

    /// URL of a wallet resource, `part` appended after the account.
    ///
    /// The account is percent-encoded as a single path segment, so a domain
    /// containing `/`, `?` or `#` cannot change the route.
    pub fn wallet_url(&self, account: &str, part: Option<&str>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.config.api_url).map_err(|e| {
            Error::Config(format!("Invalid API URL {}: {}", self.config.api_url, e))
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::Config(format!("API URL cannot be a base: {}", self.config.api_url))
            })?;
            segments.pop_if_empty().push("wallet").push(account.trim());
            if let Some(part) = part {
                segments.push(part);
            }
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("{} returned {}: {}", url, status, body)));
        }

        let bytes = response.bytes().await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&bytes)?;
        Ok(Some(envelope.data))
    }

    async fn get_wallet_part<T: DeserializeOwned>(
        &self,
        address: &str,
        part: &str,
    ) -> Result<T, Error> {
        let url = self.wallet_url(address, Some(part))?;
        self.get(url.clone())
            .await?
            .ok_or_else(|| Error::Api(format!("{} not found", url)))
    }
}

#[async_trait]
impl RewardsSource for RewardsClient {
    async fn resolve_wallet(&self, account: &str) -> Result<Option<WalletMetadata>, Error> {
        let url = self.wallet_url(account, None)?;
        self.get(url).await
    }

    async fn rewards_stats(&self, address: &str) -> Result<RewardsStats, Error> {
        self.get_wallet_part(address, "rewards").await
    }

    async fn portfolio(&self, address: &str) -> Result<Portfolio, Error> {
        self.get_wallet_part(address, "portfolio").await
    }

    async fn positions(&self, address: &str) -> Result<Vec<Position>, Error> {
        self.get_wallet_part(address, "positions").await
    }
}

/// Fetch everything shown for an account.
///
/// Returns `Ok(None)` when the account does not resolve to a wallet. Stats,
/// portfolio and positions are requested concurrently; a failure in any of
/// them leaves that part `None` instead of failing the whole snapshot.
pub async fn fetch_snapshot<S>(source: &S, account: &str) -> Result<Option<WalletSnapshot>, Error>
where
    S: RewardsSource + ?Sized,
{
    let wallet = match source.resolve_wallet(account).await? {
        Some(wallet) => wallet,
        None => return Ok(None),
    };
    let address = wallet.address.clone();

    let (stats, portfolio, positions) = futures::join!(
        source.rewards_stats(&address),
        source.portfolio(&address),
        source.positions(&address)
    );

    Ok(Some(WalletSnapshot {
        wallet,
        stats: available(stats, "rewards stats", &address),
        portfolio: available(portfolio, "portfolio", &address),
        positions: available(positions, "positions", &address),
    }))
}

fn available<T>(result: Result<T, Error>, what: &str, address: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(%address, "Failed to fetch {}: {}", what, e);
            None
        }
    }
}
