//! # Market Data Endpoints
//!
//! Pass-through client for the market-data provider: coin list, coin
//! detail, price history, and search suggestions. Raw provider payloads
//! are returned to the caller; nothing is cached or reshaped beyond
//! unwrapping the `data` envelope.

use crate::config::{Config, COIN_LIMIT, REFERENCE_CURRENCY_UUID, TIME_PERIOD};
use crate::core::error::{ApiError, Result};
use crate::core::service::MarketApi;
use reqwest::Client;
use shared::{
    ApiErrorBody, Coin, CoinDetail, CoinList, Envelope, PriceHistory, SearchHit, SearchResults,
};

/// HTTP client for the market-data provider.
///
/// Separate from [`super::ApiClient`] because the provider uses its own
/// host and key headers and no session is ever involved.
pub struct MarketClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl MarketClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.market_url.trim_end_matches('/').to_string(),
            api_key: config.market_key.clone(),
            api_host: config.market_host.clone(),
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
    }
}

async fn unwrap_envelope<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        let envelope = response.json::<Envelope<T>>().await.map_err(|e| {
            tracing::error!(error = %e, "Market response parse error");
            ApiError::Transport(format!("failed to parse response: {e}"))
        })?;
        Ok(envelope.data)
    } else {
        // Pass the provider's own message through verbatim; fall back to
        // the status only when the body is unparseable.
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("market data request failed with status {status}"));
        tracing::warn!(status = status.as_u16(), error = %message, "Market request failed");
        Err(ApiError::Remote(message))
    }
}

/// Fetch the top coins by market cap.
#[tracing::instrument(skip(client))]
pub async fn coins(client: &MarketClient) -> Result<Vec<Coin>> {
    let start = std::time::Instant::now();

    let response = client
        .get("/coins")
        .query(&[
            ("referenceCurrencyUuid", REFERENCE_CURRENCY_UUID),
            ("timePeriod", TIME_PERIOD),
            ("tiers", "1"),
            ("orderBy", "marketCap"),
            ("orderDirection", "desc"),
            ("limit", &COIN_LIMIT.to_string()),
            ("offset", "0"),
        ])
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Coin list network error");
            ApiError::from(e)
        })?;

    let list: CoinList = unwrap_envelope(response).await?;
    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        coin_count = list.coins.len(),
        "Coin list fetched"
    );
    Ok(list.coins)
}

/// Fetch a single coin by its provider id.
#[tracing::instrument(skip(client), fields(uuid = %uuid))]
pub async fn coin(client: &MarketClient, uuid: &str) -> Result<Coin> {
    let response = client
        .get(&format!("/coin/{uuid}"))
        .query(&[
            ("referenceCurrencyUuid", REFERENCE_CURRENCY_UUID),
            ("timePeriod", TIME_PERIOD),
        ])
        .send()
        .await?;

    let detail: CoinDetail = unwrap_envelope(response).await?;
    Ok(detail.coin)
}

/// Fetch 24h price history for a coin.
#[tracing::instrument(skip(client), fields(uuid = %uuid))]
pub async fn coin_history(client: &MarketClient, uuid: &str) -> Result<PriceHistory> {
    let response = client
        .get(&format!("/coin/{uuid}/history"))
        .query(&[
            ("referenceCurrencyUuid", REFERENCE_CURRENCY_UUID),
            ("timePeriod", TIME_PERIOD),
        ])
        .send()
        .await?;

    unwrap_envelope(response).await
}

/// Search coins by free-text query.
#[tracing::instrument(skip(client), fields(query = %query))]
pub async fn search(client: &MarketClient, query: &str) -> Result<Vec<SearchHit>> {
    let response = client
        .get("/search-suggestions")
        .query(&[
            ("referenceCurrencyUuid", REFERENCE_CURRENCY_UUID),
            ("query", query),
        ])
        .send()
        .await?;

    let results: SearchResults = unwrap_envelope(response).await?;
    Ok(results.coins)
}

#[async_trait::async_trait]
impl MarketApi for MarketClient {
    async fn coins(&self) -> Result<Vec<Coin>> {
        coins(self).await
    }

    async fn coin(&self, uuid: &str) -> Result<Coin> {
        coin(self, uuid).await
    }

    async fn coin_history(&self, uuid: &str) -> Result<PriceHistory> {
        coin_history(self, uuid).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        search(self, query).await
    }
}
