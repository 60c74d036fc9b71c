//! Upstream rate fetcher.
//!
//! # Responsibilities
//! - Build the provider request URL for one symbol
//! - Perform the GET with the shared HTTP client
//! - Decode the body into an `ExchangeRate`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::UpstreamConfig;
use crate::rates::decode::decode_exchange_rate;
use crate::rates::error::FetchError;
use crate::rates::types::ExchangeRate;

/// Provider function queried for every symbol.
pub const UPSTREAM_FUNCTION: &str = "CURRENCY_EXCHANGE_RATE";

/// Source of exchange rates, one symbol at a time.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the current rate for an upper-case currency code.
    async fn fetch(&self, symbol: &str) -> Result<ExchangeRate, FetchError>;
}

/// Alpha Vantage backed rate source.
#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base: Url,
    target_currency: String,
    api_key: String,
}

impl AlphaVantageClient {
    /// Create a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, FetchError> {
        let base = Url::parse(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base,
            target_currency: config.target_currency.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Provider URL for `symbol`.
    pub fn request_url(&self, symbol: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("function", UPSTREAM_FUNCTION)
            .append_pair("from_currency", symbol)
            .append_pair("to_currency", &self.target_currency)
            .append_pair("apikey", &self.api_key);
        url
    }

    async fn request(&self, symbol: &str) -> Result<ExchangeRate, FetchError> {
        let response = self.client.get(self.request_url(symbol)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(decode_exchange_rate(&body)?)
    }
}

#[async_trait]
impl RateSource for AlphaVantageClient {
    async fn fetch(&self, symbol: &str) -> Result<ExchangeRate, FetchError> {
        let result = self.request(symbol).await;

        match &result {
            Ok(rate) => {
                tracing::debug!(symbol = %symbol, bid = %rate.bid, ask = %rate.ask, "Upstream fetch succeeded");
            }
            Err(e) => tracing::warn!(symbol = %symbol, error = %e, "Upstream fetch failed"),
        }

        result
    }
}
