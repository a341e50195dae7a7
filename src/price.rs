//! ETH/USD quote lookup against CoinGecko's simple-price endpoint.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

const PRICE_ENDPOINT: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=ethereum&vs_currencies=usd";

#[derive(Debug, Deserialize)]
struct PriceResponse {
    ethereum: EthQuote,
}

#[derive(Debug, Deserialize)]
struct EthQuote {
    usd: f64,
}

/// Thin client for the fiat price API. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct PriceClient {
    http: reqwest::Client,
}

impl PriceClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client for price lookups")?;
        Ok(Self { http })
    }

    /// Current ETH price in USD
    pub async fn eth_usd(&self) -> Result<f64> {
        let response: PriceResponse = self
            .http
            .get(PRICE_ENDPOINT)
            .send()
            .await
            .context("Price request failed")?
            .error_for_status()
            .context("Price API returned an error status")?
            .json()
            .await
            .context("Failed to decode price response")?;

        Ok(response.ethereum.usd)
    }
}
