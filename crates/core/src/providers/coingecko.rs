use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::price::PricePoint;
use crate::models::settings::DEFAULT_COINGECKO_URL;
use super::traits::PriceSeriesProvider;

/// Fixed symbol → CoinGecko id table. Symbols outside it have no provider data.
const TOKEN_IDS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("BNB", "binancecoin"),
    ("SOL", "solana"),
    ("PEPE", "pepe"),
    ("BONK", "bonk"),
    ("USDT", "tether"),
];

/// Resolve a chain-agnostic symbol like "pepe" to a CoinGecko id like "pepe".
/// Case-insensitive; `None` for symbols outside the fixed table.
pub fn resolve_token_id(symbol: &str) -> Option<&'static str> {
    let upper = symbol.trim().to_uppercase();
    TOKEN_IDS
        .iter()
        .find(|(sym, _)| *sym == upper)
        .map(|(_, id)| *id)
}

/// CoinGecko API provider for USD price series.
///
/// - **Free**: public `/coins/{id}/market_chart` endpoint, no API key.
/// - **Granularity**: ~5 minute samples for a 1-day horizon, hourly beyond.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_COINGECKO_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the market chart for a token id over `horizon_days`.
    pub fn market_chart_url(&self, token_id: &str, horizon_days: u32) -> String {
        format!(
            "{}/coins/{token_id}/market_chart?vs_currency=usd&days={horizon_days}",
            self.base_url
        )
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct MarketChartResponse {
    /// `[epoch_ms, price]` pairs; absent on some error payloads
    #[serde(default)]
    prices: Vec<(f64, f64)>,
}

/// Parse a `/market_chart` body into price points.
///
/// A body without a `prices` key yields an empty series.
pub fn parse_market_chart(body: &str) -> Result<Vec<PricePoint>, CoreError> {
    let resp: MarketChartResponse = serde_json::from_str(body).map_err(|e| CoreError::Api {
        provider: "CoinGecko".into(),
        message: format!("Failed to parse market chart: {e}"),
    })?;

    Ok(resp
        .prices
        .into_iter()
        .map(|(time, price)| PricePoint::new(time as i64, price))
        .collect())
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceSeriesProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch_price_series(
        &self,
        token_id: &str,
        horizon_days: u32,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let url = self.market_chart_url(token_id, horizon_days);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("HTTP {status} for {token_id}"),
            });
        }

        let body = resp.text().await?;
        parse_market_chart(&body)
    }
}
