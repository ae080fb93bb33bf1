use crate::errors::CoreError;
use crate::models::price::PricePoint;
use crate::providers::coingecko::resolve_token_id;
use crate::providers::traits::PriceSeriesProvider;

/// Fetches price series for chain-agnostic token symbols.
///
/// Two entry points:
/// - [`PriceService::fetch_series`] returns the tagged outcome
///   (`UnknownToken`, `ProviderUnavailable`, or the series).
/// - [`PriceService::fetch_series_or_empty`] is the UI path: every failure
///   becomes an empty series, logged with its cause.
pub struct PriceService {
    provider: Box<dyn PriceSeriesProvider>,
}

impl PriceService {
    pub fn new(provider: Box<dyn PriceSeriesProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch the series for `symbol` over the last `horizon_days` days.
    ///
    /// Unknown symbols short-circuit without touching the provider.
    pub async fn fetch_series(
        &self,
        symbol: &str,
        horizon_days: u32,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let token_id =
            resolve_token_id(symbol).ok_or_else(|| CoreError::UnknownToken(symbol.to_string()))?;

        self.provider
            .fetch_price_series(token_id, horizon_days)
            .await
            .map_err(|e| CoreError::ProviderUnavailable {
                token: symbol.to_string(),
                reason: e.to_string(),
            })
    }

    /// Like [`PriceService::fetch_series`], but never fails.
    pub async fn fetch_series_or_empty(&self, symbol: &str, horizon_days: u32) -> Vec<PricePoint> {
        match self.fetch_series(symbol, horizon_days).await {
            Ok(points) => {
                log::debug!(
                    "{} returned {} samples for {symbol}",
                    self.provider.name(),
                    points.len()
                );
                points
            }
            Err(e @ CoreError::UnknownToken(_)) => {
                log::info!("{e}; no series fetched");
                Vec::new()
            }
            Err(e) => {
                log::warn!("{e}; continuing with empty series");
                Vec::new()
            }
        }
    }
}
