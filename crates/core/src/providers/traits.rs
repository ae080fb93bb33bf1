use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::event::{AlertEvent, Chain};
use crate::models::price::PricePoint;

/// Trait abstraction for remote price-series sources.
///
/// Implementations return a tagged `Result`; deciding whether a failure
/// becomes an empty series is left to the caller (see `PriceService`).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PriceSeriesProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch `(time, price)` samples for a provider-recognized token id
    /// covering the last `horizon_days` days, oldest first.
    async fn fetch_price_series(
        &self,
        token_id: &str,
        horizon_days: u32,
    ) -> Result<Vec<PricePoint>, CoreError>;
}

/// Trait abstraction for whale-move sources.
///
/// A real implementation would normalize explorer data (Etherscan,
/// Solscan, BscScan); today only the stub exists.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WhaleMoveProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch recent whale moves on one chain, already normalized.
    async fn fetch_whale_moves(&self, chain: Chain) -> Result<Vec<AlertEvent>, CoreError>;
}
