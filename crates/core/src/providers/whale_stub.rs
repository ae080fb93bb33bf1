use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::event::{AlertDraft, AlertEvent, Chain, EventType, Exchange, Severity, Wallet};
use crate::services::summary_service::summarize;
use super::traits::WhaleMoveProvider;

const STUB_TOKEN: &str = "USDT";
const STUB_AMOUNT_USD: f64 = 12_000_000.0;

/// Placeholder whale-move source.
///
/// Emits one synthetic event per call per chain. Ids mix the current time
/// with a random uuid, so unlike dump ids they never repeat: every refresh
/// adds new whale events instead of replacing the previous ones.
pub struct StubWhaleProvider;

impl StubWhaleProvider {
    pub fn new() -> Self {
        Self
    }

    /// Build the synthetic event for `chain` at `now_ms`.
    pub fn generate(chain: Chain, now_ms: i64) -> AlertEvent {
        let exchanges = vec![Exchange::new("Binance")];
        let summary = summarize(&AlertDraft {
            event_type: Some(EventType::WhaleMove),
            chain: Some(chain),
            token_symbol: Some(STUB_TOKEN.to_string()),
            amount_usd: Some(STUB_AMOUNT_USD),
            price_change_percent: None,
            exchanges: exchanges.clone(),
        });

        AlertEvent {
            id: format!("whale-{chain}-{now_ms}-{}", Uuid::new_v4()),
            timestamp: now_ms,
            chain,
            token_symbol: STUB_TOKEN.to_string(),
            token_contract: None,
            event_type: EventType::WhaleMove,
            severity: Severity::High,
            amount_usd: Some(STUB_AMOUNT_USD),
            price_change_percent: None,
            wallets: vec![Wallet::labelled("0xABC...123", "Whale Wallet")],
            exchanges,
            summary,
            source: "Stub".to_string(),
        }
    }
}

impl Default for StubWhaleProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WhaleMoveProvider for StubWhaleProvider {
    fn name(&self) -> &str {
        "Stub"
    }

    async fn fetch_whale_moves(&self, chain: Chain) -> Result<Vec<AlertEvent>, CoreError> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        Ok(vec![Self::generate(chain, now_ms)])
    }
}
