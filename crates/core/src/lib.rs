pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use futures::future::join_all;

use models::{
    chart::TokenChart,
    event::{AlertEvent, Chain},
    filters::Filters,
    settings::Settings,
};
use providers::{
    coingecko::CoinGeckoProvider,
    traits::{PriceSeriesProvider, WhaleMoveProvider},
    whale_stub::StubWhaleProvider,
};
use services::{
    detector_service::DumpDetector,
    merge_service::{apply_filters, merge},
    price_service::PriceService,
};
use storage::traits::AlertStore;

/// Main entry point for the Dump Radar core library.
///
/// Owns the alert collection the UI renders plus every service needed to
/// refresh it. None of the UI-facing methods return errors: boundary
/// failures are logged and contribute nothing to the merge.
#[must_use]
pub struct DumpRadar {
    settings: Settings,
    price_service: PriceService,
    whale_provider: Box<dyn WhaleMoveProvider>,
    store: Option<Box<dyn AlertStore>>,
    detector: DumpDetector,
    /// Merged, de-duplicated, newest first.
    alerts: Vec<AlertEvent>,
}

impl std::fmt::Debug for DumpRadar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DumpRadar")
            .field("settings", &self.settings)
            .field("price_provider", &self.price_service.provider_name())
            .field("whale_provider", &self.whale_provider.name())
            .field("store", &self.store.as_ref().map(|s| s.name()))
            .field("alerts", &self.alerts.len())
            .finish()
    }
}

impl DumpRadar {
    /// Wire a radar from explicit collaborators. The store stays closed
    /// until [`DumpRadar::open`] is called.
    pub fn new(
        settings: Settings,
        price_provider: Box<dyn PriceSeriesProvider>,
        whale_provider: Box<dyn WhaleMoveProvider>,
        store: Option<Box<dyn AlertStore>>,
    ) -> Self {
        Self {
            settings,
            price_service: PriceService::new(price_provider),
            whale_provider,
            store,
            detector: DumpDetector::new(),
            alerts: Vec::new(),
        }
    }

    /// CoinGecko prices, stub whale moves, and a JSON file store when
    /// `settings.store_path` is set (native only).
    pub fn with_defaults(settings: Settings) -> Self {
        let price_provider = Box::new(CoinGeckoProvider::with_base_url(
            settings.coingecko_base_url.clone(),
        ));

        #[cfg(not(target_arch = "wasm32"))]
        let store: Option<Box<dyn AlertStore>> = settings
            .store_path
            .clone()
            .map(|path| Box::new(storage::json_file::JsonFileAlertStore::new(path)) as Box<dyn AlertStore>);
        #[cfg(target_arch = "wasm32")]
        let store: Option<Box<dyn AlertStore>> = None;

        Self::new(settings, price_provider, Box::new(StubWhaleProvider::new()), store)
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Store lifecycle ─────────────────────────────────────────────

    /// Open the alert store. Returns `false` (and keeps running
    /// session-only) when there is no store or it cannot be opened.
    pub async fn open(&mut self) -> bool {
        let Some(store) = self.store.as_mut() else {
            log::info!("No alert store configured; alerts are session-only");
            return false;
        };
        match store.open().await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to open alert store {}: {e}", store.name());
                false
            }
        }
    }

    /// Close the alert store, if any.
    pub async fn close(&mut self) {
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.close().await {
                log::warn!("Failed to close alert store {}: {e}", store.name());
            }
        }
    }

    #[must_use]
    pub fn is_store_open(&self) -> bool {
        self.store.as_ref().is_some_and(|s| s.is_open())
    }

    // ── Alerts ──────────────────────────────────────────────────────

    /// Current merged collection, newest first.
    #[must_use]
    pub fn alerts(&self) -> &[AlertEvent] {
        &self.alerts
    }

    /// The alert list as the UI shows it under `filters`.
    #[must_use]
    pub fn filtered_alerts(&self, filters: &Filters) -> Vec<&AlertEvent> {
        apply_filters(&self.alerts, filters)
    }

    /// Reload stored alerts and fetch whale moves for every configured chain,
    /// then merge them ahead of the current collection.
    pub async fn refresh_alerts(&mut self) -> &[AlertEvent] {
        let stored = self.load_stored().await;
        let whales = self.fetch_whales().await;

        let current = std::mem::take(&mut self.alerts);
        self.alerts = merge([whales, stored, current]);
        log::debug!("Alert collection now holds {} events", self.alerts.len());
        &self.alerts
    }

    /// Persist one alert. On failure the alert is still kept for this
    /// session; the return value says whether it reached the store.
    pub async fn save_alert(&mut self, event: AlertEvent) -> bool {
        let persisted = match self.store.as_mut() {
            Some(store) => match store.append_alert(&event).await {
                Ok(record_id) => {
                    log::debug!("Saved alert {} as record {record_id}", event.id);
                    true
                }
                Err(e) => {
                    log::warn!("Alert {} kept in session only: {e}", event.id);
                    false
                }
            },
            None => false,
        };

        let current = std::mem::take(&mut self.alerts);
        self.alerts = merge([current, vec![event]]);
        persisted
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Fetch the price series for `symbol`, detect dumps on it, and merge
    /// those dumps into the alert collection.
    ///
    /// Unknown tokens and provider failures both yield an empty chart.
    pub async fn load_token_chart(&mut self, symbol: &str) -> TokenChart {
        let points = self
            .price_service
            .fetch_series_or_empty(symbol, self.settings.horizon_days)
            .await;
        if points.is_empty() {
            return TokenChart::empty(symbol);
        }

        let dumps = self
            .detector
            .detect_dumps(&points, symbol, self.settings.detection_chain);

        let current = std::mem::take(&mut self.alerts);
        self.alerts = merge([dumps.clone(), current]);

        TokenChart {
            token: symbol.to_string(),
            points,
            dumps,
        }
    }

    // ── Internal ────────────────────────────────────────────────────

    async fn load_stored(&self) -> Vec<AlertEvent> {
        let Some(store) = self.store.as_ref() else {
            return Vec::new();
        };
        match store.list_alerts().await {
            Ok(events) => events,
            Err(e) => {
                log::warn!("Alert store {} unavailable, skipping stored alerts: {e}", store.name());
                Vec::new()
            }
        }
    }

    async fn fetch_whales(&self) -> Vec<AlertEvent> {
        let chains: Vec<Chain> = self.settings.whale_chains.clone();
        let results = join_all(
            chains
                .iter()
                .map(|chain| self.whale_provider.fetch_whale_moves(*chain)),
        )
        .await;

        chains
            .iter()
            .zip(results)
            .flat_map(|(chain, result)| match result {
                Ok(events) => events,
                Err(e) => {
                    log::warn!("Whale moves for {chain} unavailable: {e}");
                    Vec::new()
                }
            })
            .collect()
    }
}
