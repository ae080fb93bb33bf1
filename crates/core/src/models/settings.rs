use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::errors::CoreError;

use super::event::Chain;

pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";

/// Runtime settings for the alert pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Lookback window requested from the price provider, in days.
    pub horizon_days: u32,

    /// Chain tag attached to detected dumps (the series itself is chain-agnostic).
    pub detection_chain: Chain,

    /// Chains to request whale moves for on every refresh.
    pub whale_chains: Vec<Chain>,

    /// Base URL of the CoinGecko v3 API.
    pub coingecko_base_url: String,

    /// JSON file backing the alert store. `None` leaves the store unconfigured
    /// and the session runs purely in memory.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            horizon_days: 1,
            detection_chain: Chain::Eth,
            whale_chains: Chain::ALL.to_vec(),
            coingecko_base_url: DEFAULT_COINGECKO_URL.to_string(),
            store_path: None,
        }
    }
}

impl Settings {
    /// Build settings from `DUMP_RADAR_*` environment variables.
    ///
    /// Unset variables keep their defaults; set-but-invalid ones are rejected.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] but reads from an arbitrary lookup,
    /// which keeps tests away from process-global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup("DUMP_RADAR_HORIZON_DAYS") {
            let days: u32 = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("DUMP_RADAR_HORIZON_DAYS must be a positive integer, got '{raw}'"))
            })?;
            if days == 0 {
                return Err(CoreError::Config(
                    "DUMP_RADAR_HORIZON_DAYS must be at least 1".into(),
                ));
            }
            settings.horizon_days = days;
        }

        if let Some(raw) = lookup("DUMP_RADAR_DETECTION_CHAIN") {
            settings.detection_chain = Chain::parse(&raw).ok_or_else(|| {
                CoreError::Config(format!("Unknown chain in DUMP_RADAR_DETECTION_CHAIN: '{raw}'"))
            })?;
        }

        if let Some(raw) = lookup("DUMP_RADAR_WHALE_CHAINS") {
            let mut chains = Vec::new();
            for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let chain = Chain::parse(tag).ok_or_else(|| {
                    CoreError::Config(format!("Unknown chain in DUMP_RADAR_WHALE_CHAINS: '{tag}'"))
                })?;
                if !chains.contains(&chain) {
                    chains.push(chain);
                }
            }
            settings.whale_chains = chains;
        }

        if let Some(url) = lookup("DUMP_RADAR_COINGECKO_URL") {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CoreError::Config(
                    "DUMP_RADAR_COINGECKO_URL must start with http:// or https://".into(),
                ));
            }
            settings.coingecko_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(path) = lookup("DUMP_RADAR_STORE_PATH") {
            if !path.trim().is_empty() {
                settings.store_path = Some(PathBuf::from(path));
            }
        }

        Ok(settings)
    }
}
