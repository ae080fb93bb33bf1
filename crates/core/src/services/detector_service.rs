use crate::errors::CoreError;
use crate::models::event::{AlertDraft, AlertEvent, Chain, EventType, Severity};
use crate::models::price::PricePoint;
use crate::services::summary_service::summarize;

/// Number of consecutive samples in one dump window (4-sample lookback).
pub const WINDOW_SIZE: usize = 5;

/// Percent change at or below which a window counts as a dump.
pub const DUMP_THRESHOLD_PERCENT: f64 = -10.0;

/// Provenance tag for detector output.
pub const DUMP_SOURCE: &str = "Coingecko";

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Finds sharp price declines in a price series.
///
/// Every window of [`WINDOW_SIZE`] consecutive samples is compared end to
/// start. Overlapping qualifying windows each produce an event; their ids
/// (`{symbol}-{time}`) are deterministic, so re-running detection on the
/// same series de-duplicates cleanly in the merger.
pub struct DumpDetector;

impl DumpDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect dumps in `series` and attribute them to `token_symbol` on `chain`.
    ///
    /// Series shorter than one window yield nothing. Windows whose baseline
    /// price is zero, negative or non-finite are skipped.
    pub fn detect_dumps(
        &self,
        series: &[PricePoint],
        token_symbol: &str,
        chain: Chain,
    ) -> Vec<AlertEvent> {
        if series.len() < WINDOW_SIZE {
            return Vec::new();
        }

        let mut events = Vec::new();
        for (offset, window) in series.windows(WINDOW_SIZE).enumerate() {
            let end_index = offset + WINDOW_SIZE - 1;
            let start = window[0];
            let end = window[WINDOW_SIZE - 1];

            let change = match percent_change(start.price, end.price, end_index) {
                Ok(change) => change,
                Err(e) => {
                    log::debug!("Skipping window for {token_symbol}: {e}");
                    continue;
                }
            };

            if change <= DUMP_THRESHOLD_PERCENT {
                events.push(build_dump(token_symbol, chain, end.time, change));
            }
        }

        if !events.is_empty() {
            log::info!(
                "Detected {} dump window(s) for {token_symbol} over {} samples",
                events.len(),
                series.len()
            );
        }
        events
    }
}

impl Default for DumpDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent change from `baseline` to `last`, rejecting degenerate baselines.
fn percent_change(baseline: f64, last: f64, end_index: usize) -> Result<f64, CoreError> {
    if !baseline.is_finite() || baseline <= 0.0 {
        return Err(CoreError::DegenerateWindow {
            index: end_index,
            baseline,
        });
    }

    let change = (last - baseline) / baseline * 100.0;
    if !change.is_finite() {
        return Err(CoreError::DegenerateWindow {
            index: end_index,
            baseline,
        });
    }
    Ok(change)
}

fn build_dump(token_symbol: &str, chain: Chain, time: i64, change: f64) -> AlertEvent {
    let rounded = round_to_tenth(change);
    let summary = summarize(&AlertDraft {
        event_type: Some(EventType::Dump),
        chain: Some(chain),
        token_symbol: Some(token_symbol.to_string()),
        price_change_percent: Some(rounded),
        ..AlertDraft::default()
    });

    AlertEvent {
        id: format!("{token_symbol}-{time}"),
        timestamp: time,
        chain,
        token_symbol: token_symbol.to_string(),
        token_contract: None,
        event_type: EventType::Dump,
        // classify on the unrounded change
        severity: Severity::from_price_change(change),
        amount_usd: None,
        price_change_percent: Some(rounded),
        wallets: Vec::new(),
        exchanges: Vec::new(),
        summary,
        source: DUMP_SOURCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_tenth(-10.25), -10.3);
        assert_eq!(round_to_tenth(-10.24), -10.2);
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-21.0), -21.0);
    }

    #[test]
    fn zero_baseline_is_degenerate() {
        let err = percent_change(0.0, 10.0, 4).unwrap_err();
        assert!(matches!(err, CoreError::DegenerateWindow { index: 4, .. }));
    }

    #[test]
    fn negative_baseline_is_degenerate() {
        assert!(percent_change(-5.0, 10.0, 7).is_err());
    }
}
