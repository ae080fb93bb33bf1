// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use dump_radar_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn provider_unavailable() {
        let err = CoreError::ProviderUnavailable {
            token: "PEPE".into(),
            reason: "timeout".into(),
        };
        assert_eq!(err.to_string(), "Price provider unavailable for PEPE: timeout");
    }

    #[test]
    fn unknown_token() {
        let err = CoreError::UnknownToken("DOGE".into());
        assert_eq!(err.to_string(), "No provider mapping for token: DOGE");
    }

    #[test]
    fn degenerate_window() {
        let err = CoreError::DegenerateWindow {
            index: 4,
            baseline: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "Degenerate window ending at index 4 (baseline price 0)"
        );
    }

    #[test]
    fn store_unavailable() {
        let err = CoreError::StoreUnavailable("not configured".into());
        assert_eq!(err.to_string(), "Alert store unavailable: not configured");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "CoinGecko".into(),
            message: "HTTP 429".into(),
        };
        assert_eq!(err.to_string(), "API error (CoinGecko): HTTP 429");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn unsupported_version() {
        let err = CoreError::UnsupportedVersion(7);
        assert_eq!(err.to_string(), "Unsupported store file version: 7");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("bad chain".into());
        assert_eq!(err.to_string(), "Invalid configuration: bad chain");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m == "gone"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
