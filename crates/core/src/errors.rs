use thiserror::Error;

/// Unified error type for the entire dump-radar-core library.
///
/// Boundary failures are modelled here so callers and logs can tell them
/// apart, even though the UI-facing facade methods absorb them into
/// "fewer/no results".
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Price series ────────────────────────────────────────────────
    #[error("Price provider unavailable for {token}: {reason}")]
    ProviderUnavailable {
        token: String,
        reason: String,
    },

    #[error("No provider mapping for token: {0}")]
    UnknownToken(String),

    #[error("Degenerate window ending at index {index} (baseline price {baseline})")]
    DegenerateWindow {
        index: usize,
        baseline: f64,
    },

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Alert store ─────────────────────────────────────────────────
    #[error("Alert store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Unsupported store file version: {0}")]
    UnsupportedVersion(u16),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; drop the query string from logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
