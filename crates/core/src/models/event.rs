use serde::{Deserialize, Serialize};

/// Blockchain an alert belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "SOL")]
    Sol,
    #[serde(rename = "BSC")]
    Bsc,
}

impl Chain {
    /// Every supported chain, in display order.
    pub const ALL: [Chain; 3] = [Chain::Eth, Chain::Sol, Chain::Bsc];

    /// Parse a chain tag like "eth" or "BSC" (case-insensitive).
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "ETH" => Some(Chain::Eth),
            "SOL" => Some(Chain::Sol),
            "BSC" => Some(Chain::Bsc),
            _ => None,
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Chain::Eth => write!(f, "ETH"),
            Chain::Sol => write!(f, "SOL"),
            Chain::Bsc => write!(f, "BSC"),
        }
    }
}

/// Kind of alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Large wallet transfer (synthetic for now)
    #[serde(rename = "Whale Move")]
    WhaleMove,
    /// Sharp price decline found by the dump detector
    Dump,
}

impl EventType {
    pub const ALL: [EventType; 2] = [EventType::WhaleMove, EventType::Dump];
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::WhaleMove => write!(f, "Whale Move"),
            EventType::Dump => write!(f, "Dump"),
        }
    }
}

/// Coarse magnitude of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    /// Classify a (negative) percent change over a dump window.
    ///
    /// `<= -20` is High, `<= -15` is Medium, anything else Low.
    pub fn from_price_change(percent: f64) -> Self {
        if percent <= -20.0 {
            Severity::High
        } else if percent <= -15.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// A wallet involved in an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Wallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: None,
        }
    }

    pub fn labelled(address: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: Some(label.into()),
        }
    }
}

/// An exchange an alert points towards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub name: String,
}

impl Exchange {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The single normalized alert record shared by every source.
///
/// Field names serialize in camelCase so stored records keep the shape
/// the UI shell reads. Events are never mutated after creation; the
/// `summary` is derived and can always be regenerated via [`AlertDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    /// Deduplication key
    pub id: String,

    /// Effective time, epoch milliseconds
    pub timestamp: i64,

    pub chain: Chain,

    /// Stored as given, matched case-insensitively
    pub token_symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_contract: Option<String>,

    pub event_type: EventType,

    pub severity: Severity,

    #[serde(rename = "amountUSD", default, skip_serializing_if = "Option::is_none")]
    pub amount_usd: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percent: Option<f64>,

    #[serde(default)]
    pub wallets: Vec<Wallet>,

    #[serde(default)]
    pub exchanges: Vec<Exchange>,

    pub summary: String,

    /// Provenance tag, e.g. "Coingecko" or "Stub"
    pub source: String,
}

impl AlertEvent {
    /// The partial payload the normalizer summarizes.
    pub fn draft(&self) -> AlertDraft {
        AlertDraft::from(self)
    }
}

/// Partial alert payload accepted by the summarizer.
///
/// Every field is optional; an empty draft summarizes to the fallback text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertDraft {
    pub event_type: Option<EventType>,
    pub chain: Option<Chain>,
    pub token_symbol: Option<String>,
    pub amount_usd: Option<f64>,
    pub price_change_percent: Option<f64>,
    pub exchanges: Vec<Exchange>,
}

impl From<&AlertEvent> for AlertDraft {
    fn from(event: &AlertEvent) -> Self {
        Self {
            event_type: Some(event.event_type),
            chain: Some(event.chain),
            token_symbol: Some(event.token_symbol.clone()),
            amount_usd: event.amount_usd,
            price_change_percent: event.price_change_percent,
            exchanges: event.exchanges.clone(),
        }
    }
}
