use serde::{Deserialize, Serialize};

use super::event::AlertEvent;
use super::price::PricePoint;

/// Chart-ready data for one token.
///
/// The core computes the series and the dump markers; the frontend just
/// renders them. An empty `points` means either no data or a failed fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenChart {
    /// Symbol as selected by the user (e.g., "PEPE")
    pub token: String,

    /// Price samples, oldest first
    pub points: Vec<PricePoint>,

    /// Dump alerts detected on `points`, oldest first
    pub dumps: Vec<AlertEvent>,
}

impl TokenChart {
    pub fn empty(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }
}
