use serde::{Deserialize, Serialize};

/// A single price sample.
///
/// Series are ordered by non-decreasing `time`. Prices are in USD and
/// positive in practice, but no sign invariant is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Sample time, epoch milliseconds
    pub time: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(time: i64, price: f64) -> Self {
        Self { time, price }
    }
}
