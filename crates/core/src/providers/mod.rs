pub mod traits;

// Price series
pub mod coingecko;

// Whale moves
pub mod whale_stub;
