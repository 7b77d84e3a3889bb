//! Mock market price source. Fixed price board, no randomness.
//!
//! Deliberate asymmetry with the weather and vision mocks: every call
//! returns identical data.

use std::time::Duration;
use tracing::info;

use crate::domain::tables::MARKET_TABLE;
use crate::domain::{DomainError, MarketPrice};
use crate::ports::MarketPort;

/// Mock market adapter. Serves the static price board after a simulated
/// network delay.
pub struct MockMarketAdapter {
    delay_ms: u64,
}

impl MockMarketAdapter {
    /// Default delay (1000ms).
    pub fn new() -> Self {
        Self::with_delay(1000)
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockMarketAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MarketPort for MockMarketAdapter {
    async fn prices(&self) -> Result<Vec<MarketPrice>, DomainError> {
        info!("[MOCK] serving market price board");
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        Ok(MARKET_TABLE
            .iter()
            .map(|row| MarketPrice {
                crop: row.crop.to_string(),
                price: row.price,
                unit: row.unit.to_string(),
                trend: row.trend,
                change: row.change,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Trend;

    #[tokio::test]
    async fn serves_the_full_board() {
        let adapter = MockMarketAdapter::with_delay(0);
        let prices = adapter.prices().await.unwrap();
        assert_eq!(prices.len(), 10);
        assert_eq!(prices[0].crop, "Wheat");
        assert_eq!(prices[0].price, 2050);
        assert_eq!(prices[0].trend, Trend::Up);
        assert_eq!(prices[9].crop, "Groundnut");
    }

    #[tokio::test]
    async fn repeated_calls_are_byte_identical() {
        let adapter = MockMarketAdapter::with_delay(0);
        let first = serde_json::to_string(&adapter.prices().await.unwrap()).unwrap();
        let second = serde_json::to_string(&adapter.prices().await.unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
