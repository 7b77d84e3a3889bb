//! Outbound ports. Application calls into advisory data sources.
//!
//! Implemented by adapters. The shipped adapters are mocks standing in
//! for real weather/market/vision services; the session never knows the
//! difference.

use crate::domain::{DomainError, ImageAnalysisResult, MarketPrice, WeatherData};

/// Weather source. Current conditions plus 7-day outlook.
#[async_trait::async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch weather for a location. Regenerated on every call; there is
    /// no identity between consecutive results.
    async fn current(&self, location: &str) -> Result<WeatherData, DomainError>;
}

/// Commodity price source.
#[async_trait::async_trait]
pub trait MarketPort: Send + Sync {
    /// Fetch the price board. Identical data on every call.
    async fn prices(&self) -> Result<Vec<MarketPrice>, DomainError>;
}

/// Crop photo health analysis.
#[async_trait::async_trait]
pub trait CropVisionPort: Send + Sync {
    /// Analyze a crop image. Resolves after the service's processing
    /// latency; always succeeds for well-formed requests.
    async fn analyze(&self, image: &[u8]) -> Result<ImageAnalysisResult, DomainError>;
}
