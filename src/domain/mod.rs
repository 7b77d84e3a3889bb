//! Core domain layer. No external I/O dependencies.
//!
//! Entities, static advisory tables and business rules live here.
//! Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod tables;

pub use entities::{
    BotPayload, ChatMessage, CropRecommendation, Disease, ForecastDay, HealthStatus,
    ImageAnalysisResult, MarketPrice, Season, Sender, Severity, Trend, WeatherData,
};
pub use errors::DomainError;
