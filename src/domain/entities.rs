//! Domain entities. Pure data structures for the advisory core.
//!
//! No UI/IO types here — these are produced by use cases and adapters
//! and consumed by the rendering layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Growing season. The only four keys the crop table knows.
///
/// An unrecognized season string is unrepresentable past [`Season::parse`];
/// callers at the text boundary decide what to do with `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
    Spring,
}

impl Season {
    pub const ALL: [Season; 4] = [Self::Summer, Self::Winter, Self::Monsoon, Self::Spring];

    /// Case-insensitive parse. Returns `None` for anything outside the four seasons.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "summer" => Some(Self::Summer),
            "winter" => Some(Self::Winter),
            "monsoon" => Some(Self::Monsoon),
            "spring" => Some(Self::Spring),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::Monsoon => "monsoon",
            Self::Spring => "spring",
        };
        f.write_str(s)
    }
}

/// One ranked crop suggestion for the user's soil, season and temperature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_name: String,
    /// Fit score 0–100, capped at 95.
    pub suitability: u8,
    pub expected_yield: String,
    pub water_requirement: String,
    pub growth_period: String,
    pub market_price: String,
    /// Always exactly 3 entries.
    pub tips: Vec<String>,
}

/// Current conditions plus a 7-day outlook for one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: String,
    /// °C.
    pub temperature: i32,
    pub condition: String,
    /// Percent, 0–100.
    pub humidity: u8,
    /// Millimetres.
    pub rainfall: f64,
    /// Always exactly 7 entries, "Today" first.
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub temp: i32,
    pub condition: String,
    /// Chance of rain, percent.
    pub precipitation: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// One quoted commodity price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPrice {
    pub crop: String,
    pub price: u32,
    pub unit: String,
    pub trend: Trend,
    /// Percent change, signed.
    pub change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Moderate,
    Poor,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Healthy => "healthy",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    /// Detection confidence, percent.
    pub confidence: u8,
    pub severity: Severity,
    pub treatment: String,
}

/// Outcome of a crop photo health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysisResult {
    pub crop_type: String,
    pub health_status: HealthStatus,
    pub health_score: u8,
    /// 0 diseases when healthy, 1 when moderate, 2 when poor.
    pub diseases: Vec<Disease>,
    /// Always exactly 5 entries.
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Structured result attached to a bot message, rendered by the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "data")]
pub enum BotPayload {
    Recommendations(Vec<CropRecommendation>),
    Weather(WeatherData),
    Prices(Vec<MarketPrice>),
    Analysis(ImageAnalysisResult),
    Tips { category: String, tips: Vec<String> },
}

/// One transcript entry. Append-only; the only permitted removal is the
/// transient "analyzing" placeholder during image analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<BotPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_parse_is_case_insensitive() {
        assert_eq!(Season::parse("Monsoon"), Some(Season::Monsoon));
        assert_eq!(Season::parse(" WINTER "), Some(Season::Winter));
        assert_eq!(Season::parse("autumn"), None);
        assert_eq!(Season::parse(""), None);
    }

    #[test]
    fn season_display_round_trips() {
        for s in Season::ALL {
            assert_eq!(Season::parse(&s.to_string()), Some(s));
        }
    }
}
