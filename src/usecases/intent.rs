//! Free-text intent classification. Keyword matching in fixed priority
//! order; first matching branch wins, no scoring.

use super::advisory::TipCategory;

/// What the user asked for, as far as keyword matching can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Weather,
    MarketPrices,
    /// Requires "crop" plus one of recommend/suggest/grow.
    CropRecommendation,
    FarmingTips(Option<TipCategory>),
    /// Nothing matched; answer with the capability summary.
    Unknown,
}

/// Classify a free-text message. Matching is substring-based on the
/// lowercased text, evaluated in priority order:
/// weather → prices → crop recommendation → tips → unknown.
pub fn classify(text: &str) -> Intent {
    let t = text.to_lowercase();

    if t.contains("weather") || t.contains("forecast") || t.contains("rain") {
        Intent::Weather
    } else if t.contains("price") || t.contains("market") || t.contains("cost") {
        Intent::MarketPrices
    } else if t.contains("crop")
        && (t.contains("recommend") || t.contains("suggest") || t.contains("grow"))
    {
        Intent::CropRecommendation
    } else if t.contains("tip") || t.contains("advice") || t.contains("help") {
        Intent::FarmingTips(sub_category(&t))
    } else {
        Intent::Unknown
    }
}

/// Secondary keyword match inside the tips branch.
fn sub_category(t: &str) -> Option<TipCategory> {
    if t.contains("irrigation") || t.contains("water") {
        Some(TipCategory::Irrigation)
    } else if t.contains("pest") || t.contains("insect") {
        Some(TipCategory::Pest)
    } else if t.contains("fertilizer") || t.contains("nutrient") {
        Some(TipCategory::Fertilizer)
    } else {
        None
    }
}
