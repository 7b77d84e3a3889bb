//! Static advisory tables. The knowledge base behind the mock services.
//!
//! All lookups are fail-soft: unknown keys fall back to a documented
//! default instead of erroring.

use super::entities::{Season, Severity, Trend};

/// Candidate crops for a soil/season combination, in ranking order.
///
/// Soil type is matched case-insensitively; an unrecognized soil falls
/// back to the loamy row for the same season.
pub fn candidate_crops(soil_type: &str, season: Season) -> [&'static str; 5] {
    use Season::*;
    match (soil_type.to_lowercase().as_str(), season) {
        ("clay", Summer) => ["Rice", "Sunflower", "Sorghum", "Cotton", "Broccoli"],
        ("clay", Winter) => ["Wheat", "Chickpea", "Lettuce", "Cabbage", "Broccoli"],
        ("clay", Monsoon) => ["Rice", "Jute", "Sugarcane", "Turmeric", "Ginger"],
        ("clay", Spring) => ["Potato", "Peas", "Beans", "Cauliflower", "Radish"],
        ("sandy", Summer) => ["Millet", "Watermelon", "Cucumber", "Peanut", "Carrot"],
        ("sandy", Winter) => ["Potato", "Radish", "Carrot", "Turnip", "Beetroot"],
        ("sandy", Monsoon) => ["Groundnut", "Pearl Millet", "Cowpea", "Green Gram", "Cucumber"],
        ("sandy", Spring) => ["Tomato", "Pepper", "Eggplant", "Beans", "Melon"],
        ("silt", Summer) => ["Soybean", "Corn", "Tomato", "Pepper", "Squash"],
        ("silt", Winter) => ["Wheat", "Barley", "Oats", "Spinach", "Lettuce"],
        ("silt", Monsoon) => ["Rice", "Sugarcane", "Soybean", "Corn", "Vegetables"],
        ("silt", Spring) => ["Potato", "Cabbage", "Cauliflower", "Peas", "Beans"],
        // "loamy" and any unrecognized soil type
        (_, Summer) => ["Corn", "Tomato", "Cucumber", "Watermelon", "Cotton"],
        (_, Winter) => ["Wheat", "Barley", "Peas", "Mustard", "Carrot"],
        (_, Monsoon) => ["Rice", "Sugarcane", "Soybean", "Cotton", "Groundnut"],
        (_, Spring) => ["Potato", "Onion", "Cabbage", "Cauliflower", "Spinach"],
    }
}

/// Agronomic detail for a single crop.
#[derive(Debug, Clone, Copy)]
pub struct CropDetail {
    pub water_requirement: &'static str,
    pub growth_period: &'static str,
    pub market_price: &'static str,
}

/// Substituted for crops missing from the detail table.
pub const DEFAULT_DETAIL: CropDetail = CropDetail {
    water_requirement: "Medium (500-700mm)",
    growth_period: "90-120 days",
    market_price: "₹1500-2500/quintal",
};

/// Per-crop detail lookup. Crops outside the table get [`DEFAULT_DETAIL`].
pub fn crop_detail(crop: &str) -> CropDetail {
    match crop {
        "Rice" => CropDetail {
            water_requirement: "High (1200-1500mm)",
            growth_period: "120-150 days",
            market_price: "₹2000-2500/quintal",
        },
        "Wheat" => CropDetail {
            water_requirement: "Medium (450-650mm)",
            growth_period: "120-140 days",
            market_price: "₹1900-2200/quintal",
        },
        "Corn" => CropDetail {
            water_requirement: "Medium (500-800mm)",
            growth_period: "90-120 days",
            market_price: "₹1500-1800/quintal",
        },
        "Cotton" => CropDetail {
            water_requirement: "Medium-High (700-1300mm)",
            growth_period: "150-180 days",
            market_price: "₹5500-6500/quintal",
        },
        "Sugarcane" => CropDetail {
            water_requirement: "Very High (1500-2500mm)",
            growth_period: "12-18 months",
            market_price: "₹2750-3000/ton",
        },
        "Potato" => CropDetail {
            water_requirement: "Medium (500-700mm)",
            growth_period: "90-120 days",
            market_price: "₹800-1200/quintal",
        },
        "Tomato" => CropDetail {
            water_requirement: "Medium (600-800mm)",
            growth_period: "90-120 days",
            market_price: "₹1500-2500/quintal",
        },
        "Onion" => CropDetail {
            water_requirement: "Medium (350-550mm)",
            growth_period: "120-150 days",
            market_price: "₹1000-2000/quintal",
        },
        "Soybean" => CropDetail {
            water_requirement: "Medium (450-700mm)",
            growth_period: "90-120 days",
            market_price: "₹3800-4200/quintal",
        },
        "Groundnut" => CropDetail {
            water_requirement: "Medium (500-700mm)",
            growth_period: "120-140 days",
            market_price: "₹5000-5500/quintal",
        },
        _ => DEFAULT_DETAIL,
    }
}

/// One row of the fixed commodity price board.
#[derive(Debug, Clone, Copy)]
pub struct MarketRow {
    pub crop: &'static str,
    pub price: u32,
    pub unit: &'static str,
    pub trend: Trend,
    pub change: f64,
}

/// The price board. Fixed values, identical on every request — unlike the
/// weather and vision mocks, which randomize per call.
pub const MARKET_TABLE: [MarketRow; 10] = [
    MarketRow { crop: "Wheat", price: 2050, unit: "₹/quintal", trend: Trend::Up, change: 3.2 },
    MarketRow { crop: "Rice", price: 2300, unit: "₹/quintal", trend: Trend::Up, change: 2.8 },
    MarketRow { crop: "Cotton", price: 6200, unit: "₹/quintal", trend: Trend::Stable, change: 0.5 },
    MarketRow { crop: "Sugarcane", price: 2850, unit: "₹/ton", trend: Trend::Down, change: -1.2 },
    MarketRow { crop: "Soybean", price: 4100, unit: "₹/quintal", trend: Trend::Up, change: 4.5 },
    MarketRow { crop: "Corn", price: 1650, unit: "₹/quintal", trend: Trend::Stable, change: 0.3 },
    MarketRow { crop: "Potato", price: 1000, unit: "₹/quintal", trend: Trend::Down, change: -5.5 },
    MarketRow { crop: "Onion", price: 1800, unit: "₹/quintal", trend: Trend::Up, change: 8.2 },
    MarketRow { crop: "Tomato", price: 2100, unit: "₹/quintal", trend: Trend::Up, change: 6.1 },
    MarketRow { crop: "Groundnut", price: 5300, unit: "₹/quintal", trend: Trend::Stable, change: -0.8 },
];

pub const GENERAL_TIPS: [&str; 5] = [
    "Always test your soil before planting to understand nutrient levels",
    "Rotate crops seasonally to maintain soil health and prevent pest buildup",
    "Use mulching to conserve soil moisture and control weeds",
    "Monitor weather forecasts regularly to plan irrigation and harvesting",
    "Keep detailed records of planting dates, inputs, and yields for better planning",
];

pub const IRRIGATION_TIPS: [&str; 4] = [
    "Water early morning or evening to minimize evaporation",
    "Use drip irrigation for water efficiency and better crop health",
    "Check soil moisture before irrigating - avoid overwatering",
    "Consider rainwater harvesting for sustainable water management",
];

pub const PEST_TIPS: [&str; 4] = [
    "Implement Integrated Pest Management (IPM) practices",
    "Use pest-resistant crop varieties when available",
    "Encourage beneficial insects by planting diverse crops",
    "Regularly scout fields for early pest detection",
];

pub const FERTILIZER_TIPS: [&str; 4] = [
    "Apply fertilizers based on soil test recommendations",
    "Use organic manure to improve soil structure and fertility",
    "Follow recommended NPK ratios for your specific crop",
    "Split fertilizer applications for better nutrient uptake",
];

/// One entry of the disease catalog the vision mock draws from.
#[derive(Debug, Clone, Copy)]
pub struct DiseaseRow {
    pub name: &'static str,
    pub confidence: u8,
    pub severity: Severity,
    pub treatment: &'static str,
}

/// Catalog order matters: a moderate result reports the first entry,
/// a poor result reports both.
pub const DISEASE_CATALOG: [DiseaseRow; 2] = [
    DiseaseRow {
        name: "Leaf Blight",
        confidence: 78,
        severity: Severity::Medium,
        treatment: "Apply fungicide (Mancozeb 75% WP @ 2.5g/liter). Remove infected leaves. Improve air circulation.",
    },
    DiseaseRow {
        name: "Nutrient Deficiency (Nitrogen)",
        confidence: 65,
        severity: Severity::Low,
        treatment: "Apply nitrogen-rich fertilizer (Urea @ 50kg/acre). Consider organic compost application.",
    },
];

/// Condition labels the weather mock samples from.
pub const WEATHER_CONDITIONS: [&str; 5] =
    ["Sunny", "Partly Cloudy", "Cloudy", "Light Rain", "Clear"];

/// Day 2–7 outlook: fixed offsets from the randomized base temperature.
/// Only "Today" carries the sampled condition; the rest never re-randomize.
#[derive(Debug, Clone, Copy)]
pub struct ForecastOffset {
    pub day: &'static str,
    pub temp_offset: i32,
    pub condition: &'static str,
    pub precipitation: u8,
}

pub const FORECAST_OFFSETS: [ForecastOffset; 6] = [
    ForecastOffset { day: "Tomorrow", temp_offset: 2, condition: "Partly Cloudy", precipitation: 20 },
    ForecastOffset { day: "Day 3", temp_offset: -1, condition: "Cloudy", precipitation: 30 },
    ForecastOffset { day: "Day 4", temp_offset: 1, condition: "Sunny", precipitation: 5 },
    ForecastOffset { day: "Day 5", temp_offset: 3, condition: "Clear", precipitation: 0 },
    ForecastOffset { day: "Day 6", temp_offset: 0, condition: "Light Rain", precipitation: 40 },
    ForecastOffset { day: "Day 7", temp_offset: -2, condition: "Partly Cloudy", precipitation: 15 },
];

/// Precipitation chance reported for "Today".
pub const TODAY_PRECIPITATION: u8 = 10;

/// Crop types the vision mock can claim to recognize.
pub const IMAGE_CROP_TYPES: [&str; 6] = ["Wheat", "Rice", "Tomato", "Cotton", "Corn", "Potato"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_soil_falls_back_to_loamy() {
        for season in Season::ALL {
            assert_eq!(
                candidate_crops("volcanic", season),
                candidate_crops("loamy", season)
            );
        }
    }

    #[test]
    fn soil_match_ignores_case() {
        assert_eq!(
            candidate_crops("CLAY", Season::Monsoon),
            candidate_crops("clay", Season::Monsoon)
        );
    }

    #[test]
    fn clay_monsoon_leads_with_rice() {
        assert_eq!(candidate_crops("clay", Season::Monsoon)[0], "Rice");
    }

    #[test]
    fn unknown_crop_gets_default_detail() {
        let d = crop_detail("Turmeric");
        assert_eq!(d.water_requirement, DEFAULT_DETAIL.water_requirement);
        assert_eq!(d.market_price, "₹1500-2500/quintal");
    }

    #[test]
    fn detail_table_covers_rice() {
        assert_eq!(crop_detail("Rice").growth_period, "120-150 days");
    }
}
