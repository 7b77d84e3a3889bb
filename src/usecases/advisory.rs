//! Recommendation derivation and tips lookup. Pure table logic, no I/O.
//!
//! - Ranks the soil/season candidate list with a position-based score
//! - Applies a temperature bonus near the 25°C optimum
//! - Falls back silently for unknown soil types and tip categories

use crate::domain::tables;
use crate::domain::{CropRecommendation, Season};
use tracing::debug;

/// Temperature band treated as "ideal" in recommendation tips.
const IDEAL_TEMP_MIN: i32 = 20;
const IDEAL_TEMP_MAX: i32 = 35;

/// Derive the top 5 crop recommendations for the given conditions.
///
/// Always returns exactly 5 entries, even under soil fallback. Suitability
/// is `min(95, 85 - 5*rank + bonus)` where the bonus is 10 within 5°C of
/// the 25°C optimum — non-increasing by rank except where the cap bites.
pub fn recommend(
    soil_type: &str,
    location: &str,
    season: Season,
    temperature: i32,
) -> Vec<CropRecommendation> {
    let soil = soil_type.to_lowercase();
    let crops = tables::candidate_crops(&soil, season);
    let temp_bonus: u8 = if (temperature - 25).abs() < 5 { 10 } else { 0 };
    debug!(
        soil = %soil,
        location = %location,
        season = %season,
        temperature,
        temp_bonus,
        "deriving crop recommendations"
    );

    let temp_judgment = if temperature > IDEAL_TEMP_MIN && temperature < IDEAL_TEMP_MAX {
        "ideal"
    } else {
        "acceptable"
    };

    crops
        .iter()
        .enumerate()
        .map(|(i, &crop)| {
            let base = 85 - (i as u8) * 5;
            let detail = tables::crop_detail(crop);
            CropRecommendation {
                crop_name: crop.to_string(),
                suitability: (base + temp_bonus).min(95),
                expected_yield: format!("{}-{} quintals/acre", 15 + i * 2, 25 + i * 3),
                water_requirement: detail.water_requirement.to_string(),
                growth_period: detail.growth_period.to_string(),
                market_price: detail.market_price.to_string(),
                tips: vec![
                    format!("Best planting time: {season}"),
                    format!("Optimal for {soil} soil"),
                    format!("Current temperature ({temperature}°C) is {temp_judgment}"),
                ],
            }
        })
        .collect()
}

/// Farming tip category. Anything outside the three known categories
/// resolves to the general list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipCategory {
    Irrigation,
    Pest,
    Fertilizer,
}

impl TipCategory {
    /// Case-insensitive parse; unknown categories yield `None` (general).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "irrigation" => Some(Self::Irrigation),
            "pest" => Some(Self::Pest),
            "fertilizer" => Some(Self::Fertilizer),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Irrigation => "irrigation",
            Self::Pest => "pest",
            Self::Fertilizer => "fertilizer",
        }
    }
}

/// Fixed tip list for a category; `None` means the general list.
pub fn tips_for(category: Option<TipCategory>) -> &'static [&'static str] {
    match category {
        Some(TipCategory::Irrigation) => &tables::IRRIGATION_TIPS,
        Some(TipCategory::Pest) => &tables::PEST_TIPS,
        Some(TipCategory::Fertilizer) => &tables::FERTILIZER_TIPS,
        None => &tables::GENERAL_TIPS,
    }
}

/// String-keyed tips lookup with silent fallback: unknown or absent
/// categories (including "general") return the general list.
pub fn farming_tips(category: Option<&str>) -> &'static [&'static str] {
    tips_for(category.and_then(TipCategory::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_exactly_five() {
        for season in Season::ALL {
            let recs = recommend("clay", "Punjab", season, 28);
            assert_eq!(recs.len(), 5);
        }
    }

    #[test]
    fn suitability_without_bonus_steps_down_by_five() {
        // 40°C is outside the bonus band
        let recs = recommend("loamy", "Nagpur", Season::Summer, 40);
        let scores: Vec<u8> = recs.iter().map(|r| r.suitability).collect();
        assert_eq!(scores, vec![85, 80, 75, 70, 65]);
    }

    #[test]
    fn bonus_at_optimum_caps_top_score_at_95() {
        let recs = recommend("loamy", "Nagpur", Season::Summer, 25);
        let scores: Vec<u8> = recs.iter().map(|r| r.suitability).collect();
        // 85+10 hits the 95 cap exactly; the rest keep their bonus
        assert_eq!(scores, vec![95, 90, 85, 80, 75]);
    }

    #[test]
    fn bonus_band_is_exclusive_at_five_degrees() {
        let with_bonus = recommend("silt", "Indore", Season::Winter, 29);
        let without = recommend("silt", "Indore", Season::Winter, 30);
        assert_eq!(with_bonus[0].suitability, 95);
        assert_eq!(without[0].suitability, 85);
    }

    #[test]
    fn clay_monsoon_at_26_tops_with_rice_at_95() {
        let recs = recommend("clay", "Punjab", Season::Monsoon, 26);
        assert_eq!(recs[0].crop_name, "Rice");
        assert_eq!(recs[0].suitability, 95);
    }

    #[test]
    fn unknown_soil_matches_loamy_output() {
        let fallback = recommend("volcanic", "Pune", Season::Monsoon, 26);
        let loamy = recommend("loamy", "Pune", Season::Monsoon, 26);
        let names: Vec<_> = fallback.iter().map(|r| &r.crop_name).collect();
        let loamy_names: Vec<_> = loamy.iter().map(|r| &r.crop_name).collect();
        assert_eq!(names, loamy_names);
        assert_eq!(fallback[0].suitability, loamy[0].suitability);
    }

    #[test]
    fn expected_yield_depends_on_rank() {
        let recs = recommend("sandy", "Jaipur", Season::Summer, 30);
        assert_eq!(recs[0].expected_yield, "15-25 quintals/acre");
        assert_eq!(recs[4].expected_yield, "23-37 quintals/acre");
    }

    #[test]
    fn crops_outside_detail_table_get_default_band() {
        // clay/monsoon includes Turmeric and Ginger, which have no detail row
        let recs = recommend("clay", "Kochi", Season::Monsoon, 26);
        let turmeric = recs.iter().find(|r| r.crop_name == "Turmeric").unwrap();
        assert_eq!(turmeric.water_requirement, "Medium (500-700mm)");
        assert_eq!(turmeric.market_price, "₹1500-2500/quintal");
    }

    #[test]
    fn tips_reference_season_soil_and_temperature() {
        let recs = recommend("Clay", "Punjab", Season::Monsoon, 26);
        let tips = &recs[0].tips;
        assert_eq!(tips.len(), 3);
        assert_eq!(tips[0], "Best planting time: monsoon");
        assert_eq!(tips[1], "Optimal for clay soil");
        assert_eq!(tips[2], "Current temperature (26°C) is ideal");
    }

    #[test]
    fn temperature_judgment_boundaries() {
        let cold = recommend("loamy", "Shimla", Season::Winter, 20);
        assert!(cold[0].tips[2].ends_with("acceptable"));
        let warm = recommend("loamy", "Shimla", Season::Winter, 21);
        assert!(warm[0].tips[2].ends_with("ideal"));
        let hot = recommend("loamy", "Nagpur", Season::Summer, 35);
        assert!(hot[0].tips[2].ends_with("acceptable"));
    }

    #[test]
    fn pest_tips_have_four_entries() {
        assert_eq!(farming_tips(Some("pest")).len(), 4);
    }

    #[test]
    fn unknown_and_absent_categories_fall_back_to_general() {
        assert_eq!(farming_tips(Some("unknown")).len(), 5);
        assert_eq!(farming_tips(None).len(), 5);
        assert_eq!(farming_tips(Some("unknown")), farming_tips(None));
        assert_eq!(farming_tips(Some("general")), farming_tips(None));
    }

    #[test]
    fn tip_category_parse_ignores_case() {
        assert_eq!(TipCategory::parse("Fertilizer"), Some(TipCategory::Fertilizer));
        assert_eq!(TipCategory::parse("watering"), None);
    }
}
