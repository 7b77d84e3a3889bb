//! Plain-text rendering of chat messages and structured payloads.
//!
//! Pure string building; printing is the REPL's job.

use crate::domain::{
    BotPayload, ChatMessage, CropRecommendation, ImageAnalysisResult, MarketPrice, Sender,
    Severity, Trend, WeatherData,
};

/// Render one transcript entry, payload included.
pub fn render_message(msg: &ChatMessage) -> String {
    let who = match msg.sender {
        Sender::User => "You",
        Sender::Bot => "FarmWise",
    };
    let mut out = format!("{who}: {}\n", msg.text);
    if let Some(ref payload) = msg.payload {
        out.push('\n');
        out.push_str(&render_payload(payload));
    }
    out
}

fn render_payload(payload: &BotPayload) -> String {
    match payload {
        BotPayload::Recommendations(recs) => render_recommendations(recs),
        BotPayload::Weather(weather) => render_weather(weather),
        BotPayload::Prices(prices) => render_prices(prices),
        BotPayload::Analysis(result) => render_analysis(result),
        BotPayload::Tips { category, tips } => render_tips(category, tips),
    }
}

fn render_recommendations(recs: &[CropRecommendation]) -> String {
    let mut out = String::new();
    for (i, rec) in recs.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} — suitability {}%\n",
            i + 1,
            rec.crop_name,
            rec.suitability
        ));
        out.push_str(&format!("     Expected yield: {}\n", rec.expected_yield));
        out.push_str(&format!("     Water: {}\n", rec.water_requirement));
        out.push_str(&format!("     Growth period: {}\n", rec.growth_period));
        out.push_str(&format!("     Market price: {}\n", rec.market_price));
        for tip in &rec.tips {
            out.push_str(&format!("     - {tip}\n"));
        }
    }
    out
}

fn render_weather(weather: &WeatherData) -> String {
    let mut out = format!(
        "  {} — {}°C, {}\n  Humidity {}% | Rainfall {:.1}mm\n  7-day outlook:\n",
        weather.location, weather.temperature, weather.condition, weather.humidity,
        weather.rainfall
    );
    for day in &weather.forecast {
        out.push_str(&format!(
            "    {:<9} {:>3}°C  {:<14} rain {}%\n",
            day.day, day.temp, day.condition, day.precipitation
        ));
    }
    out
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}

fn render_prices(prices: &[MarketPrice]) -> String {
    let mut out = String::new();
    for p in prices {
        out.push_str(&format!(
            "  {:<10} {:>5} {:<10} {} {:+.1}%\n",
            p.crop,
            p.price,
            p.unit,
            trend_arrow(p.trend),
            p.change
        ));
    }
    out
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "low",
        Severity::Medium => "medium",
        Severity::High => "high",
    }
}

fn render_analysis(result: &ImageAnalysisResult) -> String {
    let mut out = format!(
        "  Crop: {} | Status: {} | Health score: {}%\n",
        result.crop_type, result.health_status, result.health_score
    );
    for d in &result.diseases {
        out.push_str(&format!(
            "  ! {} ({}% confidence, {} severity)\n    Treatment: {}\n",
            d.name,
            d.confidence,
            severity_label(d.severity),
            d.treatment
        ));
    }
    out.push_str("  Recommendations:\n");
    for r in &result.recommendations {
        out.push_str(&format!("    - {r}\n"));
    }
    out
}

fn render_tips(category: &str, tips: &[String]) -> String {
    let mut out = format!("  {category} tips:\n");
    for tip in tips {
        out.push_str(&format!("    - {tip}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn renders_price_board_with_trend_arrows() {
        let msg = ChatMessage {
            id: 1,
            text: "prices".to_string(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            payload: Some(BotPayload::Prices(vec![MarketPrice {
                crop: "Wheat".to_string(),
                price: 2050,
                unit: "₹/quintal".to_string(),
                trend: Trend::Up,
                change: 3.2,
            }])),
        };
        let out = render_message(&msg);
        assert!(out.contains("FarmWise: prices"));
        assert!(out.contains("Wheat"));
        assert!(out.contains("↑"));
        assert!(out.contains("+3.2%"));
    }

    #[test]
    fn renders_all_forecast_days() {
        use crate::domain::ForecastDay;
        let forecast: Vec<ForecastDay> = (0..7)
            .map(|i| ForecastDay {
                day: format!("Day {}", i + 1),
                temp: 25,
                condition: "Sunny".to_string(),
                precipitation: 5,
            })
            .collect();
        let msg = ChatMessage {
            id: 2,
            text: "weather".to_string(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            payload: Some(BotPayload::Weather(WeatherData {
                location: "Pune".to_string(),
                temperature: 25,
                condition: "Sunny".to_string(),
                humidity: 60,
                rainfall: 1.5,
                forecast,
            })),
        };
        let out = render_message(&msg);
        for i in 1..=7 {
            assert!(out.contains(&format!("Day {i}")));
        }
    }
}
