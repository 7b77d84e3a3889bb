//! Wiring & DI. Entry point: bootstrap adapters, inject into the session,
//! run the chat REPL. No business logic here.

use std::sync::Arc;

use dotenv::dotenv;
use farmwise::adapters::mock::{MockMarketAdapter, MockVisionAdapter, MockWeatherAdapter};
use farmwise::adapters::ui::ReplAdapter;
use farmwise::ports::{CropVisionPort, InputPort, MarketPort, WeatherPort};
use farmwise::shared::config::AppConfig;
use farmwise::usecases::{ChatSession, Delays};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = AppConfig::load().unwrap_or_default();

    farmwise::adapters::ui::init_ui();

    // --- Mock advisory sources (no real APIs behind this app) ---
    let weather: Arc<dyn WeatherPort> = match cfg.rng_seed {
        Some(seed) => {
            info!(seed, "seeded RNG for reproducible session");
            Arc::new(MockWeatherAdapter::seeded(
                seed,
                cfg.weather_delay_ms_or_default(),
            ))
        }
        None => Arc::new(MockWeatherAdapter::with_delay(
            cfg.weather_delay_ms_or_default(),
        )),
    };
    let market: Arc<dyn MarketPort> =
        Arc::new(MockMarketAdapter::with_delay(cfg.market_delay_ms_or_default()));
    let vision: Arc<dyn CropVisionPort> = match cfg.rng_seed {
        Some(seed) => Arc::new(MockVisionAdapter::seeded(
            seed,
            cfg.analysis_delay_ms_or_default(),
        )),
        None => Arc::new(MockVisionAdapter::with_delay(
            cfg.analysis_delay_ms_or_default(),
        )),
    };

    let delays = Delays {
        reply_ms: cfg.reply_delay_ms_or_default(),
        tips_ms: cfg.tips_delay_ms_or_default(),
        form_ms: cfg.form_delay_ms_or_default(),
    };

    let session = ChatSession::new(weather, market, vision, delays);
    let input: Arc<dyn InputPort> = Arc::new(ReplAdapter::new(session));

    input.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
