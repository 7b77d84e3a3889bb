//! Application configuration. Latency knobs and RNG seed.

use serde::Deserialize;

/// Default simulated analysis latency for the vision mock, in ms.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Delay in ms before a free-text reply. Read from FARMWISE_REPLY_DELAY_MS.
    #[serde(default)]
    pub reply_delay_ms: Option<u64>,

    /// Delay in ms before a tips reply. Read from FARMWISE_TIPS_DELAY_MS.
    #[serde(default)]
    pub tips_delay_ms: Option<u64>,

    /// Delay in ms before a crop-form reply. Read from FARMWISE_FORM_DELAY_MS.
    #[serde(default)]
    pub form_delay_ms: Option<u64>,

    /// Simulated weather lookup latency in ms. Read from FARMWISE_WEATHER_DELAY_MS.
    #[serde(default)]
    pub weather_delay_ms: Option<u64>,

    /// Simulated price board latency in ms. Read from FARMWISE_MARKET_DELAY_MS.
    #[serde(default)]
    pub market_delay_ms: Option<u64>,

    /// Simulated image analysis latency in ms (default 2000). Read from
    /// FARMWISE_ANALYSIS_DELAY_MS.
    #[serde(default)]
    pub analysis_delay_ms: Option<u64>,

    /// Optional RNG seed for reproducible demo sessions. Read from
    /// FARMWISE_RNG_SEED. Unset = entropy-seeded.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        // Env values arrive as strings; try_parsing turns them into numbers
        c = c.add_source(config::Environment::with_prefix("FARMWISE").try_parsing(true));
        if let Ok(path) = std::env::var("FARMWISE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn reply_delay_ms_or_default(&self) -> u64 {
        self.reply_delay_ms.unwrap_or(1000)
    }

    pub fn tips_delay_ms_or_default(&self) -> u64 {
        self.tips_delay_ms.unwrap_or(800)
    }

    pub fn form_delay_ms_or_default(&self) -> u64 {
        self.form_delay_ms.unwrap_or(1500)
    }

    pub fn weather_delay_ms_or_default(&self) -> u64 {
        self.weather_delay_ms.unwrap_or(1000)
    }

    pub fn market_delay_ms_or_default(&self) -> u64 {
        self.market_delay_ms.unwrap_or(1000)
    }

    pub fn analysis_delay_ms_or_default(&self) -> u64 {
        self.analysis_delay_ms.unwrap_or(DEFAULT_ANALYSIS_DELAY_MS)
    }
}
