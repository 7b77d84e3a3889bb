//! Mock weather source. Randomized current conditions, fixed-offset outlook.
//!
//! Stands in for a real forecast API: only "Today" is sampled; days 2–7
//! are fixed offsets from the base temperature.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::tables::{FORECAST_OFFSETS, TODAY_PRECIPITATION, WEATHER_CONDITIONS};
use crate::domain::{DomainError, ForecastDay, WeatherData};
use crate::ports::WeatherPort;

/// Mock weather adapter. Regenerates conditions on every call and
/// simulates network latency with a configurable delay.
pub struct MockWeatherAdapter {
    delay_ms: u64,
    rng: Mutex<StdRng>,
}

impl MockWeatherAdapter {
    /// Entropy-seeded adapter with the default delay (1000ms).
    pub fn new() -> Self {
        Self::with_delay(1000)
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic adapter for tests and reproducible demos.
    pub fn seeded(seed: u64, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockWeatherAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WeatherPort for MockWeatherAdapter {
    async fn current(&self, location: &str) -> Result<WeatherData, DomainError> {
        info!(location = %location, "[MOCK] simulating weather lookup");
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        let (base_temp, condition, humidity, rainfall) = {
            let mut rng = self.rng.lock().await;
            let base_temp: i32 = rng.gen_range(22..34);
            let condition = *WEATHER_CONDITIONS.choose(&mut *rng).unwrap_or(&"Sunny");
            let humidity: u8 = rng.gen_range(55..85);
            let rainfall: f64 = rng.gen_range(0.0..10.0);
            (base_temp, condition, humidity, rainfall)
        };

        let mut forecast = Vec::with_capacity(7);
        forecast.push(ForecastDay {
            day: "Today".to_string(),
            temp: base_temp,
            condition: condition.to_string(),
            precipitation: TODAY_PRECIPITATION,
        });
        for row in FORECAST_OFFSETS {
            forecast.push(ForecastDay {
                day: row.day.to_string(),
                temp: base_temp + row.temp_offset,
                condition: row.condition.to_string(),
                precipitation: row.precipitation,
            });
        }

        Ok(WeatherData {
            location: location.to_string(),
            temperature: base_temp,
            condition: condition.to_string(),
            humidity,
            rainfall,
            forecast,
        })
    }
}
