//! Mock crop vision service. Randomized health verdicts on any image.
//!
//! The image bytes are never decoded; the result is sampled from fixed
//! candidate sets. Disease count is a function of the sampled status:
//! healthy → 0, moderate → 1, poor → 2, always in catalog order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::tables::{DISEASE_CATALOG, IMAGE_CROP_TYPES};
use crate::domain::{Disease, DomainError, HealthStatus, ImageAnalysisResult};
use crate::ports::CropVisionPort;

const STATUS_POOL: [HealthStatus; 3] = [
    HealthStatus::Healthy,
    HealthStatus::Moderate,
    HealthStatus::Poor,
];

/// Mock vision adapter. Simulates analysis latency (default 2000ms) and
/// fabricates a plausible health report.
pub struct MockVisionAdapter {
    delay_ms: u64,
    rng: Mutex<StdRng>,
}

impl MockVisionAdapter {
    /// Entropy-seeded adapter with the default analysis delay (2000ms).
    pub fn new() -> Self {
        Self::with_delay(2000)
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

impl Default for MockVisionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CropVisionPort for MockVisionAdapter {
    async fn analyze(&self, image: &[u8]) -> Result<ImageAnalysisResult, DomainError> {
        info!(bytes = image.len(), "[MOCK] simulating crop image analysis");
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        let (crop_type, health_status, health_score) = {
            let mut rng = self.rng.lock().await;
            let crop_type = *IMAGE_CROP_TYPES.choose(&mut *rng).unwrap_or(&"Wheat");
            let health_status = *STATUS_POOL.choose(&mut *rng).unwrap_or(&HealthStatus::Healthy);
            let score: f64 = match health_status {
                HealthStatus::Healthy => rng.gen_range(85.0..95.0),
                HealthStatus::Moderate => rng.gen_range(60.0..80.0),
                HealthStatus::Poor => rng.gen_range(40.0..55.0),
            };
            (crop_type, health_status, score.round() as u8)
        };

        let disease_count = match health_status {
            HealthStatus::Healthy => 0,
            HealthStatus::Moderate => 1,
            HealthStatus::Poor => 2,
        };
        let diseases: Vec<Disease> = DISEASE_CATALOG
            .iter()
            .take(disease_count)
            .map(|row| Disease {
                name: row.name.to_string(),
                confidence: row.confidence,
                severity: row.severity,
                treatment: row.treatment.to_string(),
            })
            .collect();

        let healthy = health_status == HealthStatus::Healthy;
        let recommendations = vec![
            format!("This appears to be {crop_type} in {health_status} condition"),
            if healthy {
                "Continue current care practices. Monitor regularly for any changes.".to_string()
            } else {
                "Immediate attention recommended. Follow treatment guidelines.".to_string()
            },
            "Ensure proper irrigation schedule".to_string(),
            "Monitor for pest activity".to_string(),
            if healthy {
                "Maintain current nutrient management".to_string()
            } else {
                "Consider soil testing for nutrient analysis".to_string()
            },
        ];

        Ok(ImageAnalysisResult {
            crop_type: crop_type.to_string(),
            health_status,
            health_score,
            diseases,
            recommendations,
        })
    }
}
