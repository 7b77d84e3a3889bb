//! Mock advisory adapters. Implement the outbound ports with synthetic
//! data and simulated latency — no external APIs, no inference.

pub mod market;
pub mod vision;
pub mod weather;

pub use market::MockMarketAdapter;
pub use vision::MockVisionAdapter;
pub use weather::MockWeatherAdapter;
