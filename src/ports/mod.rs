//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into advisory data sources

pub mod inbound;
pub mod outbound;

pub use inbound::InputPort;
pub use outbound::{CropVisionPort, MarketPort, WeatherPort};
