//! Domain errors. Used by ports and use cases.
//!
//! The advisory core itself is fail-soft (unknown table keys fall back to
//! defaults); these cover the port and UI boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("weather service error: {0}")]
    Weather(String),

    #[error("market service error: {0}")]
    Market(String),

    #[error("vision service error: {0}")]
    Vision(String),

    #[error("image read failed: {0}")]
    Image(String),

    #[error("prompt error: {0}")]
    Ui(String),
}
