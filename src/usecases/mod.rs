//! Application use cases. Orchestrate domain logic via ports.

pub mod advisory;
pub mod intent;
pub mod session;

pub use advisory::TipCategory;
pub use intent::Intent;
pub use session::{ChatSession, Delays, Dispatch, QuickAction, SessionMode};
