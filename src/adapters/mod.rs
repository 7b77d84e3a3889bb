//! Infrastructure adapters. Implement ports.
//!
//! Mock advisory sources and the terminal front-end. Map errors to
//! DomainError.

pub mod mock;
pub mod ui;
