//! Shared infrastructure helpers.

pub mod config;
