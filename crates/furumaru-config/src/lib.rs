//! # Furumaru Config
//!
//! Configuration management for the user gateway.
//! Supports layered configuration from files and environment variables,
//! validated before use.

mod gateway_config;
mod loader;
mod validation;

pub use gateway_config::*;
pub use loader::*;
pub use validation::*;
