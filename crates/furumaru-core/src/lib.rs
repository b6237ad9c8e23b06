//! # Furumaru Core
//!
//! Core types shared by the Furumaru user gateway: the unified error type,
//! logging initialisation, and the domain entities the gateway maps into
//! client-facing responses.

pub mod domain;
pub mod error;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use telemetry::*;
