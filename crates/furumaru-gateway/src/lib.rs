//! # Furumaru Gateway
//!
//! The user-facing gateway layer: response types consumed by the client
//! application and the mappers that build them from domain entities.
//!
//! - [`types`] holds the flat JSON/XML response shapes.
//! - [`service`] wraps each response with a constructor taking the domain
//!   entity and the small aggregation helpers handlers need (grouping,
//!   unique IDs, sorting, price calculation).

pub mod openapi;
pub mod service;
pub mod types;

pub use openapi::GatewayApiDoc;
