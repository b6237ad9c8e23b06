//! # Domain
//!
//! Entities and value objects produced by the Furumaru domain services.
//! The gateway never mutates them; it only reads them to build responses.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
