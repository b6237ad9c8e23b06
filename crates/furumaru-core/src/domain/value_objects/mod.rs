//! Value objects shared across entities.

mod prefecture;

pub use prefecture::*;
