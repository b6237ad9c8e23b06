//! Entity-to-response mappers.
//!
//! Each wrapper owns the response it renders, built once from the domain
//! entity by `new`. Collection wrappers dereference to slices and preserve the
//! order and length of their input.

mod address;
mod cart;
mod category;
mod coordinator;
mod experience;
mod merchant_center;
mod order;
mod producer;
mod product;
mod promotion;
mod review;
mod schedule;
mod spot;
mod user;
mod video;

pub use address::*;
pub use cart::*;
pub use category::*;
pub use coordinator::*;
pub use experience::*;
pub use merchant_center::*;
pub use order::*;
pub use producer::*;
pub use product::*;
pub use promotion::*;
pub use review::*;
pub use schedule::*;
pub use spot::*;
pub use user::*;
pub use video::*;

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::hash::Hash;

/// Unix seconds.
pub(crate) fn unix(at: &DateTime<Utc>) -> i64 {
    at.timestamp()
}

/// Unix seconds, `0` when unset.
pub(crate) fn unix_opt(at: Option<&DateTime<Utc>>) -> i64 {
    at.map_or(0, unix)
}

/// Distinct values in first-seen order.
pub(crate) fn unique<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
