//! Domain entities consumed by the gateway.

mod address;
mod cart;
mod category;
mod coordinator;
mod experience;
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
pub use order::*;
pub use producer::*;
pub use product::*;
pub use promotion::*;
pub use review::*;
pub use schedule::*;
pub use spot::*;
pub use user::*;
pub use video::*;
