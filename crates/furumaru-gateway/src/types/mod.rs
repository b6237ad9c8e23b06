//! Response types.
//!
//! Every struct serializes with camelCase keys. Enumerations serialize as
//! integers; `0` is always `Unknown` and any unrecognised integer decodes
//! back to it.

/// Declares an integer-backed response enum with an implicit `Unknown = 0`.
macro_rules! response_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(from = "i32", into = "i32")]
        pub enum $name {
            #[default]
            Unknown = 0,
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    _ => Self::Unknown,
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value as i32
            }
        }
    };
}

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
