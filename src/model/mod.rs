//! Plain data records shared by the composer, the session and the backend actors.
//!
//! [`Beverage`], [`Condiment`] and [`Order`] are also resource entities: their
//! [`ActorEntity`](actor_framework::ActorEntity) implementations live with the
//! actor that owns them (`catalog_actor`, `order_actor`).

pub mod beverage;
pub mod catalog;
pub mod condiment;
pub mod order;
pub mod recommendation;

pub use beverage::*;
pub use catalog::*;
pub use condiment::*;
pub use order::*;
pub use recommendation::*;
