//! # Order Actor
//!
//! Stores placed orders and prices them on creation.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction::Advance`] for status changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor is created without dependencies and receives the catalog clients
//! when it is started:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(&config);
//! tokio::spawn(order_actor.run((beverage_client.clone(), condiment_client.clone())));
//! ```
//!
//! ## History
//!
//! Order ids come from the actor's sequence counter, so the store is ordered
//! oldest first. The actor keeps `history_capacity` orders and drops the oldest
//! when a new one pushes it over.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::config::VendingConfig;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(config: &VendingConfig) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(config.channel_buffer);
    let actor = actor.with_capacity_limit(config.history_capacity);
    (actor, OrderClient::new(generic_client))
}
