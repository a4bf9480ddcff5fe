//! # Catalog Actors
//!
//! Two resource actors hold the menu: one for [`Beverage`]s, one for
//! [`Condiment`]s. They share the action set ([`CatalogAction::Quote`]) and the
//! error type ([`CatalogError`]).
//!
//! ## Structure
//!
//! - [`beverage`] and [`condiment`] - [`ActorEntity`](actor_framework::ActorEntity) implementations
//! - [`actions`] - [`CatalogAction`] and [`CatalogQuote`]
//! - [`error`] - [`CatalogError`]
//!
//! ## Usage
//!
//! ```rust
//! use vending_machine::catalog_actor;
//! use vending_machine::clients::BeverageClient;
//! use vending_machine::config::VendingConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VendingConfig::default();
//!     let (actor, generic_client) = catalog_actor::new_beverages(&config);
//!     let client = BeverageClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     for beverage in config.beverages.clone() {
//!         client.add_beverage(beverage).await?;
//!     }
//!     let quote = client.quote("latte".into(), 1).await?;
//!     assert_eq!(quote.name, "Latte");
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod beverage;
pub mod condiment;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::config::VendingConfig;
use crate::model::{Beverage, Condiment};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the beverage catalog actor and its client.
pub fn new_beverages(config: &VendingConfig) -> (ResourceActor<Beverage>, ResourceClient<Beverage>) {
    ResourceActor::new(config.channel_buffer)
}

/// Creates the condiment catalog actor and its client.
pub fn new_condiments(
    config: &VendingConfig,
) -> (ResourceActor<Condiment>, ResourceClient<Condiment>) {
    ResourceActor::new(config.channel_buffer)
}
