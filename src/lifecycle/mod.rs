//! # System Lifecycle
//!
//! Starts, wires and stops the backend actors.
//!
//! ## Wiring
//!
//! Actors are created first, without dependencies, and receive them when they
//! are started:
//!
//! ```rust,ignore
//! let (beverage_actor, beverage_client) = catalog_actor::new_beverages(&config);
//! let (condiment_actor, condiment_client) = catalog_actor::new_condiments(&config);
//! let (order_actor, order_client) = order_actor::new(&config);
//!
//! tokio::spawn(beverage_actor.run(()));
//! tokio::spawn(condiment_actor.run(()));
//! tokio::spawn(order_actor.run((beverage_client.clone(), condiment_client.clone())));
//! ```
//!
//! The order actor depends on the catalogs and nothing depends on the order
//! actor, so the graph is acyclic and channel closure is enough to stop it.
//!
//! ## Shutdown
//!
//! [`VendingSystem::shutdown`] drops the order client and waits for the order
//! actor, which releases its catalog clients; then it does the same for the
//! catalogs. Any [`LocalVendingApi`](crate::clients::LocalVendingApi) (and so
//! any session) handed out by [`VendingSystem::api`] must be dropped first, or
//! the actors keep running.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the log subscriber; see
//! [`actor_framework::tracing`] for the filter syntax.

pub mod vending_system;

pub use actor_framework::tracing::setup_tracing;
pub use vending_system::*;
