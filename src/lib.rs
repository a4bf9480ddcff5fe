//! # Vending Machine
//!
//! The ordering side of a drinks vending machine: pick a beverage, add
//! condiments, see the price and calories, pay, and watch it pour.
//!
//! ## 🏗️ Layers
//!
//! ### Selection ([`composer`])
//! [`OrderComposer`](composer::OrderComposer) owns the selection and prices it.
//! It is plain synchronous code with no I/O, so every selection rule is tested
//! directly.
//!
//! ### Screen controller ([`session`])
//! [`VendingSession`](session::VendingSession) drives the machine through
//! `ready -> selecting -> processing -> dispensing -> ready`. It is the only
//! place that talks to the backend, through the [`VendingApi`](clients::VendingApi)
//! trait.
//!
//! ### Backend ([`catalog_actor`], [`order_actor`], [`lifecycle`])
//! The menu and the placed orders live in resource actors built on
//! [`actor_framework`]. [`VendingSystem`](lifecycle::VendingSystem) starts and
//! wires them; [`LocalVendingApi`](clients::LocalVendingApi) serves the
//! `VendingApi` from them.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use vending_machine::config::VendingConfig;
//! use vending_machine::lifecycle::VendingSystem;
//! use vending_machine::session::VendingSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VendingConfig { dispense_delay_ms: 0, ..VendingConfig::default() };
//!     let system = VendingSystem::new(&config).await?;
//!     let mut session = VendingSession::start(system.api(), &config).await;
//!
//!     session.composer_mut().select_beverage("latte");
//!     session.composer_mut().set_condiment_quantity("vanilla", 2);
//!     let order = session.submit().await?;
//!     assert_eq!(order.items.len(), 2);
//!
//!     session.dispense().await;
//!     drop(session);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## 👩‍💻 Notes
//!
//! - Each component has its own `thiserror` enum. Nothing on the selection path
//!   is fatal: every error leaves a selection the user can fix or resubmit.
//! - Logging goes through `tracing`; call
//!   [`setup_tracing`](lifecycle::setup_tracing) once and filter with `RUST_LOG`.
//! - Client wrappers are tested against [`actor_framework::mock`], the order
//!   actor against mocked catalogs, and the whole flow in `tests/`.

pub mod catalog_actor;
pub mod clients;
pub mod composer;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod recommendation;
pub mod session;
