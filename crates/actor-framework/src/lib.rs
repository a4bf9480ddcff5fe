//! # Actor Framework
//!
//! Resource actors for the vending machine backend. Each resource type (the
//! beverage catalog, the condiment catalog, placed orders) is owned by one
//! [`ResourceActor`] running on its own Tokio task, and is reached through a
//! cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the business rules: how ids are assigned,
//!    what a create/update payload looks like, which actions exist.
//! 2. **Runtime** ([`ResourceActor`]) - the mailbox loop, the store, logging.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/reply calls.
//!
//! Every actor understands the same requests: create, get, list, update, delete,
//! and entity-specific actions. Messages are processed one at a time, so entity
//! state needs no lock.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Cup { id: u32, size: String }
//! #[derive(Debug)] struct CupCreate { size: String }
//! #[derive(Debug)] struct CupError;
//! impl std::fmt::Display for CupError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "cup error") }
//! }
//! impl std::error::Error for CupError {}
//!
//! #[async_trait]
//! impl ActorEntity for Cup {
//!     type Id = u32; type Create = CupCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Context = (); type Error = CupError;
//!
//!     fn assign_id(seq: u32, _: &CupCreate) -> u32 { seq }
//!     fn from_create_params(id: u32, p: CupCreate) -> Result<Self, CupError> {
//!         Ok(Self { id, size: p.size })
//!     }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), CupError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), CupError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Cup>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CupCreate { size: "large".into() }).await.unwrap();
//!     let cup = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(cup.size, "large");
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)`, not to `new()`. The order actor is
//! started with the two catalog clients so its `on_create` hook can price the
//! order, while the catalog actors run with `()`.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`] for scripted replies and
//! [`mock::create_mock_client`] for inspecting requests by hand.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
