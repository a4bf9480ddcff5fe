//! # ActorEntity Trait
//!
//! The contract every resource (beverage, condiment, order, ...) implements to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor). It names the
//! id, DTO, action, context and error types, decides how ids are assigned, and
//! exposes the lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`).
//!
//! # Id Assignment
//! Some resources are keyed by a natural id chosen by the caller (a catalog entry
//! such as `"latte"`), others by a sequence number handed out by the actor (an
//! order). [`ActorEntity::assign_id`] receives both the next sequence number and
//! the create payload, so each entity picks whichever applies. The actor rejects
//! a create whose id is already stored.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` type is injected
/// into every hook when the actor is started with `run(context)`, which lets an
/// order actor hold catalog clients that were created alongside it.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique, ordered identifier. Ordering drives `list` output and eviction.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `Quote`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients match on a single
    /// type, at the cost of every operation sharing the same set of variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Picks the id for a new instance.
    ///
    /// `seq` starts at 1 and increases with every create request the actor sees,
    /// wrapping to 0 after `u32::MAX`.
    fn assign_id(seq: u32, params: &Self::Create) -> Self::Id;

    /// Construct the full entity from the id and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
