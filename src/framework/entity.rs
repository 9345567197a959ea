//! # ActorEntity Trait
//!
//! The contract every resource managed by a [`ResourceActor`](crate::framework::ResourceActor)
//! must satisfy. It names the identifier, the creation and update payloads, and the
//! entity's own error type, and provides the hooks the actor calls while it holds
//! exclusive access to the store.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Architecture Note
/// The actor loop is written once against this trait. Associated types keep each
/// resource's payloads apart: a `VehiclePart` actor only accepts a `NewPart` on
/// create, and the compiler rejects anything else.
///
/// Both hooks run inside the actor task, one request at a time. A hook that returns
/// an error leaves the store untouched, which is where entities enforce their
/// invariants.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., a UUID-backed newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// Errors travel back to the client boxed inside
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError);
    /// resource clients downcast them to recover the typed value.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from its freshly generated ID and the payload.
    ///
    /// Returning an error rejects the create; nothing is inserted.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update to the entity in place.
    ///
    /// Implementations must validate before mutating so a failed update never leaves
    /// a half-applied record behind.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
