//! # Generic Messages
//!
//! The request type exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// # Resource-Oriented Architecture
/// Instead of ad-hoc messages per operation, every resource speaks the same small
/// vocabulary:
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`] and returns it,
///   including the identifier the actor assigned.
/// - **Get**: fetches one entity by ID.
/// - **List**: returns every entity in insertion order.
/// - **Update**: applies [`ActorEntity::Update`] to an existing entity and returns the result.
///
/// The enum is generic over `T: ActorEntity`, so a part payload can never be sent
/// to an actor managing something else.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
