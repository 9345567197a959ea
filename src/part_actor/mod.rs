//! # Part Actor
//!
//! The in-memory record store for vehicle parts: a [`ResourceActor`] over
//! [`VehiclePart`] that owns every record and applies creates and stock updates
//! one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`VehiclePart`]
//! - [`error`] - [`PartError`], the error taxonomy shared by the store and the service
//! - [`new()`] - Factory that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use parts_inventory::clients::PartClient;
//! use parts_inventory::model::NewPart;
//! use parts_inventory::part_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = part_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let part = client
//!         .create_part(NewPart::new("Oil Filter", "Engine", "Toyota Camry 2020", 5, 20))
//!         .await?;
//!     client.set_stock(part.id.clone(), 25).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PartClient;
use crate::framework::ResourceActor;
use crate::model::{PartId, VehiclePart};

/// Creates a new part actor and its client. IDs are random UUIDs.
pub fn new(buffer_size: usize) -> (ResourceActor<VehiclePart>, PartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, PartId::generate);
    (actor, PartClient::new(generic_client))
}
