//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod part_client;

pub use actor_client::*;
pub use part_client::*;
