//! Pure data structures managed by the actor framework.

pub mod part;

pub use part::*;
