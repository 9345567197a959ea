//! # Lifecycle
//!
//! Startup, seeding, logging and shutdown of the inventory.

mod inventory_system;
pub mod seed;
pub mod tracing;

pub use self::inventory_system::InventorySystem;
pub use self::seed::demo_catalog;
pub use self::tracing::setup_tracing;
