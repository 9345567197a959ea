//! # Parts Inventory
//!
//! > **Stock tracking and restock alerts for vehicle service parts.**
//!
//! Each part record carries a stock count and a minimum stock level. A part whose
//! stock falls below its minimum shows up as a restock alert. Records live in an
//! in-memory store owned by a single Tokio actor, so concurrent creates and stock
//! updates are applied one at a time and never lose a write.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that owns a collection of entities and serves
//! Create/Get/List/Update requests sequentially.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`MockClient`](framework::mock::MockClient).
//!
//! ### 2. The Record Store ([`part_actor`], [`clients`], [`store`])
//! [`VehiclePart`](model::VehiclePart) plugged into the engine, wrapped in a typed
//! [`PartClient`](clients::PartClient) and exposed through the [`PartStore`](store::PartStore) trait.
//!
//! ### 3. The Rules ([`service`])
//! [`InventoryService`](service::InventoryService) validates input, filters by ID and
//! derives restock alerts. It works against any `PartStore`.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Starts the actor, seeds the demo catalogue, sets up logging and shuts everything down.
//! - **Key items**: [`InventorySystem`](lifecycle::InventorySystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 5. The Edge ([`http`], [`config`])
//! An axum JSON API and the layered configuration that drives the binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Serve on 0.0.0.0:8000 with the demo catalogue
//! RUST_LOG=info cargo run -- --seed
//!
//! curl localhost:8000/api/alerts
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod part_actor;
pub mod service;
pub mod store;
