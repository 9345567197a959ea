use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

use crate::clients::PartClient;
use crate::config::InventoryConfig;
use crate::lifecycle::seed::demo_catalog;
use crate::part_actor::{self, PartError};
use crate::service::InventoryService;

/// Runtime orchestrator for the inventory.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: starting the part actor and stopping it again
/// - **Dependency Wiring**: handing the actor's client to the [`InventoryService`]
/// - **Seeding**: loading the demo catalogue when configured
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::start(&config.inventory).await?;
/// let service = system.service();
/// service.list_restock_alerts().await?;
///
/// // Every service clone must be dropped before shutdown returns.
/// drop(service);
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    service: InventoryService<PartClient>,
    handle: JoinHandle<()>,
}

impl InventorySystem {
    /// Spawns the part actor and, if `seed_demo_catalog` is set, loads the demo parts.
    pub async fn start(config: &InventoryConfig) -> Result<Self, PartError> {
        let (actor, client) = part_actor::new(config.buffer_size);
        let handle = tokio::spawn(actor.run());
        let service = InventoryService::new(client);

        if config.seed_demo_catalog {
            let catalog = demo_catalog();
            let count = catalog.len();
            for part in catalog {
                service.add_part(part).await?;
            }
            info!(count, "Seeded demo catalog");
        }

        info!(buffer_size = config.buffer_size, "Inventory system started");
        Ok(Self { service, handle })
    }

    /// A handle to the service. Clones share the same store.
    pub fn service(&self) -> InventoryService<PartClient> {
        self.service.clone()
    }

    /// Gracefully shuts down the store.
    ///
    /// Dropping the last client closes the actor's channel; the actor then drains
    /// any queued requests and exits. Service clones handed out by [`service`](Self::service)
    /// keep the actor alive, so drop them first.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down inventory...");
        drop(self.service);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Part actor task failed");
            return Err(e);
        }

        info!("Inventory shutdown complete.");
        Ok(())
    }
}
