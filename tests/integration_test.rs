use parts_inventory::config::InventoryConfig;
use parts_inventory::lifecycle::InventorySystem;
use parts_inventory::model::{NewPart, PartId};
use parts_inventory::part_actor::PartError;

fn config(seed: bool) -> InventoryConfig {
    InventoryConfig {
        seed_demo_catalog: seed,
        ..InventoryConfig::default()
    }
}

/// Full end-to-end run with the real part actor.
#[tokio::test]
async fn test_full_inventory_flow() {
    let system = InventorySystem::start(&config(false))
        .await
        .expect("Failed to start system");
    let service = system.service();

    let part = service
        .add_part(NewPart::new("Oil Filter", "Engine", "Toyota Camry 2020", 5, 20))
        .await
        .expect("Failed to add part");
    assert_eq!(part.stock, 5);

    let alerts = service.list_restock_alerts().await.expect("Failed to list alerts");
    assert_eq!(alerts, vec![part.clone()]);

    let updated = service
        .update_stock(&part.id, 25)
        .await
        .expect("Failed to update stock");
    assert_eq!(updated.stock, 25);
    assert!(service.list_restock_alerts().await.unwrap().is_empty());

    let fetched = service.get_part(&part.id).await.expect("Failed to get part");
    assert_eq!(fetched, updated);

    let err = service
        .add_part(NewPart::new("Brake Pad", "Brake", "All Models", -1, 10))
        .await
        .unwrap_err();
    assert!(matches!(err, PartError::NegativeQuantity { field: "stock", .. }));
    assert_eq!(service.list_parts(None).await.unwrap().len(), 1);

    drop(service);
    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_seeded_catalog_alerts() {
    let system = InventorySystem::start(&config(true)).await.unwrap();
    let service = system.service();

    let parts = service.list_parts(None).await.unwrap();
    assert_eq!(parts.len(), 7);
    assert_eq!(parts[0].name, "Oil Filter");
    assert_eq!(parts[6].name, "Cabin Filter");

    let names: Vec<String> = service
        .list_restock_alerts()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["AC Filter", "Spark Plug (4-pack)", "Cabin Filter"]);

    drop(service);
    system.shutdown().await.unwrap();
}

/// Concurrent writers through cloned services never lose an update.
#[tokio::test]
async fn test_concurrent_writes_are_serialized() {
    let system = InventorySystem::start(&config(false)).await.unwrap();
    let service = system.service();

    let mut adds = Vec::new();
    for i in 0..50 {
        let service = service.clone();
        adds.push(tokio::spawn(async move {
            service
                .add_part(NewPart::new(format!("Part {i}"), "Engine", "All Models", i, 25))
                .await
        }));
    }
    let mut ids = Vec::new();
    for handle in adds {
        ids.push(handle.await.unwrap().unwrap().id);
    }

    let mut unique = ids.clone();
    unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    unique.dedup();
    assert_eq!(unique.len(), 50);

    let mut updates = Vec::new();
    for id in ids.iter().cloned() {
        let service = service.clone();
        updates.push(tokio::spawn(async move { service.update_stock(&id, 100).await }));
    }
    for handle in updates {
        assert_eq!(handle.await.unwrap().unwrap().stock, 100);
    }

    let parts = service.list_parts(None).await.unwrap();
    assert_eq!(parts.len(), 50);
    assert!(parts.iter().all(|p| p.stock == 100));
    assert!(service.list_restock_alerts().await.unwrap().is_empty());

    drop(service);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_id_leaves_store_empty() {
    let system = InventorySystem::start(&config(false)).await.unwrap();
    let service = system.service();
    let ghost = PartId::new("missing");

    let err = service.update_stock(&ghost, 1).await.unwrap_err();
    assert_eq!(err, PartError::PartNotFound(ghost));
    assert!(service.list_parts(None).await.unwrap().is_empty());

    drop(service);
    system.shutdown().await.unwrap();
}
