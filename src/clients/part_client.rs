//! # Part Client
//!
//! High-level API for the part actor. It wraps a `ResourceClient<VehiclePart>` and
//! turns framework failures back into [`PartError`] values.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{NewPart, PartId, StockUpdate, VehiclePart};
use crate::part_actor::PartError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the part actor.
#[derive(Clone)]
pub struct PartClient {
    inner: ResourceClient<VehiclePart>,
}

impl PartClient {
    pub fn new(inner: ResourceClient<VehiclePart>) -> Self {
        Self { inner }
    }

    /// Stores a new part and returns it with its assigned ID.
    #[instrument(skip(self))]
    pub async fn create_part(&self, params: NewPart) -> Result<VehiclePart, PartError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every stored part, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_parts(&self) -> Result<Vec<VehiclePart>, PartError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    /// Replaces the stock count of part `id`.
    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: PartId, stock: i64) -> Result<VehiclePart, PartError> {
        debug!("Sending request");
        self.inner
            .update(id, StockUpdate { stock })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<VehiclePart> for PartClient {
    type Error = PartError;

    fn inner(&self) -> &ResourceClient<VehiclePart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => PartError::PartNotFound(PartId::new(id)),
            // Entity hooks fail with PartError; anything else is a broken store.
            FrameworkError::EntityError(inner) => match inner.downcast::<PartError>() {
                Ok(err) => *err,
                Err(other) => PartError::StoreUnavailable(other.to_string()),
            },
            other => PartError::StoreUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, expect_list, expect_update};

    fn oil_filter(id: &str, stock: i64) -> VehiclePart {
        VehiclePart::new(
            PartId::new(id),
            NewPart::new("Oil Filter", "Engine", "Toyota Camry 2020", stock, 20),
        )
    }

    #[tokio::test]
    async fn test_create_part_returns_stored_record() {
        let (client, mut receiver) = create_mock_client::<VehiclePart>(10);
        let part_client = PartClient::new(client);

        let task = tokio::spawn(async move {
            part_client
                .create_part(NewPart::new("Oil Filter", "Engine", "Toyota Camry 2020", 5, 20))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Oil Filter");
        responder
            .send(Ok(VehiclePart::new(PartId::new("O1"), params)))
            .unwrap();

        let part = task.await.unwrap().unwrap();
        assert_eq!(part.id, PartId::new("O1"));
        assert_eq!(part.stock, 5);
    }

    #[tokio::test]
    async fn test_set_stock_sends_absolute_value() {
        let (client, mut receiver) = create_mock_client::<VehiclePart>(10);
        let part_client = PartClient::new(client);

        let task = tokio::spawn(async move { part_client.set_stock(PartId::new("O1"), 25).await });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, PartId::new("O1"));
        assert_eq!(update, StockUpdate { stock: 25 });
        responder.send(Ok(oil_filter("O1", 25))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().stock, 25);
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered_as_part_errors() {
        let (client, mut receiver) = create_mock_client::<VehiclePart>(10);
        let part_client = PartClient::new(client);

        let task = tokio::spawn(async move { part_client.set_stock(PartId::new("O1"), -2).await });

        let (_, _, responder) = expect_update(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                PartError::NegativeQuantity {
                    field: "stock",
                    value: -2,
                },
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(PartError::NegativeQuantity {
                field: "stock",
                value: -2
            })
        );
    }

    #[tokio::test]
    async fn test_not_found_maps_to_part_not_found() {
        let (client, mut receiver) = create_mock_client::<VehiclePart>(10);
        let part_client = PartClient::new(client);

        let task = tokio::spawn(async move { part_client.set_stock(PartId::new("ghost"), 1).await });

        let (id, _, responder) = expect_update(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(PartError::PartNotFound(PartId::new("ghost")))
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_is_store_unavailable() {
        let (client, mut receiver) = create_mock_client::<VehiclePart>(10);
        let part_client = PartClient::new(client);

        let task = tokio::spawn(async move { part_client.list_parts().await });

        let responder = expect_list(&mut receiver).await.unwrap();
        drop(responder);

        assert!(matches!(
            task.await.unwrap(),
            Err(PartError::StoreUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_closed_actor_is_store_unavailable() {
        let (client, receiver) = create_mock_client::<VehiclePart>(10);
        drop(receiver);

        let err = PartClient::new(client).list_parts().await.unwrap_err();
        assert_eq!(err, PartError::StoreUnavailable("Actor closed".to_string()));
    }
}
