use shared::lifecycle::DeliveryAction;
use shared::models::{CreateDeliveryRequest, Delivery};

use crate::{ClientResult, DonateWiseClient, HttpClient};

/// `deliveries/*`
pub struct DeliveriesApi<'a, H: HttpClient> {
    client: &'a DonateWiseClient<H>,
}

impl<'a, H: HttpClient> DeliveriesApi<'a, H> {
    pub(crate) fn new(client: &'a DonateWiseClient<H>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Delivery>> {
        self.client.get("deliveries").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Delivery> {
        self.client.get(&format!("deliveries/{}", id)).await
    }

    pub async fn by_center(&self, center_id: i64) -> ClientResult<Vec<Delivery>> {
        self.client.get(&format!("deliveries/center/{}", center_id)).await
    }

    /// Deliveries assigned to the logged-in driver
    pub async fn mine(&self) -> ClientResult<Vec<Delivery>> {
        self.client.get("deliveries/my").await
    }

    /// Assigned deliveries of the logged-in driver not yet picked up
    pub async fn mine_pending(&self) -> ClientResult<Vec<Delivery>> {
        self.client.get("deliveries/my/pending").await
    }

    pub async fn create(&self, request: &CreateDeliveryRequest) -> ClientResult<Delivery> {
        self.client.post("deliveries", request).await
    }

    pub async fn pickup(&self, id: i64) -> ClientResult<Delivery> {
        self.transition(id, DeliveryAction::Pickup).await
    }

    pub async fn in_transit(&self, id: i64) -> ClientResult<Delivery> {
        self.transition(id, DeliveryAction::Transit).await
    }

    pub async fn complete(&self, id: i64) -> ClientResult<Delivery> {
        self.transition(id, DeliveryAction::Complete).await
    }

    pub async fn cancel(&self, id: i64) -> ClientResult<Delivery> {
        self.transition(id, DeliveryAction::Cancel).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("deliveries/{}", id)).await
    }

    /// `PUT deliveries/{id}/{segment}` for a status-changing action.
    ///
    /// `Delete` has no segment and is routed to [`DeliveriesApi::delete`]'s
    /// endpoint, returning the record as it was.
    pub(crate) async fn transition(&self, id: i64, action: DeliveryAction) -> ClientResult<Delivery> {
        match action.path_segment() {
            Some(segment) => self.client.put_empty(&format!("deliveries/{}/{}", id, segment)).await,
            None => {
                let delivery = self.get(id).await?;
                self.delete(id).await?;
                Ok(delivery)
            }
        }
    }
}
