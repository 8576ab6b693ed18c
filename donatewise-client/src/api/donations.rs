use shared::models::{Donation, DonationCreate, DonationStatus};

use crate::{ClientResult, DonateWiseClient, HttpClient};

/// `donations/*`
///
/// Raw endpoints; the guarded versions of the status changes live in
/// [`crate::workflow`].
pub struct DonationsApi<'a, H: HttpClient> {
    client: &'a DonateWiseClient<H>,
}

impl<'a, H: HttpClient> DonationsApi<'a, H> {
    pub(crate) fn new(client: &'a DonateWiseClient<H>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Donation>> {
        self.client.get("donations").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Donation> {
        self.client.get(&format!("donations/{}", id)).await
    }

    pub async fn by_donor(&self, donor_id: i64) -> ClientResult<Vec<Donation>> {
        self.client.get(&format!("donations/donor/{}", donor_id)).await
    }

    pub async fn by_status(&self, status: DonationStatus) -> ClientResult<Vec<Donation>> {
        self.client.get(&format!("donations/status/{}", status)).await
    }

    /// Donations of the logged-in donor
    pub async fn mine(&self) -> ClientResult<Vec<Donation>> {
        self.client.get("donations/my").await
    }

    /// Pending donations visible to the logged-in staff's center
    pub async fn center_pending(&self) -> ClientResult<Vec<Donation>> {
        self.client.get("donations/center/pending").await
    }

    /// Every donation of the logged-in staff's center
    pub async fn center_all(&self) -> ClientResult<Vec<Donation>> {
        self.client.get("donations/center/all").await
    }

    pub async fn create_for_donor(&self, donor_id: i64, donation: &DonationCreate) -> ClientResult<Donation> {
        self.client.post(&format!("donations/donor/{}", donor_id), donation).await
    }

    /// Create a donation for the logged-in donor, profile resolved server-side
    pub async fn create_mine(&self, donation: &DonationCreate) -> ClientResult<Donation> {
        self.client.post("donations/my", donation).await
    }

    /// Body is the bare status string, e.g. `"COLLECTED"`
    pub async fn update_status(&self, id: i64, status: DonationStatus) -> ClientResult<Donation> {
        self.client.put(&format!("donations/{}/status", id), &status).await
    }

    /// Accept into the logged-in staff's center (assignment and status in one call)
    pub async fn accept(&self, id: i64) -> ClientResult<Donation> {
        self.client.put_empty(&format!("donations/{}/accept", id)).await
    }

    pub async fn reject(&self, id: i64) -> ClientResult<Donation> {
        self.client.put_empty(&format!("donations/{}/reject", id)).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("donations/{}", id)).await
    }
}
