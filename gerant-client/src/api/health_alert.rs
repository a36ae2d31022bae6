//! Health alert API (`/maladie`)

use async_trait::async_trait;
use serde_json::Value;
use shared::{HealthAlert, HealthAlertForm, RecordId};

use crate::envelope::decode_one;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::resource::{CreateResource, DeleteResource, ListResource, fetch_list, fetch_one};

const PATH: &str = "maladie";

pub struct HealthAlertApi<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> HealthAlertApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }
}

#[async_trait]
impl<H: HttpClient + 'static> ListResource for HealthAlertApi<H> {
    type Record = HealthAlert;

    const NAME: &'static str = "health_alert";

    async fn list(&self) -> ClientResult<Vec<HealthAlert>> {
        fetch_list(&self.http, Self::NAME, PATH, "maladies").await
    }

    async fn get(&self, id: RecordId) -> ClientResult<HealthAlert> {
        fetch_one(&self.http, &format!("{PATH}/{id}"), "maladie").await
    }
}

#[async_trait]
impl<H: HttpClient + 'static> CreateResource for HealthAlertApi<H> {
    type Form = HealthAlertForm;
    type Created = HealthAlert;

    async fn create(&self, form: &HealthAlertForm) -> ClientResult<HealthAlert> {
        let payload = form.validate()?;
        let body: Value = self.http.post(PATH, &payload).await?;
        let created: HealthAlert = decode_one(body, "maladie")?;
        tracing::info!(id = created.id, name = %created.name, "Health alert created");
        Ok(created)
    }
}

#[async_trait]
impl<H: HttpClient + 'static> DeleteResource for HealthAlertApi<H> {
    async fn delete(&self, id: RecordId) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{PATH}/{id}")).await?;
        tracing::info!(id, "Health alert deleted");
        Ok(())
    }
}
