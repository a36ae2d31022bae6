//! Staff API (`/Personnel`)
//!
//! Sign-up goes through `/inscription-personnel`; the only editable field is
//! the assigned table.

use async_trait::async_trait;
use serde_json::Value;
use shared::{RecordId, Staff, StaffForm, TableAssignment};

use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::resource::{
    CreateResource, DeleteResource, ListResource, UpdateResource, fetch_list, fetch_one,
};

const PATH: &str = "Personnel";
const SIGN_UP_PATH: &str = "inscription-personnel";

pub struct StaffApi<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> StaffApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }
}

#[async_trait]
impl<H: HttpClient + 'static> ListResource for StaffApi<H> {
    type Record = Staff;

    const NAME: &'static str = "staff";

    async fn list(&self) -> ClientResult<Vec<Staff>> {
        fetch_list(&self.http, Self::NAME, PATH, "personnels").await
    }

    async fn get(&self, id: RecordId) -> ClientResult<Staff> {
        fetch_one(&self.http, &format!("{PATH}/{id}"), "perso").await
    }
}

#[async_trait]
impl<H: HttpClient + 'static> CreateResource for StaffApi<H> {
    type Form = StaffForm;
    type Created = Value;

    async fn create(&self, form: &StaffForm) -> ClientResult<Value> {
        let payload = form.validate()?;
        let body: Value = self.http.post(SIGN_UP_PATH, &payload).await?;
        tracing::info!(
            first_name = %payload.first_name,
            last_name = %payload.last_name,
            job_title = %payload.job_title,
            "Staff member registered"
        );
        Ok(body)
    }
}

#[async_trait]
impl<H: HttpClient + 'static> UpdateResource for StaffApi<H> {
    type Update = TableAssignment;

    async fn update(&self, id: RecordId, assignment: &TableAssignment) -> ClientResult<()> {
        let _: Value = self.http.patch(&format!("{PATH}/{id}"), assignment).await?;
        tracing::info!(id, table_id = assignment.table_id, "Table assigned");
        Ok(())
    }
}

#[async_trait]
impl<H: HttpClient + 'static> DeleteResource for StaffApi<H> {
    async fn delete(&self, id: RecordId) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{PATH}/{id}")).await?;
        tracing::info!(id, "Staff member removed");
        Ok(())
    }
}
