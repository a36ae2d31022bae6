//! Ingredient (stock) API (`/ingredient`)

use async_trait::async_trait;
use serde_json::Value;
use shared::{Ingredient, IngredientForm, RecordId, StockAdjustment};

use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::resource::{
    CreateResource, DeleteResource, ListResource, UpdateResource, fetch_list, fetch_one,
};

const PATH: &str = "ingredient";

pub struct IngredientApi<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> IngredientApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }
}

#[async_trait]
impl<H: HttpClient + 'static> ListResource for IngredientApi<H> {
    type Record = Ingredient;

    const NAME: &'static str = "ingredient";

    async fn list(&self) -> ClientResult<Vec<Ingredient>> {
        fetch_list(&self.http, Self::NAME, PATH, "ingredients").await
    }

    async fn get(&self, id: RecordId) -> ClientResult<Ingredient> {
        fetch_one(&self.http, &format!("{PATH}/{id}"), "ingredient").await
    }
}

#[async_trait]
impl<H: HttpClient + 'static> CreateResource for IngredientApi<H> {
    type Form = IngredientForm;
    type Created = Value;

    async fn create(&self, form: &IngredientForm) -> ClientResult<Value> {
        let payload = form.validate()?;
        let body: Value = self.http.post(PATH, &payload).await?;
        tracing::info!(name = %payload.name, quantity = payload.quantity, "Ingredient created");
        Ok(body)
    }
}

#[async_trait]
impl<H: HttpClient + 'static> UpdateResource for IngredientApi<H> {
    type Update = StockAdjustment;

    async fn update(&self, id: RecordId, adjustment: &StockAdjustment) -> ClientResult<()> {
        let payload = adjustment.validate()?;
        let _: Value = self.http.patch(&format!("{PATH}/{id}"), &payload).await?;
        tracing::info!(id, quantity = payload.quantity, "Stock level updated");
        Ok(())
    }
}

#[async_trait]
impl<H: HttpClient + 'static> DeleteResource for IngredientApi<H> {
    async fn delete(&self, id: RecordId) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{PATH}/{id}")).await?;
        tracing::info!(id, "Ingredient deleted");
        Ok(())
    }
}
