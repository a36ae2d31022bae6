//! Dish API (`/Gerant_plat`)
//!
//! Price updates key the dish in the body (`PATCH /Gerant_plat`), not in the
//! path. Ingredient lines are managed through the `/Gerant_plat/ingredient`
//! association endpoints.

use async_trait::async_trait;
use serde_json::Value;
use shared::{
    Dish, DishForm, DishIngredientLink, DishIngredientUnlink, DishPriceUpdate, HealthAlert,
    Ingredient, PriceChange, RecordId,
};

use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::resource::{
    CreateResource, DeleteResource, ListResource, UpdateResource, fetch_list, fetch_one,
};

const PATH: &str = "Gerant_plat";
const INGREDIENT_PATH: &str = "Gerant_plat/ingredient";

pub struct DishApi<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> DishApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }
}

impl<H: HttpClient + 'static> DishApi<H> {
    /// Attach an ingredient with a quantity
    pub async fn add_ingredient(
        &self,
        dish_id: RecordId,
        ingredient_id: RecordId,
        quantity: i64,
    ) -> ClientResult<()> {
        let link = DishIngredientLink::new(dish_id, ingredient_id, quantity)?;
        let _: Value = self.http.post(INGREDIENT_PATH, &link).await?;
        tracing::info!(dish_id, ingredient_id, quantity, "Ingredient attached to dish");
        Ok(())
    }

    /// Change the quantity of an ingredient already on the dish
    pub async fn update_ingredient_quantity(
        &self,
        dish_id: RecordId,
        ingredient_id: RecordId,
        quantity: i64,
    ) -> ClientResult<()> {
        let link = DishIngredientLink::new(dish_id, ingredient_id, quantity)?;
        let _: Value = self.http.patch(INGREDIENT_PATH, &link).await?;
        tracing::info!(dish_id, ingredient_id, quantity, "Dish ingredient quantity updated");
        Ok(())
    }

    pub async fn remove_ingredient(
        &self,
        dish_id: RecordId,
        ingredient_id: RecordId,
    ) -> ClientResult<()> {
        let unlink = DishIngredientUnlink {
            dish_id,
            ingredient_id,
        };
        let _: Value = self.http.delete_with_body(PATH, &unlink).await?;
        tracing::info!(dish_id, ingredient_id, "Ingredient removed from dish");
        Ok(())
    }

    /// Ingredients used by a dish
    pub async fn ingredients(&self, dish_id: RecordId) -> ClientResult<Vec<Ingredient>> {
        fetch_list(
            &self.http,
            Self::NAME,
            &format!("ingredient/plat/{dish_id}"),
            "ingredients",
        )
        .await
    }

    /// Health alerts tagged on a dish
    pub async fn health_alerts(&self, dish_id: RecordId) -> ClientResult<Vec<HealthAlert>> {
        fetch_list(
            &self.http,
            Self::NAME,
            &format!("platmaladie/{dish_id}"),
            "maladies",
        )
        .await
    }
}

#[async_trait]
impl<H: HttpClient + 'static> ListResource for DishApi<H> {
    type Record = Dish;

    const NAME: &'static str = "dish";

    async fn list(&self) -> ClientResult<Vec<Dish>> {
        fetch_list(&self.http, Self::NAME, PATH, "plats").await
    }

    async fn get(&self, id: RecordId) -> ClientResult<Dish> {
        fetch_one(&self.http, &format!("{PATH}/{id}"), "plat").await
    }
}

#[async_trait]
impl<H: HttpClient + 'static> CreateResource for DishApi<H> {
    type Form = DishForm;
    type Created = Value;

    async fn create(&self, form: &DishForm) -> ClientResult<Value> {
        let payload = form.validate()?;
        let body: Value = self.http.post(PATH, &payload).await?;
        tracing::info!(name = %payload.name, price = %payload.price, "Dish created");
        Ok(body)
    }
}

#[async_trait]
impl<H: HttpClient + 'static> UpdateResource for DishApi<H> {
    type Update = PriceChange;

    async fn update(&self, id: RecordId, change: &PriceChange) -> ClientResult<()> {
        let payload = DishPriceUpdate {
            dish_id: id,
            price: change.validate()?,
        };
        let _: Value = self.http.patch(PATH, &payload).await?;
        tracing::info!(id, price = %payload.price, "Dish price updated");
        Ok(())
    }
}

#[async_trait]
impl<H: HttpClient + 'static> DeleteResource for DishApi<H> {
    async fn delete(&self, id: RecordId) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{PATH}/{id}")).await?;
        tracing::info!(id, "Dish deleted");
        Ok(())
    }
}
