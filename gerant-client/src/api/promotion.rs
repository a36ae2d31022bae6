//! Promotion API (`/Gerant_offre`)

use async_trait::async_trait;
use serde_json::Value;
use shared::{Promotion, PromotionDishLink, PromotionForm, RecordId, ValidationError};

use crate::envelope::decode_one;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::resource::{
    CreateResource, DeleteResource, ListResource, UpdateResource, fetch_list, fetch_one,
};

const PATH: &str = "Gerant_offre";
const DISH_LINK_PATH: &str = "Gerant_offre_inplat";

pub struct PromotionApi<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> PromotionApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }
}

impl<H: HttpClient + 'static> PromotionApi<H> {
    pub async fn attach_to_dish(&self, promotion_id: RecordId, dish_id: RecordId) -> ClientResult<()> {
        let link = PromotionDishLink {
            promotion_id,
            dish_id,
        };
        let _: Value = self.http.post(DISH_LINK_PATH, &link).await?;
        tracing::debug!(promotion_id, dish_id, "Promotion attached to dish");
        Ok(())
    }

    /// Create a promotion and attach it to each dish in order.
    ///
    /// Stops at the first failed attachment; the promotion and any earlier
    /// attachments stay on the backend.
    pub async fn create_for_dishes(
        &self,
        form: &PromotionForm,
        dish_ids: &[RecordId],
    ) -> ClientResult<Promotion> {
        if dish_ids.is_empty() {
            return Err(ValidationError::empty("dish").into());
        }
        let mut promotion = self.create(form).await?;
        for &dish_id in dish_ids {
            self.attach_to_dish(promotion.id, dish_id).await?;
            promotion.dish_ids.push(dish_id);
        }
        tracing::info!(
            id = promotion.id,
            dishes = dish_ids.len(),
            "Promotion attached to dishes"
        );
        Ok(promotion)
    }
}

#[async_trait]
impl<H: HttpClient + 'static> ListResource for PromotionApi<H> {
    type Record = Promotion;

    const NAME: &'static str = "promotion";

    async fn list(&self) -> ClientResult<Vec<Promotion>> {
        fetch_list(&self.http, Self::NAME, PATH, "offres").await
    }

    async fn get(&self, id: RecordId) -> ClientResult<Promotion> {
        fetch_one(&self.http, &format!("{PATH}/{id}"), "offre").await
    }
}

#[async_trait]
impl<H: HttpClient + 'static> CreateResource for PromotionApi<H> {
    type Form = PromotionForm;
    type Created = Promotion;

    async fn create(&self, form: &PromotionForm) -> ClientResult<Promotion> {
        let payload = form.validate()?;
        let body: Value = self.http.post(PATH, &payload).await?;
        let created: Promotion = decode_one(body, "offre")?;
        tracing::info!(id = created.id, reduction = payload.reduction, "Promotion created");
        Ok(created)
    }
}

#[async_trait]
impl<H: HttpClient + 'static> UpdateResource for PromotionApi<H> {
    type Update = PromotionForm;

    async fn update(&self, id: RecordId, form: &PromotionForm) -> ClientResult<()> {
        let payload = form.validate()?;
        let _: Value = self.http.patch(&format!("{PATH}/{id}"), &payload).await?;
        tracing::info!(id, reduction = payload.reduction, "Promotion updated");
        Ok(())
    }
}

#[async_trait]
impl<H: HttpClient + 'static> DeleteResource for PromotionApi<H> {
    async fn delete(&self, id: RecordId) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("{PATH}/{id}")).await?;
        tracing::info!(id, "Promotion deleted");
        Ok(())
    }
}
