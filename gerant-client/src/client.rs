//! Gerant client facade

use crate::api::{DishApi, HealthAlertApi, IngredientApi, PromotionApi, ReservationApi, StaffApi};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::NetworkHttpClient;

/// Entry point handing out one resource client per entity.
///
/// All resource clients share the same connection pool.
#[derive(Debug, Clone)]
pub struct GerantClient {
    http: NetworkHttpClient,
}

impl GerantClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        tracing::debug!(base_url = http.base_url(), timeout = config.timeout, "Client ready");
        Ok(Self { http })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn health_alerts(&self) -> HealthAlertApi {
        HealthAlertApi::new(self.http.clone())
    }

    pub fn dishes(&self) -> DishApi {
        DishApi::new(self.http.clone())
    }

    pub fn ingredients(&self) -> IngredientApi {
        IngredientApi::new(self.http.clone())
    }

    pub fn promotions(&self) -> PromotionApi {
        PromotionApi::new(self.http.clone())
    }

    pub fn staff(&self) -> StaffApi {
        StaffApi::new(self.http.clone())
    }

    pub fn reservations(&self) -> ReservationApi {
        ReservationApi::new(self.http.clone())
    }
}
