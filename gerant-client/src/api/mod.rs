//! Per-entity resource clients

mod dish;
mod health_alert;
mod ingredient;
mod promotion;
mod reservation;
mod staff;

pub use dish::DishApi;
pub use health_alert::HealthAlertApi;
pub use ingredient::IngredientApi;
pub use promotion::PromotionApi;
pub use reservation::ReservationApi;
pub use staff::StaffApi;
