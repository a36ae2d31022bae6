//! Gerant Client - HTTP client for the restaurant backend
//!
//! Resource clients for each managed entity, a list controller that keeps a
//! searchable local copy of a collection, and the console layout context.

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod controller;
pub mod envelope;
pub mod error;
pub mod http;
pub mod resource;

pub use api::{DishApi, HealthAlertApi, IngredientApi, PromotionApi, ReservationApi, StaffApi};
pub use client::GerantClient;
pub use config::ClientConfig;
pub use context::{ConsoleContext, ConsoleLayout, LayoutChange, Screen};
pub use controller::{ListController, ListState};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use resource::{CreateResource, DeleteResource, ListResource, UpdateResource};

// Re-export shared types for convenience
pub use shared;
