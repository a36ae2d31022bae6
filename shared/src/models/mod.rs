//! Data models
//!
//! Records mirror the backend's JSON rows. Field names on the wire are the
//! backend's and are mapped one by one with `#[serde(rename)]`; nothing is
//! guessed from the shape of a response.

pub mod dish;
pub mod health_alert;
pub mod ingredient;
pub mod promotion;
pub mod reservation;
pub mod staff;

// Re-exports
pub use dish::*;
pub use health_alert::*;
pub use ingredient::*;
pub use promotion::*;
pub use reservation::*;
pub use staff::*;
